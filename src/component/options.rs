//! Component options and statically declared route callbacks.

use std::fmt;
use std::sync::Arc;

use super::instance::ComponentInstance;

/// Handler declared statically on component options, run when the router
/// re-resolves to the record rendering the component.
///
/// Invoked with the rendered instance for the declaring slot when one
/// exists; slots that have not rendered yet (e.g. an unresolved async
/// component) yield `None`.
pub type DuplicateHandler = Arc<dyn Fn(Option<&ComponentInstance>) + Send + Sync>;

/// Options describing a route component.
///
/// ## Example
///
/// ```
/// use chemin::component::ComponentOptions;
///
/// let options = ComponentOptions::named("UserDetail").on_duplicate(|_instance| {
///     // re-fetch for the new params
/// });
/// assert!(options.duplicate_handler().is_some());
/// ```
#[derive(Clone, Default)]
pub struct ComponentOptions {
	name: Option<String>,
	on_duplicate: Option<DuplicateHandler>,
	original: Option<Arc<ComponentOptions>>,
}

impl ComponentOptions {
	/// Creates empty options.
	pub fn new() -> Self {
		Self::default()
	}

	/// Creates options carrying a component name for debugging.
	pub fn named(name: impl Into<String>) -> Self {
		Self {
			name: Some(name.into()),
			..Self::default()
		}
	}

	/// Declares the duplicate-navigation handler.
	pub fn on_duplicate<F>(mut self, handler: F) -> Self
	where
		F: Fn(Option<&ComponentInstance>) + Send + Sync + 'static,
	{
		self.on_duplicate = Some(Arc::new(handler));
		self
	}

	/// Embeds the options a class-based authoring wrapper was generated from.
	///
	/// When present, callback extraction reads the embedded options instead
	/// of the wrapper's own fields.
	pub fn with_original(mut self, original: Arc<ComponentOptions>) -> Self {
		self.original = Some(original);
		self
	}

	/// Returns the component name.
	pub fn name(&self) -> Option<&str> {
		self.name.as_deref()
	}

	/// Returns the declared duplicate-navigation handler.
	pub fn duplicate_handler(&self) -> Option<&DuplicateHandler> {
		self.on_duplicate.as_ref()
	}

	/// Returns the embedded original options.
	pub fn original(&self) -> Option<&Arc<ComponentOptions>> {
		self.original.as_ref()
	}
}

impl fmt::Debug for ComponentOptions {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("ComponentOptions")
			.field("name", &self.name)
			.field("has_duplicate_handler", &self.on_duplicate.is_some())
			.field("has_original", &self.original.is_some())
			.finish()
	}
}
