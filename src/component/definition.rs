//! Route component definitions.

use futures::FutureExt;
use futures::future::{BoxFuture, Shared};
use std::fmt;
use std::sync::Arc;

use super::options::ComponentOptions;

/// Future produced by a lazy component loader.
///
/// Shared so an in-flight load can be handed to several consumers. This crate
/// never polls it; resolution belongs to the rendering pipeline.
pub type SharedComponentFuture = Shared<BoxFuture<'static, Arc<ComponentOptions>>>;

/// Factory producing a component's options on demand.
pub type ComponentLoader = Arc<dyn Fn() -> SharedComponentFuture + Send + Sync>;

/// Wraps already-loaded options as a shared future, e.g. for loaders that
/// resolve eagerly.
pub fn resolved_component_future(options: Arc<ComponentOptions>) -> SharedComponentFuture {
	futures::future::ready(options).boxed().shared()
}

/// An async component wrapper pairing a loader with wrapper-level options.
///
/// Route components do not need this wrapping: the router loads lazy
/// components itself, so a plain loader is enough. The variant exists because
/// application code reuses view-layer components, and extraction has to
/// handle it gracefully.
pub struct AsyncComponent {
	loader: ComponentLoader,
	options: Arc<ComponentOptions>,
}

impl AsyncComponent {
	/// Creates a wrapper with empty wrapper-level options.
	pub fn new(loader: ComponentLoader) -> Self {
		Self {
			loader,
			options: Arc::new(ComponentOptions::default()),
		}
	}

	/// Creates a wrapper carrying its own options.
	pub fn with_options(loader: ComponentLoader, options: ComponentOptions) -> Self {
		Self {
			loader,
			options: Arc::new(options),
		}
	}

	/// Returns the wrapped loader.
	pub fn loader(&self) -> &ComponentLoader {
		&self.loader
	}

	/// Returns the wrapper-level options.
	pub fn options(&self) -> &Arc<ComponentOptions> {
		&self.options
	}
}

impl fmt::Debug for AsyncComponent {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("AsyncComponent")
			.field("options", &self.options)
			.finish()
	}
}

/// A raw component definition attached to a route record slot.
#[derive(Clone)]
pub enum RouteComponent {
	/// Plain component options.
	Options(Arc<ComponentOptions>),
	/// A factory that loads the component on demand.
	Lazy(ComponentLoader),
	/// A load already in flight where a factory was expected.
	///
	/// Authoring mistake; extraction repairs it by wrapping the future in a
	/// factory.
	Pending(SharedComponentFuture),
	/// An async component wrapper.
	Async(Arc<AsyncComponent>),
}

impl RouteComponent {
	/// Convenience constructor for the plain-options variant.
	pub fn options(options: ComponentOptions) -> Self {
		Self::Options(Arc::new(options))
	}

	/// Convenience constructor for the lazy variant.
	pub fn lazy<F>(loader: F) -> Self
	where
		F: Fn() -> SharedComponentFuture + Send + Sync + 'static,
	{
		Self::Lazy(Arc::new(loader))
	}
}

impl fmt::Debug for RouteComponent {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::Options(options) => f.debug_tuple("Options").field(options).finish(),
			Self::Lazy(_) => f.debug_tuple("Lazy").field(&"<loader>").finish(),
			Self::Pending(_) => f.debug_tuple("Pending").field(&"<future>").finish(),
			Self::Async(wrapper) => f.debug_tuple("Async").field(wrapper).finish(),
		}
	}
}
