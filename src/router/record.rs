//! Route records and their duplicate-callback registries.

use parking_lot::RwLock;
use std::collections::{BTreeMap, HashMap};
use std::fmt;
use std::sync::Arc;

use crate::callback::DuplicateCallback;
use crate::component::{ComponentInstance, RouteComponent};

/// Normalizes a record path.
///
/// Restores a missing leading slash, collapses duplicate slashes, and strips
/// a trailing slash; the root stays `/`. Record identity is the normalized
/// path, so equivalent spellings resolve to the same record.
pub fn normalize_path(path: &str) -> String {
	let mut normalized = String::with_capacity(path.len() + 1);
	for segment in path.split('/').filter(|segment| !segment.is_empty()) {
		normalized.push('/');
		normalized.push_str(segment);
	}
	if normalized.is_empty() {
		normalized.push('/');
	}
	normalized
}

/// Insertion-ordered set of duplicate-navigation callbacks.
///
/// Membership is keyed by callback identity: adding a handle already present
/// or deleting one that is absent is a no-op. All members are invoked
/// unconditionally on dispatch, so the set semantics exist solely to keep one
/// callback from running twice after a redundant registration.
#[derive(Default)]
pub struct CallbackRegistry {
	entries: RwLock<Vec<DuplicateCallback>>,
}

impl CallbackRegistry {
	/// Creates an empty registry.
	pub fn new() -> Self {
		Self::default()
	}

	/// Inserts a callback; no-op when an identical handle is present.
	pub fn add(&self, callback: DuplicateCallback) {
		let mut entries = self.entries.write();
		if !entries.iter().any(|entry| entry.ptr_eq(&callback)) {
			entries.push(callback);
		}
	}

	/// Removes a callback; no-op when absent.
	pub fn delete(&self, callback: &DuplicateCallback) {
		self.entries.write().retain(|entry| !entry.ptr_eq(callback));
	}

	/// Whether an identical handle is registered.
	pub fn contains(&self, callback: &DuplicateCallback) -> bool {
		self.entries
			.read()
			.iter()
			.any(|entry| entry.ptr_eq(callback))
	}

	/// Number of registered callbacks.
	pub fn len(&self) -> usize {
		self.entries.read().len()
	}

	/// Whether the registry is empty.
	pub fn is_empty(&self) -> bool {
		self.entries.read().is_empty()
	}

	/// Current membership, for the dispatcher to enumerate.
	///
	/// Mutations made while iterating the snapshot do not affect it.
	pub fn snapshot(&self) -> Vec<DuplicateCallback> {
		self.entries.read().clone()
	}
}

impl fmt::Debug for CallbackRegistry {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("CallbackRegistry")
			.field("len", &self.len())
			.finish()
	}
}

/// A node in the resolved route configuration tree.
///
/// Created by the matcher when routes are configured and persisting for the
/// life of the router. Owns the component definitions per named slot, the
/// rendered instances the renderer reports back, and one duplicate-callback
/// registry whose membership churns with view lifecycles.
///
/// ## Example
///
/// ```
/// use chemin::component::{ComponentOptions, RouteComponent};
/// use chemin::router::RouteRecord;
///
/// let record = RouteRecord::new("/users/{id}")
///     .with_component("default", RouteComponent::options(ComponentOptions::named("UserDetail")));
/// assert_eq!(record.path(), "/users/{id}");
/// ```
pub struct RouteRecord {
	path: String,
	components: BTreeMap<String, Option<RouteComponent>>,
	children: Vec<Arc<RouteRecord>>,
	instances: RwLock<HashMap<String, Arc<ComponentInstance>>>,
	duplicate_callbacks: CallbackRegistry,
}

impl RouteRecord {
	/// Creates a record for `path` (normalized) with no components.
	pub fn new(path: &str) -> Self {
		Self {
			path: normalize_path(path),
			components: BTreeMap::new(),
			children: Vec::new(),
			instances: RwLock::new(HashMap::new()),
			duplicate_callbacks: CallbackRegistry::new(),
		}
	}

	/// Adds a component definition under a named slot.
	pub fn with_component(mut self, slot: impl Into<String>, component: RouteComponent) -> Self {
		self.components.insert(slot.into(), Some(component));
		self
	}

	/// Declares a slot whose component definition could not be resolved.
	///
	/// Extraction treats such slots as fatal configuration errors; this
	/// models configs assembled from external sources where a lookup missed.
	pub fn with_unresolved_component(mut self, slot: impl Into<String>) -> Self {
		self.components.insert(slot.into(), None);
		self
	}

	/// Adds a child record.
	pub fn with_child(mut self, child: Arc<RouteRecord>) -> Self {
		self.children.push(child);
		self
	}

	/// Returns the normalized path identifying this record.
	pub fn path(&self) -> &str {
		&self.path
	}

	/// Returns the slot → definition map, in deterministic slot order.
	pub fn components(&self) -> &BTreeMap<String, Option<RouteComponent>> {
		&self.components
	}

	/// Returns the child records.
	pub fn children(&self) -> &[Arc<RouteRecord>] {
		&self.children
	}

	/// Returns this record's duplicate-callback registry.
	pub fn duplicate_callbacks(&self) -> &CallbackRegistry {
		&self.duplicate_callbacks
	}

	/// Records the rendered instance for a slot. Called by the renderer on
	/// mount.
	pub fn set_instance(&self, slot: impl Into<String>, instance: Arc<ComponentInstance>) {
		self.instances.write().insert(slot.into(), instance);
	}

	/// Clears the rendered instance for a slot. Called by the renderer on
	/// unmount.
	pub fn clear_instance(&self, slot: &str) -> Option<Arc<ComponentInstance>> {
		self.instances.write().remove(slot)
	}

	/// Returns the rendered instance for a slot, when the slot has rendered.
	pub fn instance(&self, slot: &str) -> Option<Arc<ComponentInstance>> {
		self.instances.read().get(slot).cloned()
	}
}

impl fmt::Debug for RouteRecord {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("RouteRecord")
			.field("path", &self.path)
			.field("slots", &self.components.keys().collect::<Vec<_>>())
			.field("children", &self.children.len())
			.field("registered_callbacks", &self.duplicate_callbacks.len())
			.finish()
	}
}
