//! Minimal reactive references.
//!
//! The hosting view wrapper injects the currently active matched route record
//! into component setup as a reactive reference; [`Signal`] is the cell type
//! carrying that reference. Reads return clones, writes replace the value,
//! and clones of a signal share the same cell.

use parking_lot::RwLock;
use std::fmt;
use std::sync::Arc;

/// A shared, clonable cell holding the latest value of a reactive reference.
pub struct Signal<T> {
	value: Arc<RwLock<T>>,
}

impl<T: Clone> Signal<T> {
	/// Creates a signal holding `value`.
	pub fn new(value: T) -> Self {
		Self {
			value: Arc::new(RwLock::new(value)),
		}
	}

	/// Returns a clone of the current value.
	pub fn get(&self) -> T {
		self.value.read().clone()
	}

	/// Replaces the current value.
	pub fn set(&self, value: T) {
		*self.value.write() = value;
	}

	/// Mutates the current value in place.
	pub fn update<F>(&self, f: F)
	where
		F: FnOnce(&mut T),
	{
		f(&mut self.value.write());
	}
}

impl<T> Clone for Signal<T> {
	fn clone(&self) -> Self {
		Self {
			value: Arc::clone(&self.value),
		}
	}
}

impl<T: Clone + Default> Default for Signal<T> {
	fn default() -> Self {
		Self::new(T::default())
	}
}

impl<T: fmt::Debug> fmt::Debug for Signal<T> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_tuple("Signal").field(&*self.value.read()).finish()
	}
}
