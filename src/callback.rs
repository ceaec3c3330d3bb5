//! Callback handles for duplicate-navigation dispatch.
//!
//! A [`DuplicateCallback`] wraps a zero-argument function in an `Arc`, making
//! it cheaply cloneable while keeping a stable identity: clones of one handle
//! compare equal under [`DuplicateCallback::ptr_eq`], independently created
//! handles never do. Registries key their membership on that identity, which
//! is what makes redundant registrations idempotent.

use std::fmt;
use std::sync::Arc;

/// A cheaply cloneable, zero-argument callback handle.
///
/// ## Example
///
/// ```
/// use chemin::DuplicateCallback;
///
/// let callback = DuplicateCallback::new(|| {
///     // refresh the view for the re-entered route
/// });
/// callback.call();
/// ```
pub struct DuplicateCallback {
	inner: Arc<dyn Fn() + Send + Sync + 'static>,
}

impl DuplicateCallback {
	/// Creates a new callback handle from a function or closure.
	pub fn new<F>(f: F) -> Self
	where
		F: Fn() + Send + Sync + 'static,
	{
		Self { inner: Arc::new(f) }
	}

	/// Invokes the callback.
	pub fn call(&self) {
		(self.inner)()
	}

	/// Whether `self` and `other` are clones of the same handle.
	pub fn ptr_eq(&self, other: &Self) -> bool {
		Arc::ptr_eq(&self.inner, &other.inner)
	}
}

impl Clone for DuplicateCallback {
	fn clone(&self) -> Self {
		Self {
			inner: Arc::clone(&self.inner),
		}
	}
}

impl fmt::Debug for DuplicateCallback {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("DuplicateCallback")
			.field("inner", &"<function>")
			.finish()
	}
}
