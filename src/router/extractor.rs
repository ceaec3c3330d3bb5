//! Extraction of statically declared duplicate-navigation handlers.
//!
//! Given a resolved match chain, [`CallbackExtractor::extract`] walks every
//! record and named slot, classifies the component definition once, and
//! harvests any declared duplicate handler bound to the instance currently
//! rendered for that slot. Broken configuration fails fast; common authoring
//! mistakes are repaired or warned about without failing.

use parking_lot::Mutex;
use std::collections::HashSet;
use std::sync::Arc;
use thiserror::Error;

use super::record::RouteRecord;
use crate::callback::DuplicateCallback;
use crate::component::{
	ComponentInstance, ComponentOptions, DuplicateHandler, RouteComponent,
};
use crate::warn_log;

/// Shape of a route component definition, computed once before any field
/// access.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ComponentShape {
	/// Plain component options.
	PlainOptions,
	/// A loader factory; resolves elsewhere and carries nothing static yet.
	Factory,
	/// A bare future supplied where a factory was expected.
	PromiseLike,
	/// An async component wrapper.
	AsyncLoader,
	/// No usable definition.
	Invalid,
}

impl ComponentShape {
	/// Whether definitions of this shape can carry statically declared route
	/// callbacks.
	pub fn is_route_component(self) -> bool {
		matches!(self, Self::PlainOptions | Self::AsyncLoader)
	}
}

/// Classifies a slot's raw definition.
pub fn classify(definition: Option<&RouteComponent>) -> ComponentShape {
	match definition {
		None => ComponentShape::Invalid,
		Some(RouteComponent::Options(_)) => ComponentShape::PlainOptions,
		Some(RouteComponent::Lazy(_)) => ComponentShape::Factory,
		Some(RouteComponent::Pending(_)) => ComponentShape::PromiseLike,
		Some(RouteComponent::Async(_)) => ComponentShape::AsyncLoader,
	}
}

/// Errors raised while extracting callbacks from a matched record list.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ExtractError {
	/// A slot references no usable component definition.
	///
	/// Treated as a programming error: the first render should fail instead
	/// of silently routing to nothing, so extraction aborts for the whole
	/// batch.
	#[error("invalid component definition for slot {slot:?} in record {path:?}")]
	InvalidComponentDefinition {
		/// Normalized path of the offending record.
		path: String,
		/// Name of the offending slot.
		slot: String,
	},
}

/// Harvests duplicate-navigation handlers declared on matched route
/// components.
///
/// Owns the warn-once bookkeeping for async wrappers, keyed by wrapper
/// identity, so caller-owned definitions are never mutated and each wrapper
/// warns at most once per extractor.
#[derive(Default)]
pub struct CallbackExtractor {
	warned_async: Mutex<HashSet<usize>>,
}

impl CallbackExtractor {
	/// Creates an extractor with empty warn-once bookkeeping.
	pub fn new() -> Self {
		Self::default()
	}

	/// Walks `matched` ancestor-first and returns the declared handlers,
	/// each bound to the instance rendered for the slot that declared it.
	///
	/// Output order follows the record order, then slot order within a
	/// record; callers must not rely on more than determinism for a given
	/// matched list.
	pub fn extract(
		&self,
		matched: &[Arc<RouteRecord>],
	) -> Result<Vec<DuplicateCallback>, ExtractError> {
		let mut callbacks = Vec::new();
		for record in matched {
			if record.components().is_empty() && record.children().is_empty() {
				warn_log!(
					"record {:?} has neither components nor children; nothing will render for it",
					record.path()
				);
				continue;
			}
			for (slot, definition) in record.components() {
				let Some(definition) = definition else {
					return Err(ExtractError::InvalidComponentDefinition {
						path: record.path().to_string(),
						slot: slot.clone(),
					});
				};

				let repaired = self.repair(record, slot, definition);
				let definition = repaired.as_ref().unwrap_or(definition);

				let shape = classify(Some(definition));
				if !shape.is_route_component() {
					// lazy loads resolve elsewhere; nothing static to read yet
					continue;
				}

				let Some(options) = effective_options(definition) else {
					continue;
				};
				if let Some(handler) = options.duplicate_handler() {
					let instance = record.instance(slot);
					callbacks.push(bind_handler(handler.clone(), instance));
				}
			}
		}
		Ok(callbacks)
	}

	/// Combined callback set for a duplicate navigation: every matched
	/// record's registry plus the statically extracted handlers,
	/// deduplicated by callback identity.
	pub fn duplicate_callbacks_for(
		&self,
		matched: &[Arc<RouteRecord>],
	) -> Result<Vec<DuplicateCallback>, ExtractError> {
		let mut combined: Vec<DuplicateCallback> = Vec::new();
		for record in matched {
			for callback in record.duplicate_callbacks().snapshot() {
				push_unique(&mut combined, callback);
			}
		}
		for callback in self.extract(matched)? {
			push_unique(&mut combined, callback);
		}
		Ok(combined)
	}

	/// Dev-mode handling of common authoring mistakes, per slot.
	///
	/// Returns a replacement definition when one is needed: a bare pending
	/// future is rewrapped as a factory so extraction proceeds as if a
	/// factory had been supplied. Async wrappers are flagged in the side
	/// table and warned about once; the definition itself stays untouched.
	#[cfg_attr(not(debug_assertions), allow(unused_variables))]
	fn repair(
		&self,
		record: &RouteRecord,
		slot: &str,
		definition: &RouteComponent,
	) -> Option<RouteComponent> {
		match definition {
			RouteComponent::Pending(future) => {
				warn_log!(
					"component for slot {:?} in record {:?} is a bare future; supply a loader function returning the future instead",
					slot,
					record.path()
				);
				let future = future.clone();
				Some(RouteComponent::Lazy(Arc::new(move || future.clone())))
			}
			RouteComponent::Async(wrapper) => {
				let key = Arc::as_ptr(wrapper) as usize;
				if self.warned_async.lock().insert(key) {
					warn_log!(
						"slot {:?} in record {:?} uses an async component wrapper; route components are loaded lazily by the router itself, so a plain loader is enough",
						slot,
						record.path()
					);
				}
				None
			}
			RouteComponent::Options(_) | RouteComponent::Lazy(_) => None,
		}
	}
}

impl std::fmt::Debug for CallbackExtractor {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("CallbackExtractor")
			.field("flagged_async_wrappers", &self.warned_async.lock().len())
			.finish()
	}
}

/// Invokes every callback in order.
///
/// The caller decides when a navigation is a duplicate; all members of the
/// combined set are invoked unconditionally.
pub fn invoke_all(callbacks: &[DuplicateCallback]) {
	for callback in callbacks {
		callback.call();
	}
}

/// Resolves the effective options for a shaped definition, preferring the
/// original options embedded by a class-based authoring wrapper.
fn effective_options(definition: &RouteComponent) -> Option<Arc<ComponentOptions>> {
	let base = match definition {
		RouteComponent::Options(options) => Arc::clone(options),
		RouteComponent::Async(wrapper) => Arc::clone(wrapper.options()),
		RouteComponent::Lazy(_) | RouteComponent::Pending(_) => return None,
	};
	Some(base.original().cloned().unwrap_or(base))
}

/// Binds a declared handler to the instance rendered for its slot.
///
/// An absent instance is permitted (e.g. a not-yet-mounted async slot); the
/// handler then runs without a receiver.
fn bind_handler(
	handler: DuplicateHandler,
	instance: Option<Arc<ComponentInstance>>,
) -> DuplicateCallback {
	DuplicateCallback::new(move || handler(instance.as_deref()))
}

fn push_unique(combined: &mut Vec<DuplicateCallback>, callback: DuplicateCallback) {
	if !combined.iter().any(|existing| existing.ptr_eq(&callback)) {
		combined.push(callback);
	}
}
