//! Registration of duplicate-navigation callbacks during component setup.
//!
//! [`on_route_update_duplicate`] is the entry point component authors call
//! while their view is being constructed. The ambient state a host framework
//! would look up implicitly (the instance under construction and the
//! injected active-record reference) is passed explicitly via
//! [`SetupContext`], which keeps registration deterministic and testable
//! without a live renderer.

use std::fmt;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use super::record::RouteRecord;
use crate::callback::DuplicateCallback;
use crate::component::{ComponentInstance, HookId, LifecycleStage};
use crate::reactive::Signal;
use crate::warn_log;

/// Ambient state of a component's setup phase, passed explicitly.
///
/// The hosting view wrapper injects the matched-record signal for every
/// component rendered inside a routed subtree. Components constructed outside
/// any routing boundary carry an instance but no signal; code running outside
/// setup entirely carries neither.
#[derive(Clone, Default)]
pub struct SetupContext {
	instance: Option<Arc<ComponentInstance>>,
	matched_record: Option<Signal<Option<Arc<RouteRecord>>>>,
}

impl SetupContext {
	/// Context for a component under construction inside a routed subtree.
	pub fn routed(
		instance: Arc<ComponentInstance>,
		matched_record: Signal<Option<Arc<RouteRecord>>>,
	) -> Self {
		Self {
			instance: Some(instance),
			matched_record: Some(matched_record),
		}
	}

	/// Context for a component under construction outside any routed subtree.
	pub fn unrouted(instance: Arc<ComponentInstance>) -> Self {
		Self {
			instance: Some(instance),
			matched_record: None,
		}
	}

	/// Context with no component construction in progress.
	pub fn detached() -> Self {
		Self::default()
	}

	/// Returns the instance under construction.
	pub fn instance(&self) -> Option<&Arc<ComponentInstance>> {
		self.instance.as_ref()
	}

	/// Returns the injected active-record reference.
	pub fn matched_record(&self) -> Option<&Signal<Option<Arc<RouteRecord>>>> {
		self.matched_record.as_ref()
	}
}

impl fmt::Debug for SetupContext {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("SetupContext")
			.field("instance", &self.instance.as_ref().map(|i| i.name()))
			.field("has_matched_record", &self.matched_record.is_some())
			.finish()
	}
}

/// Registers `callback` to run when the router re-resolves to the record
/// currently rendering this component.
///
/// Callable only while a view's setup is executing. The callback joins the
/// record's registry immediately (covering the initial mount) and lifecycle
/// hooks keep the membership in sync from then on: removed on deactivation
/// and unmount, re-added on activation.
///
/// Invalid call contexts degrade to a no-op with a development-mode warning
/// instead of failing: application code stays resilient to being called from
/// the wrong place while the mistake stays loud during development. `None` is
/// returned in those cases.
pub fn on_route_update_duplicate(
	ctx: &SetupContext,
	callback: DuplicateCallback,
) -> Option<DuplicateSubscription> {
	let Some(instance) = ctx.instance() else {
		warn_log!(
			"on_route_update_duplicate() must be called at the top of a component's setup; no instance is under construction"
		);
		return None;
	};

	let Some(record) = ctx.matched_record().and_then(|signal| signal.get()) else {
		warn_log!(
			"no active route record was found when calling on_route_update_duplicate(); make sure the component is rendered inside a router outlet"
		);
		return None;
	};

	Some(register_callback(record, Arc::clone(instance), callback))
}

fn register_callback(
	record: Arc<RouteRecord>,
	instance: Arc<ComponentInstance>,
	callback: DuplicateCallback,
) -> DuplicateSubscription {
	record.duplicate_callbacks().add(callback.clone());

	let deactivated_hook = instance.add_hook(LifecycleStage::Deactivated, {
		let record = Arc::clone(&record);
		let callback = callback.clone();
		move || record.duplicate_callbacks().delete(&callback)
	});
	let unmounted_hook = instance.add_hook(LifecycleStage::Unmounted, {
		let record = Arc::clone(&record);
		let callback = callback.clone();
		move || record.duplicate_callbacks().delete(&callback)
	});
	let activated_hook = instance.add_hook(LifecycleStage::Activated, {
		let record = Arc::clone(&record);
		let callback = callback.clone();
		move || record.duplicate_callbacks().add(callback.clone())
	});

	DuplicateSubscription {
		record,
		instance,
		callback,
		hook_ids: [deactivated_hook, unmounted_hook, activated_hook],
		disposed: AtomicBool::new(false),
	}
}

/// Handle for one registration made by [`on_route_update_duplicate`].
///
/// The host's lifecycle management calls [`DuplicateSubscription::dispose`]
/// to detach the installed hooks and drop the callback from the registry.
/// Dropping the subscription does NOT dispose it; the installed hooks keep
/// the registry in sync for as long as the instance lives.
pub struct DuplicateSubscription {
	record: Arc<RouteRecord>,
	instance: Arc<ComponentInstance>,
	callback: DuplicateCallback,
	hook_ids: [HookId; 3],
	disposed: AtomicBool,
}

impl DuplicateSubscription {
	/// Detaches the lifecycle hooks and removes the callback from the
	/// record's registry. Idempotent.
	pub fn dispose(&self) {
		if self.disposed.swap(true, Ordering::SeqCst) {
			return;
		}
		for id in self.hook_ids {
			self.instance.remove_hook(id);
		}
		self.record.duplicate_callbacks().delete(&self.callback);
	}

	/// Whether the subscription has been disposed.
	pub fn is_disposed(&self) -> bool {
		self.disposed.load(Ordering::SeqCst)
	}

	/// The record this registration targets.
	pub fn record(&self) -> &Arc<RouteRecord> {
		&self.record
	}
}

impl fmt::Debug for DuplicateSubscription {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("DuplicateSubscription")
			.field("record", &self.record.path())
			.field("instance", &self.instance.name())
			.field("disposed", &self.is_disposed())
			.finish()
	}
}
