//! Integration tests for duplicate-navigation callbacks
//!
//! These tests drive the crate the way a hosting router would:
//! 1. Registration during component setup and registry membership across the
//!    full mount → deactivate → reactivate → unmount lifecycle
//! 2. Extraction of statically declared handlers from a matched record chain
//! 3. Combined dispatch (registry ∪ extracted) on a duplicate navigation
//! 4. Graceful degradation for invalid call contexts and broken configuration

use chemin::component::{ComponentInstance, ComponentOptions, RouteComponent};
use chemin::logging::{reset_warn_handler, set_warn_handler};
use chemin::reactive::Signal;
use chemin::router::{CallbackExtractor, ExtractError, RouteRecord, SetupContext, invoke_all};
use chemin::{DuplicateCallback, LifecycleStage, on_route_update_duplicate};
use serial_test::serial;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

fn counting_callback(hits: &Arc<AtomicUsize>) -> DuplicateCallback {
	let hits = Arc::clone(hits);
	DuplicateCallback::new(move || {
		hits.fetch_add(1, Ordering::SeqCst);
	})
}

/// Mounts a view for `record` and registers `callback` from its setup phase.
fn mount_and_register(
	record: &Arc<RouteRecord>,
	slot: &str,
	name: &str,
	callback: DuplicateCallback,
) -> Arc<ComponentInstance> {
	let instance = Arc::new(ComponentInstance::new(name));
	record.set_instance(slot, Arc::clone(&instance));

	let ctx = SetupContext::routed(
		Arc::clone(&instance),
		Signal::new(Some(Arc::clone(record))),
	);
	on_route_update_duplicate(&ctx, callback);
	instance
}

/// Success Criterion 1: membership tracks the full keep-alive lifecycle
#[test]
fn test_registry_membership_across_lifecycle() {
	let record = Arc::new(RouteRecord::new("/users/{id}").with_component(
		"default",
		RouteComponent::options(ComponentOptions::named("UserDetail")),
	));
	let callback = DuplicateCallback::new(|| {});
	let instance = mount_and_register(&record, "default", "UserDetail", callback.clone());

	// [mount, deactivate)
	assert!(record.duplicate_callbacks().contains(&callback));

	instance.emit(LifecycleStage::Deactivated);
	assert!(!record.duplicate_callbacks().contains(&callback));

	// [reactivate, unmount)
	instance.emit(LifecycleStage::Activated);
	assert!(record.duplicate_callbacks().contains(&callback));

	instance.emit(LifecycleStage::Unmounted);
	let _ = record.clear_instance("default");
	assert!(!record.duplicate_callbacks().contains(&callback));
}

/// Success Criterion 1: several keep-alive round trips stay consistent
#[test]
fn test_repeated_keep_alive_round_trips() {
	let record = Arc::new(RouteRecord::new("/archive").with_component(
		"default",
		RouteComponent::options(ComponentOptions::named("Archive")),
	));
	let callback = DuplicateCallback::new(|| {});
	let instance = mount_and_register(&record, "default", "Archive", callback.clone());

	for _ in 0..3 {
		instance.emit(LifecycleStage::Deactivated);
		assert!(record.duplicate_callbacks().is_empty());
		instance.emit(LifecycleStage::Activated);
		assert_eq!(record.duplicate_callbacks().len(), 1);
	}
}

/// Success Criterion 1: two views on different records stay independent
#[test]
fn test_sibling_records_do_not_interfere() {
	let users = Arc::new(RouteRecord::new("/users").with_component(
		"default",
		RouteComponent::options(ComponentOptions::named("Users")),
	));
	let posts = Arc::new(RouteRecord::new("/posts").with_component(
		"default",
		RouteComponent::options(ComponentOptions::named("Posts")),
	));

	let users_cb = DuplicateCallback::new(|| {});
	let posts_cb = DuplicateCallback::new(|| {});
	let users_view = mount_and_register(&users, "default", "Users", users_cb.clone());
	let _posts_view = mount_and_register(&posts, "default", "Posts", posts_cb.clone());

	users_view.emit(LifecycleStage::Deactivated);

	assert!(!users.duplicate_callbacks().contains(&users_cb));
	assert!(posts.duplicate_callbacks().contains(&posts_cb));
}

/// Success Criterion 2: extraction binds handlers to the rendered instance
#[test]
fn test_extraction_binds_declared_handlers() {
	let invoked = Arc::new(Mutex::new(Vec::new()));

	let plain = Arc::new(RouteRecord::new("/").with_component(
		"default",
		RouteComponent::options(ComponentOptions::named("Layout")),
	));
	let declaring = Arc::new(RouteRecord::new("/users/{id}").with_component(
		"default",
		RouteComponent::options(ComponentOptions::named("UserDetail").on_duplicate({
			let invoked = Arc::clone(&invoked);
			move |instance| {
				invoked
					.lock()
					.unwrap()
					.push(instance.map(|i| i.name().to_string()));
			}
		})),
	));
	declaring.set_instance("default", Arc::new(ComponentInstance::new("UserDetail#7")));

	let extractor = CallbackExtractor::new();
	let callbacks = extractor
		.extract(&[Arc::clone(&plain), Arc::clone(&declaring)])
		.unwrap();

	assert_eq!(callbacks.len(), 1);
	invoke_all(&callbacks);
	assert_eq!(
		invoked.lock().unwrap().as_slice(),
		[Some("UserDetail#7".to_string())]
	);
}

/// Success Criterion 2: broken configuration fails the whole batch
#[test]
fn test_extraction_fails_fast_on_unresolved_slot() {
	let broken = Arc::new(RouteRecord::new("/broken").with_unresolved_component("default"));

	let result = CallbackExtractor::new().extract(&[broken]);

	assert!(matches!(
		result,
		Err(ExtractError::InvalidComponentDefinition { .. })
	));
}

/// Success Criterion 3: a duplicate navigation runs registry and extracted
/// callbacks exactly once each
#[test]
fn test_combined_dispatch_on_duplicate_navigation() {
	let registered_hits = Arc::new(AtomicUsize::new(0));
	let declared_hits = Arc::new(AtomicUsize::new(0));

	let record = Arc::new(RouteRecord::new("/feed").with_component(
		"default",
		RouteComponent::options(ComponentOptions::named("Feed").on_duplicate({
			let declared_hits = Arc::clone(&declared_hits);
			move |_| {
				declared_hits.fetch_add(1, Ordering::SeqCst);
			}
		})),
	));
	let _view = mount_and_register(
		&record,
		"default",
		"Feed",
		counting_callback(&registered_hits),
	);

	// the router's dispatch logic decided this navigation was a duplicate
	let extractor = CallbackExtractor::new();
	let callbacks = extractor.duplicate_callbacks_for(&[record]).unwrap();
	invoke_all(&callbacks);

	assert_eq!(registered_hits.load(Ordering::SeqCst), 1);
	assert_eq!(declared_hits.load(Ordering::SeqCst), 1);
}

/// Success Criterion 3: a deactivated view's callback sits out dispatch
#[test]
fn test_deactivated_view_misses_dispatch() {
	let hits = Arc::new(AtomicUsize::new(0));
	let record = Arc::new(RouteRecord::new("/feed").with_component(
		"default",
		RouteComponent::options(ComponentOptions::named("Feed")),
	));
	let view = mount_and_register(&record, "default", "Feed", counting_callback(&hits));

	view.emit(LifecycleStage::Deactivated);

	let extractor = CallbackExtractor::new();
	let callbacks = extractor
		.duplicate_callbacks_for(&[Arc::clone(&record)])
		.unwrap();
	invoke_all(&callbacks);
	assert_eq!(hits.load(Ordering::SeqCst), 0);

	view.emit(LifecycleStage::Activated);
	let callbacks = extractor.duplicate_callbacks_for(&[record]).unwrap();
	invoke_all(&callbacks);
	assert_eq!(hits.load(Ordering::SeqCst), 1);
}

/// Success Criterion 4: registration outside setup degrades to a warning
#[test]
#[serial(warn_sink)]
fn test_out_of_context_registration_warns_and_noops() {
	let captured = Arc::new(Mutex::new(Vec::new()));
	set_warn_handler({
		let captured = Arc::clone(&captured);
		move |message| captured.lock().unwrap().push(message.to_string())
	});

	let record = Arc::new(RouteRecord::new("/users"));
	let subscription =
		on_route_update_duplicate(&SetupContext::detached(), DuplicateCallback::new(|| {}));

	reset_warn_handler();
	assert!(subscription.is_none());
	assert!(record.duplicate_callbacks().is_empty());
	assert_eq!(captured.lock().unwrap().len(), 1);
}

/// Success Criterion 4: host-managed disposal ends the registration early
#[test]
fn test_host_disposal_before_unmount() {
	let record = Arc::new(RouteRecord::new("/modal").with_component(
		"default",
		RouteComponent::options(ComponentOptions::named("Modal")),
	));
	let instance = Arc::new(ComponentInstance::new("Modal"));
	record.set_instance("default", Arc::clone(&instance));

	let ctx = SetupContext::routed(
		Arc::clone(&instance),
		Signal::new(Some(Arc::clone(&record))),
	);
	let callback = DuplicateCallback::new(|| {});
	let subscription = on_route_update_duplicate(&ctx, callback.clone()).unwrap();

	subscription.dispose();

	instance.emit(LifecycleStage::Activated);
	assert!(record.duplicate_callbacks().is_empty());
}
