//! Route records and duplicate-navigation callbacks.
//!
//! This module is the crate's core: per-record callback registries kept in
//! sync with view lifecycles ([`on_route_update_duplicate`]), and extraction
//! of statically declared handlers from a resolved match chain
//! ([`CallbackExtractor`]).
//!
//! The router's own dispatch logic (deciding that a navigation re-resolved
//! to the currently active records) lives outside this crate. It consumes
//! the combined callback set via
//! [`CallbackExtractor::duplicate_callbacks_for`] and runs it with
//! [`invoke_all`].

mod binder;
mod extractor;
mod record;

pub use binder::{DuplicateSubscription, SetupContext, on_route_update_duplicate};
pub use extractor::{
	CallbackExtractor, ComponentShape, ExtractError, classify, invoke_all,
};
pub use record::{CallbackRegistry, RouteRecord, normalize_path};
