//! Component model for route rendering.
//!
//! Route records reference components three ways: as plain
//! [`ComponentOptions`], as a lazy loader producing the options on demand, or
//! as an async wrapper around such a loader. [`RouteComponent`] tags those
//! variants so downstream code classifies a definition once instead of
//! probing its shape repeatedly.
//!
//! A [`ComponentInstance`] is the live counterpart: the rendered view unit
//! for one record slot, carrying the lifecycle hooks the hosting renderer
//! drives on mount, keep-alive transitions, and unmount.

mod definition;
mod instance;
mod options;

pub use definition::{
	AsyncComponent, ComponentLoader, RouteComponent, SharedComponentFuture,
	resolved_component_future,
};
pub use instance::{ComponentInstance, HookId, LifecycleStage};
pub use options::{ComponentOptions, DuplicateHandler};
