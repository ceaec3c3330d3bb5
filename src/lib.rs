//! chemin: duplicate-navigation callbacks for client-side routers
//!
//! When a navigation re-resolves to the *same* route record (a link to the
//! currently active route, or a parameter-only change that keeps the matched
//! record), views often still want to react by re-fetching data or resetting
//! scroll state. This crate implements that feature for a client-side
//! router: per-record callback registries whose membership tracks view
//! lifecycles, and an extraction pass harvesting handlers declared statically
//! on route components.
//!
//! ## Architecture
//!
//! - [`router`]: route records, the per-record [`CallbackRegistry`](router::CallbackRegistry),
//!   the setup-time registration entry point, and the extraction/dispatch
//!   surface
//! - [`component`]: route component definitions, options with the declared
//!   duplicate handler, and live instances with lifecycle hooks
//! - [`callback`]: the cloneable callback handle with identity semantics
//! - [`reactive`]: the minimal signal cell the hosting view wrapper injects
//! - [`logging`]: development-only diagnostics with a replaceable sink
//!
//! Three lifetimes meet here and are reconciled without leaking listeners:
//! the route record (owned by the router's matcher), the mounted view
//! instance, and the callback itself. A registered callback is in its
//! record's registry exactly while the registering view is mounted and
//! active.
//!
//! Navigation resolution, history integration, and rendering are external
//! collaborators: this crate consumes a resolved match chain plus the view's
//! lifecycle signals, and produces the callback set to invoke.
//!
//! ## Example
//!
//! ```
//! use chemin::component::{ComponentInstance, ComponentOptions, RouteComponent};
//! use chemin::reactive::Signal;
//! use chemin::router::{CallbackExtractor, RouteRecord, SetupContext, invoke_all};
//! use chemin::{DuplicateCallback, on_route_update_duplicate};
//! use std::sync::Arc;
//!
//! // The matcher configured a record; the renderer mounted a view for it.
//! let record = Arc::new(RouteRecord::new("/users/{id}").with_component(
//!     "default",
//!     RouteComponent::options(ComponentOptions::named("UserDetail")),
//! ));
//! let instance = Arc::new(ComponentInstance::new("UserDetail"));
//! record.set_instance("default", Arc::clone(&instance));
//!
//! // Inside the component's setup, register a duplicate-navigation callback.
//! let ctx = SetupContext::routed(instance, Signal::new(Some(Arc::clone(&record))));
//! on_route_update_duplicate(&ctx, DuplicateCallback::new(|| {
//!     // same record matched again: refresh
//! }));
//!
//! // The dispatch logic detected a duplicate navigation for this chain.
//! let extractor = CallbackExtractor::new();
//! let callbacks = extractor.duplicate_callbacks_for(&[record]).unwrap();
//! invoke_all(&callbacks);
//! ```

pub mod callback;
pub mod component;
pub mod logging;
pub mod reactive;
pub mod router;

pub use callback::DuplicateCallback;
pub use component::{ComponentInstance, ComponentOptions, LifecycleStage, RouteComponent};
pub use reactive::Signal;
pub use router::{
	CallbackExtractor, DuplicateSubscription, ExtractError, RouteRecord, SetupContext,
	on_route_update_duplicate,
};
