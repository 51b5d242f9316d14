//! Runtime layer for paxboard
//!
//! Foundational abstractions for a TUI client with centralized state
//! management, following a Redux/Elm-inspired architecture:
//!
//! - **Action**: events that describe state changes
//! - **EffectStore**: state container; the reducer returns state changes
//!   plus declarative effects
//! - **Component**: pure UI elements that render based on props
//! - **Hub**: publish/subscribe channel for data-change notifications,
//!   decoupling the entity client from mounted UI subscribers
//! - **TaskManager**: async task lifecycle for HTTP calls
//! - **EffectRuntime**: the event/action/render loop
//!
//! # Async pattern
//!
//! Applications use a two-phase action pattern: an intent action (e.g.
//! `RosterFetch`) makes the reducer declare an effect; the effect handler
//! spawns a task; the task resolves to a result action (`RosterDidLoad`,
//! `RosterDidError`) that is dispatched like any other. No async in the
//! reducer or components - side effects are isolated in tasks.

pub mod action;
pub mod component;
pub mod event;
pub mod hub;
pub mod runtime;
pub mod store;
pub mod tasks;
pub mod testing;

pub use action::Action;
pub use component::Component;
pub use event::{process_raw_event, spawn_event_poller, EventKind, RawEvent};
pub use hub::{ChangeKind, Hub, HubKey, SubscriptionId};
pub use runtime::{EffectContext, EffectRuntime, EventOutcome, PollerConfig};
pub use store::{
    DispatchResult, EffectReducer, EffectStore, EffectStoreWithMiddleware, LoggingMiddleware,
    Middleware, NoopMiddleware,
};
pub use tasks::{TaskKey, TaskManager};
pub use testing::{
    buffer_to_string_plain, char_key, ctrl_key, key, parse_key_string, RenderHarness, TestHarness,
};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::action::Action;
    pub use crate::component::Component;
    pub use crate::event::{process_raw_event, spawn_event_poller, EventKind, RawEvent};
    pub use crate::hub::{ChangeKind, Hub, HubKey, SubscriptionId};
    pub use crate::runtime::{EffectContext, EffectRuntime, EventOutcome, PollerConfig};
    pub use crate::store::{
        DispatchResult, EffectReducer, EffectStore, EffectStoreWithMiddleware, LoggingMiddleware,
        Middleware, NoopMiddleware,
    };
    pub use crate::tasks::{TaskKey, TaskManager};
}
