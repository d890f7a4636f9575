//! # arbiter - Predicate-Driven Strategy Selection
//!
//! `arbiter` picks at most one handler for an input and runs it. Handlers
//! declare which inputs they support; a selector decides among the
//! supporting ones:
//!
//! - [`PrioritySelector`]: lowest [`PriorityHandler::priority`] wins, ties go
//!   to the handler registered first.
//! - [`Router`]: the first supporting handler in registration order wins.
//!
//! Nothing matching is not an error: the call is a no-op and reports
//! [`Dispatch::Unmatched`].
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use arbiter::prelude::*;
//!
//! #[derive(Debug, Message)]
//! struct Job { size: u64 }
//!
//! struct Small;
//! impl Handler<Job> for Small {
//!     fn supports(&self, job: &Job) -> bool { job.size < 10 }
//!     fn execute(&self) { println!("small job") }
//! }
//!
//! let router = Router::builder().register(Small).build();
//! router.execute(&Job { size: 3 });
//! ```
//!
//! The [`policy`] module holds a complete worked example.

#![deny(clippy::wildcard_imports)]
#![warn(missing_docs)]

// Lets `#[derive(Message)]` expand to `::arbiter::Message` inside this crate.
extern crate self as arbiter;

pub use arbiter_core::{
    // Errors
    ArbiterError,
    BoxError,
    // Outcome
    Dispatch,
    // Handler
    Handler,
    // Message
    Message,
    Priority,
    PriorityHandler,
    RegistryError,
    // Selection
    Selector,
    WithPriority,
    select_by_priority,
    select_first,
};

pub use arbiter_std::{
    FnHandler, HandlerRegistry, PriorityRegistry, PrioritySelector, Registry, RegistryBuilder,
    Router, Traced, fn_handler,
    priority::PrioritySelectorBuilder,
    router::RouterBuilder,
};

pub use arbiter_macros::Message;

pub mod policy;

/// Testing utilities.
pub mod testing {
    #![allow(clippy::wildcard_imports)]
    pub use arbiter_std::testing::*;
}

/// Prelude module - common imports for Arbiter.
///
/// # Usage
///
/// ```rust,ignore
/// use arbiter::prelude::*;
/// ```
pub mod prelude {
    pub use crate::{
        Dispatch, Handler, Message, Priority, PriorityHandler, PrioritySelector, Router,
        Selector, fn_handler,
    };
}
