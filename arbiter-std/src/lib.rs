//! # arbiter-std
//!
//! Standard implementations for the Arbiter strategy selection framework.
//!
//! This crate provides:
//! - **Registries**: [`Registry`], [`RegistryBuilder`]
//! - **Selectors**: [`PrioritySelector`] (lowest priority wins),
//!   [`Router`] (first match wins)
//! - **Closure handlers**: [`FnHandler`], [`fn_handler`]
//! - **Observability**: [`Traced`]
//! - **Testing utilities**: [`testing`]

#![deny(clippy::wildcard_imports)]
#![warn(missing_docs)]

// Re-export core traits
pub use arbiter_core;

pub mod handlers;
pub mod priority;
pub mod registry;
pub mod router;
pub mod testing;
pub mod traced;

pub use handlers::{FnHandler, fn_handler};
pub use priority::PrioritySelector;
pub use registry::{HandlerRegistry, PriorityRegistry, Registry, RegistryBuilder};
pub use router::Router;
pub use traced::Traced;
