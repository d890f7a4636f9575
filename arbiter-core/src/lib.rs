//! # arbiter-core
//!
//! Core traits for the Arbiter strategy selection framework.
//!
//! This crate has minimal dependencies and is designed to be imported by
//! code that contributes handlers without needing the registries and
//! selectors of `arbiter-std`.
//!
//! # Building Blocks
//!
//! ## Input ([`Message`])
//!
//! Any thread-safe, `'static` value a selector can be asked about.
//!
//! ## Strategy ([`Handler`], [`PriorityHandler`])
//!
//! A handler answers two questions: "do you support this input?" and
//! "execute". A [`PriorityHandler`] additionally carries a fixed rank used to
//! break ties between several supporting handlers (lower wins).
//!
//! ## Selection ([`Selector`], [`select_first`], [`select_by_priority`])
//!
//! A selector picks at most one handler for an input and invokes it.
//! The two free functions hold the whole selection algorithm and work over
//! any borrowed collection of handlers; the selectors in `arbiter-std` own a
//! registry and delegate to them.
//!
//! # Error Types
//!
//! Selection never fails. Errors only arise while assembling registries:
//!
//! - [`ArbiterError`] - Top-level error type
//! - [`RegistryError`] - Registry assembly errors

#![deny(clippy::wildcard_imports)]
#![warn(missing_docs)]

mod dispatch;
mod error;
mod handler;
mod message;
mod select;
mod selector;

// Re-exports
pub use dispatch::Dispatch;
pub use error::{ArbiterError, BoxError, RegistryError};
pub use handler::{Handler, Priority, PriorityHandler, WithPriority};
pub use message::Message;
pub use select::{select_by_priority, select_first};
pub use selector::Selector;
