//! # Strategy Layer (Handler)
//!
//! A handler is one selectable strategy. It decides whether it is eligible
//! for an input (its support-predicate) and performs a side-effecting action
//! once it has been chosen.
//!
//! # Design Philosophy
//!
//! - **Stateless**: Handlers are immutable once registered; the same input
//!   always yields the same `supports` answer.
//! - **Self-contained**: The action takes no arguments and returns nothing.
//!   Anything observable (printing, metrics) happens inside it.
//! - **Ranked on demand**: Only handlers registered with a priority selector
//!   need a [`PriorityHandler::priority`].

use crate::message::Message;
use std::sync::Arc;

/// Rank of a [`PriorityHandler`]. Lower values take precedence.
pub type Priority = i32;

/// A selectable strategy for inputs of type `In`.
///
/// # Example
///
/// ```rust,ignore
/// struct Even;
///
/// impl Handler<i64> for Even {
///     fn supports(&self, input: &i64) -> bool {
///         input % 2 == 0
///     }
///
///     fn execute(&self) {
///         println!("even");
///     }
/// }
/// ```
#[diagnostic::on_unimplemented(
    message = "`{Self}` is not a `Handler` for `{In}`",
    label = "missing `Handler<{In}>` implementation",
    note = "Handlers must implement `supports` and `execute` for the input type `{In}`."
)]
pub trait Handler<In: Message>: Send + Sync + 'static {
    /// Returns `true` if this handler is eligible for `input`.
    fn supports(&self, input: &In) -> bool;

    /// Performs the handler's action.
    fn execute(&self);

    /// Identifying name used in logs and dispatch outcomes.
    ///
    /// Defaults to the implementing type's name.
    fn name(&self) -> &str {
        std::any::type_name::<Self>()
    }

    /// Attaches a priority, making this handler usable by priority selectors.
    ///
    /// If the handler already has a priority of its own, this one replaces it.
    fn with_priority(self, priority: Priority) -> WithPriority<Self>
    where
        Self: Sized,
    {
        WithPriority {
            inner: self,
            priority,
        }
    }
}

/// A [`Handler`] with a fixed rank for priority-based selection.
///
/// When several handlers support the same input, the one with the lowest
/// priority wins. Equal priorities fall back to registration order.
pub trait PriorityHandler<In: Message>: Handler<In> {
    /// The handler's rank (lower = higher precedence).
    fn priority(&self) -> Priority;
}

/// A handler ranked with an explicitly assigned priority.
///
/// Created by [`Handler::with_priority`].
#[derive(Debug, Clone)]
pub struct WithPriority<H> {
    inner: H,
    priority: Priority,
}

impl<H> WithPriority<H> {
    /// Wrap `inner` with `priority`.
    pub fn new(inner: H, priority: Priority) -> Self {
        Self { inner, priority }
    }

    /// Get the wrapped handler.
    pub fn inner(&self) -> &H {
        &self.inner
    }

    /// Unwrap the handler, discarding the priority.
    pub fn into_inner(self) -> H {
        self.inner
    }
}

impl<In, H> Handler<In> for WithPriority<H>
where
    In: Message,
    H: Handler<In>,
{
    fn supports(&self, input: &In) -> bool {
        self.inner.supports(input)
    }

    fn execute(&self) {
        self.inner.execute()
    }

    fn name(&self) -> &str {
        self.inner.name()
    }
}

impl<In, H> PriorityHandler<In> for WithPriority<H>
where
    In: Message,
    H: Handler<In>,
{
    fn priority(&self) -> Priority {
        self.priority
    }
}

impl<In, H> Handler<In> for Box<H>
where
    In: Message,
    H: Handler<In> + ?Sized,
{
    fn supports(&self, input: &In) -> bool {
        (**self).supports(input)
    }

    fn execute(&self) {
        (**self).execute()
    }

    fn name(&self) -> &str {
        (**self).name()
    }
}

impl<In, H> Handler<In> for Arc<H>
where
    In: Message,
    H: Handler<In> + ?Sized,
{
    fn supports(&self, input: &In) -> bool {
        (**self).supports(input)
    }

    fn execute(&self) {
        (**self).execute()
    }

    fn name(&self) -> &str {
        (**self).name()
    }
}

impl<In, H> PriorityHandler<In> for Box<H>
where
    In: Message,
    H: PriorityHandler<In> + ?Sized,
{
    fn priority(&self) -> Priority {
        (**self).priority()
    }
}

impl<In, H> PriorityHandler<In> for Arc<H>
where
    In: Message,
    H: PriorityHandler<In> + ?Sized,
{
    fn priority(&self) -> Priority {
        (**self).priority()
    }
}
