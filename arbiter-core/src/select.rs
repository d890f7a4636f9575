//! The selection algorithm.
//!
//! Both functions borrow the candidate collection and never allocate, so they
//! can be called against a registry, a slice, or any iterator of handler
//! references. Neither function runs the selected handler.

use crate::{
    handler::{Handler, PriorityHandler},
    message::Message,
};

/// Returns the first handler, in iteration order, that supports `input`.
///
/// Returns `None` for an empty collection or when nothing matches.
pub fn select_first<'a, In, H, I>(input: &In, handlers: I) -> Option<&'a H>
where
    In: Message,
    H: Handler<In> + ?Sized + 'a,
    I: IntoIterator<Item = &'a H>,
{
    handlers.into_iter().find(|handler| handler.supports(input))
}

/// Returns the supporting handler with the lowest priority.
///
/// Among supporting handlers with equal priority the earliest in iteration
/// order wins, which is the same result as a stable sort by priority
/// followed by taking the head.
///
/// Returns `None` for an empty collection or when nothing matches.
pub fn select_by_priority<'a, In, H, I>(input: &In, handlers: I) -> Option<&'a H>
where
    In: Message,
    H: PriorityHandler<In> + ?Sized + 'a,
    I: IntoIterator<Item = &'a H>,
{
    handlers
        .into_iter()
        .filter(|handler| handler.supports(input))
        .min_by_key(|handler| handler.priority())
}
