//! # Selection Layer (Selector)
//!
//! A Selector owns (or borrows) a collection of handlers and, for a given
//! input, picks at most one of them. From outside it is a single call:
//! hand over an input, at most one action runs.
//!
//! # Roles
//!
//! - **Selection**: [`Selector::select`] finds the handler without running it.
//! - **Invocation**: [`Selector::execute`] selects and runs the handler's
//!   action, reporting what happened as a [`Dispatch`].

use crate::{dispatch::Dispatch, handler::Handler, message::Message};

/// Picks at most one handler for an input.
///
/// Implementations must be pure with respect to their handler collection:
/// the same input against the same selector always yields the same handler.
#[diagnostic::on_unimplemented(
    message = "`{Self}` cannot select handlers for `{In}`",
    label = "missing `Selector` implementation",
    note = "Implement `Selector<{In}>` to choose a handler for this input type."
)]
pub trait Selector<In: Message>: Send + Sync {
    /// The handler type this selector chooses from.
    type Candidate: Handler<In> + ?Sized;

    /// Returns the handler chosen for `input`, or `None` if nothing supports it.
    fn select(&self, input: &In) -> Option<&Self::Candidate>;

    /// Selects a handler for `input` and runs its action.
    ///
    /// When nothing supports the input this is a no-op returning
    /// [`Dispatch::Unmatched`].
    fn execute(&self, input: &In) -> Dispatch<'_> {
        match self.select(input) {
            Some(handler) => {
                handler.execute();
                Dispatch::Executed {
                    handler: handler.name(),
                }
            }
            None => Dispatch::Unmatched,
        }
    }
}

impl<In, S> Selector<In> for &S
where
    In: Message,
    S: Selector<In> + ?Sized,
{
    type Candidate = S::Candidate;

    fn select(&self, input: &In) -> Option<&Self::Candidate> {
        (**self).select(input)
    }

    fn execute(&self, input: &In) -> Dispatch<'_> {
        (**self).execute(input)
    }
}

impl<In, S> Selector<In> for std::sync::Arc<S>
where
    In: Message,
    S: Selector<In> + ?Sized,
{
    type Candidate = S::Candidate;

    fn select(&self, input: &In) -> Option<&Self::Candidate> {
        (**self).select(input)
    }

    fn execute(&self, input: &In) -> Dispatch<'_> {
        (**self).execute(input)
    }
}
