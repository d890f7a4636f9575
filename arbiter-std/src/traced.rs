//! Tracing wrapper for selectors.

use arbiter_core::{Dispatch, Message, Selector};
use std::fmt::Debug;

/// A selector wrapper that instruments selection with a `tracing` span.
///
/// Every `execute` runs inside an `info_span!("select")` carrying the
/// wrapper's label and the input, and logs which handler ran. Without the
/// `tracing` feature the wrapper is a transparent pass-through.
pub struct Traced<S> {
    inner: S,
    label: &'static str,
}

impl<S> Traced<S> {
    /// Wrap `inner`, identifying it as `label` in spans.
    pub const fn new(inner: S, label: &'static str) -> Self {
        Self { inner, label }
    }

    /// The label used in spans.
    pub fn label(&self) -> &'static str {
        self.label
    }

    /// Get the wrapped selector.
    pub fn inner(&self) -> &S {
        &self.inner
    }

    /// Unwrap the selector.
    pub fn into_inner(self) -> S {
        self.inner
    }
}

impl<S: Clone> Clone for Traced<S> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
            label: self.label,
        }
    }
}

impl<In, S> Selector<In> for Traced<S>
where
    In: Message + Debug,
    S: Selector<In>,
{
    type Candidate = S::Candidate;

    fn select(&self, input: &In) -> Option<&Self::Candidate> {
        self.inner.select(input)
    }

    #[cfg(feature = "tracing")]
    fn execute(&self, input: &In) -> Dispatch<'_> {
        let span = tracing::info_span!("select", selector = %self.label, input = ?input);
        let _entered = span.enter();

        let outcome = self.inner.execute(input);
        match outcome {
            Dispatch::Executed { handler } => tracing::info!(handler, "handler executed"),
            Dispatch::Unmatched => tracing::debug!("no handler supports input"),
        }
        outcome
    }

    #[cfg(not(feature = "tracing"))]
    fn execute(&self, input: &In) -> Dispatch<'_> {
        self.inner.execute(input)
    }
}
