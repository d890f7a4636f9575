//! Testing utilities for Arbiter.
//!
//! # Features
//!
//! - [`RecordingHandler`]: A handler with a programmable predicate and rank
//!   that counts how often it was executed.

use arbiter_core::{Handler, Message, Priority, PriorityHandler};
use std::sync::{
    Arc,
    atomic::{AtomicUsize, Ordering},
};

type Predicate<In> = Arc<dyn Fn(&In) -> bool + Send + Sync>;

// ============================================================================
// Recording Handler
// ============================================================================

/// A handler that counts its executions.
///
/// Clones share the counter, so a clone can be registered while the original
/// stays in the test for inspection.
///
/// # Example
///
/// ```rust,ignore
/// let recorder = RecordingHandler::named("x").with_rank(1);
///
/// let selector = PrioritySelector::builder().register(recorder.clone()).build();
/// selector.execute(&event);
///
/// assert_eq!(recorder.count(), 1);
/// ```
pub struct RecordingHandler<In> {
    name: String,
    predicate: Predicate<In>,
    priority: Priority,
    count: Arc<AtomicUsize>,
}

impl<In: Message> RecordingHandler<In> {
    /// Create a recording handler that supports every input.
    pub fn named(name: impl Into<String>) -> Self {
        Self::matching(name, |_: &In| true)
    }

    /// Create a recording handler that supports inputs accepted by `predicate`.
    pub fn matching<F>(name: impl Into<String>, predicate: F) -> Self
    where
        F: Fn(&In) -> bool + Send + Sync + 'static,
    {
        Self {
            name: name.into(),
            predicate: Arc::new(predicate),
            priority: 0,
            count: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Set the priority reported to priority selectors (default `0`).
    pub fn with_rank(mut self, priority: Priority) -> Self {
        self.priority = priority;
        self
    }

    /// Get the number of executions so far.
    pub fn count(&self) -> usize {
        self.count.load(Ordering::SeqCst)
    }

    /// Reset the execution counter.
    pub fn reset(&self) {
        self.count.store(0, Ordering::SeqCst);
    }
}

impl<In> Clone for RecordingHandler<In> {
    fn clone(&self) -> Self {
        Self {
            name: self.name.clone(),
            predicate: self.predicate.clone(),
            priority: self.priority,
            count: self.count.clone(),
        }
    }
}

impl<In: Message> Handler<In> for RecordingHandler<In> {
    fn supports(&self, input: &In) -> bool {
        (self.predicate)(input)
    }

    fn execute(&self) {
        self.count.fetch_add(1, Ordering::SeqCst);
    }

    fn name(&self) -> &str {
        &self.name
    }
}

impl<In: Message> PriorityHandler<In> for RecordingHandler<In> {
    fn priority(&self) -> Priority {
        self.priority
    }
}
