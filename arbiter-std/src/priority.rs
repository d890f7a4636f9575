//! Priority-based selection.

use crate::registry::{PriorityRegistry, RegistryBuilder};
use arbiter_core::{Message, PriorityHandler, Selector, select_by_priority};

/// Selects the supporting handler with the lowest priority.
///
/// Ties between equal priorities go to the handler registered first. The
/// selector holds its registry immutably, so it can be shared across threads.
///
/// # Example
///
/// ```rust,ignore
/// let services = PrioritySelector::builder()
///     .register(BService)
///     .register(CService)
///     .register(DService)
///     .build();
///
/// services.execute(&Ticket::new(3)); // prints "D execute"
/// ```
pub struct PrioritySelector<In: Message> {
    registry: PriorityRegistry<In>,
}

impl<In: Message> PrioritySelector<In> {
    /// Create a selector over an assembled registry.
    pub fn new(registry: PriorityRegistry<In>) -> Self {
        Self { registry }
    }

    /// Start assembling a selector.
    pub fn builder() -> PrioritySelectorBuilder<In> {
        PrioritySelectorBuilder {
            inner: RegistryBuilder::new(),
        }
    }

    /// The handlers this selector chooses from.
    pub fn registry(&self) -> &PriorityRegistry<In> {
        &self.registry
    }
}

impl<In: Message> From<PriorityRegistry<In>> for PrioritySelector<In> {
    fn from(registry: PriorityRegistry<In>) -> Self {
        Self::new(registry)
    }
}

impl<In: Message> Clone for PrioritySelector<In> {
    fn clone(&self) -> Self {
        Self {
            registry: self.registry.clone(),
        }
    }
}

impl<In: Message> Selector<In> for PrioritySelector<In> {
    type Candidate = dyn PriorityHandler<In>;

    fn select(&self, input: &In) -> Option<&Self::Candidate> {
        let selected = select_by_priority(input, self.registry.iter());

        #[cfg(feature = "tracing")]
        tracing::debug!(
            candidates = self.registry.len(),
            selected = selected.map(|h| h.name()),
            priority = selected.map(|h| h.priority()),
            "priority selection"
        );

        selected
    }
}

/// Builder for [`PrioritySelector`].
///
/// Thin wrapper over a [`RegistryBuilder`] that finishes into a selector.
pub struct PrioritySelectorBuilder<In: Message> {
    inner: RegistryBuilder<dyn PriorityHandler<In>>,
}

impl<In: Message> PrioritySelectorBuilder<In> {
    /// Register a ranked handler.
    pub fn register<H: PriorityHandler<In>>(mut self, handler: H) -> Self {
        self.inner = self.inner.register(handler);
        self
    }

    /// Register any handler with an explicit priority.
    pub fn register_with_priority<H: arbiter_core::Handler<In>>(
        mut self,
        handler: H,
        priority: arbiter_core::Priority,
    ) -> Self {
        self.inner = self.inner.register_with_priority(handler, priority);
        self
    }

    /// Finish into a selector.
    pub fn build(self) -> PrioritySelector<In> {
        PrioritySelector::new(self.inner.build())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::RecordingHandler;
    use arbiter_core::Dispatch;

    #[test]
    fn lower_priority_wins_over_registration_order() {
        let slow = RecordingHandler::named("slow").with_rank(5);
        let fast = RecordingHandler::named("fast").with_rank(1);
        let selector = PrioritySelector::<u64>::builder()
            .register(slow.clone())
            .register(fast.clone())
            .build();

        assert_eq!(selector.execute(&7), Dispatch::Executed { handler: "fast" });
        assert_eq!(fast.count(), 1);
        assert_eq!(slow.count(), 0);
    }

    #[test]
    fn registration_order_breaks_ties() {
        let first = RecordingHandler::named("first").with_rank(2);
        let second = RecordingHandler::named("second").with_rank(2);
        let selector = PrioritySelector::<u64>::builder()
            .register(first.clone())
            .register(second.clone())
            .build();

        assert_eq!(selector.select(&1).map(|h| h.name()), Some("first"));
    }

    #[test]
    fn override_priority_at_registration() {
        let a = RecordingHandler::named("a").with_rank(0);
        let b = RecordingHandler::named("b").with_rank(9);
        let selector = PrioritySelector::<u64>::builder()
            .register(a)
            .register_with_priority(b, -1)
            .build();

        assert_eq!(selector.select(&0).map(|h| h.name()), Some("b"));
    }

    #[test]
    fn empty_or_unsupported_is_noop() {
        let empty = PrioritySelector::<u64>::builder().build();
        assert_eq!(empty.execute(&3), Dispatch::Unmatched);

        let picky = RecordingHandler::matching("even", |n: &u64| n % 2 == 0).with_rank(0);
        let selector = PrioritySelector::<u64>::builder()
            .register(picky.clone())
            .build();
        assert_eq!(selector.execute(&3), Dispatch::Unmatched);
        assert_eq!(picky.count(), 0);
        assert!(selector.execute(&4).is_executed());
        assert_eq!(picky.count(), 1);
    }

    #[test]
    fn from_registry_and_clone_share_handlers() {
        let only = RecordingHandler::named("only").with_rank(0);
        let registry = PriorityRegistry::<u64>::builder()
            .register(only.clone())
            .build();
        let selector = PrioritySelector::from(registry);
        let copy = selector.clone();

        selector.execute(&1);
        copy.execute(&1);
        assert_eq!(only.count(), 2);
        assert_eq!(copy.registry().len(), 1);
    }
}
