//! First-match selection.

use crate::registry::{HandlerRegistry, RegistryBuilder};
use arbiter_core::{Handler, Message, Selector, select_first};

/// Selects the first supporting handler in registration order.
///
/// Later handlers that also support the input are ignored. Unlike
/// [`PrioritySelector`](crate::PrioritySelector), handlers carry no rank.
///
/// # Example
///
/// ```rust,ignore
/// let routers = Router::builder()
///     .register(ARouter)
///     .register(BRouter)
///     .register(CRouter)
///     .build();
///
/// routers.execute(&Ticket::new(3)); // prints "A router execute"
/// ```
pub struct Router<In: Message> {
    registry: HandlerRegistry<In>,
}

impl<In: Message> Router<In> {
    /// Create a router over an assembled registry.
    pub fn new(registry: HandlerRegistry<In>) -> Self {
        Self { registry }
    }

    /// Start assembling a router.
    pub fn builder() -> RouterBuilder<In> {
        RouterBuilder {
            inner: RegistryBuilder::new(),
        }
    }

    /// The handlers this router chooses from.
    pub fn registry(&self) -> &HandlerRegistry<In> {
        &self.registry
    }
}

impl<In: Message> From<HandlerRegistry<In>> for Router<In> {
    fn from(registry: HandlerRegistry<In>) -> Self {
        Self::new(registry)
    }
}

impl<In: Message> Clone for Router<In> {
    fn clone(&self) -> Self {
        Self {
            registry: self.registry.clone(),
        }
    }
}

impl<In: Message> Selector<In> for Router<In> {
    type Candidate = dyn Handler<In>;

    fn select(&self, input: &In) -> Option<&Self::Candidate> {
        let selected = select_first(input, self.registry.iter());

        #[cfg(feature = "tracing")]
        tracing::debug!(
            candidates = self.registry.len(),
            selected = selected.map(|h| h.name()),
            "first-match selection"
        );

        selected
    }
}

/// Builder for [`Router`].
pub struct RouterBuilder<In: Message> {
    inner: RegistryBuilder<dyn Handler<In>>,
}

impl<In: Message> RouterBuilder<In> {
    /// Register a handler.
    pub fn register<H: Handler<In>>(mut self, handler: H) -> Self {
        self.inner = self.inner.register(handler);
        self
    }

    /// Finish into a router.
    pub fn build(self) -> Router<In> {
        Router::new(self.inner.build())
    }
}
