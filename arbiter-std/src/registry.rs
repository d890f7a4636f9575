//! Registry module for handler management.
//!
//! This module provides a builder for registering handlers and a frozen
//! registry that selectors consult. Registration order is preserved: it is
//! the tie-breaker of every selector.

use arbiter_core::{Handler, Message, Priority, PriorityHandler, RegistryError, WithPriority};
use std::sync::Arc;

/// Registry of plain handlers, as consumed by [`Router`](crate::Router).
pub type HandlerRegistry<In> = Registry<dyn Handler<In>>;

/// Registry of ranked handlers, as consumed by
/// [`PrioritySelector`](crate::PrioritySelector).
pub type PriorityRegistry<In> = Registry<dyn PriorityHandler<In>>;

// ============================================================================
// RegistryBuilder - for constructing registries
// ============================================================================

/// Builder for constructing a [`Registry`].
///
/// # Example
/// ```ignore
/// let registry = RegistryBuilder::<dyn PriorityHandler<Ticket>>::new()
///     .register(BService)
///     .register(CService)
///     .register_with_priority(DService, -1)
///     .build();
/// ```
pub struct RegistryBuilder<T: ?Sized> {
    entries: Vec<Arc<T>>,
}

impl<T: ?Sized> RegistryBuilder<T> {
    /// Create a new empty builder.
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Register an already shared handler.
    pub fn register_arc(mut self, handler: Arc<T>) -> Self {
        self.entries.push(handler);
        self
    }

    /// Register an already shared handler (mutable version).
    pub fn register_arc_mut(&mut self, handler: Arc<T>) {
        self.entries.push(handler);
    }

    /// Build the immutable Registry.
    ///
    /// Entries keep the order in which they were registered.
    pub fn build(self) -> Registry<T> {
        Registry {
            entries: self.entries,
        }
    }

    /// Get the number of registered handlers.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the builder has no handlers.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn push_unique(
        &mut self,
        handler: Arc<T>,
        name_of: impl Fn(&T) -> &str,
    ) -> Result<(), RegistryError> {
        let name = name_of(&*handler);
        if self.entries.iter().any(|entry| name_of(&**entry) == name) {
            return Err(RegistryError::DuplicateName(name.to_string()));
        }
        self.entries.push(handler);
        Ok(())
    }
}

impl<T: ?Sized> Default for RegistryBuilder<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<In: Message> RegistryBuilder<dyn Handler<In>> {
    /// Register a handler.
    pub fn register<H: Handler<In>>(self, handler: H) -> Self {
        self.register_arc(Arc::new(handler))
    }

    /// Register a handler (mutable version).
    pub fn register_mut<H: Handler<In>>(&mut self, handler: H) {
        self.register_arc_mut(Arc::new(handler));
    }

    /// Register a handler, rejecting a name that is already taken.
    pub fn try_register<H: Handler<In>>(mut self, handler: H) -> Result<Self, RegistryError> {
        self.push_unique(Arc::new(handler), |h| h.name())?;
        Ok(self)
    }
}

impl<In: Message> RegistryBuilder<dyn PriorityHandler<In>> {
    /// Register a ranked handler.
    pub fn register<H: PriorityHandler<In>>(self, handler: H) -> Self {
        self.register_arc(Arc::new(handler))
    }

    /// Register a ranked handler (mutable version).
    pub fn register_mut<H: PriorityHandler<In>>(&mut self, handler: H) {
        self.register_arc_mut(Arc::new(handler));
    }

    /// Register a ranked handler, rejecting a name that is already taken.
    pub fn try_register<H: PriorityHandler<In>>(
        mut self,
        handler: H,
    ) -> Result<Self, RegistryError> {
        self.push_unique(Arc::new(handler), |h| h.name())?;
        Ok(self)
    }

    /// Register any handler with an explicit priority.
    ///
    /// If the handler already has a priority of its own, this one replaces it.
    pub fn register_with_priority<H: Handler<In>>(self, handler: H, priority: Priority) -> Self {
        self.register(WithPriority::new(handler, priority))
    }
}

// ============================================================================
// Registry - immutable, thread-safe handler storage
// ============================================================================

/// An immutable, ordered collection of handlers.
///
/// Created by calling [`RegistryBuilder::build`]. Cloning is cheap: the
/// handlers themselves are shared.
pub struct Registry<T: ?Sized> {
    entries: Vec<Arc<T>>,
}

impl<T: ?Sized> Registry<T> {
    /// Create an empty builder.
    pub fn builder() -> RegistryBuilder<T> {
        RegistryBuilder::new()
    }

    /// Iterate over handlers in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.entries.iter().map(|entry| &**entry)
    }

    /// Get the number of registered handlers.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Get all entries (for advanced use).
    pub fn entries(&self) -> &[Arc<T>] {
        &self.entries
    }
}

impl<In: Message> Registry<dyn Handler<In>> {
    /// Names of the registered handlers, in registration order.
    pub fn names(&self) -> Vec<&str> {
        self.iter().map(|h| h.name()).collect()
    }
}

impl<In: Message> Registry<dyn PriorityHandler<In>> {
    /// Names of the registered handlers, in registration order.
    pub fn names(&self) -> Vec<&str> {
        self.iter().map(|h| h.name()).collect()
    }
}

impl<T: ?Sized> Clone for Registry<T> {
    fn clone(&self) -> Self {
        Self {
            entries: self.entries.clone(),
        }
    }
}

impl<T: ?Sized> Default for Registry<T> {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
        }
    }
}

impl<T: ?Sized> std::fmt::Debug for Registry<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Registry")
            .field("len", &self.entries.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::handlers::fn_handler;

    fn named(name: &'static str) -> impl Handler<i64> {
        fn_handler(name, |_: &i64| true, || {})
    }

    #[test]
    fn builder_keeps_registration_order() {
        let registry = HandlerRegistry::<i64>::builder()
            .register(named("c"))
            .register(named("a"))
            .register(named("b"))
            .build();

        assert_eq!(registry.len(), 3);
        assert_eq!(registry.names(), vec!["c", "a", "b"]);
    }

    #[test]
    fn priority_registry_is_not_sorted() {
        let registry = PriorityRegistry::<i64>::builder()
            .register_with_priority(named("late"), 9)
            .register_with_priority(named("early"), -9)
            .build();

        assert_eq!(registry.names(), vec!["late", "early"]);
        let priorities: Vec<Priority> = registry.iter().map(|h| h.priority()).collect();
        assert_eq!(priorities, vec![9, -9]);
    }

    #[test]
    fn try_register_rejects_duplicate_names() {
        let result = HandlerRegistry::<i64>::builder()
            .try_register(named("x"))
            .and_then(|builder| builder.try_register(named("x")));

        assert_eq!(
            result.err(),
            Some(RegistryError::DuplicateName("x".to_string()))
        );
    }

    #[test]
    fn try_register_accepts_distinct_names() {
        let builder = PriorityRegistry::<i64>::builder()
            .try_register(named("x").with_priority(1))
            .and_then(|builder| builder.try_register(named("y").with_priority(2)))
            .expect("distinct names");

        assert_eq!(builder.len(), 2);
        assert_eq!(builder.build().names(), vec!["x", "y"]);
    }

    #[test]
    fn mutable_registration_and_sharing() {
        let shared: Arc<dyn Handler<i64>> = Arc::new(named("shared"));
        let mut builder = RegistryBuilder::<dyn Handler<i64>>::default();
        assert!(builder.is_empty());

        builder.register_mut(named("owned"));
        builder.register_arc_mut(shared.clone());
        let registry = builder.build();
        let copy = registry.clone();

        assert_eq!(copy.names(), vec!["owned", "shared"]);
        assert_eq!(Arc::strong_count(&shared), 3);
    }

    #[test]
    fn empty_registry() {
        let registry = HandlerRegistry::<i64>::default();
        assert!(registry.is_empty());
        assert_eq!(registry.iter().count(), 0);
        assert_eq!(format!("{registry:?}"), "Registry { len: 0 }");
    }
}
