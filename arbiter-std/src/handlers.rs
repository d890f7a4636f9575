//! Closure-based handlers.

use arbiter_core::{Handler, Message};

/// A handler assembled from a name, a support-predicate and an action.
///
/// Handy for tests and for small strategies that do not deserve their own
/// type.
///
/// # Example
///
/// ```rust,ignore
/// let even = fn_handler("even", |n: &i64| n % 2 == 0, || println!("even"));
/// let router = Router::builder().register(even).build();
/// ```
pub struct FnHandler<P, A> {
    name: String,
    predicate: P,
    action: A,
}

impl<P, A> FnHandler<P, A> {
    /// Create a new closure handler.
    pub fn new(name: impl Into<String>, predicate: P, action: A) -> Self {
        Self {
            name: name.into(),
            predicate,
            action,
        }
    }
}

/// Shorthand for [`FnHandler::new`].
pub fn fn_handler<P, A>(name: impl Into<String>, predicate: P, action: A) -> FnHandler<P, A> {
    FnHandler::new(name, predicate, action)
}

impl<In, P, A> Handler<In> for FnHandler<P, A>
where
    In: Message,
    P: Fn(&In) -> bool + Send + Sync + 'static,
    A: Fn() + Send + Sync + 'static,
{
    fn supports(&self, input: &In) -> bool {
        (self.predicate)(input)
    }

    fn execute(&self) {
        (self.action)()
    }

    fn name(&self) -> &str {
        &self.name
    }
}

impl<P, A> std::fmt::Debug for FnHandler<P, A> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FnHandler")
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use arbiter_core::PriorityHandler;
    use std::sync::{
        Arc,
        atomic::{AtomicUsize, Ordering},
    };

    #[test]
    fn predicate_and_action_are_wired() {
        let hits = Arc::new(AtomicUsize::new(0));
        let counter = hits.clone();
        let handler = fn_handler(
            "multiple-of-three",
            |n: &i64| n.rem_euclid(3) == 0,
            move || {
                counter.fetch_add(1, Ordering::SeqCst);
            },
        );

        assert!(handler.supports(&9i64));
        assert!(!handler.supports(&10i64));
        assert_eq!(Handler::<i64>::name(&handler), "multiple-of-three");

        Handler::<i64>::execute(&handler);
        assert_eq!(hits.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn closure_handler_can_be_ranked() {
        let ranked = Handler::<u8>::with_priority(fn_handler("any", |_: &u8| true, || {}), 4);
        assert_eq!(PriorityHandler::<u8>::priority(&ranked), 4);
        assert_eq!(Handler::<u8>::name(&ranked), "any");
    }

    #[test]
    fn debug_shows_name() {
        let handler = fn_handler("dbg", |_: &u8| false, || {});
        assert_eq!(format!("{handler:?}"), "FnHandler { name: \"dbg\", .. }");
    }
}
