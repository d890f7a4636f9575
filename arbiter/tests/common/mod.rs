#![allow(dead_code)]

use arbiter::{
    Handler, Priority, PrioritySelector, Router, Selector,
    policy::{self, Ticket},
    testing::RecordingHandler,
};

// ============================================================================
// Policy Registries
// ============================================================================

/// Name of the service chosen for `support_num`, if any.
pub fn service_for(support_num: i64) -> Option<String> {
    policy::services()
        .select(&Ticket::new(support_num))
        .map(|h| h.name().to_string())
}

/// Name of the router chosen for `support_num`, if any.
pub fn router_for(support_num: i64) -> Option<String> {
    policy::routers()
        .select(&Ticket::new(support_num))
        .map(|h| h.name().to_string())
}

// ============================================================================
// Recording Handlers
// ============================================================================

/// A recorder that claims every ticket with the given rank.
pub fn ranked(name: &str, priority: Priority) -> RecordingHandler<Ticket> {
    RecordingHandler::named(name).with_rank(priority)
}

/// A recorder that claims tickets with the given remainder.
pub fn claims(name: &str, remainder: i64) -> RecordingHandler<Ticket> {
    RecordingHandler::matching(name, move |t: &Ticket| t.remainder() == remainder)
}

pub fn priority_selector(handlers: &[RecordingHandler<Ticket>]) -> PrioritySelector<Ticket> {
    handlers
        .iter()
        .cloned()
        .fold(PrioritySelector::builder(), |builder, h| builder.register(h))
        .build()
}

pub fn router(handlers: &[RecordingHandler<Ticket>]) -> Router<Ticket> {
    handlers
        .iter()
        .cloned()
        .fold(Router::builder(), |builder, h| builder.register(h))
        .build()
}

pub fn counts(handlers: &[RecordingHandler<Ticket>]) -> Vec<usize> {
    handlers.iter().map(|h| h.count()).collect()
}
