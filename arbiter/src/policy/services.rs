//! Ranked handlers for the priority selector.

use super::Ticket;
use crate::{Handler, Priority, PriorityHandler};

/// Claims remainder 1.
#[derive(Debug, Clone, Copy, Default)]
pub struct BService;

impl Handler<Ticket> for BService {
    fn supports(&self, ticket: &Ticket) -> bool {
        ticket.remainder() == 1
    }

    fn execute(&self) {
        println!("B execute");
    }

    fn name(&self) -> &str {
        "B"
    }
}

impl PriorityHandler<Ticket> for BService {
    fn priority(&self) -> Priority {
        2
    }
}

/// Claims remainder 2.
#[derive(Debug, Clone, Copy, Default)]
pub struct CService;

impl Handler<Ticket> for CService {
    fn supports(&self, ticket: &Ticket) -> bool {
        ticket.remainder() == 2
    }

    fn execute(&self) {
        println!("C execute");
    }

    fn name(&self) -> &str {
        "C"
    }
}

impl PriorityHandler<Ticket> for CService {
    fn priority(&self) -> Priority {
        3
    }
}

/// Claims remainder 0 with the highest precedence.
#[derive(Debug, Clone, Copy, Default)]
pub struct DService;

impl Handler<Ticket> for DService {
    fn supports(&self, ticket: &Ticket) -> bool {
        ticket.remainder() == 0
    }

    fn execute(&self) {
        println!("D execute");
    }

    fn name(&self) -> &str {
        "D"
    }
}

impl PriorityHandler<Ticket> for DService {
    fn priority(&self) -> Priority {
        0
    }
}
