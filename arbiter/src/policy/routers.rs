//! Unranked handlers for the first-match router.

use super::Ticket;
use crate::Handler;

/// Claims remainder 0.
#[derive(Debug, Clone, Copy, Default)]
pub struct ARouter;

impl Handler<Ticket> for ARouter {
    fn supports(&self, ticket: &Ticket) -> bool {
        ticket.remainder() == 0
    }

    fn execute(&self) {
        println!("A router execute");
    }

    fn name(&self) -> &str {
        "A"
    }
}

/// Claims remainder 1.
#[derive(Debug, Clone, Copy, Default)]
pub struct BRouter;

impl Handler<Ticket> for BRouter {
    fn supports(&self, ticket: &Ticket) -> bool {
        ticket.remainder() == 1
    }

    fn execute(&self) {
        println!("B router execute");
    }

    fn name(&self) -> &str {
        "B"
    }
}

/// Claims remainder 2.
#[derive(Debug, Clone, Copy, Default)]
pub struct CRouter;

impl Handler<Ticket> for CRouter {
    fn supports(&self, ticket: &Ticket) -> bool {
        ticket.remainder() == 2
    }

    fn execute(&self) {
        println!("C router execute");
    }

    fn name(&self) -> &str {
        "C"
    }
}
