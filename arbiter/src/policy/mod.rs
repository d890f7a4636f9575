//! Worked example: support tickets partitioned by remainder.
//!
//! Every [`Ticket`] carries a support number. Handlers claim tickets by the
//! number's remainder modulo 3, and two independent registries are built
//! from them:
//!
//! | Handler | Claims remainder | Priority | Registry |
//! |---------|------------------|----------|----------|
//! | [`ARouter`] | 0 | - | [`routers`] |
//! | [`BRouter`] | 1 | - | [`routers`] |
//! | [`CRouter`] | 2 | - | [`routers`] |
//! | [`BService`] | 1 | 2 | [`services`] |
//! | [`CService`] | 2 | 3 | [`services`] |
//! | [`DService`] | 0 | 0 | [`services`] |
//!
//! The remainder is Euclidean, so negative support numbers are claimed too.

mod routers;
mod services;
mod ticket;

pub use routers::{ARouter, BRouter, CRouter};
pub use services::{BService, CService, DService};
pub use ticket::Ticket;

use crate::{PrioritySelector, Router};

/// Priority selector over B, C and D, registered in that order.
pub fn services() -> PrioritySelector<Ticket> {
    PrioritySelector::builder()
        .register(BService)
        .register(CService)
        .register(DService)
        .build()
}

/// First-match router over A, B and C, registered in that order.
pub fn routers() -> Router<Ticket> {
    Router::builder()
        .register(ARouter)
        .register(BRouter)
        .register(CRouter)
        .build()
}
