//! The worked example policy, end to end.

use arbiter::{
    Dispatch, Handler, Selector,
    policy::{self, Ticket},
};
use proptest::prelude::*;
use rstest::rstest;

mod common;
use common::{router_for, service_for};

#[rstest]
#[case::remainder_zero(3, "D", "A")]
#[case::remainder_one(4, "B", "B")]
#[case::remainder_two(5, "C", "C")]
#[case::zero(0, "D", "A")]
#[case::negative(-1, "C", "C")]
#[case::negative_remainder_one(-2, "B", "B")]
fn selects_expected_handler(#[case] support_num: i64, #[case] service: &str, #[case] router: &str) {
    assert_eq!(service_for(support_num).as_deref(), Some(service));
    assert_eq!(router_for(support_num).as_deref(), Some(router));
}

#[test]
fn execute_reports_the_handler_that_ran() {
    let services = policy::services();
    let routers = policy::routers();
    let ticket = Ticket::new(3);

    assert_eq!(services.execute(&ticket), Dispatch::Executed { handler: "D" });
    assert_eq!(routers.execute(&ticket), Dispatch::Executed { handler: "A" });
}

#[test]
fn priorities_match_the_table() {
    let services = policy::services();
    let ranks: Vec<(&str, i32)> = services
        .registry()
        .iter()
        .map(|h| (h.name(), h.priority()))
        .collect();

    assert_eq!(ranks, vec![("B", 2), ("C", 3), ("D", 0)]);
}

proptest! {
    #[test]
    fn exactly_one_service_supports_every_ticket(support_num in any::<i64>()) {
        let ticket = Ticket::new(support_num);
        let services = policy::services();

        let supporting = services.registry().iter().filter(|h| h.supports(&ticket)).count();
        prop_assert_eq!(supporting, 1);

        let chosen = services.select(&ticket);
        prop_assert!(chosen.is_some_and(|h| h.supports(&ticket)));
    }

    #[test]
    fn selectors_agree_off_remainder_zero(support_num in any::<i64>()) {
        let ticket = Ticket::new(support_num);
        prop_assume!(ticket.remainder() != 0);

        prop_assert_eq!(service_for(support_num), router_for(support_num));
    }

    #[test]
    fn selection_is_repeatable(support_num in -1_000i64..1_000) {
        let ticket = Ticket::new(support_num);
        let services = policy::services();
        let routers = policy::routers();

        let first = (
            services.select(&ticket).map(|h| h.name()),
            routers.select(&ticket).map(|h| h.name()),
        );
        for _ in 0..3 {
            prop_assert_eq!(services.select(&ticket).map(|h| h.name()), first.0);
            prop_assert_eq!(routers.select(&ticket).map(|h| h.name()), first.1);
        }
    }
}
