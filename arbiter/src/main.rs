//! Runs support numbers through the example policy's selectors.

use arbiter::{
    Dispatch, Selector, Traced,
    policy::{self, Ticket},
};
use clap::{Parser, ValueEnum};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "arbiter")]
#[command(about = "Select and run one handler per support number")]
struct Args {
    /// Support numbers to dispatch
    #[arg(default_values_t = [3], allow_negative_numbers = true)]
    numbers: Vec<i64>,

    /// Which selector to run each number through
    #[arg(short, long, value_enum, default_value_t = Which::Both)]
    selector: Which,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum Which {
    /// Lowest priority among matching services
    Priority,
    /// First matching router
    Router,
    /// Both, priority first
    Both,
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn report(outcome: Dispatch<'_>, ticket: &Ticket) {
    if outcome == Dispatch::Unmatched {
        tracing::warn!(support_num = ticket.support_num(), "no handler supports ticket");
    }
}

fn main() {
    let args = Args::parse();
    init_tracing(args.verbose);

    let services = Traced::new(policy::services(), "services");
    let routers = Traced::new(policy::routers(), "routers");

    for ticket in args.numbers.into_iter().map(Ticket::new) {
        if matches!(args.selector, Which::Priority | Which::Both) {
            report(services.execute(&ticket), &ticket);
        }
        if matches!(args.selector, Which::Router | Which::Both) {
            report(routers.execute(&ticket), &ticket);
        }
    }
}
