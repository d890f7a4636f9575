use crate::Message;

/// Divisor used to partition support numbers between handlers.
const PARTITIONS: i64 = 3;

/// A support request, classified by its support number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Message)]
pub struct Ticket {
    support_num: i64,
}

impl Ticket {
    /// Create a ticket for `support_num`.
    pub const fn new(support_num: i64) -> Self {
        Self { support_num }
    }

    /// The ticket's support number.
    pub const fn support_num(&self) -> i64 {
        self.support_num
    }

    /// Euclidean remainder of the support number, always in `0..3`.
    pub const fn remainder(&self) -> i64 {
        self.support_num.rem_euclid(PARTITIONS)
    }
}

impl From<i64> for Ticket {
    fn from(support_num: i64) -> Self {
        Self::new(support_num)
    }
}
