//! Outcome of a select-and-execute call.

/// What a [`Selector::execute`] call did.
///
/// Finding no handler is a normal outcome, not an error. Callers that only
/// care about the side effect can ignore the value.
///
/// [`Selector::execute`]: crate::Selector::execute
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Dispatch<'a> {
    /// A handler was selected and its action ran.
    Executed {
        /// Name of the handler that ran.
        handler: &'a str,
    },
    /// No registered handler supported the input; nothing ran.
    #[default]
    Unmatched,
}

impl<'a> Dispatch<'a> {
    /// Returns `true` if a handler ran.
    pub const fn is_executed(&self) -> bool {
        matches!(self, Self::Executed { .. })
    }

    /// Name of the handler that ran, if any.
    pub const fn handler(&self) -> Option<&'a str> {
        match self {
            Self::Executed { handler } => Some(*handler),
            Self::Unmatched => None,
        }
    }
}
