//! Message trait for selector inputs.

/// A marker trait for values that can be handed to a selector.
///
/// Messages must be `Send + Sync + 'static` so that registries and selectors
/// built over them can be shared between threads.
///
/// # Example
///
/// ```rust,ignore
/// struct Ticket { support_num: i64 }
///
/// impl Message for Ticket {}
/// ```
#[diagnostic::on_unimplemented(
    message = "`{Self}` is not a valid Message",
    label = "must be `Send + Sync + 'static`",
    note = "Selector inputs must be thread-safe and static; derive or implement `Message`."
)]
pub trait Message: Send + Sync + 'static {}

macro_rules! impl_message {
    ($($ty:ty),* $(,)?) => {
        $(impl Message for $ty {})*
    };
}

impl_message!(
    (),
    bool,
    char,
    i8,
    i16,
    i32,
    i64,
    i128,
    isize,
    u8,
    u16,
    u32,
    u64,
    u128,
    usize,
    String,
    &'static str,
);

impl<T: Message> Message for Box<T> {}
impl<T: Message> Message for std::sync::Arc<T> {}
impl<T: Message> Message for Vec<T> {}
impl<T: Message> Message for Option<T> {}
impl<T: Message, E: Message> Message for Result<T, E> {}
