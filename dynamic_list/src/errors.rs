use thiserror::Error;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
#[non_exhaustive]
/// The error type returned by fallible [`DynamicList`](crate::DynamicList) and cursor operations.
pub enum ListError {
    /// An index was outside the bound allowed by the operation.
    ///
    /// Access and removal require `index < len`, insertion allows `index <= len`.
    #[error("index {index} out of range for length {len}")]
    IndexOutOfRange { index: usize, len: usize },

    /// A cursor was moved past the end it was moving towards.
    #[error("cursor has no more elements in that direction")]
    Exhausted,

    /// A cursor was asked to remove or replace without an eligible element.
    #[error("cursor has no element eligible for removal or replacement")]
    InvalidCursorState,

    /// Growing the buffer would overflow the addressable size.
    #[error("capacity overflow")]
    CapacityOverflow,
}
