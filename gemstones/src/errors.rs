use thiserror::Error;

#[derive(Clone, Copy, Debug, PartialEq, Error)]
#[non_exhaustive]
/// The error type returned when a [`Gemstone`](crate::Gemstone) field is out of range.
pub enum GemstoneError {
    /// The weight was not positive.
    #[error("invalid weight {0}: must be greater than 0")]
    InvalidWeight(f64),
    /// The price was not positive.
    #[error("invalid price {0}: must be greater than 0")]
    InvalidPrice(f64),
    /// The transparency was outside `0..=1`.
    #[error("invalid transparency {0}: must be between 0 and 1")]
    InvalidTransparency(f64),
}
