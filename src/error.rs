use core::fmt;

/// Error type for the library.
#[derive(Clone, Debug, PartialEq)]
pub enum Error {
    /// Input text did not match the decimal grammar `[-]digits[.digits]`.
    InvalidFormat(String),
    /// Explicit construction asked for more fractional digits than the
    /// coefficient holds.
    ScaleExceedsCoefficient { scale: u32, digits: usize },
}

#[cold]
pub(crate) fn tail_error<T>(from: &str) -> Result<T, Error> {
    Err(from.into())
}

impl<S> From<S> for Error
where
    S: Into<String>,
{
    #[inline]
    fn from(from: S) -> Self {
        Self::InvalidFormat(from.into())
    }
}

impl std::error::Error for Error {}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Self::InvalidFormat(ref err) => f.pad(err),
            Self::ScaleExceedsCoefficient { scale, digits } => {
                write!(f, "Scale exceeds coefficient length: {} > {}", scale, digits)
            }
        }
    }
}
