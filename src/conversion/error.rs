use core::fmt;
use std::error::Error;
use std::fmt::{Debug, Display, Formatter};

#[derive(PartialEq, Eq, Clone)]
pub enum ConversionError {
    /// Token is not a plain decimal number.
    Parse { token: String },
    /// Token is numeric but exceeds `max`.
    Range { token: String, max: u32 },
    /// Address text did not carry exactly four octets.
    OctetCount { found: usize },
}

impl Debug for ConversionError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "ConversionError::")?;
        Display::fmt(self, f)
    }
}

impl Display for ConversionError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            ConversionError::Parse { token } =>
                write!(f, "Invalid number `{}`.", token),
            ConversionError::Range { token, max } =>
                write!(f, "Number `{}` out of range [0, {}].", token, max),
            ConversionError::OctetCount { found } =>
                write!(f, "Expected 4 octets, found {}.", found),
        }
    }
}

impl Error for ConversionError {}
