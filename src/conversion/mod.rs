pub mod config;
pub mod error;
pub mod octets;
pub mod parse;

use std::fmt;
use std::fmt::{Display, Formatter};
use log::debug;
use crate::conversion::config::{ConversionConfig, ParsePolicy};
use crate::conversion::error::ConversionError;
use crate::conversion::octets::{Octets, OCTET_COUNT};

pub use crate::conversion::octets::{integer_to_octets, pack_octets, pack_raw};

pub const OCTET_SEPARATOR: char = '.';

///
/// Four decimal octet tokens to the packed address.
///
/// Under `ParsePolicy::Compatible` this never fails (apart from a token
/// count other than 4): every token is read with `atoi` semantics and the
/// shifted values are summed unguarded.
///
pub fn octets_to_integer<S: AsRef<str>>(
    tokens: &[S],
    config: &ConversionConfig,
) -> Result<u32, ConversionError> {
    if tokens.len() != OCTET_COUNT {
        return Err(ConversionError::OctetCount { found: tokens.len() });
    }

    match config.parse_policy {
        ParsePolicy::Compatible => {
            let mut raw = [0i32; OCTET_COUNT];
            for (slot, token) in raw.iter_mut().zip(tokens) {
                *slot = parse::parse_octet_compatible(token.as_ref());
            }
            Ok(pack_raw(raw))
        }
        ParsePolicy::Strict => {
            let mut octets = [0u8; OCTET_COUNT];
            for (slot, token) in octets.iter_mut().zip(tokens) {
                *slot = parse::parse_octet_strict(token.as_ref())?;
            }
            Ok(pack_octets(octets))
        }
    }
}

/// `a.b.c.d` to the packed address.
pub fn dotted_to_integer(text: &str, config: &ConversionConfig) -> Result<u32, ConversionError> {
    let tokens = text.split(OCTET_SEPARATOR).collect::<Vec<&str>>();
    octets_to_integer(&tokens, config)
}

/// Packed address text to its octets.
pub fn integer_text_to_octets(token: &str, config: &ConversionConfig) -> Result<Octets, ConversionError> {
    let value = match config.parse_policy {
        ParsePolicy::Compatible => parse::parse_integer_compatible(token),
        ParsePolicy::Strict => parse::parse_integer_strict(token)?,
    };
    Ok(integer_to_octets(value))
}

/// Result of a conversion in either direction.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Conversion {
    Packed(u32),
    Dotted(Octets),
}

impl Display for Conversion {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self {
            Conversion::Packed(value) => write!(f, "{}", value),
            Conversion::Dotted(octets) => Display::fmt(octets, f),
        }
    }
}

///
/// Picks the direction from the shape of the input:
/// four tokens are octets, one token with a `.` is a dotted address,
/// one token without is a packed integer.
///
pub fn convert_tokens<S: AsRef<str>>(
    tokens: &[S],
    config: &ConversionConfig,
) -> Result<Conversion, ConversionError> {
    match tokens {
        [single] if single.as_ref().contains(OCTET_SEPARATOR) => {
            debug!("Converting dotted address `{}`.", single.as_ref());
            dotted_to_integer(single.as_ref(), config).map(Conversion::Packed)
        }
        [single] => {
            debug!("Converting packed address `{}`.", single.as_ref());
            integer_text_to_octets(single.as_ref(), config).map(Conversion::Dotted)
        }
        _ => octets_to_integer(tokens, config).map(Conversion::Packed),
    }
}
