use log::debug;
use crate::conversion::error::ConversionError;

pub const OCTET_MAX: u32 = u8::MAX as u32;

// C `isspace` in the "C" locale. Unlike `u8::is_ascii_whitespace` it includes \v.
fn is_c_space(b: u8) -> bool {
    matches!(b, b' ' | b'\t' | b'\n' | 0x0b | 0x0c | b'\r')
}

///
/// Parses like C `atoi`: leading whitespace, an optional sign, then as many
/// decimal digits as follow. Anything unparseable reads as 0.
///
/// The value saturates to the 64-bit `long` range the way `strtol` does and is
/// then truncated to a 32-bit `int`.
///
pub fn atoi(token: &str) -> i32 {
    let bytes = token.as_bytes();
    let mut i = 0;
    while i < bytes.len() && is_c_space(bytes[i]) {
        i += 1;
    }

    let negative = match bytes.get(i) {
        Some(b'-') => {
            i += 1;
            true
        }
        Some(b'+') => {
            i += 1;
            false
        }
        _ => false,
    };

    let mut magnitude: u64 = 0;
    for b in bytes[i..].iter().take_while(|b| b.is_ascii_digit()) {
        magnitude = magnitude
            .saturating_mul(10)
            .saturating_add((b - b'0') as u64);
    }

    let long = if negative {
        if magnitude > i64::MAX as u64 {
            i64::MIN
        } else {
            -(magnitude as i64)
        }
    } else {
        magnitude.min(i64::MAX as u64) as i64
    };
    long as i32
}

/// `atoi` for an octet. Logs when the token did not read cleanly.
pub fn parse_octet_compatible(token: &str) -> i32 {
    let value = atoi(token);
    if !is_plain_decimal(token) || !(0..=OCTET_MAX as i32).contains(&value) {
        debug!("Octet `{}` read as {} (atoi semantics).", token, value);
    }
    value
}

pub fn parse_octet_strict(token: &str) -> Result<u8, ConversionError> {
    let value = parse_decimal_strict(token, OCTET_MAX)?;
    Ok(value as u8)
}

/// `atoi` for a packed address, reinterpreted as unsigned.
pub fn parse_integer_compatible(token: &str) -> u32 {
    let value = atoi(token);
    if !is_plain_decimal(token) || value < 0 {
        debug!("Integer `{}` read as {} (atoi semantics).", token, value as u32);
    }
    value as u32
}

pub fn parse_integer_strict(token: &str) -> Result<u32, ConversionError> {
    parse_decimal_strict(token, u32::MAX)
}

fn digits_of(token: &str) -> &str {
    token.strip_prefix('+').unwrap_or(token)
}

fn is_plain_decimal(token: &str) -> bool {
    let digits = digits_of(token);
    !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit())
}

fn parse_decimal_strict(token: &str, max: u32) -> Result<u32, ConversionError> {
    if !is_plain_decimal(token) {
        return Err(ConversionError::Parse { token: token.to_string() });
    }

    let out_of_range = || ConversionError::Range {
        token: token.to_string(),
        max,
    };

    // Only overflow can fail here, every byte is already a digit.
    let value = digits_of(token)
        .parse::<u32>()
        .map_err(|_| out_of_range())?;
    if value > max {
        return Err(out_of_range());
    }
    Ok(value)
}
