pub mod conversion;
pub mod extension;
pub mod lib_c;
pub mod lib_util;

pub use crate::conversion::config::{ConversionConfig, ParsePolicy};
pub use crate::conversion::error::ConversionError;
pub use crate::conversion::octets::Octets;
pub use crate::conversion::{
    convert_tokens, dotted_to_integer, integer_text_to_octets, integer_to_octets,
    octets_to_integer, Conversion,
};
