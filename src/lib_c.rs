use std::fmt::Write;
use std::ptr;
use libc::{c_char, size_t};
use log::{trace, warn};
use crate::conversion::config::ConversionConfig;
use crate::conversion::octets::OCTET_COUNT;
use crate::conversion::{dotted_to_integer, integer_to_octets, octets_to_integer};
use crate::lib_util::{
    string_from_c_ptr, string_from_lengthen_ptr, DOTTED_BUFFER_SIZE, INET_CONVERSION_VERSION,
};

#[no_mangle]
pub extern "C" fn inet_conversion_version() -> i32 {
    INET_CONVERSION_VERSION
}

///
/// `octets` points at 4 NUL-terminated strings. Each is read with `atoi`
/// semantics, a null entry reads as 0.
///
/// # Safety
/// `octets` must be null or point at 4 readable pointers, each null or a
/// valid C string.
///
#[no_mangle]
pub unsafe extern "C" fn inet_v4_to_int(octets: *const *const c_char) -> u32 {
    if octets.is_null() {
        warn!("lib: inet_v4_to_int called with null octets.");
        return 0;
    }

    let tokens = (0..OCTET_COUNT)
        .map(|i| string_from_c_ptr(*octets.add(i)))
        .collect::<Vec<String>>();

    match octets_to_integer(&tokens, &ConversionConfig::default()) {
        Ok(value) => value,
        Err(e) => {
            warn!("lib: Failed to pack octets ({}).", e);
            0
        }
    }
}

///
/// `text` holds `len` bytes of `a.b.c.d`, not necessarily NUL-terminated.
/// Returns 0 when the text does not split into 4 octets.
///
/// # Safety
/// `text` must be null or point at `len` readable bytes.
///
#[no_mangle]
pub unsafe extern "C" fn inet_dotted_to_int(text: *const c_char, len: u32) -> u32 {
    let text = string_from_lengthen_ptr(text, len);
    match dotted_to_integer(&text, &ConversionConfig::default()) {
        Ok(value) => value,
        Err(e) => {
            warn!("lib: Failed to pack `{}` ({}).", text, e);
            0
        }
    }
}

///
/// Writes the NUL-terminated dotted form of `value` into `buf`.
/// Returns the number of bytes written without the terminator, or -1 when
/// `buf` is null or `len` is too small. 16 bytes always suffice.
///
/// # Safety
/// `buf` must be null or point at `len` writable bytes.
///
#[no_mangle]
pub unsafe extern "C" fn inet_int_to_v4(value: u32, buf: *mut c_char, len: size_t) -> i32 {
    let mut text = String::with_capacity(DOTTED_BUFFER_SIZE);
    // Writing into a String cannot fail.
    let _ = write!(text, "{}", integer_to_octets(value));
    let bytes = text.as_bytes();

    if buf.is_null() || len < bytes.len() + 1 {
        warn!("lib: Buffer too small for `{}` ({} bytes).", text, len);
        return -1;
    }

    ptr::copy_nonoverlapping(bytes.as_ptr() as *const c_char, buf, bytes.len());
    *buf.add(bytes.len()) = 0;
    trace!("lib: Wrote `{}` for {}.", text, value);
    bytes.len() as i32
}
