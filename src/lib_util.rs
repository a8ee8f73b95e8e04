use std::ffi::CStr;
use libc::c_char;

pub const INET_CONVERSION_VERSION: i32 = 1;

/// Longest dotted form, `255.255.255.255`, plus the NUL terminator.
pub const DOTTED_BUFFER_SIZE: usize = 16;

pub fn shared_version_code() -> String {
    String::from(env!("CARGO_PKG_VERSION"))
}

pub fn string_from_lengthen_ptr(ptr: *const c_char, len: u32) -> String {
    if ptr.is_null() {
        return String::new();
    }
    let slice = unsafe { std::slice::from_raw_parts(ptr as *const u8, len as usize) };
    String::from_utf8_lossy(slice).to_string()
}

/// Null reads as the empty string, which `atoi` turns into 0.
pub fn string_from_c_ptr(ptr: *const c_char) -> String {
    if ptr.is_null() {
        return String::new();
    }
    unsafe { CStr::from_ptr(ptr) }.to_string_lossy().to_string()
}
