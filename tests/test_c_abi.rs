use std::ffi::{CStr, CString};
use std::os::raw::c_char;
use std::ptr;
use inet_conversion::lib_c::{inet_conversion_version, inet_dotted_to_int, inet_int_to_v4, inet_v4_to_int};
use inet_conversion::lib_util::{DOTTED_BUFFER_SIZE, INET_CONVERSION_VERSION};

#[test]
fn test_version() {
    assert_eq!(inet_conversion_version(), INET_CONVERSION_VERSION);
}

#[test]
fn test_v4_to_int() {
    let owned = ["138", "2", "244", "72"].map(|s| CString::new(s).unwrap());
    let ptrs = [owned[0].as_ptr(), owned[1].as_ptr(), owned[2].as_ptr(), owned[3].as_ptr()];
    assert_eq!(unsafe { inet_v4_to_int(ptrs.as_ptr()) }, 2315449416);
}

/// Null entries read as 0, a null array packs to 0.
#[test]
fn test_v4_to_int_null() {
    let one = CString::new("1").unwrap();
    let ptrs: [*const c_char; 4] = [ptr::null(), ptr::null(), ptr::null(), one.as_ptr()];
    assert_eq!(unsafe { inet_v4_to_int(ptrs.as_ptr()) }, 1);
    assert_eq!(unsafe { inet_v4_to_int(ptr::null()) }, 0);
}

#[test]
fn test_dotted_to_int() {
    let text = "255.255.255.255 trailing";
    let value = unsafe { inet_dotted_to_int(text.as_ptr() as *const c_char, 15) };
    assert_eq!(value, u32::MAX);

    let short = "1.2.3";
    let value = unsafe { inet_dotted_to_int(short.as_ptr() as *const c_char, short.len() as u32) };
    assert_eq!(value, 0);
}

#[test]
fn test_int_to_v4() {
    let mut buf = [0 as c_char; DOTTED_BUFFER_SIZE];
    let written = unsafe { inet_int_to_v4(u32::MAX, buf.as_mut_ptr(), buf.len()) };
    assert_eq!(written, 15);
    let text = unsafe { CStr::from_ptr(buf.as_ptr()) };
    assert_eq!(text.to_str().unwrap(), "255.255.255.255");
}

#[test]
fn test_int_to_v4_small_buffer() {
    let mut buf = [0 as c_char; 8];
    assert_eq!(unsafe { inet_int_to_v4(2315449416, buf.as_mut_ptr(), buf.len()) }, -1);
    assert_eq!(unsafe { inet_int_to_v4(1, buf.as_mut_ptr(), buf.len()) }, 7);
    assert_eq!(unsafe { inet_int_to_v4(0, ptr::null_mut(), 16) }, -1);
}
