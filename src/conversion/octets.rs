use std::fmt;
use std::fmt::{Display, Formatter};
use log::trace;

pub const OCTET_COUNT: usize = 4;

// Left shift of each octet, most significant first.
const SHIFTS: [u32; OCTET_COUNT] = [24, 16, 8, 0];

/// The four bytes of an IPv4 address in network order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub struct Octets([u8; OCTET_COUNT]);

impl Octets {
    pub fn new(a: u8, b: u8, c: u8, d: u8) -> Self {
        Self([a, b, c, d])
    }

    pub fn octets(&self) -> [u8; OCTET_COUNT] {
        self.0
    }

    pub fn to_u32(&self) -> u32 {
        pack_octets(self.0)
    }
}

impl From<[u8; OCTET_COUNT]> for Octets {
    fn from(octets: [u8; OCTET_COUNT]) -> Self {
        Self(octets)
    }
}

impl From<u32> for Octets {
    fn from(value: u32) -> Self {
        integer_to_octets(value)
    }
}

impl Display for Octets {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        let [a, b, c, d] = self.0;
        write!(f, "{}.{}.{}.{}", a, b, c, d)
    }
}

///
/// Places each octet at its byte position along 32 bits.
///
/// ```text
/// 138 << 24 -> 10001010 00000000 00000000 00000000
/// 2   << 16 -> 00000000 00000010 00000000 00000000
/// 244 << 8  -> 00000000 00000000 11110100 00000000
/// 72  << 0  -> 00000000 00000000 00000000 01001000
///           == 10001010 00000010 11110100 01001000 (2315449416)
/// ```
///
pub fn pack_octets(octets: [u8; OCTET_COUNT]) -> u32 {
    octets
        .iter()
        .zip(SHIFTS.iter())
        .fold(0u32, |acc, (&octet, &shift)| acc | ((octet as u32) << shift))
}

///
/// Packs `int` octets the way `(o1 << 24) + (o2 << 16) + (o3 << 8) + o4`
/// evaluates in 32-bit C arithmetic: shifted values are summed with
/// wrapping, so octets above 255 spill into the next byte up and negative
/// ones borrow from it.
///
pub fn pack_raw(octets: [i32; OCTET_COUNT]) -> u32 {
    let sum = octets
        .iter()
        .zip(SHIFTS.iter())
        .fold(0i32, |acc, (&octet, &shift)| acc.wrapping_add(octet.wrapping_shl(shift)));
    trace!("Packed raw octets {:?} into {}.", octets, sum as u32);
    sum as u32
}

///
/// Pulls each byte down to the low 8 bits with a logical right shift and
/// masks the rest away. `value` is unsigned, so the shift never drags the
/// top bit along.
///
pub fn integer_to_octets(value: u32) -> Octets {
    let mut octets = [0u8; OCTET_COUNT];
    for (octet, &shift) in octets.iter_mut().zip(SHIFTS.iter()) {
        *octet = ((value >> shift) & 0xFF) as u8;
    }
    Octets(octets)
}
