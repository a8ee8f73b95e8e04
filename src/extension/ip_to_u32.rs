use std::net::Ipv4Addr;
use crate::conversion::{integer_to_octets, pack_octets};

pub trait ConvertIpU32 {
    fn to_u32(&self) -> u32;
    fn from_u32(value: u32) -> Self;
}

impl ConvertIpU32 for Ipv4Addr {
    fn to_u32(&self) -> u32 {
        pack_octets(self.octets())
    }

    fn from_u32(value: u32) -> Self {
        Ipv4Addr::from(integer_to_octets(value).octets())
    }
}
