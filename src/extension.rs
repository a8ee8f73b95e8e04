pub mod ip_to_u32;
