#![doc = include_str!("RUSTDOC.md")]

pub mod forwarder;

#[cfg(test)]
pub mod test_support;
