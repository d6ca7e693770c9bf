//! HTTP header fields and the fixed-capacity collection that holds them.
mod header;
mod map;
mod error;

pub use header::Header;
pub use map::{Headers, Iter};
pub use error::CapacityError;

#[cfg(test)]
mod test;
