pub(crate) use num::*;

mod error;
mod node;
mod value;
pub mod stop;

pub use error::*;
pub use node::*;
pub use value::*;

/// The type for representing all numbers carried by sequence values. The requirement is that it
/// allows arbitrary-precision integer arithmetics. Currently alias to BigInt, but may become an
/// i64 with BigInt fallback in the future for better performance.
pub type Number = num::BigInt;
