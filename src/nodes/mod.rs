mod concrete;
mod filtered;
mod generator;
mod mapped;
mod merged;
mod takewhile;

pub(crate) use concrete::Concrete;
pub(crate) use filtered::Filtered;
pub(crate) use mapped::Mapped;
pub(crate) use merged::Merged;
pub(crate) use takewhile::While;

pub use generator::{constant, integers_from, Generator};
