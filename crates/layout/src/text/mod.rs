//! Text measurement and line breaking.

mod measure;
pub(crate) mod shaper;
mod wrapper;

pub use measure::width_of;
pub use wrapper::{pack_tokens, wrap};
