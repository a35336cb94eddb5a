pub use pairstack_core_rs::num::Score;

pub mod api;
pub mod pairwise;
