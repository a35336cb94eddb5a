pub use engine::{Engine, EngineBuilder};
pub use error::Error;
pub use gaps::GapSizes;
pub use msa::{Msa, Row, REFERENCE_ID};
pub use reconcile::{reconcile, reconcile_alignments, reconcile_in};

mod engine;
mod error;
mod gaps;
mod msa;
mod reconcile;
