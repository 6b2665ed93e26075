pub mod catch_up;

pub use catch_up::{CatchUpReport, CatchUpService};
