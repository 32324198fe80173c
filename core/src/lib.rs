pub mod error;
pub mod input;
pub mod points;
pub mod reconstruct;
pub mod report;
pub mod system;
pub mod verify;

pub use error::{ReconstructError, Result};
pub use reconstruct::reconstruct;
