pub mod culture;
pub mod error;

pub use culture::Culture;
pub use error::{AppError, Result};
