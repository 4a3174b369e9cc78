pub mod environment;
mod error;
mod extractors;
pub mod response;

pub use environment::Environment;
pub use error::AppError;
pub use extractors::{JsonBody, PathParam};
pub use response::{ApiResponse, Message};
