pub mod error;
pub mod health;
pub mod query;
pub mod tables;

pub use error::AppError;
