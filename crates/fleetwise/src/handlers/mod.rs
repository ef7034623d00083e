pub mod chat;
pub mod error;
pub mod fleet;
pub mod health;
pub mod profiles;

pub use error::AppError;
