pub mod message;
pub mod conversation;
pub mod paper;
pub mod analysis;
pub mod event;
pub mod error;

#[cfg(test)]
mod tests;

pub use error::CompanionError;
pub type Result<T> = std::result::Result<T, CompanionError>;
