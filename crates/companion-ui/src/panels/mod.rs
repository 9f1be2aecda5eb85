pub mod chat;
pub mod draft;
