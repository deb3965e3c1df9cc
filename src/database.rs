pub mod connection;
pub mod dto;
pub mod repository;
pub mod validation;

pub use connection::{close_connection, establish_connection};
