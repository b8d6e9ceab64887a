pub mod access;
pub mod handlers;
pub mod transcript;
pub mod views;
