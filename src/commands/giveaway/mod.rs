pub mod handlers;
pub mod parser;
pub mod winner;

pub use crate::commands::giveaway::handlers::{gend, greroll, gstart};
