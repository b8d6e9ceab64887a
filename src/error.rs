use std::result;

use serenity::prelude::SerenityError;
use thiserror::Error as ThisError;

pub type Result<T> = result::Result<T, Error>;

#[derive(Debug, ThisError)]
pub enum Error {
    #[error("{0}")]
    Serenity(#[from] SerenityError),
    #[error("{0}")]
    Database(#[from] sqlx::Error),
    #[error("{0}")]
    Ticket(String),
    #[error("{0}")]
    Giveaway(String),
}
