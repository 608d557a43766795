use thiserror::Error;

use super::card::Card;

pub type Result<T> = std::result::Result<T, JokerError>;

#[derive(Debug, Error)]
pub enum JokerError {
    #[error("unknown card value: {0:?}")]
    InvalidRank(String),
    #[error("not a card: {0:?}")]
    InvalidCard(String),
    #[error("not a trump choice: {0:?}")]
    InvalidTrump(String),
    #[error("{card} is not in {player}'s hand or face-up cards")]
    CardNotFound { card: Card, player: String },
    #[error("{0} cannot be played now")]
    IllegalMove(String),
    #[error("move not allowed while the game is in the {0:?} state")]
    WrongState(super::game::State),
    #[error("player name {0:?} is already taken")]
    DuplicateName(String),
    #[error("player name must not be empty")]
    EmptyName,
    #[error("deck ran out while dealing")]
    DeckExhausted,
    #[error("input closed before the game finished")]
    InputClosed,
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
