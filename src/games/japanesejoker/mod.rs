/*
Game: Japanese Joker
Two players, a 38 card deck (6 through Ace in four suits plus two jokers),
face-up rows refilled from face-down rows, and trump named by the non-dealer.
*/

pub mod card;
pub mod error;
pub mod game;
pub mod player;
pub mod trick;

// Re-export the main types
pub use card::{Card, Suit, Trump};
pub use error::{JokerError, Result};
pub use game::{JapaneseJokerGame, Move, Outcome, State};
pub use player::Player;
pub use trick::{get_winner, TrickResult};
