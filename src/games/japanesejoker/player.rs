use serde::{Deserialize, Serialize};

use super::card::Card;
use super::error::{JokerError, Result};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum Zone {
    Hand,
    FaceUp,
    FaceDown,
}

/// Where a played card came from and which face-down card, if any, took its place
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Removal {
    pub from: Zone,
    pub offset: usize,
    pub revealed: Option<Card>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Player {
    pub name: String,
    pub hand: Vec<Card>,
    // Visible to both players and playable
    pub face_up: Vec<Card>,
    // Hidden, only used to refill face_up
    pub face_down: Vec<Card>,
    pub tricks_won: i32,
}

impl Player {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    pub fn playable_cards(&self) -> Vec<Card> {
        let mut cards = self.hand.clone();
        cards.extend(self.face_up.iter());
        cards
    }

    pub fn can_play(&self, card: &Card) -> bool {
        self.hand.contains(card) || self.face_up.contains(card)
    }

    pub fn has_playable_cards(&self) -> bool {
        !self.hand.is_empty() || !self.face_up.is_empty()
    }

    pub fn cards_remaining(&self) -> usize {
        self.hand.len() + self.face_up.len() + self.face_down.len()
    }

    /// Plays `card` out of the hand or face-up row. A face-up card is
    /// replaced in place by the oldest face-down card while any remain.
    pub fn remove_and_replace(&mut self, card: Card) -> Result<Removal> {
        if let Some(offset) = self.hand.iter().position(|c| *c == card) {
            self.hand.remove(offset);
            return Ok(Removal {
                from: Zone::Hand,
                offset,
                revealed: None,
            });
        }
        let offset = self
            .face_up
            .iter()
            .position(|c| *c == card)
            .ok_or_else(|| JokerError::CardNotFound {
                card,
                player: self.name.clone(),
            })?;
        self.face_up.remove(offset);
        let revealed = if self.face_down.is_empty() {
            None
        } else {
            let promoted = self.face_down.remove(0);
            self.face_up.insert(offset, promoted);
            Some(promoted)
        };
        Ok(Removal {
            from: Zone::FaceUp,
            offset,
            revealed,
        })
    }
}
