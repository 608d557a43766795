use serde::{Deserialize, Serialize};

use super::card::{Card, Trump};

pub const LEAD: usize = 0;
pub const FOLLOW: usize = 1;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum TrickState {
    AwaitingLead,
    AwaitingFollow,
    // Player index of the winner
    Resolved(usize),
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Trick {
    pub lead_player: usize,
    pub trump: Trump,
    pub lead: Option<Card>,
    pub follow: Option<Card>,
}

/// A finished trick
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct TrickResult {
    pub lead_player: usize,
    pub lead: Card,
    pub follow: Card,
    pub winner: usize,
}

impl TrickResult {
    pub fn winning_card(&self) -> Card {
        if self.winner == self.lead_player {
            self.lead
        } else {
            self.follow
        }
    }
}

impl Trick {
    pub fn new(lead_player: usize, trump: Trump) -> Self {
        Self {
            lead_player,
            trump,
            lead: None,
            follow: None,
        }
    }

    pub fn follow_player(&self) -> usize {
        (self.lead_player + 1) % 2
    }

    /// Player expected to play next, `None` once resolved
    pub fn to_play(&self) -> Option<usize> {
        match self.state() {
            TrickState::AwaitingLead => Some(self.lead_player),
            TrickState::AwaitingFollow => Some(self.follow_player()),
            TrickState::Resolved(_) => None,
        }
    }

    pub fn state(&self) -> TrickState {
        match (self.lead, self.follow) {
            (None, _) => TrickState::AwaitingLead,
            (Some(_), None) => TrickState::AwaitingFollow,
            (Some(lead), Some(follow)) => {
                if get_winner(lead, follow, self.trump) == LEAD {
                    TrickState::Resolved(self.lead_player)
                } else {
                    TrickState::Resolved(self.follow_player())
                }
            }
        }
    }

    /// Records the next card. Plays after resolution are ignored.
    pub fn play(&mut self, card: Card) -> TrickState {
        match self.state() {
            TrickState::AwaitingLead => self.lead = Some(card),
            TrickState::AwaitingFollow => self.follow = Some(card),
            TrickState::Resolved(_) => {}
        }
        self.state()
    }

    pub fn result(&self) -> Option<TrickResult> {
        match (self.state(), self.lead, self.follow) {
            (TrickState::Resolved(winner), Some(lead), Some(follow)) => Some(TrickResult {
                lead_player: self.lead_player,
                lead,
                follow,
                winner,
            }),
            _ => None,
        }
    }
}

/// Returns `LEAD` or `FOLLOW`.
///
/// Matching suits (two jokers count as matching) compare by rank with ties
/// going to the lead. Otherwise a trump follow wins and anything else loses.
pub fn get_winner(lead: Card, follow: Card, trump: Trump) -> usize {
    if follow.suit() == lead.suit() {
        if follow.rank() > lead.rank() {
            FOLLOW
        } else {
            LEAD
        }
    } else if follow.suit().is_some() && follow.suit() == trump.suit() {
        FOLLOW
    } else {
        LEAD
    }
}
