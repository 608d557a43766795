use std::{fmt, str::FromStr};

use enum_iterator::{all, Sequence};
use rand::{seq::SliceRandom, Rng};
use serde::{Deserialize, Serialize};

use super::error::{JokerError, Result};

/// Jokers outrank every suited card.
pub const JOKER_RANK: i32 = 15;
pub const DECK_SIZE: usize = 38;

#[derive(
    Debug, PartialOrd, Ord, Clone, Copy, Sequence, Serialize, Deserialize, Hash, PartialEq, Eq,
)]
#[serde(rename_all = "camelCase")]
pub enum Suit {
    Clubs,
    Diamonds,
    Hearts,
    Spades,
}

impl Suit {
    pub fn name(&self) -> &'static str {
        match self {
            Suit::Clubs => "Clubs",
            Suit::Diamonds => "Diamonds",
            Suit::Hearts => "Hearts",
            Suit::Spades => "Spades",
        }
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Suit {
    type Err = JokerError;

    fn from_str(s: &str) -> Result<Self> {
        all::<Suit>()
            .find(|suit| suit.name() == s)
            .ok_or_else(|| JokerError::InvalidCard(s.to_string()))
    }
}

#[derive(
    Debug, PartialOrd, Ord, Clone, Copy, Sequence, Serialize, Deserialize, Hash, PartialEq, Eq,
)]
#[serde(rename_all = "camelCase")]
pub enum Value {
    Six,
    Seven,
    Eight,
    Nine,
    Ten,
    Jack,
    Queen,
    King,
    Ace,
}

impl Value {
    pub fn rank(&self) -> i32 {
        match self {
            Value::Six => 6,
            Value::Seven => 7,
            Value::Eight => 8,
            Value::Nine => 9,
            Value::Ten => 10,
            Value::Jack => 11,
            Value::Queen => 12,
            Value::King => 13,
            Value::Ace => 14,
        }
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            Value::Six => "6",
            Value::Seven => "7",
            Value::Eight => "8",
            Value::Nine => "9",
            Value::Ten => "10",
            Value::Jack => "J",
            Value::Queen => "Q",
            Value::King => "K",
            Value::Ace => "A",
        }
    }
}

impl FromStr for Value {
    type Err = JokerError;

    fn from_str(s: &str) -> Result<Self> {
        all::<Value>()
            .find(|value| value.symbol() == s)
            .ok_or_else(|| JokerError::InvalidRank(s.to_string()))
    }
}

#[derive(
    Debug, PartialOrd, Ord, Clone, Copy, Sequence, Serialize, Deserialize, Hash, PartialEq, Eq,
)]
#[serde(rename_all = "camelCase")]
pub enum JokerColor {
    Black,
    Red,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, Hash, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum Card {
    Suited { value: Value, suit: Suit },
    Joker(JokerColor),
}

impl Card {
    pub fn new(value: Value, suit: Suit) -> Self {
        Card::Suited { value, suit }
    }

    /// Position of the card in the unshuffled deck
    pub fn id(&self) -> i32 {
        match self {
            Card::Suited { value, suit } => *value as i32 * 4 + *suit as i32,
            Card::Joker(color) => 36 + *color as i32,
        }
    }

    pub fn rank(&self) -> i32 {
        match self {
            Card::Suited { value, .. } => value.rank(),
            Card::Joker(_) => JOKER_RANK,
        }
    }

    /// Jokers have no suit and never match one
    pub fn suit(&self) -> Option<Suit> {
        match self {
            Card::Suited { suit, .. } => Some(*suit),
            Card::Joker(_) => None,
        }
    }

    pub fn is_joker(&self) -> bool {
        matches!(self, Card::Joker(_))
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Card::Suited { value, suit } => write!(f, "{} of {}", value.symbol(), suit),
            Card::Joker(JokerColor::Black) => f.write_str("Black Joker"),
            Card::Joker(JokerColor::Red) => f.write_str("Red Joker"),
        }
    }
}

impl FromStr for Card {
    type Err = JokerError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim() {
            "Black Joker" => Ok(Card::Joker(JokerColor::Black)),
            "Red Joker" => Ok(Card::Joker(JokerColor::Red)),
            text => {
                let (value, suit) = text
                    .split_once(" of ")
                    .ok_or_else(|| JokerError::InvalidCard(text.to_string()))?;
                Ok(Card::new(value.parse()?, suit.parse()?))
            }
        }
    }
}

/// Ordinal rank for a face symbol ("6".."10", "J", "Q", "K", "A" or a joker name)
pub fn rank_value(face: &str) -> Result<i32> {
    match face {
        "Black Joker" | "Red Joker" => Ok(JOKER_RANK),
        _ => face.parse::<Value>().map(|value| value.rank()),
    }
}

/// Suit named by a card's text form, `None` for jokers
pub fn suit_of(card: &str) -> Result<Option<Suit>> {
    card.parse::<Card>().map(|card| card.suit())
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, Hash, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum Trump {
    Suit(Suit),
    NoTrump,
}

impl Trump {
    pub fn suit(&self) -> Option<Suit> {
        match self {
            Trump::Suit(suit) => Some(*suit),
            Trump::NoTrump => None,
        }
    }

    pub fn options() -> Vec<Trump> {
        let mut options: Vec<Trump> = all::<Suit>().map(Trump::Suit).collect();
        options.push(Trump::NoTrump);
        options
    }
}

impl fmt::Display for Trump {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Trump::Suit(suit) => f.write_str(suit.name()),
            Trump::NoTrump => f.write_str("No Trump"),
        }
    }
}

impl FromStr for Trump {
    type Err = JokerError;

    /// Case-insensitive
    fn from_str(s: &str) -> Result<Self> {
        let wanted = s.trim().to_lowercase();
        Trump::options()
            .into_iter()
            .find(|trump| trump.to_string().to_lowercase() == wanted)
            .ok_or_else(|| JokerError::InvalidTrump(s.to_string()))
    }
}

pub fn deck() -> Vec<Card> {
    let mut deck: Vec<Card> = Vec::with_capacity(DECK_SIZE);
    for value in all::<Value>() {
        for suit in all::<Suit>() {
            deck.push(Card::new(value, suit));
        }
    }
    deck.extend(all::<JokerColor>().map(Card::Joker));
    deck
}

pub fn shuffled_deck(rng: &mut impl Rng) -> Vec<Card> {
    let mut deck = deck();
    deck.shuffle(rng);
    deck
}
