use log::{debug, info};
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::card::{shuffled_deck, Card, Trump};
use super::error::{JokerError, Result};
use super::player::{Player, Zone};
use super::trick::{Trick, TrickResult, TrickState};

/// Hand cards dealt before trump is named
pub const INITIAL_HAND_SIZE: usize = 3;
/// Cards in each of the face-up and face-down rows
pub const ROW_SIZE: usize = 5;
/// Hand cards dealt after trump is named
pub const LATE_HAND_SIZE: usize = 5;
/// Every trick takes one playable card from each player
pub const TRICKS_PER_GAME: i32 = (INITIAL_HAND_SIZE + 2 * ROW_SIZE + LATE_HAND_SIZE) as i32;
/// Player leading the first trick
pub const FIRST_LEADER: usize = 0;

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum State {
    #[default]
    NameTrump,
    Play,
    GameOver,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum Move {
    NameTrump(Trump),
    Play(Card),
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum Outcome {
    Winner(usize),
    Draw,
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum ChangeType {
    #[default]
    Deal,
    Trump,
    Play,
    RevealCard,
    TricksToWinner,
    GameOver,
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum Location {
    #[default]
    Deck,
    Hand,
    FaceUp,
    FaceDown,
    Play,
    TricksTaken,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Change {
    #[serde(rename(serialize = "type", deserialize = "type"))]
    pub change_type: ChangeType,
    #[serde(rename(serialize = "id", deserialize = "id"))]
    pub object_id: i32,
    pub dest: Location,
    pub player: usize,
    pub offset: usize,
    pub tricks_taken: i32,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct PlayerSummary {
    pub name: String,
    pub tricks_won: i32,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct GameSummary {
    pub players: Vec<PlayerSummary>,
    pub dealer: String,
    pub trump: Option<Trump>,
    pub tricks_played: i32,
    pub outcome: Option<Outcome>,
    pub winner: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JapaneseJokerGame {
    // Current game state
    pub state: State,
    // Both players in seating order; index 0 leads the first trick
    pub players: [Player; 2],
    pub dealer: usize,
    // Which player is making a move now
    pub current_player: usize,
    pub trump: Option<Trump>,
    pub current_trick: Option<Trick>,
    pub tricks_played: i32,
    // Undealt cards, drawn from the end
    pub deck: Vec<Card>,
    pub outcome: Option<Outcome>,
    // List of list of events describing how each move changed the table
    pub changes: Vec<Vec<Change>>,
    // Skip building change events when only the result matters
    pub no_changes: bool,
}

impl JapaneseJokerGame {
    /// Picks a dealer, shuffles and deals the first three hand cards to each
    /// player. The non-dealer then names trump.
    pub fn new(names: [String; 2], rng: &mut impl Rng) -> Result<Self> {
        validate_names(&names)?;
        let [first, second] = names;
        let mut game = Self {
            players: [Player::new(first), Player::new(second)],
            ..Default::default()
        };
        game.dealer = rng.gen_range(0..2);
        game.deck = shuffled_deck(rng);
        info!("{} deals", game.players[game.dealer].name);
        game.deal_hands()?;
        game.state = State::NameTrump;
        game.current_player = game.non_dealer();
        Ok(game)
    }

    pub fn with_no_changes(&mut self) {
        self.no_changes = true;
        self.changes.clear();
    }

    pub fn non_dealer(&self) -> usize {
        (self.dealer + 1) % 2
    }

    fn draw(&mut self) -> Result<Card> {
        self.deck.pop().ok_or(JokerError::DeckExhausted)
    }

    fn new_change(&mut self) -> usize {
        self.changes.push(vec![]);
        self.changes.len() - 1
    }

    #[inline]
    fn add_change(&mut self, index: usize, change: Change) {
        if !self.no_changes {
            self.changes[index].push(change);
        }
    }

    fn deal_hands(&mut self) -> Result<()> {
        let deal_index = self.new_change();
        for offset in 0..INITIAL_HAND_SIZE {
            for player in 0..2 {
                let card = self.draw()?;
                self.players[player].hand.push(card);
                self.add_change(
                    deal_index,
                    Change {
                        change_type: ChangeType::Deal,
                        object_id: card.id(),
                        dest: Location::Hand,
                        player,
                        offset,
                        ..Default::default()
                    },
                );
            }
        }
        debug!("dealt {} hand cards to each player", INITIAL_HAND_SIZE);
        Ok(())
    }

    fn deal_rows_and_hands(&mut self) -> Result<()> {
        let deal_index = self.new_change();
        for offset in 0..ROW_SIZE {
            for player in 0..2 {
                let face_down = self.draw()?;
                self.players[player].face_down.push(face_down);
                let face_up = self.draw()?;
                self.players[player].face_up.push(face_up);
                self.add_change(
                    deal_index,
                    Change {
                        change_type: ChangeType::Deal,
                        object_id: face_down.id(),
                        dest: Location::FaceDown,
                        player,
                        offset,
                        ..Default::default()
                    },
                );
                self.add_change(
                    deal_index,
                    Change {
                        change_type: ChangeType::Deal,
                        object_id: face_up.id(),
                        dest: Location::FaceUp,
                        player,
                        offset,
                        ..Default::default()
                    },
                );
            }
        }
        for round in 0..LATE_HAND_SIZE {
            for player in 0..2 {
                let card = self.draw()?;
                self.players[player].hand.push(card);
                self.add_change(
                    deal_index,
                    Change {
                        change_type: ChangeType::Deal,
                        object_id: card.id(),
                        dest: Location::Hand,
                        player,
                        offset: INITIAL_HAND_SIZE + round,
                        ..Default::default()
                    },
                );
            }
        }
        debug!(
            "dealt rows and hands, {} cards left undealt",
            self.deck.len()
        );
        Ok(())
    }

    pub fn get_moves(&self) -> Vec<Move> {
        match self.state {
            State::NameTrump => Trump::options().into_iter().map(Move::NameTrump).collect(),
            State::Play => self.players[self.current_player]
                .playable_cards()
                .into_iter()
                .map(Move::Play)
                .collect(),
            State::GameOver => vec![],
        }
    }

    /// Returns the finished trick when the move completed one
    pub fn apply_move(&mut self, action: Move) -> Result<Option<TrickResult>> {
        match action {
            Move::NameTrump(trump) => {
                self.name_trump(trump)?;
                Ok(None)
            }
            Move::Play(card) => self.play_card(card),
        }
    }

    pub fn name_trump(&mut self, trump: Trump) -> Result<()> {
        if self.state != State::NameTrump {
            return Err(JokerError::WrongState(self.state));
        }
        self.trump = Some(trump);
        let trump_index = self.new_change();
        self.add_change(
            trump_index,
            Change {
                change_type: ChangeType::Trump,
                player: self.current_player,
                ..Default::default()
            },
        );
        info!("{} names {}", self.players[self.current_player].name, trump);
        self.deal_rows_and_hands()?;
        self.state = State::Play;
        self.current_player = FIRST_LEADER;
        self.current_trick = Some(Trick::new(FIRST_LEADER, trump));
        Ok(())
    }

    pub fn play_card(&mut self, card: Card) -> Result<Option<TrickResult>> {
        if self.state != State::Play {
            return Err(JokerError::WrongState(self.state));
        }
        let player = self.current_player;
        if !self.players[player].can_play(&card) {
            return Err(JokerError::IllegalMove(card.to_string()));
        }
        let mut trick = self
            .current_trick
            .ok_or(JokerError::WrongState(self.state))?;
        let removal = self.players[player].remove_and_replace(card)?;
        debug!(
            "{} plays {} from {:?}",
            self.players[player].name, card, removal.from
        );

        let play_index = self.new_change();
        self.add_change(
            play_index,
            Change {
                change_type: ChangeType::Play,
                object_id: card.id(),
                dest: Location::Play,
                player,
                offset: removal.offset,
                ..Default::default()
            },
        );
        if let Some(revealed) = removal.revealed {
            debug_assert_eq!(removal.from, Zone::FaceUp);
            self.add_change(
                play_index,
                Change {
                    change_type: ChangeType::RevealCard,
                    object_id: revealed.id(),
                    dest: Location::FaceUp,
                    player,
                    offset: removal.offset,
                    ..Default::default()
                },
            );
        }

        match trick.play(card) {
            TrickState::AwaitingLead => unreachable!("a card was just played"),
            TrickState::AwaitingFollow => {
                self.current_player = trick.follow_player();
                self.current_trick = Some(trick);
                Ok(None)
            }
            TrickState::Resolved(_) => {
                let result = trick.result().ok_or(JokerError::WrongState(self.state))?;
                self.finish_trick(result)?;
                Ok(Some(result))
            }
        }
    }

    fn finish_trick(&mut self, result: TrickResult) -> Result<()> {
        let winner = result.winner;
        self.players[winner].tricks_won += 1;
        self.tricks_played += 1;
        info!(
            "{} wins trick {} with {}",
            self.players[winner].name,
            self.tricks_played,
            result.winning_card()
        );
        let trick_index = self.new_change();
        for card in [result.lead, result.follow] {
            self.add_change(
                trick_index,
                Change {
                    change_type: ChangeType::TricksToWinner,
                    object_id: card.id(),
                    dest: Location::TricksTaken,
                    player: winner,
                    tricks_taken: self.players[winner].tricks_won,
                    ..Default::default()
                },
            );
        }

        // winner of the trick leads
        self.current_player = winner;
        if self.players.iter().any(|p| p.has_playable_cards()) {
            let trump = self.trump.ok_or(JokerError::WrongState(self.state))?;
            self.current_trick = Some(Trick::new(winner, trump));
        } else {
            self.end_game();
        }
        Ok(())
    }

    fn end_game(&mut self) {
        self.state = State::GameOver;
        self.current_trick = None;
        let [first, second] = [self.players[0].tricks_won, self.players[1].tricks_won];
        let outcome = if first > second {
            Outcome::Winner(0)
        } else if second > first {
            Outcome::Winner(1)
        } else {
            Outcome::Draw
        };
        self.outcome = Some(outcome);
        let game_over_index = self.new_change();
        self.add_change(
            game_over_index,
            Change {
                change_type: ChangeType::GameOver,
                ..Default::default()
            },
        );
        match outcome {
            Outcome::Winner(player) => info!(
                "game over after {} tricks, {} wins {}-{}",
                self.tricks_played,
                self.players[player].name,
                self.players[player].tricks_won,
                self.players[(player + 1) % 2].tricks_won
            ),
            Outcome::Draw => info!("game over after {} tricks, draw", self.tricks_played),
        }
    }

    pub fn summary(&self) -> GameSummary {
        GameSummary {
            players: self
                .players
                .iter()
                .map(|p| PlayerSummary {
                    name: p.name.clone(),
                    tricks_won: p.tricks_won,
                })
                .collect(),
            dealer: self.players[self.dealer].name.clone(),
            trump: self.trump,
            tricks_played: self.tricks_played,
            outcome: self.outcome,
            winner: match self.outcome {
                Some(Outcome::Winner(player)) => Some(self.players[player].name.clone()),
                _ => None,
            },
        }
    }
}

/// Names must be non-empty and distinct (case-sensitive)
pub fn validate_names(names: &[String; 2]) -> Result<()> {
    if names.iter().any(|name| name.trim().is_empty()) {
        return Err(JokerError::EmptyName);
    }
    if names[0] == names[1] {
        return Err(JokerError::DuplicateName(names[1].clone()));
    }
    Ok(())
}
