use std::io::{BufRead, Write};

use colored::Colorize;
use rand::Rng;

use crate::games::japanesejoker::{
    card::JokerColor, Card, JapaneseJokerGame, Move, Outcome, Player, Result, State, Suit, Trump,
};
use crate::utils::prompt_until;

/// Terminal front end: prompts both players in turn and prints the table
pub struct Console<R, W> {
    input: R,
    output: W,
    color: bool,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W, color: bool) -> Self {
        Self {
            input,
            output,
            color,
        }
    }

    pub fn into_output(self) -> W {
        self.output
    }

    fn card_text(&self, card: &Card) -> String {
        let text = card.to_string();
        if !self.color {
            return text;
        }
        match card {
            Card::Joker(JokerColor::Red) => text.red().bold().to_string(),
            Card::Joker(JokerColor::Black) => text.bold().to_string(),
            Card::Suited { suit, .. } => match suit {
                Suit::Hearts | Suit::Diamonds => text.red().to_string(),
                Suit::Clubs | Suit::Spades => text.blue().to_string(),
            },
        }
    }

    fn cards_text(&self, cards: &[Card]) -> String {
        format!(
            "[{}]",
            cards
                .iter()
                .map(|c| self.card_text(c))
                .collect::<Vec<_>>()
                .join(", ")
        )
    }

    fn show_hand(&mut self, player: &Player) -> Result<()> {
        let hand = self.cards_text(&player.hand);
        writeln!(self.output, "{}'s hand: {}", player.name, hand)?;
        Ok(())
    }

    fn show_face_up(&mut self, player: &Player) -> Result<()> {
        let face_up = self.cards_text(&player.face_up);
        writeln!(self.output, "{}'s face-up cards: {}", player.name, face_up)?;
        Ok(())
    }

    fn show_face_down(&mut self, player: &Player) -> Result<()> {
        writeln!(
            self.output,
            "{}'s face-down cards: {} hidden",
            player.name,
            player.face_down.len()
        )?;
        Ok(())
    }

    pub fn read_names(&mut self) -> Result<[String; 2]> {
        let mut names: Vec<String> = Vec::with_capacity(2);
        while names.len() < 2 {
            let prompt = format!("Enter name for player {}: ", names.len() + 1);
            let taken = names.clone();
            let name = prompt_until(
                &mut self.input,
                &mut self.output,
                &prompt,
                "Name already exists or is empty. Please choose a different name.",
                |line| {
                    (!line.is_empty() && !taken.iter().any(|n| n == line)).then(|| line.to_string())
                },
            )?;
            names.push(name);
        }
        let second = names.pop().unwrap_or_default();
        let first = names.pop().unwrap_or_default();
        Ok([first, second])
    }

    pub fn choose_trump(&mut self, game: &JapaneseJokerGame) -> Result<Trump> {
        let prompt = format!(
            "{}, choose a trump suit (Clubs, Diamonds, Hearts, Spades) or 'No Trump': ",
            game.players[game.current_player].name
        );
        prompt_until(
            &mut self.input,
            &mut self.output,
            &prompt,
            "Invalid input. Please choose a valid trump suit or 'No Trump'.",
            |line| line.parse::<Trump>().ok(),
        )
    }

    pub fn choose_card(&mut self, game: &JapaneseJokerGame) -> Result<Card> {
        let player = &game.players[game.current_player];
        let opponent = &game.players[(game.current_player + 1) % 2];
        self.show_face_up(opponent)?;
        self.show_hand(player)?;
        self.show_face_up(player)?;
        let prompt = format!(
            "{}, play a card from your hand or face-up cards: ",
            player.name
        );
        prompt_until(
            &mut self.input,
            &mut self.output,
            &prompt,
            "Invalid card.",
            |line| line.parse::<Card>().ok().filter(|card| player.can_play(card)),
        )
    }

    /// Runs one whole game and returns it in its finished state
    pub fn play(&mut self, rng: &mut impl Rng) -> Result<JapaneseJokerGame> {
        let names = self.read_names()?;
        let mut game = JapaneseJokerGame::new(names, rng)?;
        writeln!(
            self.output,
            "{} is the dealer.",
            game.players[game.dealer].name
        )?;
        for player in &game.players {
            self.show_hand(player)?;
        }

        let trump = self.choose_trump(&game)?;
        game.apply_move(Move::NameTrump(trump))?;
        writeln!(self.output, "Trump suit: {}", trump)?;
        for player in &game.players {
            self.show_hand(player)?;
            self.show_face_up(player)?;
            self.show_face_down(player)?;
        }

        while game.state == State::Play {
            let card = self.choose_card(&game)?;
            if let Some(result) = game.apply_move(Move::Play(card))? {
                let winning_card = self.card_text(&result.winning_card());
                writeln!(
                    self.output,
                    "{} wins the trick with {}",
                    game.players[result.winner].name, winning_card
                )?;
            }
        }

        for player in &game.players {
            writeln!(self.output, "{} won {} tricks.", player.name, player.tricks_won)?;
        }
        match game.outcome {
            Some(Outcome::Winner(player)) => {
                writeln!(self.output, "{} wins the game!", game.players[player].name)?
            }
            Some(Outcome::Draw) | None => writeln!(self.output, "The game is a draw!")?,
        }
        Ok(game)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::japanesejoker::{game::TRICKS_PER_GAME, JokerError};
    use rand::{rngs::StdRng, SeedableRng};
    use std::io::Cursor;

    fn console(input: &str) -> Console<Cursor<String>, Vec<u8>> {
        Console::new(Cursor::new(input.to_string()), vec![], false)
    }

    fn output(console: Console<Cursor<String>, Vec<u8>>) -> String {
        String::from_utf8(console.into_output()).unwrap()
    }

    #[test]
    fn test_read_names_rejects_duplicates() {
        let mut console = console("ann\n\nann\nAnn\n");
        let names = console.read_names().unwrap();
        assert_eq!(names, ["ann".to_string(), "Ann".to_string()]);
        assert_eq!(output(console).matches("different name").count(), 2);
    }

    #[test]
    fn test_choose_trump_is_case_insensitive() {
        let mut rng = StdRng::seed_from_u64(1);
        let game =
            JapaneseJokerGame::new(["a".to_string(), "b".to_string()], &mut rng).unwrap();
        let mut console = console("jokers\nNO TRUMP\n");
        assert_eq!(console.choose_trump(&game).unwrap(), Trump::NoTrump);
        assert!(output(console).contains("Invalid input."));
    }

    #[test]
    fn test_choose_card_only_accepts_playable_cards() {
        let mut rng = StdRng::seed_from_u64(4);
        let mut game =
            JapaneseJokerGame::new(["a".to_string(), "b".to_string()], &mut rng).unwrap();
        game.apply_move(Move::NameTrump(Trump::Suit(Suit::Spades)))
            .unwrap();
        let hidden = game.players[0].face_down[0];
        let opponents = game.players[1].hand[0];
        let mine = game.players[0].face_up[0];
        let input = format!("{}\n{}\nnonsense\n{}\n", hidden, opponents, mine);
        let mut console = console(&input);
        assert_eq!(console.choose_card(&game).unwrap(), mine);
        assert_eq!(output(console).matches("Invalid card.").count(), 3);
    }

    #[test]
    fn test_scripted_game() {
        // play the same seeded game directly to learn which cards to type
        let seed = 99;
        let names = ["alice".to_string(), "bob".to_string()];
        let mut rng = StdRng::seed_from_u64(seed);
        let mut game = JapaneseJokerGame::new(names, &mut rng).unwrap();
        let mut input = String::from("alice\nalice\nbob\nclubs\n");
        game.apply_move(Move::NameTrump(Trump::Suit(Suit::Clubs)))
            .unwrap();
        while game.state == State::Play {
            let action = *game.get_moves().last().unwrap();
            if let Move::Play(card) = action {
                input.push_str(&format!("{}\n", card));
            }
            game.apply_move(action).unwrap();
        }

        let mut rng = StdRng::seed_from_u64(seed);
        let mut console = console(&input);
        let played = console.play(&mut rng).unwrap();
        assert_eq!(played.summary(), game.summary());
        assert_eq!(played.tricks_played, TRICKS_PER_GAME);

        let text = output(console);
        assert_eq!(text.matches("wins the trick with").count(), 18);
        assert!(text.contains("Trump suit: Clubs"));
        assert!(!text.contains("Invalid card."));
        let last_line = text.lines().last().unwrap();
        match game.outcome {
            Some(Outcome::Winner(player)) => assert_eq!(
                last_line,
                format!("{} wins the game!", game.players[player].name)
            ),
            _ => assert_eq!(last_line, "The game is a draw!"),
        }
    }

    #[test]
    fn test_input_closed_mid_game() {
        let mut rng = StdRng::seed_from_u64(5);
        let mut console = console("alice\nbob\nhearts\n");
        assert!(matches!(
            console.play(&mut rng),
            Err(JokerError::InputClosed)
        ));
    }
}
