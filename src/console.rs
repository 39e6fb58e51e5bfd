//! Line-oriented console front end.
//!
//! [`Console`] drives a [`Game`] over any reader/writer pair: prompts are
//! written, one line is read per decision, and every deal, draw and outcome
//! is reported as text. Unrecognised answers fall back to "stay" and "no".

use std::io::{self, BufRead, Write};

use crate::error::ConsoleError;
use crate::game::{Game, GameState};
use crate::hand::{Hand, hand_value};
use crate::options::GameOptions;
use crate::result::{Decision, RoundResult, Winner};

/// Answer that takes another card.
const HIT: &str = "h";
/// Answer that starts another round.
const PLAY_AGAIN: &str = "y";

/// A console session for a single player.
pub struct Console<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    /// Creates a session reading answers from `input` and writing to `output`.
    pub const fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Consumes the session and returns the output sink.
    pub fn into_output(self) -> W {
        self.output
    }

    /// Runs a whole session: greeting, then rounds until the player stops.
    ///
    /// # Errors
    ///
    /// Returns an error if reading input or writing output fails.
    pub fn run(&mut self, options: GameOptions, seed: u64) -> Result<(), ConsoleError> {
        let name = self.greet()?;
        let mut game = Game::new(name, options, seed);
        self.play_rounds(&mut game)
    }

    /// Plays rounds on `game` until the player declines another.
    ///
    /// A round that fails inside the engine is reported and discarded; the
    /// player is still asked whether to play again.
    ///
    /// # Errors
    ///
    /// Returns an error if reading input or writing output fails.
    pub fn play_rounds(&mut self, game: &mut Game) -> Result<(), ConsoleError> {
        loop {
            match self.play_round(game) {
                Ok(_) => {}
                Err(err) if err.is_round_fatal() => {
                    log::error!("round aborted: {err}");
                    writeln!(self.output, "Round aborted: {err}")?;
                }
                Err(err) => return Err(err),
            }

            let prompt = format!("Hey {}, do you want to play again? (y/n)", game.player().name());
            if self.ask(&prompt)? != PLAY_AGAIN {
                break;
            }
            game.clear_round();
        }

        log::info!("session over");
        Ok(())
    }

    /// Prints the banner and reads the player's name.
    ///
    /// # Errors
    ///
    /// Returns an error if reading input or writing output fails.
    pub fn greet(&mut self) -> Result<String, ConsoleError> {
        writeln!(self.output, "Welcome to Blackjack")?;
        writeln!(self.output)?;
        writeln!(self.output, "Please enter your name")?;
        let name = self.read_raw_line()?;
        writeln!(self.output, "OK {name}, are you ready to lose your shirt?")?;
        writeln!(self.output)?;
        Ok(name)
    }

    /// Plays one round on a freshly cleared game and returns its result.
    ///
    /// # Errors
    ///
    /// Returns an error if the engine rejects a step (for example an empty
    /// deck) or the console fails.
    pub fn play_round(&mut self, game: &mut Game) -> Result<RoundResult, ConsoleError> {
        game.deal()?;
        self.report_deal(game)?;

        if game.state() == GameState::RoundOver {
            self.announce_settled(game.player())?;
            self.announce_settled(game.dealer())?;
        }

        while game.state() == GameState::PlayerTurn {
            let prompt = format!(
                "{}, do you want to hit or stay: enter h for hit, otherwise for stay",
                game.player().name()
            );
            if self.ask(&prompt)? == HIT {
                let card = game.hit()?;
                writeln!(
                    self.output,
                    "You have drawn the {card} and your score is now {}",
                    game.player().value()
                )?;
                self.announce_settled(game.player())?;
            } else {
                game.stand()?;
            }
        }

        if game.state() == GameState::DealerTurn {
            let drawn = game.dealer_play()?.len();
            self.report_dealer_draws(game, drawn)?;

            let dealer = game.dealer();
            if dealer.status().is_settled() {
                self.announce_settled(dealer)?;
            } else {
                writeln!(self.output, "{}", dealer.stay_message())?;
            }
        }

        let result = game.showdown()?;
        if result.decision == Decision::HigherScore {
            let message = match result.winner {
                Winner::Player => game.player().higher_score_message(),
                Winner::Dealer => game.dealer().higher_score_message(),
            };
            writeln!(self.output, "{message}")?;
        }

        Ok(result)
    }

    fn report_deal(&mut self, game: &Game) -> io::Result<()> {
        let player = game.player();
        let dealer = game.dealer();
        let ([p1, p2, ..], [d1, d2, ..]) = (player.cards(), dealer.cards()) else {
            return Ok(());
        };

        writeln!(self.output, "{} has been dealt the {p1}", player.name())?;
        writeln!(self.output, "{} has been dealt the {d1}", dealer.name())?;
        writeln!(self.output)?;
        writeln!(self.output, "{}'s second card is the {p2}", player.name())?;
        writeln!(self.output, "{}'s second card is the {d2}", dealer.name())?;
        writeln!(self.output, "{}'s score is {}", player.name(), player.value())?;
        writeln!(self.output, "{}'s score is {}", dealer.name(), dealer.value())?;
        writeln!(self.output)
    }

    fn report_dealer_draws(&mut self, game: &Game, drawn: usize) -> io::Result<()> {
        let dealer = game.dealer();
        let cards = dealer.cards();

        for (end, card) in cards.iter().enumerate().skip(cards.len() - drawn) {
            writeln!(
                self.output,
                "{name} has drawn the {card} and {name} score is now {}",
                hand_value(&cards[..=end]),
                name = dealer.name(),
            )?;
        }
        Ok(())
    }

    fn announce_settled(&mut self, hand: &impl Hand) -> io::Result<()> {
        if hand.is_twenty_one() {
            writeln!(self.output, "{}", hand.win_message())?;
        } else if hand.is_bust() {
            writeln!(self.output, "{}", hand.busted_message())?;
        }
        Ok(())
    }

    /// Writes a prompt and reads the answer, trimmed and lower-cased.
    fn ask(&mut self, prompt: &str) -> io::Result<String> {
        writeln!(self.output, "{prompt}")?;
        Ok(self.read_raw_line()?.trim().to_lowercase())
    }

    /// Reads one line without its line ending; end of input reads as an
    /// empty line.
    fn read_raw_line(&mut self) -> io::Result<String> {
        self.output.flush()?;
        let mut line = String::new();
        self.input.read_line(&mut line)?;
        Ok(line.trim_end_matches(['\r', '\n']).to_owned())
    }
}
