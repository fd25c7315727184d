//! Pig game implementation.

use serde::{Deserialize, Serialize};

use crate::console::{ConsoleInput, ConsoleReporter, Event, InputSource, Reporter};
use crate::core::{
    ActionRecord, Controller, Decision, Die, GameConfig, GameRng, PigError, Player, PlayerId, PlayerKind,
    PlayerPair, RollOutcome, Roller, ThresholdPolicy, WIN_SCORE,
};
use crate::rules::{Deadline, GameResult, GameStatus, TurnOutcome, Victory};

use super::timed::{SystemClock, TimedGameProxy};

/// Two players, a die, and whose turn it is.
///
/// Human choices come from `I`, messages go to `R`, and rolls come from `D`,
/// so a whole game can be scripted.
pub struct Game<D = Die, I = ConsoleInput, R = ConsoleReporter> {
    players: PlayerPair<Player>,
    current: PlayerId,
    die: D,
    input: I,
    reporter: R,
    win_score: u32,
    result: Option<GameResult>,
    /// Turn counter, 1-based.
    turn: u32,
    history: Vec<ActionRecord>,
}

/// End-of-game record, serializable for `--summary`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSummary {
    pub result: Option<GameResult>,
    pub scores: PlayerPair<u32>,
    pub turns: u32,
    pub history: Vec<ActionRecord>,
}

impl<D: Roller, I: InputSource, R: Reporter> Game<D, I, R> {
    /// Start a game with player 1 to roll.
    pub fn new(mut players: PlayerPair<Player>, die: D, input: I, reporter: R) -> Self {
        players[PlayerId::One].begin_turn();
        Self {
            players,
            current: PlayerId::One,
            die,
            input,
            reporter,
            win_score: WIN_SCORE,
            result: None,
            turn: 1,
            history: Vec::new(),
        }
    }

    /// Play to a different winning score.
    pub fn with_win_score(mut self, score: u32) -> Self {
        self.win_score = score;
        self
    }

    // === Accessors ===

    #[must_use]
    pub fn player(&self, id: PlayerId) -> &Player {
        &self.players[id]
    }

    #[must_use]
    pub fn players(&self) -> &PlayerPair<Player> {
        &self.players
    }

    /// Seat whose turn it is (or was, once the game is over).
    #[must_use]
    pub fn current(&self) -> PlayerId {
        self.current
    }

    #[must_use]
    pub fn status(&self) -> GameStatus {
        match self.result {
            Some(result) => GameStatus::GameOver(result),
            None => GameStatus::TurnInProgress(self.current),
        }
    }

    #[must_use]
    pub fn result(&self) -> Option<GameResult> {
        self.result
    }

    #[must_use]
    pub fn is_over(&self) -> bool {
        self.result.is_some()
    }

    #[must_use]
    pub fn turn(&self) -> u32 {
        self.turn
    }

    #[must_use]
    pub fn win_score(&self) -> u32 {
        self.win_score
    }

    /// Every completed roll and hold, oldest first.
    #[must_use]
    pub fn history(&self) -> &[ActionRecord] {
        &self.history
    }

    #[must_use]
    pub fn die(&self) -> &D {
        &self.die
    }

    #[must_use]
    pub fn input(&self) -> &I {
        &self.input
    }

    #[must_use]
    pub fn reporter(&self) -> &R {
        &self.reporter
    }

    #[must_use]
    pub fn summary(&self) -> GameSummary {
        GameSummary {
            result: self.result,
            scores: self.players.map(Player::score),
            turns: self.turn,
            history: self.history.clone(),
        }
    }

    // === Play ===

    /// Play turns until somebody reaches the winning score.
    pub fn start_game(&mut self) -> Result<GameResult, PigError> {
        log::info!(
            "starting game: {} ({}) vs {} ({})",
            self.players[PlayerId::One].name(),
            kind_of(&self.players[PlayerId::One]),
            self.players[PlayerId::Two].name(),
            kind_of(&self.players[PlayerId::Two]),
        );
        self.display_current_player();
        loop {
            if let TurnOutcome::GameOver(result) = self.play_turn(None)? {
                return Ok(result);
            }
        }
    }

    /// Drive the active player's turn until it passes, the game is decided,
    /// or `deadline` expires.
    ///
    /// The deadline is polled before every decision. When it fires the turn
    /// is left exactly as it was and nothing is resolved; the caller decides
    /// the game.
    pub fn play_turn(&mut self, deadline: Option<&dyn Deadline>) -> Result<TurnOutcome, PigError> {
        if let Some(result) = self.result {
            return Ok(TurnOutcome::GameOver(result));
        }

        while self.players[self.current].is_turn() {
            if deadline.is_some_and(|d| d.expired()) {
                log::info!("deadline hit during {}'s turn", self.players[self.current].name());
                return Ok(TurnOutcome::Interrupted);
            }

            let Some(decision) = self.next_decision()? else {
                continue;
            };

            let passed = self.apply(decision);

            if self.someone_reached() {
                return Ok(TurnOutcome::GameOver(self.check_winner()));
            }
            if passed {
                return Ok(TurnOutcome::Passed(self.current));
            }
        }

        Ok(TurnOutcome::Passed(self.current))
    }

    /// Ask the active player what to do. `None` means the answer was invalid
    /// and has already been reported.
    fn next_decision(&mut self) -> Result<Option<Decision>, PigError> {
        let player = &self.players[self.current];

        if let Some(decision) = player.decide() {
            self.reporter.report(Event::Chose {
                name: player.name().to_string(),
                decision,
            });
            return Ok(Some(decision));
        }

        let raw = self.input.choose(player)?;
        match Decision::from_input(&raw) {
            Ok(decision) => Ok(Some(decision)),
            Err(err) => {
                log::warn!("{}: {}", player.name(), err);
                self.reporter.report(Event::InvalidInput { raw });
                Ok(None)
            }
        }
    }

    /// Carry out a decision for the active player. Returns whether the die
    /// passed to the other seat.
    fn apply(&mut self, decision: Decision) -> bool {
        let seat = self.current;

        match decision {
            Decision::Roll => {
                let outcome = self.players[seat].roll_die(&mut self.die);
                self.history
                    .push(ActionRecord::new(seat, decision, Some(outcome.face()), self.turn));

                let player = &self.players[seat];
                log::debug!(
                    "{} rolled {} (turn total {})",
                    player.name(),
                    outcome.face(),
                    player.turn_total()
                );
                match outcome {
                    RollOutcome::Scored(face) => {
                        self.reporter.report(Event::Rolled {
                            name: player.name().to_string(),
                            face,
                            turn_total: player.turn_total(),
                            score: player.score(),
                        });
                        false
                    }
                    RollOutcome::Pigged => {
                        self.reporter.report(Event::Pigged {
                            name: player.name().to_string(),
                        });
                        self.switch_turn();
                        true
                    }
                }
            }
            Decision::Hold => {
                let banked = self.players[seat].hold();
                self.history.push(ActionRecord::new(seat, decision, None, self.turn));

                let player = &self.players[seat];
                log::debug!("{} banked {} (score {})", player.name(), banked, player.score());
                self.reporter.report(Event::Held {
                    name: player.name().to_string(),
                    score: player.score(),
                });
                self.switch_turn();
                true
            }
        }
    }

    fn someone_reached(&self) -> bool {
        self.players.iter().any(|(_, p)| p.score() >= self.win_score)
    }

    /// Hand the die to the other seat and announce the new standings.
    pub fn switch_turn(&mut self) {
        self.players[self.current].reset_turn();
        self.current = self.current.other();
        self.players[self.current].begin_turn();
        self.turn += 1;
        log::debug!("turn {}: {} to roll", self.turn, self.players[self.current].name());
        self.display_scores();
        self.display_current_player();
    }

    /// Decide and announce the game.
    ///
    /// A player at or above the winning score wins outright, player 1 checked
    /// first. Otherwise the clock ran out and the strictly higher score wins;
    /// equal scores tie.
    pub fn check_winner(&mut self) -> GameResult {
        let one = self.players[PlayerId::One].score();
        let two = self.players[PlayerId::Two].score();

        let result = if one >= self.win_score {
            GameResult::Winner {
                player: PlayerId::One,
                by: Victory::Reached,
            }
        } else if two >= self.win_score {
            GameResult::Winner {
                player: PlayerId::Two,
                by: Victory::Reached,
            }
        } else {
            match one.cmp(&two) {
                std::cmp::Ordering::Greater => GameResult::Winner {
                    player: PlayerId::One,
                    by: Victory::OutOfTime,
                },
                std::cmp::Ordering::Less => GameResult::Winner {
                    player: PlayerId::Two,
                    by: Victory::OutOfTime,
                },
                std::cmp::Ordering::Equal => GameResult::Tie,
            }
        };

        let event = match result {
            GameResult::Winner { player, by } => Event::Winner {
                name: self.players[player].name().to_string(),
                by,
            },
            GameResult::Tie => Event::Tie,
        };
        self.reporter.report(event);
        log::info!("game over after {} turns: {:?} ({} - {})", self.turn, result, one, two);

        self.result = Some(result);
        result
    }

    /// Send an event straight to the reporter.
    pub fn report(&mut self, event: Event) {
        self.reporter.report(event);
    }

    pub fn display_scores(&mut self) {
        let one = &self.players[PlayerId::One];
        let two = &self.players[PlayerId::Two];
        self.reporter.report(Event::Scores {
            player1: (one.name().to_string(), one.score()),
            player2: (two.name().to_string(), two.score()),
        });
    }

    pub fn display_current_player(&mut self) {
        self.reporter.report(Event::TurnStarted {
            name: self.players[self.current].name().to_string(),
        });
    }

    #[cfg(test)]
    pub(crate) fn player_mut(&mut self, id: PlayerId) -> &mut Player {
        &mut self.players[id]
    }
}

fn kind_of(player: &Player) -> PlayerKind {
    match player.controller() {
        Controller::Human => PlayerKind::Human,
        Controller::Computer(_) => PlayerKind::Computer,
    }
}

/// Builds games from a `GameConfig`.
#[derive(Clone, Debug, Default)]
pub struct GameBuilder {
    config: GameConfig,
}

impl GameBuilder {
    pub fn new(config: GameConfig) -> Self {
        Self { config }
    }

    /// Builder for two players given by kind name, `"human"` or `"computer"`.
    pub fn from_kinds(player1: &str, player2: &str) -> Result<Self, PigError> {
        let config = GameConfig::default().with_players(player1.parse()?, player2.parse()?);
        Ok(Self::new(config))
    }

    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Both players, named after their seats.
    #[must_use]
    pub fn players(&self) -> PlayerPair<Player> {
        let policy = ThresholdPolicy::default().with_target(self.config.win_score);
        PlayerPair::new(|seat| Player::from_kind(self.config.kind(seat), seat).with_policy(policy))
    }

    /// The configured die: seeded if a seed was given, otherwise from entropy.
    #[must_use]
    pub fn die(&self) -> Die {
        let seed = self
            .config
            .seed
            .unwrap_or_else(|| GameRng::from_entropy().seed());
        log::info!("die seed {}", seed);
        Die::new(self.config.die_sides, seed)
    }

    /// Build an untimed game with the configured die.
    pub fn build<I: InputSource, R: Reporter>(&self, input: I, reporter: R) -> Game<Die, I, R> {
        self.build_with_die(self.die(), input, reporter)
    }

    /// Build an untimed game rolling `die`.
    pub fn build_with_die<D: Roller, I: InputSource, R: Reporter>(
        &self,
        die: D,
        input: I,
        reporter: R,
    ) -> Game<D, I, R> {
        Game::new(self.players(), die, input, reporter).with_win_score(self.config.win_score)
    }

    /// Build the game wrapped in its clock, honoring `timed` and `time_limit`.
    pub fn build_timed<I: InputSource, R: Reporter>(
        &self,
        input: I,
        reporter: R,
    ) -> TimedGameProxy<Die, I, R, SystemClock> {
        TimedGameProxy::new(
            self.build(input, reporter),
            self.config.timed,
            SystemClock::new(),
            self.config.time_limit,
        )
    }
}
