//! Game session: players, turn sequencing, dice and score sheets.
//!
//! This is the single place that mutates game state. Every mutation goes
//! through [`YahtzeeGame::roll_dice_keeping`] or
//! [`YahtzeeGame::apply_dice_to_group`]; both validate completely before
//! changing anything and notify listeners afterwards.

use std::rc::Rc;

use tracing::{debug, info, trace};

use crate::action::{Action, MAX_ROLLS_PER_TURN};
use crate::dice::{DiceHand, NUM_DICE};
use crate::error::GameError;
use crate::generator::{DieGenerator, RandomGenerator};
use crate::listener::{GameFinishedListener, GameUpdateListener, Listeners};
use crate::player::Player;
use crate::policy::TurnPolicy;
use crate::score_group::ScoreGroup;
use crate::scoring::score;
use crate::sheet::ScoreSheet;

/// The most recent scoring action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoreRecord {
    /// Index into [`YahtzeeGame::players`].
    pub player: usize,
    pub group: ScoreGroup,
    pub points: i32,
    pub dice: [u8; NUM_DICE],
}

pub struct YahtzeeGame {
    players: Vec<Player>,
    sheets: Vec<ScoreSheet>,
    current: usize,
    dice: DiceHand,
    round_in_turn: u8,
    finished: bool,
    last_score: Option<ScoreRecord>,
    generator: Box<dyn DieGenerator>,
    update_listeners: Listeners<dyn GameUpdateListener>,
    finish_listeners: Listeners<dyn GameFinishedListener>,
}

impl YahtzeeGame {
    /// Start a game with a copy of `players`; the first player moves first.
    ///
    /// Later changes to the caller's list do not reach the game.
    pub fn new(players: &[Player]) -> Result<Self, GameError> {
        if players.is_empty() {
            return Err(GameError::NoPlayers);
        }
        Ok(Self::from_players(players.to_vec()))
    }

    /// Two human players, "Player 1" and "Player 2".
    pub fn with_default_players() -> Self {
        Self::from_players(vec![Player::human("Player 1"), Player::human("Player 2")])
    }

    fn from_players(players: Vec<Player>) -> Self {
        debug_assert!(!players.is_empty());
        Self {
            sheets: vec![ScoreSheet::new(); players.len()],
            players,
            current: 0,
            dice: DiceHand::unrolled(),
            round_in_turn: 0,
            finished: false,
            last_score: None,
            generator: Box::new(RandomGenerator::new()),
            update_listeners: Listeners::new(),
            finish_listeners: Listeners::new(),
        }
    }

    /// Builder form of [`YahtzeeGame::set_generator`].
    pub fn with_generator(mut self, generator: Box<dyn DieGenerator>) -> Self {
        self.generator = generator;
        self
    }

    pub fn players(&self) -> &[Player] {
        &self.players
    }

    pub fn current_player(&self) -> &Player {
        &self.players[self.current]
    }

    pub fn current_player_index(&self) -> usize {
        self.current
    }

    /// Snapshot of the five dice; all `None` before the first roll of a turn.
    pub fn dice(&self) -> [Option<u8>; NUM_DICE] {
        self.dice.slots()
    }

    /// The dice values once rolled this turn.
    pub fn dice_values(&self) -> Option<[u8; NUM_DICE]> {
        self.dice.values()
    }

    pub fn hand(&self) -> DiceHand {
        self.dice
    }

    /// Rolls taken this turn: 0 before the first roll, 3 when only scoring remains.
    pub fn round_in_turn(&self) -> u8 {
        self.round_in_turn
    }

    pub fn rolls_left(&self) -> u8 {
        MAX_ROLLS_PER_TURN - self.round_in_turn
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }

    pub fn last_score(&self) -> Option<ScoreRecord> {
        self.last_score
    }

    /// Sheets in player order.
    pub fn sheets(&self) -> &[ScoreSheet] {
        &self.sheets
    }

    pub fn player_state(&self, player: &Player) -> Option<&ScoreSheet> {
        let idx = self.players.iter().position(|p| p == player)?;
        self.sheets.get(idx)
    }

    pub fn current_player_state(&self) -> &ScoreSheet {
        &self.sheets[self.current]
    }

    pub fn generator(&self) -> &dyn DieGenerator {
        self.generator.as_ref()
    }

    /// Replace the die source. Safe at any point; the current hand is kept.
    /// Returns the previous generator.
    pub fn set_generator(&mut self, generator: Box<dyn DieGenerator>) -> Box<dyn DieGenerator> {
        std::mem::replace(&mut self.generator, generator)
    }

    /// Roll all five dice.
    pub fn roll_dice(&mut self) -> Result<(), GameError> {
        self.roll_dice_keeping(&[])
    }

    /// Keep the listed face values and re-roll the rest.
    ///
    /// `keep` must be empty on the first roll of a turn and otherwise a
    /// sub-multiset of the current dice. Keeping all five is allowed and still
    /// uses up a roll.
    pub fn roll_dice_keeping(&mut self, keep: &[u8]) -> Result<(), GameError> {
        if self.finished {
            return Err(GameError::GameFinished);
        }
        if self.round_in_turn >= MAX_ROLLS_PER_TURN {
            return Err(GameError::NoMoreRolls);
        }

        let next = self.dice.reroll(keep, self.generator.as_mut())?;
        self.dice = next;
        self.round_in_turn += 1;

        debug!(
            player = %self.current_player().name(),
            round_in_turn = self.round_in_turn,
            kept = ?keep,
            dice = ?next.values(),
            "rolled dice"
        );
        self.fire_update();
        Ok(())
    }

    /// Score the current dice on `group` for the current player and pass the
    /// turn on. Returns the points recorded.
    ///
    /// Fires the update notification, and when this was the last open group
    /// of the game, marks the game finished and fires the finish notification.
    pub fn apply_dice_to_group(&mut self, group: ScoreGroup) -> Result<i32, GameError> {
        if self.finished {
            return Err(GameError::GameFinished);
        }
        let dice = self.dice.values().ok_or(GameError::NotRolled)?;

        let points = score(dice, group);
        self.sheets[self.current].record(group, points)?;

        debug!(
            player = %self.current_player().name(),
            %group,
            points,
            total = self.sheets[self.current].total_score(),
            "scored group"
        );

        self.last_score = Some(ScoreRecord {
            player: self.current,
            group,
            points,
            dice,
        });
        self.dice = DiceHand::unrolled();
        self.round_in_turn = 0;
        self.current = (self.current + 1) % self.players.len();

        self.fire_update();

        if self.sheets.iter().all(ScoreSheet::is_complete) {
            self.finished = true;
            info!(
                players = self.players.len(),
                totals = ?self.sheets.iter().map(ScoreSheet::total_score).collect::<Vec<_>>(),
                "game finished"
            );
            self.fire_finished();
        }
        Ok(points)
    }

    pub fn apply_action(&mut self, action: &Action) -> Result<(), GameError> {
        match action {
            Action::Roll { keep } => self.roll_dice_keeping(keep),
            Action::Score(group) => self.apply_dice_to_group(*group).map(|_| ()),
        }
    }

    /// Play turns for computer players until a human is up or the game ends.
    ///
    /// An illegal action from a policy aborts with that error; since a turn
    /// allows at most three rolls, a policy that never scores fails instead of
    /// spinning.
    pub fn play_computer_turns(&mut self) -> Result<(), GameError> {
        while !self.finished {
            let Some(policy) = self.current_player().policy().cloned() else {
                break;
            };
            self.play_computer_turn(policy.as_ref())?;
        }
        Ok(())
    }

    fn play_computer_turn(&mut self, policy: &dyn TurnPolicy) -> Result<(), GameError> {
        loop {
            let action = policy.choose_action(self);
            trace!(player = %self.current_player().name(), ?action, "computer action");
            self.apply_action(&action)?;
            if action.ends_turn() {
                return Ok(());
            }
        }
    }

    /// Register for update notifications. Adding the same handle twice is a no-op.
    pub fn add_update_listener(&mut self, listener: Rc<dyn GameUpdateListener>) {
        self.update_listeners.add(listener);
    }

    pub fn remove_update_listener<L: GameUpdateListener + ?Sized>(&mut self, listener: &Rc<L>) {
        self.update_listeners.remove(listener);
    }

    /// Register for the finish notification. Adding the same handle twice is a no-op.
    pub fn add_finish_listener(&mut self, listener: Rc<dyn GameFinishedListener>) {
        self.finish_listeners.add(listener);
    }

    pub fn remove_finish_listener<L: GameFinishedListener + ?Sized>(&mut self, listener: &Rc<L>) {
        self.finish_listeners.remove(listener);
    }

    fn fire_update(&self) {
        trace!(listeners = self.update_listeners.len(), "game updated");
        for l in self.update_listeners.iter() {
            l.on_game_updated(self);
        }
    }

    fn fire_finished(&self) {
        for l in self.finish_listeners.iter() {
            l.on_game_finished(self);
        }
    }
}

impl Default for YahtzeeGame {
    fn default() -> Self {
        Self::with_default_players()
    }
}
