use tracing::{debug, info, trace};

use crate::{
    backgammon::{Board, Checker, Color, DiceRoll, DiceRoller, HalfMove, Player, Source, Target},
    config::GameConfig,
    error::{Result, RulesError},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EngineState {
    /// No dice left; the current player has to roll.
    AwaitingRoll,
    /// Dice rolled and at least one still unused.
    TurnInProgress,
    Winner(Color),
}

/// Turn state and move rules for one game.
///
/// The engine owns the board, both players and the dice. Every rule check in
/// [`GameEngine::make_move`] runs before the board is touched, so a rejected
/// move leaves the game exactly as it was.
#[derive(Debug, Clone)]
pub struct GameEngine {
    board: Board,
    white: Player,
    black: Player,
    dice: DiceRoller,
    current: Color,
    active_dice: DiceRoll,
}

impl GameEngine {
    /// Starts a game from the standard opening position.
    pub fn new(config: &GameConfig) -> Self {
        let dice = match config.seed {
            Some(seed) => DiceRoller::seeded(seed),
            None => DiceRoller::new(),
        };
        let mut engine = GameEngine::from_parts(
            Board::standard(),
            Player::new(config.white_name.as_str(), Color::White),
            Player::new(config.black_name.as_str(), Color::Black),
            dice,
        );
        engine.current = config.starting_color;
        info!(white = %config.white_name, black = %config.black_name, starts = %engine.current, "game started");
        engine
    }

    /// Assembles an engine from existing parts. The board is used as given,
    /// so an empty board reports white as the winner until it is set up.
    pub fn from_parts(board: Board, white: Player, black: Player, dice: DiceRoller) -> Self {
        GameEngine {
            board,
            white,
            black,
            dice,
            current: Color::White,
            active_dice: DiceRoll::empty(),
        }
    }

    /// Throws away the board, players and dice and starts over.
    pub fn restart(&mut self, config: &GameConfig) {
        *self = GameEngine::new(config);
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Raw board access for collaborators that stage positions.
    pub fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    pub fn player(&self, color: Color) -> &Player {
        match color {
            Color::White => &self.white,
            Color::Black => &self.black,
        }
    }

    pub fn get_current_player(&self) -> &Player {
        self.player(self.current)
    }

    pub fn get_opponent(&self) -> &Player {
        self.player(self.current.opposite())
    }

    pub fn current_color(&self) -> Color {
        self.current
    }

    pub fn active_dice(&self) -> DiceRoll {
        self.active_dice
    }

    pub fn get_rolled_values(&self) -> Vec<u8> {
        self.active_dice.to_vec()
    }

    pub fn state(&self) -> EngineState {
        match self.get_winner() {
            Some(color) => EngineState::Winner(color),
            None if self.active_dice.is_empty() => EngineState::AwaitingRoll,
            None => EngineState::TurnInProgress,
        }
    }

    pub fn roll_dice(&mut self) -> Result<DiceRoll> {
        if !self.active_dice.is_empty() {
            return Err(RulesError::RollAlreadyActive);
        }
        self.active_dice = self.dice.roll();
        debug!(color = %self.current, roll = %self.active_dice, "rolled dice");
        Ok(self.active_dice)
    }

    /// Replaces the current dice pool with a known roll.
    pub fn set_active_dice(&mut self, roll: DiceRoll) {
        self.active_dice = roll;
    }

    /// Passes the turn to the opponent and discards any unused dice.
    pub fn end_turn(&mut self) {
        debug!(from = %self.current, unused = ?self.active_dice, "turn passed");
        self.current = self.current.opposite();
        self.active_dice.clear();
    }

    /// Moves one checker of `color`, using one die from the active roll.
    ///
    /// Checkers on the bar must enter first. A [`Target::BearOff`] takes the
    /// checker out of the game once all of the color's checkers are home.
    /// The turn passes automatically when the last die is used.
    pub fn make_move(&mut self, from: Source, to: Target, color: Color) -> Result<()> {
        self.play(from, to, color, None)
    }

    /// Submits a move as produced by [`GameEngine::legal_moves`], consuming
    /// exactly the die it names.
    pub fn apply(&mut self, half_move: &HalfMove) -> Result<()> {
        self.play(half_move.from, half_move.to, self.current, Some(half_move.die))
    }

    /// Boundary form of [`GameEngine::make_move`]: `-1` as start is the bar,
    /// `24` (white) or `-1` (black) as end bears off.
    pub fn move_raw(&mut self, start: i32, end: i32, color: &str) -> Result<()> {
        let color: Color = color.parse()?;
        self.make_move(Source::from_raw(start)?, Target::from_raw(end, color)?, color)
    }

    /// With `named` set, only that die may pay for the move. Without it a
    /// bear-off takes the exact die, else the first larger one in the roll.
    fn play(&mut self, from: Source, to: Target, color: Color, named: Option<u8>) -> Result<()> {
        if self.active_dice.is_empty() {
            return Err(RulesError::NoActiveRoll);
        }
        if color != self.current {
            return Err(RulesError::WrongTurn { expected: self.current, got: color });
        }

        let die = if self.board.bar_count(color) > 0 {
            self.enter_from_bar(from, to, color, named)?
        } else {
            match to {
                Target::BearOff => self.bear_off(from, color, named)?,
                Target::Point(end) => self.move_on_board(from, end, color, named)?,
            }
        };

        if self.has_won(color) {
            info!(winner = %color, "game won");
        }
        self.use_die(die);
        Ok(())
    }

    fn enter_from_bar(&mut self, from: Source, to: Target, color: Color, named: Option<u8>) -> Result<u8> {
        if from != Source::Bar {
            return Err(RulesError::MustEnterFromBar(color));
        }
        let die = match to {
            Target::Point(end) => self.active_dice
                .distinct()
                .into_iter()
                .filter(|&d| named.is_none_or(|n| n == d))
                .find(|&d| color.entry_point(d) == end),
            Target::BearOff => None,
        };
        let Some(die) = die else {
            return Err(RulesError::NoMatchingDieForEntry {
                color,
                end: to.to_raw(color) as i64,
                dice: self.active_dice.to_vec(),
            });
        };
        let end = color.entry_point(die);

        if self.check_destination(end, color)? {
            self.capture(end)?;
        }
        let checker = self.board.pop_from_bar(color)?;
        self.board.add_checker(end as usize, checker)?;
        debug!(%color, end, die, "entered from bar");
        Ok(die)
    }

    fn bear_off(&mut self, from: Source, color: Color, named: Option<u8>) -> Result<u8> {
        if !self.all_in_home(color) {
            return Err(RulesError::NotAllInHome(color));
        }
        let start = self.origin_point(from, color)?;

        let need = color.bear_off_distance(start);
        let die = match named {
            Some(die) if die < need || !self.active_dice.contains(die) => {
                return Err(RulesError::NoUsableDieForBearOff { need, dice: self.active_dice.to_vec() });
            }
            Some(die) if die > need && self.has_checker_ahead_of(start, color) => {
                return Err(RulesError::ExactDieRequired { need });
            }
            Some(die) => die,
            None if self.active_dice.contains(need) => need,
            None => {
                if self.has_checker_ahead_of(start, color) {
                    return Err(RulesError::ExactDieRequired { need });
                }
                self.active_dice
                    .iter()
                    .find(|&d| d > need)
                    .ok_or_else(|| RulesError::NoUsableDieForBearOff { need, dice: self.active_dice.to_vec() })?
            }
        };

        if !self.board.has_color_at(start as usize, color)? {
            return Err(RulesError::NoCheckerOfColorAtOrigin { color, index: start });
        }
        self.board.bear_off(start as usize)?;
        debug!(%color, start, die, off = self.board.borne_off(color), "bore off");
        Ok(die)
    }

    fn move_on_board(&mut self, from: Source, end: u8, color: Color, named: Option<u8>) -> Result<u8> {
        let start = self.origin_point(from, color)?;
        self.board.point_at(end as usize)?;

        let distance = color.distance(start, end);
        if distance <= 0 {
            return Err(RulesError::WrongDirection { color, start, end });
        }
        let distance = distance as u8;
        if !self.active_dice.contains(distance) || named.is_some_and(|d| d != distance) {
            return Err(RulesError::DistanceNotInRoll { distance, dice: self.active_dice.to_vec() });
        }

        let checker = self.board
            .point_at(start as usize)?
            .iter()
            .find(|c| c.color() == color)
            .map(Checker::id)
            .ok_or(RulesError::NoCheckerOfColorAtOrigin { color, index: start })?;

        if self.check_destination(end, color)? {
            self.capture(end)?;
        }
        self.board.move_checker(start as usize, end as usize, checker)?;
        debug!(%color, start, end, "moved checker");
        Ok(distance)
    }

    /// Point index of a board source. The bar is only a valid source while
    /// the color has checkers on it, which is handled before this is reached.
    fn origin_point(&self, from: Source, color: Color) -> Result<u8> {
        match from {
            Source::Bar => Err(RulesError::EmptyBar(color)),
            Source::Point(start) => {
                self.board.point_at(start as usize)?;
                Ok(start)
            }
        }
    }

    /// Fails if the point is held by two or more opposing checkers.
    /// Returns true when a lone opposing checker has to be captured first.
    fn check_destination(&self, end: u8, color: Color) -> Result<bool> {
        let opponent = color.opposite();
        if self.board.owner_at(end as usize)? != Some(opponent) {
            return Ok(false);
        }
        match self.board.count_at(end as usize)? {
            count if count >= 2 => Err(RulesError::PointBlocked { index: end, count, by: opponent }),
            _ => Ok(true),
        }
    }

    fn capture(&mut self, index: u8) -> Result<()> {
        let captured = self.board.remove_checker(index as usize)?;
        debug!(color = %captured.color(), index, "checker captured");
        self.board.send_to_bar(captured);
        Ok(())
    }

    fn use_die(&mut self, die: u8) {
        self.active_dice.consume(die);
        if self.active_dice.is_empty() {
            self.end_turn();
        }
    }

    fn is_blocked(&self, index: u8, color: Color) -> bool {
        self.board.owner_at(index as usize) == Ok(Some(color.opposite()))
            && self.board.count_at(index as usize).is_ok_and(|count| count >= 2)
    }

    fn all_in_home(&self, color: Color) -> bool {
        let home = color.home_range();
        self.board.bar_count(color) == 0 && self.board.occupied_by(color).all(|i| home.contains(&i))
    }

    fn has_checker_ahead_of(&self, start: u8, color: Color) -> bool {
        self.board.occupied_by(color).any(|i| color.is_ahead_of(i, start))
    }

    /// Every move the current player could make with one of the remaining
    /// dice. Bar entries take priority over everything else. Does not touch
    /// the game state.
    pub fn legal_moves(&self) -> Vec<HalfMove> {
        let color = self.current;
        let dice = self.active_dice.distinct();
        let mut moves = Vec::new();
        if dice.is_empty() {
            return moves;
        }

        if self.board.bar_count(color) > 0 {
            for die in dice {
                let end = color.entry_point(die);
                if !self.is_blocked(end, color) {
                    moves.push(HalfMove::new(Source::Bar, Target::Point(end), die));
                }
            }
            trace!(%color, count = moves.len(), "bar entries");
            return moves;
        }

        let all_home = self.all_in_home(color);
        let points: Vec<u8> = match color {
            Color::White => (0..24).collect(),
            Color::Black => (0..24).rev().collect(),
        };

        for start in points {
            if self.board.owner_at(start as usize) != Ok(Some(color)) {
                continue;
            }
            for &die in &dice {
                let end = match color {
                    Color::White => start as i16 + die as i16,
                    Color::Black => start as i16 - die as i16,
                };
                if (0..24).contains(&end) {
                    if !self.is_blocked(end as u8, color) {
                        moves.push(HalfMove::new(Source::Point(start), Target::Point(end as u8), die));
                    }
                } else if all_home {
                    let exact = end == color.bear_off_sentinel() as i16;
                    if exact || !self.has_checker_ahead_of(start, color) {
                        moves.push(HalfMove::new(Source::Point(start), Target::BearOff, die));
                    }
                }
            }
        }
        trace!(%color, count = moves.len(), "legal moves");
        moves
    }

    pub fn can_play(&self) -> bool {
        !self.legal_moves().is_empty()
    }

    /// A color has won once none of its checkers remain on a point or the bar.
    pub fn has_won(&self, color: Color) -> bool {
        self.board.checkers_on_points(color) == 0 && self.board.bar_count(color) == 0
    }

    /// White is checked first. Only meaningful on a board that has been set up.
    pub fn get_winner(&self) -> Option<Color> {
        Color::ALL.into_iter().find(|&color| self.has_won(color))
    }
}
