use crate::{backgammon::{Checker, CheckerId, Color}, error::{Result, RulesError}};

pub const POINT_COUNT: usize = 24;

/// Storage for the 24 points, the bar of each color and the borne-off tally.
///
/// The board applies no game rules. Points are stacks in arrival order and
/// nothing here stops two colors from sharing a point; the engine's blocking
/// and capture logic is what keeps every point single-colored during play.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    points: [Vec<Checker>; POINT_COUNT],
    bar: [Vec<Checker>; 2],
    borne_off: [u8; 2],
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    /// Creates an empty board with no checkers on it.
    pub fn new() -> Self {
        Board {
            points: std::array::from_fn(|_| Vec::new()),
            bar: [Vec::new(), Vec::new()],
            borne_off: [0, 0],
        }
    }

    /// Creates a board already holding the standard opening position.
    pub fn standard() -> Self {
        let mut board = Board::new();
        board.setup_standard();
        board
    }

    fn check_index(index: usize) -> Result<usize> {
        if index < POINT_COUNT {
            Ok(index)
        } else {
            Err(RulesError::IndexOutOfRange(index as i64))
        }
    }

    pub fn point_at(&self, index: usize) -> Result<&[Checker]> {
        Ok(&self.points[Self::check_index(index)?])
    }

    pub fn count_at(&self, index: usize) -> Result<usize> {
        Ok(self.points[Self::check_index(index)?].len())
    }

    /// Color of the most recently placed checker, or `None` for an empty point.
    pub fn owner_at(&self, index: usize) -> Result<Option<Color>> {
        Ok(self.points[Self::check_index(index)?].last().map(Checker::color))
    }

    /// Whether any checker of `color` sits on the point.
    pub fn has_color_at(&self, index: usize, color: Color) -> Result<bool> {
        Ok(self.points[Self::check_index(index)?].iter().any(|c| c.color() == color))
    }

    pub fn add_checker(&mut self, index: usize, checker: Checker) -> Result<()> {
        self.points[Self::check_index(index)?].push(checker);
        Ok(())
    }

    /// Pops the most recently added checker from the point.
    pub fn remove_checker(&mut self, index: usize) -> Result<Checker> {
        self.points[Self::check_index(index)?]
            .pop()
            .ok_or(RulesError::EmptyPoint(index as u8))
    }

    pub fn send_to_bar(&mut self, checker: Checker) {
        self.bar[checker.color().index()].push(checker);
    }

    pub fn pop_from_bar(&mut self, color: Color) -> Result<Checker> {
        self.bar[color.index()].pop().ok_or(RulesError::EmptyBar(color))
    }

    /// Relocates one specific checker. Only the indices and the checker's
    /// presence at `start` are validated.
    pub fn move_checker(&mut self, start: usize, end: usize, checker: CheckerId) -> Result<()> {
        Self::check_index(start)?;
        Self::check_index(end)?;
        let position = self.points[start]
            .iter()
            .position(|c| c.id() == checker)
            .ok_or(RulesError::CheckerNotAtOrigin(start as u8))?;
        let checker = self.points[start].remove(position);
        self.points[end].push(checker);
        Ok(())
    }

    /// Takes the top checker off the point and out of the game for good.
    pub fn bear_off(&mut self, index: usize) -> Result<Checker> {
        let checker = self.remove_checker(index)?;
        self.borne_off[checker.color().index()] += 1;
        Ok(checker)
    }

    /// Clears everything, including the borne-off tally.
    pub fn clear(&mut self) {
        *self = Board::new();
    }

    /// Resets to the opening position. Each side gets 15 fresh checkers:
    /// white 2@0, 5@11, 3@16, 5@18 and black mirrored at 2@23, 5@12, 3@7, 5@5.
    pub fn setup_standard(&mut self) {
        const LAYOUT: [(usize, usize); 4] = [(0, 2), (11, 5), (16, 3), (18, 5)];
        self.clear();
        for (index, count) in LAYOUT {
            self.points[index].extend((0..count).map(|_| Checker::new(Color::White)));
            self.points[23 - index].extend((0..count).map(|_| Checker::new(Color::Black)));
        }
    }

    /// Quadrant number 1..=4 of a point, counting from index 0.
    pub fn quadrant_of(index: usize) -> Result<u8> {
        Ok(Self::check_index(index)? as u8 / 6 + 1)
    }

    pub fn bar(&self, color: Color) -> &[Checker] {
        &self.bar[color.index()]
    }

    pub fn bar_count(&self, color: Color) -> usize {
        self.bar[color.index()].len()
    }

    pub fn borne_off(&self, color: Color) -> u8 {
        self.borne_off[color.index()]
    }

    pub fn checkers_on_points(&self, color: Color) -> usize {
        self.points
            .iter()
            .flatten()
            .filter(|c| c.color() == color)
            .count()
    }

    /// Checkers of `color` still accounted for: on points, on the bar and borne off.
    pub fn total_checkers(&self, color: Color) -> usize {
        self.checkers_on_points(color) + self.bar_count(color) + self.borne_off(color) as usize
    }

    /// Indices of the points holding at least one checker of `color`.
    pub fn occupied_by(&self, color: Color) -> impl Iterator<Item = u8> + '_ {
        (0..POINT_COUNT as u8).filter(move |&i| self.points[i as usize].iter().any(|c| c.color() == color))
    }

    /// Signed count on a point: positive for white, negative for black.
    fn signed_count(&self, index: usize) -> i8 {
        let count = self.points[index].len() as i8;
        match self.points[index].last().map(Checker::color) {
            Some(Color::Black) => -count,
            _ => count,
        }
    }

    fn fancy_row(&self, indices: impl Iterator<Item = usize>) -> String {
        indices.map(|i| format!("{:3}", self.signed_count(i))).collect()
    }

    pub fn to_fancy_string(&self) -> String {
        format!(
" 12 13 14 15 16 17 | W |  18 19 20 21 22 23
{} | {:1} | {}
==============================================
{} | {:1} | {}
 11 10  9  8  7  6 | B |   5  4  3  2  1  0
White off: {}, Black off: {}",
            self.fancy_row(12..18),
            self.bar_count(Color::White),
            self.fancy_row(18..24),
            self.fancy_row((6..12).rev()),
            self.bar_count(Color::Black),
            self.fancy_row((0..6).rev()),
            self.borne_off(Color::White), self.borne_off(Color::Black))
    }
}
