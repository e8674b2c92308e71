use std::sync::atomic::{AtomicU32, Ordering};

use crate::{backgammon::Color, error::Result};

static NEXT_CHECKER_ID: AtomicU32 = AtomicU32::new(0);

/// Identity of a single checker, unique for the lifetime of the process.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CheckerId(u32);

/// A checker occupying a point or the bar. The color never changes once created.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Checker {
    id: CheckerId,
    color: Color,
}

impl Checker {
    pub fn new(color: Color) -> Self {
        Checker {
            id: CheckerId(NEXT_CHECKER_ID.fetch_add(1, Ordering::Relaxed)),
            color,
        }
    }

    /// Builds a checker from a boundary color token such as `"white"`.
    pub fn from_color_name(name: &str) -> Result<Self> {
        Ok(Checker::new(name.parse()?))
    }

    pub fn id(&self) -> CheckerId {
        self.id
    }

    pub fn color(&self) -> Color {
        self.color
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::RulesError;

    #[test]
    fn test_checker_identity() {
        let a = Checker::new(Color::White);
        let b = Checker::new(Color::White);
        assert_ne!(a.id(), b.id());
        assert_ne!(a, b);
        assert_eq!(a.clone(), a);
    }

    #[test]
    fn test_checker_from_name() {
        assert_eq!(Checker::from_color_name("black").unwrap().color(), Color::Black);
        assert!(matches!(Checker::from_color_name("green"), Err(RulesError::InvalidColor(_))));
    }
}
