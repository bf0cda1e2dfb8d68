use std::{fmt, ops::Neg};

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(i8)]
pub enum Level {
    Negative = -1,
    Zero = 0,
    Positive = 1,
}

pub type LevelSequence = Vec<Level>;

impl Level {
    pub fn value(self) -> i8 {
        self as i8
    }

    /// Flips polarity. `Zero` has none and stays put.
    pub fn toggle(self) -> Self {
        -self
    }

    pub fn is_zero(self) -> bool {
        self == Level::Zero
    }
}

impl Neg for Level {
    type Output = Level;

    fn neg(self) -> Self::Output {
        match self {
            Level::Negative => Level::Positive,
            Level::Zero => Level::Zero,
            Level::Positive => Level::Negative,
        }
    }
}

impl From<Level> for i8 {
    fn from(level: Level) -> Self {
        level.value()
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value())
    }
}

pub fn values(levels: &[Level]) -> Vec<i8> {
    levels.iter().copied().map(i8::from).collect()
}

#[cfg(test)]
mod test {
    use super::Level;

    #[test]
    fn test_toggle() {
        assert_eq!(Level::Positive.toggle(), Level::Negative);
        assert_eq!(Level::Negative.toggle(), Level::Positive);
        assert_eq!(Level::Zero.toggle(), Level::Zero);
    }

    #[test]
    fn test_integer_conversion() {
        assert_eq!(i8::from(Level::Negative), -1);
        assert_eq!(i8::from(-Level::Zero), 0);
    }
}
