/// Represents the content of a single cell.
///
/// The `Disc` enum has three variants, matching the numeric values used by the
/// board descriptor:
///
/// * `Empty` (0) - An empty spot on the board.
/// * `Black` (1) - A dark disc. Black moves first.
/// * `White` (2) - A light disc.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Disc {
    Empty = 0,
    Black = 1,
    White = 2,
}

impl Disc {
    /// Converts a descriptor cell value into a disc.
    ///
    /// # Returns
    ///
    /// `Some(Disc)` for 0, 1 and 2, `None` for any other value.
    pub fn from_u8(value: u8) -> Option<Disc> {
        match value {
            0 => Some(Disc::Empty),
            1 => Some(Disc::Black),
            2 => Some(Disc::White),
            _ => None,
        }
    }

    /// Returns the descriptor cell value of this disc.
    #[inline]
    pub fn as_u8(self) -> u8 {
        self as u8
    }

    /// Converts the disc to its corresponding character representation.
    ///
    /// # Returns
    ///
    /// * `'-'` for `Disc::Empty`
    /// * `'X'` for `Disc::Black`
    /// * `'O'` for `Disc::White`
    pub fn to_char(self) -> char {
        match self {
            Disc::Empty => '-',
            Disc::Black => 'X',
            Disc::White => 'O',
        }
    }

    /// Returns the opposite disc.
    ///
    /// # Returns
    ///
    /// * `Disc::White` for `Disc::Black`
    /// * `Disc::Black` for `Disc::White`
    /// * `Disc::Empty` for `Disc::Empty`
    pub fn opposite(&self) -> Disc {
        match self {
            Disc::Black => Disc::White,
            Disc::White => Disc::Black,
            Disc::Empty => Disc::Empty,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_u8() {
        assert_eq!(Disc::from_u8(0), Some(Disc::Empty));
        assert_eq!(Disc::from_u8(1), Some(Disc::Black));
        assert_eq!(Disc::from_u8(2), Some(Disc::White));
        assert_eq!(Disc::from_u8(3), None);
    }

    #[test]
    fn test_as_u8_matches_descriptor_values() {
        for value in 0..3 {
            assert_eq!(Disc::from_u8(value).map(Disc::as_u8), Some(value));
        }
    }

    #[test]
    fn test_opposite() {
        assert_eq!(Disc::Black.opposite(), Disc::White);
        assert_eq!(Disc::White.opposite(), Disc::Black);
        assert_eq!(Disc::Empty.opposite(), Disc::Empty);
    }
}
