use serde::{Deserialize, Serialize};

/// Single axis used for the matrix side length and row/column indexes.
pub type Coord = u8;

/// Count type used for flip counts and move budgets.
pub type MoveCount = u16;

/// Flips made so far; wider than `MoveCount` so it can always step past any budget.
pub type FlipCount = u32;

/// Two-dimensional coordinates `(row, column)`.
pub type Coord2 = (Coord, Coord);

pub trait ToNdIndex {
    type Output;
    fn to_nd_index(self) -> Self::Output;
}

impl ToNdIndex for Coord2 {
    type Output = [usize; 2];

    fn to_nd_index(self) -> Self::Output {
        [self.0.into(), self.1.into()]
    }
}

/// A whole row or a whole column, the unit every flip acts on.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Line {
    Row(Coord),
    Column(Coord),
}

impl Line {
    /// Maps `0..2 * size` onto lines: the first `size` values are rows, the rest columns.
    pub fn from_line_index(index: u16, size: Coord) -> Option<Self> {
        let size = u16::from(size);
        if index < size {
            Some(Self::Row(index as Coord))
        } else if index < 2 * size {
            Some(Self::Column((index - size) as Coord))
        } else {
            None
        }
    }

    pub const fn index(self) -> Coord {
        match self {
            Self::Row(index) | Self::Column(index) => index,
        }
    }

    pub const fn is_row(self) -> bool {
        matches!(self, Self::Row(_))
    }
}

/// Total number of flippable lines for a matrix of the given side length.
pub const fn line_count(size: Coord) -> u16 {
    (size as u16) * 2
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn line_index_splits_rows_then_columns() {
        assert_eq!(Line::from_line_index(0, 3), Some(Line::Row(0)));
        assert_eq!(Line::from_line_index(2, 3), Some(Line::Row(2)));
        assert_eq!(Line::from_line_index(3, 3), Some(Line::Column(0)));
        assert_eq!(Line::from_line_index(5, 3), Some(Line::Column(2)));
        assert_eq!(Line::from_line_index(6, 3), None);
    }

    #[test]
    fn line_count_covers_max_size() {
        assert_eq!(line_count(Coord::MAX), 510);
        assert_eq!(
            Line::from_line_index(509, Coord::MAX),
            Some(Line::Column(254))
        );
    }
}
