use core::ops::{Index, IndexMut};
use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::*;

/// Square matrix of bits, indexed by `(row, column)`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawBitMatrix")]
pub struct BitMatrix {
    cells: Array2<bool>,
}

#[derive(Deserialize)]
struct RawBitMatrix {
    cells: Array2<bool>,
}

impl TryFrom<RawBitMatrix> for BitMatrix {
    type Error = GameError;

    fn try_from(RawBitMatrix { cells }: RawBitMatrix) -> Result<Self> {
        let (rows, cols) = cells.dim();
        if rows != cols {
            return Err(GameError::InvalidShape);
        }
        if rows > usize::from(Coord::MAX) {
            return Err(InvalidSize::TooLarge.into());
        }
        Ok(Self { cells })
    }
}

impl BitMatrix {
    /// All-zero matrix with the given side length.
    pub fn new(size: Coord) -> Self {
        Self {
            cells: Array2::default((size, size).to_nd_index()),
        }
    }

    /// Matrix with every cell drawn from `cell`, called in row-major order.
    pub fn from_fn(size: Coord, mut cell: impl FnMut(Coord2) -> bool) -> Self {
        let mut matrix = Self::new(size);
        for row in 0..size {
            for col in 0..size {
                matrix[(row, col)] = cell((row, col));
            }
        }
        matrix
    }

    /// Builds a matrix from `0`/`1` rows; any non-zero value counts as `1`.
    pub fn from_rows<R: AsRef<[u8]>>(rows: &[R]) -> Result<Self> {
        let size: Coord = rows
            .len()
            .try_into()
            .map_err(|_| GameError::from(InvalidSize::TooLarge))?;
        if size == 0 {
            return Err(InvalidSize::NotPositive.into());
        }

        let mut matrix = Self::new(size);
        for (row, values) in rows.iter().enumerate() {
            let values = values.as_ref();
            if values.len() != usize::from(size) {
                return Err(GameError::InvalidIndex);
            }
            for (col, &value) in values.iter().enumerate() {
                matrix.cells[[row, col]] = value != 0;
            }
        }
        Ok(matrix)
    }

    pub fn size(&self) -> Coord {
        // construction only ever goes through `Coord` sized shapes
        self.cells.nrows() as Coord
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn validate_line(&self, line: Line) -> Result<Line> {
        if line.index() < self.size() {
            Ok(line)
        } else {
            Err(GameError::InvalidIndex)
        }
    }

    /// Cell value as `0` or `1`.
    pub fn bit(&self, coords: Coord2) -> u8 {
        self[coords].into()
    }

    pub fn flip_row(&mut self, row: Coord) {
        self.cells
            .row_mut(row.into())
            .iter_mut()
            .for_each(|cell| *cell = !*cell);
    }

    pub fn flip_column(&mut self, col: Coord) {
        self.cells
            .column_mut(col.into())
            .iter_mut()
            .for_each(|cell| *cell = !*cell);
    }

    /// Toggles every cell of `line`. The line must be in bounds.
    pub fn flip(&mut self, line: Line) {
        match line {
            Line::Row(row) => self.flip_row(row),
            Line::Column(col) => self.flip_column(col),
        }
    }

    /// Number of cells that differ from `other`.
    pub fn distance(&self, other: &Self) -> usize {
        self.cells
            .iter()
            .zip(other.cells.iter())
            .filter(|(a, b)| a != b)
            .count()
    }

    pub fn row_bits(&self, row: Coord) -> impl Iterator<Item = u8> + '_ {
        self.cells.row(row.into()).into_iter().map(|&cell| cell.into())
    }
}

impl Default for BitMatrix {
    fn default() -> Self {
        Self::new(0)
    }
}

impl Index<Coord2> for BitMatrix {
    type Output = bool;

    fn index(&self, coords: Coord2) -> &Self::Output {
        &self.cells[coords.to_nd_index()]
    }
}

impl IndexMut<Coord2> for BitMatrix {
    fn index_mut(&mut self, coords: Coord2) -> &mut Self::Output {
        &mut self.cells[coords.to_nd_index()]
    }
}
