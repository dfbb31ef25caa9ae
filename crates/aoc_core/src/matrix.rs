//! Dense row-major grids.
//!
//! Coordinates are `(x, y)` with `x` selecting the column and `y` the row,
//! matching the puzzle inputs where each text line is a row.

use crate::AocError;
use core::fmt;
use core::ops::{AddAssign, Deref, DerefMut};

/// Neighbour offsets in visiting order: below, above, left, right.
const ORTHOGONAL: [(isize, isize); 4] = [(0, 1), (0, -1), (-1, 0), (1, 0)];

const DIAGONAL: [(isize, isize); 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];

/// Rectangular grid of values.
///
/// Every row has exactly `columns` entries; constructors reject ragged input
/// so indexing never has to re-check row lengths.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Matrix<T> {
    data: Vec<Vec<T>>,
    rows: usize,
    columns: usize,
}

impl<T: Clone + Default> Matrix<T> {
    /// A `rows` x `columns` grid of default values.
    pub fn new(rows: usize, columns: usize) -> Self {
        Self {
            data: vec![vec![T::default(); columns]; rows],
            rows,
            columns,
        }
    }
}

impl<T> Matrix<T> {
    /// Takes ownership of row-major data.
    ///
    /// # Errors
    ///
    /// * [`AocError::EmptyCollection`] if `data` has no rows.
    /// * [`AocError::RaggedMatrix`] if a row differs in length from the first.
    pub fn from_data(data: Vec<Vec<T>>) -> Result<Self, AocError> {
        let columns = data.first().ok_or(AocError::EmptyCollection)?.len();
        if let Some((row, found)) = data
            .iter()
            .map(Vec::len)
            .enumerate()
            .find(|&(_, len)| len != columns)
        {
            return Err(AocError::RaggedMatrix {
                row,
                expected: columns,
                found,
            });
        }

        Ok(Self {
            rows: data.len(),
            columns,
            data,
        })
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    pub fn size(&self) -> usize {
        self.rows * self.columns
    }

    pub fn get(&self, x: usize, y: usize) -> &T {
        &self.data[y][x]
    }

    pub fn set(&mut self, x: usize, y: usize, val: T) {
        self.data[y][x] = val;
    }

    pub fn out_of_bounds(&self, x: isize, y: isize) -> bool {
        x < 0 || y < 0 || x as usize >= self.columns || y as usize >= self.rows
    }

    pub fn for_each(&self, mut op: impl FnMut(usize, usize, &T)) {
        for (y, row) in self.data.iter().enumerate() {
            for (x, value) in row.iter().enumerate() {
                op(x, y, value);
            }
        }
    }

    /// Calls `op` with every in-bounds neighbour of `(x, y)`.
    ///
    /// Orthogonal neighbours come first; diagonals follow when
    /// `include_diagonals` is set. The origin itself is not visited.
    pub fn for_each_neighbour(
        &self,
        include_diagonals: bool,
        x: usize,
        y: usize,
        mut op: impl FnMut(usize, usize),
    ) {
        let diagonals: &[(isize, isize)] = if include_diagonals { &DIAGONAL } else { &[] };
        for &(dx, dy) in ORTHOGONAL.iter().chain(diagonals) {
            let (nx, ny) = (x as isize + dx, y as isize + dy);
            if !self.out_of_bounds(nx, ny) {
                op(nx as usize, ny as usize);
            }
        }
    }

    pub fn iter_rows(&self) -> impl Iterator<Item = &[T]> {
        self.data.iter().map(Vec::as_slice)
    }
}

impl<T: Clone> Matrix<T> {
    /// Returns a larger grid with the current contents surrounded by `fill`.
    pub fn expand(&self, left: usize, right: usize, top: usize, bottom: usize, fill: T) -> Self {
        let rows = self.rows + top + bottom;
        let columns = self.columns + left + right;
        let mut data = vec![vec![fill; columns]; rows];

        for (y, row) in self.data.iter().enumerate() {
            data[y + top][left..left + self.columns].clone_from_slice(row);
        }

        Self {
            data,
            rows,
            columns,
        }
    }
}

/// Matrix of integers with in-place counters.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct IntMatrix<T>(Matrix<T>);

impl<T> IntMatrix<T>
where
    T: Copy + AddAssign + From<u8> + fmt::Display,
{
    pub fn from_data(data: Vec<Vec<T>>) -> Result<Self, AocError> {
        Matrix::from_data(data).map(Self)
    }

    pub fn increment(&mut self, x: usize, y: usize) {
        self.0.data[y][x] += T::from(1);
    }

    pub fn increment_all(&mut self) {
        for value in self.0.data.iter_mut().flatten() {
            *value += T::from(1);
        }
    }

    /// One line per row, values concatenated without separators.
    ///
    /// Only readable for single-digit entries.
    pub fn compact_string(&self) -> String {
        self.0
            .data
            .iter()
            .map(|row| row.iter().map(|value| format!("{value}")).collect::<String>() + "\n")
            .collect()
    }
}

impl<T> From<Matrix<T>> for IntMatrix<T> {
    fn from(base: Matrix<T>) -> Self {
        Self(base)
    }
}

impl<T> Deref for IntMatrix<T> {
    type Target = Matrix<T>;

    fn deref(&self) -> &Matrix<T> {
        &self.0
    }
}

impl<T> DerefMut for IntMatrix<T> {
    fn deref_mut(&mut self) -> &mut Matrix<T> {
        &mut self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid() -> Matrix<u8> {
        Matrix::from_data(vec![vec![1, 2, 3], vec![4, 5, 6]]).unwrap()
    }

    #[test]
    fn dimensions() {
        let m = grid();
        assert_eq!((m.rows(), m.columns(), m.size()), (2, 3, 6));
        assert_eq!(*m.get(2, 1), 6);

        let blank: Matrix<bool> = Matrix::new(3, 4);
        assert_eq!(blank.size(), 12);
        assert!(!*blank.get(3, 2));
    }

    #[test]
    fn rejects_ragged_and_empty() {
        assert_eq!(
            Matrix::from_data(vec![vec![1, 2], vec![3]]),
            Err(AocError::RaggedMatrix {
                row: 1,
                expected: 2,
                found: 1
            })
        );
        assert_eq!(
            Matrix::<u8>::from_data(Vec::new()),
            Err(AocError::EmptyCollection)
        );
    }

    #[test]
    fn bounds() {
        let m = grid();
        assert!(!m.out_of_bounds(0, 0));
        assert!(!m.out_of_bounds(2, 1));
        assert!(m.out_of_bounds(-1, 0));
        assert!(m.out_of_bounds(3, 0));
        assert!(m.out_of_bounds(0, 2));
    }

    #[test]
    fn neighbours_of_corner() {
        let m = grid();
        let mut seen = Vec::new();
        m.for_each_neighbour(false, 0, 0, |x, y| seen.push((x, y)));
        assert_eq!(seen, vec![(0, 1), (1, 0)]);

        seen.clear();
        m.for_each_neighbour(true, 0, 0, |x, y| seen.push((x, y)));
        assert_eq!(seen, vec![(0, 1), (1, 0), (1, 1)]);
    }

    #[test]
    fn neighbours_of_centre() {
        let m: Matrix<u8> = Matrix::new(3, 3);
        let mut count = 0;
        m.for_each_neighbour(true, 1, 1, |_, _| count += 1);
        assert_eq!(count, 8);
    }

    #[test]
    fn for_each_visits_row_major() {
        let mut visited = Vec::new();
        grid().for_each(|x, y, v| visited.push((x, y, *v)));
        assert_eq!(visited[0], (0, 0, 1));
        assert_eq!(visited[3], (0, 1, 4));
        assert_eq!(visited.len(), 6);
    }

    #[test]
    fn expand_surrounds_with_fill() {
        let expanded = grid().expand(1, 0, 0, 1, 0);
        let rows: Vec<&[u8]> = expanded.iter_rows().collect();
        assert_eq!(rows, vec![&[0u8, 1, 2, 3][..], &[0, 4, 5, 6], &[0, 0, 0, 0]]);
    }

    #[test]
    fn int_matrix_counters() {
        let mut m = IntMatrix::from_data(vec![vec![0u32, 8], vec![3, 1]]).unwrap();
        m.increment(1, 0);
        assert_eq!(*m.get(1, 0), 9);
        m.increment_all();
        assert_eq!(m.compact_string(), "110\n42\n");

        m.set(0, 0, 7);
        assert_eq!(*m.get(0, 0), 7);
    }
}
