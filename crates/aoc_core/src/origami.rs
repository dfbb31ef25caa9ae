//! Folding transparent paper covered in dots.
//!
//! A fold along `x = n` reflects every dot right of the line onto the left
//! half (`x' = 2n - x`); `y = n` does the same for dots below the line. Dots
//! landing on an occupied position merge, so the paper is a set.

use crate::matrix::Matrix;
use crate::sets::Set;
use crate::{AocError, ParseErrorKind, slices};
use aoc_common::origami::{DOT, EMPTY, MAX_RENDER_CELLS};
use core::fmt;
use log::debug;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Coord {
    pub x: i64,
    pub y: i64,
}

impl Coord {
    pub fn new(x: i64, y: i64) -> Self {
        Self { x, y }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Axis {
    X,
    Y,
}

impl Axis {
    /// Parses the axis letter of a fold instruction.
    pub fn from_name(name: &str) -> Result<Self, AocError> {
        match name {
            "x" => Ok(Axis::X),
            "y" => Ok(Axis::Y),
            other => Err(AocError::parse(
                other,
                ParseErrorKind::UnknownAxis(other.to_owned()),
            )),
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Axis::X => "x",
            Axis::Y => "y",
        }
    }
}

/// Reflection of the paper about one line.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Fold {
    pub axis: Axis,
    pub line: i64,
}

impl Fold {
    pub fn new(axis: Axis, line: i64) -> Self {
        Self { axis, line }
    }

    /// Only dots strictly beyond the line move.
    pub fn should_reflect(&self, coord: Coord) -> bool {
        match self.axis {
            Axis::X => coord.x > self.line,
            Axis::Y => coord.y > self.line,
        }
    }

    /// Mirrors `coord` across the line.
    ///
    /// # Errors
    ///
    /// [`AocError::CoordinateOverflow`] if the mirrored position does not fit
    /// in an `i64`.
    pub fn reflect(&self, coord: Coord) -> Result<Coord, AocError> {
        let value = match self.axis {
            Axis::X => coord.x,
            Axis::Y => coord.y,
        };
        let mirrored = self
            .line
            .checked_mul(2)
            .and_then(|twice| twice.checked_sub(value))
            .ok_or(AocError::CoordinateOverflow {
                axis: self.axis.name(),
                line: self.line,
                value,
            })?;

        Ok(match self.axis {
            Axis::X => Coord::new(mirrored, coord.y),
            Axis::Y => Coord::new(coord.x, mirrored),
        })
    }

    /// Folds `paper` in place. On error the paper is left untouched.
    pub fn apply(&self, paper: &mut Paper) -> Result<(), AocError> {
        let moved = paper
            .dots
            .filter(|&coord| self.should_reflect(coord))
            .to_vec()
            .into_iter()
            .map(|coord| Ok((coord, self.reflect(coord)?)))
            .collect::<Result<Vec<_>, AocError>>()?;

        for (from, to) in moved {
            paper.dots.remove(&from);
            paper.dots.add(to);
        }
        debug!("fold along {self}: {} dots", paper.dots.len());
        Ok(())
    }
}

impl fmt::Display for Fold {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}={}", self.axis.name(), self.line)
    }
}

/// The set of visible dots.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Paper {
    dots: Set<Coord>,
}

impl Paper {
    pub fn new(dots: impl IntoIterator<Item = Coord>) -> Self {
        Self {
            dots: dots.into_iter().collect(),
        }
    }

    pub fn dot_count(&self) -> usize {
        self.dots.len()
    }

    pub fn contains(&self, coord: Coord) -> bool {
        self.dots.is_member(&coord)
    }

    pub fn fold(&mut self, fold: &Fold) -> Result<(), AocError> {
        fold.apply(self)
    }

    /// Rasterises the dots into a grid spanning from the origin (or the
    /// smallest coordinate, if negative) to the largest coordinate.
    ///
    /// Returns `Ok(None)` for blank paper.
    ///
    /// # Errors
    ///
    /// [`AocError::GridTooLarge`] if the grid would exceed
    /// [`MAX_RENDER_CELLS`].
    pub fn to_matrix(&self) -> Result<Option<(Coord, Matrix<bool>)>, AocError> {
        let dots = self.dots.to_vec();
        let xs: Vec<i64> = dots.iter().map(|c| c.x).collect();
        let ys: Vec<i64> = dots.iter().map(|c| c.y).collect();
        let (Some((min_x, max_x)), Some((min_y, max_y))) =
            (slices::min_max(&xs), slices::min_max(&ys))
        else {
            return Ok(None);
        };

        let origin = Coord::new(min_x.min(0), min_y.min(0));
        let span = |min: i64, max: i64| (i128::from(max) - i128::from(min) + 1) as u128;
        let (columns, rows) = (span(origin.x, max_x), span(origin.y, max_y));
        if columns * rows > MAX_RENDER_CELLS {
            return Err(AocError::GridTooLarge { columns, rows });
        }

        let mut grid = Matrix::new(rows as usize, columns as usize);
        for dot in &dots {
            grid.set(
                (dot.x - origin.x) as usize,
                (dot.y - origin.y) as usize,
                true,
            );
        }
        Ok(Some((origin, grid)))
    }

    /// Draws the paper with one text line per row.
    pub fn render(&self) -> Result<String, AocError> {
        let Some((_, grid)) = self.to_matrix()? else {
            return Ok(String::new());
        };

        let mut out = String::with_capacity(grid.size() + grid.rows());
        for row in grid.iter_rows() {
            out.extend(row.iter().map(|&dot| if dot { DOT } else { EMPTY }));
            out.push('\n');
        }
        Ok(out)
    }
}

/// Parsed puzzle input: the initial dots and the folds in order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Instructions {
    pub paper: Paper,
    pub folds: Vec<Fold>,
}

impl Instructions {
    /// Applies every fold, reporting the dot count after each one.
    pub fn fold_all(&mut self) -> Result<Vec<usize>, AocError> {
        self.folds
            .iter()
            .map(|fold| {
                self.paper.fold(fold)?;
                Ok(self.paper.dot_count())
            })
            .collect()
    }
}
