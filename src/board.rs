//! # Board
//!
//! Herein is the game board: a small rectangular grid of cells, each bearing a
//! short string (usually a single letter, but the classic `QU` die face
//! occupies a single cell). Boards are immutable once constructed.

use std::{
	error::Error,
	fmt::{self, Display, Formatter},
	ops::Index,
	str::FromStr
};

use fixedstr::str8;

////////////////////////////////////////////////////////////////////////////////
//                                Coordinates.                                //
////////////////////////////////////////////////////////////////////////////////

/// The eight unit steps between adjacent cells, in search order. Row deltas
/// vary slowest, so the order is: up-left, up, up-right, left, right,
/// down-left, down, down-right.
pub const DIRECTIONS: [(isize, isize); 8] = [
	(-1, -1), (-1, 0), (-1, 1),
	(0, -1), (0, 1),
	(1, -1), (1, 0), (1, 1)
];

/// The coordinate of a cell, as a 0-indexed `(row, column)` pair. The origin
/// is the top-left corner.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[must_use]
pub struct Coordinate
{
	/// The row, counting down from the top.
	pub row: usize,

	/// The column, counting right from the left.
	pub col: usize
}

impl Coordinate
{
	/// Construct a new coordinate.
	///
	/// # Arguments
	///
	/// * `row` - The row.
	/// * `col` - The column.
	///
	/// # Returns
	///
	/// The requested coordinate.
	#[inline]
	pub const fn new(row: usize, col: usize) -> Self { Self { row, col } }

	/// Step away from the coordinate by the given deltas.
	///
	/// # Arguments
	///
	/// * `dr` - The change in the row.
	/// * `dc` - The change in the column.
	///
	/// # Returns
	///
	/// The new coordinate, or `None` if the step would leave the first
	/// quadrant. No check against any board is made.
	#[inline]
	#[must_use]
	pub fn step(&self, dr: isize, dc: isize) -> Option<Self>
	{
		let row = self.row.checked_add_signed(dr)?;
		let col = self.col.checked_add_signed(dc)?;
		Some(Self { row, col })
	}

	/// Check whether the receiver and `other` are adjacent. Two coordinates are
	/// adjacent if they differ by at most one in each of the row and the
	/// column, but are not identical.
	///
	/// # Arguments
	///
	/// * `other` - The other coordinate.
	///
	/// # Returns
	///
	/// `true` if the coordinates are adjacent, `false` otherwise.
	#[inline]
	#[must_use]
	pub fn is_adjacent(&self, other: &Self) -> bool
	{
		self != other
			&& self.row.abs_diff(other.row) <= 1
			&& self.col.abs_diff(other.col) <= 1
	}
}

impl From<(usize, usize)> for Coordinate
{
	#[inline]
	fn from((row, col): (usize, usize)) -> Self { Self { row, col } }
}

impl Display for Coordinate
{
	fn fmt(&self, f: &mut Formatter) -> fmt::Result
	{
		write!(f, "({}, {})", self.row, self.col)
	}
}

////////////////////////////////////////////////////////////////////////////////
//                                   Board.                                   //
////////////////////////////////////////////////////////////////////////////////

/// A rectangular grid of cells, linearized in row-major order.
#[derive(Clone, Debug, PartialEq, Eq)]
#[must_use]
pub struct Board
{
	/// The content of the cells. The first element is the top-left corner, and
	/// the last element is the bottom-right corner.
	cells: Vec<str8>,

	/// The number of rows.
	height: usize,

	/// The number of columns.
	width: usize
}

impl Board
{
	/// The maximum length of a single cell, in bytes.
	pub const MAX_CELL_LEN: usize = 7;

	/// Construct a board from its rows. Every row must have the same, nonzero
	/// number of cells, and no cell may exceed
	/// [`MAX_CELL_LEN`](Self::MAX_CELL_LEN) bytes. Cell content is taken
	/// verbatim.
	///
	/// # Arguments
	///
	/// * `rows` - The rows of the board, top to bottom.
	///
	/// # Returns
	///
	/// The requested board.
	///
	/// # Errors
	///
	/// * [`BoardError::Empty`] if there are no rows, or the first row is
	///   empty.
	/// * [`BoardError::Ragged`] if some row differs in length from the first.
	/// * [`BoardError::CellTooLong`] if some cell is too long.
	pub fn new<R, T>(rows: &[R]) -> Result<Self, BoardError>
	where
		R: AsRef<[T]>,
		T: AsRef<str>
	{
		let width = rows.first().map(|r| r.as_ref().len()).unwrap_or(0);
		if width == 0
		{
			return Err(BoardError::Empty)
		}
		let mut cells = Vec::with_capacity(width * rows.len());
		for (row, cols) in rows.iter().enumerate()
		{
			let cols = cols.as_ref();
			if cols.len() != width
			{
				return Err(BoardError::Ragged {
					row,
					expected: width,
					found: cols.len()
				})
			}
			for (col, cell) in cols.iter().enumerate()
			{
				let cell = cell.as_ref();
				if cell.len() > Self::MAX_CELL_LEN
				{
					return Err(BoardError::CellTooLong { row, col })
				}
				cells.push(str8::from(cell));
			}
		}
		Ok(Self { cells, height: rows.len(), width })
	}

	/// Construct a board directly from row-major cells that are already known
	/// to be well-formed.
	///
	/// # Panics
	///
	/// If the cells don't fill a whole number of rows of `width`.
	pub(crate) fn from_cells(cells: Vec<str8>, width: usize) -> Self
	{
		assert!(width > 0 && !cells.is_empty() && cells.len() % width == 0);
		let height = cells.len() / width;
		Self { cells, height, width }
	}

	/// The number of rows.
	#[inline]
	#[must_use]
	pub fn height(&self) -> usize { self.height }

	/// The number of columns.
	#[inline]
	#[must_use]
	pub fn width(&self) -> usize { self.width }

	/// The total number of cells. This bounds the length of any path.
	#[inline]
	#[must_use]
	pub fn len(&self) -> usize { self.cells.len() }

	/// Boards are never empty, but Clippy insists.
	#[inline]
	#[must_use]
	pub fn is_empty(&self) -> bool { self.cells.is_empty() }

	/// Check whether the coordinate lies on the board.
	///
	/// # Arguments
	///
	/// * `coordinate` - The coordinate to check.
	///
	/// # Returns
	///
	/// `true` if the coordinate is on the board, `false` otherwise.
	#[inline]
	#[must_use]
	pub fn contains(&self, coordinate: Coordinate) -> bool
	{
		coordinate.row < self.height && coordinate.col < self.width
	}

	/// Get the content of the cell at the given coordinate.
	///
	/// # Arguments
	///
	/// * `coordinate` - The coordinate of the cell.
	///
	/// # Returns
	///
	/// The content of the cell, or `None` if the coordinate is off the board.
	#[inline]
	#[must_use]
	pub fn cell(&self, coordinate: Coordinate) -> Option<&str>
	{
		if self.contains(coordinate)
		{
			Some(self.cells[self.index_of(coordinate)].as_str())
		}
		else
		{
			None
		}
	}

	/// Iterate over every coordinate of the board in row-major order.
	pub fn coordinates(&self) -> impl Iterator<Item = Coordinate> + '_
	{
		(0..self.height).flat_map(move |row| {
			(0..self.width).map(move |col| Coordinate::new(row, col))
		})
	}

	/// Iterate over the on-board neighbors of the given coordinate, in
	/// [`DIRECTIONS`] order.
	///
	/// # Arguments
	///
	/// * `coordinate` - The center coordinate.
	///
	/// # Returns
	///
	/// An iterator over the adjacent coordinates that lie on the board.
	pub fn neighbors(
		&self,
		coordinate: Coordinate
	) -> impl Iterator<Item = Coordinate> + '_
	{
		DIRECTIONS.iter()
			.filter_map(move |&(dr, dc)| coordinate.step(dr, dc))
			.filter(move |&c| self.contains(c))
	}

	/// Iterate over the rows of the board, top to bottom.
	pub fn rows(&self) -> impl Iterator<Item = &[str8]> + '_
	{
		self.cells.chunks_exact(self.width)
	}

	#[inline]
	fn index_of(&self, coordinate: Coordinate) -> usize
	{
		coordinate.row * self.width + coordinate.col
	}
}

impl Index<Coordinate> for Board
{
	type Output = str;

	/// # Panics
	///
	/// If the coordinate is off the board.
	fn index(&self, coordinate: Coordinate) -> &Self::Output
	{
		assert!(
			self.contains(coordinate),
			"coordinate {} is off the {}×{} board",
			coordinate,
			self.height,
			self.width
		);
		self.cells[self.index_of(coordinate)].as_str()
	}
}

impl FromStr for Board
{
	type Err = BoardError;

	/// Parse a board from text. Each non-blank line is a row, and cells are
	/// separated by whitespace. Letters are upper-cased.
	fn from_str(s: &str) -> Result<Self, Self::Err>
	{
		let rows = s.lines()
			.map(|line| {
				line.split_whitespace()
					.map(str::to_uppercase)
					.collect::<Vec<_>>()
			})
			.filter(|row| !row.is_empty())
			.collect::<Vec<_>>();
		Self::new(&rows)
	}
}

impl Display for Board
{
	fn fmt(&self, f: &mut Formatter) -> fmt::Result
	{
		for (index, row) in self.rows().enumerate()
		{
			if index > 0
			{
				writeln!(f)?;
			}
			let line = row.iter()
				.map(|cell| cell.as_str())
				.collect::<Vec<_>>()
				.join(" ");
			write!(f, "{}", line)?;
		}
		Ok(())
	}
}

/// The complete enumeration of [`Board`] construction errors.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BoardError
{
	/// The board has no cells.
	Empty,

	/// Some row is not as wide as the first row.
	Ragged
	{
		/// The offending row.
		row: usize,

		/// The width of the first row.
		expected: usize,

		/// The width of the offending row.
		found: usize
	},

	/// Some cell holds more than [`Board::MAX_CELL_LEN`] bytes.
	CellTooLong
	{
		/// The row of the offending cell.
		row: usize,

		/// The column of the offending cell.
		col: usize
	}
}

impl Display for BoardError
{
	fn fmt(&self, f: &mut Formatter) -> fmt::Result
	{
		match self
		{
			Self::Empty => write!(f, "board is empty"),
			Self::Ragged { row, expected, found } => write!(
				f,
				"row {} has {} cells, but the first row has {}",
				row,
				found,
				expected
			),
			Self::CellTooLong { row, col } => write!(
				f,
				"cell ({}, {}) exceeds {} bytes",
				row,
				col,
				Board::MAX_CELL_LEN
			)
		}
	}
}

impl Error for BoardError {}

////////////////////////////////////////////////////////////////////////////////
//                                   Tests.                                   //
////////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod test
{
	use crate::board::{Board, BoardError, Coordinate};

	/// Ensure that well-formed rows produce a board with the expected shape and
	/// content.
	#[test]
	fn test_new()
	{
		let board = Board::new(&[["A", "B", "C"], ["D", "QU", "F"]]).unwrap();
		assert_eq!(board.height(), 2);
		assert_eq!(board.width(), 3);
		assert_eq!(board.len(), 6);
		assert_eq!(&board[Coordinate::new(0, 0)], "A");
		assert_eq!(&board[Coordinate::new(1, 1)], "QU");
		assert_eq!(board.cell(Coordinate::new(1, 2)), Some("F"));
		assert_eq!(board.cell(Coordinate::new(2, 0)), None);
		assert_eq!(board.cell(Coordinate::new(0, 3)), None);
	}

	/// Ensure that malformed rows are rejected with the right error.
	#[test]
	fn test_new_errors()
	{
		let empty: [[&str; 0]; 0] = [];
		assert_eq!(Board::new(&empty), Err(BoardError::Empty));
		let empty_row: [[&str; 0]; 1] = [[]];
		assert_eq!(Board::new(&empty_row), Err(BoardError::Empty));
		assert_eq!(
			Board::new(&[vec!["A", "B"], vec!["C"]]),
			Err(BoardError::Ragged { row: 1, expected: 2, found: 1 })
		);
		assert_eq!(
			Board::new(&[["A", "ABCDEFGH"]]),
			Err(BoardError::CellTooLong { row: 0, col: 1 })
		);
		assert_eq!(BoardError::Empty.to_string(), "board is empty");
	}

	/// Ensure that boards parse from text and display back to the same text.
	#[test]
	fn test_parse_and_display()
	{
		let board: Board = "a b\n\n  c qu  \n".parse().unwrap();
		assert_eq!(board.height(), 2);
		assert_eq!(board.width(), 2);
		assert_eq!(&board[Coordinate::new(1, 1)], "QU");
		assert_eq!(board.to_string(), "A B\nC QU");
		assert_eq!("".parse::<Board>(), Err(BoardError::Empty));
	}

	/// Ensure that coordinates are enumerated in row-major order.
	#[test]
	fn test_coordinates()
	{
		let board = Board::new(&[["A", "B"], ["C", "D"], ["E", "F"]]).unwrap();
		let coordinates = board.coordinates().collect::<Vec<_>>();
		assert_eq!(
			coordinates,
			vec![
				Coordinate::new(0, 0), Coordinate::new(0, 1),
				Coordinate::new(1, 0), Coordinate::new(1, 1),
				Coordinate::new(2, 0), Coordinate::new(2, 1)
			]
		);
	}

	/// Ensure that neighbors stay on the board and follow the fixed direction
	/// order.
	#[test]
	fn test_neighbors()
	{
		let board = "A B C\nD E F\nG H I".parse::<Board>().unwrap();
		let corner = board.neighbors(Coordinate::new(0, 0)).collect::<Vec<_>>();
		assert_eq!(
			corner,
			vec![
				Coordinate::new(0, 1),
				Coordinate::new(1, 0),
				Coordinate::new(1, 1)
			]
		);
		let center = board.neighbors(Coordinate::new(1, 1)).collect::<Vec<_>>();
		assert_eq!(center.len(), 8);
		assert_eq!(center[0], Coordinate::new(0, 0));
		assert_eq!(center[7], Coordinate::new(2, 2));
		assert!(center.iter().all(|c| c.is_adjacent(&Coordinate::new(1, 1))));
	}

	/// Ensure that adjacency admits exactly the eight surrounding cells.
	#[test]
	fn test_is_adjacent()
	{
		let center = Coordinate::new(2, 2);
		for row in 0..5
		{
			for col in 0..5
			{
				let other = Coordinate::new(row, col);
				let expected = other != center
					&& (1..=3).contains(&row)
					&& (1..=3).contains(&col);
				assert_eq!(center.is_adjacent(&other), expected, "{}", other);
			}
		}
		assert_eq!(Coordinate::new(0, 0).step(-1, 0), None);
		assert_eq!(
			Coordinate::new(0, 0).step(1, 1),
			Some(Coordinate::new(1, 1))
		);
	}

	/// Indexing off the board is a contract breach.
	#[test]
	#[should_panic]
	fn test_index_off_board()
	{
		let board = Board::new(&[["A"]]).unwrap();
		let _ = &board[Coordinate::new(0, 1)];
	}
}
