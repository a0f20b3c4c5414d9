//! # Paths
//!
//! A path is an ordered sequence of cell [coordinates](Coordinate). Paths are
//! transient values, produced and consumed by a single query. A path is only
//! _legal_ if it never revisits a cell and every step moves to an adjacent
//! cell, but the type itself does not enforce this, so that arbitrary user
//! input can be represented and then [validated](crate::validate).

use std::{
	fmt::{self, Display, Formatter},
	ops::Index
};

use crate::board::{Board, Coordinate};

/// A sequence of cell coordinates.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[must_use]
pub struct Path(Vec<Coordinate>);

impl Path
{
	/// Construct an empty path. Same as [`Default::default`].
	#[inline]
	pub fn new() -> Self { Self(Vec::new()) }

	/// Construct an empty path that can grow to `capacity` cells without
	/// reallocating.
	#[inline]
	pub fn with_capacity(capacity: usize) -> Self
	{
		Self(Vec::with_capacity(capacity))
	}

	/// The number of cells in the path.
	#[inline]
	#[must_use]
	pub fn len(&self) -> usize { self.0.len() }

	/// Check if the path is empty. The empty path spells the empty word.
	#[inline]
	#[must_use]
	pub fn is_empty(&self) -> bool { self.0.is_empty() }

	/// Iterate over the coordinates of the path, in order.
	#[inline]
	pub fn iter(&self) -> impl Iterator<Item = &Coordinate> + '_
	{
		self.0.iter()
	}

	/// The last coordinate of the path, if any.
	#[inline]
	#[must_use]
	pub fn last(&self) -> Option<Coordinate> { self.0.last().copied() }

	/// Check whether the path visits the given coordinate.
	#[inline]
	#[must_use]
	pub fn contains(&self, coordinate: Coordinate) -> bool
	{
		self.0.contains(&coordinate)
	}

	/// Get the position of the given coordinate within the path.
	#[inline]
	#[must_use]
	pub fn position(&self, coordinate: Coordinate) -> Option<usize>
	{
		self.0.iter().position(|&c| c == coordinate)
	}

	/// Extend the path by one cell.
	#[inline]
	pub fn push(&mut self, coordinate: Coordinate) { self.0.push(coordinate) }

	/// Remove the last cell of the path.
	#[inline]
	pub fn pop(&mut self) -> Option<Coordinate> { self.0.pop() }

	/// Remove every cell from the path.
	#[inline]
	pub fn clear(&mut self) { self.0.clear() }

	/// The coordinates of the path, as a slice.
	#[inline]
	#[must_use]
	pub fn as_slice(&self) -> &[Coordinate] { &self.0 }

	/// Spell the path on the given board, by concatenating the content of
	/// every visited cell in order. No legality checks are performed.
	///
	/// # Arguments
	///
	/// * `board` - The board.
	///
	/// # Returns
	///
	/// The spelled word, or `None` if any coordinate is off the board.
	#[must_use]
	pub fn spell(&self, board: &Board) -> Option<String>
	{
		self.0.iter().map(|&c| board.cell(c)).collect()
	}

	/// The point value of a word found along this path: the square of the
	/// number of cells.
	#[inline]
	#[must_use]
	pub fn score(&self) -> u32
	{
		let len = self.0.len() as u32;
		len * len
	}
}

impl From<Vec<Coordinate>> for Path
{
	#[inline]
	fn from(coordinates: Vec<Coordinate>) -> Self { Self(coordinates) }
}

impl<const N: usize> From<[(usize, usize); N]> for Path
{
	fn from(pairs: [(usize, usize); N]) -> Self
	{
		pairs.into_iter().map(Coordinate::from).collect()
	}
}

impl FromIterator<Coordinate> for Path
{
	fn from_iter<I: IntoIterator<Item = Coordinate>>(iter: I) -> Self
	{
		Self(iter.into_iter().collect())
	}
}

impl Index<usize> for Path
{
	type Output = Coordinate;

	#[inline]
	fn index(&self, index: usize) -> &Self::Output
	{
		&self.0[index]
	}
}

impl Display for Path
{
	fn fmt(&self, f: &mut Formatter) -> fmt::Result
	{
		let steps = self.0.iter()
			.map(|c| c.to_string())
			.collect::<Vec<_>>()
			.join(" → ");
		write!(f, "[{}]", steps)
	}
}

////////////////////////////////////////////////////////////////////////////////
//                                   Tests.                                   //
////////////////////////////////////////////////////////////////////////////////
