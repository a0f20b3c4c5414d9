//! # Word location
//!
//! Herein is the search for a single path of a fixed number of cells that
//! spells a given word. The search backtracks from every start cell in
//! row-major order and stops at the first success. A branch is abandoned as
//! soon as the cells visited so far no longer spell a prefix of the target.

use log::trace;

use crate::{board::Board, path::Path};

/// Find a path of exactly `length` cells that spells `word`. Every cell must
/// match the target as a unit, so a `QU` cell only matches where the target
/// continues with `QU`.
///
/// # Arguments
///
/// * `board` - The board.
/// * `word` - The target word.
/// * `length` - The number of cells in the path.
///
/// # Returns
///
/// The first matching path in search order, or `None` if no path of that
/// length spells the word. For `length` 0, the empty path matches only the
/// empty word.
#[must_use]
pub fn locate(board: &Board, word: &str, length: usize) -> Option<Path>
{
	if length == 0
	{
		return word.is_empty().then(Path::new)
	}
	if length > board.len()
	{
		return None
	}
	let mut path = Path::with_capacity(length);
	for start in board.coordinates()
	{
		let Some(rest) = word.strip_prefix(&board[start]) else { continue };
		path.push(start);
		if search(board, rest, length, &mut path)
		{
			trace!("located {} in {} cells: {}", word, length, path);
			return Some(path)
		}
		path.pop();
	}
	None
}

/// Extend the current path until it spells the whole target in exactly
/// `length` cells.
///
/// # Arguments
///
/// * `board` - The board.
/// * `remaining` - The unmatched suffix of the target.
/// * `length` - The target number of cells.
/// * `path` - The current path, never empty. On success, this is the answer;
///   otherwise, it is restored to its state on entry.
///
/// # Returns
///
/// `true` if the path was completed, `false` otherwise.
fn search(board: &Board, remaining: &str, length: usize, path: &mut Path) -> bool
{
	if path.len() == length
	{
		return remaining.is_empty()
	}
	let Some(last) = path.last() else { return false };
	for next in board.neighbors(last)
	{
		if path.contains(next)
		{
			continue
		}
		let Some(rest) = remaining.strip_prefix(&board[next]) else { continue };
		path.push(next);
		if search(board, rest, length, path)
		{
			return true
		}
		path.pop();
	}
	false
}

////////////////////////////////////////////////////////////////////////////////
//                                   Tests.                                   //
////////////////////////////////////////////////////////////////////////////////
