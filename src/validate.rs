//! # Path validation
//!
//! Herein is the validator for a user-traced [path](Path). A path is valid if
//! it starts on the board, every step moves to an adjacent cell that is also
//! on the board, no cell is visited twice, and the spelled word is in the
//! dictionary. Malformed paths are an expected outcome of user interaction, so
//! they are reported as values rather than errors.

use std::{
	error::Error,
	fmt::{self, Display, Formatter}
};

use log::trace;

use crate::{
	board::{Board, Coordinate},
	dictionary::Dictionary,
	path::Path
};

////////////////////////////////////////////////////////////////////////////////
//                                 Validation.                                //
////////////////////////////////////////////////////////////////////////////////

/// Validate a path, answering the spelled word if and only if the path is
/// legal on the board and the word is in the dictionary. The empty path spells
/// the empty word, so it is valid if and only if the dictionary contains `""`.
///
/// # Arguments
///
/// * `board` - The board.
/// * `path` - The path to validate.
/// * `dictionary` - The dictionary.
///
/// # Returns
///
/// The spelled word, or `None` if the path is invalid for any reason.
#[inline]
#[must_use]
pub fn validate(
	board: &Board,
	path: &Path,
	dictionary: &Dictionary
) -> Option<String>
{
	classify(board, path, dictionary).into_word()
}

/// Classify a path, distinguishing structural defects from dictionary misses.
/// [`validate`] collapses the result to a word or nothing.
///
/// # Arguments
///
/// * `board` - The board.
/// * `path` - The path to classify.
/// * `dictionary` - The dictionary.
///
/// # Returns
///
/// The classification of the path. The first structural defect encountered,
/// walking from the start of the path, is reported.
pub fn classify(
	board: &Board,
	path: &Path,
	dictionary: &Dictionary
) -> PathOutcome
{
	match check_structure(board, path)
	{
		Err(e) =>
		{
			trace!("structurally invalid path {}: {}", path, e);
			PathOutcome::StructurallyInvalid(e)
		}
		Ok(word) if dictionary.contains(&word) => PathOutcome::Valid(word),
		Ok(word) =>
		{
			trace!("not in dictionary: {:?}", word);
			PathOutcome::NotInDictionary(word)
		}
	}
}

/// Walk the path, checking every structural rule and spelling the word along
/// the way.
fn check_structure(board: &Board, path: &Path) -> Result<String, PathError>
{
	let mut word = String::new();
	let mut previous: Option<Coordinate> = None;
	for (index, &current) in path.iter().enumerate()
	{
		let Some(cell) = board.cell(current) else {
			return Err(PathError::OffBoard(current))
		};
		if let Some(previous) = previous
		{
			if previous == current || path.as_slice()[..index].contains(&current)
			{
				return Err(PathError::Revisited(current))
			}
			if !previous.is_adjacent(&current)
			{
				return Err(PathError::NotAdjacent { from: previous, to: current })
			}
		}
		word.push_str(cell);
		previous = Some(current);
	}
	Ok(word)
}

////////////////////////////////////////////////////////////////////////////////
//                                  Outcomes.                                 //
////////////////////////////////////////////////////////////////////////////////

/// The classification of a path.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PathOutcome
{
	/// The path is legal and spells a dictionary word.
	Valid(String),

	/// The path breaks a structural rule.
	StructurallyInvalid(PathError),

	/// The path is legal, but the word it spells is not in the dictionary.
	NotInDictionary(String)
}

impl PathOutcome
{
	/// Check if the outcome is [`Valid`](Self::Valid).
	#[inline]
	#[must_use]
	pub fn is_valid(&self) -> bool { matches!(self, Self::Valid(_)) }

	/// Collapse the outcome to the spelled word, if valid.
	#[inline]
	#[must_use]
	pub fn into_word(self) -> Option<String>
	{
		match self
		{
			Self::Valid(word) => Some(word),
			_ => None
		}
	}
}

/// The complete enumeration of structural path defects.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PathError
{
	/// The coordinate is off the board.
	OffBoard(Coordinate),

	/// The coordinate was already visited.
	Revisited(Coordinate),

	/// The step between two consecutive coordinates is longer than one cell.
	NotAdjacent
	{
		/// The coordinate before the step.
		from: Coordinate,

		/// The coordinate after the step.
		to: Coordinate
	}
}

impl Display for PathError
{
	fn fmt(&self, f: &mut Formatter) -> fmt::Result
	{
		match self
		{
			Self::OffBoard(c) => write!(f, "{} is off the board", c),
			Self::Revisited(c) => write!(f, "{} is visited twice", c),
			Self::NotAdjacent { from, to } =>
				write!(f, "{} is not adjacent to {}", to, from)
		}
	}
}

impl Error for PathError {}

////////////////////////////////////////////////////////////////////////////////
//                                   Tests.                                   //
////////////////////////////////////////////////////////////////////////////////
