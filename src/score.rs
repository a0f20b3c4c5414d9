//! # Scoring
//!
//! Herein is the oracle for the best achievable score on a board. A found
//! word is worth the square of the number of cells in the path that spelled
//! it, so the best realization of a word is its longest path. Paths never
//! exceed the word's character count, so trying lengths downward from there
//! and stopping at the first hit yields the longest.

use std::fmt::{self, Display, Formatter};

use log::debug;

use crate::{board::Board, dictionary::Dictionary, locate::locate, path::Path};

/// A word together with the path that realizes it for the most points.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScoredWord
{
	/// The word.
	pub word: String,

	/// The longest path that spells the word.
	pub path: Path
}

impl ScoredWord
{
	/// The point value of the word along its path.
	#[inline]
	#[must_use]
	pub fn score(&self) -> u32 { self.path.score() }
}

impl Display for ScoredWord
{
	fn fmt(&self, f: &mut Formatter) -> fmt::Result
	{
		write!(f, "{} ({}): {}", self.word, self.score(), self.path)
	}
}

/// Find the highest-scoring path that spells the given word.
///
/// # Arguments
///
/// * `board` - The board.
/// * `word` - The target word.
///
/// # Returns
///
/// The longest path that spells the word, or `None` if the board does not
/// realize the word at all. The empty word is never realized.
#[must_use]
pub fn best_path_for_word(board: &Board, word: &str) -> Option<Path>
{
	let longest = word.chars().count().min(board.len());
	(1..=longest).rev().find_map(|length| locate(board, word, length))
}

/// Find the best path of every dictionary word that the board realizes.
///
/// # Arguments
///
/// * `board` - The board.
/// * `dictionary` - The dictionary.
///
/// # Returns
///
/// The realizable words with their best paths, in lexicographic word order.
#[must_use]
pub fn max_score_words(board: &Board, dictionary: &Dictionary) -> Vec<ScoredWord>
{
	let words = dictionary.sorted()
		.into_iter()
		.filter_map(|word| {
			best_path_for_word(board, word).map(|path| ScoredWord {
				word: word.to_string(),
				path
			})
		})
		.collect::<Vec<_>>();
	debug!(
		"{} of {} dictionary words are on the board",
		words.len(),
		dictionary.len()
	);
	words
}

/// Find the best path of every dictionary word that the board realizes.
///
/// # Arguments
///
/// * `board` - The board.
/// * `dictionary` - The dictionary.
///
/// # Returns
///
/// One path per realizable word, in lexicographic word order.
#[must_use]
pub fn max_score_paths(board: &Board, dictionary: &Dictionary) -> Vec<Path>
{
	max_score_words(board, dictionary)
		.into_iter()
		.map(|scored| scored.path)
		.collect()
}

/// Compute the maximum score achievable on the board: the sum of the squared
/// lengths of the [best paths](max_score_paths).
#[must_use]
pub fn max_achievable_score(board: &Board, dictionary: &Dictionary) -> u32
{
	max_score_paths(board, dictionary).iter().map(Path::score).sum()
}

////////////////////////////////////////////////////////////////////////////////
//                                   Tests.                                   //
////////////////////////////////////////////////////////////////////////////////
