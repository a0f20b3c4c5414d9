//! # Path enumeration
//!
//! Herein are exhaustive backtracking searches over the board. Every cell is
//! tried as a start, in row-major order, and every path is extended through
//! its unvisited neighbors in [direction order](crate::board::DIRECTIONS), so
//! the results are deterministic for a given board and dictionary.
//!
//! The current path lives in a single buffer that is extended before each
//! recursive call and truncated after it, so sibling branches never observe
//! each other. The word spelled so far is passed down by value. Any branch
//! whose word is not the prefix of some dictionary word is abandoned, which
//! never changes the results.

use std::collections::HashSet;

use log::{debug, trace};

use crate::{
	board::Board,
	dictionary::Dictionary,
	path::Path,
	validate::validate
};

////////////////////////////////////////////////////////////////////////////////
//                             Fixed-length paths.                            //
////////////////////////////////////////////////////////////////////////////////

/// Enumerate every valid path of exactly `length` cells. Paths that spell the
/// same word from different cells are distinct entries.
///
/// # Arguments
///
/// * `length` - The number of cells in each path.
/// * `board` - The board.
/// * `dictionary` - The dictionary.
///
/// # Returns
///
/// The valid paths, in search order. For `length` 0, this is the empty path
/// if the dictionary contains the empty word, and nothing otherwise.
pub fn enumerate_paths(
	length: usize,
	board: &Board,
	dictionary: &Dictionary
) -> Vec<Path>
{
	let mut found = Vec::new();
	if length == 0
	{
		if dictionary.contains("")
		{
			found.push(Path::new());
		}
		return found
	}
	if length > board.len()
	{
		trace!("no path of {} cells fits on {} cells", length, board.len());
		return found
	}
	let mut path = Path::with_capacity(length);
	for start in board.coordinates()
	{
		path.push(start);
		extend_paths(board, dictionary, length, &board[start], &mut path, &mut found);
		path.pop();
	}
	debug!("found {} paths of length {}", found.len(), length);
	found
}

/// Extend the current path until it reaches `length` cells, then keep it if
/// it spells a word.
///
/// # Arguments
///
/// * `board` - The board.
/// * `dictionary` - The dictionary.
/// * `length` - The target number of cells.
/// * `word` - The word spelled by `path`.
/// * `path` - The current path, never empty.
/// * `found` - The accumulated results.
fn extend_paths(
	board: &Board,
	dictionary: &Dictionary,
	length: usize,
	word: &str,
	path: &mut Path,
	found: &mut Vec<Path>
) {
	if path.len() == length
	{
		if dictionary.contains(word)
		{
			debug_assert_eq!(
				validate(board, path, dictionary).as_deref(),
				Some(word)
			);
			trace!("found path: {} => {}", path, word);
			found.push(path.clone());
		}
		return
	}
	if !is_viable(dictionary, word)
	{
		return
	}
	let Some(last) = path.last() else { return };
	for next in board.neighbors(last)
	{
		if path.contains(next)
		{
			continue
		}
		let extended = format!("{}{}", word, &board[next]);
		path.push(next);
		extend_paths(board, dictionary, length, &extended, path, found);
		path.pop();
	}
}

////////////////////////////////////////////////////////////////////////////////
//                               Bounded words.                               //
////////////////////////////////////////////////////////////////////////////////

/// Enumerate every dictionary word of at most `max_length` characters that
/// some path on the board spells. Each word appears once.
///
/// # Arguments
///
/// * `max_length` - The maximum number of characters in a word.
/// * `board` - The board.
/// * `dictionary` - The dictionary.
///
/// # Returns
///
/// The discovered words, in the order the search first reaches them.
pub fn enumerate_words(
	max_length: usize,
	board: &Board,
	dictionary: &Dictionary
) -> Vec<String>
{
	WordCollector::run(max_length, board, dictionary)
		.into_iter()
		.map(|(word, _)| word)
		.collect()
}

/// Like [`enumerate_words`], but answer the paths instead of the words. Each
/// word contributes only the first path that the search finds for it.
///
/// # Arguments
///
/// * `max_length` - The maximum number of characters in a word.
/// * `board` - The board.
/// * `dictionary` - The dictionary.
///
/// # Returns
///
/// One path per discovered word, in the order the search first reaches them.
pub fn enumerate_word_paths(
	max_length: usize,
	board: &Board,
	dictionary: &Dictionary
) -> Vec<Path>
{
	WordCollector::run(max_length, board, dictionary)
		.into_iter()
		.map(|(_, path)| path)
		.collect()
}

/// The state of a bounded word search.
struct WordCollector<'a>
{
	/// The board.
	board: &'a Board,

	/// The dictionary.
	dictionary: &'a Dictionary,

	/// The maximum number of characters in a word.
	max_length: usize,

	/// The words found so far, for de-duplication.
	seen: HashSet<String>,

	/// The words found so far, with their first paths, in discovery order.
	found: Vec<(String, Path)>
}

impl<'a> WordCollector<'a>
{
	/// Search the whole board.
	fn run(
		max_length: usize,
		board: &'a Board,
		dictionary: &'a Dictionary
	) -> Vec<(String, Path)>
	{
		let mut collector = Self {
			board,
			dictionary,
			max_length,
			seen: HashSet::new(),
			found: Vec::new()
		};
		let mut path = Path::with_capacity(board.len());
		collector.visit("", &path);
		for start in board.coordinates()
		{
			path.push(start);
			collector.extend(&board[start], &mut path);
			path.pop();
		}
		debug!(
			"found {} words of at most {} characters",
			collector.found.len(),
			max_length
		);
		collector.found
	}

	/// Record the word if it is new, then continue the search from the end of
	/// the path while the word could still grow into another.
	fn extend(&mut self, word: &str, path: &mut Path)
	{
		let length = word.chars().count();
		if length > self.max_length
		{
			return
		}
		self.visit(word, path);
		if length == self.max_length || !is_viable(self.dictionary, word)
		{
			return
		}
		let Some(last) = path.last() else { return };
		let board = self.board;
		for next in board.neighbors(last)
		{
			if path.contains(next)
			{
				continue
			}
			let extended = format!("{}{}", word, &board[next]);
			path.push(next);
			self.extend(&extended, path);
			path.pop();
		}
	}

	/// Record the word and its path, unless the word is not in the dictionary
	/// or was already recorded.
	fn visit(&mut self, word: &str, path: &Path)
	{
		if self.dictionary.contains(word) && !self.seen.contains(word)
		{
			trace!("found word: {} at {}", word, path);
			self.seen.insert(word.to_string());
			self.found.push((word.to_string(), path.clone()));
		}
	}
}

/// Check whether extending `word` could still produce a dictionary word. The
/// empty word is always viable.
#[inline]
fn is_viable(dictionary: &Dictionary, word: &str) -> bool
{
	word.is_empty() || dictionary.contains_prefix(word)
}

////////////////////////////////////////////////////////////////////////////////
//                                   Tests.                                   //
////////////////////////////////////////////////////////////////////////////////
