//! # Rounds
//!
//! Herein is the state of a single timed round: the board, the player's score,
//! the words found so far, the cells selected for the word in progress, and
//! the clock. The round owns no real clock; its driver calls
//! [`tick`](Round::tick) once per elapsed second.

use std::{
	error::Error,
	fmt::{self, Display, Formatter},
	rc::Rc
};

use log::{debug, info};

use crate::{
	board::{Board, Coordinate},
	dictionary::Dictionary,
	path::Path,
	score::{max_score_words, ScoredWord},
	validate::validate
};

////////////////////////////////////////////////////////////////////////////////
//                                   Round.                                   //
////////////////////////////////////////////////////////////////////////////////

/// The complete state of a round.
#[derive(Clone, Debug)]
#[must_use]
pub struct Round
{
	/// The board.
	board: Board,

	/// The dictionary, shared with subsequent rounds.
	dictionary: Rc<Dictionary>,

	/// The length of a round, in seconds.
	duration: u32,

	/// The seconds remaining.
	remaining: u32,

	/// The player's score.
	score: u32,

	/// Whether the round is stopped, i.e., not yet started or already over.
	is_stopped: bool,

	/// The words found so far, in the order found.
	found: Vec<String>,

	/// The cells selected for the word in progress.
	selection: Path,

	/// The spelling of the selection.
	display: String,

	/// Every realizable word with its best path.
	solution: Vec<ScoredWord>,

	/// The sum of the scores of [`solution`](Self::solution).
	max_score: u32
}

impl Round
{
	/// The default length of a round, in seconds.
	pub const DEFAULT_DURATION: u32 = 180;

	/// Construct a stopped round on the given board. This computes every word
	/// on the board up front.
	///
	/// # Arguments
	///
	/// * `board` - The board.
	/// * `dictionary` - The dictionary.
	/// * `duration` - The length of the round, in seconds.
	///
	/// # Returns
	///
	/// The new round.
	pub fn new(board: Board, dictionary: Rc<Dictionary>, duration: u32) -> Self
	{
		let mut round = Self {
			board,
			dictionary,
			duration,
			remaining: duration,
			score: 0,
			is_stopped: true,
			found: Vec::new(),
			selection: Path::new(),
			display: String::new(),
			solution: Vec::new(),
			max_score: 0
		};
		round.solve();
		round
	}

	/// Start the clock. Selections are only accepted while started.
	pub fn start(&mut self)
	{
		debug!("round started with {}s", self.remaining);
		self.is_stopped = false;
	}

	/// Stop the round and reset it for a new board.
	///
	/// # Arguments
	///
	/// * `board` - The board for the next round.
	pub fn stop(&mut self, board: Board)
	{
		info!("round over: scored {} of {}", self.score, self.max_score);
		self.board = board;
		self.remaining = self.duration;
		self.score = 0;
		self.is_stopped = true;
		self.found.clear();
		self.clear();
		self.solve();
	}

	/// Advance the clock by one second. When the clock runs out, the round
	/// stops, but keeps its board and results for review.
	///
	/// # Returns
	///
	/// `true` if time remains, `false` otherwise.
	pub fn tick(&mut self) -> bool
	{
		if !self.is_stopped
		{
			self.remaining = self.remaining.saturating_sub(1);
			if self.remaining == 0
			{
				self.is_stopped = true;
				self.clear();
			}
		}
		self.has_time_left()
	}

	/// Select the next cell of the word in progress. The cell must be on the
	/// board, not already selected, and adjacent to the previous selection, if
	/// any.
	///
	/// # Arguments
	///
	/// * `coordinate` - The cell to select.
	///
	/// # Errors
	///
	/// The reason the selection was refused.
	pub fn select(&mut self, coordinate: Coordinate) -> Result<(), SelectError>
	{
		if self.is_stopped
		{
			return Err(SelectError::Stopped)
		}
		let Some(cell) = self.board.cell(coordinate) else {
			return Err(SelectError::OffBoard(coordinate))
		};
		if self.selection.contains(coordinate)
		{
			return Err(SelectError::AlreadySelected(coordinate))
		}
		if let Some(last) = self.selection.last()
		{
			if !last.is_adjacent(&coordinate)
			{
				return Err(SelectError::NotAdjacent(coordinate))
			}
		}
		self.display.push_str(cell);
		self.selection.push(coordinate);
		Ok(())
	}

	/// Submit the word in progress. The selection is cleared regardless of
	/// the outcome.
	///
	/// # Returns
	///
	/// The outcome of the submission.
	pub fn submit(&mut self) -> Submission
	{
		let outcome = if self.is_stopped
		{
			Submission::Rejected
		}
		else
		{
			match validate(&self.board, &self.selection, &self.dictionary)
			{
				Some(word) if self.found.contains(&word) =>
					Submission::AlreadyFound(word),
				Some(word) =>
				{
					let points = self.selection.score();
					self.score += points;
					self.found.push(word.clone());
					Submission::Accepted { word, points }
				}
				None => Submission::Rejected
			}
		};
		debug!("submitted {}: {:?}", self.selection, outcome);
		self.clear();
		outcome
	}

	/// Abandon the word in progress.
	pub fn clear(&mut self)
	{
		self.selection.clear();
		self.display.clear();
	}

	/// The board.
	#[inline]
	pub fn board(&self) -> &Board { &self.board }

	/// The player's score.
	#[inline]
	#[must_use]
	pub fn score(&self) -> u32 { self.score }

	/// The best achievable score on this board.
	#[inline]
	#[must_use]
	pub fn max_score(&self) -> u32 { self.max_score }

	/// The fraction of the best achievable score earned so far, or 0 if the
	/// board has no words at all.
	#[must_use]
	pub fn score_ratio(&self) -> f64
	{
		if self.max_score == 0
		{
			0.0
		}
		else
		{
			f64::from(self.score) / f64::from(self.max_score)
		}
	}

	/// Check whether the round is stopped.
	#[inline]
	#[must_use]
	pub fn is_stopped(&self) -> bool { self.is_stopped }

	/// Check whether any time remains.
	#[inline]
	#[must_use]
	pub fn has_time_left(&self) -> bool { self.remaining > 0 }

	/// The seconds remaining.
	#[inline]
	#[must_use]
	pub fn remaining(&self) -> u32 { self.remaining }

	/// The time remaining, as `m:ss`.
	#[must_use]
	pub fn time_display(&self) -> String
	{
		format!("{}:{:02}", self.remaining / 60, self.remaining % 60)
	}

	/// The words found so far, in the order found.
	#[inline]
	#[must_use]
	pub fn found_words(&self) -> &[String] { &self.found }

	/// The cells selected for the word in progress.
	#[inline]
	pub fn selection(&self) -> &Path { &self.selection }

	/// The spelling of the word in progress.
	#[inline]
	#[must_use]
	pub fn display(&self) -> &str { &self.display }

	/// Every word on the board, with its best path, in lexicographic order.
	#[inline]
	#[must_use]
	pub fn solution(&self) -> &[ScoredWord] { &self.solution }

	/// The words on the board that the player has not found.
	pub fn missed_words(&self) -> impl Iterator<Item = &ScoredWord> + '_
	{
		self.solution.iter().filter(|w| !self.found.contains(&w.word))
	}

	/// Recompute the solution for the current board.
	fn solve(&mut self)
	{
		self.solution = max_score_words(&self.board, &self.dictionary);
		self.max_score = self.solution.iter().map(ScoredWord::score).sum();
		debug!(
			"board holds {} words worth {} points",
			self.solution.len(),
			self.max_score
		);
	}
}

/// The outcome of [submitting](Round::submit) a word.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Submission
{
	/// The word is new and valid, and scored the given points.
	Accepted
	{
		/// The word.
		word: String,

		/// The points scored.
		points: u32
	},

	/// The word is valid, but was already found this round.
	AlreadyFound(String),

	/// The selection does not spell a valid word, or the round is stopped.
	Rejected
}

/// The complete enumeration of [selection](Round::select) errors.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SelectError
{
	/// The round is not running.
	Stopped,

	/// The cell is off the board.
	OffBoard(Coordinate),

	/// The cell is already part of the selection.
	AlreadySelected(Coordinate),

	/// The cell is not adjacent to the previously selected cell.
	NotAdjacent(Coordinate)
}

impl Display for SelectError
{
	fn fmt(&self, f: &mut Formatter) -> fmt::Result
	{
		match self
		{
			Self::Stopped => write!(f, "round is not running"),
			Self::OffBoard(c) => write!(f, "{} is off the board", c),
			Self::AlreadySelected(c) => write!(f, "{} is already selected", c),
			Self::NotAdjacent(c) =>
				write!(f, "{} is not adjacent to the last selection", c)
		}
	}
}

impl Error for SelectError {}

////////////////////////////////////////////////////////////////////////////////
//                                   Tests.                                   //
////////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod test
{
	use std::rc::Rc;

	use crate::{
		board::{Board, Coordinate},
		dictionary::Dictionary,
		round::{Round, SelectError, Submission}
	};

	/// A stopped round on the 2×2 board.
	fn round() -> Round
	{
		let board = Board::new(&[["A", "B"], ["C", "D"]]).unwrap();
		let dictionary = ["AB", "ABD", "AD", "CAB"]
			.into_iter()
			.collect::<Dictionary>();
		Round::new(board, Rc::new(dictionary), 3)
	}

	/// Ensure that the maximum score is known before play starts.
	#[test]
	fn test_new()
	{
		let round = round();
		assert!(round.is_stopped());
		assert_eq!(round.score(), 0);
		assert_eq!(round.max_score(), 4 + 9 + 4 + 9);
		assert_eq!(round.solution().len(), 4);
		assert_eq!(round.time_display(), "0:03");
		assert_eq!(round.score_ratio(), 0.0);
	}

	/// Ensure that selections enforce the path rules.
	#[test]
	fn test_select()
	{
		let mut round = round();
		assert_eq!(
			round.select(Coordinate::new(0, 0)),
			Err(SelectError::Stopped)
		);
		round.start();
		assert_eq!(round.select(Coordinate::new(0, 0)), Ok(()));
		assert_eq!(
			round.select(Coordinate::new(0, 0)),
			Err(SelectError::AlreadySelected(Coordinate::new(0, 0)))
		);
		assert_eq!(
			round.select(Coordinate::new(2, 0)),
			Err(SelectError::OffBoard(Coordinate::new(2, 0)))
		);
		assert_eq!(round.select(Coordinate::new(1, 1)), Ok(()));
		assert_eq!(round.display(), "AD");
		assert_eq!(round.selection().len(), 2);
		round.clear();
		assert_eq!(round.display(), "");
		assert!(round.selection().is_empty());

		let mut wide = Round::new(
			"A B C".parse().unwrap(),
			Rc::new(Dictionary::new()),
			10
		);
		wide.start();
		wide.select(Coordinate::new(0, 0)).unwrap();
		assert_eq!(
			wide.select(Coordinate::new(0, 2)),
			Err(SelectError::NotAdjacent(Coordinate::new(0, 2)))
		);
	}

	/// Ensure that submissions score once per word, by the number of cells.
	#[test]
	fn test_submit()
	{
		let mut round = round();
		round.start();
		for c in [(1, 0), (0, 0), (0, 1)]
		{
			round.select(c.into()).unwrap();
		}
		assert_eq!(
			round.submit(),
			Submission::Accepted { word: "CAB".to_string(), points: 9 }
		);
		assert!(round.selection().is_empty());
		for c in [(1, 0), (0, 0), (0, 1)]
		{
			round.select(c.into()).unwrap();
		}
		assert_eq!(
			round.submit(),
			Submission::AlreadyFound("CAB".to_string())
		);
		round.select((0, 1).into()).unwrap();
		round.select((0, 0).into()).unwrap();
		assert_eq!(round.submit(), Submission::Rejected);
		assert_eq!(round.submit(), Submission::Rejected);
		assert_eq!(round.score(), 9);
		assert_eq!(round.found_words(), ["CAB"]);
		assert!((round.score_ratio() - 9.0 / 26.0).abs() < 1e-9);
		let missed = round.missed_words()
			.map(|w| w.word.as_str())
			.collect::<Vec<_>>();
		assert_eq!(missed, vec!["AB", "ABD", "AD"]);
	}

	/// Ensure that the clock stops the round when it runs out, and that
	/// stopping resets for the next board.
	#[test]
	fn test_clock()
	{
		let mut round = round();
		// The clock doesn't run until the round starts.
		assert!(round.tick());
		assert_eq!(round.remaining(), 3);
		round.start();
		round.select((0, 0).into()).unwrap();
		assert!(round.tick());
		assert!(round.tick());
		assert_eq!(round.time_display(), "0:01");
		assert!(!round.tick());
		assert!(round.is_stopped());
		assert!(round.selection().is_empty());
		assert_eq!(round.submit(), Submission::Rejected);

		round.stop(Board::new(&[["C", "A"], ["B", "D"]]).unwrap());
		assert!(round.is_stopped());
		assert!(round.has_time_left());
		assert_eq!(round.remaining(), 3);
		assert_eq!(round.found_words().len(), 0);
		assert_eq!(&round.board()[Coordinate::new(0, 0)], "C");
	}

	/// Ensure that the display uses minutes and zero-padded seconds.
	#[test]
	fn test_time_display()
	{
		let round = Round::new(
			"A".parse().unwrap(),
			Rc::new(Dictionary::new()),
			Round::DEFAULT_DURATION
		);
		assert_eq!(round.time_display(), "3:00");
		let round = Round::new("A".parse().unwrap(), Rc::new(Dictionary::new()), 69);
		assert_eq!(round.time_display(), "1:09");
	}
}
