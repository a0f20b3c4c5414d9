//! # Boggle Solver
//!
//! Boggle is a word game played on a grid of lettered dice. Players trace
//! paths through adjacent cells (including diagonals), never reusing a cell,
//! to spell dictionary words before the clock runs out. A word is worth the
//! square of the number of cells in its path.
//!
//! This library is the search engine behind the game:
//!
//! * [`validate`](validate::validate) checks a traced path.
//! * [`enumerate_paths`](enumerate::enumerate_paths) and
//!   [`enumerate_words`](enumerate::enumerate_words) exhaustively search the
//!   board.
//! * [`locate`](locate::locate) finds a path of a given length for a word.
//! * [`max_achievable_score`](score::max_achievable_score) computes the best
//!   possible score for a board.
//!
//! Every search is a pure function of its arguments.

pub mod board;
pub mod dictionary;
pub mod enumerate;
pub mod locate;
pub mod path;
pub mod randomizer;
pub mod round;
pub mod score;
pub mod validate;
