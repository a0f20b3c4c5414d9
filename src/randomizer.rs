//! # Board randomizer
//!
//! Rolls a fresh 4×4 board from the sixteen standard letter dice. The dice are
//! shuffled into the grid positions, then each die shows one face.

use fixedstr::str8;
use log::debug;
use rand::{seq::SliceRandom, Rng};

use crate::board::Board;

/// The side length of a randomized board.
pub const BOARD_SIZE: usize = 4;

/// The sixteen dice. The `Q` face reads `QU`.
pub const DICE: [[&str; 6]; BOARD_SIZE * BOARD_SIZE] = [
	["A", "A", "E", "E", "G", "N"],
	["A", "B", "B", "J", "O", "O"],
	["A", "C", "H", "O", "P", "S"],
	["A", "F", "F", "K", "P", "S"],
	["A", "O", "O", "T", "T", "W"],
	["C", "I", "M", "O", "T", "U"],
	["D", "E", "I", "L", "R", "X"],
	["D", "E", "L", "R", "V", "Y"],
	["D", "I", "S", "T", "T", "Y"],
	["E", "E", "G", "H", "N", "W"],
	["E", "E", "I", "N", "S", "U"],
	["E", "H", "R", "T", "V", "W"],
	["E", "I", "O", "S", "S", "T"],
	["E", "L", "R", "T", "T", "Y"],
	["H", "I", "M", "N", "QU", "U"],
	["H", "L", "N", "N", "R", "Z"]
];

/// Roll a random board.
///
/// # Arguments
///
/// * `rng` - The source of randomness. Pass a seeded generator for a
///   reproducible board.
///
/// # Returns
///
/// A 4×4 board with one face of each die.
pub fn randomize_board<R: Rng + ?Sized>(rng: &mut R) -> Board
{
	let mut dice = DICE;
	dice.shuffle(rng);
	let mut cells = Vec::with_capacity(dice.len());
	for die in &dice
	{
		let face = die[rng.random_range(0..die.len())];
		cells.push(str8::from(face));
	}
	let board = Board::from_cells(cells, BOARD_SIZE);
	debug!("rolled board:\n{}", board);
	board
}

////////////////////////////////////////////////////////////////////////////////
//                                   Tests.                                   //
////////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod test
{
	use rand::{rngs::StdRng, SeedableRng};

	use crate::randomizer::{randomize_board, BOARD_SIZE, DICE};

	/// Ensure that a roll fills the whole board with die faces. Only one die
	/// bears `QU`, and `Z`, so neither can appear twice.
	#[test]
	fn test_shape_and_faces()
	{
		let mut rng = StdRng::seed_from_u64(0x5eed);
		for _ in 0..50
		{
			let board = randomize_board(&mut rng);
			assert_eq!(board.height(), BOARD_SIZE);
			assert_eq!(board.width(), BOARD_SIZE);
			let faces = board.coordinates()
				.map(|c| board[c].to_string())
				.collect::<Vec<_>>();
			for face in &faces
			{
				assert!(
					DICE.iter().any(|die| die.contains(&face.as_str())),
					"{} is not a face",
					face
				);
			}
			assert!(faces.iter().filter(|f| *f == "QU").count() <= 1);
			assert!(faces.iter().filter(|f| *f == "Z").count() <= 1);
			assert!(!faces.iter().any(|f| f == "Q"));
		}
	}

	/// The same seed rolls the same board.
	#[test]
	fn test_seeded()
	{
		let first = randomize_board(&mut StdRng::seed_from_u64(42));
		let second = randomize_board(&mut StdRng::seed_from_u64(42));
		assert_eq!(first, second);
	}
}
