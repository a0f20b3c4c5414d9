//! # Boggle Solver
//!
//! Boggle is a word game played on a grid of lettered dice. Within a time
//! limit, the player traces words through chains of adjacent cells, including
//! diagonals, never using the same cell twice in one word. Each word found
//! scores the square of the number of cells in its path.
//!
//! This program plays and solves Boggle. Via command line options, the user can
//! specify the dictionary to use. Then the user can either play timed rounds
//! in a text-based user interface (TUI), or print every word on a board along
//! with the best achievable score.

mod app;
mod tui;

use std::{process::exit, rc::Rc};

use clap::{Parser, Subcommand};
use log::{debug, error, trace};
use rand::{rngs::StdRng, SeedableRng};

use app::App;
use boggle_solver::{
	board::Board,
	dictionary::Dictionary,
	randomizer::randomize_board,
	round::Round,
	score::max_score_words
};
use tui::tui;

////////////////////////////////////////////////////////////////////////////////
//                           Command line options.                            //
////////////////////////////////////////////////////////////////////////////////

/// CLI for playing and solving Boggle.
#[derive(Clone, Debug, Parser)]
#[command(version = "1.0", author = "Todd L Smith")]
struct Opts
{
	/// The path to the directory containing the dictionary files.
	#[arg(short = 'd', long, default_value = "dict")]
	directory: String,

	/// The name of the dictionary. This is the name shared by the text and
	/// binary files, sans the extension.
	#[arg(short = 'n', long, default_value = "boggle")]
	dictionary: String,

	#[command(subcommand)]
	command: Command
}

/// The subcommands of the CLI.
#[derive(Clone, Debug, Subcommand)]
enum Command
{
	/// Just generate the binary dictionary and exit.
	Generate,

	/// Open the text-based user interface (TUI) for playing timed rounds. The
	/// words found in the last round will be written to standard output.
	Play {
		/// The length of a round, in seconds.
		#[arg(short = 't', long, default_value_t = Round::DEFAULT_DURATION)]
		duration: u32,

		/// The seed for rolling boards. Omit for a different game every time.
		#[arg(short = 's', long)]
		seed: Option<u64>,

		/// Suppress emission of the found words to standard output.
		#[arg(short = 'q', long)]
		quiet: bool
	},

	/// Print every word on a board, with its best path, and the best
	/// achievable score.
	Solve {
		/// The board, with cells separated by spaces and rows separated by
		/// slashes, e.g., "A B/C D". Overrides the seed.
		#[arg(short = 'b', long)]
		board: Option<String>,

		/// The seed for rolling the board. Omit for a random board.
		#[arg(short = 's', long)]
		seed: Option<u64>
	}
}

////////////////////////////////////////////////////////////////////////////////
//                               Main program.                                //
////////////////////////////////////////////////////////////////////////////////

/// Parse the command line options and execute the appropriate subcommand.
fn main()
{
	env_logger::init();

	// Parse the command line options.
	let opts = Opts::parse();
	debug!("Command line options: {:?}", opts);

	// Open the dictionary, creating the binary dictionary if necessary.
	let dictionary = match Dictionary::open(&opts.directory, &opts.dictionary)
	{
		Ok(dictionary) => Rc::new(dictionary),
		Err(e) => fail(format!(
			"Failed to open dictionary: {}/{}.dict or {0}/{1}.txt: {}",
			opts.directory,
			opts.dictionary,
			e
		))
	};

	// Execute the appropriate subcommand.
	match opts.command
	{
		Command::Generate =>
		{
			trace!("Exiting after generating binary dictionary");
		},
		Command::Play { duration, seed, quiet } =>
		{
			trace!("Opening TUI");
			let rng = rng(seed);
			let found = tui(|t| App::new(dictionary, duration, rng).run(t))
				.unwrap_or_else(|e| fail(format!("Failed to drive TUI: {}", e)));
			if !quiet
			{
				print_words(&found);
			}
		},
		Command::Solve { board, seed } =>
		{
			let board = match board
			{
				Some(board) => board.replace('/', "\n")
					.parse::<Board>()
					.unwrap_or_else(|e| fail(format!("Bad board: {}", e))),
				None => randomize_board(&mut rng(seed))
			};
			print_solution(&board, &dictionary);
		}
	}
}

/// Make a source of randomness, seeded if requested.
///
/// # Arguments
///
/// * `seed` - The seed, if any.
fn rng(seed: Option<u64>) -> StdRng
{
	match seed
	{
		Some(seed) => StdRng::seed_from_u64(seed),
		None => StdRng::from_os_rng()
	}
}

/// Print the board, every word on it with its best path, and the best
/// achievable score.
///
/// # Arguments
///
/// * `board` - The board.
/// * `dictionary` - The dictionary.
fn print_solution(board: &Board, dictionary: &Dictionary)
{
	println!("{}\n", board);
	let words = max_score_words(board, dictionary);
	for word in &words
	{
		println!("{}", word);
	}
	let total: u32 = words.iter().map(|w| w.score()).sum();
	println!("\n{} words, {} points", words.len(), total);
}

/// Print a word list to standard output.
///
/// # Arguments
///
/// * `words` - The words to print.
fn print_words(words: &[String])
{
	for word in words
	{
		println!("{}", word);
	}
}

/// Report a fatal error and exit.
///
/// # Arguments
///
/// * `message` - The error message.
fn fail(message: String) -> !
{
	error!("{}", message);
	eprintln!("{}", message);
	exit(1)
}
