//! # Application
//!
//! The application state and logic, including the text-based user interface
//! (TUI) for playing timed rounds.

use std::{
	io,
	iter::{once, repeat},
	rc::Rc,
	time::{Duration, Instant}
};

use boggle_solver::{
	board::Coordinate,
	dictionary::Dictionary,
	randomizer::randomize_board,
	round::{Round, Submission}
};
use crossterm::event::{poll, read, Event, KeyCode, KeyEvent, KeyEventKind};
use log::{debug, trace};
use rand::rngs::StdRng;
use ratatui::{
	buffer::Buffer,
	layout::{Alignment, Constraint, Direction, Layout, Rect},
	style::{Color, Style, Stylize},
	text::Line,
	widgets::{
		block::{Position, Title},
		Block, BorderType, Borders, List, ListState, Paragraph,
		StatefulWidget, Widget
	},
	Frame
};

use crate::tui::Tui;

////////////////////////////////////////////////////////////////////////////////
//                                Application.                                //
////////////////////////////////////////////////////////////////////////////////

/// The application state.
#[must_use]
pub struct App
{
	/// What the application is doing.
	state: ExecutionState,

	/// The current round.
	round: Round,

	/// The source of new boards.
	rng: StdRng,

	/// The cell under the cursor.
	cursor: Coordinate,

	/// When the round clock last advanced.
	last_tick: Instant,

	/// Feedback about the most recent action, if any.
	message: Option<String>
}

// Public interface.
impl App
{
	/// Create a new application state, with a fresh board awaiting the start
	/// of the first round.
	///
	/// # Arguments
	///
	/// * `dictionary` - The dictionary.
	/// * `duration` - The length of a round, in seconds.
	/// * `rng` - The source of boards.
	///
	/// # Returns
	///
	/// The new application state.
	pub fn new(dictionary: Rc<Dictionary>, duration: u32, mut rng: StdRng) -> Self
	{
		let board = randomize_board(&mut rng);
		Self {
			state: ExecutionState::Waiting,
			round: Round::new(board, dictionary, duration),
			rng,
			cursor: Coordinate::default(),
			last_tick: Instant::now(),
			message: None
		}
	}

	/// Run the application. This amounts to:
	///
	/// * Advancing the round clock.
	/// * Rendering the application frame.
	/// * Processing events.
	///
	/// # Arguments
	///
	/// * `tui` - The text-based user interface (TUI).
	///
	/// # Returns
	///
	/// The words found in the last round, in the order found.
	///
	/// # Errors
	///
	/// Any error that occurs while running the application.
	pub fn run(mut self, tui: &mut Tui) -> io::Result<Vec<String>>
	{
		while self.is_running()
		{
			self.run_clock(Instant::now());
			tui.draw(|frame| self.render_frame(frame))?;
			self.process_event()?;
		}
		Ok(self.round.found_words().to_vec())
	}

	/// Check if the application is running.
	///
	/// # Returns
	///
	/// `true` if the application is running, `false` otherwise.
	#[inline]
	#[must_use]
	pub fn is_running(&self) -> bool
	{
		!matches!(self.state, ExecutionState::Exiting)
	}
}

// Private implementation details.
impl App
{
	/// Move the cursor by the given deltas, stopping at the edges of the board.
	///
	/// # Arguments
	///
	/// * `dr` - The change in the row.
	/// * `dc` - The change in the column.
	fn move_cursor(&mut self, dr: isize, dc: isize)
	{
		if let Some(next) = self.cursor.step(dr, dc)
		{
			if self.round.board().contains(next)
			{
				self.cursor = next;
			}
		}
	}

	/// Move the highlight through the board's word list. If nothing is
	/// highlighted, use the sign of the change to determine which end of the
	/// list to start from. Moving off either end removes the highlight.
	///
	/// # Arguments
	///
	/// * `di` - The change in the word index.
	fn move_highlight(&mut self, di: isize)
	{
		let len = self.round.solution().len();
		if let ExecutionState::Reviewing { ref mut highlight } = self.state
		{
			*highlight = match *highlight
			{
				Some(index) => index.checked_add_signed(di).filter(|&i| i < len),
				None if di > 0 && len > 0 => Some(0),
				None if di < 0 && len > 0 => Some(len - 1),
				None => None
			};
		}
	}

	/// Start the round.
	fn start_round(&mut self)
	{
		self.round.start();
		self.last_tick = Instant::now();
		self.message = None;
		self.state = ExecutionState::Playing;
	}

	/// Replace the board and wait for the next round to start.
	fn next_round(&mut self)
	{
		let board = randomize_board(&mut self.rng);
		self.round.stop(board);
		self.cursor = Coordinate::default();
		self.message = None;
		self.state = ExecutionState::Waiting;
	}

	/// Select the cell under the cursor, explaining any refusal.
	fn select(&mut self)
	{
		if let Err(e) = self.round.select(self.cursor)
		{
			trace!("selection refused: {}", e);
			self.message = Some(e.to_string());
		}
		else
		{
			self.message = None;
		}
	}

	/// Submit the word in progress, explaining the outcome.
	fn submit(&mut self)
	{
		let spelled = self.round.display().to_string();
		self.message = Some(match self.round.submit()
		{
			Submission::Accepted { word, points } =>
				format!("{} +{}", word, points),
			Submission::AlreadyFound(word) => format!("{} already found", word),
			Submission::Rejected if spelled.is_empty() => "nothing selected".into(),
			Submission::Rejected => format!("{} is not a word", spelled)
		});
	}

	/// Advance the round clock by every whole second elapsed since the last
	/// tick. When time runs out, switch to reviewing the board.
	///
	/// # Arguments
	///
	/// * `now` - The current instant.
	fn run_clock(&mut self, now: Instant)
	{
		if !matches!(self.state, ExecutionState::Playing)
		{
			return
		}
		let second = Duration::from_secs(1);
		while now.saturating_duration_since(self.last_tick) >= second
		{
			self.last_tick += second;
			if !self.round.tick()
			{
				debug!("time is up");
				self.message = Some("Time is up!".into());
				self.state = ExecutionState::Reviewing { highlight: None };
				return
			}
		}
	}

	/// Render the application frame.
	///
	/// # Arguments
	///
	/// * `frame` - The target frame.
	fn render_frame(&self, frame: &mut Frame)
	{
		frame.render_widget(self, frame.area());
	}

	/// Render the board, with any selection or highlighted path.
	///
	/// # Arguments
	///
	/// * `area` - The target area.
	/// * `buf` - The target buffer.
	fn render_board(&self, area: Rect, buf: &mut Buffer)
	{
		let hints = match self.state
		{
			ExecutionState::Waiting => "↵ - start",
			ExecutionState::Playing =>
				"←↑↓→ - move ␣ - select ↵ - submit ⌫ - clear",
			ExecutionState::Reviewing { .. } => "↑↓ - browse ↵ - new round",
			ExecutionState::Exiting => ""
		};
		let block = Block::default()
			.borders(Borders::ALL)
			.border_style(Style::default().fg(Color::White))
			.title(
				Title::default()
					.content("Board")
					.position(Position::Top)
					.alignment(Alignment::Center)
			)
			.title(
				Title::default()
					.content("⎋ – exit".yellow().bold())
					.position(Position::Top)
					.alignment(Alignment::Left)
			)
			.title(
				Title::default()
					.content(hints.cyan())
					.position(Position::Bottom)
					.alignment(Alignment::Center)
			);
		let inner = block.inner(area);
		block.render(area, buf);
		let board = self.round.board();
		// Center the grid of 3×7 cells.
		let rows = Layout::default()
			.direction(Direction::Vertical)
			.constraints(centered(board.height(), 3))
			.split(inner);
		for row in 0..board.height()
		{
			let columns = Layout::default()
				.direction(Direction::Horizontal)
				.constraints(centered(board.width(), 7))
				.split(rows[row + 1]);
			for col in 0..board.width()
			{
				let coordinate = Coordinate::new(row, col);
				self.render_cell(coordinate, columns[col + 1], buf);
			}
		}
	}

	/// Render a single cell.
	///
	/// # Arguments
	///
	/// * `coordinate` - The cell.
	/// * `area` - The target area.
	/// * `buf` - The target buffer.
	fn render_cell(&self, coordinate: Coordinate, area: Rect, buf: &mut Buffer)
	{
		let content = &self.round.board()[coordinate];
		let (label, style, border) = match self.state
		{
			// Don't reveal the board before the clock starts.
			ExecutionState::Waiting =>
				("?".to_string(), Style::default(), Color::White),
			ExecutionState::Playing =>
			{
				let border =
					if coordinate == self.cursor { Color::Cyan }
					else { Color::White };
				match self.round.selection().position(coordinate)
				{
					Some(index) => (
						format!("{} {}", index + 1, content),
						Style::default().fg(Color::Black).bg(Color::Yellow),
						border
					),
					None => (content.to_string(), Style::default(), border)
				}
			}
			ExecutionState::Reviewing { highlight } =>
			{
				let position = highlight
					.and_then(|i| self.round.solution().get(i))
					.and_then(|w| w.path.position(coordinate));
				match position
				{
					Some(index) => (
						format!("{} {}", index + 1, content),
						Style::default().fg(Color::Black).bg(Color::Green),
						Color::Black
					),
					None => (content.to_string(), Style::default(), Color::White)
				}
			}
			ExecutionState::Exiting => return
		};
		let block = Block::new()
			.border_type(BorderType::Rounded)
			.borders(Borders::ALL)
			.border_style(Style::default().fg(border));
		Paragraph::new(label)
			.block(block)
			.alignment(Alignment::Center)
			.style(style)
			.render(area, buf);
	}

	/// Render the status panel and the word list.
	///
	/// # Arguments
	///
	/// * `area` - The target area.
	/// * `buf` - The target buffer.
	fn render_panel(&self, area: Rect, buf: &mut Buffer)
	{
		let parts = Layout::default()
			.direction(Direction::Vertical)
			.constraints([Constraint::Length(7), Constraint::Min(3)])
			.split(area);
		let round = &self.round;
		let status = vec![
			Line::from(format!("Time   {}", round.time_display())),
			Line::from(format!(
				"Score  {} / {} ({:.2}%)",
				round.score(),
				round.max_score(),
				round.score_ratio() * 100.0
			)),
			Line::from(format!("Word   {}", round.display())),
			Line::from(self.message.clone().unwrap_or_default().magenta())
		];
		Paragraph::new(status)
			.block(
				Block::default()
					.title("Status")
					.title_alignment(Alignment::Center)
					.borders(Borders::ALL)
			)
			.render(parts[0], buf);
		match self.state
		{
			ExecutionState::Reviewing { highlight } =>
				self.render_solution(parts[1], buf, highlight),
			_ =>
			{
				let list = List::new(round.found_words().iter().map(String::as_str))
					.block(
						Block::default()
							.title("Found")
							.title_alignment(Alignment::Center)
							.borders(Borders::ALL)
					)
					.style(Style::default().fg(Color::White));
				Widget::render(&list, parts[1], buf);
			}
		}
	}

	/// Render every word on the board, marking the ones the player found.
	///
	/// # Arguments
	///
	/// * `area` - The target area.
	/// * `buf` - The target buffer.
	/// * `highlight` - The index of the word to highlight, if any.
	fn render_solution(
		&self,
		area: Rect,
		buf: &mut Buffer,
		highlight: Option<usize>
	) {
		let found = self.round.found_words();
		let items = self.round.solution().iter()
			.map(|w| {
				let mark = if found.contains(&w.word) { "✓" } else { " " };
				format!("{} {} ({})", mark, w.word, w.score())
			})
			.collect::<Vec<_>>();
		let mut list_state = ListState::default();
		list_state.select(highlight);
		let list = List::new(items)
			.block(
				Block::default()
					.borders(Borders::ALL)
					.title(
						Title::default()
							.content("Words on board")
							.alignment(Alignment::Center)
					)
			)
			.style(Style::default().fg(Color::White))
			.highlight_style(
				Style::default()
					.fg(Color::Black)
					.bg(Color::Green)
			);
		StatefulWidget::render(&list, area, buf, &mut list_state);
	}

	/// Process events. Block for only a few milliseconds, so that the clock
	/// keeps running.
	///
	/// # Errors
	///
	/// Any error that occurs while processing events.
	fn process_event(&mut self) -> io::Result<()>
	{
		if poll(Duration::from_millis(50))?
		{
			match read()?
			{
				Event::Key(event) if event.kind == KeyEventKind::Press =>
					self.process_key_event(event),
				_ => {}
			}
		}
		Ok(())
	}

	/// Process a key event according to the execution state.
	///
	/// # Arguments
	///
	/// * `event` - The key event to process.
	fn process_key_event(&mut self, event: KeyEvent)
	{
		match self.state
		{
			ExecutionState::Waiting => match event.code
			{
				KeyCode::Esc => self.exit(),
				KeyCode::Enter => self.start_round(),
				_ => {}
			},
			ExecutionState::Playing => self.process_key_event_playing(event),
			ExecutionState::Reviewing { .. } => match event.code
			{
				KeyCode::Esc => self.exit(),
				KeyCode::Up => self.move_highlight(-1),
				KeyCode::Down => self.move_highlight(1),
				KeyCode::Enter => self.next_round(),
				_ => {}
			},
			ExecutionState::Exiting => {}
		}
	}

	/// Process a key event while [playing](ExecutionState::Playing):
	///
	/// * Escape - Exit the application.
	/// * Up, Down, Left, Right - Move the cursor.
	/// * Space - Select the cell under the cursor.
	/// * Enter - Submit the word in progress.
	/// * Backspace - Abandon the word in progress.
	///
	/// # Arguments
	///
	/// * `event` - The key event to process.
	fn process_key_event_playing(&mut self, event: KeyEvent)
	{
		match event.code
		{
			KeyCode::Esc => self.exit(),
			KeyCode::Up => self.move_cursor(-1, 0),
			KeyCode::Down => self.move_cursor(1, 0),
			KeyCode::Left => self.move_cursor(0, -1),
			KeyCode::Right => self.move_cursor(0, 1),
			KeyCode::Char(' ') => self.select(),
			KeyCode::Enter => self.submit(),
			KeyCode::Backspace =>
			{
				self.round.clear();
				self.message = None;
			}
			_ => {}
		}
	}

	/// Mark the application for exit. The application will exit after the next
	/// iteration of the main loop.
	fn exit(&mut self)
	{
		self.state = ExecutionState::Exiting;
	}
}

impl Widget for &App
{
	fn render(self, area: Rect, buf: &mut Buffer)
	{
		if let ExecutionState::Exiting = self.state
		{
			return
		}
		// Split the screen into two parts: the board and the panel.
		let outer = Layout::default()
			.direction(Direction::Horizontal)
			.margin(1)
			.constraints([Constraint::Percentage(100), Constraint::Min(36)])
			.split(area);
		self.render_board(outer[0], buf);
		self.render_panel(outer[1], buf);
	}
}

/// Constraints that center `count` tracks of `size` cells between two flexible
/// margins.
fn centered(count: usize, size: u16) -> Vec<Constraint>
{
	once(Constraint::Fill(1))
		.chain(repeat(Constraint::Length(size)).take(count))
		.chain(once(Constraint::Fill(1)))
		.collect()
}

/// The execution state of the application.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum ExecutionState
{
	/// A board is ready, but hidden until the player starts the round.
	Waiting,

	/// The clock is running.
	Playing,

	/// The clock ran out, and the player is reviewing the board's words.
	Reviewing
	{
		/// The index of the word to highlight, if any.
		highlight: Option<usize>
	},

	/// The application is exiting.
	Exiting
}

////////////////////////////////////////////////////////////////////////////////
//                                   Tests.                                   //
////////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod test
{
	use rand::SeedableRng;

	use super::*;

	/// An application on a fixed 2×2 board.
	fn new_app() -> App
	{
		let dictionary = Rc::new(
			["AB", "ABD", "AD", "CAB"].into_iter().collect::<Dictionary>()
		);
		let mut app = App::new(dictionary.clone(), 5, StdRng::seed_from_u64(1));
		app.round = Round::new(
			"A B\nC D".parse().unwrap(),
			dictionary,
			5
		);
		app
	}

	/// Ensure that the application exits when the escape key is pressed, in
	/// every state.
	#[test]
	fn test_handle_exit()
	{
		let mut app = new_app();
		assert!(app.is_running());
		app.process_key_event(KeyCode::Esc.into());
		assert!(!app.is_running());

		let mut app = new_app();
		app.process_key_event(KeyCode::Enter.into());
		assert_eq!(app.state, ExecutionState::Playing);
		app.process_key_event(KeyCode::Esc.into());
		assert!(!app.is_running());
	}

	/// Ensure that the cursor moves with the arrow keys and stops at the
	/// edges of the board.
	#[test]
	fn test_handle_arrows()
	{
		let mut app = new_app();
		app.process_key_event(KeyCode::Enter.into());
		// Each case is a tuple of the initial cursor position and the expected
		// cursor position after moving up, right, down, and left,
		// respectively.
		let cases = vec![
			((0, 0), [(0, 0), (0, 1), (1, 0), (0, 0)]),
			((0, 1), [(0, 1), (0, 1), (1, 1), (0, 0)]),
			((1, 0), [(0, 0), (1, 1), (1, 0), (1, 0)]),
			((1, 1), [(0, 1), (1, 1), (1, 1), (1, 0)])
		];
		for (initial, expected) in cases
		{
			let keys = [KeyCode::Up, KeyCode::Right, KeyCode::Down, KeyCode::Left];
			for (key, expected) in keys.into_iter().zip(expected)
			{
				app.cursor = initial.into();
				app.process_key_event(key.into());
				assert_eq!(
					app.cursor,
					Coordinate::from(expected),
					"{:?} from {:?}",
					key,
					initial
				);
			}
		}
	}

	/// Ensure that a word can be traced and submitted from the keyboard.
	#[test]
	fn test_trace_and_submit()
	{
		let mut app = new_app();
		// Nothing can be selected before the round starts.
		app.process_key_event(KeyCode::Char(' ').into());
		assert!(app.round.selection().is_empty());
		app.process_key_event(KeyCode::Enter.into());
		// C, A, B.
		app.cursor = Coordinate::new(1, 0);
		app.process_key_event(KeyCode::Char(' ').into());
		app.process_key_event(KeyCode::Up.into());
		app.process_key_event(KeyCode::Char(' ').into());
		app.process_key_event(KeyCode::Right.into());
		app.process_key_event(KeyCode::Char(' ').into());
		assert_eq!(app.round.display(), "CAB");
		app.process_key_event(KeyCode::Enter.into());
		assert_eq!(app.round.score(), 9);
		assert_eq!(app.message.as_deref(), Some("CAB +9"));
		// Reselecting a cell is refused with an explanation.
		app.process_key_event(KeyCode::Char(' ').into());
		app.process_key_event(KeyCode::Char(' ').into());
		assert_eq!(app.round.selection().len(), 1);
		assert!(app.message.is_some());
		app.process_key_event(KeyCode::Backspace.into());
		assert!(app.round.selection().is_empty());
		app.process_key_event(KeyCode::Enter.into());
		assert_eq!(app.message.as_deref(), Some("nothing selected"));
	}

	/// Ensure that the clock ends the round, and that a new round can follow.
	#[test]
	fn test_clock()
	{
		let mut app = new_app();
		let start = app.last_tick;
		// The clock doesn't run while waiting.
		app.run_clock(start + Duration::from_secs(10));
		assert_eq!(app.round.remaining(), 5);
		app.process_key_event(KeyCode::Enter.into());
		let start = app.last_tick;
		app.run_clock(start + Duration::from_millis(2500));
		assert_eq!(app.round.remaining(), 3);
		assert_eq!(app.state, ExecutionState::Playing);
		app.run_clock(start + Duration::from_secs(5));
		assert_eq!(app.state, ExecutionState::Reviewing { highlight: None });
		assert!(app.round.is_stopped());
		app.process_key_event(KeyCode::Enter.into());
		assert_eq!(app.state, ExecutionState::Waiting);
		assert_eq!(app.round.remaining(), 5);
	}

	/// Ensure that the review highlight walks the word list and falls off
	/// either end.
	#[test]
	fn test_move_highlight()
	{
		let mut app = new_app();
		app.state = ExecutionState::Reviewing { highlight: None };
		assert_eq!(app.round.solution().len(), 4);
		app.process_key_event(KeyCode::Down.into());
		assert_eq!(app.state, ExecutionState::Reviewing { highlight: Some(0) });
		app.process_key_event(KeyCode::Up.into());
		assert_eq!(app.state, ExecutionState::Reviewing { highlight: None });
		app.process_key_event(KeyCode::Up.into());
		assert_eq!(app.state, ExecutionState::Reviewing { highlight: Some(3) });
		app.process_key_event(KeyCode::Down.into());
		assert_eq!(app.state, ExecutionState::Reviewing { highlight: None });
	}

	/// Ensure that every state renders without panicking.
	#[test]
	fn test_render()
	{
		let mut app = new_app();
		let area = Rect::new(0, 0, 100, 30);
		for state in [
			ExecutionState::Waiting,
			ExecutionState::Playing,
			ExecutionState::Reviewing { highlight: Some(1) },
			ExecutionState::Exiting
		]
		{
			app.state = state;
			let mut buf = Buffer::empty(area);
			(&app).render(area, &mut buf);
		}
	}
}
