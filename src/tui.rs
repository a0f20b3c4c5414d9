//! # Text-based user interface (TUI)
//!
//! Terminal setup and teardown for the game. The terminal is switched to the
//! alternate screen in raw mode for the duration of a session, and restored
//! afterward, whether the session ends normally, with an error, or with a
//! panic on the UI thread.

use std::{
	io::{self, stdout, Stdout},
	panic::{self, PanicHookInfo},
	sync::{Arc, Mutex},
	thread::{self, ThreadId}
};

use crossterm::{
	execute,
	terminal::{
		disable_raw_mode, enable_raw_mode,
		EnterAlternateScreen, LeaveAlternateScreen
	}
};
use log::{trace, warn};
use ratatui::{backend::CrosstermBackend, Terminal};

////////////////////////////////////////////////////////////////////////////////
//                         Text-based user interface.                         //
////////////////////////////////////////////////////////////////////////////////

/// The text-based user interface (TUI) type.
pub type Tui = Terminal<CrosstermBackend<Stdout>>;

/// Run `f` against a freshly initialized terminal, then restore the terminal.
///
/// # Arguments
///
/// * `f` - The function to apply to the TUI.
///
/// # Returns
///
/// The result of applying `f` to the TUI.
///
/// # Errors
///
/// Any error that occurs while initializing or restoring the terminal, or
/// while running `f`. An error from `f` takes precedence.
pub fn tui<F, T>(f: F) -> io::Result<T>
	where F: FnOnce(&mut Tui) -> io::Result<T>
{
	let _hook = RestoreOnPanic::install();
	let mut session = Session::enter()?;
	let result = f(&mut session.terminal);
	let restored = session.leave();
	let value = result?;
	restored?;
	Ok(value)
}

/// An initialized terminal that must be restored before the program exits.
struct Session
{
	/// The terminal.
	terminal: Tui,

	/// Whether the terminal has already been restored.
	restored: bool
}

impl Session
{
	/// Switch to the alternate screen and enter raw mode. If entering raw mode
	/// fails, the alternate screen is left again before answering the error.
	fn enter() -> io::Result<Self>
	{
		let mut stdout = stdout();
		execute!(stdout, EnterAlternateScreen)?;
		if let Err(e) = enable_raw_mode()
		{
			let _ = execute!(stdout, LeaveAlternateScreen);
			return Err(e)
		}
		let terminal = match Terminal::new(CrosstermBackend::new(stdout))
		{
			Ok(terminal) => terminal,
			Err(e) =>
			{
				let _ = restore();
				return Err(e)
			}
		};
		trace!("entered TUI");
		Ok(Self { terminal, restored: false })
	}

	/// Restore the terminal and show the cursor.
	fn leave(mut self) -> io::Result<()>
	{
		self.restored = true;
		restore()?;
		self.terminal.show_cursor()
	}
}

impl Drop for Session
{
	fn drop(&mut self)
	{
		if !self.restored
		{
			if let Err(e) = restore()
			{
				warn!("Failed to restore terminal: {}", e);
			}
		}
	}
}

/// Leave the alternate screen and raw mode.
fn restore() -> io::Result<()>
{
	execute!(stdout(), LeaveAlternateScreen)?;
	disable_raw_mode()
}

/// The type of a panic hook.
type Hook = Box<dyn Fn(&PanicHookInfo<'_>) + Sync + Send + 'static>;

/// A panic hook that restores the terminal before reporting a panic on the UI
/// thread, so that the report is legible. Dropping it reinstates the previous
/// hook.
struct RestoreOnPanic
{
	/// The previous hook, shared with the installed hook.
	previous: Arc<Mutex<Option<Hook>>>
}

impl RestoreOnPanic
{
	/// Install the hook for the calling thread, which becomes the UI thread.
	fn install() -> Self
	{
		let previous = Arc::new(Mutex::new(Some(panic::take_hook())));
		let shared = Arc::clone(&previous);
		let ui_thread: ThreadId = thread::current().id();
		panic::set_hook(Box::new(move |info| {
			if thread::current().id() == ui_thread
			{
				let _ = restore();
			}
			// The previous hook stays in place, in case it is called again.
			if let Ok(hook) = shared.lock()
			{
				if let Some(hook) = hook.as_ref()
				{
					hook(info);
				}
			}
		}));
		Self { previous }
	}
}

impl Drop for RestoreOnPanic
{
	fn drop(&mut self)
	{
		// Replacing the hook while unwinding would abort the process.
		if thread::panicking()
		{
			return
		}
		let previous = self.previous.lock().ok().and_then(|mut h| h.take());
		if let Some(previous) = previous
		{
			panic::set_hook(previous);
		}
	}
}
