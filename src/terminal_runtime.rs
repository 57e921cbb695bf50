use std::io;
use std::panic;

use crossterm::cursor::{Hide, Show};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use log::{debug, warn};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;

/// Concrete terminal type used by the runtime.
pub type AppTerminal = Terminal<CrosstermBackend<io::Stdout>>;

/// Terminal modes switched on for a session, in the order they are entered.
#[derive(Debug, Clone, Copy, Default)]
struct ScreenModes {
    raw: bool,
    alternate: bool,
}

impl ScreenModes {
    /// Undoes whichever modes are active, newest first.
    fn unwind(&mut self) -> io::Result<()> {
        let mut result = Ok(());

        if self.alternate {
            result = execute!(io::stdout(), Show, LeaveAlternateScreen);
            self.alternate = false;
        }
        if self.raw {
            let disabled = disable_raw_mode();
            result = result.and(disabled);
            self.raw = false;
        }

        result
    }
}

/// Game screen: raw input plus the alternate buffer for the lifetime of the value.
pub struct TerminalSession {
    terminal: AppTerminal,
    modes: ScreenModes,
}

impl TerminalSession {
    /// Switches the terminal into game mode. A failed step leaves the
    /// terminal as it was found.
    pub fn enter() -> io::Result<Self> {
        let mut modes = ScreenModes::default();

        let setup = (|| -> io::Result<AppTerminal> {
            enable_raw_mode()?;
            modes.raw = true;
            execute!(io::stdout(), EnterAlternateScreen, Hide)?;
            modes.alternate = true;
            Terminal::new(CrosstermBackend::new(io::stdout()))
        })();

        match setup {
            Ok(terminal) => {
                debug!("terminal session entered");
                Ok(Self { terminal, modes })
            }
            Err(error) => {
                let _ = modes.unwind();
                Err(error)
            }
        }
    }

    pub fn terminal_mut(&mut self) -> &mut AppTerminal {
        &mut self.terminal
    }

    /// Restores the terminal and reports whether that worked.
    pub fn leave(mut self) -> io::Result<()> {
        debug!("terminal session left");
        self.modes.unwind()
    }
}

impl Drop for TerminalSession {
    fn drop(&mut self) {
        if let Err(error) = self.modes.unwind() {
            warn!("failed to restore terminal: {error}");
        }
    }
}

/// Restores the terminal before the default hook prints a panic message.
///
/// The session value may never be dropped on a panic path, so this undoes
/// both modes unconditionally.
pub fn install_panic_hook() {
    let default_hook = panic::take_hook();

    panic::set_hook(Box::new(move |panic_info| {
        let _ = ScreenModes {
            raw: true,
            alternate: true,
        }
        .unwind();
        default_hook(panic_info);
    }));
}
