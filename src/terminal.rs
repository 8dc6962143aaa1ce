use std::io::{self, Stdout};
use std::panic;

use anyhow::Result;
use crossterm::cursor::{Hide, Show};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;

pub type AppTerminal = Terminal<CrosstermBackend<Stdout>>;

/// Leaves raw mode and the alternate screen on drop unless already restored.
pub struct TerminalGuard {
    restored: bool,
}

impl TerminalGuard {
    pub fn restore(&mut self) -> Result<()> {
        if self.restored {
            return Ok(());
        }

        restore_stdio_terminal()?;
        self.restored = true;
        Ok(())
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = self.restore();
    }
}

pub fn init_terminal() -> Result<(AppTerminal, TerminalGuard)> {
    enable_raw_mode()?;
    let guard = TerminalGuard { restored: false };
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, Hide)?;
    let terminal = Terminal::new(CrosstermBackend::new(stdout))?;
    Ok((terminal, guard))
}

pub fn current_height(terminal: &AppTerminal) -> Result<u16> {
    Ok(terminal.size()?.height)
}

pub fn install_panic_hook() {
    let previous_hook = panic::take_hook();
    panic::set_hook(Box::new(move |panic_info| {
        let _ = restore_stdio_terminal();
        previous_hook(panic_info);
    }));
}

fn restore_stdio_terminal() -> Result<()> {
    disable_raw_mode()?;
    execute!(io::stdout(), Show, LeaveAlternateScreen)?;
    Ok(())
}
