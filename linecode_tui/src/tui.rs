use std::{
    io::{self, Stdout},
    panic::{self, PanicHookInfo},
    process,
};

use crossterm::{
    execute,
    terminal::{self, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};

use crate::error::LinecodeTuiResult;

pub type Tui = Terminal<CrosstermBackend<Stdout>>;

/// Switches stdout to raw mode on the alternate screen. A panic restores the
/// terminal before the default hook prints its report.
pub fn init_terminal() -> LinecodeTuiResult<Tui> {
    terminal::enable_raw_mode()?;
    execute!(io::stdout(), EnterAlternateScreen)?;
    install_panic_hook();
    let mut tui = Terminal::new(CrosstermBackend::new(io::stdout()))?;
    tui.clear()?;
    Ok(tui)
}

pub fn restore_terminal() -> LinecodeTuiResult<()> {
    execute!(io::stdout(), LeaveAlternateScreen)?;
    terminal::disable_raw_mode()?;
    Ok(())
}

fn install_panic_hook() {
    let default_hook = panic::take_hook();
    panic::set_hook(Box::new(move |info: &PanicHookInfo| {
        let _ = restore_terminal();
        tracing::error!(%info, "panicked");
        default_hook(info);
        process::exit(1);
    }));
}
