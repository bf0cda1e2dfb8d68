use std::{process::ExitCode, sync::mpsc};

use clap::Parser;
use linecode_tui::{
    app::App, cli::Cli, components::Root, error::LinecodeTuiResult, logging, print, tui,
};

fn main() -> ExitCode {
    let cli = Cli::parse();
    let result = logging::init(cli.log_file.as_deref(), cli.verbose).and_then(|_| {
        if cli.print {
            print_signal(&cli)
        } else {
            run_interactive(&cli)
        }
    });
    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, "exiting with error");
            eprintln!("linecode: {e}");
            ExitCode::FAILURE
        }
    }
}

fn print_signal(cli: &Cli) -> LinecodeTuiResult<()> {
    let plot = print::print(cli.scheme, cli.bits.as_deref(), cli.zoom)?;
    print!("{plot}");
    Ok(())
}

fn run_interactive(cli: &Cli) -> LinecodeTuiResult<()> {
    let (message_tx, message_rx) = mpsc::channel();
    let mut root = Root::new(message_tx, cli.zoom);
    root.preset(cli.scheme, cli.bits.as_deref());
    let terminal = tui::init_terminal()?;
    let result = App::new(terminal, root, message_rx).run();
    tui::restore_terminal()?;
    result
}
