use std::path::PathBuf;

use clap::Parser;
use linecode::Scheme;

#[derive(Parser, Debug)]
#[command(name = "linecode")]
#[command(about = "Plot line-encoded signals (NRZ, AMI, Manchester, ...) in the terminal")]
#[command(version)]
pub struct Cli {
    /// Encoding scheme: display name or alias (nrzl, nrzi, ami, pseudo, manchester, dm)
    #[arg(short, long)]
    pub scheme: Option<Scheme>,

    /// Bit string to encode, e.g. 1011001101
    #[arg(short, long)]
    pub bits: Option<String>,

    /// Print the plot to stdout and exit instead of opening the UI
    #[arg(short, long)]
    pub print: bool,

    /// Terminal columns per bit period
    #[arg(short, long, default_value_t = 6, value_parser = clap::value_parser!(u16).range(2..=32))]
    pub zoom: u16,

    /// Write logs to this file
    #[arg(long)]
    pub log_file: Option<PathBuf>,

    /// Log encoder details as well
    #[arg(short, long)]
    pub verbose: bool,
}
