use std::sync::OnceLock;

use linecode::Scheme;

#[derive(Debug, PartialEq)]
pub enum Command {
    Plot(Scheme, String),
    Select(Scheme),
    Bits(String),
    Zoom(u16),
    Quit,
    Help,
    Noop,
}

/// One `:` command: its name, argument placeholders and how to turn the
/// arguments into a `Command`.
struct CommandEntry {
    name: &'static str,
    args: &'static [&'static str],
    summary: &'static str,
    parse: fn(&[&str]) -> Result<Command, String>,
}

const SCHEME_ALIASES: &str = "nrzl, nrzi, ami, pseudo, manchester, dm";
const MIN_ZOOM: u16 = 2;
const MAX_ZOOM: u16 = 32;

const COMMANDS: [CommandEntry; 6] = [
    CommandEntry {
        name: "plot",
        args: &["scheme", "bits"],
        summary: "encodes the bits with the scheme and plots the signal",
        parse: parse_plot,
    },
    CommandEntry {
        name: "scheme",
        args: &["scheme"],
        summary: "selects the encoding scheme",
        parse: parse_scheme,
    },
    CommandEntry {
        name: "bits",
        args: &["bits"],
        summary: "replaces the binary data",
        parse: parse_bits,
    },
    CommandEntry {
        name: "zoom",
        args: &["columns"],
        summary: "sets the number of columns per bit period",
        parse: parse_zoom,
    },
    CommandEntry {
        name: "quit",
        args: &[],
        summary: "closes this application",
        parse: |_| Ok(Command::Quit),
    },
    CommandEntry {
        name: "help",
        args: &[],
        summary: "displays this message",
        parse: |_| Ok(Command::Help),
    },
];

static HELP: OnceLock<String> = OnceLock::new();

pub fn interpret(command_line: &str) -> Result<Command, String> {
    let words: Vec<&str> = command_line.split_whitespace().collect();
    let Some((name, args)) = words.split_first() else {
        return Ok(Command::Noop);
    };
    let entry = COMMANDS
        .iter()
        .find(|entry| entry.name == *name)
        .ok_or_else(|| format!("unknown command \"{name}\""))?;
    if args.len() != entry.args.len() {
        return Err(format!(
            "expected {} arguments (usage: {})",
            entry.args.len(),
            entry.usage()
        ));
    }
    (entry.parse)(args)
}

pub fn help() -> &'static str {
    HELP.get_or_init(|| {
        let commands: String = COMMANDS
            .iter()
            .map(|entry| format!("   {}\n       {}\n", entry.usage(), entry.summary))
            .collect();
        format!("Commands:\n{commands}Schemes: {SCHEME_ALIASES}")
    })
}

fn parse_scheme_arg(arg: &str) -> Result<Scheme, String> {
    arg.parse::<Scheme>().map_err(|e| e.to_string())
}

fn parse_plot(args: &[&str]) -> Result<Command, String> {
    let scheme = parse_scheme_arg(args[0])?;
    Ok(Command::Plot(scheme, args[1].to_string()))
}

fn parse_scheme(args: &[&str]) -> Result<Command, String> {
    parse_scheme_arg(args[0]).map(Command::Select)
}

fn parse_bits(args: &[&str]) -> Result<Command, String> {
    Ok(Command::Bits(args[0].to_string()))
}

fn parse_zoom(args: &[&str]) -> Result<Command, String> {
    match args[0].parse::<u16>() {
        Ok(columns) if (MIN_ZOOM..=MAX_ZOOM).contains(&columns) => Ok(Command::Zoom(columns)),
        Ok(columns) => Err(format!("zoom {columns} is outside {MIN_ZOOM}..={MAX_ZOOM}")),
        Err(_) => Err(format!("cannot parse {} as a column count", args[0])),
    }
}

impl CommandEntry {
    fn usage(&self) -> String {
        std::iter::once(self.name.to_string())
            .chain(self.args.iter().map(|arg| format!("<{arg}>")))
            .collect::<Vec<_>>()
            .join(" ")
    }
}
