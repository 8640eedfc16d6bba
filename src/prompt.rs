//! Interactive prompt loop
//!
//! With no source on the command line, textstat reads commands from stdin:
//! flags followed by a path or URL as the last token, `help` for the flag
//! reference, `-c` to quit. Fetch failures print a message and re-prompt
//! instead of terminating.

use std::io::{self, BufRead, Write};

use crate::analyze::{Options, analyze};
use crate::config::{Config, SortOrder};
use crate::fetch::fetch;
use crate::help::PROMPT_HELP;
use crate::report;

/// One parsed prompt line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Quit,
    Help,
    /// Blank line, nothing to do.
    Empty,
    Analyze {
        source: String,
        strip_tags: bool,
        sort: Option<SortOrder>,
    },
}

/// Parse one prompt line into a command.
///
/// Tokens are split on spaces; the last token is the source, the rest are
/// flags. `-c` and `help` anywhere win over everything else. `-sn` beats
/// `-sa` when both are present, matching the historical flag precedence.
pub fn parse_command(line: &str) -> Command {
    let tokens: Vec<&str> = line.split(' ').filter(|t| !t.is_empty()).collect();

    if tokens.is_empty() {
        return Command::Empty;
    }
    if tokens.contains(&"-c") {
        return Command::Quit;
    }
    if tokens.contains(&"help") {
        return Command::Help;
    }

    let Some((source, flags)) = tokens.split_last() else {
        return Command::Empty;
    };
    let sort = if flags.contains(&"-sn") {
        Some(SortOrder::Frequency)
    } else if flags.contains(&"-sa") {
        Some(SortOrder::Alpha)
    } else {
        None
    };

    Command::Analyze {
        source: (*source).to_string(),
        strip_tags: flags.contains(&"-rt"),
        sort,
    }
}

const FETCH_FAILED: &str = "
I could not read the source because of an error.
Make sure the path is written correctly and you have the necessary permissions.

Type help to view the commands or -c to quit.
";

/// Run the prompt loop until `-c` or end of input.
pub fn run(config: &Config) -> io::Result<()> {
    let stdin = io::stdin();
    let mut stdout = io::stdout();

    loop {
        write!(stdout, "Enter a command, a path, or help for options: ")?;
        stdout.flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            // EOF
            return Ok(());
        }

        match parse_command(line.trim_end_matches(['\r', '\n'])) {
            Command::Quit => return Ok(()),
            Command::Empty => {}
            Command::Help => writeln!(stdout, "{PROMPT_HELP}")?,
            Command::Analyze {
                source,
                strip_tags,
                sort,
            } => {
                let text = match fetch(&source) {
                    Ok(text) => text,
                    Err(e) => {
                        log::warn!("fetch failed for {source}: {e}");
                        writeln!(stdout, "{FETCH_FAILED}")?;
                        continue;
                    }
                };
                let stats = analyze(
                    &text,
                    Options {
                        strip_tags: strip_tags || config.output.strip_tags,
                        sort: sort.unwrap_or(config.output.sort),
                        threshold: config.stats.threshold,
                    },
                );
                write!(stdout, "{}", report::render(&stats))?;
            }
        }
    }
}

#[cfg(test)]
#[path = "prompt_tests.rs"]
mod prompt_tests;
