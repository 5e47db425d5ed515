// REPL module: the interactive shell loop. Reads a line, normalizes it,
// looks the first token up in the command registry and executes the
// matching action. The loop and the dispatch logic are generic over the
// output writer so tests can run scripted sessions against an in-memory
// buffer instead of a terminal.

use std::io::{BufRead, Write};

use anyhow::{Context, Result};
use indicatif::{ProgressBar, ProgressStyle};
use log::debug;

use crate::api::{ApiClient, PageCursor};
use crate::commands::{Command, CommandAction, CommandRegistry};

/// What the loop should do after a dispatched command: keep prompting, or
/// stop. Exit is a value the loop interprets rather than an abrupt
/// `process::exit`, so scripted sessions in tests end cleanly.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandOutcome {
    Continue,
    Terminate,
}

/// Normalize one raw input line into lowercase whitespace-delimited
/// tokens. Leading/trailing whitespace is dropped and runs of internal
/// whitespace collapse, so the result never contains empty tokens. An
/// empty or whitespace-only line yields an empty vector.
pub fn clean_input(text: &str) -> Vec<String> {
    text.to_lowercase()
        .split_whitespace()
        .map(str::to_string)
        .collect()
}

/// The shell state: the registry, the API client and the paging cursor.
/// All three are constructed in `main` and handed in; nothing here is
/// global. The cursor is owned exclusively by this struct and only
/// mutated after a successful fetch.
pub struct Repl {
    registry: CommandRegistry,
    api: ApiClient,
    cursor: PageCursor,
    // A cursor with `next` unset is ambiguous: it means "not started"
    // before the first fetch and "no further page" after the last one.
    // This flag disambiguates so `map` at the end is a notice, not a
    // silent wrap back to page one.
    reached_end: bool,
}

impl Repl {
    pub fn new(registry: CommandRegistry, api: ApiClient) -> Self {
        Repl {
            registry,
            api,
            cursor: PageCursor::default(),
            reached_end: false,
        }
    }

    /// Current paging position. Mostly useful for assertions in tests.
    pub fn cursor(&self) -> &PageCursor {
        &self.cursor
    }

    /// Handle one input line: normalize, look up, execute. Recoverable
    /// problems (unknown command, failed fetch) are printed to `out` and
    /// yield `Continue`; only `exit` yields `Terminate`. The returned
    /// error covers output failures only.
    pub fn dispatch(&mut self, line: &str, out: &mut impl Write) -> Result<CommandOutcome> {
        let tokens = clean_input(line);
        let Some(first) = tokens.first() else {
            return Ok(CommandOutcome::Continue);
        };

        let Some(&Command { action, .. }) = self.registry.lookup(first) else {
            writeln!(out, "Unknown command")?;
            return Ok(CommandOutcome::Continue);
        };
        debug!("dispatching command: {first}");

        match action {
            CommandAction::Exit => {
                writeln!(out, "Closing the Pokedex... Goodbye!")?;
                Ok(CommandOutcome::Terminate)
            }
            CommandAction::Help => {
                self.print_help(out)?;
                Ok(CommandOutcome::Continue)
            }
            CommandAction::MapForward => self.map_forward(out),
            CommandAction::MapBack => self.map_back(out),
        }
    }

    fn print_help(&self, out: &mut impl Write) -> Result<()> {
        writeln!(out, "Welcome to the Pokedex!")?;
        writeln!(out, "Usage:")?;
        writeln!(out)?;
        for command in self.registry.iter() {
            writeln!(out, "{}: {}", command.name, command.description)?;
        }
        Ok(())
    }

    /// The `map` command: fetch the page after the current one, or the
    /// first page if nothing has been fetched yet. Once the listing is
    /// exhausted this is a notice and no request is made, mirroring how
    /// `mapb` behaves on the first page.
    fn map_forward(&mut self, out: &mut impl Write) -> Result<CommandOutcome> {
        if self.reached_end && self.cursor.next.is_none() {
            writeln!(out, "you're on the last page")?;
            return Ok(CommandOutcome::Continue);
        }
        let target = self
            .cursor
            .next
            .clone()
            .unwrap_or_else(|| self.api.first_page_url().to_string());
        self.fetch_and_print(&target, out)
    }

    /// The `mapb` command: fetch the page before the current one. On the
    /// first page (or before any fetch) this is a notice, not an error,
    /// and no request is made.
    fn map_back(&mut self, out: &mut impl Write) -> Result<CommandOutcome> {
        let Some(target) = self.cursor.previous.clone() else {
            writeln!(out, "you're on the first page")?;
            return Ok(CommandOutcome::Continue);
        };
        self.fetch_and_print(&target, out)
    }

    /// Shared fetch/print/update path for both paging directions. A
    /// failed fetch prints the error chain and leaves the cursor exactly
    /// as it was; a successful one prints every name in order and then
    /// overwrites both cursor fields with the decoded values.
    fn fetch_and_print(&mut self, url: &str, out: &mut impl Write) -> Result<CommandOutcome> {
        // The spinner draws to stderr and auto-hides when not a terminal,
        // so scripted test sessions are unaffected.
        let spinner = ProgressBar::new_spinner();
        spinner.set_style(ProgressStyle::with_template("{spinner} {msg}").unwrap());
        spinner.set_message("Fetching locations...");
        let fetched = self.api.fetch_locations(url);
        spinner.finish_and_clear();

        match fetched {
            Ok(page) => {
                for entry in &page.results {
                    writeln!(out, "{}", entry.name)?;
                }
                self.reached_end = page.next.is_none();
                debug!(
                    "cursor updated (next: {:?}, previous: {:?})",
                    page.next, page.previous
                );
                self.cursor.next = page.next;
                self.cursor.previous = page.previous;
            }
            Err(e) => {
                writeln!(out, "{e:#}")?;
            }
        }
        Ok(CommandOutcome::Continue)
    }
}

/// Run the shell until `exit` or end of input. Prompts with `Pokedex > `
/// before every read and blocks on each line; there is no history, no
/// editing beyond what the terminal provides, and no timeout on network
/// calls made by the dispatched commands.
pub fn run(repl: &mut Repl, input: impl BufRead, out: &mut impl Write) -> Result<()> {
    writeln!(out, "Welcome to the Pokedex!")?;
    writeln!(out, "Type 'help' to see the available commands.")?;

    let mut lines = input.lines();
    loop {
        write!(out, "Pokedex > ")?;
        out.flush()?;
        let Some(line) = lines.next() else {
            // End of input (ctrl-d): leave the prompt on its own line.
            writeln!(out)?;
            break;
        };
        let line = line.context("Failed to read input line")?;
        if repl.dispatch(&line, out)? == CommandOutcome::Terminate {
            break;
        }
    }
    Ok(())
}
