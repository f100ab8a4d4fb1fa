//! Line-oriented interaction loop.
//!
//! `:<n>` fetches a page, `.<word>` runs a table scan, any other non-empty
//! input runs a hash-index lookup. Parse errors are reported and the loop
//! continues; EOF ends the session.

use crate::output;
use crate::query::executor::Executor;
use crate::query::parser::{Command, parse_command};
use crate::session::Session;
use anyhow::Result;
use std::io::{self, BufRead, Write};

pub fn run(session: &Session, color: bool) -> Result<()> {
    let executor = Executor::new(session);
    let stdin = io::stdin();
    let mut stdout = io::stdout();

    loop {
        write!(stdout, ">>> ")?;
        stdout.flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            writeln!(stdout)?;
            return Ok(());
        }

        let command = match parse_command(&line) {
            Ok(command) => command,
            Err(err) => {
                eprintln!("{err}");
                continue;
            }
        };

        match command {
            Command::Empty => continue,
            Command::Page(id) => output::print_page(id, executor.page(id), color)?,
            Command::Scan(word) => {
                let lookup = executor.table_scan(&word);
                let page_words = lookup.page.and_then(|id| executor.page(id));
                output::print_lookup(&word, &lookup, page_words, color)?;
            }
            Command::Lookup(word) => {
                let lookup = executor.hash_lookup(&word);
                let page_words = lookup.page.and_then(|id| executor.page(id));
                output::print_lookup(&word, &lookup, page_words, color)?;
            }
        }
    }
}
