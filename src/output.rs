//! Output formatting for lookup results and pages.

use crate::query::executor::Lookup;
use crate::store::PageId;
use std::io::{self, Write};
use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

fn stdout(color: bool) -> StandardStream {
    let choice = if color {
        ColorChoice::Auto
    } else {
        ColorChoice::Never
    };
    StandardStream::stdout(choice)
}

/// Print one strategy's result, with the contents of the page it found.
pub fn print_lookup(
    word: &str,
    lookup: &Lookup,
    page_words: Option<&[String]>,
    color: bool,
) -> io::Result<()> {
    let mut stdout = stdout(color);

    stdout.set_color(ColorSpec::new().set_fg(Some(Color::Magenta)).set_bold(true))?;
    write!(stdout, "{}", lookup.strategy.label())?;
    stdout.reset()?;

    match lookup.page {
        Some(page) => {
            write!(stdout, ": found \"{}\" in page ", word)?;
            stdout.set_color(ColorSpec::new().set_fg(Some(Color::Yellow)))?;
            write!(stdout, "{}", page)?;
            stdout.reset()?;
            writeln!(stdout, " ({} accesses, {:?})", lookup.accesses, lookup.elapsed)?;

            if let Some(words) = page_words {
                stdout.set_color(ColorSpec::new().set_fg(Some(Color::Cyan)))?;
                writeln!(stdout, "  {}", words.join(" "))?;
                stdout.reset()?;
            }
        }
        None => {
            writeln!(
                stdout,
                ": \"{}\" not found ({} accesses, {:?})",
                word, lookup.accesses, lookup.elapsed
            )?;
        }
    }

    Ok(())
}

/// Print one page of the store.
pub fn print_page(id: PageId, words: Option<&[String]>, color: bool) -> io::Result<()> {
    let mut stdout = stdout(color);

    match words {
        Some(words) => {
            stdout.set_color(ColorSpec::new().set_fg(Some(Color::Magenta)).set_bold(true))?;
            writeln!(stdout, "page {} ({} words)", id, words.len())?;
            stdout.reset()?;
            for word in words {
                writeln!(stdout, "  {}", word)?;
            }
        }
        None => {
            writeln!(stdout, "page {} does not exist", id)?;
        }
    }

    Ok(())
}

/// Machine-readable form of one lookup result
pub fn lookup_json(word: &str, lookup: &Lookup) -> serde_json::Value {
    serde_json::json!({
        "word": word,
        "strategy": lookup.strategy,
        "found": lookup.found(),
        "page": lookup.page,
        "accesses": lookup.accesses,
        "elapsed_us": lookup.elapsed.as_secs_f64() * 1e6,
    })
}
