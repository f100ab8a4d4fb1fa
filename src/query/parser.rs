//! The line command language.
//!
//! Three request shapes: `:<n>` fetches page `n`, `.<word>` runs a table
//! scan, and any other non-empty input is a hash-index lookup.

use crate::store::PageId;
use anyhow::{Context, Result, bail};

/// One parsed request
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// `:<n>` - fetch a page by index
    Page(PageId),
    /// `.<word>` - linear table scan
    Scan(String),
    /// bare word - hash-index lookup
    Lookup(String),
    /// blank input, ignored by the loop
    Empty,
}

/// Parse one input line into a [`Command`].
pub fn parse_command(input: &str) -> Result<Command> {
    let input = input.trim();
    if input.is_empty() {
        return Ok(Command::Empty);
    }

    if let Some(rest) = input.strip_prefix(':') {
        let rest = rest.trim();
        if rest.is_empty() {
            bail!("expected a page number after ':'");
        }
        let id: PageId = rest
            .parse()
            .with_context(|| format!("{rest:?} is not a page number"))?;
        return Ok(Command::Page(id));
    }

    if let Some(rest) = input.strip_prefix('.') {
        let word = rest.trim();
        if word.is_empty() {
            bail!("expected a word after '.'");
        }
        return Ok(Command::Scan(word.to_string()));
    }

    Ok(Command::Lookup(input.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_command() {
        assert_eq!(parse_command(":3").unwrap(), Command::Page(3));
        assert_eq!(parse_command(" :0 ").unwrap(), Command::Page(0));
    }

    #[test]
    fn test_scan_command() {
        assert_eq!(
            parse_command(".cherry").unwrap(),
            Command::Scan("cherry".to_string())
        );
    }

    #[test]
    fn test_lookup_command() {
        assert_eq!(
            parse_command("cherry").unwrap(),
            Command::Lookup("cherry".to_string())
        );
    }

    #[test]
    fn test_blank_input_ignored() {
        assert_eq!(parse_command("").unwrap(), Command::Empty);
        assert_eq!(parse_command("   \t").unwrap(), Command::Empty);
    }

    #[test]
    fn test_bad_page_number() {
        assert!(parse_command(":x").is_err());
        assert!(parse_command(":-1").is_err());
        assert!(parse_command(":").is_err());
    }

    #[test]
    fn test_bare_dot_rejected() {
        assert!(parse_command(".").is_err());
        assert!(parse_command(". ").is_err());
    }

    #[test]
    fn test_surrounding_whitespace_trimmed() {
        assert_eq!(
            parse_command("  kiwi  ").unwrap(),
            Command::Lookup("kiwi".to_string())
        );
    }
}
