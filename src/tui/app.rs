use crate::index::types::IndexConfig;
use crate::query::executor::{Executor, Lookup};
use crate::query::parser::{Command, parse_command};
use crate::session::Session;
use crate::store::PageId;
use anyhow::Result;

/// Application mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Typing a query
    Query,
    /// Typing a new page size for a rebuild
    Rebuild,
}

/// What the results panel is showing
pub enum View {
    Empty,
    Page {
        id: PageId,
        words: Option<Vec<String>>,
    },
    Lookups {
        word: String,
        lookups: Vec<Lookup>,
        page_words: Option<Vec<String>>,
    },
}

/// Application state
pub struct App {
    /// Corpus kept around so a rebuild can produce a fresh session
    words: Vec<String>,
    pub session: Session,
    pub mode: Mode,
    pub query: String,
    pub page_size_input: String,
    pub view: View,
    pub status_message: String,
}

impl App {
    pub fn new(words: Vec<String>, config: &IndexConfig) -> Result<Self> {
        let session = Session::build(words.clone(), config)?;
        Ok(Self {
            words,
            session,
            mode: Mode::Query,
            query: String::new(),
            page_size_input: String::new(),
            view: View::Empty,
            status_message: String::new(),
        })
    }

    /// Parse and run the current query line.
    ///
    /// A bare word runs both strategies so their costs sit side by side;
    /// `.word` scans only, `:n` fetches a page.
    pub fn execute_query(&mut self) {
        self.status_message.clear();
        let command = match parse_command(&self.query) {
            Ok(command) => command,
            Err(err) => {
                self.status_message = err.to_string();
                return;
            }
        };

        let executor = Executor::new(&self.session);
        self.view = match command {
            Command::Empty => return,
            Command::Page(id) => View::Page {
                id,
                words: executor.page(id).map(|words| words.to_vec()),
            },
            Command::Scan(word) => {
                let lookup = executor.table_scan(&word);
                let page_words = lookup
                    .page
                    .and_then(|id| executor.page(id))
                    .map(|words| words.to_vec());
                View::Lookups {
                    word,
                    lookups: vec![lookup],
                    page_words,
                }
            }
            Command::Lookup(word) => {
                let lookups = executor.compare(&word).to_vec();
                let page_words = lookups[0]
                    .page
                    .and_then(|id| executor.page(id))
                    .map(|words| words.to_vec());
                View::Lookups {
                    word,
                    lookups,
                    page_words,
                }
            }
        };
    }

    /// Enter rebuild mode, prefilled with the current page size
    pub fn start_rebuild(&mut self) {
        self.mode = Mode::Rebuild;
        self.page_size_input = self.session.config().page_size.to_string();
    }

    pub fn cancel_rebuild(&mut self) {
        self.mode = Mode::Query;
        self.page_size_input.clear();
    }

    /// Rebuild with the entered page size. The old store/index pair is
    /// replaced whole, never mutated in place.
    pub fn apply_rebuild(&mut self) {
        let page_size: usize = match self.page_size_input.trim().parse() {
            Ok(n) => n,
            Err(_) => {
                self.status_message = format!("{:?} is not a page size", self.page_size_input);
                return;
            }
        };

        let config = IndexConfig {
            page_size,
            ..self.session.config().clone()
        };
        match Session::build(self.words.clone(), &config) {
            Ok(session) => {
                self.session = session;
                self.view = View::Empty;
                self.mode = Mode::Query;
                self.page_size_input.clear();
                self.status_message = format!("rebuilt with page size {page_size}");
            }
            Err(err) => self.status_message = err.to_string(),
        }
    }
}
