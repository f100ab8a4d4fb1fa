pub mod executor;
pub mod parser;

pub use executor::{Executor, Lookup, Strategy};
pub use parser::{Command, parse_command};
