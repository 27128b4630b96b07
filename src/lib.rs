pub mod analyzers;
pub mod error;
pub mod model;
pub mod output;
pub mod parser;
pub mod stats;

pub use analyzers::{calculate_ratings, count_with_debt};
pub use error::RosterError;
pub use model::{RosterData, Score, Subject};
pub use parser::{read_structured, read_text};
