//! Free-text transaction parsing ("NLP engine").

pub mod keywords;
mod parser;

pub use keywords::KeywordRule;
pub use parser::TransactionParser;
