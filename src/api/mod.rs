pub mod error;
pub mod executor;
pub mod fetcher;
pub mod parser;
