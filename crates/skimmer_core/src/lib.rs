pub mod config;
pub mod error;
pub mod types;

pub use config::{ExtractConfig, SelectorConfig, DEFAULT_USER_AGENT};
pub use error::{Error, Result};
pub use types::{ArticleRecord, Category, ExtractResponse};
