pub mod assemble;
pub mod category;
pub mod dedup;
pub mod fetch;
pub mod fields;
pub mod pipeline;
pub mod selectors;
pub mod timeparse;

pub use fetch::{Fetch, HttpFetcher};
pub use pipeline::ExtractPipeline;

pub mod prelude {
    pub use crate::fetch::{Fetch, HttpFetcher};
    pub use crate::pipeline::ExtractPipeline;
    pub use skimmer_core::{
        ArticleRecord, Category, Error, ExtractConfig, ExtractResponse, Result,
    };
}
