use std::sync::Arc;

use chrono::Utc;
use scraper::Html;
use tracing::{debug, info};

use crate::assemble::{assemble_record, PageContext};
use crate::dedup::dedup_records;
use crate::fetch::{Fetch, HttpFetcher};
use crate::fields::FieldSelectors;
use crate::selectors::CandidateQuery;
use skimmer_core::{ExtractConfig, ExtractResponse, Result};

/// Runs one extraction request end to end: validate, fetch, discover
/// candidates, extract and gate fields, dedup, cap, renumber.
pub struct ExtractPipeline {
    config: ExtractConfig,
    candidates: CandidateQuery,
    fields: FieldSelectors,
    fetcher: Arc<dyn Fetch>,
}

impl ExtractPipeline {
    /// Compile the configured selectors and wire in a fetcher. Selector
    /// compilation is the only fallible part of construction.
    pub fn new(config: ExtractConfig, fetcher: Arc<dyn Fetch>) -> Result<Self> {
        let candidates = CandidateQuery::compile(&config.selectors.candidates)?;
        let fields = FieldSelectors::compile(&config.selectors)?;
        Ok(Self {
            config,
            candidates,
            fields,
            fetcher,
        })
    }

    /// Pipeline backed by a live HTTP client.
    pub fn with_http(config: ExtractConfig) -> Result<Self> {
        let fetcher: Arc<dyn Fetch> = Arc::new(HttpFetcher::new(&config)?);
        Self::new(config, fetcher)
    }

    pub async fn extract(&self, raw_url: &str) -> Result<ExtractResponse> {
        let ctx = PageContext::new(raw_url, Utc::now())?;
        let body = self.fetcher.fetch(&ctx.requested).await?;
        Ok(self.extract_from_html(&body, ctx))
    }

    /// Extraction over an already-fetched body. Synchronous: the parsed
    /// document is not `Send` and must not cross an await point.
    pub fn extract_from_html(&self, html: &str, ctx: PageContext) -> ExtractResponse {
        let document = Html::parse_document(html);
        let candidates = self.candidates.candidates(&document, self.config.candidate_cap);
        let examined = candidates.len();

        let mut records = Vec::new();
        for candidate in candidates {
            let raw = self.fields.extract(candidate);
            if let Some(record) = assemble_record(raw, &ctx, records.len() + 1) {
                records.push(record);
            }
        }
        let gated = records.len();

        let mut articles = dedup_records(records);
        let total = articles.len();
        articles.truncate(self.config.result_cap);
        for (index, record) in articles.iter_mut().enumerate() {
            record.id = index + 1;
        }

        debug!(
            examined,
            gated,
            total,
            returned = articles.len(),
            "extraction counts"
        );
        info!("🗞️  {} articles from {}", articles.len(), ctx.source);

        ExtractResponse {
            articles,
            total,
            source: ctx.source,
        }
    }
}
