use chrono::{DateTime, Utc};
use url::Url;

use crate::category::classify;
use crate::fields::{resolve_link, RawFields};
use crate::timeparse::normalize_time;
use skimmer_core::{ArticleRecord, Error, Result};

/// Title length gate, exclusive on both ends. Shorter strings are
/// navigation labels, longer ones are body text that leaked into a heading.
const TITLE_MIN_CHARS: usize = 15;
const TITLE_MAX_CHARS: usize = 200;

const SUMMARY_MAX_CHARS: usize = 300;
const SUMMARY_SENTINEL: &str = "No summary available";

/// Rough reading speed behind the "N min read" estimate.
const CHARS_PER_MINUTE: usize = 200;

/// Per-request context shared by every candidate of one page.
pub struct PageContext {
    pub requested: Url,
    pub origin: Url,
    pub source: String,
    pub now: DateTime<Utc>,
}

impl PageContext {
    /// Validate the requested URL and derive the origin, the www-stripped
    /// source name, and the timestamp anchor for relative times.
    pub fn new(raw_url: &str, now: DateTime<Utc>) -> Result<Self> {
        let trimmed = raw_url.trim();
        if trimmed.is_empty() {
            return Err(Error::Validation("url is required".to_string()));
        }

        let requested = Url::parse(trimmed)
            .map_err(|e| Error::Validation(format!("invalid url '{}': {}", trimmed, e)))?;
        if !matches!(requested.scheme(), "http" | "https") {
            return Err(Error::Validation(format!(
                "unsupported scheme '{}'",
                requested.scheme()
            )));
        }

        let host = requested
            .host_str()
            .ok_or_else(|| Error::Validation(format!("url '{}' has no host", trimmed)))?;
        let source = host.strip_prefix("www.").unwrap_or(host).to_string();

        let origin = Url::parse(&requested.origin().ascii_serialization())
            .map_err(|e| Error::Validation(format!("cannot derive origin: {}", e)))?;

        Ok(Self {
            requested,
            origin,
            source,
            now,
        })
    }
}

/// Apply gates and fallbacks to raw fields. `None` means the candidate
/// failed the title gate; rejected candidates are skipped, never errors.
pub fn assemble_record(fields: RawFields, ctx: &PageContext, id: usize) -> Option<ArticleRecord> {
    let title = fields.title;
    let title_len = title.chars().count();
    if title_len <= TITLE_MIN_CHARS || title_len >= TITLE_MAX_CHARS {
        return None;
    }

    let mut summary = fields.summary;
    if summary.chars().count() > SUMMARY_MAX_CHARS {
        summary = summary.chars().take(SUMMARY_MAX_CHARS).collect::<String>() + "...";
    }

    // Classify before the sentinel goes in; the sentinel text would
    // otherwise match the "ai" keyword.
    let category = classify(&format!("{} {}", title, summary));

    let read_basis = if summary.is_empty() { &title } else { &summary };
    let minutes = ((read_basis.chars().count() + CHARS_PER_MINUTE - 1) / CHARS_PER_MINUTE).max(1);
    let read_time = format!("{} min read", minutes);

    if summary.is_empty() {
        summary = SUMMARY_SENTINEL.to_string();
    }

    let url = fields
        .link
        .as_deref()
        .and_then(|href| resolve_link(href, &ctx.origin))
        .unwrap_or_else(|| ctx.requested.to_string());

    let published_at = fields
        .time_text
        .as_deref()
        .and_then(|text| normalize_time(text, ctx.now))
        .unwrap_or(ctx.now);

    Some(ArticleRecord {
        id,
        title,
        summary,
        source: ctx.source.clone(),
        published_at,
        url,
        category,
        read_time,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;
    use skimmer_core::Category;

    fn fixed_now() -> DateTime<Utc> {
        DateTime::parse_from_rfc3339("2024-06-01T12:00:00Z")
            .unwrap()
            .with_timezone(&Utc)
    }

    fn ctx() -> PageContext {
        PageContext::new("https://www.news.example.com/home", fixed_now()).unwrap()
    }

    fn fields(title: &str) -> RawFields {
        RawFields {
            title: title.to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_context_strips_www_from_source() {
        assert_eq!(ctx().source, "news.example.com");
        let bare = PageContext::new("https://example.org/x", fixed_now()).unwrap();
        assert_eq!(bare.source, "example.org");
    }

    #[test]
    fn test_context_rejects_bad_urls() {
        assert!(matches!(
            PageContext::new("", fixed_now()),
            Err(Error::Validation(_))
        ));
        assert!(matches!(
            PageContext::new("not a url", fixed_now()),
            Err(Error::Validation(_))
        ));
        assert!(matches!(
            PageContext::new("ftp://files.example.com/x", fixed_now()),
            Err(Error::Validation(_))
        ));
    }

    #[test]
    fn test_title_gate_is_exclusive() {
        assert!(assemble_record(fields(&"a".repeat(15)), &ctx(), 1).is_none());
        assert!(assemble_record(fields(&"a".repeat(200)), &ctx(), 1).is_none());
        assert!(assemble_record(fields(&"a".repeat(16)), &ctx(), 1).is_some());
        assert!(assemble_record(fields(&"a".repeat(199)), &ctx(), 1).is_some());
    }

    #[test]
    fn test_summary_truncation_and_read_time() {
        let mut raw = fields("A headline long enough to pass");
        raw.summary = "x".repeat(400);
        let record = assemble_record(raw, &ctx(), 1).unwrap();
        assert_eq!(record.summary.chars().count(), 303);
        assert!(record.summary.ends_with("..."));
        // 303 chars at 200 chars/min rounds up to 2.
        assert_eq!(record.read_time, "2 min read");
    }

    #[test]
    fn test_missing_summary_gets_sentinel_after_read_time() {
        let record = assemble_record(fields("A headline long enough to pass"), &ctx(), 1).unwrap();
        assert_eq!(record.summary, "No summary available");
        // Read time fell back to the title, not the sentinel.
        assert_eq!(record.read_time, "1 min read");
    }

    #[test]
    fn test_sentinel_does_not_skew_classification() {
        // No keywords anywhere; the sentinel's "available" must not trip the
        // "ai" rule.
        let record =
            assemble_record(fields("Quiet morning across the town square"), &ctx(), 1).unwrap();
        assert_eq!(record.category, Category::General);
    }

    #[test]
    fn test_link_fallbacks() {
        let mut raw = fields("A headline long enough to pass");
        raw.link = Some("/world/story-1".to_string());
        let record = assemble_record(raw, &ctx(), 1).unwrap();
        assert_eq!(record.url, "https://www.news.example.com/world/story-1");

        let record = assemble_record(fields("A headline long enough to pass"), &ctx(), 1).unwrap();
        assert_eq!(record.url, "https://www.news.example.com/home");
    }

    #[test]
    fn test_time_defaults_to_now() {
        let record = assemble_record(fields("A headline long enough to pass"), &ctx(), 1).unwrap();
        assert_eq!(record.published_at, fixed_now());

        let mut raw = fields("A headline long enough to pass");
        raw.time_text = Some("2 hours ago".to_string());
        let record = assemble_record(raw, &ctx(), 1).unwrap();
        assert_eq!(record.published_at, fixed_now() - Duration::hours(2));
    }

    #[test]
    fn test_unparseable_time_defaults_to_now() {
        let mut raw = fields("A headline long enough to pass");
        raw.time_text = Some("soonish".to_string());
        let record = assemble_record(raw, &ctx(), 1).unwrap();
        assert_eq!(record.published_at, fixed_now());
    }
}
