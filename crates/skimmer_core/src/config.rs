use std::time::Duration;

pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36";

const DEFAULT_CANDIDATES: &[&str] = &[
    "article",
    "[class*='article']",
    "[class*='story']",
    "[class*='news-item']",
    "[class*='entry']",
    "[class*='post']",
];

const DEFAULT_TITLE: &[&str] = &[
    "h1",
    "h2",
    "h3",
    "[class*='title']",
    "[class*='headline']",
    ".entry-title",
];

// Class-based selectors first; a bare paragraph is the last resort.
const DEFAULT_SUMMARY: &[&str] = &[
    "[class*='summary']",
    "[class*='excerpt']",
    "[class*='description']",
    "p",
];

const DEFAULT_TIME: &[&str] = &["time", "[class*='date']", "[class*='time']", ".published"];

/// Settings for one extraction pipeline. Passed in explicitly so tests can
/// run variants without touching process state.
#[derive(Debug, Clone)]
pub struct ExtractConfig {
    /// Hard cap on candidate nodes examined per page.
    pub candidate_cap: usize,
    /// Maximum records returned after deduplication.
    pub result_cap: usize,
    pub fetch_timeout: Duration,
    pub max_redirects: usize,
    pub user_agent: String,
    pub selectors: SelectorConfig,
}

/// CSS selector patterns, each list an ordered set of alternatives.
#[derive(Debug, Clone)]
pub struct SelectorConfig {
    pub candidates: Vec<String>,
    pub title: Vec<String>,
    pub summary: Vec<String>,
    pub link: String,
    pub time: Vec<String>,
}

impl Default for ExtractConfig {
    fn default() -> Self {
        Self {
            candidate_cap: 25,
            result_cap: 20,
            fetch_timeout: Duration::from_secs(15),
            max_redirects: 5,
            user_agent: DEFAULT_USER_AGENT.to_string(),
            selectors: SelectorConfig::default(),
        }
    }
}

impl Default for SelectorConfig {
    fn default() -> Self {
        Self {
            candidates: owned(DEFAULT_CANDIDATES),
            title: owned(DEFAULT_TITLE),
            summary: owned(DEFAULT_SUMMARY),
            link: "a".to_string(),
            time: owned(DEFAULT_TIME),
        }
    }
}

fn owned(patterns: &[&str]) -> Vec<String> {
    patterns.iter().map(|s| s.to_string()).collect()
}
