use scraper::{ElementRef, Selector};
use url::Url;

use crate::selectors::SelectorList;
use skimmer_core::{Error, Result, SelectorConfig};

const DATETIME_ATTR: &str = "datetime";

/// Raw per-candidate output, before gates and fallbacks run.
#[derive(Debug, Default)]
pub struct RawFields {
    pub title: String,
    pub summary: String,
    pub link: Option<String>,
    pub time_text: Option<String>,
}

/// Field selectors compiled once per pipeline.
pub struct FieldSelectors {
    title: SelectorList,
    summary: SelectorList,
    anchor: Selector,
    time: SelectorList,
}

impl FieldSelectors {
    pub fn compile(config: &SelectorConfig) -> Result<Self> {
        Ok(Self {
            title: SelectorList::compile(&config.title)?,
            summary: SelectorList::compile(&config.summary)?,
            anchor: Selector::parse(&config.link)
                .map_err(|e| Error::Parse(format!("Invalid link selector '{}': {}", config.link, e)))?,
            time: SelectorList::compile(&config.time)?,
        })
    }

    /// Pull the four raw fields out of one candidate node. Absent fields come
    /// back empty or `None`; nothing fails here.
    pub fn extract(&self, candidate: ElementRef<'_>) -> RawFields {
        let title = self.title.first_text(candidate).unwrap_or_default();
        let summary = self.summary.first_text(candidate).unwrap_or_default();
        let link = candidate
            .select(&self.anchor)
            .next()
            .and_then(|a| a.value().attr("href"))
            .map(|href| href.to_string());
        let time_text = self.time.first_text_or_attr(candidate, DATETIME_ATTR);

        RawFields {
            title,
            summary,
            link,
            time_text,
        }
    }
}

/// Resolve an extracted href to an absolute URL. Relative hrefs resolve
/// against the origin of the requested page; unresolvable ones are dropped.
pub fn resolve_link(href: &str, origin: &Url) -> Option<String> {
    match Url::parse(href) {
        Ok(absolute) => Some(absolute.to_string()),
        Err(url::ParseError::RelativeUrlWithoutBase) => {
            origin.join(href).ok().map(|resolved| resolved.to_string())
        }
        Err(_) => None,
    }
}
