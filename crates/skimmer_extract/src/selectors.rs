use scraper::{ElementRef, Html, Selector};
use skimmer_core::{Error, Result};

/// Ordered selector alternatives. Evaluation walks the list and stops at the
/// first alternative that yields a non-empty value.
pub struct SelectorList {
    alternatives: Vec<Selector>,
}

impl SelectorList {
    pub fn compile(patterns: &[String]) -> Result<Self> {
        let mut alternatives = Vec::with_capacity(patterns.len());
        for pattern in patterns {
            let selector = Selector::parse(pattern)
                .map_err(|e| Error::Parse(format!("Invalid selector '{}': {}", pattern, e)))?;
            alternatives.push(selector);
        }
        Ok(Self { alternatives })
    }

    /// Whitespace-collapsed text of the first match of the first alternative
    /// that produces a non-empty string.
    pub fn first_text(&self, scope: ElementRef<'_>) -> Option<String> {
        for selector in &self.alternatives {
            if let Some(element) = scope.select(selector).next() {
                let text = element_text(&element);
                if !text.is_empty() {
                    return Some(text);
                }
            }
        }
        None
    }

    /// Like `first_text`, but a matched element with empty text falls back to
    /// the given attribute before the next alternative is tried.
    pub fn first_text_or_attr(&self, scope: ElementRef<'_>, attr: &str) -> Option<String> {
        for selector in &self.alternatives {
            if let Some(element) = scope.select(selector).next() {
                let text = element_text(&element);
                if !text.is_empty() {
                    return Some(text);
                }
                if let Some(value) = element.value().attr(attr) {
                    let value = value.trim();
                    if !value.is_empty() {
                        return Some(value.to_string());
                    }
                }
            }
        }
        None
    }
}

/// Page-wide candidate discovery: the patterns joined into one selector
/// group and matched in document order.
pub struct CandidateQuery {
    selector: Selector,
}

impl CandidateQuery {
    pub fn compile(patterns: &[String]) -> Result<Self> {
        let joined = patterns.join(", ");
        let selector = Selector::parse(&joined)
            .map_err(|e| Error::Parse(format!("Invalid candidate selector '{}': {}", joined, e)))?;
        Ok(Self { selector })
    }

    /// First `cap` matches in document order; traversal stops at the cap.
    pub fn candidates<'a>(&self, document: &'a Html, cap: usize) -> Vec<ElementRef<'a>> {
        document.select(&self.selector).take(cap).collect()
    }
}

/// Text content of an element with runs of whitespace collapsed to a single
/// space and the ends trimmed.
pub fn element_text(element: &ElementRef<'_>) -> String {
    element
        .text()
        .collect::<String>()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn list(patterns: &[&str]) -> SelectorList {
        let patterns: Vec<String> = patterns.iter().map(|s| s.to_string()).collect();
        SelectorList::compile(&patterns).unwrap()
    }

    #[test]
    fn test_invalid_pattern_is_parse_error() {
        let result = SelectorList::compile(&["[class*='".to_string()]);
        assert!(matches!(result, Err(Error::Parse(_))));
    }

    #[test]
    fn test_earlier_alternative_wins() {
        let html = Html::parse_document("<div><p class='lede'>Second</p><h2>First</h2></div>");
        let selectors = list(&["h2", "p"]);
        assert_eq!(
            selectors.first_text(html.root_element()).as_deref(),
            Some("First")
        );
    }

    #[test]
    fn test_empty_match_falls_through() {
        let html = Html::parse_document("<div><h2>   </h2><p>Body</p></div>");
        let selectors = list(&["h2", "p"]);
        assert_eq!(
            selectors.first_text(html.root_element()).as_deref(),
            Some("Body")
        );
    }

    #[test]
    fn test_attr_fallback() {
        let html = Html::parse_document("<div><time datetime='2024-03-03T00:00:00Z'></time></div>");
        let selectors = list(&["time"]);
        assert_eq!(
            selectors
                .first_text_or_attr(html.root_element(), "datetime")
                .as_deref(),
            Some("2024-03-03T00:00:00Z")
        );
    }

    #[test]
    fn test_candidate_cap() {
        let cards: String = (0..40).map(|i| format!("<article>{}</article>", i)).collect();
        let html = Html::parse_document(&format!("<body>{}</body>", cards));
        let query = CandidateQuery::compile(&["article".to_string()]).unwrap();
        assert_eq!(query.candidates(&html, 25).len(), 25);
    }

    #[test]
    fn test_candidates_in_document_order() {
        let html = Html::parse_document(
            "<body><article>a</article><div class='story-card'>b</div><article>c</article></body>",
        );
        let patterns = vec!["article".to_string(), "[class*='story']".to_string()];
        let query = CandidateQuery::compile(&patterns).unwrap();
        let texts: Vec<String> = query.candidates(&html, 25).iter().map(element_text).collect();
        assert_eq!(texts, ["a", "b", "c"]);
    }

    #[test]
    fn test_text_is_whitespace_collapsed() {
        let html = Html::parse_document("<div><h1>  Fresh\n   <em>news</em> today </h1></div>");
        assert_eq!(
            list(&["h1"]).first_text(html.root_element()).as_deref(),
            Some("Fresh news today")
        );
    }
}
