use skimmer_core::ArticleRecord;

/// Case-folded title prefix length used for near-duplicate detection.
const PREFIX_CHARS: usize = 50;

/// Drop records whose title prefix was already seen, keeping the first
/// occurrence. Stable; a linear scan is fine at pipeline scale.
pub fn dedup_records(records: Vec<ArticleRecord>) -> Vec<ArticleRecord> {
    let mut seen: Vec<String> = Vec::with_capacity(records.len());
    let mut kept = Vec::with_capacity(records.len());

    for record in records {
        let key: String = record
            .title
            .to_lowercase()
            .chars()
            .take(PREFIX_CHARS)
            .collect();
        if seen.contains(&key) {
            continue;
        }
        seen.push(key);
        kept.push(record);
    }

    kept
}
