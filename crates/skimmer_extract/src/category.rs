use skimmer_core::Category;

/// Keyword table, walked top to bottom; the first group with a hit wins.
/// Matching is plain substring search over case-folded text.
const CATEGORY_RULES: &[(Category, &[&str])] = &[
    (
        Category::Technology,
        &["tech", "ai", "software", "computer", "digital", "cyber", "robot", "algorithm"],
    ),
    (
        Category::Health,
        &["health", "medical", "doctor", "hospital", "disease", "vaccine", "medicine"],
    ),
    (
        Category::Business,
        &["business", "economy", "market", "finance", "stock", "trade", "company"],
    ),
    (
        Category::Sports,
        &["sport", "football", "soccer", "basketball", "tennis", "game", "match"],
    ),
    (
        Category::Politics,
        &["politic", "government", "election", "vote", "president", "minister"],
    ),
    (
        Category::World,
        &["climate", "environment", "green", "carbon", "pollution", "energy"],
    ),
];

pub fn classify(text: &str) -> Category {
    let text = text.to_lowercase();
    for (category, keywords) in CATEGORY_RULES {
        if keywords.iter().any(|keyword| text.contains(keyword)) {
            return *category;
        }
    }
    Category::General
}
