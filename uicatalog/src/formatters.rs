//! Name formatting helpers

/// Render a registry name as the exported component identifier
///
/// `star-rating-basic` becomes `StarRatingBasic`. Hyphens, underscores and
/// spaces separate words; empty words are dropped.
pub fn format_component_name(name: &str) -> String {
    name.split(['-', '_', ' '])
        .filter(|word| !word.is_empty())
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect()
}
