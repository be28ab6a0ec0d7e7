//! Gift catalog: built-in defaults plus a remote override list.
//!
//! The built-ins guarantee the gift box never renders empty; a remote
//! entry with a matching id replaces the built-in wholesale.

use std::collections::HashMap;

use trollcity_common::models::gift::GiftDefinition;

/// Category label whose gifts score family-war points.
pub const FAMILY_CATEGORY: &str = "Family";

fn gift(gift_id: &str, name: &str, cost: i64, category: &str, icon: &str) -> GiftDefinition {
    GiftDefinition {
        gift_id: gift_id.to_string(),
        name: name.to_string(),
        cost,
        category: category.to_string(),
        icon: icon.to_string(),
    }
}

pub fn builtin_gifts() -> Vec<GiftDefinition> {
    vec![
        gift("heart", "Heart", 10, "Common", "❤️"),
        gift("troll", "Troll Face", 25, "Common", "🧌"),
        gift("coin", "Gold Coin", 50, "Common", "🪙"),
        gift("crown", "Crown", 100, "Common", "👑"),
        gift("diamond", "Diamond", 250, "Premium", "💎"),
        gift("blunt", "Blunt", 420, "Common", "🚬"),
        gift("rocket", "Rocket", 500, "Premium", "🚀"),
        gift("family_crest", "Family Crest", 750, FAMILY_CATEGORY, "🛡️"),
    ]
}

/// Merges remote entries over the built-ins by gift id and returns the
/// catalog sorted by ascending cost (id breaks ties for a stable order).
pub fn merge_catalog(
    builtins: Vec<GiftDefinition>,
    remote: Vec<GiftDefinition>,
) -> Vec<GiftDefinition> {
    let mut by_id: HashMap<String, GiftDefinition> = HashMap::new();
    for entry in builtins.into_iter().chain(remote) {
        by_id.insert(entry.gift_id.clone(), entry);
    }
    let mut merged: Vec<GiftDefinition> = by_id.into_values().collect();
    merged.sort_by(|a, b| a.cost.cmp(&b.cost).then_with(|| a.gift_id.cmp(&b.gift_id)));
    merged
}

/// Category key for ledger metadata. Falls back to a slug of the gift id
/// when the entry carries no category, and to `"gift"` when even the id
/// slugs down to nothing.
pub fn category_key(gift: &GiftDefinition) -> String {
    if !gift.category.trim().is_empty() {
        return gift.category.clone();
    }
    let slug = slugify(&gift.gift_id);
    if slug.is_empty() { "gift".to_string() } else { slug }
}

/// Lowercases and collapses each run of non-alphanumerics to one
/// underscore, with no leading or trailing separator.
fn slugify(raw: &str) -> String {
    let mut slug = String::with_capacity(raw.len());
    let mut pending_separator = false;
    for ch in raw.chars() {
        if ch.is_ascii_alphanumeric() {
            if pending_separator && !slug.is_empty() {
                slug.push('_');
            }
            pending_separator = false;
            slug.push(ch.to_ascii_lowercase());
        } else {
            pending_separator = true;
        }
    }
    slug
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn remote_entry_fully_replaces_builtin() {
        let remote = vec![gift("blunt", "Discount Blunt", 999, "Premium", "🚬")];
        let merged = merge_catalog(builtin_gifts(), remote);
        let blunt = merged.iter().find(|g| g.gift_id == "blunt").unwrap();
        assert_eq!(blunt.cost, 999);
        assert_eq!(blunt.name, "Discount Blunt");
        assert_eq!(blunt.category, "Premium");
    }

    #[test]
    fn builtins_survive_an_empty_remote_list() {
        let merged = merge_catalog(builtin_gifts(), Vec::new());
        assert_eq!(merged.len(), builtin_gifts().len());
        assert!(merged.iter().any(|g| g.gift_id == "heart"));
    }

    #[test]
    fn merged_catalog_is_sorted_by_cost() {
        let remote = vec![gift("mega_troll", "Mega Troll", 5, "Common", "🧌")];
        let merged = merge_catalog(builtin_gifts(), remote);
        assert_eq!(merged[0].gift_id, "mega_troll");
        for pair in merged.windows(2) {
            assert!(pair[0].cost <= pair[1].cost);
        }
    }

    #[test]
    fn category_key_prefers_the_label() {
        let g = gift("blunt", "Blunt", 420, "Common", "🚬");
        assert_eq!(category_key(&g), "Common");
    }

    #[test]
    fn category_key_slugs_a_messy_id() {
        let g = gift("  Blunt Wrap 2.0!! ", "Blunt Wrap", 420, "", "🚬");
        assert_eq!(category_key(&g), "blunt_wrap_2_0");
    }

    #[test]
    fn category_key_defaults_when_nothing_slugs() {
        let g = gift("???", "Mystery", 10, "  ", "❓");
        assert_eq!(category_key(&g), "gift");
    }
}
