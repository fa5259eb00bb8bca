use foundation::CategorySlug;

/// Category used when the request names none.
pub const DEFAULT_CATEGORY: &str = "locations";

/// Maps user-facing category spellings onto canonical slugs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryAliases {
    entries: Vec<(String, CategorySlug)>,
    fallback: CategorySlug,
}

impl Default for CategoryAliases {
    fn default() -> Self {
        let pairs = [
            ("location", "locations"),
            ("locations", "locations"),
            ("item", "items"),
            ("items", "items"),
            ("puzzle", "puzzles"),
            ("puzzles", "puzzles"),
            ("npc", "npc"),
            ("npcs", "npc"),
            ("character-hooks", "character-hooks"),
            ("story-hooks", "story-hooks"),
            ("site-lore", "site-lore"),
            ("secrets", "secrets"),
            ("contact", "contact"),
            ("submit-your-own", "submit-your-own"),
        ];
        Self {
            entries: pairs
                .iter()
                .map(|(alias, slug)| (alias.to_string(), CategorySlug::new(slug)))
                .collect(),
            fallback: CategorySlug::new(DEFAULT_CATEGORY),
        }
    }
}

impl CategoryAliases {
    pub fn with_fallback(mut self, fallback: impl AsRef<str>) -> Self {
        let fallback = CategorySlug::new(fallback);
        if !fallback.is_empty() {
            self.fallback = fallback;
        }
        self
    }

    pub fn insert(&mut self, alias: impl AsRef<str>, slug: impl AsRef<str>) {
        let alias = alias.as_ref().trim().to_lowercase();
        let slug = CategorySlug::new(slug);
        match self.entries.iter_mut().find(|(a, _)| *a == alias) {
            Some(entry) => entry.1 = slug,
            None => self.entries.push((alias, slug)),
        }
    }

    /// Resolves a raw `category` parameter.
    ///
    /// Known aliases map to their slug; unknown non-empty keys pass through
    /// trimmed and lower-cased; missing or blank input yields the fallback.
    pub fn normalize(&self, raw: Option<&str>) -> CategorySlug {
        let key = raw.unwrap_or("").trim().to_lowercase();
        if let Some((_, slug)) = self.entries.iter().find(|(alias, _)| *alias == key) {
            return slug.clone();
        }
        if key.is_empty() {
            return self.fallback.clone();
        }
        CategorySlug::new(key)
    }
}

/// Human title for a slug: hyphens become spaces and each word is capitalized.
///
/// Word characters are ASCII letters, digits and `_`, so a non-ASCII letter
/// starts no word and is left as is.
pub fn title_case_category(slug: &str) -> String {
    let source = if slug.is_empty() { "collection" } else { slug };
    let mut out = String::with_capacity(source.len());
    let mut in_word = false;
    for ch in source.chars() {
        let ch = if ch == '-' { ' ' } else { ch };
        let is_word = ch.is_ascii_alphanumeric() || ch == '_';
        if is_word && !in_word {
            out.extend(ch.to_uppercase());
        } else {
            out.push(ch);
        }
        in_word = is_word;
    }
    out
}

#[cfg(test)]
mod tests {
    use super::{CategoryAliases, title_case_category};

    #[test]
    fn aliases_resolve_to_canonical_slugs() {
        let aliases = CategoryAliases::default();
        assert_eq!(aliases.normalize(Some("Location")).as_str(), "locations");
        assert_eq!(aliases.normalize(Some(" NPCS ")).as_str(), "npc");
        assert_eq!(aliases.normalize(Some("story-hooks")).as_str(), "story-hooks");
    }

    #[test]
    fn unknown_passes_through_and_blank_falls_back() {
        let aliases = CategoryAliases::default();
        assert_eq!(aliases.normalize(Some("Bestiary")).as_str(), "bestiary");
        assert_eq!(aliases.normalize(Some("   ")).as_str(), "locations");
        assert_eq!(aliases.normalize(None).as_str(), "locations");
    }

    #[test]
    fn custom_fallback_and_alias() {
        let mut aliases = CategoryAliases::default().with_fallback("items");
        aliases.insert("monster", "bestiary");
        assert_eq!(aliases.normalize(None).as_str(), "items");
        assert_eq!(aliases.normalize(Some("MONSTER")).as_str(), "bestiary");
    }

    #[test]
    fn title_case() {
        assert_eq!(title_case_category("character-hooks"), "Character Hooks");
        assert_eq!(title_case_category("npc"), "Npc");
        assert_eq!(title_case_category("submit-your-own"), "Submit Your Own");
        assert_eq!(title_case_category(""), "Collection");
        assert_eq!(title_case_category("école-ñu"), "éCole ñU");
        assert_eq!(title_case_category("lore_2"), "Lore_2");
    }
}
