//! Built-in dhikr catalog
//!
//! The phrases offered on the catalog screen, grouped by intention. Starting a
//! session from a catalog phrase seeds the target with its suggested count.

use serde::Serialize;

/// A dhikr phrase with its meaning and suggested repetition count
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Phrase {
    /// The phrase as recited (used as the favorites key)
    pub text: String,
    /// English meaning
    pub meaning: String,
    /// Why one would recite it
    pub reason: String,
    /// Target to seed when no target is set yet
    pub suggested_count: u32,
}

impl Phrase {
    /// A phrase with only text and a suggested count
    pub fn new(text: impl Into<String>, suggested_count: u32) -> Self {
        Self {
            text: text.into(),
            meaning: String::new(),
            reason: String::new(),
            suggested_count,
        }
    }

    fn described(text: &str, meaning: &str, reason: &str, suggested_count: u32) -> Self {
        Self {
            text: text.to_string(),
            meaning: meaning.to_string(),
            reason: reason.to_string(),
            suggested_count,
        }
    }
}

/// A titled group of phrases
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CatalogCategory {
    pub title: String,
    pub items: Vec<Phrase>,
}

/// The catalog shipped with the app
pub fn builtin_catalog() -> Vec<CatalogCategory> {
    vec![
        CatalogCategory {
            title: "For Peace & Calm".to_string(),
            items: vec![
                Phrase::described(
                    "سبحان الله",
                    "Glory be to Allah",
                    "Clear the mind and gain peace.",
                    100,
                ),
                Phrase::described(
                    "الحمد لله",
                    "All praise is due to Allah",
                    "Cultivate gratitude.",
                    100,
                ),
            ],
        },
        CatalogCategory {
            title: "For Forgiveness".to_string(),
            items: vec![Phrase::described(
                "أستغفر الله",
                "I seek forgiveness from Allah",
                "Cleanse the soul and receive mercy.",
                100,
            )],
        },
        CatalogCategory {
            title: "For Gratitude".to_string(),
            items: vec![Phrase::described(
                "سبحان الله وبحمده",
                "Glory be to Allah and Praise be to Him",
                "Magnifies blessings.",
                100,
            )],
        },
        CatalogCategory {
            title: "For Protection".to_string(),
            items: vec![Phrase::described(
                "بسم الله الذي لا يضر",
                "In the name of Allah who does not harm",
                "A prayer for protection.",
                3,
            )],
        },
    ]
}

/// Look up a catalog phrase by category and item position
pub fn find_phrase(category: usize, item: usize) -> Option<Phrase> {
    builtin_catalog()
        .into_iter()
        .nth(category)
        .and_then(|c| c.items.into_iter().nth(item))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_shape() {
        let catalog = builtin_catalog();
        assert_eq!(catalog.len(), 4);
        assert_eq!(catalog[0].items.len(), 2);
        assert!(catalog
            .iter()
            .flat_map(|c| c.items.iter())
            .all(|p| p.suggested_count > 0));
    }

    #[test]
    fn test_find_phrase() {
        let protection = find_phrase(3, 0).unwrap();
        assert_eq!(protection.suggested_count, 3);
        assert!(find_phrase(3, 1).is_none());
        assert!(find_phrase(9, 0).is_none());
    }
}
