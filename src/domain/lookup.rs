//! Classification of free-form lookup terms.

use uuid::Uuid;

/// What a lookup term refers to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LookupTerm {
    /// Exact primary key
    Id(Uuid),
    /// Title (case-insensitive) or slug. `title` is the raw term; storage
    /// upper-cases both sides so its own case folding applies to each.
    Text { title: String, slug: String },
}

impl LookupTerm {
    /// Only the canonical hyphenated form counts as an id; anything else is text.
    pub fn classify(term: &str) -> Self {
        if term.len() == 36
            && let Ok(id) = Uuid::try_parse(term)
        {
            return LookupTerm::Id(id);
        }

        LookupTerm::Text {
            title: term.to_string(),
            slug: term.to_lowercase(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hyphenated_uuid_is_id() {
        let id = Uuid::new_v4();
        assert_eq!(LookupTerm::classify(&id.to_string()), LookupTerm::Id(id));
    }

    #[test]
    fn test_other_uuid_forms_are_text() {
        let id = Uuid::new_v4();
        let simple = id.simple().to_string();
        assert!(matches!(
            LookupTerm::classify(&simple),
            LookupTerm::Text { .. }
        ));
    }

    #[test]
    fn test_text_term_keeps_title_and_lowers_slug() {
        assert_eq!(
            LookupTerm::classify("Kids Tee"),
            LookupTerm::Text {
                title: "Kids Tee".to_string(),
                slug: "kids tee".to_string(),
            }
        );
    }
}
