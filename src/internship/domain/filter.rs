//! Browse filter for open internships.

use super::Internship;

/// Student-side search over open postings.
///
/// `search` matches the title or the role label and `location` matches the
/// location; both are case-insensitive substring matches. Blank terms are
/// ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InternshipFilter {
    search: Option<String>,
    location: Option<String>,
}

impl InternshipFilter {
    /// Creates a filter matching every open posting.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the title or role search term.
    #[must_use]
    pub fn with_search(mut self, search: impl AsRef<str>) -> Self {
        self.search = normalized_term(search.as_ref());
        self
    }

    /// Sets the location search term.
    #[must_use]
    pub fn with_location(mut self, location: impl AsRef<str>) -> Self {
        self.location = normalized_term(location.as_ref());
        self
    }

    /// Returns the lower-cased search term, if any.
    #[must_use]
    pub fn search(&self) -> Option<&str> {
        self.search.as_deref()
    }

    /// Returns the lower-cased location term, if any.
    #[must_use]
    pub fn location(&self) -> Option<&str> {
        self.location.as_deref()
    }

    /// Returns whether `internship` satisfies both terms.
    ///
    /// Status is not considered here; repositories restrict browsing to open
    /// postings.
    #[must_use]
    pub fn matches(&self, internship: &Internship) -> bool {
        let search_matches = self.search().is_none_or(|term| {
            contains_folded(internship.title(), term) || contains_folded(internship.role(), term)
        });
        let location_matches = self
            .location()
            .is_none_or(|term| contains_folded(internship.location(), term));
        search_matches && location_matches
    }

    /// Returns an `ILIKE` pattern for `term` with wildcard characters
    /// escaped.
    #[must_use]
    pub fn like_pattern(term: &str) -> String {
        let mut pattern = String::with_capacity(term.len() + 2);
        pattern.push('%');
        for character in term.chars() {
            if matches!(character, '%' | '_' | '\\') {
                pattern.push('\\');
            }
            pattern.push(character);
        }
        pattern.push('%');
        pattern
    }
}

fn normalized_term(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_lowercase())
}

fn contains_folded(haystack: &str, folded_term: &str) -> bool {
    haystack.to_lowercase().contains(folded_term)
}
