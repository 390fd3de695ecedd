//! Comma-separated skill list handling shared by profiles and postings.

/// Splits a comma-separated skill list, trimming entries and dropping blanks.
#[must_use]
pub fn parse_skills(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|skill| !skill.is_empty())
        .map(str::to_owned)
        .collect()
}

/// Joins skills back into the comma-separated form used by edit forms.
#[must_use]
pub fn join_skills(skills: &[String]) -> String {
    skills.join(", ")
}
