//! Diesel schema for internship persistence.

diesel::table! {
    /// Internship postings.
    internships (id) {
        /// Internship identifier.
        id -> Uuid,
        /// Owning company profile.
        company_id -> Uuid,
        /// Posting title.
        title -> Text,
        /// Role label.
        role -> Text,
        /// Posting description.
        description -> Text,
        /// Location, empty when unspecified.
        location -> Text,
        /// Duration label.
        duration -> Text,
        /// Stipend label.
        stipend -> Text,
        /// Required skills.
        skills_required -> Array<Text>,
        /// Posting status.
        #[max_length = 20]
        status -> Varchar,
        /// Creation timestamp.
        created_at -> Timestamptz,
        /// Last update timestamp.
        updated_at -> Timestamptz,
    }
}
