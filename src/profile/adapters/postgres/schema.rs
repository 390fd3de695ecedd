//! Diesel schema for profile persistence.

diesel::table! {
    /// Identity-linked user profiles.
    profiles (id) {
        /// Profile identifier, shared with the identity provider.
        id -> Uuid,
        /// Role chosen at sign-up.
        #[max_length = 20]
        role -> Varchar,
        /// Display name.
        full_name -> Text,
        /// Contact email.
        email -> Text,
        /// Optional phone number.
        phone -> Nullable<Text>,
        /// Optional location.
        location -> Nullable<Text>,
        /// Optional resume link.
        resume_url -> Nullable<Text>,
        /// Optional portfolio link.
        portfolio_url -> Nullable<Text>,
        /// Declared skills.
        skills -> Array<Text>,
        /// Company name for company profiles.
        company_name -> Nullable<Text>,
        /// Creation timestamp.
        created_at -> Timestamptz,
        /// Last update timestamp.
        updated_at -> Timestamptz,
    }
}
