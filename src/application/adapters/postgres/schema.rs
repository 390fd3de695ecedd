//! Diesel schema for application persistence.

diesel::table! {
    /// Student applications, unique per internship and student.
    applications (id) {
        /// Application identifier.
        id -> Uuid,
        /// Internship applied to.
        internship_id -> Uuid,
        /// Applying student.
        student_id -> Uuid,
        /// Review status.
        #[max_length = 20]
        status -> Varchar,
        /// Submission timestamp.
        applied_at -> Timestamptz,
        /// Last update timestamp.
        updated_at -> Timestamptz,
    }
}
