//! Diesel schema for task persistence.

diesel::table! {
    /// Tasks assigned to accepted interns.
    tasks (id) {
        /// Task identifier.
        id -> Uuid,
        /// Internship the task belongs to.
        internship_id -> Uuid,
        /// Assigned student.
        student_id -> Uuid,
        /// Task title.
        title -> Text,
        /// Task description.
        description -> Text,
        /// Calendar due date.
        due_date -> Date,
        /// Task status.
        #[max_length = 20]
        status -> Varchar,
        /// Submitted deliverable link.
        submission_link -> Nullable<Text>,
        /// Reviewer feedback.
        feedback -> Nullable<Text>,
        /// Creation timestamp.
        created_at -> Timestamptz,
        /// Last update timestamp.
        updated_at -> Timestamptz,
    }
}
