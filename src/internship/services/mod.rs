//! Application services for internship posting and browsing.

mod posting;

pub use posting::PostingService;
