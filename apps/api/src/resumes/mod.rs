// Resume upload: multipart intake, extraction + tagging, templated feedback.

pub mod handlers;
pub mod intake;
