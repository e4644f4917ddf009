pub mod form;

pub use form::{ClientError, SubmissionForm, DEFAULT_ENDPOINT};
