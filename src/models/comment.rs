use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A comment as persisted in the store, keyed by `userid`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct CommentRecord {
    pub userid: String,
    pub comment: String,
    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
}

impl CommentRecord {
    /// Builds the record for a validated submission, stamped with the current time.
    pub fn from_submission(input: &NewComment) -> Self {
        Self {
            userid: input.username.clone(),
            comment: input.comment.clone(),
            created_at: Utc::now(),
        }
    }
}

/// A submission that passed validation: both fields are non-empty strings.
///
/// Only `validation::validate_submission` constructs this type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewComment {
    pub(crate) username: String,
    pub(crate) comment: String,
}

impl NewComment {
    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn comment(&self) -> &str {
        &self.comment
    }
}

/// Body sent by the submission form.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubmitComment {
    pub username: String,
    pub comment: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommentData {
    pub username: String,
    pub comment: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmitResponse {
    pub message: String,
    pub data: CommentData,
}

impl From<NewComment> for SubmitResponse {
    fn from(c: NewComment) -> Self {
        Self {
            message: "Received and saved!".to_string(),
            data: CommentData {
                username: c.username,
                comment: c.comment,
            },
        }
    }
}
