use crate::models::{SubmitComment, SubmitResponse};

pub const DEFAULT_ENDPOINT: &str = "http://localhost:3001/test";

#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    #[error("Server error: {}", .0.as_u16())]
    Status(reqwest::StatusCode),

    #[error("{0}")]
    Request(#[from] reqwest::Error),
}

/// Client-side state of the comment form.
///
/// `pending` is true only while a submission is in flight; `error` holds the
/// message of the last failed submission.
#[derive(Debug, Clone)]
pub struct SubmissionForm {
    pub username: String,
    pub comment: String,
    pending: bool,
    error: Option<String>,
    endpoint: String,
    client: reqwest::Client,
}

impl SubmissionForm {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self::with_client(endpoint, reqwest::Client::new())
    }

    pub fn with_client(endpoint: impl Into<String>, client: reqwest::Client) -> Self {
        Self {
            username: String::new(),
            comment: String::new(),
            pending: false,
            error: None,
            endpoint: endpoint.into(),
            client,
        }
    }

    pub fn set_username(&mut self, username: impl Into<String>) {
        self.username = username.into();
    }

    pub fn set_comment(&mut self, comment: impl Into<String>) {
        self.comment = comment.into();
    }

    pub fn is_pending(&self) -> bool {
        self.pending
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Posts the current fields to the endpoint.
    ///
    /// On success both fields are cleared and the server's answer is returned.
    /// On failure the fields are kept and the message is stored in `error`.
    pub async fn submit(&mut self) -> Option<SubmitResponse> {
        self.error = None;

        let payload = SubmitComment {
            username: self.username.clone(),
            comment: self.comment.clone(),
        };

        // Reset on drop, including when this future is cancelled.
        let _pending = PendingGuard::set(&mut self.pending);
        let outcome = send(&self.client, &self.endpoint, &payload).await;

        match outcome {
            Ok(response) => {
                tracing::debug!("Server response: {:?}", response);
                self.username.clear();
                self.comment.clear();
                Some(response)
            }
            Err(e) => {
                tracing::error!("Submission failed: {}", e);
                self.error = Some(e.to_string());
                None
            }
        }
    }
}

struct PendingGuard<'a>(&'a mut bool);

impl<'a> PendingGuard<'a> {
    fn set(flag: &'a mut bool) -> Self {
        *flag = true;
        Self(flag)
    }
}

impl Drop for PendingGuard<'_> {
    fn drop(&mut self) {
        *self.0 = false;
    }
}

async fn send(
    client: &reqwest::Client,
    endpoint: &str,
    payload: &SubmitComment,
) -> Result<SubmitResponse, ClientError> {
    let response = client.post(endpoint).json(payload).send().await?;

    if !response.status().is_success() {
        return Err(ClientError::Status(response.status()));
    }

    Ok(response.json::<SubmitResponse>().await?)
}

impl Default for SubmissionForm {
    fn default() -> Self {
        Self::new(DEFAULT_ENDPOINT)
    }
}
