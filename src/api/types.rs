use serde::{Deserialize, Serialize};

/// The sole stored entity.
///
/// (`owner`, `title`) is the unique identity: `owner` is the partition key,
/// `title` the sort key within the partition.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Review {
    pub owner: String,
    pub title: String,
    pub author: String,
    pub text: String,
}

/// Body for create and update requests.
///
/// Fields default to empty strings so that an absent field reaches the
/// validator (which answers 400) instead of being rejected by serde.
#[derive(Debug, Deserialize)]
pub struct ReviewPayload {
    #[serde(default)]
    pub owner: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub author: String,
    #[serde(default)]
    pub text: String,
}

impl ReviewPayload {
    pub fn into_review(self) -> Review {
        Review {
            owner: self.owner,
            title: self.title,
            author: self.author,
            text: self.text,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct ListParams {
    #[serde(default)]
    pub owner: String,
}

#[derive(Debug, Deserialize)]
pub struct DeleteParams {
    #[serde(default)]
    pub owner: String,
    #[serde(default)]
    pub title: String,
}

#[derive(Debug, Deserialize)]
pub struct GenerateParams {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub author: String,
}

#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: &str) -> Self {
        Self {
            message: message.to_string(),
        }
    }
}

/// Success body of the generation endpoint.
#[derive(Debug, Serialize)]
pub struct GeneratedText {
    pub text: String,
}

/// Uniform error body. The message is a fixed category phrase; backend
/// detail stays in the logs.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: String,
}
