//! Newsletter signup records.

use serde::{Deserialize, Serialize};
use validator::Validate;

/// A stored signup. Emails are stored lowercased.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewsletterSignup {
    pub email: String,
    /// RFC 3339 timestamp
    pub created_at: String,
}

/// Signup request body.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct SubscribeRequest {
    #[validate(email)]
    pub email: Option<String>,
}
