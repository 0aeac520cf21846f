// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Newsletter signups persisted to a JSON file.

use crate::format::format_utc_rfc3339;
use crate::models::newsletter::{NewsletterSignup, SubscribeRequest};
use chrono::Utc;
use std::path::{Path, PathBuf};
use tokio::sync::Mutex;
use validator::Validate;

/// File-backed signup list.
///
/// Every operation re-reads the file so hand edits are picked up. The mutex
/// serializes read-modify-write cycles within this process, and writes go
/// through a temp file renamed over the list.
pub struct NewsletterStore {
    path: PathBuf,
    lock: Mutex<()>,
}

impl NewsletterStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Add an address to the list.
    pub async fn subscribe(
        &self,
        request: &SubscribeRequest,
    ) -> Result<NewsletterSignup, NewsletterError> {
        let email = validate_request(request)?;

        let _guard = self.lock.lock().await;
        let mut signups = self.read().await?;

        if signups.iter().any(|s| s.email.eq_ignore_ascii_case(&email)) {
            return Err(NewsletterError::AlreadySubscribed);
        }

        let signup = NewsletterSignup {
            email: email.to_lowercase(),
            created_at: format_utc_rfc3339(Utc::now()),
        };
        signups.push(signup.clone());
        self.write(&signups).await?;

        tracing::info!(total = signups.len(), "Newsletter signup added");
        Ok(signup)
    }

    pub async fn count(&self) -> Result<usize, NewsletterError> {
        let _guard = self.lock.lock().await;
        Ok(self.read().await?.len())
    }

    /// A missing file is an empty list. An unreadable or corrupt file is an
    /// error so that it is never overwritten.
    async fn read(&self) -> Result<Vec<NewsletterSignup>, NewsletterError> {
        let data = match tokio::fs::read_to_string(&self.path).await {
            Ok(data) => data,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => {
                tracing::error!(path = %self.path.display(), error = %e, "Failed to read signups");
                return Err(NewsletterError::Io(e.to_string()));
            }
        };

        serde_json::from_str(&data).map_err(|e| {
            tracing::error!(path = %self.path.display(), error = %e, "Signup file is not valid JSON");
            NewsletterError::Corrupt(e.to_string())
        })
    }

    async fn write(&self, signups: &[NewsletterSignup]) -> Result<(), NewsletterError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                tokio::fs::create_dir_all(parent)
                    .await
                    .map_err(|e| NewsletterError::Io(e.to_string()))?;
            }
        }

        let json = serde_json::to_string_pretty(signups)
            .map_err(|e| NewsletterError::Io(e.to_string()))?;

        let tmp = self.temp_path();
        tokio::fs::write(&tmp, json)
            .await
            .map_err(|e| NewsletterError::Io(e.to_string()))?;
        if let Err(e) = tokio::fs::rename(&tmp, &self.path).await {
            let _ = tokio::fs::remove_file(&tmp).await;
            return Err(NewsletterError::Io(e.to_string()));
        }
        Ok(())
    }

    /// Sibling of the signup file, so the rename stays on one filesystem.
    fn temp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_default();
        name.push(".tmp");
        self.path.with_file_name(name)
    }
}

/// Returns the trimmed address.
fn validate_request(request: &SubscribeRequest) -> Result<String, NewsletterError> {
    let email = match request.email.as_deref().map(str::trim) {
        Some(email) if !email.is_empty() => email,
        _ => return Err(NewsletterError::Missing),
    };

    let trimmed = SubscribeRequest {
        email: Some(email.to_string()),
    };
    trimmed
        .validate()
        .map_err(|_| NewsletterError::InvalidFormat)?;

    // Require a dotted domain; bare hosts like `user@localhost` are rejected
    let dotted = email
        .rsplit_once('@')
        .is_some_and(|(_, domain)| domain.contains('.') && !domain.ends_with('.'));
    if !dotted {
        return Err(NewsletterError::InvalidFormat);
    }

    Ok(email.to_string())
}

/// Newsletter failures.
#[derive(Debug, thiserror::Error)]
pub enum NewsletterError {
    #[error("Email is required")]
    Missing,

    #[error("Invalid email format")]
    InvalidFormat,

    #[error("Email already subscribed")]
    AlreadySubscribed,

    #[error("Signup file I/O failed: {0}")]
    Io(String),

    #[error("Signup file is corrupt: {0}")]
    Corrupt(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(email: &str) -> SubscribeRequest {
        SubscribeRequest {
            email: Some(email.to_string()),
        }
    }

    #[tokio::test]
    async fn test_subscribe_stores_lowercased_email() {
        let dir = tempfile::tempdir().unwrap();
        let store = NewsletterStore::new(dir.path().join("signups.json"));

        let signup = store.subscribe(&request("Parent@Example.com")).await.unwrap();
        assert_eq!(signup.email, "parent@example.com");
        assert_eq!(store.count().await.unwrap(), 1);

        let saved = std::fs::read_to_string(store.path()).unwrap();
        assert!(saved.contains("\"createdAt\""));
        assert!(saved.contains('\n'));
    }

    #[tokio::test]
    async fn test_duplicate_is_case_insensitive() {
        let dir = tempfile::tempdir().unwrap();
        let store = NewsletterStore::new(dir.path().join("signups.json"));

        store.subscribe(&request("family@example.com")).await.unwrap();
        let err = store
            .subscribe(&request("FAMILY@example.com"))
            .await
            .unwrap_err();

        assert!(matches!(err, NewsletterError::AlreadySubscribed));
        assert_eq!(store.count().await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_rejects_missing_and_malformed() {
        let dir = tempfile::tempdir().unwrap();
        let store = NewsletterStore::new(dir.path().join("signups.json"));

        let missing = SubscribeRequest { email: None };
        assert!(matches!(
            store.subscribe(&missing).await,
            Err(NewsletterError::Missing)
        ));

        for bad in ["not-an-email", "a@b", "two words@example.com"] {
            assert!(
                matches!(
                    store.subscribe(&request(bad)).await,
                    Err(NewsletterError::InvalidFormat)
                ),
                "{} should be rejected",
                bad
            );
        }
        assert_eq!(store.count().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_missing_file_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = NewsletterStore::new(dir.path().join("nested").join("signups.json"));

        assert_eq!(store.count().await.unwrap(), 0);
        store.subscribe(&request("new@example.com")).await.unwrap();
        assert_eq!(store.count().await.unwrap(), 1);
        assert!(!dir.path().join("nested").join("signups.json.tmp").exists());
    }

    #[tokio::test]
    async fn test_corrupt_file_is_preserved() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("signups.json");
        let truncated = r#"[{"email": "a@b.com", "createdAt": "2024-01-01T00:00:00.000Z"}, {"email": "c@d.com""#;
        std::fs::write(&path, truncated).unwrap();

        let store = NewsletterStore::new(&path);
        assert!(matches!(
            store.count().await,
            Err(NewsletterError::Corrupt(_))
        ));
        assert!(matches!(
            store.subscribe(&request("new@example.com")).await,
            Err(NewsletterError::Corrupt(_))
        ));

        assert_eq!(std::fs::read_to_string(&path).unwrap(), truncated);
    }
}
