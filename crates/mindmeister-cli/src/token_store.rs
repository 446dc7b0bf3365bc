/*
[INPUT]:  Auth tokens returned by the frob exchange
[OUTPUT]: Token persisted as JSON between CLI runs
[POS]:    Persistence layer - auth token storage
[UPDATE]: When the stored token format changes
*/

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tokio::fs;
use tracing::debug;

use mindmeister_client::AuthToken;

/// Token data persisted after a successful callback
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoredToken {
    pub token: String,
    #[serde(default)]
    pub perms: Option<String>,
    #[serde(default)]
    pub username: Option<String>,
    pub obtained_at: DateTime<Utc>,
}

impl StoredToken {
    pub fn from_auth(auth: &AuthToken) -> Self {
        Self {
            token: auth.token.clone(),
            perms: auth.perms.clone(),
            username: auth.user.as_ref().and_then(|user| user.username.clone()),
            obtained_at: Utc::now(),
        }
    }
}

/// JSON file holding at most one token
#[derive(Debug, Clone)]
pub struct TokenStore {
    path: PathBuf,
}

impl TokenStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub async fn load(&self) -> Result<Option<StoredToken>> {
        if !self.path.exists() {
            return Ok(None);
        }
        let content = fs::read_to_string(&self.path)
            .await
            .with_context(|| format!("read token file {}", self.path.display()))?;
        let token = serde_json::from_str(&content)
            .with_context(|| format!("parse token file {}", self.path.display()))?;
        Ok(Some(token))
    }

    pub async fn save(&self, token: &StoredToken) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).await?;
        }
        let content = serde_json::to_string_pretty(token)?;
        fs::write(&self.path, content)
            .await
            .with_context(|| format!("write token file {}", self.path.display()))?;
        debug!(path = %self.path.display(), "token saved");
        Ok(())
    }

    /// Remove the stored token, returning whether one existed
    pub async fn clear(&self) -> Result<bool> {
        if !self.path.exists() {
            return Ok(false);
        }
        fs::remove_file(&self.path).await?;
        Ok(true)
    }
}
