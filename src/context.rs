//! The GitHub Actions execution context.
//!
//! Actions describes the triggering run through environment variables; this
//! module captures them once into an [`ActionContext`] value that the rest of
//! the crate receives explicitly.

use anyhow::Context as _;
use std::path::PathBuf;

use crate::deserialize_payload;
use crate::github::{EventName, IssuesEvent};

/// Snapshot of the `GITHUB_*` variables describing the current run.
#[derive(Debug, Clone)]
pub struct ActionContext {
    /// `true` when running inside a GitHub Actions job.
    pub ci: bool,
    /// The event that triggered the workflow (`GITHUB_EVENT_NAME`).
    pub event: EventName,
    /// Path of the file holding the full webhook payload (`GITHUB_EVENT_PATH`).
    pub event_path: Option<PathBuf>,
    /// Login of the user that triggered the run (`GITHUB_ACTOR`).
    pub actor: String,
    /// Identifier of the running step (`GITHUB_ACTION`).
    pub action_id: String,
    /// `owner/name` of the repository (`GITHUB_REPOSITORY`).
    pub repository: Option<String>,
    pub workspace: Option<PathBuf>,
}

impl ActionContext {
    pub fn from_env() -> Self {
        Self::from_vars(|name| std::env::var(name).ok())
    }

    /// Builds the context from an arbitrary variable lookup.
    ///
    /// Empty values are treated as unset.
    pub fn from_vars<F>(var: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |name: &str| var(name).filter(|v| !v.is_empty());
        let event = match var("GITHUB_EVENT_NAME") {
            Some(name) => match name.parse::<EventName>() {
                Ok(event) => event,
                Err(never) => match never {},
            },
            None => EventName::Other(String::new()),
        };
        ActionContext {
            ci: var("GITHUB_ACTIONS").as_deref() == Some("true"),
            event,
            event_path: var("GITHUB_EVENT_PATH").map(PathBuf::from),
            actor: var("GITHUB_ACTOR").unwrap_or_default(),
            action_id: var("GITHUB_ACTION").unwrap_or_default(),
            repository: var("GITHUB_REPOSITORY"),
            workspace: var("GITHUB_WORKSPACE").map(PathBuf::from),
        }
    }

    /// Reads and decodes the payload of an `issues` event.
    pub fn issues_event(&self) -> anyhow::Result<IssuesEvent> {
        let path = self
            .event_path
            .as_ref()
            .context("GITHUB_EVENT_PATH is not set")?;
        let payload = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read event payload {}", path.display()))?;
        deserialize_payload(&payload).context("IssuesEvent failed to deserialize")
    }
}
