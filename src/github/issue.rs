use anyhow::Context as _;
use std::fmt;
use tracing as log;

use crate::github::GithubClient;
use crate::github::utils::opt_string;

/// An issue, as embedded in an `issues` webhook payload.
///
/// Only the fields the bot reads are modelled; everything else in the
/// payload is ignored.
#[derive(Debug, serde::Deserialize)]
pub struct Issue {
    pub number: u64,
    #[serde(default)]
    pub title: String,
    #[serde(default, deserialize_with = "opt_string")]
    pub body: String,
    /// The API URL of the repository owning this issue.
    ///
    /// Example: `https://api.github.com/repos/octocat/Hello-World`
    pub repository_url: String,
    #[serde(default)]
    pub html_url: String,
    // Issue author (not necessarily the user performing the `action`)
    pub user: Option<User>,
    #[serde(default)]
    pub labels: Vec<Label>,
}

#[derive(PartialEq, Eq, Debug, Clone, Ord, PartialOrd, serde::Deserialize)]
pub struct Label {
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, serde::Deserialize)]
pub struct User {
    pub login: String,
    pub id: u64,
}

/// The `owner/name` pair an issue lives in.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct IssueRepository {
    pub organization: String,
    pub repository: String,
}

impl fmt::Display for IssueRepository {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.organization, self.repository)
    }
}

impl IssueRepository {
    fn url(&self, client: &GithubClient) -> String {
        format!(
            "{}/repos/{}/{}",
            client.api_url, self.organization, self.repository
        )
    }
}

impl Issue {
    /// Extracts the repository from `repository_url`.
    ///
    /// Only the last two path segments are used, so the host may differ from
    /// the one the client talks to (GitHub Enterprise, test servers).
    pub fn repository(&self) -> anyhow::Result<IssueRepository> {
        // https://api.github.com/repos/rust-lang/rust
        let url = url::Url::parse(&self.repository_url)
            .with_context(|| format!("invalid repository_url {:?}", self.repository_url))?;
        let mut segments = url
            .path_segments()
            .with_context(|| format!("repository_url {} has no path", self.repository_url))?
            .filter(|s| !s.is_empty());
        let mut tail = Vec::with_capacity(2);
        while let Some(segment) = segments.next_back() {
            tail.push(segment);
            if tail.len() == 2 {
                break;
            }
        }
        let [repository, organization] = tail[..] else {
            anyhow::bail!("repository_url {} is missing owner/name", self.repository_url);
        };
        Ok(IssueRepository {
            organization: organization.into(),
            repository: repository.into(),
        })
    }

    pub fn global_id(&self) -> String {
        match self.repository() {
            Ok(repo) => format!("{}#{}", repo, self.number),
            Err(_) => format!("#{}", self.number),
        }
    }
}

// Comments

#[derive(Debug, serde::Deserialize)]
pub struct Comment {
    pub id: u64,
    #[serde(default, deserialize_with = "opt_string")]
    pub body: String,
    #[serde(default)]
    pub html_url: String,
}

impl Issue {
    pub async fn post_comment(&self, client: &GithubClient, body: &str) -> anyhow::Result<Comment> {
        #[derive(serde::Serialize)]
        struct PostComment<'a> {
            body: &'a str,
        }
        // POST /repos/:owner/:repo/issues/:number/comments
        let comments_url = format!(
            "{repo_url}/issues/{number}/comments",
            repo_url = self.repository()?.url(client),
            number = self.number,
        );
        log::info!("post_comment on {}", self.global_id());
        let comment = client
            .json(client.post(&comments_url).json(&PostComment { body }))
            .await
            .context("failed to post comment")?;
        Ok(comment)
    }

    /// Removes a single label from this issue.
    ///
    /// The label is removed even if the payload does not list it, since the
    /// payload may be stale by the time the request is made.
    pub async fn remove_label(&self, client: &GithubClient, label: &str) -> anyhow::Result<()> {
        log::info!("remove_label from {}: {:?}", self.global_id(), label);
        // DELETE /repos/:owner/:repo/issues/:number/labels/{name}
        let url = format!(
            "{repo_url}/issues/{number}/labels/{name}",
            repo_url = self.repository()?.url(client),
            number = self.number,
            name = label,
        );

        client
            .send_req(client.delete(&url))
            .await
            .with_context(|| format!("failed to remove label {label:?}"))?;

        Ok(())
    }
}
