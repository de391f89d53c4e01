use std::fmt;

use crate::github::{Issue, Label, User};

/// The name of the event that triggered a workflow run.
///
/// This is the value of `GITHUB_EVENT_NAME` (or the `X-GitHub-Event` header
/// of a webhook delivery).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EventName {
    PullRequest,
    PullRequestReview,
    PullRequestReviewComment,
    IssueComment,
    Issue,
    Push,
    Other(String),
}

impl std::str::FromStr for EventName {
    type Err = std::convert::Infallible;
    fn from_str(s: &str) -> Result<EventName, Self::Err> {
        Ok(match s {
            "pull_request_review" => EventName::PullRequestReview,
            "pull_request_review_comment" => EventName::PullRequestReviewComment,
            "issue_comment" => EventName::IssueComment,
            "pull_request" => EventName::PullRequest,
            "issues" => EventName::Issue,
            "push" => EventName::Push,
            other => EventName::Other(other.to_string()),
        })
    }
}

impl fmt::Display for EventName {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{}",
            match self {
                EventName::PullRequestReview => "pull_request_review",
                EventName::PullRequestReviewComment => "pull_request_review_comment",
                EventName::IssueComment => "issue_comment",
                EventName::Issue => "issues",
                EventName::PullRequest => "pull_request",
                EventName::Push => "push",
                EventName::Other(name) => name,
            }
        )
    }
}

/// Payload of an `issues` event.
///
/// <https://docs.github.com/en/webhooks/webhook-events-and-payloads#issues>
#[derive(Debug, serde::Deserialize)]
pub struct IssuesEvent {
    /// The raw action string; see [`IssuesEvent::action`].
    #[serde(rename = "action")]
    pub raw_action: String,
    pub issue: Issue,
    /// The label that was added, only sent with `labeled`/`unlabeled`.
    #[serde(default)]
    pub label: Option<Label>,
    pub repository: Option<Repository>,
    /// The GitHub user that triggered the event.
    pub sender: Option<User>,
}

impl IssuesEvent {
    pub fn action(&self) -> IssuesAction {
        match self.raw_action.parse() {
            Ok(action) => action,
            Err(never) => match never {},
        }
    }

    /// Name of the label attached to a `labeled` event, or `""` when the
    /// payload carries none.
    pub fn label_name(&self) -> &str {
        self.label.as_ref().map(|l| l.name.as_str()).unwrap_or_default()
    }
}

#[derive(Debug, serde::Deserialize)]
pub struct Repository {
    pub full_name: String,
}

/// The activity an `issues` event reports.
///
/// Parsing never fails: values outside the known vocabulary end up in
/// [`IssuesAction::Unrecognized`].
#[derive(PartialEq, Eq, Debug, Clone)]
pub enum IssuesAction {
    Opened,
    Edited,
    Deleted,
    Transferred,
    Pinned,
    Unpinned,
    Closed,
    /// The literal `reponed`.
    ///
    /// GitHub itself sends `reopened`, which is not matched here and parses
    /// as [`IssuesAction::Unrecognized`].
    Reponed,
    Assigned,
    Unassigned,
    Labeled,
    Unlabeled,
    Locked,
    Unlocked,
    Milestoned,
    Demilestoned,
    Unrecognized(String),
}

impl std::str::FromStr for IssuesAction {
    type Err = std::convert::Infallible;
    fn from_str(s: &str) -> Result<IssuesAction, Self::Err> {
        use IssuesAction::*;
        Ok(match s {
            "opened" => Opened,
            "edited" => Edited,
            "deleted" => Deleted,
            "transferred" => Transferred,
            "pinned" => Pinned,
            "unpinned" => Unpinned,
            "closed" => Closed,
            "reponed" => Reponed,
            "assigned" => Assigned,
            "unassigned" => Unassigned,
            "labeled" => Labeled,
            "unlabeled" => Unlabeled,
            "locked" => Locked,
            "unlocked" => Unlocked,
            "milestoned" => Milestoned,
            "demilestoned" => Demilestoned,
            other => Unrecognized(other.to_string()),
        })
    }
}

impl fmt::Display for IssuesAction {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        use IssuesAction::*;
        f.write_str(match self {
            Opened => "opened",
            Edited => "edited",
            Deleted => "deleted",
            Transferred => "transferred",
            Pinned => "pinned",
            Unpinned => "unpinned",
            Closed => "closed",
            Reponed => "reponed",
            Assigned => "assigned",
            Unassigned => "unassigned",
            Labeled => "labeled",
            Unlabeled => "unlabeled",
            Locked => "locked",
            Unlocked => "unlocked",
            Milestoned => "milestoned",
            Demilestoned => "demilestoned",
            Unrecognized(other) => other,
        })
    }
}
