use tracing as log;

use crate::config::Config;
use crate::context::ActionContext;
use crate::errors::RunError;
use crate::github::{EventName, GithubClient, IssuesAction, IssuesEvent};

/// The only label the bot reacts to.
pub const BUG_LABEL: &str = "bug";

pub struct Context {
    pub github: GithubClient,
    pub action: ActionContext,
}

/// What a run ended up doing.
#[derive(Debug, PartialEq, Eq)]
pub enum Outcome {
    /// The run was not for us; nothing was read or sent.
    Skipped(SkipReason),
    /// The event was dispatched.
    Handled(Reaction),
}

#[derive(Debug, PartialEq, Eq)]
pub enum SkipReason {
    NotInActions,
    NotAnIssuesEvent(EventName),
}

/// The response chosen for one issues event.
#[derive(Debug, PartialEq, Eq)]
pub enum Reaction {
    Comment { body: String },
    CommentAndRemoveLabel { body: String, label: String },
    /// A label other than [`BUG_LABEL`] was added.
    IgnoreLabel { name: String },
    /// An action outside the handled vocabulary.
    Nothing { action: String },
}

impl Reaction {
    /// Picks the reaction for `event` without touching the network.
    pub fn for_event(action: &ActionContext, event: &IssuesEvent) -> Result<Reaction, RunError> {
        use IssuesAction::*;
        let comment = |body: &str| Reaction::Comment {
            body: body.to_string(),
        };
        Ok(match event.action() {
            Opened => Reaction::Comment {
                body: format!(
                    "Hey there {}! Thanks for trying {}",
                    action.actor, action.action_id
                ),
            },
            Closed => comment("Thanks for cleaning up!"),
            Reponed => comment("Welcome back!"),
            Edited => comment("I'll always have the last word!"),
            Labeled if event.label_name() == BUG_LABEL => Reaction::CommentAndRemoveLabel {
                body: "Really?? A bug? No way!".to_string(),
                label: BUG_LABEL.to_string(),
            },
            Labeled => Reaction::IgnoreLabel {
                name: event.label_name().to_string(),
            },
            unexpected @ (Deleted | Transferred | Pinned | Unpinned | Assigned | Unassigned
            | Unlabeled | Locked | Unlocked | Milestoned | Demilestoned) => {
                return Err(RunError::UnexpectedAction(unexpected.to_string()));
            }
            Unrecognized(action) => Reaction::Nothing { action },
        })
    }

    /// Performs the API calls for this reaction, in order.
    pub async fn apply(&self, ctx: &Context, event: &IssuesEvent) -> Result<(), RunError> {
        let issue = &event.issue;
        match self {
            Reaction::Comment { body } => {
                let comment = issue
                    .post_comment(&ctx.github, body)
                    .await
                    .map_err(RunError::Api)?;
                log::info!("posted comment {} {}", comment.id, comment.html_url);
            }
            Reaction::CommentAndRemoveLabel { body, label } => {
                let comment = issue
                    .post_comment(&ctx.github, body)
                    .await
                    .map_err(RunError::Api)?;
                log::info!("posted comment {} {}", comment.id, comment.html_url);
                issue
                    .remove_label(&ctx.github, label)
                    .await
                    .map_err(RunError::Api)?;
            }
            Reaction::IgnoreLabel { name } => {
                log::warn!("Ignoring label {}", name);
            }
            Reaction::Nothing { action } => {
                log::trace!("no reaction for issue action {:?}", action);
            }
        }
        Ok(())
    }
}

/// Handles one workflow run end to end.
///
/// The order of the checks matters: the payload is only read for `issues`
/// events under Actions, and the token is only checked once the payload
/// decoded.
pub async fn run(action: ActionContext, config: &Config) -> Result<Outcome, RunError> {
    if !action.ci {
        log::debug!("Not in Github action mode, quitting.");
        return Ok(Outcome::Skipped(SkipReason::NotInActions));
    }
    if action.event != EventName::Issue {
        log::debug!("Not an issue action ({}), nothing to do here.", action.event);
        return Ok(Outcome::Skipped(SkipReason::NotAnIssuesEvent(action.event)));
    }

    let event = action.issues_event().map_err(RunError::Decode)?;
    log::info!(
        "handling issue event {} on {}",
        event.raw_action,
        event.issue.global_id()
    );

    let github = config.github_client()?;
    let ctx = Context { github, action };

    let reaction = Reaction::for_event(&ctx.action, &event)?;
    reaction.apply(&ctx, &event).await?;
    Ok(Outcome::Handled(reaction))
}
