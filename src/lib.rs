//! A GitHub Action that answers `issues` events with comments.

use anyhow::Context;

pub mod config;
pub mod context;
pub mod errors;
pub mod github;
pub mod handlers;
pub mod logger;


pub use config::Config;
pub use context::ActionContext;
pub use errors::RunError;
pub use handlers::{Outcome, Reaction, SkipReason, run};

pub fn deserialize_payload<T: serde::de::DeserializeOwned>(v: &str) -> anyhow::Result<T> {
    let mut deserializer = serde_json::Deserializer::from_str(v);
    let res: Result<T, _> = serde_path_to_error::deserialize(&mut deserializer);
    match res {
        Ok(r) => Ok(r),
        Err(e) => {
            let ctx = format!("at {}", e.path());
            Err(e.into_inner()).context(ctx)
        }
    }
}
