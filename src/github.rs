pub(crate) mod client;
mod event;
pub(crate) mod issue;
pub(crate) mod utils;

pub use client::{DEFAULT_API_URL, GithubClient};
pub use event::*;
pub use issue::*;
