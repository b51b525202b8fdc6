use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Result of one completed round, forwarded to the evaluator.
///
/// Constructed fresh per round and never persisted; the repository on the
/// host is the only durable state.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Deployment {
    pub repo_name: String,
    pub repo_url: String,
    pub commit_sha: String,
    pub pages_url: String,
}
