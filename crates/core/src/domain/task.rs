use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Inbound task payload posted by the evaluator.
///
/// `round` defaults to 1 when absent. `brief` is only meaningful for
/// round 1; `email` may be missing and is forwarded as-is.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct TaskRequest {
    pub secret: String,
    #[serde(default = "default_round")]
    pub round: u32,
    pub task: String,
    pub nonce: String,
    #[serde(default)]
    pub brief: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub evaluation_url: Option<String>,
}

fn default_round() -> u32 {
    1
}

impl TaskRequest {
    /// Deterministic repository name for this task.
    pub fn project_name(&self) -> String {
        project_name(&self.task, &self.nonce)
    }
}

/// Repository name derived from task and nonce.
///
/// Must be stable across rounds: round 2 locates the repository that
/// round 1 created by recomputing this.
pub fn project_name(task: &str, nonce: &str) -> String {
    format!("{}_{}", task, nonce).replace(' ', "-")
}
