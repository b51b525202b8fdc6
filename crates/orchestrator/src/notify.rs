use pagepress_core::{Deployment, TaskRequest};
use reqwest::Client;
use serde::Serialize;
use tracing::{info, warn};

use crate::error::Result;

/// Fixed-shape result notification posted to the caller-supplied
/// evaluation URL after a successful round.
#[derive(Debug, Clone, Serialize)]
pub struct EvaluationPayload {
    pub email: Option<String>,
    pub task: String,
    pub round: u32,
    pub nonce: String,
    pub repo_url: String,
    pub commit_sha: String,
    pub pages_url: String,
}

impl EvaluationPayload {
    pub fn new(request: &TaskRequest, deployment: &Deployment) -> Self {
        Self {
            email: request.email.clone(),
            task: request.task.clone(),
            round: request.round,
            nonce: request.nonce.clone(),
            repo_url: deployment.repo_url.clone(),
            commit_sha: deployment.commit_sha.clone(),
            pages_url: deployment.pages_url.clone(),
        }
    }
}

#[derive(Clone, Default)]
pub struct EvaluationNotifier {
    client: Client,
}

impl EvaluationNotifier {
    pub fn new() -> Self {
        Self {
            client: Client::new(),
        }
    }

    /// POST the payload once. The evaluator's status code is logged and
    /// otherwise ignored; only a transport failure is an error. Nothing is
    /// retried.
    pub async fn notify(&self, url: &str, payload: &EvaluationPayload) -> Result<()> {
        info!("Posting result to evaluation URL {}", url);

        let response = self.client.post(url).json(payload).send().await?;

        let status = response.status();
        if status.is_success() {
            info!("Evaluation server replied: {}", status);
        } else {
            warn!("Evaluation server replied: {}", status);
        }
        Ok(())
    }
}
