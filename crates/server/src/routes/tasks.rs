use axum::extract::State;
use axum::Json;
use orchestrator::EvaluationPayload;
use pagepress_core::TaskRequest;
use serde::Serialize;
use tracing::info;
use utoipa::ToSchema;

use crate::error::AppError;
use crate::state::AppState;

#[derive(Debug, Serialize, ToSchema)]
pub struct TaskAck {
    pub status: String,
    pub round: u32,
    pub repo: String,
}

#[utoipa::path(
    post,
    path = "/api/tasks/handle",
    request_body = TaskRequest,
    responses(
        (status = 200, description = "Round completed", body = TaskAck),
        (status = 400, description = "Unsupported round or missing field"),
        (status = 403, description = "Invalid secret"),
        (status = 500, description = "Round failed")
    ),
    tag = "tasks"
)]
pub async fn handle_task(
    State(state): State<AppState>,
    Json(request): Json<TaskRequest>,
) -> Result<Json<TaskAck>, AppError> {
    info!(
        "Received task {} round {} (nonce {})",
        request.task, request.round, request.nonce
    );

    // Everything below has side effects; the gate comes first.
    if !state.secret_matches(&request.secret) {
        return Err(AppError::Unauthorized("Invalid secret".to_string()));
    }

    if request.round != 1 && request.round != 2 {
        return Err(AppError::BadRequest("Unsupported round".to_string()));
    }

    let evaluation_url = request
        .evaluation_url
        .as_deref()
        .ok_or_else(|| AppError::BadRequest("evaluation_url is required".to_string()))?;
    let brief = request
        .brief
        .as_deref()
        .ok_or_else(|| AppError::BadRequest("brief is required".to_string()))?;

    let deployment = match request.round {
        1 => {
            state
                .deployer
                .run(&request.task, &request.nonce, brief)
                .await?
        }
        _ => {
            state
                .patcher
                .run(&request.task, &request.nonce, brief)
                .await?
        }
    };

    let payload = EvaluationPayload::new(&request, &deployment);
    state.notifier.notify(evaluation_url, &payload).await?;

    Ok(Json(TaskAck {
        status: "ok".to_string(),
        round: request.round,
        repo: deployment.repo_name,
    }))
}
