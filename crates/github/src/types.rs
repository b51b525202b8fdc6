use serde::{Deserialize, Serialize};

/// Body for `POST /user/repos`.
#[derive(Debug, Serialize)]
pub struct CreateRepoRequest {
    pub name: String,
    pub private: bool,
    pub auto_init: bool,
    pub license_template: String,
}

impl CreateRepoRequest {
    pub fn public_mit(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            private: false,
            auto_init: true,
            license_template: "mit".to_string(),
        }
    }
}

/// Body for `PUT /repos/{owner}/{repo}/contents/{path}`.
///
/// `sha` must be the current blob sha when overwriting an existing file,
/// and absent when creating a new one.
#[derive(Debug, Serialize)]
pub struct PutFileRequest {
    pub message: String,
    pub content: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sha: Option<String>,
}

/// Subset of `GET /repos/{owner}/{repo}/contents/{path}` we care about.
#[derive(Debug, Deserialize)]
pub struct ContentsResponse {
    pub sha: String,
}

/// Body for `POST /repos/{owner}/{repo}/pages`.
#[derive(Debug, Serialize)]
pub struct PagesRequest {
    pub build_type: String,
    pub source: PagesSource,
}

#[derive(Debug, Serialize)]
pub struct PagesSource {
    pub branch: String,
    pub path: String,
}

impl PagesRequest {
    pub fn legacy_root(branch: impl Into<String>) -> Self {
        Self {
            build_type: "legacy".to_string(),
            source: PagesSource {
                branch: branch.into(),
                path: "/".to_string(),
            },
        }
    }
}

/// Subset of `GET /repos/{owner}/{repo}/commits/{ref}`.
#[derive(Debug, Deserialize)]
pub struct CommitResponse {
    pub sha: String,
}
