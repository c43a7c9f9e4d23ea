use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("not logged in; run `taskboard login` or pass --token / set TASKBOARD_TOKEN")]
    MissingToken,
    #[error("username and password are required")]
    MissingCredentials,
    #[error("http client build failed: {0}")]
    HttpClientBuild(String),
    #[error("http request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("{endpoint} failed with HTTP {status}: {message}")]
    Api { endpoint: String, status: u16, message: String },
    #[error("invalid JSON payload: {0}")]
    InvalidJson(#[from] serde_json::Error),
    #[error("token file {}: {source}", path.display())]
    TokenFile { path: PathBuf, source: std::io::Error },
    #[error("invalid token: {0}")]
    Token(#[from] model::TokenError),
    #[error("invalid task: {0}")]
    Form(#[from] model::FormError),
    #[error("nothing to update; pass at least one of --title, --description, --status, --progress")]
    EmptyUpdate,
}

impl CliError {
    /// HTTP status of a service rejection, if this is one.
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Api { status, .. } => Some(*status),
            _ => None,
        }
    }
}
