/// Library Error Type
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Reqwest HTTP Error
    #[error(transparent)]
    Reqwest(#[from] reqwest::Error),

    /// A custom transport failed
    #[error("transport error: {0}")]
    Transport(Box<dyn std::error::Error + Send + Sync + 'static>),

    /// The response body was not valid json, or did not match the payload type
    #[error(transparent)]
    Json(#[from] serde_json::Error),

    /// The api responded with an error envelope
    #[error(transparent)]
    Api(#[from] ApiError),

    /// The request was rejected locally, before it was sent
    #[error(transparent)]
    Config(#[from] ConfigError),
}

impl Error {
    /// Get the [`ApiError`], if this is one.
    pub fn as_api_error(&self) -> Option<&ApiError> {
        match self {
            Self::Api(error) => Some(error),
            _ => None,
        }
    }

    /// Get the [`ConfigError`], if this is one.
    pub fn as_config_error(&self) -> Option<&ConfigError> {
        match self {
            Self::Config(error) => Some(error),
            _ => None,
        }
    }
}

/// An error envelope returned by the api.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("api responded with status {status_code} for `{request_url}`: {message}")]
pub struct ApiError {
    /// The status code embedded in the response
    pub status_code: u16,

    /// The error message
    pub message: String,

    /// The url that produced the error
    pub request_url: String,
}

/// A request that cannot be sent as configured.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// The operation requires an api key, but the client has none.
    ///
    /// Keys can be requested at <https://dash.fortnite-api.com/account>.
    #[error("this operation requires an api key, but none was configured")]
    MissingKey,

    /// Stats were requested without a name or an account id
    #[error("either a name or an account id is required to look up stats")]
    MissingStatsTarget,

    /// Stats were requested with both a name and an account id
    #[error("a name and an account id are mutually exclusive")]
    ConflictingStatsTarget,

    /// An account type was given with an account id
    #[error("an account type can only be used when looking up stats by name")]
    AccountTypeWithId,
}
