#[derive(Debug, thiserror::Error)]
pub enum MediError {
    #[error("invalid input: {0}")]
    InvalidInput(String),
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
    #[error("failed to build HTTP client: {0}")]
    HttpClient(reqwest::Error),

    #[error("chat request failed: {0}")]
    AssistantRequest(reqwest::Error),
    #[error("chat request timed out after {0}s")]
    AssistantTimeout(u64),
    #[error("chat API returned status {status}: {body}")]
    AssistantStatus { status: u16, body: String },
    #[error("failed to decode chat response: {0}")]
    AssistantResponse(reqwest::Error),
    #[error("chat API returned no reply")]
    EmptyReply,

    #[error("location lookup failed: {0}")]
    LocationRequest(reqwest::Error),
    #[error("location service returned status {0}")]
    LocationStatus(u16),
    #[error("failed to decode location response: {0}")]
    LocationResponse(reqwest::Error),
    #[error("automatic location info is incomplete")]
    IncompleteLocation,

    #[error("failed to start speech program {program}: {source}")]
    SpeechSpawn {
        program: String,
        #[source]
        source: std::io::Error,
    },
    #[error("speech program {program} exited with {status}")]
    SpeechExit {
        program: String,
        status: std::process::ExitStatus,
    },
}

impl From<medibot_types::TextError> for MediError {
    fn from(err: medibot_types::TextError) -> Self {
        MediError::InvalidInput(err.to_string())
    }
}

pub type MediResult<T> = std::result::Result<T, MediError>;
