/// A failed request against the parks API.
///
/// Callers treat every variant the same way (log and keep the previous state);
/// the variants only make the log line useful.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// The request never produced a response (offline, CORS, DNS, ...).
    Network(String),
    /// The server answered with a non-success status.
    Status { status: u16, url: String },
    /// The body was not the expected JSON shape.
    Decode(String),
    /// The body decoded but failed validation.
    Invalid(String),
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ApiError::Network(msg) => write!(f, "request failed: {msg}"),
            ApiError::Status { status, url } => write!(f, "{url} answered HTTP {status}"),
            ApiError::Decode(msg) => write!(f, "unexpected response body: {msg}"),
            ApiError::Invalid(msg) => write!(f, "invalid response: {msg}"),
        }
    }
}

impl std::error::Error for ApiError {}
