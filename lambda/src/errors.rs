use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WeatherError {
    #[error("no location provided")]
    NoLocation,

    #[error("invalid request event: {0}")]
    InvalidEvent(String),

    #[error("failed to reach weather provider: {0}")]
    Transport(String),

    #[error("weather provider request timed out")]
    Timeout,

    #[error("weather provider returned {status}: {message}")]
    ProviderStatus { status: u16, message: String },

    #[error("failed to decode weather response: {0}")]
    Decode(String),

    #[error("weather response contained no conditions")]
    MissingConditions,

    #[error("failed to encode response body: {0}")]
    Encode(String),

    #[error("configuration error: {0}")]
    Config(String),
}

impl WeatherError {
    /// HTTP status code reported to the caller for this failure.
    #[must_use]
    pub fn status_code(&self) -> u16 {
        match self {
            WeatherError::NoLocation | WeatherError::InvalidEvent(_) => 400,
            _ => 500,
        }
    }

    /// Message safe to place in a response body.
    ///
    /// Client errors echo the error itself; anything downstream of validation
    /// collapses to a generic message so provider details stay in the logs.
    #[must_use]
    pub fn public_message(&self) -> String {
        if self.status_code() < 500 {
            self.to_string()
        } else {
            "failed to fetch weather".to_string()
        }
    }
}

impl From<reqwest::Error> for WeatherError {
    fn from(error: reqwest::Error) -> Self {
        // The request URL carries the API key.
        let error = error.without_url();
        if error.is_timeout() {
            WeatherError::Timeout
        } else if error.is_decode() {
            WeatherError::Decode(error.to_string())
        } else {
            WeatherError::Transport(error.to_string())
        }
    }
}

impl From<serde_json::Error> for WeatherError {
    fn from(error: serde_json::Error) -> Self {
        WeatherError::Decode(error.to_string())
    }
}
