use std::fmt::{Display, Formatter};

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ForwardErrorCode {
    InvalidArgument,
    Internal,
    Network,
    Rejected,
}

impl ForwardErrorCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ForwardErrorCode::InvalidArgument => "forwarder/invalid-argument",
            ForwardErrorCode::Internal => "forwarder/internal",
            ForwardErrorCode::Network => "forwarder/network",
            ForwardErrorCode::Rejected => "forwarder/rejected",
        }
    }
}

#[derive(Clone, Debug)]
pub struct ForwardError {
    pub code: ForwardErrorCode,
    message: String,
    status: Option<u16>,
}

impl ForwardError {
    pub fn new(code: ForwardErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            status: None,
        }
    }

    pub fn code_str(&self) -> &'static str {
        self.code.as_str()
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// HTTP status returned by the collection endpoint, set for rejected requests only.
    pub fn status(&self) -> Option<u16> {
        self.status
    }
}

impl Display for ForwardError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.message, self.code_str())
    }
}

impl std::error::Error for ForwardError {}

pub type ForwardResult<T> = Result<T, ForwardError>;

pub fn invalid_argument(message: impl Into<String>) -> ForwardError {
    ForwardError::new(ForwardErrorCode::InvalidArgument, message)
}

pub fn internal_error(message: impl Into<String>) -> ForwardError {
    ForwardError::new(ForwardErrorCode::Internal, message)
}

pub fn network_error(message: impl Into<String>) -> ForwardError {
    ForwardError::new(ForwardErrorCode::Network, message)
}

pub fn rejected(status: u16) -> ForwardError {
    ForwardError {
        code: ForwardErrorCode::Rejected,
        message: format!("collection endpoint answered with status {status}"),
        status: Some(status),
    }
}
