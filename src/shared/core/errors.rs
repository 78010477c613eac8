use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageType {
    NoRecordExist,
    GeneralException,
}

impl MessageType {
    pub fn code(&self) -> &'static str {
        match self {
            MessageType::NoRecordExist => "1001",
            MessageType::GeneralException => "9999",
        }
    }

    pub fn message(&self) -> &'static str {
        match self {
            MessageType::NoRecordExist => "Record Not Found",
            MessageType::GeneralException => "A general error occurred",
        }
    }
}

/// A coded, human-readable error. `of_static` carries the offending value
/// (for example the requested id) and is appended to the fixed message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorMessage {
    pub message_type: MessageType,
    pub of_static: Option<String>,
}

impl ErrorMessage {
    pub fn new(message_type: MessageType, of_static: Option<String>) -> Self {
        Self {
            message_type,
            of_static,
        }
    }

    pub fn prepare_error_message(&self) -> String {
        match &self.of_static {
            Some(value) => format!("{} : {}", self.message_type.message(), value),
            None => self.message_type.message().to_string(),
        }
    }
}

impl fmt::Display for ErrorMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}] {}",
            self.message_type.code(),
            self.prepare_error_message()
        )
    }
}
