// Generic response envelope returned by the HTTP boundary.
//
// Wire shape: { "status": "OK" | "ERROR", "data": T | null, "errorMessage": string | null }

use serde::{Serialize, Serializer};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum EnvelopeStatus {
    Ok,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RootEntity<T> {
    Ok(T),
    Error(String),
}

impl<T> RootEntity<T> {
    pub fn ok(data: T) -> Self {
        RootEntity::Ok(data)
    }

    pub fn error(error_message: impl Into<String>) -> Self {
        RootEntity::Error(error_message.into())
    }

    pub fn status(&self) -> EnvelopeStatus {
        if self.is_ok() {
            EnvelopeStatus::Ok
        } else {
            EnvelopeStatus::Error
        }
    }

    pub fn is_ok(&self) -> bool {
        matches!(self, RootEntity::Ok(_))
    }

    #[cfg(test)]
    pub fn is_error(&self) -> bool {
        matches!(self, RootEntity::Error(_))
    }

    pub fn data(&self) -> Option<&T> {
        match self {
            RootEntity::Ok(data) => Some(data),
            RootEntity::Error(_) => None,
        }
    }

    pub fn error_message(&self) -> Option<&str> {
        match self {
            RootEntity::Ok(_) => None,
            RootEntity::Error(message) => Some(message),
        }
    }

    #[cfg(test)]
    pub fn into_result(self) -> Result<T, String> {
        match self {
            RootEntity::Ok(data) => Ok(data),
            RootEntity::Error(message) => Err(message),
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct RootEntityBody<'a, T> {
    status: EnvelopeStatus,
    data: Option<&'a T>,
    error_message: Option<&'a str>,
}

impl<T: Serialize> Serialize for RootEntity<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        RootEntityBody {
            status: self.status(),
            data: self.data(),
            error_message: self.error_message(),
        }
        .serialize(serializer)
    }
}
