use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::patch::empty_object_if_none;

/// Plain acknowledgement returned by updates and deletes
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// A one-to-one record returned on its own; absent records serialize as `{}`
#[derive(Debug, Clone)]
pub struct OptionalRecord<T>(pub Option<T>);

impl<T: Serialize> Serialize for OptionalRecord<T> {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        empty_object_if_none(&self.0, serializer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_optional_record_serialization() {
        let none: OptionalRecord<MessageResponse> = OptionalRecord(None);
        assert_eq!(serde_json::to_string(&none).unwrap(), "{}");

        let some = OptionalRecord(Some(MessageResponse::new("ok")));
        assert_eq!(serde_json::to_string(&some).unwrap(), r#"{"message":"ok"}"#);
    }
}
