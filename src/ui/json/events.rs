//! Shared JSON event types.
//!
//! Commands use these instead of ad-hoc `json!` values so field names stay
//! consistent across the CLI.

use serde::Serialize;

/// Event emitted when a command starts.
#[derive(Debug, Clone, Serialize)]
pub struct StartEvent<'a> {
    pub event: &'static str,
    pub command: &'a str,
    pub version: &'static str,
}

impl<'a> StartEvent<'a> {
    pub fn new(command: &'a str) -> Self {
        Self {
            event: "start",
            command,
            version: env!("CARGO_PKG_VERSION"),
        }
    }
}

/// Event emitted when a command finishes.
#[derive(Debug, Clone, Serialize)]
pub struct CompleteEvent<'a> {
    pub event: &'static str,
    pub command: &'a str,
    pub success: bool,
}

impl<'a> CompleteEvent<'a> {
    pub fn success(command: &'a str) -> Self {
        Self {
            event: "complete",
            command,
            success: true,
        }
    }

    pub fn failure(command: &'a str) -> Self {
        Self {
            event: "complete",
            command,
            success: false,
        }
    }
}

/// Event emitted when a command fails.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorEvent {
    pub event: &'static str,
    pub code: &'static str,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file: Option<String>,
}

impl ErrorEvent {
    pub fn new(code: &'static str, message: impl Into<String>) -> Self {
        Self {
            event: "error",
            code,
            message: message.into(),
            file: None,
        }
    }

    pub fn with_file(mut self, file: impl Into<String>) -> Self {
        self.file = Some(file.into());
        self
    }
}

/// Non-fatal problem, e.g. an unknown key in a config document.
#[derive(Debug, Clone, Serialize)]
pub struct WarningEvent<'a> {
    pub event: &'static str,
    pub command: &'a str,
    pub message: String,
}

impl<'a> WarningEvent<'a> {
    pub fn new(command: &'a str, message: impl Into<String>) -> Self {
        Self {
            event: "warning",
            command,
            message: message.into(),
        }
    }
}

/// Command payload, flattened next to the event fields.
#[derive(Debug, Clone, Serialize)]
pub struct DataEvent<'a, T: Serialize> {
    pub event: &'static str,
    pub command: &'a str,
    #[serde(flatten)]
    pub data: T,
}

impl<'a, T: Serialize> DataEvent<'a, T> {
    pub fn new(command: &'a str, data: T) -> Self {
        Self {
            event: "data",
            command,
            data,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn start_event_serializes_correctly() {
        let json = serde_json::to_value(StartEvent::new("plan")).unwrap();

        assert_eq!(json["event"], "start");
        assert_eq!(json["command"], "plan");
        assert!(json["version"].is_string());
    }

    #[test]
    fn complete_event_failure_serializes_correctly() {
        let json = serde_json::to_value(CompleteEvent::failure("check")).unwrap();

        assert_eq!(json["event"], "complete");
        assert_eq!(json["command"], "check");
        assert_eq!(json["success"], false);
    }

    #[test]
    fn error_event_omits_missing_file() {
        let json = serde_json::to_value(ErrorEvent::new("config_not_found", "nope")).unwrap();
        assert_eq!(json["code"], "config_not_found");
        assert!(json.get("file").is_none());

        let json =
            serde_json::to_value(ErrorEvent::new("invalid_document", "bad").with_file("a.yaml"))
                .unwrap();
        assert_eq!(json["file"], "a.yaml");
    }

    #[test]
    fn data_event_flattens_data() {
        #[derive(Serialize)]
        struct Names {
            count: usize,
            names: Vec<&'static str>,
        }

        let event = DataEvent::new(
            "list",
            Names {
                count: 2,
                names: vec!["desk", "garage"],
            },
        );
        let json = serde_json::to_value(&event).unwrap();

        assert_eq!(json["event"], "data");
        assert_eq!(json["count"], 2);
        assert_eq!(json["names"][1], "garage");
    }
}
