//! Configuration data models
//!
//! This module defines the data structures persisted by `QuickLaunch`.
//!
//! A [`LaunchRecord`] is stored as a 5-element JSON array
//! `[name, target, work_dir, use_shell, new_console]` so that button lists
//! shared through the clipboard stay compact and hand-editable.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::path::PathBuf;

/// Number of fields in the array form of a launch record
pub const RECORD_FIELD_COUNT: usize = 5;

/// One configured button: what to start and how to start it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawRecord", into = "WireRecord")]
pub struct LaunchRecord {
    /// Button label, also the key used for deletion
    pub name: String,
    /// Executable or script to start
    pub target: String,
    /// Working directory for the started process (empty = inherit)
    pub work_dir: String,
    /// Run through the system command interpreter instead of directly
    pub use_shell: bool,
    /// Ask for a new console window (only honoured together with `use_shell`)
    pub new_console: bool,
}

/// Array form written to disk and to the clipboard
type WireRecord = (String, String, String, bool, bool);

/// Array form accepted on input; flags may be booleans or "true"/"false"
type RawRecord = (String, String, String, FlagRepr, FlagRepr);

#[derive(Deserialize)]
#[serde(untagged)]
enum FlagRepr {
    Bool(bool),
    Text(String),
}

impl FlagRepr {
    fn into_bool(self) -> Result<bool, String> {
        match self {
            Self::Bool(b) => Ok(b),
            Self::Text(s) => parse_flag_text(&s),
        }
    }
}

fn parse_flag_text(s: &str) -> Result<bool, String> {
    if s.eq_ignore_ascii_case("true") {
        Ok(true)
    } else if s.eq_ignore_ascii_case("false") {
        Ok(false)
    } else {
        Err(format!("expected true or false, found \"{s}\""))
    }
}

impl TryFrom<RawRecord> for LaunchRecord {
    type Error = String;

    fn try_from(raw: RawRecord) -> Result<Self, Self::Error> {
        let (name, target, work_dir, use_shell, new_console) = raw;
        Ok(Self {
            name,
            target,
            work_dir,
            use_shell: use_shell.into_bool()?,
            new_console: new_console.into_bool()?,
        })
    }
}

impl From<LaunchRecord> for WireRecord {
    fn from(record: LaunchRecord) -> Self {
        (
            record.name,
            record.target,
            record.work_dir,
            record.use_shell,
            record.new_console,
        )
    }
}

impl LaunchRecord {
    /// Create a new launch record
    pub fn new(
        name: impl Into<String>,
        target: impl Into<String>,
        work_dir: impl Into<String>,
        use_shell: bool,
        new_console: bool,
    ) -> Self {
        Self {
            name: name.into(),
            target: target.into(),
            work_dir: work_dir.into(),
            use_shell,
            new_console,
        }
    }

    /// Validate a single element of an imported list
    ///
    /// Returns a short reason (suitable for the status line) when the element
    /// is not a 5-element array of three strings followed by two flags.
    pub fn from_json_value(value: &Value) -> Result<Self, String> {
        let Value::Array(fields) = value else {
            return Err(format!("must be a list, found {}", describe_json(value)));
        };
        if fields.len() != RECORD_FIELD_COUNT {
            return Err(format!(
                "must have {RECORD_FIELD_COUNT} fields, found {}",
                fields.len()
            ));
        }

        let text = |i: usize, label: &str| -> Result<String, String> {
            fields[i]
                .as_str()
                .map(str::to_string)
                .ok_or_else(|| format!("{label} must be text, found {}", describe_json(&fields[i])))
        };
        let flag = |i: usize, label: &str| -> Result<bool, String> {
            match &fields[i] {
                Value::Bool(b) => Ok(*b),
                Value::String(s) => parse_flag_text(s).map_err(|e| format!("{label} {e}")),
                other => Err(format!(
                    "{label} must be true or false, found {}",
                    describe_json(other)
                )),
            }
        };

        Ok(Self {
            name: text(0, "name")?,
            target: text(1, "target")?,
            work_dir: text(2, "working directory")?,
            use_shell: flag(3, "shell mode")?,
            new_console: flag(4, "new console")?,
        })
    }
}

/// Human-readable name of a JSON value's kind, used in validation messages
pub fn describe_json(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "text",
        Value::Array(_) => "a list",
        Value::Object(_) => "an object",
    }
}

/// Persisted background image choice
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BackgroundConfig {
    /// Path of the chosen image, if any
    pub image_path: Option<PathBuf>,
}

impl BackgroundConfig {
    /// Image path to render at startup: only returned when the file still exists
    pub fn usable_path(&self) -> Option<&PathBuf> {
        self.image_path.as_ref().filter(|p| p.exists())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_serializes_as_array() {
        let record = LaunchRecord::new("Notepad", "notepad.exe", "C:\\", false, true);
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json, json!(["Notepad", "notepad.exe", "C:\\", false, true]));
    }

    #[test]
    fn test_deserialize_accepts_text_flags() {
        let record: LaunchRecord =
            serde_json::from_str(r#"["Notepad","notepad.exe","C:\\","false","TRUE"]"#).unwrap();
        assert!(!record.use_shell);
        assert!(record.new_console);
    }

    #[test]
    fn test_deserialize_rejects_unknown_flag_text() {
        let result: Result<LaunchRecord, _> =
            serde_json::from_str(r#"["a","b","c","maybe",false]"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_from_json_value_wrong_length() {
        let err = LaunchRecord::from_json_value(&json!(["a", "b", "c"])).unwrap_err();
        assert_eq!(err, "must have 5 fields, found 3");
    }

    #[test]
    fn test_from_json_value_wrong_types() {
        let err = LaunchRecord::from_json_value(&json!(["a", 7, "c", true, false])).unwrap_err();
        assert_eq!(err, "target must be text, found a number");

        let err = LaunchRecord::from_json_value(&json!(["a", "b", "c", 1, false])).unwrap_err();
        assert_eq!(err, "shell mode must be true or false, found a number");

        let err = LaunchRecord::from_json_value(&json!({"name": "a"})).unwrap_err();
        assert_eq!(err, "must be a list, found an object");
    }

    #[test]
    fn test_from_json_value_preserves_non_ascii() {
        let record =
            LaunchRecord::from_json_value(&json!(["记事本", "notepad.exe", "", true, false]))
                .unwrap();
        assert_eq!(record.name, "记事本");
        assert!(record.use_shell);
    }

    #[test]
    fn test_background_usable_path_requires_existing_file() {
        let config = BackgroundConfig {
            image_path: Some(PathBuf::from("/definitely/not/here.png")),
        };
        assert!(config.usable_path().is_none());
        assert!(BackgroundConfig::default().usable_path().is_none());
    }
}
