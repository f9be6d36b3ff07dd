// log_event.rs
// Caller-built events and their CSV rendering

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

use crate::taxonomy::{ProcessKind, Severity};

/// How free-form fields are written into a line.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LineFormat {
    /// Fields are written verbatim. A comma or newline inside the process id
    /// or message shifts the columns for naive readers.
    #[default]
    Raw,
    /// Process id and message are quoted per RFC 4180 when they contain a
    /// comma, double quote, CR or LF. Files written this way differ from Raw
    /// output for any consumer splitting on commas.
    Quoted,
}

/// LogEvent is one structured record handed to the logger.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LogEvent {
    pub process_kind: ProcessKind,
    pub process_id: String,
    pub message: String,
}

impl LogEvent {
    pub fn new(
        process_kind: ProcessKind,
        process_id: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            process_kind,
            process_id: process_id.into(),
            message: message.into(),
        }
    }

    pub fn os(process_id: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(ProcessKind::OperatingSystem, process_id, message)
    }

    pub fn task(process_id: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(ProcessKind::Task, process_id, message)
    }

    pub fn request(process_id: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(ProcessKind::Request, process_id, message)
    }

    /// Renders `SEVERITY,TIMESTAMP,KIND,ID,MESSAGE` without the trailing newline.
    pub fn to_csv_line(
        &self,
        severity: Severity,
        timestamp: DateTime<Utc>,
        format: LineFormat,
    ) -> String {
        let (id, message) = match format {
            LineFormat::Raw => (self.process_id.clone(), self.message.clone()),
            LineFormat::Quoted => (quote_field(&self.process_id), quote_field(&self.message)),
        };

        format!(
            "{},{},{},{},{}",
            severity.as_str(),
            format_timestamp(timestamp),
            self.process_kind.as_str(),
            id,
            message
        )
    }
}

/// RFC 3339 at second precision with a `Z` offset, e.g. `2024-05-01T09:30:00Z`.
pub fn format_timestamp(timestamp: DateTime<Utc>) -> String {
    timestamp.to_rfc3339_opts(SecondsFormat::Secs, true)
}

fn quote_field(field: &str) -> String {
    if field.contains([',', '"', '\r', '\n']) {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn fixed_time() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 5, 1, 9, 30, 0).unwrap()
    }

    #[test]
    fn test_raw_line_has_five_fields_in_order() {
        let event = LogEvent::request("999", "FormattingTest");
        let line = event.to_csv_line(Severity::Notice, fixed_time(), LineFormat::Raw);

        assert_eq!(line, "NOTICE,2024-05-01T09:30:00Z,Request,999,FormattingTest");
    }

    #[test]
    fn test_raw_line_keeps_commas_verbatim() {
        let event = LogEvent::os("1", "disk full, retrying");
        let line = event.to_csv_line(Severity::Alert, fixed_time(), LineFormat::Raw);

        let parts: Vec<&str> = line.splitn(5, ',').collect();
        assert_eq!(parts[2], "Operating System");
        assert_eq!(parts[4], "disk full, retrying");
    }

    #[test]
    fn test_quoted_line_escapes_delimiters() {
        let event = LogEvent::task("7", "said \"hi\", then\nleft");
        let line = event.to_csv_line(Severity::Debug, fixed_time(), LineFormat::Quoted);

        assert_eq!(
            line,
            "DEBUG,2024-05-01T09:30:00Z,Goroutine,7,\"said \"\"hi\"\", then\nleft\""
        );
    }

    #[test]
    fn test_quoted_line_leaves_plain_fields_alone() {
        let event = LogEvent::task("7", "plain");
        let raw = event.to_csv_line(Severity::Debug, fixed_time(), LineFormat::Raw);
        let quoted = event.to_csv_line(Severity::Debug, fixed_time(), LineFormat::Quoted);
        assert_eq!(raw, quoted);
    }

    #[test]
    fn test_timestamp_parses_back() {
        let rendered = format_timestamp(Utc::now());
        assert!(DateTime::parse_from_rfc3339(&rendered).is_ok());
        assert!(rendered.ends_with('Z'));
    }
}
