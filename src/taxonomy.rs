// taxonomy.rs
// Severity levels and process kinds carried by every log line

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::LogError;

/// Severity classifies a log event. Declaration order is the rank, and the
/// rank decides which file the event is routed to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[repr(u8)]
pub enum Severity {
    Emergency = 0,
    Alert = 1,
    Critical = 2,
    Notice = 3,
    Debug = 4,
    Trace = 5,
}

impl Severity {
    pub const ALL: [Severity; 6] = [
        Severity::Emergency,
        Severity::Alert,
        Severity::Critical,
        Severity::Notice,
        Severity::Debug,
        Severity::Trace,
    ];

    /// Canonical uppercase name written into the first CSV field.
    pub const fn as_str(self) -> &'static str {
        match self {
            Severity::Emergency => "EMERGENCY",
            Severity::Alert => "ALERT",
            Severity::Critical => "CRITICAL",
            Severity::Notice => "NOTICE",
            Severity::Debug => "DEBUG",
            Severity::Trace => "TRACE",
        }
    }

    pub const fn rank(self) -> u8 {
        self as u8
    }

    /// Emergency, Alert and Critical go to the error file.
    pub fn is_error_tier(self) -> bool {
        self <= Severity::Critical
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Severity {
    type Err = LogError;

    fn from_str(input: &str) -> Result<Severity, Self::Err> {
        Severity::ALL
            .into_iter()
            .find(|s| s.as_str().eq_ignore_ascii_case(input.trim()))
            .ok_or_else(|| LogError::validation("severity", format!("unknown severity '{input}'")))
    }
}

/// The kind of process an event originates from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProcessKind {
    OperatingSystem,
    /// A lightweight concurrent task (thread, async task, worker).
    Task,
    Request,
}

impl ProcessKind {
    pub const ALL: [ProcessKind; 3] = [
        ProcessKind::OperatingSystem,
        ProcessKind::Task,
        ProcessKind::Request,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            ProcessKind::OperatingSystem => "Operating System",
            ProcessKind::Task => "Goroutine",
            ProcessKind::Request => "Request",
        }
    }
}

impl fmt::Display for ProcessKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ProcessKind {
    type Err = LogError;

    /// Accepts the display string or the short names `os`, `task`, `request`.
    fn from_str(input: &str) -> Result<ProcessKind, Self::Err> {
        let needle = input.trim().to_lowercase();
        match needle.as_str() {
            "os" | "operating_system" | "operating system" => Ok(ProcessKind::OperatingSystem),
            "task" | "goroutine" => Ok(ProcessKind::Task),
            "request" => Ok(ProcessKind::Request),
            _ => Err(LogError::validation(
                "process_kind",
                format!("unknown process kind '{input}'"),
            )),
        }
    }
}

pub fn severity_display_string(severity: Severity) -> &'static str {
    severity.as_str()
}

pub fn process_kind_display_string(kind: ProcessKind) -> &'static str {
    kind.as_str()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_severity_has_a_name() {
        let expected = ["EMERGENCY", "ALERT", "CRITICAL", "NOTICE", "DEBUG", "TRACE"];
        for (severity, name) in Severity::ALL.into_iter().zip(expected) {
            assert_eq!(severity_display_string(severity), name);
            assert_eq!(severity.to_string(), name);
        }
    }

    #[test]
    fn test_every_process_kind_has_a_name() {
        assert_eq!(process_kind_display_string(ProcessKind::OperatingSystem), "Operating System");
        assert_eq!(process_kind_display_string(ProcessKind::Task), "Goroutine");
        assert_eq!(process_kind_display_string(ProcessKind::Request), "Request");
    }

    #[test]
    fn test_rank_follows_declaration_order() {
        let ranks: Vec<u8> = Severity::ALL.iter().map(|s| s.rank()).collect();
        assert_eq!(ranks, vec![0, 1, 2, 3, 4, 5]);
        assert!(Severity::Emergency < Severity::Trace);
    }

    #[test]
    fn test_error_tier_threshold() {
        let error_tier: Vec<Severity> =
            Severity::ALL.into_iter().filter(|s| s.is_error_tier()).collect();
        assert_eq!(
            error_tier,
            vec![Severity::Emergency, Severity::Alert, Severity::Critical]
        );
    }

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!("notice".parse::<Severity>().unwrap(), Severity::Notice);
        assert_eq!("CRITICAL".parse::<Severity>().unwrap(), Severity::Critical);
        assert!("warning".parse::<Severity>().is_err());

        assert_eq!("Operating System".parse::<ProcessKind>().unwrap(), ProcessKind::OperatingSystem);
        assert_eq!("goroutine".parse::<ProcessKind>().unwrap(), ProcessKind::Task);
        assert!("thread-pool".parse::<ProcessKind>().is_err());
    }
}
