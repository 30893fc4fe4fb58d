//! Betaflight CLI dump checker
//!
//! Scans a pasted `diff` / `dump` for settings known to cause trouble.
//! Rules are a static table; each rule matches one `set <name> = <value>`
//! line (the `set` prefix and spacing around `=` are optional).

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Warning,
    Info,
}

impl Severity {
    pub fn icon(&self) -> &'static str {
        match self {
            Severity::Warning => "⚠️",
            Severity::Info => "ℹ️",
        }
    }
}

/// A single setting/value pair worth flagging
#[derive(Debug, Clone)]
pub struct CliRule {
    pub setting: &'static str,
    pub value: &'static str,
    pub severity: Severity,
    pub message: &'static str,
}

static CLI_RULES: &[CliRule] = &[
    CliRule {
        setting: "gyro_lowpass2_hz",
        value: "0",
        severity: Severity::Warning,
        message: "Gyro LPF2 is disabled; risk of oscillation",
    },
    CliRule {
        setting: "throttle_limit_percent",
        value: "100",
        severity: Severity::Info,
        message: "Throttle limit at 100% drains the pack faster",
    },
];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CliIssue {
    pub setting: String,
    pub severity: Severity,
    pub message: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VerdictStatus {
    Empty,
    Ok,
    Issues,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CliVerdict {
    pub status: VerdictStatus,
    /// Human-readable result, one line per issue
    pub message: String,
    pub issues: Vec<CliIssue>,
}

/// Split a CLI line into (setting, value), ignoring anything that is not an assignment
fn parse_assignment(line: &str) -> Option<(&str, &str)> {
    let line = line.trim();
    if line.starts_with('#') {
        return None;
    }
    let line = line.strip_prefix("set ").unwrap_or(line);
    let (name, value) = line.split_once('=')?;
    Some((name.trim(), value.trim()))
}

pub fn check_cli_dump(text: &str) -> CliVerdict {
    if text.trim().is_empty() {
        return CliVerdict {
            status: VerdictStatus::Empty,
            message: "❌ No CLI dump pasted".to_string(),
            issues: Vec::new(),
        };
    }

    let mut issues = Vec::new();
    for rule in CLI_RULES {
        let hit = text
            .lines()
            .filter_map(parse_assignment)
            .any(|(name, value)| name.eq_ignore_ascii_case(rule.setting) && value == rule.value);

        if hit {
            issues.push(CliIssue {
                setting: rule.setting.to_string(),
                severity: rule.severity,
                message: rule.message.to_string(),
            });
        }
    }

    if issues.is_empty() {
        return CliVerdict {
            status: VerdictStatus::Ok,
            message: "✅ Settings look fine overall".to_string(),
            issues,
        };
    }

    let message = issues
        .iter()
        .map(|issue| format!("{} {}", issue.severity.icon(), issue.message))
        .collect::<Vec<_>>()
        .join("\n");

    tracing::debug!("CLI check found {} issue(s)", issues.len());

    CliVerdict {
        status: VerdictStatus::Issues,
        message,
        issues,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_dump() {
        let verdict = check_cli_dump("   \n ");
        assert_eq!(verdict.status, VerdictStatus::Empty);
        assert!(verdict.issues.is_empty());
    }

    #[test]
    fn test_clean_dump() {
        let verdict = check_cli_dump("set gyro_lowpass2_hz = 500\nset throttle_limit_percent = 80\n");
        assert_eq!(verdict.status, VerdictStatus::Ok);
        assert!(verdict.message.contains("fine"));
    }

    #[test]
    fn test_both_rules_fire_in_table_order() {
        let dump = "# diff\nset throttle_limit_percent = 100\nset gyro_lowpass2_hz = 0\n";
        let verdict = check_cli_dump(dump);

        assert_eq!(verdict.status, VerdictStatus::Issues);
        assert_eq!(verdict.issues.len(), 2);
        assert_eq!(verdict.issues[0].setting, "gyro_lowpass2_hz");
        assert_eq!(verdict.issues[0].severity, Severity::Warning);
        assert_eq!(verdict.issues[1].severity, Severity::Info);
        assert_eq!(verdict.message.lines().count(), 2);
    }

    #[test]
    fn test_spacing_and_prefix_tolerated() {
        let verdict = check_cli_dump("gyro_lowpass2_hz=0");
        assert_eq!(verdict.issues.len(), 1);
    }

    #[test]
    fn test_value_must_match_exactly() {
        // 00 and 1000 are different settings than the rule values
        let verdict = check_cli_dump("set gyro_lowpass2_hz = 00\nset throttle_limit_percent = 1000");
        assert_eq!(verdict.status, VerdictStatus::Ok);
    }

    #[test]
    fn test_commented_lines_ignored() {
        let verdict = check_cli_dump("# set gyro_lowpass2_hz = 0");
        assert_eq!(verdict.status, VerdictStatus::Ok);
    }
}
