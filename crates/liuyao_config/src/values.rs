//! String forms of configurable values.

use std::fmt;
use std::str::FromStr;

use liuyao_base::{MonthRule, VoidMethod, YearBoundary};

use crate::error::ConfigError;

/// How a reading is printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum OutputFormat {
    /// Plain-text chart.
    #[default]
    Text,
    /// JSON document of the whole reading.
    Json,
    /// Consultation prompt.
    Prompt,
}

impl OutputFormat {
    /// Config/CLI spelling.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Json => "json",
            Self::Prompt => "prompt",
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OutputFormat {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            "prompt" => Ok(Self::Prompt),
            _ => Err(ConfigError::InvalidValue {
                key: "output.format",
                value: s.to_string(),
                expected: "text, json, prompt",
            }),
        }
    }
}

/// Parse a year boundary: `calendar` or `spring-commencement`.
pub fn parse_year_boundary(s: &str) -> Result<YearBoundary, ConfigError> {
    match s.trim().to_ascii_lowercase().as_str() {
        "calendar" => Ok(YearBoundary::Calendar),
        "spring-commencement" | "spring_commencement" | "lichun" => {
            Ok(YearBoundary::SpringCommencement)
        }
        _ => Err(ConfigError::InvalidValue {
            key: "reading.year_boundary",
            value: s.to_string(),
            expected: "calendar, spring-commencement",
        }),
    }
}

/// Parse a month rule: `calendar-month` or `five-tigers`.
pub fn parse_month_rule(s: &str) -> Result<MonthRule, ConfigError> {
    match s.trim().to_ascii_lowercase().as_str() {
        "calendar-month" | "calendar_month" => Ok(MonthRule::CalendarMonth),
        "five-tigers" | "five_tigers" => Ok(MonthRule::FiveTigers),
        _ => Err(ConfigError::InvalidValue {
            key: "reading.month_rule",
            value: s.to_string(),
            expected: "calendar-month, five-tigers",
        }),
    }
}

/// Parse a void method: `branch-table` or `xun`.
pub fn parse_void_method(s: &str) -> Result<VoidMethod, ConfigError> {
    match s.trim().to_ascii_lowercase().as_str() {
        "branch-table" | "branch_table" => Ok(VoidMethod::BranchTable),
        "xun" => Ok(VoidMethod::Xun),
        _ => Err(ConfigError::InvalidValue {
            key: "reading.void_method",
            value: s.to_string(),
            expected: "branch-table, xun",
        }),
    }
}
