use chrono::NaiveDate;
use liuyao_base::HourSlot;
use liuyao_config::{LiuyaoConfig, OutputFormat};
use liuyao_reading::{Reading, ReadingConfig, Topic, compute_reading};
use tracing::debug;

use crate::chart::format_chart;
use crate::error::LiuyaoError;
use crate::prompt::format_prompt;
use crate::request::ReadingRequest;

/// Cast a reading with default options.
pub fn cast(
    n1: i64,
    n2: i64,
    n3: i64,
    date: NaiveDate,
    hour_slot: HourSlot,
    topic: Option<Topic>,
) -> Reading {
    compute_reading(n1, n2, n3, date, hour_slot, topic, &ReadingConfig::default())
}

/// Validate raw form fields and cast a reading.
pub fn cast_str(
    n1: &str,
    n2: &str,
    n3: &str,
    date: &str,
    hour_slot: &str,
    config: &ReadingConfig,
) -> Result<Reading, LiuyaoError> {
    let request = ReadingRequest::parse(n1, n2, n3, date, hour_slot)?;
    Ok(request.reading(config))
}

/// Serialize a reading as pretty-printed JSON.
pub fn to_json(reading: &Reading) -> Result<String, LiuyaoError> {
    Ok(serde_json::to_string_pretty(reading)?)
}

/// Render a reading in the requested format.
///
/// `question` only appears in the prompt format.
pub fn render(
    reading: &Reading,
    question: Option<&str>,
    format: OutputFormat,
) -> Result<String, LiuyaoError> {
    debug!(%format, original = reading.original.name(), "rendering reading");
    match format {
        OutputFormat::Text => Ok(format_chart(reading)),
        OutputFormat::Json => to_json(reading),
        OutputFormat::Prompt => Ok(format_prompt(reading, question)),
    }
}

/// Compute and render a validated request under a resolved config.
pub fn run(request: &ReadingRequest, config: &LiuyaoConfig) -> Result<String, LiuyaoError> {
    let reading = request.reading(&config.reading);
    render(&reading, request.question.as_deref(), config.format)
}
