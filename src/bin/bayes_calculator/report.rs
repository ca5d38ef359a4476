use anyhow::Result;
use bayestest_utils::metric::{dashboard, MetricReading};
use bayestest_utils::ProbabilityParameters;
use std::io::Write;

use crate::cli::ReportFormat;

pub fn write_report<W: Write>(
    writer: &mut W,
    params: &ProbabilityParameters,
    format: ReportFormat,
) -> Result<()> {
    let readings = dashboard(params);
    match format {
        ReportFormat::Text => write_text(writer, &readings)?,
        ReportFormat::Json => {
            serde_json::to_writer_pretty(&mut *writer, &readings)?;
            writeln!(writer)?;
        }
    }
    Ok(())
}

fn write_text<W: Write>(writer: &mut W, readings: &[MetricReading]) -> Result<()> {
    let width = readings
        .iter()
        .map(|r| r.metric.label().len())
        .max()
        .unwrap_or(0);
    for reading in readings {
        writeln!(
            writer,
            "{:<width$}  {}",
            format!("{}:", reading.metric),
            reading.formatted(),
            width = width + 1
        )?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_report() {
        let params = ProbabilityParameters::new(0.05, 0.9, 0.95).unwrap();
        let mut out = Vec::new();
        write_report(&mut out, &params, ReportFormat::Text).unwrap();
        let text = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(
            lines,
            vec![
                "Prior Probability:      5.00%",
                "Posterior Probability:  48.65%",
                "Test Accuracy:          92.5%",
            ]
        );
    }

    #[test]
    fn test_json_report_degenerate() {
        let params = ProbabilityParameters::new(0.0, 0.9, 1.0).unwrap();
        let mut out = Vec::new();
        write_report(&mut out, &params, ReportFormat::Json).unwrap();
        let json: serde_json::Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(json[1]["metric"], "posterior");
        assert!(json[1]["value"].is_null());
        assert_eq!(json[0]["value"], 0.0);
    }
}
