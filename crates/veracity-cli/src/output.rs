//! Output formatting for the CLI.

use crate::config::OutputFormat;
use crate::error::Result;
use colored::*;
use serde::Serialize;
use tabled::{
    builder::Builder,
    settings::{object::Rows, Alignment, Modify, Style},
};
use veracity_probe::mime::supported_mime_types;
use veracity_probe::report::{MetadataFields, RecordReport};
use veracity_probe::{AnalysisReport, ToolLocation};

/// Tool status as printed in JSON mode.
#[derive(Debug, Serialize)]
struct ToolStatus<'a> {
    available: bool,
    path: Option<String>,
    reason: Option<&'a str>,
    supported_mime_types: Vec<&'static str>,
}

/// Output formatter.
pub struct Formatter {
    format: OutputFormat,
    color_enabled: bool,
}

impl Formatter {
    /// Create a new formatter.
    pub fn new(format: OutputFormat, color_enabled: bool) -> Self {
        Self {
            format,
            color_enabled,
        }
    }

    /// Format an analysis report for `source`.
    pub fn format_report(&self, source: &str, report: &AnalysisReport) -> Result<String> {
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(report)?),
            OutputFormat::Table => Ok(self.format_report_table(source, report)),
            OutputFormat::Quiet => Ok(report.probability.to_string()),
        }
    }

    fn format_report_table(&self, source: &str, report: &AnalysisReport) -> String {
        let mut sections = Vec::new();

        let mut builder = Builder::default();
        builder.push_record(["Field", "Value"]);
        builder.push_record(["File", source]);
        builder.push_record(["AI probability", &format!("{}%", report.probability)]);
        builder.push_record(["Authentic", &format!("{}%", report.authentic_percentage)]);
        sections.push(build_table(builder));
        sections.push(self.verdict(&report.band, &report.summary));

        sections.push(self.heading("Provenance"));
        if let Some(error) = &report.provenance.error {
            sections.push(self.warning(error));
        }
        match &report.provenance.record {
            Some(record) => sections.push(format_record(record)),
            None if report.provenance.error.is_none() => {
                sections.push(self.info("No C2PA manifest found."))
            }
            None => {}
        }

        sections.push(self.heading("Capture metadata"));
        match &report.metadata.fields {
            Some(fields) => sections.push(format_metadata(fields)),
            None => sections.push(self.info("No EXIF metadata found.")),
        }

        sections.join("\n")
    }

    /// Format the resolved provenance tool.
    pub fn format_tool(&self, location: &ToolLocation) -> Result<String> {
        let supported: Vec<&'static str> = supported_mime_types().collect();

        match self.format {
            OutputFormat::Json => {
                let status = ToolStatus {
                    available: location.is_available(),
                    path: location.path().map(|path| path.display().to_string()),
                    reason: match location {
                        ToolLocation::Unavailable(reason) => Some(reason.as_str()),
                        ToolLocation::Available(_) => None,
                    },
                    supported_mime_types: supported,
                };
                Ok(serde_json::to_string_pretty(&status)?)
            }
            OutputFormat::Quiet => Ok(location
                .path()
                .map(|path| path.display().to_string())
                .unwrap_or_default()),
            OutputFormat::Table => {
                let status = match location {
                    ToolLocation::Available(path) => {
                        self.success(&format!("Provenance tool: {}", path.display()))
                    }
                    ToolLocation::Unavailable(reason) => {
                        self.warning(&format!("Provenance tool unavailable: {}", reason))
                    }
                };
                Ok(format!(
                    "{}\n{}",
                    status,
                    self.info(&format!("Supported types: {}", supported.join(", ")))
                ))
            }
        }
    }

    /// Format a success message.
    pub fn success(&self, message: &str) -> String {
        self.colorize(&format!("✓ {}", message), "green")
    }

    /// Format an info message.
    pub fn info(&self, message: &str) -> String {
        self.colorize(&format!("ℹ {}", message), "blue")
    }

    /// Format a warning message.
    pub fn warning(&self, message: &str) -> String {
        self.colorize(&format!("⚠ {}", message), "yellow")
    }

    fn heading(&self, title: &str) -> String {
        self.colorize(&format!("\n{}", title), "cyan")
    }

    /// Verdict line, colored by band.
    fn verdict(&self, band: &str, summary: &str) -> String {
        let color = match band {
            "likely_synthetic" => "red",
            "uncertain" => "yellow",
            _ => "green",
        };
        self.colorize(summary, color)
    }

    /// Colorize text if color is enabled.
    fn colorize(&self, text: &str, color: &str) -> String {
        if !self.color_enabled {
            return text.to_string();
        }

        match color {
            "red" => text.red().to_string(),
            "green" => text.green().to_string(),
            "blue" => text.blue().to_string(),
            "yellow" => text.yellow().to_string(),
            "cyan" => text.cyan().to_string(),
            _ => text.to_string(),
        }
    }
}

fn build_table(builder: Builder) -> String {
    let mut table = builder.build();
    table
        .with(Style::rounded())
        .with(Modify::new(Rows::first()).with(Alignment::center()));
    table.to_string()
}

fn format_record(record: &RecordReport) -> String {
    let mut builder = Builder::default();
    builder.push_record(["Field", "Value"]);
    builder.push_record(["Instance ID", &record.instance_id]);
    builder.push_record(["Title", &record.title]);
    builder.push_record(["Issuer", &record.issuer]);
    builder.push_record(["Generator", &record.generator_name]);
    if let Some(source_type) = &record.digital_source_type {
        builder.push_record(["Source type", source_type]);
    }
    for agent in &record.software_agents {
        builder.push_record(["Action", &format!("{} {}", agent.description, agent.name)]);
    }
    build_table(builder)
}

fn format_metadata(fields: &MetadataFields) -> String {
    let labelled = [
        ("EXIF Version", &fields.exif_version),
        ("Camera Make", &fields.make),
        ("Camera Model", &fields.model),
        ("Software", &fields.software),
        ("Date/Time Original", &fields.datetime_original),
        ("GPS Latitude", &fields.gps_latitude),
        ("GPS Longitude", &fields.gps_longitude),
    ];

    let mut builder = Builder::default();
    builder.push_record(["Field", "Value"]);
    for (label, value) in labelled {
        if let Some(value) = value {
            builder.push_record([label, value.as_str()]);
        }
    }
    builder.push_record(["Total fields", &fields.field_count.to_string()]);
    build_table(builder)
}
