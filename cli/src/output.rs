//! Output utilities for CLI tools.

use std::io::Write;

use serde::Serialize;

/// Structured output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// YAML format (default).
    #[default]
    Yaml,
    /// JSON format.
    Json,
}

/// Structured output configuration.
pub struct Output {
    pub format: OutputFormat,
}

impl Output {
    /// Creates a new output configuration.
    pub fn new(format: OutputFormat) -> Self {
        Self { format }
    }

    /// Serializes `value` in the configured format.
    pub fn render<T: Serialize>(&self, value: &T) -> anyhow::Result<String> {
        let output = match self.format {
            OutputFormat::Yaml => serde_yaml::to_string(value)?,
            OutputFormat::Json => {
                let mut s = serde_json::to_string_pretty(value)?;
                s.push('\n');
                s
            }
        };
        Ok(output)
    }

    /// Writes `value` to `w` in the configured format.
    pub fn write<W: Write, T: Serialize>(&self, w: &mut W, value: &T) -> anyhow::Result<()> {
        w.write_all(self.render(value)?.as_bytes())?;
        Ok(())
    }
}

/// Formats bytes to human readable string.
pub fn format_bytes(bytes: usize) -> String {
    const KB: usize = 1024;
    const MB: usize = KB * 1024;
    const GB: usize = MB * 1024;

    if bytes >= GB {
        format!("{:.2} GB", bytes as f64 / GB as f64)
    } else if bytes >= MB {
        format!("{:.2} MB", bytes as f64 / MB as f64)
    } else if bytes >= KB {
        format!("{:.2} KB", bytes as f64 / KB as f64)
    } else {
        format!("{} B", bytes)
    }
}
