//! Structured logging with request context.

use std::collections::BTreeMap;
use std::fmt;
use std::time::Instant;

use serde::Serialize;
use vitrine_core::RequestId;

/// Log level for structured logs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Trace => write!(f, "TRACE"),
            Self::Debug => write!(f, "DEBUG"),
            Self::Info => write!(f, "INFO"),
            Self::Warn => write!(f, "WARN"),
            Self::Error => write!(f, "ERROR"),
        }
    }
}

/// A structured log entry.
#[derive(Debug, Clone, Serialize)]
pub struct LogEntry {
    pub level: LogLevel,
    pub message: String,
    /// Request ID for correlation.
    pub request_id: String,
    /// Emitting component, e.g. `content-loader`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub component: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub route: Option<String>,
    /// Additional structured fields.
    #[serde(flatten)]
    pub fields: BTreeMap<String, serde_json::Value>,
    /// Microseconds since the logger was created.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub elapsed_us: Option<u64>,
}

impl LogEntry {
    /// Format as JSON string.
    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| self.message.clone())
    }

    /// Format as human-readable string.
    ///
    /// `[INFO] content-loader: Categories rendered cards=4 (812us)`
    pub fn to_human(&self) -> String {
        let mut line = format!("[{}] ", self.level);
        if let Some(component) = &self.component {
            line.push_str(component);
            line.push_str(": ");
        }
        line.push_str(&self.message);

        for (key, value) in &self.fields {
            match value {
                serde_json::Value::String(text) => line.push_str(&format!(" {}={}", key, text)),
                other => line.push_str(&format!(" {}={}", key, other)),
            }
        }
        if let Some(elapsed) = self.elapsed_us {
            line.push_str(&format!(" ({}us)", elapsed));
        }
        line
    }
}

/// Output format for logs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LogFormat {
    /// One JSON object per line on stderr (Spin captures this).
    #[default]
    Json,
    /// Human-readable line on stderr.
    Human,
    /// Forward to the `tracing` dispatcher instead of writing directly.
    Tracing,
}

/// Structured logger with request context.
#[derive(Debug, Clone)]
pub struct StructuredLogger {
    request_id: RequestId,
    component: Option<String>,
    route: Option<String>,
    start_time: Instant,
    min_level: LogLevel,
    format: LogFormat,
}

impl StructuredLogger {
    pub fn new(request_id: RequestId) -> Self {
        Self {
            request_id,
            component: None,
            route: None,
            start_time: Instant::now(),
            min_level: LogLevel::Info,
            format: LogFormat::Json,
        }
    }

    pub fn with_component(mut self, component: impl Into<String>) -> Self {
        self.component = Some(component.into());
        self
    }

    pub fn with_route(mut self, route: impl Into<String>) -> Self {
        self.route = Some(route.into());
        self
    }

    pub fn with_min_level(mut self, level: LogLevel) -> Self {
        self.min_level = level;
        self
    }

    pub fn with_format(mut self, format: LogFormat) -> Self {
        self.format = format;
        self
    }

    pub fn warn(&self, message: &str) {
        self.log(LogLevel::Warn, message, BTreeMap::new());
    }

    /// Log at error level with `Display` fields.
    pub fn error_with(&self, message: &str, fields: &[(&str, &dyn fmt::Display)]) {
        let fields = fields
            .iter()
            .map(|(k, v)| (k.to_string(), serde_json::json!(v.to_string())))
            .collect();
        self.log(LogLevel::Error, message, fields);
    }

    /// Build the entry that `log` would emit, or `None` below the minimum level.
    pub fn entry(
        &self,
        level: LogLevel,
        message: &str,
        fields: BTreeMap<String, serde_json::Value>,
    ) -> Option<LogEntry> {
        if level < self.min_level {
            return None;
        }

        Some(LogEntry {
            level,
            message: message.to_string(),
            request_id: self.request_id.to_string(),
            component: self.component.clone(),
            route: self.route.clone(),
            fields,
            elapsed_us: Some(self.start_time.elapsed().as_micros() as u64),
        })
    }

    fn log(&self, level: LogLevel, message: &str, fields: BTreeMap<String, serde_json::Value>) {
        let Some(entry) = self.entry(level, message, fields) else {
            return;
        };

        match self.format {
            LogFormat::Json => eprintln!("{}", entry.to_json()),
            LogFormat::Human => eprintln!("{}", entry.to_human()),
            LogFormat::Tracing => forward_to_tracing(&entry),
        }
    }
}

fn forward_to_tracing(entry: &LogEntry) {
    let fields = serde_json::to_string(&entry.fields).unwrap_or_default();
    let component = entry.component.as_deref().unwrap_or("-");
    match entry.level {
        LogLevel::Trace => tracing::trace!(request_id = %entry.request_id, component, %fields, "{}", entry.message),
        LogLevel::Debug => tracing::debug!(request_id = %entry.request_id, component, %fields, "{}", entry.message),
        LogLevel::Info => tracing::info!(request_id = %entry.request_id, component, %fields, "{}", entry.message),
        LogLevel::Warn => tracing::warn!(request_id = %entry.request_id, component, %fields, "{}", entry.message),
        LogLevel::Error => tracing::error!(request_id = %entry.request_id, component, %fields, "{}", entry.message),
    }
}

/// Collects fields for one entry, then emits it.
///
/// ```ignore
/// logger
///     .at(LogLevel::Info, "Categories rendered")
///     .field("cards", 4)
///     .duration_ms("fetch_ms", elapsed)
///     .emit();
/// ```
pub struct LogBuilder<'a> {
    logger: &'a StructuredLogger,
    level: LogLevel,
    message: String,
    fields: BTreeMap<String, serde_json::Value>,
}

impl LogBuilder<'_> {
    /// Any value `serde_json` can hold directly: strings, integers, booleans.
    pub fn field(mut self, key: &str, value: impl Into<serde_json::Value>) -> Self {
        self.fields.insert(key.to_string(), value.into());
        self
    }

    pub fn duration_ms(self, key: &str, duration: std::time::Duration) -> Self {
        self.field(key, duration.as_millis() as u64)
    }

    /// The entry this builder would emit.
    pub fn build(&self) -> Option<LogEntry> {
        self.logger
            .entry(self.level, &self.message, self.fields.clone())
    }

    pub fn emit(self) {
        self.logger.log(self.level, &self.message, self.fields);
    }
}

impl StructuredLogger {
    /// Start an entry with structured fields.
    pub fn at(&self, level: LogLevel, message: impl Into<String>) -> LogBuilder<'_> {
        LogBuilder {
            logger: self,
            level,
            message: message.into(),
            fields: BTreeMap::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn logger() -> StructuredLogger {
        StructuredLogger::new(RequestId::from_string("req-42"))
            .with_component("content-loader")
            .with_route("/")
    }

    #[test]
    fn test_entry_below_min_level_is_dropped() {
        let logger = logger().with_min_level(LogLevel::Warn);
        assert!(logger.entry(LogLevel::Info, "hidden", BTreeMap::new()).is_none());
        assert!(logger.entry(LogLevel::Error, "shown", BTreeMap::new()).is_some());
    }

    #[test]
    fn test_json_entry_flattens_fields() {
        let entry = logger()
            .at(LogLevel::Error, "Error loading categories")
            .field("error", "HTTP error: 404")
            .field("cards", 0)
            .build()
            .unwrap();

        let value: serde_json::Value = serde_json::from_str(&entry.to_json()).unwrap();
        assert_eq!(value["level"], "error");
        assert_eq!(value["request_id"], "req-42");
        assert_eq!(value["component"], "content-loader");
        assert_eq!(value["error"], "HTTP error: 404");
        assert_eq!(value["cards"], 0);
    }

    #[test]
    fn test_human_format() {
        let entry = logger()
            .at(LogLevel::Info, "Categories rendered")
            .field("committed", true)
            .build()
            .unwrap();
        let line = entry.to_human();
        assert!(line.starts_with("[INFO] content-loader: Categories rendered committed=true"));
        assert!(line.ends_with("us)"));
    }
}
