//! CLI command implementations
//!
//! `serve` loads the dataset in the background and answers HTTP queries.
//! `query` and `info` load it synchronously, print one JSON document and exit.

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::info as log_info;

use crate::dataset::{Dataset, DatasetSlot};
use crate::http_server::{spawn_loader, HttpServer, HttpServerConfig, INFO_SAMPLE_SIZE};
use crate::parser::{ExplainIntent, IntentParser};
use crate::pipeline::{self, QueryResponse};

use super::args::{Command, DEFAULT_CONFIG_PATH};
use super::errors::{CliError, CliResult};

/// Configuration file structure
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// GeoJSON file to load (default: Electric-Power-Transmission-Lines.geojson)
    #[serde(default = "default_data_file")]
    pub data_file: String,

    /// HTTP listener settings
    #[serde(default)]
    pub http: HttpServerConfig,
}

fn default_data_file() -> String {
    "Electric-Power-Transmission-Lines.geojson".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_file: default_data_file(),
            http: HttpServerConfig::default(),
        }
    }
}

impl Config {
    /// Load configuration from file
    pub fn load(path: &Path) -> CliResult<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            CliError::config_error(format!("Failed to read config {}: {}", path.display(), e))
        })?;

        let config: Config = serde_json::from_str(&content)
            .map_err(|e| CliError::config_error(format!("Invalid config JSON: {}", e)))?;

        config.validate()?;

        Ok(config)
    }

    /// Load configuration, falling back to defaults when the default
    /// config file is absent. An explicit path must exist.
    pub fn resolve(path: &Path) -> CliResult<Self> {
        if path == Path::new(DEFAULT_CONFIG_PATH) && !path.exists() {
            log_info!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }
        Self::load(path)
    }

    fn validate(&self) -> CliResult<()> {
        if self.data_file.trim().is_empty() {
            return Err(CliError::config_error("data_file must not be empty"));
        }

        if self.http.port == 0 {
            return Err(CliError::config_error("http.port must be > 0"));
        }

        Ok(())
    }

    /// Get data file as Path
    pub fn data_path(&self) -> PathBuf {
        PathBuf::from(&self.data_file)
    }
}

/// Main CLI entry point
///
/// Parses arguments and dispatches to the appropriate command.
/// This is the only function that main.rs should call.
pub fn run() -> CliResult<()> {
    let cli = super::args::Cli::parse_args();
    run_command(cli.command)
}

/// Run the appropriate command based on CLI args
pub fn run_command(cmd: Command) -> CliResult<()> {
    match cmd {
        Command::Serve { config } => serve(&config),
        Command::Query { config, text } => query(&config, &text),
        Command::Explain { text } => explain(&text),
        Command::Info { config } => info(&config),
    }
}

/// Start the HTTP service
///
/// The listener comes up immediately; queries answer 503 until the
/// background loader installs the dataset.
pub fn serve(config_path: &Path) -> CliResult<()> {
    let config = Config::resolve(config_path)?;

    let slot = Arc::new(DatasetSlot::new());
    let server = HttpServer::with_config(config.http.clone(), slot.clone());

    let rt = tokio::runtime::Runtime::new()
        .map_err(|e| CliError::boot_failed(format!("Failed to create tokio runtime: {}", e)))?;

    rt.block_on(async {
        let _loader = spawn_loader(slot, config.data_path());
        server
            .start()
            .await
            .map_err(|e| CliError::boot_failed(format!("HTTP server failed: {}", e)))
    })?;

    Ok(())
}

/// Answer a single question and print the response JSON
pub fn query(config_path: &Path, text: &str) -> CliResult<()> {
    let config = Config::resolve(config_path)?;
    let response = answer_with(&config, text)?;
    write_json(&response)
}

/// Print the explain report for a question
pub fn explain(text: &str) -> CliResult<()> {
    let intent = IntentParser::parse(text);
    let report = ExplainIntent::from_intent(&intent);

    let mut stdout = io::stdout();
    write!(stdout, "{}", report)?;
    stdout.flush()?;

    Ok(())
}

/// Load the dataset and print its summary
pub fn info(config_path: &Path) -> CliResult<()> {
    let config = Config::resolve(config_path)?;
    let dataset = Dataset::load(&config.data_path())?;
    write_json(&dataset.summary(INFO_SAMPLE_SIZE))
}

fn answer_with(config: &Config, text: &str) -> CliResult<QueryResponse> {
    let dataset = Dataset::load(&config.data_path())?;
    let slot = DatasetSlot::loaded(dataset);
    Ok(pipeline::answer(&slot, text)?)
}

fn write_json<T: Serialize>(value: &T) -> CliResult<()> {
    let mut stdout = io::stdout();
    serde_json::to_writer_pretty(&mut stdout, value)?;
    writeln!(stdout)?;
    stdout.flush()?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::errors::CliErrorCode;
    use serde_json::json;
    use tempfile::TempDir;

    fn write_file(dir: &TempDir, name: &str, body: &str) -> PathBuf {
        let path = dir.path().join(name);
        fs::write(&path, body).unwrap();
        path
    }

    #[test]
    fn test_config_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = write_file(&temp_dir, "gridquery.json", "{}");

        let config = Config::load(&config_path).unwrap();
        assert_eq!(config.data_file, "Electric-Power-Transmission-Lines.geojson");
        assert_eq!(config.http.port, 8000);
        assert_eq!(config.http.host, "0.0.0.0");
        assert!(config.http.cors_origins.is_empty());
    }

    #[test]
    fn test_config_rejects_zero_port() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = write_file(
            &temp_dir,
            "gridquery.json",
            &json!({"http": {"port": 0}}).to_string(),
        );

        let err = Config::load(&config_path).unwrap_err();
        assert_eq!(err.code(), &CliErrorCode::ConfigError);
    }

    #[test]
    fn test_config_rejects_empty_data_file() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = write_file(&temp_dir, "gridquery.json", r#"{"data_file": "  "}"#);

        assert!(Config::load(&config_path).is_err());
    }

    #[test]
    fn test_explicit_missing_config_is_error() {
        let temp_dir = TempDir::new().unwrap();
        let missing = temp_dir.path().join("nope.json");

        let err = Config::resolve(&missing).unwrap_err();
        assert_eq!(err.code(), &CliErrorCode::ConfigError);
    }

    #[test]
    fn test_answer_with_loaded_file() {
        let temp_dir = TempDir::new().unwrap();
        let data = json!({
            "type": "FeatureCollection",
            "features": [
                {"type": "Feature", "geometry": null,
                 "properties": {"VOLTAGE": 345, "SHAPE__Len": 1000.0}},
                {"type": "Feature", "geometry": null,
                 "properties": {"VOLTAGE": 500, "SHAPE__Len": 2000.0}}
            ]
        });
        let data_path = write_file(&temp_dir, "lines.geojson", &data.to_string());

        let config = Config {
            data_file: data_path.to_string_lossy().into_owned(),
            ..Config::default()
        };

        let response = answer_with(&config, "show 345kv lines").unwrap();
        assert_eq!(response.geojson_data.len(), 1);
        assert!(response.text_response.starts_with("Found **1** 345kV lines"));
    }

    #[test]
    fn test_answer_with_missing_data_file() {
        let config = Config {
            data_file: "/definitely/not/here.geojson".into(),
            ..Config::default()
        };

        let err = answer_with(&config, "show 345kv lines").unwrap_err();
        assert_eq!(err.code(), &CliErrorCode::DatasetError);
    }
}
