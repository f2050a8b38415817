use clap::Parser;
use config::{Config, Environment, File, FileFormat};
use serde::Deserialize;
use std::env;
use std::path::Path;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Config file path
    #[arg(short, long, env = "CONFIG_FILE")]
    pub config: Option<String>,

    /// Port to listen on
    #[arg(long, env = "PORT")]
    pub port: Option<u16>,

    /// Disable timeout middleware
    #[arg(long, env = "TIMEOUT_DISABLED")]
    pub timeout_disabled: Option<bool>,

    /// Enable the periodic background summarizer
    #[arg(long, env = "SUMMARIZER_ENABLED")]
    pub summarizer_enabled: Option<bool>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub resilience: ResilienceConfig,
    pub summarizer: SummarizerConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub port: u16,
    pub host: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ResilienceConfig {
    pub timeout_disabled: bool,
}

#[derive(Debug, Deserialize, Clone)]
pub struct SummarizerConfig {
    /// Whether the periodic sweep runs at all. The sweep still re-checks the
    /// workspace LLM setting on every tick.
    pub enabled: bool,
    /// Seconds between background sweeps over unsummarized memos.
    pub interval_secs: u64,
}

impl AppConfig {
    pub fn load() -> Result<Self, config::ConfigError> {
        Self::load_from_args(std::env::args())
    }

    pub fn load_from_args<I, T>(args: I) -> Result<Self, config::ConfigError>
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        let cli =
            Cli::try_parse_from(args).map_err(|e| config::ConfigError::Message(e.to_string()))?;

        let mut builder = Config::builder();

        // 1. Defaults
        builder = builder
            .set_default("server.port", 3000)?
            .set_default("server.host", "0.0.0.0")?
            .set_default("resilience.timeout_disabled", false)?
            .set_default("summarizer.enabled", true)?
            .set_default("summarizer.interval_secs", 300)?;

        // 2. Config file: explicit path (flag or CONFIG_FILE), else ./config.yaml
        if let Some(path) = &cli.config {
            builder = builder.add_source(File::new(path, FileFormat::Yaml));
        } else if Path::new("config.yaml").exists() {
            builder = builder.add_source(File::new("config.yaml", FileFormat::Yaml).required(false));
        }

        // 3. Environment variables (prefixed with MEMOPAD_)
        // E.g. MEMOPAD_SERVER__PORT=8000
        builder = builder.add_source(
            Environment::with_prefix("MEMOPAD")
                .separator("__")
                .try_parsing(true),
        );

        // 4. CLI overrides (clap also resolves the per-flag env vars, so
        // PORT/TIMEOUT_DISABLED land here too)
        if let Some(port) = cli.port {
            builder = builder.set_override("server.port", i64::from(port))?;
        }
        if let Some(td) = cli.timeout_disabled {
            builder = builder.set_override("resilience.timeout_disabled", td)?;
        }
        if let Some(se) = cli.summarizer_enabled {
            builder = builder.set_override("summarizer.enabled", se)?;
        }

        // Manual fallback for the interval, which has no dedicated flag
        if let Ok(val) = env::var("MEMOPAD_SUMMARIZER__INTERVAL_SECS")
            && let Ok(secs) = val.parse::<u64>()
        {
            builder = builder.set_override("summarizer.interval_secs", secs)?;
        }

        let cfg = builder.build()?;
        cfg.try_deserialize()
    }
}
