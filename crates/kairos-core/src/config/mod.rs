use anyhow::Result;
use config::Config;
use config::builder::{ConfigBuilder, DefaultState};
use serde::Deserialize;

use crate::error::{CoreError, CoreResult};

/// Occurrences returned by a generate request that names no cap.
pub const DEFAULT_GENERATE_CAP: u64 = 100;
/// Ceiling on any requested cap.
pub const DEFAULT_MAX_CAP: u64 = 1000;
/// Occurrences shown by a schedule preview.
pub const DEFAULT_PREVIEW_CAP: u64 = 50;

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub server: ServerConfig,
    pub logging: LoggingConfig,
    pub generation: GenerationConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub serve_origin: Option<String>,
}

impl ServerConfig {
    /// ## Summary
    /// Returns the bind address in the format "host:port".
    #[must_use]
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// ## Summary
    /// Returns the server origin URL.
    #[must_use]
    pub fn origin(&self) -> String {
        if let Some(origin) = &self.serve_origin {
            origin.clone()
        } else {
            format!("http://{}", self.bind_addr())
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    pub level: String,
}

/// Occurrence caps applied by the HTTP host.
#[derive(Debug, Clone, Deserialize)]
pub struct GenerationConfig {
    /// Cap used by `generate` when the request does not name one.
    pub default_cap: usize,
    /// Upper bound on any requested cap.
    pub max_cap: usize,
    /// Cap used when refreshing a schedule preview.
    pub preview_cap: usize,
}

impl GenerationConfig {
    /// ## Summary
    /// Resolves the cap for a generate request, falling back to `default_cap`
    /// and never exceeding `max_cap`.
    #[must_use]
    pub fn resolve_cap(&self, requested: Option<usize>) -> usize {
        requested.unwrap_or(self.default_cap).min(self.max_cap)
    }
}

impl Settings {
    /// ## Summary
    /// Loads configuration from environment variables and an optional
    /// `config.toml` into a `Settings`.
    ///
    /// ## Errors
    /// Returns an error if building the configuration, deserializing it, or
    /// checking its consistency fails.
    pub fn load() -> Result<Self> {
        let settings = Self::defaults()?
            // Environment, e.g. KAIROS_GENERATION__MAX_CAP=500
            .add_source(
                config::Environment::with_prefix("KAIROS")
                    .prefix_separator("_")
                    .separator("__")
                    .ignore_empty(true)
                    .try_parsing(true),
            )
            // TOML file
            .add_source(config::File::with_name("config.toml").required(false))
            .build()?
            .try_deserialize::<Settings>()?;

        settings.check()?;
        Ok(settings)
    }

    /// Builder pre-loaded with the built-in defaults and no other source.
    fn defaults() -> Result<ConfigBuilder<DefaultState>, config::ConfigError> {
        Config::builder()
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", 8698)?
            .set_default("logging.level", "debug")?
            .set_default("generation.default_cap", DEFAULT_GENERATE_CAP)?
            .set_default("generation.max_cap", DEFAULT_MAX_CAP)?
            .set_default("generation.preview_cap", DEFAULT_PREVIEW_CAP)
    }

    /// ## Summary
    /// Checks that the generation caps are mutually consistent.
    ///
    /// ## Errors
    /// Returns `CoreError::ConfigError` if `max_cap` is zero or smaller than
    /// either of the other caps.
    pub fn check(&self) -> CoreResult<()> {
        let generation = &self.generation;
        if generation.max_cap == 0 {
            return Err(CoreError::ConfigError(
                "generation.max_cap must be at least 1".to_string(),
            ));
        }
        if generation.default_cap > generation.max_cap {
            return Err(CoreError::ConfigError(format!(
                "generation.default_cap ({}) exceeds generation.max_cap ({})",
                generation.default_cap, generation.max_cap
            )));
        }
        if generation.preview_cap > generation.max_cap {
            return Err(CoreError::ConfigError(format!(
                "generation.preview_cap ({}) exceeds generation.max_cap ({})",
                generation.preview_cap, generation.max_cap
            )));
        }
        Ok(())
    }
}

/// ## Summary
/// Loads configuration from environment variables and `.env` file.
///
/// ## Errors
/// Returns an error if loading or deserializing the configuration fails.
pub fn load_config() -> Result<Settings> {
    dotenvy::dotenv().ok();

    let settings = Settings::load()?;
    tracing::debug!(
        default_cap = settings.generation.default_cap,
        max_cap = settings.generation.max_cap,
        preview_cap = settings.generation.preview_cap,
        "Generation caps resolved"
    );
    Ok(settings)
}

#[cfg(test)]
mod tests;
