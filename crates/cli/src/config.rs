use crate::{env::EnvManager, error::CliError};
use clap::Args;
use connectors::search::{
    ElasticConfig,
    config::{DEFAULT_HOST, DEFAULT_PORT, DEFAULT_TIMEOUT, DEFAULT_USERNAME},
};
use std::time::Duration;

/// Connection flags. Each one falls back to its environment variable and
/// then to a built-in default.
#[derive(Args, Debug, Default)]
pub struct ConnArgs {
    /// Store host [env: ES_HOST]
    #[arg(long, global = true)]
    pub host: Option<String>,

    /// Store port [env: ES_PORT]
    #[arg(long, global = true)]
    pub port: Option<u16>,

    /// "http" or "https" [env: ES_SCHEME]
    #[arg(long, global = true)]
    pub scheme: Option<String>,

    /// Basic-auth user [env: ES_USERNAME]
    #[arg(long, global = true)]
    pub username: Option<String>,

    /// Basic-auth password [env: ES_PASSWORD]
    #[arg(long, global = true)]
    pub password: Option<String>,

    /// Skip TLS certificate verification [env: ES_VERIFY_CERTS=false]
    #[arg(long, global = true)]
    pub insecure: bool,

    /// Request timeout in seconds [env: ES_TIMEOUT_SECS]
    #[arg(long, global = true)]
    pub timeout_secs: Option<u64>,

    /// Read additional variables from this .env file
    #[arg(long, global = true)]
    pub env_file: Option<String>,
}

impl ConnArgs {
    pub fn resolve(&self, env: &EnvManager) -> Result<ElasticConfig, CliError> {
        let password = match &self.password {
            Some(password) => password.clone(),
            None => env
                .get("ES_PASSWORD")
                .map(str::to_string)
                .ok_or_else(|| {
                    CliError::Config(
                        "No store password given: pass --password or set ES_PASSWORD".into(),
                    )
                })?,
        };

        let verify_certs = if self.insecure {
            false
        } else {
            env.parse::<bool>("ES_VERIFY_CERTS")?.unwrap_or(true)
        };
        let timeout = match self.timeout_secs {
            Some(secs) => Duration::from_secs(secs),
            None => env
                .parse::<u64>("ES_TIMEOUT_SECS")?
                .map(Duration::from_secs)
                .unwrap_or(DEFAULT_TIMEOUT),
        };

        Ok(ElasticConfig {
            scheme: pick(&self.scheme, env, "ES_SCHEME", "https"),
            host: pick(&self.host, env, "ES_HOST", DEFAULT_HOST),
            port: match self.port {
                Some(port) => port,
                None => env.parse::<u16>("ES_PORT")?.unwrap_or(DEFAULT_PORT),
            },
            username: pick(&self.username, env, "ES_USERNAME", DEFAULT_USERNAME),
            password,
            verify_certs,
            timeout,
        })
    }
}

fn pick(flag: &Option<String>, env: &EnvManager, key: &str, default: &str) -> String {
    flag.clone()
        .or_else(|| env.get(key).map(str::to_string))
        .unwrap_or_else(|| default.to_string())
}
