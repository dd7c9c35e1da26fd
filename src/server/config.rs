use anyhow::{Context, Result};
use std::net::SocketAddr;
use std::path::PathBuf;

pub const DEFAULT_BIND: &str = "127.0.0.1:8080";
pub const DEFAULT_DATA_PATH: &str = "data/phrases.json";

pub const ENV_BIND: &str = "SAFFA_BIND";
pub const ENV_DATA_PATH: &str = "SAFFA_PHRASES_FILE";

/// Startup settings for the phrase service.
///
/// Precedence: command-line flag, then environment variable, then default.
#[derive(Debug, Clone, PartialEq)]
pub struct ServerConfig {
    pub bind_addr: SocketAddr,
    pub data_path: PathBuf,
    /// Log at DEBUG instead of INFO.
    pub verbose: bool,
}

impl ServerConfig {
    pub fn from_env_and_args() -> Result<Self> {
        Self::from_sources(std::env::args().skip(1), |key| std::env::var(key).ok())
    }

    /// Parses `args` (without the program name), consulting `env` for anything
    /// not given on the command line.
    pub fn from_sources<I, F>(args: I, env: F) -> Result<Self>
    where
        I: IntoIterator<Item = String>,
        F: Fn(&str) -> Option<String>,
    {
        let args: Vec<String> = args.into_iter().collect();

        let mut bind: Option<String> = None;
        let mut data: Option<String> = None;
        let mut verbose = false;

        let mut i = 0;
        while i < args.len() {
            match args[i].as_str() {
                "--bind" => {
                    bind = Some(flag_value(&args, i)?);
                    i += 2;
                }
                "--data" => {
                    data = Some(flag_value(&args, i)?);
                    i += 2;
                }
                "--verbose" | "-v" => {
                    verbose = true;
                    i += 1;
                }
                other => {
                    // Logging is not initialised yet at this point.
                    eprintln!("Ignoring unknown argument: {}", other);
                    i += 1;
                }
            }
        }

        let bind = bind
            .or_else(|| env(ENV_BIND))
            .unwrap_or_else(|| DEFAULT_BIND.to_string());
        let bind_addr: SocketAddr = bind
            .parse()
            .with_context(|| format!("invalid bind address '{}'", bind))?;

        let data_path = data
            .or_else(|| env(ENV_DATA_PATH))
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_DATA_PATH));

        Ok(Self {
            bind_addr,
            data_path,
            verbose,
        })
    }
}

fn flag_value(args: &[String], i: usize) -> Result<String> {
    args.get(i + 1)
        .filter(|value| !value.starts_with("--"))
        .cloned()
        .ok_or_else(|| anyhow::anyhow!("{} requires a value", args[i]))
}
