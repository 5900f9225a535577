// src/config.rs

use anyhow::{bail, Result};
use std::{env, path::PathBuf};

pub const DEFAULT_ENGLISH: &str = "telematic.html";
pub const DEFAULT_GERMAN: &str = "telematic_de.html";
pub const DEFAULT_OUTPUT: &str = "telematic.json";

pub const ENV_ENGLISH: &str = "TELESCRAPER_EN";
pub const ENV_GERMAN: &str = "TELESCRAPER_DE";
pub const ENV_OUTPUT: &str = "TELESCRAPER_OUT";

pub const USAGE: &str = "usage: telescraper [ENGLISH_HTML] [GERMAN_HTML] [OUTPUT]";

/// Input and output locations for one conversion run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConvertConfig {
    pub english: PathBuf,
    pub german: PathBuf,
    pub output: PathBuf,
}

impl Default for ConvertConfig {
    fn default() -> Self {
        Self {
            english: PathBuf::from(DEFAULT_ENGLISH),
            german: PathBuf::from(DEFAULT_GERMAN),
            output: PathBuf::from(DEFAULT_OUTPUT),
        }
    }
}

impl ConvertConfig {
    /// Build from the process arguments and environment.
    pub fn from_env() -> Result<Self> {
        Self::resolve(env::args().skip(1), |key| env::var(key).ok())
    }

    /// Positional arguments win, then `lookup(var)`, then the defaults.
    pub fn resolve<I, F>(args: I, lookup: F) -> Result<Self>
    where
        I: IntoIterator<Item = String>,
        F: Fn(&str) -> Option<String>,
    {
        let args: Vec<String> = args.into_iter().collect();
        if args.len() > 3 {
            bail!("too many arguments ({})\n{}", args.len(), USAGE);
        }
        if args.iter().any(|a| a == "-h" || a == "--help") {
            bail!("{}", USAGE);
        }

        let pick = |idx: usize, var: &str, default: &str| -> PathBuf {
            args.get(idx)
                .cloned()
                .or_else(|| lookup(var).filter(|v| !v.is_empty()))
                .unwrap_or_else(|| default.to_string())
                .into()
        };

        Ok(Self {
            english: pick(0, ENV_ENGLISH, DEFAULT_ENGLISH),
            german: pick(1, ENV_GERMAN, DEFAULT_GERMAN),
            output: pick(2, ENV_OUTPUT, DEFAULT_OUTPUT),
        })
    }
}
