use app_core::string_error::ErrorStringExt;
use std::{io::Read, path::PathBuf, str::FromStr};

use crate::curves::{CurveKind, RetentionPolicy, Rgb};

const CONFIG_FILE: &str = ".curvecmp";

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Directory the open dialog starts in.
    pub open_path: PathBuf,
    pub roc_score: f64,
    pub pr_score: f64,
    pub grid: bool,
    pub background: Rgb,
    pub retention: RetentionPolicy,
    /// Plot shown after start-up.
    pub start_plot: CurveKind,
}

impl Default for Config {
    fn default() -> Self {
        let open_path = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
        Self {
            open_path,
            roc_score: CurveKind::Roc.default_score(),
            pr_score: CurveKind::Pr.default_score(),
            grid: true,
            background: Rgb(185, 213, 248),
            retention: RetentionPolicy::KeepAll,
            start_plot: CurveKind::Roc,
        }
    }
}

impl Config {
    /// Read `~/.curvecmp`.
    pub fn from_config_file() -> Result<Self, String> {
        #[allow(deprecated)]
        let Some(home) = std::env::home_dir() else {
            return Err("could not determine home directory to load config file".into());
        };
        let config_raw = {
            let path = home.join(PathBuf::from(CONFIG_FILE));
            let mut file = std::fs::File::open(path).err_to_string("could not open config file")?;
            let mut buf = String::new();
            file.read_to_string(&mut buf)
                .err_to_string("could not load config file")?;
            buf
        };
        Ok(Self::from_config_str(&config_raw))
    }

    /// Parse `key=value` lines on top of the defaults. Unknown keys are
    /// skipped, invalid values keep the default.
    pub fn from_config_str(config_raw: &str) -> Self {
        let mut config = Self::default();
        for line in config_raw.lines() {
            // Lines starting with "#" are considered comments.
            if line.trim_start().starts_with('#') {
                continue;
            }
            let Some((key, val)) = line.split_once('=') else {
                continue;
            };
            let (key, val) = (key.trim(), val.trim());
            match key {
                "open_path" => match PathBuf::from_str(val) {
                    Ok(path) => config.open_path = path,
                    Err(err) => log::warn!("could not parse 'open_path': {err}"),
                },
                "roc_score" => {
                    if let Ok(score) = val.parse::<f64>() {
                        config.roc_score = score;
                    } else {
                        log::warn!("could not parse 'roc_score' as number")
                    }
                }
                "pr_score" => {
                    if let Ok(score) = val.parse::<f64>() {
                        config.pr_score = score;
                    } else {
                        log::warn!("could not parse 'pr_score' as number")
                    }
                }
                "grid" => match val {
                    "true" | "on" | "1" => config.grid = true,
                    "false" | "off" | "0" => config.grid = false,
                    _ => log::warn!("could not parse 'grid' as boolean"),
                },
                "background" => {
                    if let Some(color) = Rgb::parse(val) {
                        config.background = color;
                    } else {
                        log::warn!("could not parse 'background' as r,g,b")
                    }
                }
                "detached_limit" => {
                    if val == "none" {
                        config.retention = RetentionPolicy::KeepAll;
                    } else if let Ok(limit) = val.parse::<usize>() {
                        config.retention = RetentionPolicy::KeepAtMost(limit);
                    } else {
                        log::warn!("could not parse 'detached_limit' as number")
                    }
                }
                "start_plot" => match val.to_ascii_lowercase().as_str() {
                    "roc" => config.start_plot = CurveKind::Roc,
                    "pr" => config.start_plot = CurveKind::Pr,
                    _ => log::warn!("'start_plot' must be 'roc' or 'pr'"),
                },
                _ => continue,
            }
        }
        config
    }

    pub fn default_score(&self, kind: CurveKind) -> f64 {
        match kind {
            CurveKind::Roc => self.roc_score,
            CurveKind::Pr => self.pr_score,
        }
    }
}
