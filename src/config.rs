use std::path::{Path, PathBuf};

use clap::Args;

use crate::share::Attribution;
use crate::utils::fs::{state_path, STATE_DIR};

pub const DEFAULT_QUOTES_FILE: &str = "quotes.json";
pub const DEFAULT_SITE_NAME: &str = "Calm Down Quotes";
pub const DEFAULT_SITE_URL: &str = "https://calm-down-quotes.github.io/";

/// Options shared by every command. Each falls back to an environment
/// variable, then to the built-in default.
#[derive(Debug, Clone, Args)]
pub struct GlobalArgs {
    /// Quote file (JSON list of quotes)
    #[arg(long, global = true, env = "CALMQUOTE_QUOTES", default_value = DEFAULT_QUOTES_FILE)]
    pub quotes: PathBuf,

    /// Directory holding the sequence state
    #[arg(long, global = true, env = "CALMQUOTE_STATE_DIR", default_value = STATE_DIR)]
    pub state_dir: PathBuf,

    /// Site name in the share attribution
    #[arg(long, global = true, env = "CALMQUOTE_SITE_NAME", default_value = DEFAULT_SITE_NAME)]
    pub site_name: String,

    /// Site URL in the share attribution
    #[arg(long, global = true, env = "CALMQUOTE_SITE_URL", default_value = DEFAULT_SITE_URL)]
    pub site_url: String,

    /// More log output on stderr (-v info, -vv debug)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// Resolved runtime configuration.
#[derive(Debug, Clone)]
pub struct Config {
    pub quotes_path: PathBuf,
    pub state_dir: PathBuf,
    pub attribution: Attribution,
}

impl Config {
    pub fn from_args(args: &GlobalArgs) -> Self {
        Config {
            quotes_path: args.quotes.clone(),
            state_dir: args.state_dir.clone(),
            attribution: Attribution::new(&args.site_name, &args.site_url),
        }
    }

    pub fn state_file(&self) -> PathBuf {
        state_path(&self.state_dir)
    }

    pub fn quotes_path(&self) -> &Path {
        &self.quotes_path
    }
}
