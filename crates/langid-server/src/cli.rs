use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug, Default)]
#[command(name = "langid-server")]
#[command(author, version, about = "Natural and programming language detection API", long_about = None)]
pub struct Cli {
    /// Configuration file path
    #[arg(short, long, default_value = "langid.yaml", env = "LANGID_CONFIG")]
    pub config: String,

    /// Listen address
    #[arg(short = 'l', long, env = "LANGID_LISTEN")]
    pub listen: Option<String>,

    /// Listen port
    #[arg(short = 'P', long, env = "LANGID_PORT")]
    pub port: Option<u16>,

    /// Path to the trained model artifact
    #[arg(short, long, env = "LANGID_MODEL_PATH")]
    pub model: Option<PathBuf>,

    /// Refuse to start when the model cannot be loaded (`--strict=false` overrides the config file)
    #[arg(long, env = "LANGID_STRICT", num_args = 0..=1, require_equals = true, default_missing_value = "true")]
    pub strict: Option<bool>,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}
