use crate::utils::logger::LogFormat;
use clap::Parser;

/// 未指定的旗標為 None，交由 TOML 或預設值決定
#[derive(Debug, Clone, Parser)]
#[command(name = "mergington-activities")]
#[command(about = "Extracurricular activity signup API for Mergington High School")]
pub struct CliConfig {
    /// Listen host [default: 127.0.0.1]
    #[arg(long)]
    pub host: Option<String>,

    /// Listen port [default: 8000]
    #[arg(long)]
    pub port: Option<u16>,

    /// Directory served under /static [default: static]
    #[arg(long)]
    pub static_dir: Option<String>,

    /// Path to an optional TOML configuration file
    #[arg(short, long)]
    pub config: Option<String>,

    /// Log output format [default: compact]
    #[arg(long, value_enum)]
    pub log_format: Option<LogFormat>,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,
}
