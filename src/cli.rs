//! Command-line arguments of the `pageview` binary.

use clap::Parser;
use pageview_core::Size;
use std::path::PathBuf;

use crate::script;

#[derive(Debug, Parser)]
#[command(name = "pageview")]
#[command(
    version,
    long_version = concat!(env!("CARGO_PKG_VERSION"), " (", env!("BUILD_DATE"), ")")
)]
#[command(about = "Replays a command script against a simulated document")]
#[command(
    long_about = "Replays a command script against a simulated document. Without SCRIPT the \
                  commands are read from stdin."
)]
pub struct Cli {
    /// Viewer configuration file (JSON or TOML)
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Number of pages in the simulated document
    #[arg(long, default_value_t = 4)]
    pub pages: u32,

    /// Unrotated page size in page units
    #[arg(long, value_name = "WxH", default_value = "612x792", value_parser = parse_page_size)]
    pub page_size: Size,

    /// Command script; stdin when omitted
    #[arg(value_name = "SCRIPT")]
    pub script: Option<PathBuf>,
}

fn parse_page_size(value: &str) -> Result<Size, String> {
    script::parse_size(value).map_err(|e| format!("{:#}", e))
}
