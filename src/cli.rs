//! CLI command definitions and subcommands

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use uuid::Uuid;

/// Vitrina - product catalog with generated ad sheets
#[derive(Parser)]
#[command(
    name = "vitrina",
    about = "Product catalog backend with LLM-generated ad sheets",
    version
)]
pub struct Cli {
    /// Path to config file
    #[arg(short, long, global = true, help = "Path to config file")]
    pub config: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long, global = true, help = "Enable verbose output")]
    pub verbose: bool,

    /// Subcommand to execute; without one the server starts
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// CLI subcommands
#[derive(Subcommand)]
pub enum Command {
    /// Start the HTTP server
    Serve {
        /// Bind address override
        #[arg(long)]
        host: Option<String>,

        /// Port override
        #[arg(short, long)]
        port: Option<u16>,
    },

    /// Generate a single ad sheet and print it
    Generate {
        /// Target platform (facebook, whatsapp, revolico)
        platform: String,

        /// Template name within the platform
        template: String,

        /// Product id to include (repeat for several)
        #[arg(short = 'i', long = "product-id", required = true)]
        product_ids: Vec<Uuid>,

        /// Sheet title
        #[arg(short, long, default_value = "Generated from CLI")]
        title: String,
    },

    /// List available platforms and their templates
    Templates {
        /// Output format
        #[arg(short, long, default_value = "text")]
        format: OutputFormat,
    },
}

/// Output format for the templates command
#[derive(Clone, Debug, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" | "plain" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            _ => Err(format!("Unknown format: {}. Use: text or json", s)),
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Text => write!(f, "text"),
            Self::Json => write!(f, "json"),
        }
    }
}
