use clap::{Parser, Subcommand};

#[derive(Debug, Clone, Parser)]
#[command(name = "careers-atlas")]
#[command(about = "Query and export careers-guidance content tables")]
pub struct CliConfig {
    /// Path to a TOML configuration file
    #[arg(short, long, global = true)]
    pub config: Option<String>,

    /// Directory holding <table>.json files (defaults to the built-in content)
    #[arg(long, global = true)]
    pub content_dir: Option<String>,

    /// Use built-in tables for any missing from --content-dir
    #[arg(long, global = true)]
    pub fallback_to_builtin: bool,

    #[arg(short, long, global = true, help = "Enable verbose output")]
    pub verbose: bool,

    /// Emit logs as JSON lines
    #[arg(long, global = true)]
    pub json_logs: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// List every country
    Countries,
    /// Show one country
    Country { name: String },
    /// Show a sector's base record
    Sector { sector: String },
    /// Show a sector's metrics with a country's overrides applied
    Resolve { country: String, sector: String },
    /// Aggregate every side-table entry for a role
    Occupation { role: String },
    /// Show a skill's ladder, job titles and hotspot within a sector
    Skill { sector: String, skill: String },
    /// List a sector's venture playbook
    Ventures { sector: String },
    /// Show the regulations and challenges for a venture
    Venture { title: String },
    /// List the credentials a role needs in a country and sector
    Credentials {
        country: String,
        sector: String,
        /// Role name; ignored when --tags is given
        role: Option<String>,
        #[arg(long, value_delimiter = ',')]
        tags: Vec<String>,
    },
    /// Show a sector's pathway and diagnostic configuration
    Pathway { sector: String },
    /// Report side-table gaps
    Audit,
    /// Write the tables out as JSON, a ZIP archive or an occupations CSV
    Export {
        #[arg(long)]
        output: Option<String>,
        #[arg(long, value_delimiter = ',')]
        formats: Vec<String>,
    },
}
