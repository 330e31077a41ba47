//! CLI argument parsing types.
//!
//! This module provides the command-line interface structure for the tonicpow binary.

use clap::{Parser, Subcommand, ValueEnum};

/// TonicPow API command-line interface.
#[derive(Parser, Debug)]
#[command(name = "tonicpow", about = "TonicPow API CLI", version)]
pub struct Cli {
    /// Output results as JSON instead of a table.
    #[arg(long, global = true, default_value = "false")]
    pub json: bool,

    /// Log requests to stderr.
    #[arg(short, long, global = true, default_value = "false")]
    pub verbose: bool,

    /// API key used to authenticate.
    #[arg(long, env = "TONICPOW_API_KEY", hide_env_values = true, global = true)]
    pub api_key: Option<String>,

    /// Environment to talk to (live, staging, development).
    #[arg(long, env = "TONICPOW_ENVIRONMENT", global = true)]
    pub environment: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

/// Available CLI commands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Get a single entity by ID.
    Get {
        /// The type of entity to get.
        entity: Entity,

        /// The numeric ID (or the session GUID for sessions).
        id: String,
    },

    /// List campaigns with pagination.
    List {
        /// The type of entity to list.
        entity: ListEntity,

        /// Page number (1-indexed).
        #[arg(long)]
        page: Option<u32>,

        /// Number of items per page.
        #[arg(long)]
        count: Option<u32>,
    },

    /// Show the current rate for a currency.
    Rate {
        /// Currency code (e.g. usd).
        currency: String,

        /// Amount to convert.
        #[arg(long, default_value = "1")]
        amount: f64,
    },
}

/// Entity types that can be fetched.
#[derive(ValueEnum, Clone, Debug, PartialEq, Eq)]
pub enum Entity {
    /// A user.
    #[value(alias = "users")]
    User,
    /// An advertiser profile.
    #[value(alias = "advertisers")]
    Advertiser,
    /// A campaign.
    #[value(alias = "campaigns")]
    Campaign,
    /// A campaign goal.
    #[value(alias = "goals")]
    Goal,
    /// A goal conversion.
    #[value(alias = "conversions")]
    Conversion,
    /// A promoter link.
    #[value(alias = "links")]
    Link,
    /// A visitor session.
    #[value(alias = "sessions")]
    Session,
}

/// Entity types that can be listed.
#[derive(ValueEnum, Clone, Debug, PartialEq, Eq)]
pub enum ListEntity {
    /// Campaigns.
    #[value(alias = "campaign")]
    Campaigns,
}
