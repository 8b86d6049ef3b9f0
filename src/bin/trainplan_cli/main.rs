// ABOUTME: trainplan CLI - command-line access to the weekly planner
// ABOUTME: Previews a week without storage, generates against the database, and mints dev tokens
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
//!
//! Usage:
//! ```bash
//! # Show the week a goal would produce, without touching storage
//! trainplan-cli preview --goal "get stronger" --experience advanced --days 7
//!
//! # Same, pretending five sessions averaging 12 sets were logged last week
//! trainplan-cli preview --goal hypertrophy --sessions 5 --average-volume 12
//!
//! # Generate and store a week for a user
//! trainplan-cli generate --user-id athlete-7 --start-date 2026-03-02 --plan-id block-a
//!
//! # Mint a bearer token for a user (uses JWT_SECRET)
//! trainplan-cli token --user-id athlete-7
//! ```

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::env;
use trainplan_server::constants::defaults;

#[derive(Parser)]
#[command(
    name = "trainplan-cli",
    about = "trainplan weekly planner CLI",
    long_about = "Preview, generate, and inspect weekly training plans from the command line."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Database URL override
    #[arg(long, global = true)]
    database_url: Option<String>,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Command {
    /// Print the pure prescription for a goal as JSON (no database)
    Preview {
        /// Free-text or enumerated goal
        #[arg(long, default_value = "unknown")]
        goal: String,

        /// beginner, intermediate, or advanced
        #[arg(long, default_value = "intermediate")]
        experience: String,

        /// Days to plan (clamped to 1..=14)
        #[arg(long)]
        days: Option<i64>,

        /// First day, YYYY-MM-DD (default: today)
        #[arg(long)]
        start_date: Option<String>,

        /// Sessions logged in the previous seven days
        #[arg(long, default_value = "0")]
        sessions: u32,

        /// Average hard-set volume of those sessions
        #[arg(long, default_value = "0")]
        average_volume: f64,
    },

    /// Generate a week for a user and store it
    Generate {
        /// User to plan for
        #[arg(long)]
        user_id: String,

        /// Goal override (default: stored goal)
        #[arg(long)]
        goal: Option<String>,

        /// beginner, intermediate, or advanced
        #[arg(long, default_value = "intermediate")]
        experience: String,

        /// Days to plan (clamped to 1..=14)
        #[arg(long)]
        days: Option<i64>,

        /// First day, YYYY-MM-DD (default: today)
        #[arg(long)]
        start_date: Option<String>,

        /// Tag applied to every written row
        #[arg(long)]
        plan_id: Option<String>,
    },

    /// Mint a bearer token for a user
    Token {
        /// Token subject
        #[arg(long)]
        user_id: String,

        /// Lifetime in hours (default: JWT_EXPIRY_HOURS)
        #[arg(long)]
        expiry_hours: Option<i64>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let log_level = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(log_level)
        .with_writer(std::io::stderr)
        .init();

    let database_url = cli
        .database_url
        .or_else(|| env::var("DATABASE_URL").ok())
        .unwrap_or_else(|| defaults::DATABASE_URL.into());

    match cli.command {
        Command::Preview {
            goal,
            experience,
            days,
            start_date,
            sessions,
            average_volume,
        } => commands::preview::run(&commands::preview::PreviewArgs {
            goal,
            experience,
            days,
            start_date,
            sessions,
            average_volume,
        }),
        Command::Generate {
            user_id,
            goal,
            experience,
            days,
            start_date,
            plan_id,
        } => {
            commands::generate::run(
                &database_url,
                commands::generate::GenerateArgs {
                    user_id,
                    goal,
                    experience,
                    days,
                    start_date,
                    plan_id,
                },
            )
            .await
        }
        Command::Token {
            user_id,
            expiry_hours,
        } => commands::token::run(&user_id, expiry_hours),
    }
}
