//! Command-line front end for the resolver.
//!
//! Runs the same pipeline as the HTTP service, configured from the same
//! environment variables.
//!
//! # Usage
//!
//! ```bash
//! # Resolve one or more addresses
//! cargo run --bin resolve -- email user@web.de someone@yahoo.co.uk
//!
//! # Tables only, with the tier that answered
//! cargo run --bin resolve -- email user@web.de --offline --debug
//!
//! # Prompt for an address
//! cargo run --bin resolve -- email
//!
//! # Username lookup
//! cargo run --bin resolve -- username @someone
//!
//! # Print the active region tables
//! cargo run --bin resolve -- tables
//! ```

use region_resolver::application::services::ResolverService;
use region_resolver::config::{self, Config};
use region_resolver::domain::entities::Resolution;
use region_resolver::server::build_resolver;
use region_resolver::utils::region_label::{RegionLabel, describe};

use anyhow::Result;
use clap::{Parser, Subcommand};
use colored::*;
use dialoguer::Input;
use tracing_subscriber::EnvFilter;

/// Resolve country codes from the command line.
#[derive(Parser)]
#[command(name = "resolve")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Resolve email addresses
    Email {
        /// Addresses to resolve (prompted for when omitted)
        addresses: Vec<String>,

        /// Skip the remote lookup and use the tables only
        #[arg(long)]
        offline: bool,

        /// Show the domain and the tier that answered
        #[arg(short, long)]
        debug: bool,
    },

    /// Resolve a username
    Username {
        /// Username, with or without a leading '@'
        name: String,
    },

    /// Print the active region tables
    Tables,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let mut config = config::load_from_env()?;

    if let Commands::Email { offline: true, .. } = &cli.command {
        config.remote_lookup = false;
    }

    let resolver = build_resolver(&config)?;

    match cli.command {
        Commands::Email {
            addresses, debug, ..
        } => handle_email(&resolver, addresses, debug).await?,
        Commands::Username { name } => handle_username(&resolver, &name).await?,
        Commands::Tables => print_tables(&resolver, &config),
    }

    Ok(())
}

/// Resolves each address in turn; a malformed one is reported and skipped.
async fn handle_email(
    resolver: &ResolverService,
    mut addresses: Vec<String>,
    debug: bool,
) -> Result<()> {
    if addresses.is_empty() {
        let address: String = Input::new()
            .with_prompt("Email address")
            .interact_text()?;
        addresses.push(address);
    }

    for address in &addresses {
        match resolver.resolve(address).await {
            Ok(resolution) => print_resolution(address, &resolution, debug),
            Err(e) => println!("  {} {}", address.cyan(), e.to_string().red()),
        }
    }

    Ok(())
}

fn print_resolution(address: &str, resolution: &Resolution, debug: bool) {
    if debug {
        let domain = address.rsplit('@').next().unwrap_or_default();
        println!(
            "  {:<32} {} {:<14} {}",
            address.cyan(),
            resolution.code.to_string().bright_yellow().bold(),
            resolution.method.as_str().bright_black(),
            domain.bright_black()
        );
    } else {
        println!(
            "  {:<32} {}",
            address.cyan(),
            resolution.code.to_string().bright_yellow().bold()
        );
    }
}

async fn handle_username(resolver: &ResolverService, name: &str) -> Result<()> {
    let resolution = resolver.resolve_username(name).await?;
    let label = describe(&resolution.code);

    let rendered = match label {
        RegionLabel::AccountNotFound => label.to_string().red(),
        RegionLabel::Country { .. } => label.to_string().green(),
        RegionLabel::Unknown { .. } => label.to_string().yellow(),
    };

    println!(
        "  {} {} {}",
        name.cyan(),
        rendered.bold(),
        format!("({})", resolution.method).bright_black()
    );

    Ok(())
}

/// Prints both tables in key order, then the fallback code list.
///
/// # Output Format
///
/// ```text
/// Region tables (built-in)
///
///   Domains
///   126.com                        CN
///   ...
///   Fallback order: US GB CA AU DE FR ...
/// ```
fn print_tables(resolver: &ResolverService, config: &Config) {
    let tables = resolver.tables();
    let source = config.tables_file.as_deref().unwrap_or("built-in");

    println!("{} ({})", "Region tables".bright_blue().bold(), source);
    println!();

    println!("  {}", "Domains".bright_white().bold());
    for (domain, code) in tables.domain_entries() {
        println!("  {:<30} {}", domain, code.to_string().bright_yellow());
    }
    println!();

    println!("  {}", "TLDs".bright_white().bold());
    for (tld, code) in tables.tld_entries() {
        println!("  {:<30} {}", tld, code.to_string().bright_yellow());
    }
    println!();

    let codes: Vec<&str> = tables.all_codes().iter().map(|c| c.as_str()).collect();
    println!(
        "  Fallback order: {}",
        codes.join(" ").bright_black()
    );
    println!(
        "  Total: {} domains, {} TLDs, {} codes",
        tables.domain_count().to_string().bright_white().bold(),
        tables.tld_count().to_string().bright_white().bold(),
        codes.len().to_string().bright_white().bold()
    );
}
