//! CLI administration tool for url-shortener.
//!
//! Provides commands for managing the encryption key, inspecting stored
//! payloads, and looking at rate-limit counters without going through the
//! HTTP API.
//!
//! # Usage
//!
//! ```bash
//! # Generate a new encryption key
//! cargo run --bin admin -- key generate
//!
//! # Decrypt a stored payload with ENCRYPTION_KEY
//! cargo run --bin admin -- payload decrypt 6f1c...e2
//!
//! # Show or reset a client's rate-limit counter
//! cargo run --bin admin -- limiter status 203.0.113.7
//! cargo run --bin admin -- limiter reset 203.0.113.7
//!
//! # Check the counter service
//! cargo run --bin admin -- limiter check
//! ```
//!
//! # Environment Variables
//!
//! - `ENCRYPTION_KEY`: required by `payload` commands
//! - `REDIS_URL` or `REDIS_HOST` etc.: required by `limiter` commands

use url_shortener::config::{Config, mask_connection_string};
use url_shortener::domain::entities::EncryptedUrl;
use url_shortener::domain::repositories::CounterStore;
use url_shortener::infrastructure::counter::RedisCounterStore;
use url_shortener::utils::url_cipher::{KEY_LENGTH, UrlCipher};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use dialoguer::Confirm;

/// CLI tool for managing url-shortener.
#[derive(Parser)]
#[command(name = "admin")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Top-level command groups.
#[derive(Subcommand)]
enum Commands {
    /// Manage the URL encryption key
    Key {
        #[command(subcommand)]
        action: KeyAction,
    },

    /// Encrypt or decrypt stored payloads
    Payload {
        #[command(subcommand)]
        action: PayloadAction,
    },

    /// Inspect rate-limit counters in Redis
    Limiter {
        #[command(subcommand)]
        action: LimiterAction,
    },
}

/// Key management subcommands.
#[derive(Subcommand)]
enum KeyAction {
    /// Generate a new random key
    Generate {
        /// Print only the hex key (for scripts)
        #[arg(long)]
        raw: bool,
    },
}

/// Payload subcommands.
#[derive(Subcommand)]
enum PayloadAction {
    /// Encrypt a URL the way the server stores it
    Encrypt {
        /// URL to encrypt
        url: String,
    },

    /// Decrypt a stored payload
    Decrypt {
        /// Hex payload (IV followed by ciphertext)
        payload: String,

        /// Skip confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
    },
}

/// Rate-limit counter subcommands.
#[derive(Subcommand)]
enum LimiterAction {
    /// Check the counter service connection
    Check,

    /// Show a client's current count and remaining window
    Status {
        /// Client key (IP address)
        client: String,
    },

    /// Delete a client's counter, lifting its limit immediately
    Reset {
        /// Client key (IP address)
        client: String,

        /// Skip confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command {
        Commands::Key { action } => handle_key_action(action)?,
        Commands::Payload { action } => handle_payload_action(action)?,
        Commands::Limiter { action } => handle_limiter_action(action).await?,
    }

    Ok(())
}

/// Dispatches key management commands.
fn handle_key_action(action: KeyAction) -> Result<()> {
    match action {
        KeyAction::Generate { raw } => {
            let key = generate_key()?;

            if raw {
                println!("{}", key);
                return Ok(());
            }

            println!("{}", "🔑 New encryption key".bright_blue().bold());
            println!();
            println!("  {}", key.bright_yellow().bold());
            println!();
            println!("{}", "Add this to your environment:".bright_white());
            println!("  {}={}", "ENCRYPTION_KEY".bright_cyan(), key);
            println!();
            println!(
                "{}",
                "⚠️  Links stored under the previous key cannot be resolved after a restart with a new key."
                    .yellow()
            );
        }
    }

    Ok(())
}

/// Dispatches payload commands.
fn handle_payload_action(action: PayloadAction) -> Result<()> {
    let cipher = load_cipher()?;

    match action {
        PayloadAction::Encrypt { url } => {
            let payload = cipher
                .encrypt(&url)
                .map_err(|e| anyhow::anyhow!("Failed to encrypt: {}", e))?;
            println!("{}", payload);
        }
        PayloadAction::Decrypt { payload, yes } => {
            if !yes {
                let confirmed = Confirm::new()
                    .with_prompt("This prints the original URL in clear text. Continue?")
                    .default(false)
                    .interact()?;

                if !confirmed {
                    println!("{}", "❌ Cancelled".red());
                    return Ok(());
                }
            }

            let url = cipher
                .decrypt(&EncryptedUrl::from_hex_unchecked(payload.trim().to_string()))
                .map_err(|e| anyhow::anyhow!("Failed to decrypt: {}", e))?;

            println!("{}", url.bright_white());
        }
    }

    Ok(())
}

/// Handles rate-limit counter commands.
async fn handle_limiter_action(action: LimiterAction) -> Result<()> {
    let redis_url = Config::load_redis_url().context("REDIS_URL or REDIS_HOST must be set")?;
    let store = RedisCounterStore::connect(&redis_url)
        .await
        .map_err(|e| anyhow::anyhow!("{}", e))?;

    match action {
        LimiterAction::Check => {
            println!(
                "{} {}",
                "🔍 Checking counter service at".bright_blue(),
                mask_connection_string(&redis_url)
            );

            if store.health_check().await {
                println!("{}", "✅ Counter service OK".green().bold());
            } else {
                anyhow::bail!("Counter service did not answer PING");
            }
        }
        LimiterAction::Status { client } => {
            let status = store
                .status(&client)
                .await
                .map_err(|e| anyhow::anyhow!("{}", e))?;

            println!("{}", "📊 Rate-limit counter".bright_blue().bold());
            println!();
            println!("  Client:    {}", client.cyan());

            match (status.count, status.ttl) {
                (Some(count), Some(ttl)) => {
                    println!("  Count:     {}", count.to_string().bright_white().bold());
                    println!("  Resets in: {:.1}s", ttl.as_secs_f64());
                }
                (Some(count), None) => {
                    println!("  Count:     {}", count.to_string().bright_white().bold());
                    println!("  Resets in: {}", "never (no expiry set)".red());
                }
                _ => println!("  {}", "No active window".bright_black()),
            }
            println!();
        }
        LimiterAction::Reset { client, yes } => {
            if !yes {
                let confirmed = Confirm::new()
                    .with_prompt(format!("Reset rate-limit counter for {}?", client))
                    .default(false)
                    .interact()?;

                if !confirmed {
                    println!("{}", "❌ Cancelled".red());
                    return Ok(());
                }
            }

            let existed = store
                .reset(&client)
                .await
                .map_err(|e| anyhow::anyhow!("{}", e))?;

            if existed {
                println!("{}", "✅ Counter reset".green().bold());
            } else {
                println!("{}", "⚠️  No counter for this client".yellow());
            }
        }
    }

    Ok(())
}

/// Builds the cipher from `ENCRYPTION_KEY`.
fn load_cipher() -> Result<UrlCipher> {
    let key = std::env::var("ENCRYPTION_KEY").context("ENCRYPTION_KEY must be set")?;
    UrlCipher::from_hex(&key).context("ENCRYPTION_KEY must be 64 hex characters (32 bytes)")
}

/// Generates a random AES-256 key, hex-encoded.
fn generate_key() -> Result<String> {
    let mut key = [0u8; KEY_LENGTH];
    getrandom::fill(&mut key).map_err(|e| anyhow::anyhow!("Random source unavailable: {}", e))?;
    Ok(hex::encode(key))
}
