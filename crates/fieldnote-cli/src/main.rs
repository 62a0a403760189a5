//! Fieldnote CLI - send and browse platform messages
//!
//! Simple CLI for interacting with the Fieldnote API without touching curl.

mod api;
mod config;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use dialoguer::Password;
use std::fs;
use uuid::Uuid;

use api::FieldnoteClient;
use config::Config;

#[derive(Parser)]
#[command(name = "fieldnote")]
#[command(about = "Fieldnote CLI - send and browse platform messages", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Login and store API token
    Login {
        /// API token (will prompt if not provided)
        #[arg(short, long)]
        token: Option<String>,
    },

    /// Manage profiles (target shortcuts)
    Profile {
        #[command(subcommand)]
        action: ProfileAction,
    },

    /// Send a message to a target
    Send {
        /// Message text (or use -f for file)
        message: Option<String>,
        /// Read message text from file
        #[arg(short, long)]
        file: Option<String>,
        /// Target type (form, project, user)
        #[arg(short = 't', long)]
        target_type: Option<String>,
        /// Target id
        #[arg(short = 'i', long)]
        target_id: Option<i64>,
        /// Profile to use (overrides default)
        #[arg(short, long)]
        profile: Option<String>,
    },

    /// Show a single message
    Show {
        /// Message id (UUID)
        id: Uuid,
    },

    /// List messages for a target
    Messages {
        /// Target type (form, project, user)
        #[arg(short = 't', long)]
        target_type: Option<String>,
        /// Target id
        #[arg(short = 'i', long)]
        target_id: Option<i64>,
        /// Max results
        #[arg(short, long, default_value = "20")]
        limit: i64,
        /// Profile to use (overrides default)
        #[arg(short, long)]
        profile: Option<String>,
    },

    /// Show current configuration
    Config,
}

#[derive(Subcommand)]
enum ProfileAction {
    /// Add a new profile
    Add {
        /// Profile name (e.g., "field", "review")
        name: String,
        /// Target type (form, project, user)
        #[arg(long)]
        target_type: String,
        /// Target id
        #[arg(long)]
        target_id: i64,
        /// Display name (optional)
        #[arg(long)]
        display_name: Option<String>,
    },
    /// List all profiles
    List,
    /// Set default profile
    Set {
        /// Profile name to set as default
        name: String,
    },
    /// Remove a profile
    Remove {
        /// Profile name to remove
        name: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Login { token } => cmd_login(token).await,
        Commands::Profile { action } => cmd_profile(action),
        Commands::Send {
            message,
            file,
            target_type,
            target_id,
            profile,
        } => cmd_send(message, file, target_type, target_id, profile).await,
        Commands::Show { id } => cmd_show(id).await,
        Commands::Messages {
            target_type,
            target_id,
            limit,
            profile,
        } => cmd_messages(target_type, target_id, limit, profile).await,
        Commands::Config => cmd_config(),
    }
}

// ============================================
// Command Implementations
// ============================================

async fn cmd_login(token: Option<String>) -> Result<()> {
    let mut config = Config::load()?;

    let api_token = match token {
        Some(t) => t,
        None => Password::new()
            .with_prompt("API Token")
            .interact()
            .context("Failed to read API token")?,
    };

    // Test connection
    let client = FieldnoteClient::new(&config.base_url, &api_token);
    print!("Testing connection... ");

    match client.health().await {
        Ok(true) => {
            println!("{}", "OK".green());
        }
        _ => {
            println!("{}", "Failed".red());
            bail!("Could not connect to Fieldnote API. Check the base URL.");
        }
    }

    config.set_api_token(api_token);
    config.save()?;

    println!(
        "{} API token saved to {:?}",
        "✓".green(),
        Config::config_path()?
    );

    Ok(())
}

fn cmd_profile(action: ProfileAction) -> Result<()> {
    let mut config = Config::load()?;

    match action {
        ProfileAction::Add {
            name,
            target_type,
            target_id,
            display_name,
        } => {
            config.add_profile(name.clone(), target_type, target_id, display_name);
            config.save()?;
            println!("{} Profile '{}' added", "✓".green(), name);
        }

        ProfileAction::List => {
            if config.profiles.is_empty() {
                println!("No profiles configured.");
                println!("\n{}", "Add one with:".dimmed());
                println!("  fieldnote profile add <name> --target-type project --target-id 1");
                return Ok(());
            }

            println!("{}", "Profiles:".bold());
            for (name, profile) in &config.profiles {
                let is_default = config.default_profile.as_ref() == Some(name);
                let default_marker = if is_default {
                    " (default)".green().to_string()
                } else {
                    String::new()
                };
                let display_name = profile.name.as_deref().unwrap_or("-");

                println!(
                    "  {} {} ({} {}){}",
                    name.cyan(),
                    display_name.dimmed(),
                    profile.target_type,
                    profile.target_id,
                    default_marker
                );
            }
        }

        ProfileAction::Set { name } => {
            if config.set_default_profile(name.clone()) {
                config.save()?;
                println!("{} Default profile set to '{}'", "✓".green(), name);
            } else {
                bail!("Profile '{}' not found", name);
            }
        }

        ProfileAction::Remove { name } => {
            if config.remove_profile(&name) {
                // Clear default if it was the removed profile
                if config.default_profile.as_ref() == Some(&name) {
                    config.default_profile = None;
                }
                config.save()?;
                println!("{} Profile '{}' removed", "✓".green(), name);
            } else {
                bail!("Profile '{}' not found", name);
            }
        }
    }

    Ok(())
}

fn resolve_target(
    config: &Config,
    target_type: Option<String>,
    target_id: Option<i64>,
    profile: Option<&str>,
) -> Result<(String, i64)> {
    match (target_type, target_id) {
        (Some(target_type), Some(target_id)) => return Ok((target_type, target_id)),
        // half a pair must not fall through to a profile and hit the wrong target
        (Some(_), None) => bail!("--target-id is required when --target-type is given"),
        (None, Some(_)) => bail!("--target-type is required when --target-id is given"),
        (None, None) => {}
    }

    if let Some(target) = config.get_target(profile) {
        return Ok(target);
    }

    bail!("No target given. Pass --target-type/--target-id or set up a profile.")
}

async fn cmd_send(
    message: Option<String>,
    file: Option<String>,
    target_type: Option<String>,
    target_id: Option<i64>,
    profile: Option<String>,
) -> Result<()> {
    let config = Config::load()?;
    let api_token = config
        .api_token
        .as_ref()
        .context("Not logged in. Run 'fieldnote login' first.")?;

    let text = match (message, file) {
        (Some(m), _) => m,
        (None, Some(path)) => {
            fs::read_to_string(&path).with_context(|| format!("Failed to read {}", path))?
        }
        (None, None) => bail!("No message given. Pass the text or use --file."),
    };

    let (target_type, target_id) =
        resolve_target(&config, target_type, target_id, profile.as_deref())?;

    let client = FieldnoteClient::new(&config.base_url, api_token);
    let created = client
        .send_message(text.trim(), &target_type, target_id)
        .await?;

    println!(
        "{} Message {} sent to {} {}",
        "✓".green(),
        created.id.to_string().dimmed(),
        created.target_type.cyan(),
        created.target_id
    );

    Ok(())
}

async fn cmd_show(id: Uuid) -> Result<()> {
    let config = Config::load()?;
    let api_token = config
        .api_token
        .as_ref()
        .context("Not logged in. Run 'fieldnote login' first.")?;

    let client = FieldnoteClient::new(&config.base_url, api_token);
    let message = client.get_message(id).await?;

    println!("{}", format!("Message {}", message.id).bold());
    println!(
        "  Target: {} {}",
        message.target_type.cyan(),
        message.target_id
    );
    println!("  From:   {}", message.actor.cyan());
    println!("  At:     {}", message.created_at.dimmed());
    println!("  {}", message.message);

    Ok(())
}

async fn cmd_messages(
    target_type: Option<String>,
    target_id: Option<i64>,
    limit: i64,
    profile: Option<String>,
) -> Result<()> {
    let config = Config::load()?;
    let api_token = config
        .api_token
        .as_ref()
        .context("Not logged in. Run 'fieldnote login' first.")?;

    let (target_type, target_id) =
        resolve_target(&config, target_type, target_id, profile.as_deref())?;

    let client = FieldnoteClient::new(&config.base_url, api_token);
    let messages = client
        .list_messages(&target_type, target_id, Some(limit))
        .await?;

    if messages.is_empty() {
        println!("No messages for {} {}.", target_type, target_id);
        return Ok(());
    }

    println!(
        "{}",
        format!("Messages on {} {}:", target_type, target_id).bold()
    );
    for m in messages {
        println!(
            "  {} {} {}",
            m.created_at.dimmed(),
            m.actor.cyan(),
            m.message
        );
    }

    Ok(())
}

fn cmd_config() -> Result<()> {
    let config = Config::load()?;

    println!("{}", "Configuration:".bold());
    println!("  Path: {:?}", Config::config_path()?);
    println!("  Base URL: {}", config.base_url);
    println!(
        "  API Token: {}",
        if config.api_token.is_some() {
            "Set".green()
        } else {
            "Not set".red()
        }
    );
    println!(
        "  Default Profile: {}",
        config.default_profile.as_deref().unwrap_or("None").cyan()
    );
    println!("  Profiles: {}", config.profiles.len());

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config_with_default_profile() -> Config {
        let mut config = Config::default();
        config.add_profile("field".to_string(), "project".to_string(), 42, None);
        config.set_default_profile("field".to_string());
        config
    }

    #[test]
    fn test_resolve_target_prefers_explicit_pair() {
        let config = config_with_default_profile();

        let target = resolve_target(&config, Some("form".to_string()), Some(3), None).unwrap();

        assert_eq!(target, ("form".to_string(), 3));
    }

    #[test]
    fn test_resolve_target_rejects_half_a_pair() {
        // must error even though the default profile could fill the gap
        let config = config_with_default_profile();

        assert!(resolve_target(&config, Some("form".to_string()), None, None).is_err());
        assert!(resolve_target(&config, None, Some(3), None).is_err());
    }

    #[test]
    fn test_resolve_target_falls_back_to_profile() {
        let config = config_with_default_profile();

        let target = resolve_target(&config, None, None, None).unwrap();

        assert_eq!(target, ("project".to_string(), 42));
    }
}
