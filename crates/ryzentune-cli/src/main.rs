//! RyzenTune command-line controller
//!
//! Restores the saved parameter table, lets the user enable/disable and tune
//! parameters, and applies them through the external ryzenadj tool.

use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use ryzentune_core::apply::{apply_and_persist, Adjuster};
use ryzentune_core::autostart::ensure_autostart_target;
use ryzentune_core::codec::encode_args;
use ryzentune_core::params::{spec_for, ParamTable, PARAM_SPECS};
use ryzentune_core::settings::SettingsStore;

#[derive(Parser)]
#[command(name = "ryzentune", version, about = "Power-limit tuning frontend for ryzenadj")]
struct Cli {
    /// Path to the ryzenadj executable (default: beside this binary)
    #[arg(long, global = true)]
    tool: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Apply the current parameter table through ryzenadj and persist it
    Apply {
        /// Start from the built-in defaults instead of the saved settings
        #[arg(long)]
        defaults: bool,

        /// Enable a parameter with a value, e.g. --set tctl-temp=75
        /// (repeatable)
        #[arg(long = "set", value_name = "NAME=VALUE")]
        set: Vec<String>,

        /// Disable a parameter so it is not emitted (repeatable)
        #[arg(long = "unset", value_name = "NAME")]
        unset: Vec<String>,

        /// Print the argument string without launching the tool
        #[arg(long)]
        dry_run: bool,
    },

    /// Show the saved parameter table
    Show {
        /// Emit the table as JSON
        #[arg(long)]
        json: bool,
    },

    /// List the supported parameters and their units
    Params,

    /// Guarantee the autostart target file exists and print its path
    Autostart,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let store = SettingsStore::beside_current_exe()?;

    match cli.command {
        Commands::Apply {
            defaults,
            set,
            unset,
            dry_run,
        } => {
            let mut table = if defaults {
                ParamTable::with_defaults()
            } else {
                load_or_defaults(&store)?
            };

            for entry in &set {
                let (name, value) = parse_set_arg(entry)?;
                table.set(name, true, value);
            }
            for name in &unset {
                let name = known_name(name)?;
                table.set(name, false, 0);
            }

            if dry_run {
                println!("{}", encode_args(&table));
                return Ok(());
            }

            let adjuster = match cli.tool {
                Some(path) => Adjuster::at_path(path),
                None => Adjuster::beside_current_exe()?,
            };
            apply_and_persist(&adjuster, &store, &table)
                .context("apply failed, settings not persisted")?;
            println!("applied: {}", encode_args(&table));
        }

        Commands::Show { json } => {
            let table = load_or_defaults(&store)?;
            if json {
                println!("{}", serde_json::to_string_pretty(&table.snapshot())?);
            } else {
                for entry in table.snapshot() {
                    match entry.value {
                        Some(value) => println!("{:<20} {}", entry.name, value),
                        None => println!("{:<20} -", entry.name),
                    }
                }
            }
        }

        Commands::Params => {
            for spec in &PARAM_SPECS {
                println!("{:<20} {}", spec.name, spec.description);
            }
        }

        Commands::Autostart => {
            let table = load_or_defaults(&store)?;
            let target = ensure_autostart_target(&store, &table)?;
            println!("{}", target.display());
        }
    }

    Ok(())
}

/// Saved table when a record exists, UI defaults otherwise.
fn load_or_defaults(store: &SettingsStore) -> Result<ParamTable> {
    Ok(match store.load()? {
        Some((table, _warnings)) => table,
        None => ParamTable::with_defaults(),
    })
}

/// Parse a `--set name=value` argument against the fixed parameter table.
fn parse_set_arg(entry: &str) -> Result<(&str, i64)> {
    let Some((name, raw)) = entry.split_once('=') else {
        bail!("--set expects NAME=VALUE, got '{entry}'");
    };
    let name = known_name(name)?;
    let value: i64 = raw
        .parse()
        .with_context(|| format!("invalid value for {name}: '{raw}'"))?;
    if value < 0 {
        bail!("value for {name} must be non-negative, got {value}");
    }
    Ok((name, value))
}

/// Validate a user-supplied name before it reaches the table, which treats
/// unknown names as a programming error.
fn known_name(name: &str) -> Result<&'static str> {
    match spec_for(name) {
        Some(spec) => Ok(spec.name),
        None => bail!(
            "unknown parameter '{name}' (see `ryzentune params` for the supported set)"
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_set_arg() {
        assert_eq!(parse_set_arg("tctl-temp=75").unwrap(), ("tctl-temp", 75));
        assert!(parse_set_arg("tctl-temp").is_err());
        assert!(parse_set_arg("bogus-key=1").is_err());
        assert!(parse_set_arg("tctl-temp=-5").is_err());
        assert!(parse_set_arg("tctl-temp=hot").is_err());
    }
}
