//! Gearwise - Entry Point
//!
//! Loads the game tables and a character, runs the upgrade engine and
//! prints what the character should pick up.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use gearwise::scoring::export_default_profiles;
use gearwise::upgrade::UpgradeEntry;
use gearwise::{
    CharacterSheet, EnchantmentCache, EngineConfig, GameData, GearError, ProfileRegistry, RunReport, UpgradeEngine,
};

#[derive(Subcommand, Debug)]
enum Cmd {
    /// Pick upgrades for a character and store them in its bags
    Run {
        /// Directory holding items.ron, spells.ron and enchantments.ron
        data_dir: PathBuf,
        /// Character file (RON)
        character: PathBuf,
        /// Print the report as JSON
        #[arg(long)]
        json: bool,
        /// Only list the upgrades; the character file is left alone
        #[arg(long)]
        dry_run: bool,
        /// Engine config file (defaults to <data-dir>/config.ron, then the user config)
        #[arg(long, value_name = "FILE")]
        config: Option<PathBuf>,
    },
    /// Write the built-in weight profiles as RON
    ExportProfiles {
        /// Output file
        path: PathBuf,
    },
}

#[derive(Parser, Debug)]
#[command(name = "gearwise", version)]
#[command(about = "Gear upgrade scoring for RPG characters")]
struct Cli {
    #[command(subcommand)]
    cmd: Cmd,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or("info")
    )
    .init();

    log::info!("Starting Gearwise v{}", env!("CARGO_PKG_VERSION"));

    match Cli::parse().cmd {
        Cmd::ExportProfiles { path } => {
            export_default_profiles(&path)
                .with_context(|| format!("failed to write {}", path.display()))?;
            log::info!("Default weight profiles written to {}", path.display());
            Ok(())
        }
        Cmd::Run { data_dir, character, json, dry_run, config } => {
            run(RunOptions { data_dir, character, json, dry_run, config })
        }
    }
}

struct RunOptions {
    data_dir: PathBuf,
    character: PathBuf,
    json: bool,
    dry_run: bool,
    config: Option<PathBuf>,
}

fn run(args: RunOptions) -> Result<()> {
    let data = GameData::load(&args.data_dir)
        .with_context(|| format!("failed to load game data from {}", args.data_dir.display()))?;
    let profiles = ProfileRegistry::load(&args.data_dir.join("profiles.ron"));
    let config_path = args.config.clone().or_else(|| {
        let local = args.data_dir.join("config.ron");
        local.exists().then_some(local)
    });
    let config = EngineConfig::load(config_path.as_deref());
    let cache = EnchantmentCache::new();

    let mut sheet = CharacterSheet::load(&args.character)
        .with_context(|| format!("failed to load character from {}", args.character.display()))?;

    let engine = UpgradeEngine::new(&data, &profiles, &cache, &config);
    let report = if args.dry_run {
        engine.preview(&sheet)
    } else {
        let outcome = engine.run(&mut sheet);
        let stored = match &outcome {
            Ok(report) => report.acquired.len(),
            Err(GearError::StorageDenied { report, .. }) => report.acquired.len(),
            Err(_) => 0,
        };
        if stored > 0 {
            sheet
                .save(&args.character)
                .with_context(|| format!("failed to save character to {}", args.character.display()))?;
        }
        match outcome {
            Ok(report) => report,
            Err(GearError::StorageDenied { item, reason, report }) => {
                if args.json {
                    println!("{}", serde_json::to_string_pretty(&report)?);
                } else {
                    print_report(&report, false);
                }
                anyhow::bail!("upgrade run stopped at item {}: {}", item, reason);
            }
            Err(e) => return Err(e).context("upgrade run stopped"),
        }
    };

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print_report(&report, args.dry_run);
    }
    Ok(())
}

fn print_report(report: &RunReport, dry_run: bool) {
    println!("{} (level {}, {:?})", report.character, report.level, report.archetype);
    if report.decisions.is_empty() {
        println!("  no upgrades found");
        return;
    }

    let entries: &[UpgradeEntry] = if dry_run { &report.decisions } else { &report.acquired };
    for entry in entries {
        let enchant = entry
            .enchantment
            .as_deref()
            .map(|e| format!(" [enchant {}]", e))
            .unwrap_or_default();
        println!(
            "  {:<16} {:>7}  {:<40} {:>10.3}  {:?}{}",
            entry.slot, entry.item, entry.name, entry.score, entry.position, enchant
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_run_command_line() {
        let cli = Cli::try_parse_from(["gearwise", "run", "data", "rogue.ron", "--dry-run", "--config", "alt.ron"])
            .expect("valid command line");
        match cli.cmd {
            Cmd::Run { data_dir, character, json, dry_run, config } => {
                assert_eq!(data_dir, PathBuf::from("data"));
                assert_eq!(character, PathBuf::from("rogue.ron"));
                assert!(!json);
                assert!(dry_run);
                assert_eq!(config, Some(PathBuf::from("alt.ron")));
            }
            other => panic!("expected run, got {:?}", other),
        }
    }

    #[test]
    fn test_export_and_missing_arguments() {
        let cli = Cli::try_parse_from(["gearwise", "export-profiles", "profiles.ron"]).expect("valid command line");
        assert!(matches!(cli.cmd, Cmd::ExportProfiles { path } if path == PathBuf::from("profiles.ron")));

        assert!(Cli::try_parse_from(["gearwise", "run", "data"]).is_err());
        assert!(Cli::try_parse_from(["gearwise", "run", "data", "c.ron", "--config"]).is_err());
    }
}
