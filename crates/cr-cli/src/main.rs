//! Command-line frontend for Critroll tabletop checks.

mod commands;
mod config;

use std::path::PathBuf;
use std::process;

use clap::{Args, Parser, Subcommand};
use cr_check::{PairRequest, PercentileRequest};
use cr_mechanics::{DiceModifier, SuccessPredicate};
use cr_store::ScopeId;
use tracing_subscriber::EnvFilter;

use crate::config::CritrollConfig;

#[derive(Parser)]
#[command(
    name = "critroll",
    about = "Critroll: paired hope/fear checks and percentile skill checks",
    version,
    propagate_version = true
)]
struct Cli {
    #[command(flatten)]
    paths: PathArgs,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Args)]
struct PathArgs {
    /// Config file (default: ./critroll.toml if present)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// SQLite database holding per-scope critical rules
    #[arg(long, global = true)]
    db: Option<PathBuf>,

    /// Template table (TOML) replacing the bundled one
    #[arg(long, global = true)]
    templates: Option<PathBuf>,

    /// Character sheets (JSON: identity -> skill -> value)
    #[arg(long, global = true)]
    sheet: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Roll a paired hope/fear check
    Pair {
        /// First attribute: a die size or a sheet skill name
        attr1: String,

        /// Second attribute: a die size or a sheet skill name
        attr2: String,

        /// Difficulty to meet or beat
        difficulty: String,

        #[command(flatten)]
        roller: RollerArgs,
    },

    /// Roll a percentile skill check under the scope's critical rule
    Percentile {
        /// Skill name (or a literal value)
        skill: String,

        /// Skill value, overriding the sheet
        value: Option<String>,

        /// Scope whose critical rule applies
        #[arg(short, long)]
        scope: Option<String>,

        /// Extra tens dice keeping the lowest (max 2)
        #[arg(long, conflicts_with = "penalty")]
        bonus: Option<u8>,

        /// Extra tens dice keeping the highest (max 2)
        #[arg(long)]
        penalty: Option<u8>,

        /// Succeed only strictly below the skill value
        #[arg(long)]
        below: bool,

        #[command(flatten)]
        roller: RollerArgs,
    },

    /// Show or change a scope's critical rule (1-4 set, 0 reset, else help)
    Rule {
        /// Scope to administer
        scope: String,

        /// Rule command
        #[arg(default_value = "")]
        command: String,
    },

    /// Show the critical ranges for a skill value
    Ranges {
        /// Skill value
        skill: u32,

        /// Rule variant (1-4); defaults to the scope's rule
        #[arg(short, long)]
        variant: Option<i64>,

        /// Scope whose rule to use when no variant is given
        #[arg(short, long)]
        scope: Option<String>,
    },
}

#[derive(Args)]
struct RollerArgs {
    /// Identity whose sheet supplies named skills
    #[arg(short, long)]
    who: Option<String>,

    /// Name shown in the output (default: the identity)
    #[arg(short, long)]
    name: Option<String>,

    /// RNG seed for reproducible dice
    #[arg(long)]
    seed: Option<u64>,
}

impl RollerArgs {
    fn display_name(&self) -> String {
        self.name
            .clone()
            .or_else(|| self.who.clone())
            .unwrap_or_else(|| "You".to_string())
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() {
    init_tracing();
    let cli = Cli::parse();

    let config = CritrollConfig::discover(cli.paths.config.as_deref()).with_overrides(
        cli.paths.db,
        cli.paths.templates,
        cli.paths.sheet,
    );

    let result = commands::checker(&config).and_then(|checker| match cli.command {
        Commands::Pair {
            attr1,
            attr2,
            difficulty,
            roller,
        } => {
            let request = PairRequest {
                first: attr1,
                second: attr2,
                difficulty,
                name: roller.display_name(),
                identity: roller.who,
            };
            commands::pair::run(&checker, &request, roller.seed)
        }
        Commands::Percentile {
            skill,
            value,
            scope,
            bonus,
            penalty,
            below,
            roller,
        } => {
            let modifier = match (bonus, penalty) {
                (Some(n), _) => DiceModifier::bonus(n),
                (None, Some(n)) => DiceModifier::penalty(n),
                (None, None) => DiceModifier::None,
            };
            let request = PercentileRequest {
                skill,
                value,
                scope: scope.map(ScopeId::from),
                name: roller.display_name(),
                identity: roller.who,
                modifier,
                predicate: if below {
                    SuccessPredicate::Below
                } else {
                    SuccessPredicate::AtOrBelow
                },
            };
            commands::percentile::run(&checker, &request, roller.seed)
        }
        Commands::Rule { scope, command } => {
            commands::rule::run(&checker, &ScopeId::from(scope), &command)
        }
        Commands::Ranges {
            skill,
            variant,
            scope,
        } => commands::ranges::run(&checker, skill, variant, scope.map(ScopeId::from).as_ref()),
    });

    if let Err(e) = result {
        eprintln!("error: {e}");
        process::exit(1);
    }
}
