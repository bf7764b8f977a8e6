use crate::processors::CollisionPolicy;
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "dewetra-reconciler")]
#[command(about = "Weather station metadata reconciler for Dewetra sensor registries")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    #[arg(short, long, global = true, help = "Enable verbose logging")]
    pub verbose: bool,

    #[arg(long, global = true, help = "Log file path")]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Cross-check the canonical registry against the European station list
    Check {
        #[arg(short, long, help = "Directory containing the JSON datasets")]
        data_dir: PathBuf,
    },

    /// Full pipeline: presence check, coordinate index, sensor attachment, summary
    Enrich {
        #[arg(short, long, help = "Directory containing the JSON datasets")]
        data_dir: PathBuf,

        #[arg(
            long,
            value_enum,
            default_value_t = CollisionPolicyArg::LogOverwrite,
            help = "What to do when two stations share a quantized coordinate key"
        )]
        collision_policy: CollisionPolicyArg,
    },
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum CollisionPolicyArg {
    /// Later station replaces the earlier; every occurrence is logged
    LogOverwrite,
    /// Earlier station is kept; every occurrence is logged
    KeepFirst,
    /// Abort on the first collision
    Reject,
}

impl From<CollisionPolicyArg> for CollisionPolicy {
    fn from(arg: CollisionPolicyArg) -> Self {
        match arg {
            CollisionPolicyArg::LogOverwrite => CollisionPolicy::LogOverwrite,
            CollisionPolicyArg::KeepFirst => CollisionPolicy::KeepFirst,
            CollisionPolicyArg::Reject => CollisionPolicy::Reject,
        }
    }
}
