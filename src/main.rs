//! pharmakon CLI: compound compatibility scoring over a biomedical knowledge graph.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use miette::{IntoDiagnostic, Result};

use pharmakon::engine::{Engine, EngineConfig};

#[derive(Parser)]
#[command(
    name = "pharmakon",
    version,
    about = "Compound compatibility scoring and subgraph extraction"
)]
struct Cli {
    /// JSON snapshot of compound profiles.
    #[arg(long, global = true)]
    profiles: Option<PathBuf>,

    /// JSON snapshot of the knowledge graph.
    #[arg(long, global = true)]
    graph: Option<PathBuf>,

    /// TOML snapshot of the relation glossary.
    #[arg(long, global = true)]
    relations: Option<PathBuf>,

    /// JSON snapshot of the entity name mapping.
    #[arg(long, global = true)]
    names: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Score one compound pair by canonical ID.
    Score {
        /// Reference compound ID (e.g. "Compound::DB00945").
        ref_id: String,
        /// Comparison compound ID.
        cmp_id: String,
    },

    /// Rank a compound against every other compound in the store.
    Rank {
        /// Reference compound ID.
        ref_id: String,

        /// Number of top matches to show.
        #[arg(long, default_value = "10")]
        top: usize,
    },

    /// Find the best-scoring pairs among candidate compound names.
    BestPair {
        /// Candidate display names (at least two).
        candidates: Vec<String>,

        /// Number of top pairs to show.
        #[arg(long, default_value = "1")]
        top: usize,
    },

    /// Extract the relation-filtered neighborhood subgraph around targets.
    Subgraph {
        /// One or two target compounds (display names or canonical IDs).
        targets: Vec<String>,

        /// Write the subgraph JSON to this file instead of stdout.
        #[arg(long)]
        out: Option<PathBuf>,
    },

    /// Show engine info and snapshot statistics.
    Info,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let engine = Engine::new(EngineConfig {
        profiles: cli.profiles,
        graph: cli.graph,
        relations: cli.relations,
        names: cli.names,
    })?;

    match cli.command {
        Commands::Score { ref_id, cmp_id } => {
            let score = engine.score_pair(&ref_id, &cmp_id)?;
            println!("{ref_id} vs {cmp_id}: {score}");
        }

        Commands::Rank { ref_id, top } => {
            let best = engine.rank(&ref_id, top)?;
            for (id, score) in &best {
                let name = engine.names().name_of(id).unwrap_or(id);
                println!("{score:>8}  {id}  ({name})");
            }
        }

        Commands::BestPair { candidates, top } => {
            let pairs = engine.find_best_pair(&candidates, top)?;
            if pairs.is_empty() {
                println!("no valid pairs found");
            }
            for pair in &pairs {
                println!(
                    "{:>8}  {} ({}) + {} ({})",
                    pair.score, pair.name_a, pair.id_a, pair.name_b, pair.id_b
                );
            }
        }

        Commands::Subgraph { targets, out } => {
            let subgraph = engine.neighborhood(&targets)?;
            let json = serde_json::to_string_pretty(&subgraph).into_diagnostic()?;
            match out {
                Some(path) => {
                    std::fs::write(&path, json).into_diagnostic()?;
                    println!(
                        "wrote subgraph with {} nodes and {} edges to {}",
                        subgraph.node_count(),
                        subgraph.edge_count(),
                        path.display()
                    );
                }
                None => println!("{json}"),
            }
        }

        Commands::Info => {
            print!("{}", engine.info());
        }
    }

    Ok(())
}
