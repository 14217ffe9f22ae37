use anyhow::Context;
use clap::{Parser, Subcommand};
use matsel::analysis;
use matsel::{CatalogSource, ProjectSpecification, RatingSample, Recommender, RecommenderConfig};
use matsel_storage::{export_catalog, load_catalog_or_builtin};
use serde::Serialize;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

/// Construction material selection engine
#[derive(Parser, Debug)]
#[command(name = "matsel")]
#[command(about = "Score, compare and find similar construction materials", long_about = None)]
struct Args {
    /// JSON catalog file; the built-in catalog is used when absent or unreadable
    #[arg(long, global = true)]
    catalog: Option<PathBuf>,

    /// JSON recommender config
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Log level
    #[arg(long, global = true, default_value = "info")]
    log_level: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Rank materials against a project specification
    Recommend {
        /// JSON project specification
        #[arg(long)]
        spec: PathBuf,

        /// Number of results (defaults to the configured top N)
        #[arg(long)]
        top: Option<usize>,

        /// Embed full material records in the output
        #[arg(long)]
        include_material: bool,
    },
    /// Materials most similar to a given one
    Similar {
        #[arg(long)]
        id: u32,

        #[arg(short, default_value_t = 3)]
        k: usize,
    },
    /// Side-by-side comparison
    Compare {
        #[arg(long, value_delimiter = ',', required = true)]
        ids: Vec<u32>,
    },
    /// Projected total cost for a project area
    Cost {
        #[arg(long, value_delimiter = ',', required = true)]
        ids: Vec<u32>,

        #[arg(long)]
        area: f64,
    },
    /// Train the rating model on a history file and predict ratings for a specification
    Predict {
        #[arg(long)]
        spec: PathBuf,

        /// JSON array of rating samples
        #[arg(long)]
        history: PathBuf,
    },
    /// Write the active catalog as JSON
    Export {
        #[arg(long)]
        out: PathBuf,
    },
}

#[derive(Serialize)]
struct SimilarEntry<'a> {
    id: u32,
    name: &'a str,
    distance: f64,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let log_level = match args.log_level.as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };

    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    info!("matsel v{}", env!("CARGO_PKG_VERSION"));

    let source = CatalogSource::from_path(args.catalog.clone());
    let catalog = Arc::new(load_catalog_or_builtin(&source));
    let config = match &args.config {
        Some(path) => RecommenderConfig::from_json(&read(path)?)
            .with_context(|| format!("invalid config {}", path.display()))?,
        None => RecommenderConfig::default(),
    };

    match args.command {
        Command::Recommend {
            spec,
            top,
            include_material,
        } => {
            let spec = read_spec(&spec)?;
            let recommender = Recommender::new(catalog, config)?;
            let n = top.unwrap_or(recommender.config().default_top_n);
            print_json(&recommender.recommend_explained(&spec, n, include_material))
        }
        Command::Similar { id, k } => {
            let recommender = Recommender::new(catalog.clone(), config)?;
            let hits = recommender.index().nearest_with_distances(id, k)?;
            let entries = hits
                .into_iter()
                .map(|(id, distance)| -> matsel::Result<SimilarEntry<'_>> {
                    Ok(SimilarEntry {
                        id,
                        name: &catalog.material(id)?.name,
                        distance,
                    })
                })
                .collect::<matsel::Result<Vec<_>>>()?;
            print_json(&entries)
        }
        Command::Compare { ids } => print_json(&analysis::compare(&catalog, &ids)?),
        Command::Cost { ids, area } => {
            print_json(&analysis::cost_projection(&catalog, &ids, area)?)
        }
        Command::Predict { spec, history } => {
            let spec = read_spec(&spec)?;
            let history: Vec<RatingSample> = serde_json::from_str(&read(&history)?)
                .with_context(|| format!("malformed rating history {}", history.display()))?;

            let mut recommender = Recommender::new(catalog, config)?;
            let report = recommender.train(&history)?;
            info!(rmse = report.training_rmse, "model trained");

            let predictions = recommender.predict(&spec).unwrap_or_default();
            print_json(&predictions)
        }
        Command::Export { out } => {
            export_catalog(&catalog, &out)?;
            info!("wrote {} materials to {}", catalog.len(), out.display());
            Ok(())
        }
    }
}

fn read(path: &Path) -> anyhow::Result<String> {
    std::fs::read_to_string(path).with_context(|| format!("cannot read {}", path.display()))
}

fn read_spec(path: &Path) -> anyhow::Result<ProjectSpecification> {
    ProjectSpecification::from_json(&read(path)?)
        .with_context(|| format!("invalid specification {}", path.display()))
}

fn print_json<T: Serialize + ?Sized>(value: &T) -> anyhow::Result<()> {
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    serde_json::to_writer_pretty(&mut out, value)?;
    std::io::Write::write_all(&mut out, b"\n")?;
    Ok(())
}
