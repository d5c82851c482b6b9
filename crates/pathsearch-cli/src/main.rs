use std::io::{self, Read};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use pathsearch_cli::output::{write_summary, OutputFormat};
use pathsearch_cli::terminal::ColorPalette;
use pathsearch_lib::{load_problem, plan_search, Problem, SearchAlgorithm, SearchSummary};

#[derive(Parser, Debug)]
#[command(author, version, about = "Run a classical graph search over a weighted adjacency matrix")]
struct Cli {
    /// Problem file to read. Reads stdin when omitted or `-`.
    #[arg(long, short = 'i')]
    input: Option<PathBuf>,

    /// Search algorithm (bfs, dfs, ucs, ids, gbfs, a-star, hill-climbing).
    #[arg(long, short = 'a', default_value_t = SearchAlgorithm::Bfs)]
    algorithm: SearchAlgorithm,

    /// Seed for hill-climbing's neighbour shuffle.
    #[arg(long, env = "PATHSEARCH_SEED")]
    seed: Option<u64>,

    /// Output format.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    let problem = read_problem(cli.input.as_deref())?;
    let mut request = problem.request(cli.algorithm);
    request.seed = cli.seed;

    let plan = plan_search(&problem.graph, &request)
        .with_context(|| format!("cannot run {} on this problem", cli.algorithm))?;
    tracing::info!(
        algorithm = %plan.algorithm,
        found = plan.is_found(),
        hops = plan.hop_count(),
        "search complete"
    );

    let summary = SearchSummary::from_plan(&plan);
    let stdout = io::stdout();
    let mut handle = stdout.lock();
    write_summary(&mut handle, &summary, cli.format, ColorPalette::detect())
}

fn read_problem(input: Option<&Path>) -> Result<Problem> {
    match input {
        Some(path) if path != Path::new("-") => load_problem(path)
            .with_context(|| format!("failed to load problem from {}", path.display())),
        _ => {
            let mut text = String::new();
            io::stdin()
                .read_to_string(&mut text)
                .context("failed to read problem from stdin")?;
            Problem::parse(&text).context("failed to parse problem from stdin")
        }
    }
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(env_filter)
        .with_writer(io::stderr)
        .finish();

    let _ = tracing::subscriber::set_global_default(subscriber);
}
