use std::{path::PathBuf, process, sync::Arc};

use clap::Parser;
use tracing_subscriber::EnvFilter;

use vibe_config::Config;
use vibe_domain::ProductCatalog;
use vibe_engine::{Engine, Error, RemoteProvider};

#[derive(Debug, Parser)]
#[command(version, rename_all = "kebab", about = "Vibe-based product search over text embeddings.")]
pub struct Args {
	/// Config file; defaults apply when omitted (offline synthetic mode).
	#[arg(long, short = 'c', value_name = "FILE")]
	pub config: Option<PathBuf>,
	/// Number of results to return.
	#[arg(long, short = 'k', value_name = "N")]
	pub top_k: Option<u32>,
	/// The vibe to search for, e.g. `boho festival earthy`.
	#[arg(required = true, value_name = "QUERY", num_args = 1..)]
	pub query: Vec<String>,
}

pub async fn run(args: Args) -> color_eyre::Result<()> {
	let config = match args.config.as_deref() {
		Some(path) => vibe_config::load(path)?,
		None => Config::default(),
	};

	init_tracing(&config);

	let catalog = ProductCatalog::builtin();

	println!("Catalog: {} products, {} vibes.", catalog.len(), catalog.all_vibes().len());

	let engine = Engine::new(config, catalog, Arc::new(RemoteProvider)).await;
	let query = args.query.join(" ");
	let response = match engine.search(&query, args.top_k).await {
		Ok(response) => response,
		Err(Error::InvalidQuery { message }) => {
			eprintln!("{message}");

			process::exit(2);
		},
		Err(err) => return Err(err.into()),
	};

	println!("\nRank | Name | Vibes | Similarity");

	for result in &response.results {
		println!(
			"{} | {} | {} | {:.3}",
			result.rank,
			result.name,
			result.vibes.join(", "),
			result.similarity_score,
		);
	}

	if let Some(guidance) = &response.guidance {
		println!("\n{guidance}");
	}

	println!("\nStatus: {}", response.provider_status);

	Ok(())
}

fn init_tracing(config: &Config) {
	let filter =
		EnvFilter::try_new(&config.engine.log_level).unwrap_or_else(|_| EnvFilter::new("info"));

	tracing_subscriber::fmt().with_env_filter(filter).init();
}
