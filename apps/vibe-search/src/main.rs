use clap::Parser;

#[tokio::main]
async fn main() -> color_eyre::Result<()> {
	color_eyre::install()?;

	let args = vibe_search::Args::parse();

	vibe_search::run(args).await
}
