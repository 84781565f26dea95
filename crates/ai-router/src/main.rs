use ai_router::{App, Args};
use anyhow::Result;
use clap::Parser;
use router_core::RouterError;
use tracing::info;

#[tokio::main]
async fn main() {
    let args = Args::parse();

    let default_filter = if args.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    if let Err(err) = run(args).await {
        match err.downcast_ref::<RouterError>() {
            Some(router_err) => eprintln!("error: {}", router_err.with_suggestion()),
            None => eprintln!("error: {err:#}"),
        }
        std::process::exit(1);
    }
}

async fn run(args: Args) -> Result<()> {
    let config = args.resolve_config()?;
    info!(
        state_dir = %config.state_dir.display(),
        copy_prompt = config.copy_prompt,
        open_browser = config.open_browser,
        "AI router starting"
    );

    let mut app = App::new(config);
    let mut out = std::io::stdout();
    app.run(args.command, &mut out).await
}
