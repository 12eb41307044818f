use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod cli;
mod commands;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    let cli = cli::Cli::parse();
    init_tracing(cli.log_json);

    if let Err(error) = run(cli).await {
        eprintln!("fyyur error: {error:#}");
        std::process::exit(1);
    }
}

fn init_tracing(json: bool) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "fyyur=info,fyyur_client=debug,fyyur_bridge=debug".into());

    // Logs go to stderr; stdout carries command output.
    tracing_subscriber::registry()
        .with(filter)
        .with(json.then(|| {
            tracing_subscriber::fmt::layer()
                .json()
                .with_writer(std::io::stderr)
        }))
        .with((!json).then(|| tracing_subscriber::fmt::layer().with_writer(std::io::stderr)))
        .init();
}

async fn run(cli: cli::Cli) -> anyhow::Result<()> {
    match cli.command {
        cli::Commands::Create(args) => {
            let api = commands::build_api(cli.base_url.as_deref())?;
            commands::create(api, args).await
        }
        cli::Commands::Delete { ids } => {
            let api = commands::build_api(cli.base_url.as_deref())?;
            commands::delete(api, &ids).await
        }
        cli::Commands::Env => commands::env(),
        cli::Commands::LoginUrl => commands::login_url(),
    }
}
