use chroma_node::{
    cli::{Cli, Commands},
    driver::{resolve_option, run_session},
    render::{render_palette, render_snapshot},
    setup::{ensure_config, init_tracing},
};
use chroma_store::StoreBackend;
use chroma_tally::VoteSession;
use clap::Parser;
use tokio::io::BufReader;
use tracing::{error, info};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let generated = !cli.config.exists();
    let config = ensure_config(&cli.config)?;
    let _guard = init_tracing(&config)?;
    if generated {
        info!("⚠️ Config not found, generated defaults at {}", cli.config.display());
    }

    let palette = config.palette()?;
    let store = StoreBackend::new(cli.store.clone().or_else(|| config.store_path.clone()));

    match cli.command {
        Commands::Palette => {
            print!("{}", render_palette(&palette));
        }
        Commands::Results { json } => {
            let session = VoteSession::new(store, palette);
            let snapshot = session.refresh().await?;
            if json {
                println!("{}", serde_json::to_string_pretty(&snapshot)?);
            } else {
                print!("{}", render_snapshot(&snapshot));
            }
        }
        Commands::Vote { color } => {
            let option = resolve_option(&palette, &color)?;
            let session = VoteSession::open(store, palette).await;
            match session.request_vote(&option.name).await {
                Ok(snapshot) => {
                    println!("You voted for {}!", option.name);
                    print!("{}", render_snapshot(&snapshot));
                }
                Err(e) => {
                    error!("Failed to cast vote: {}", e);
                    return Err(e.into());
                }
            }
        }
        Commands::Session => {
            let session = VoteSession::open(store, palette).await;
            info!("Session {} started", session.id());
            run_session(&session, BufReader::new(tokio::io::stdin()), tokio::io::stdout()).await?;
        }
    }

    Ok(())
}
