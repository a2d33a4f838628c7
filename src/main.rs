use clap::{Parser, Subcommand};
use parcel_tracker::config::Config;
use parcel_tracker::detector::detect_carrier;
use parcel_tracker::logging;
use parcel_tracker::registry::CarrierRegistry;
use parcel_tracker::server;
use std::env;
use std::sync::Arc;
use tracing::{error, info};

#[derive(Parser)]
#[command(name = "parcel_tracker")]
#[command(about = "Parcel tracking demo backend with carrier auto-detection")]
#[command(version = "0.1.0")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP tracking server
    Serve {
        /// Port to listen on (overrides config.toml and the PORT env var)
        #[arg(long)]
        port: Option<u16>,
    },
    /// Track a single parcel from the command line
    Track {
        /// Tracking number to look up
        tracking_number: String,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();
    logging::init_logging();

    let cli = Cli::parse();

    match cli.command {
        Commands::Serve { port } => {
            let mut config = Config::load()?;
            if let Some(port) = port {
                config.server.port = port;
            } else if let Some(port) = env::var("PORT").ok().and_then(|p| p.parse().ok()) {
                config.server.port = port;
            }

            let registry = Arc::new(CarrierRegistry::new());
            server::start_server(registry, config.server).await?;
        }
        Commands::Track { tracking_number } => {
            let registry = CarrierRegistry::new();
            let carrier_id = detect_carrier(&tracking_number);
            info!("Detected carrier {carrier_id} for {tracking_number}");

            let carrier = registry.resolve(carrier_id);
            match carrier.track(&tracking_number).await {
                Ok(result) => {
                    println!("\n📦 Tracking {}:", result.tracking_number);
                    println!("   Carrier: {}", result.carrier);
                    println!("   Status: {}", result.status);
                    if let Some(eta) = result.estimated_delivery {
                        println!("   Estimated delivery: {eta}");
                    }
                    if let Some(events) = &result.events {
                        println!("   Events:");
                        for event in events {
                            println!(
                                "   - {} | {} ({})",
                                event.time.format("%Y-%m-%d %H:%M"),
                                event.description,
                                event.location
                            );
                        }
                    }
                    if let Some(err) = &result.error {
                        println!("   ⚠️  {err}");
                    }
                }
                Err(e) => {
                    error!("Tracking failed: {e}");
                    println!("⚠️  Failed to track parcel: {e}");
                }
            }
        }
    }

    Ok(())
}
