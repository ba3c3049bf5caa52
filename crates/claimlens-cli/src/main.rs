//! ClaimLens CLI - fact-check the page at a url
//!
//! Usage:
//!   claimlens analyze <url>     One-shot analysis, prints the claims
//!   claimlens widget <url>      Interactive overlay widget
//!
//! Both commands talk to a local agent server by default; pass
//! --simulate to run against canned results with no backend.

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use claimlens_core::PageAnalyzer;
use claimlens_gateway::{AgentGateway, GatewayConfig, SimulatedAnalyzer};
use claimlens_widget::{signal_channel, spawn_relay, SignalSender, WidgetController, WidgetSignal};
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

#[derive(Parser)]
#[command(name = "claimlens")]
#[command(author, version, about = "Fact-check the page at a url")]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Gateway options shared by both commands
#[derive(Args, Clone)]
struct GatewayArgs {
    /// Agent server base url
    #[arg(long, default_value = "http://localhost:8000")]
    host: String,

    /// Agent application name
    #[arg(long, default_value = "master_agent")]
    app: String,

    /// User identifier
    #[arg(long, default_value = "user_123")]
    user: String,

    /// Use canned results instead of the remote agent
    #[arg(long)]
    simulate: bool,
}

impl GatewayArgs {
    fn config(&self) -> GatewayConfig {
        GatewayConfig::default()
            .with_host(&self.host)
            .with_app_name(&self.app)
            .with_user_id(&self.user)
    }

    fn analyzer(&self) -> Box<dyn PageAnalyzer> {
        if self.simulate {
            Box::new(SimulatedAnalyzer::new())
        } else {
            Box::new(AgentGateway::new(self.config()))
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Analyze a page once and print the claims
    Analyze {
        /// Url of the page to analyze
        url: String,

        /// Print the result as JSON
        #[arg(long)]
        json: bool,

        #[command(flatten)]
        gateway: GatewayArgs,
    },

    /// Run the interactive overlay widget
    Widget {
        /// Url of the page the widget analyzes
        url: String,

        #[command(flatten)]
        gateway: GatewayArgs,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Setup logging
    let level = if cli.verbose {
        Level::DEBUG
    } else {
        Level::INFO
    };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    match cli.command {
        Commands::Analyze { url, json, gateway } => cmd_analyze(url, json, gateway).await,
        Commands::Widget { url, gateway } => cmd_widget(url, gateway).await,
    }
}

async fn cmd_analyze(url: String, json: bool, gateway: GatewayArgs) -> Result<()> {
    info!("Analyzing {}", url);

    let mut analyzer = gateway.analyzer();
    let result = analyzer.analyze(&url).await?;

    if json {
        println!("{}", serde_json::to_string_pretty(&result)?);
        return Ok(());
    }

    if result.is_all_clear() {
        println!("No misleading claims detected");
        println!("This page appears to contain reliable information.");
        return Ok(());
    }

    for (index, claim) in result.claims.iter().enumerate() {
        let label = if claim.is_high_confidence() {
            "high"
        } else {
            "low"
        };
        println!("Claim {}: {}", index + 1, claim.text);
        println!(
            "  Confidence: {} ({}) | Bias: {}",
            claim.confidence_percent(),
            label,
            claim.bias_percent()
        );
        if !claim.sources.is_empty() {
            println!("  Sources: {}", claim.sources.join(", "));
        }
    }
    if result.discarded > 0 {
        println!("({} malformed claim(s) dropped)", result.discarded);
    }

    Ok(())
}

async fn cmd_widget(url: String, gateway: GatewayArgs) -> Result<()> {
    info!("Launching overlay widget for {}", url);

    let handle = spawn_relay(gateway.analyzer());
    let (signal_tx, signal_rx) = signal_channel();
    spawn_toggle_listener(signal_tx);

    let controller = WidgetController::new(url, handle);
    claimlens_widget::run(controller, signal_rx).await?;

    Ok(())
}

/// SIGUSR1 stands in for the host icon click: each signal flips the
/// widget between minimized and expanded.
#[cfg(unix)]
fn spawn_toggle_listener(signals: SignalSender) {
    use tokio::signal::unix::{signal, SignalKind};

    tokio::spawn(async move {
        let mut stream = match signal(SignalKind::user_defined1()) {
            Ok(stream) => stream,
            Err(e) => {
                tracing::warn!("Could not install SIGUSR1 handler: {}", e);
                return;
            }
        };
        while stream.recv().await.is_some() {
            if signals.send(WidgetSignal::Toggle).is_err() {
                break;
            }
        }
    });
}

#[cfg(not(unix))]
fn spawn_toggle_listener(_signals: SignalSender) {}
