/// Roster - headless front end for the user records endpoint
use clap::{Parser, Subcommand};
use roster_client::{
    resolve_after_ticks, ClientConfig, LoadOutcome, RosterClient, Stopwatch, UserLoader,
};
use roster_core::{PointsChart, UserStore, WorkoutEntry};
use std::{path::PathBuf, sync::Arc, time::Duration};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "roster")]
#[command(about = "Fetch user fee records and track workouts", long_about = None)]
struct Cli {
    /// Configuration file path
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Records endpoint, overrides the configuration
    #[arg(long, global = true)]
    url: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Fetch users and print them with the fee total
    Users,
    /// Run the stopwatch until a delayed tick count resolves
    Timer {
        /// Ticks to wait for
        #[arg(short, long, default_value_t = 3)]
        ticks: u32,
    },
    /// Record a workout and print the points chart
    Workout {
        /// Points, as typed into the form
        #[arg(short, long, default_value = "189")]
        points: String,
        /// Workout name
        #[arg(short, long, default_value = "WOD Newton")]
        name: String,
        /// Workout date
        #[arg(short, long, default_value = "7/30/2022")]
        date: String,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "roster=info,roster_client=info,roster_core=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Users => {
            let mut config = ClientConfig::load(cli.config.as_deref())?;
            if let Some(url) = cli.url {
                config.base_url = url;
            }
            show_users(config).await?;
        }
        Commands::Timer { ticks } => {
            run_timer(ticks).await;
        }
        Commands::Workout { points, name, date } => {
            record_workout(WorkoutEntry::new(points, name, date));
        }
    }

    Ok(())
}

async fn show_users(config: ClientConfig) -> anyhow::Result<()> {
    let client = RosterClient::new(config)?;
    tracing::info!("Fetching users from {}", client.url());

    let store = Arc::new(UserStore::new());
    let loader = UserLoader::new(client, Arc::clone(&store));

    if let LoadOutcome::Kept { .. } = loader.load().await {
        tracing::warn!("Showing previously held users");
    }

    println!("Total Fees Paid: ${}", store.total_fees_paid());
    if !store.is_empty() {
        println!("{}", store.summary_text());
    }

    Ok(())
}

async fn run_timer(ticks: u32) {
    let stopwatch = Stopwatch::start(Duration::from_secs(1));

    let resolved = resolve_after_ticks(ticks, Duration::from_secs(1)).await;
    println!("Resolved after {} ticks ({})", resolved, stopwatch.formatted());

    stopwatch.stop();
}

fn record_workout(entry: WorkoutEntry) {
    let mut chart = PointsChart::default();
    let point = chart.record(&entry);

    println!("{} | {} | {} points -> {}", entry.date, entry.name, entry.points, point);
    println!("Points per WOD: {:?}", chart.values());
}
