//! Console front-end for the cluster simulation.

use clap::Parser;
use rand::rngs::SmallRng;
use rand::SeedableRng;
use tracing::info;
use tracing_subscriber::EnvFilter;

use berth_cluster::Cluster;

/// Simulate a single-server cluster fed by a bounded task queue.
#[derive(Parser)]
#[command(name = "berth-cluster", version)]
struct Args {
    /// Cluster capacity: the maximum number of queued tasks.
    #[arg(long)]
    capacity: usize,

    /// Per-cycle task arrival probability, in [0, 1].
    #[arg(long)]
    intensity: f64,

    /// Per-cycle completion probability for the task in service, in [0, 1].
    #[arg(long)]
    performance: f64,

    /// Number of cycles to simulate.
    #[arg(long)]
    cycles: u64,

    /// RNG seed for a reproducible run; random when omitted.
    #[arg(long)]
    seed: Option<u64>,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    if let Err(err) = run() {
        eprintln!("{err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let rng = match args.seed {
        Some(seed) => SmallRng::seed_from_u64(seed),
        None => SmallRng::from_os_rng(),
    };

    info!(
        capacity = args.capacity,
        intensity = args.intensity,
        performance = args.performance,
        cycles = args.cycles,
        "starting simulation"
    );

    let mut cluster = Cluster::new(args.capacity, args.intensity, args.performance, rng)?;
    cluster.run(args.cycles);
    report(&cluster);

    Ok(())
}

fn report(cluster: &Cluster<SmallRng>) {
    let stats = cluster.stats();

    println!("tasks submitted:       {}", stats.total_tasks);
    println!(
        "rejected (queue full): {} ({:.1}%)",
        stats.rejected_tasks,
        100.0 * stats.rejection_ratio()
    );
    println!("completed:             {}", stats.completed_tasks);
    println!("still queued:          {}", cluster.queued());
    println!("mean service cycles:   {:.2}", stats.mean_service_cycles());
    println!(
        "idle cycles:           {} of {} ({:.1}%)",
        stats.idle_cycles,
        stats.cycles,
        100.0 * stats.idle_ratio()
    );

    let hist = cluster.service_cycles();
    if hist.len() > 0 {
        println!(
            "service cycles         | p50: {} | p90: {} | p99: {} | max: {}",
            hist.value_at_quantile(0.50),
            hist.value_at_quantile(0.90),
            hist.value_at_quantile(0.99),
            hist.max(),
        );
    }
}
