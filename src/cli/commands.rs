use crate::cli::args::{Cli, Commands};
use crate::error::{ReconcileError, Result};
use crate::models::SensorClass;
use crate::processors::{
    CollisionPolicy, CoordinateIndex, Enricher, EnrichmentReport, PresenceChecker,
};
use crate::readers::{RegistryReader, SensorReader};
use crate::utils::progress::ProgressReporter;
use std::path::Path;
use tracing_subscriber::EnvFilter;

pub async fn run(cli: Cli) -> Result<()> {
    init_tracing(&cli)?;

    match cli.command {
        Commands::Check { data_dir } => check(&data_dir),

        Commands::Enrich {
            data_dir,
            collision_policy,
        } => enrich(&data_dir, collision_policy.into()),
    }
}

fn check(data_dir: &Path) -> Result<()> {
    println!("Checking station registries...");
    println!("Data directory: {}", data_dir.display());

    let reader = RegistryReader::new(data_dir);
    let stations = reader.read_stations()?;
    let euro_stations = reader.read_euro_stations()?;

    let report = PresenceChecker::new().check(&stations, &euro_stations);
    println!("\n{}", report.generate_summary());

    Ok(())
}

fn enrich(data_dir: &Path, policy: CollisionPolicy) -> Result<()> {
    println!("Enriching station registry with Dewetra sensors...");
    println!("Data directory: {}", data_dir.display());

    let registry_reader = RegistryReader::new(data_dir);
    let mut stations = registry_reader.read_stations()?;
    let euro_stations = registry_reader.read_euro_stations()?;

    // Presence check first: ID-space divergence is worth surfacing
    // before coordinate matching muddies the picture.
    let presence = PresenceChecker::new().check(&stations, &euro_stations);
    println!("\n{}", presence.generate_summary());

    let progress = ProgressReporter::new_spinner("Building coordinate index...", false);
    let index = CoordinateIndex::build(&stations, policy)?;
    progress.println(&format!(
        "Indexed {} stations ({} collisions)",
        index.len(),
        index.collisions().len()
    ));

    let mut report = EnrichmentReport {
        index_collisions: index.collisions().len(),
        ..EnrichmentReport::default()
    };

    let sensor_reader = SensorReader::new(data_dir);
    let enricher = Enricher::new(index);

    for class in SensorClass::ALL {
        progress.set_message(&format!("Matching {} sensors...", class));
        let sensors = sensor_reader.read_class(class)?;
        report
            .classes
            .push(enricher.enrich_class(&mut stations, class, &sensors));
    }

    progress.finish_with_message("Enrichment complete");

    println!("\n{}", report.generate_summary(&stations, &euro_stations));

    Ok(())
}

fn init_tracing(cli: &Cli) -> Result<()> {
    let default_level = if cli.verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let init_result = match &cli.log_file {
        Some(path) => {
            let file = std::fs::File::create(path)?;
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(std::sync::Mutex::new(file))
                .with_ansi(false)
                .try_init()
        }
        None => tracing_subscriber::fmt().with_env_filter(filter).try_init(),
    };

    init_result.map_err(|e| ReconcileError::Config(format!("failed to set up logging: {}", e)))
}
