use rc_engine::{ConsoleProgress, Report};
use rc_optimizer::Optimizer;
use rc_types::OptimizationConfig;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = OptimizationConfig::default_rotation()?;
    let optimizer = Optimizer::new(config)?;
    info!(
        "Loaded default rotation: {} skills, {}s window",
        optimizer.config().skills.len(),
        optimizer.config().time_limit
    );

    let mut progress = ConsoleProgress::stdout();
    let result = optimizer.run_with(&mut progress)?;

    println!();
    print!("{}", Report::new(&result));
    Ok(())
}
