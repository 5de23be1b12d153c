use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

use clap::Parser;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use owidplot::{run_dashboard, CsvSource, DashboardConfig, Dataset};

/// Interactive dashboard over the Our World in Data COVID-19 CSV.
#[derive(Parser, Debug)]
#[command(name = "owidplot", about, version)]
struct Args {
    /// YAML config file; missing keys take their defaults.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Dataset CSV, overriding `dataset_path` from the config.
    dataset: Option<PathBuf>,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("owidplot=info")),
        )
        .init();

    let args = Args::parse();

    let mut cfg = match &args.config {
        Some(path) => match DashboardConfig::load(path) {
            Ok(c) => c,
            Err(e) => {
                error!(error = %e, "could not read config");
                return ExitCode::FAILURE;
            }
        },
        None => DashboardConfig::default(),
    };
    if let Some(path) = args.dataset {
        cfg.dataset_path = path;
    }

    // Load failures are fatal: there is nothing to show without data.
    let dataset = match Dataset::load(&CsvSource::from_path(&cfg.dataset_path)) {
        Ok(d) => Arc::new(d),
        Err(e) => {
            error!(error = %e, path = %cfg.dataset_path.display(), "failed to load dataset");
            return ExitCode::FAILURE;
        }
    };
    info!(
        rows = dataset.len(),
        locations = dataset.locations().len(),
        "dataset ready"
    );

    match run_dashboard(dataset, cfg) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!(error = %e, "dashboard exited with an error");
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_config_and_positional_dataset() {
        let args = Args::try_parse_from(["owidplot", "-c", "dash.yaml", "data.csv"]).unwrap();
        assert_eq!(args.config, Some(PathBuf::from("dash.yaml")));
        assert_eq!(args.dataset, Some(PathBuf::from("data.csv")));

        let args = Args::try_parse_from(["owidplot", "--config", "dash.yaml"]).unwrap();
        assert_eq!(args.dataset, None);
    }

    #[test]
    fn rejects_unknown_flags_and_extra_paths() {
        assert!(Args::try_parse_from(["owidplot", "--bogus"]).is_err());
        assert!(Args::try_parse_from(["owidplot", "a.csv", "b.csv"]).is_err());
    }
}
