use anyhow::{Context, Result};
use clap::Parser;
use std::path::Path;
use tinystat::boxplot::render_box_plot;
use tinystat::cli::{Cli, OutputFormat};
use tinystat::config::Config;
use tinystat::csv_output::CsvOutput;
use tinystat::json_output::JsonOutput;
use tinystat::reader::read_file;
use tinystat::report::{Report, SampleReport};
use tracing_subscriber::EnvFilter;

const CHART_WIDTH: usize = 60;

/// Initialize tracing subscriber for debug output
fn init_tracing(debug: bool) {
    if debug {
        tracing_subscriber::fmt()
            .with_env_filter(
                EnvFilter::from_default_env().add_directive(tracing::Level::TRACE.into()),
            )
            .with_writer(std::io::stderr)
            .init();
    }
}

/// A sample as read from disk, keeping the raw values for the chart
struct LoadedSample {
    name: String,
    data: Vec<f64>,
}

fn load(path: &Path, config: &Config) -> Result<LoadedSample> {
    let data = read_file(path, config.column, config.delimiter)?;
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string());
    Ok(LoadedSample { name, data })
}

fn sample_report(sample: &LoadedSample) -> Result<SampleReport> {
    SampleReport::from_data(sample.name.clone(), &sample.data)
        .with_context(|| format!("Cannot summarize {}", sample.name))
}

fn main() -> Result<()> {
    let args = Cli::parse();

    // Initialize tracing if --debug flag is set
    init_tracing(args.debug);

    let config = args.resolve_config()?;
    tracing::debug!(?config, "resolved configuration");

    let control = load(&args.control, &config)?;
    let experiments = args
        .experiments
        .iter()
        .map(|path| load(path, &config))
        .collect::<Result<Vec<_>>>()?;

    let report = Report::build(
        sample_report(&control)?,
        experiments
            .iter()
            .map(sample_report)
            .collect::<Result<Vec<_>>>()?,
        config.confidence,
        config.variant,
    )
    .context("Comparison failed")?;

    match config.format {
        OutputFormat::Text => {
            if config.chart {
                let samples: Vec<(&str, &[f64])> = std::iter::once(&control)
                    .chain(&experiments)
                    .map(|s| (s.name.as_str(), s.data.as_slice()))
                    .collect();
                println!("{}", render_box_plot(&samples, CHART_WIDTH));
            }
            print!("{}", report.to_text());
        }
        OutputFormat::Json => println!("{}", JsonOutput::from_report(&report).to_json()?),
        OutputFormat::Csv => print!("{}", CsvOutput::new(&report).to_csv()),
    }

    Ok(())
}
