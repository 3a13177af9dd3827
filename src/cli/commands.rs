use std::path::PathBuf;

use tracing_subscriber::EnvFilter;

use crate::cli::args::{Cli, Commands};
use crate::error::Result;
use crate::exporters::{GeographyExporter, JobTitlesExporter, OccupationExporter};
use crate::processors::WageMerger;
use crate::readers::{GeographyReader, OccupationReader, TableReader};
use crate::utils::constants::{
    ANNUAL_WAGES_FILE, COMBINED_WAGES_FILE, GEOGRAPHY_LOOKUP_FILE, HOURLY_WAGES_FILE,
    OCCUPATIONS_FILE,
};
use crate::utils::progress::ProgressReporter;
use crate::writers::{CsvTableWriter, JsonWriter};

pub fn run(cli: Cli) -> Result<()> {
    init_logging(cli.verbose);

    match cli.command {
        Commands::Merge {
            data_dir,
            output_file,
        } => merge(data_dir, output_file),

        Commands::ExportOccupations {
            input_file,
            output_file,
        } => export_occupations(input_file, output_file),

        Commands::ExportGeography {
            input_file,
            output_file,
        } => export_geography(input_file, output_file),

        Commands::ExportJobs {
            input_file,
            output_file,
        } => export_jobs(input_file, output_file),
    }
}

fn init_logging(verbose: bool) {
    let default_filter = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_filter));

    // try_init: integration tests call run() repeatedly in one process
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}

fn merge(data_dir: PathBuf, output_file: Option<PathBuf>) -> Result<()> {
    println!("Merging wage survey tables...");
    println!("Data directory: {}", data_dir.display());

    let progress = ProgressReporter::new_spinner("Loading source tables...");

    let reader = TableReader::new();
    let annual = reader.read_table(&data_dir.join(ANNUAL_WAGES_FILE), "annual wages")?;
    let hourly = reader.read_table(&data_dir.join(HOURLY_WAGES_FILE), "hourly wages")?;
    let geography = reader.read_table(&data_dir.join(GEOGRAPHY_LOOKUP_FILE), "geography")?;
    let occupations = reader.read_table(&data_dir.join(OCCUPATIONS_FILE), "occupations")?;

    progress.set_message("Joining tables...");
    let combined = WageMerger::new().merge(&annual, &hourly, &geography, &occupations)?;
    progress.finish_with_message(&format!("Merged {} rows", combined.len()));

    let output_file = output_file.unwrap_or_else(|| default_combined_path(&data_dir));
    CsvTableWriter::new().write_table(&combined, &output_file)?;

    println!(
        "Successfully wrote {} combined wage rows to {}",
        combined.len(),
        output_file.display()
    );

    Ok(())
}

fn default_combined_path(data_dir: &std::path::Path) -> PathBuf {
    match data_dir.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.join(COMBINED_WAGES_FILE),
        _ => PathBuf::from(COMBINED_WAGES_FILE),
    }
}

fn export_occupations(input_file: PathBuf, output_file: PathBuf) -> Result<()> {
    let occupations = OccupationReader::new().read_occupations(&input_file)?;
    let entries = OccupationExporter::new().build(&occupations);

    JsonWriter::new().write_pretty(&entries, &output_file)?;

    println!(
        "Successfully converted {} occupations to {}",
        entries.len(),
        output_file.display()
    );

    Ok(())
}

fn export_geography(input_file: PathBuf, output_file: PathBuf) -> Result<()> {
    let counties = GeographyReader::new().read_counties(&input_file)?;
    let grouped = GeographyExporter::new().build(&counties);

    JsonWriter::new().write_pretty(&grouped, &output_file)?;

    println!(
        "Successfully converted {} states to {}",
        grouped.len(),
        output_file.display()
    );

    Ok(())
}

fn export_jobs(input_file: PathBuf, output_file: PathBuf) -> Result<()> {
    let occupations = OccupationReader::new().read_occupations(&input_file)?;
    let titles = JobTitlesExporter::new().build(&occupations);

    JsonWriter::new().write_pretty(&titles, &output_file)?;

    println!(
        "Successfully extracted {} job titles to {}",
        titles.len(),
        output_file.display()
    );

    Ok(())
}
