use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::utils::constants::{
    DEFAULT_DATA_DIR, DEFAULT_GEOGRAPHY_CSV, DEFAULT_GEOGRAPHY_JSON, DEFAULT_JOBS_JSON,
    DEFAULT_OCCUPATIONS_CSV, DEFAULT_OCCUPATIONS_JSON,
};

#[derive(Parser)]
#[command(name = "oflc-processor")]
#[command(about = "OFLC prevailing-wage survey data processor")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    #[arg(short, long, global = true, help = "Enable verbose logging")]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Merge the four survey tables into one combined wage CSV
    Merge {
        #[arg(
            short,
            long,
            help = "Directory containing the survey CSV files",
            default_value = DEFAULT_DATA_DIR
        )]
        data_dir: PathBuf,

        #[arg(
            short,
            long,
            help = "Output CSV path [default: prevailing_wages_combined.csv next to the data directory]"
        )]
        output_file: Option<PathBuf>,
    },

    /// Export occupations.json for the front-end
    ExportOccupations {
        #[arg(short, long, default_value = DEFAULT_OCCUPATIONS_CSV)]
        input_file: PathBuf,

        #[arg(short, long, default_value = DEFAULT_OCCUPATIONS_JSON)]
        output_file: PathBuf,
    },

    /// Export geography.json (state -> county/town names) for the front-end
    ExportGeography {
        #[arg(short, long, default_value = DEFAULT_GEOGRAPHY_CSV)]
        input_file: PathBuf,

        #[arg(short, long, default_value = DEFAULT_GEOGRAPHY_JSON)]
        output_file: PathBuf,
    },

    /// Export jobs.json (sorted unique job titles) for the front-end
    ExportJobs {
        #[arg(short, long, default_value = DEFAULT_OCCUPATIONS_CSV)]
        input_file: PathBuf,

        #[arg(short, long, default_value = DEFAULT_JOBS_JSON)]
        output_file: PathBuf,
    },
}
