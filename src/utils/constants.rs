/// Survey data directory, relative to the working directory
pub const DEFAULT_DATA_DIR: &str = "data/OFLC_Wages_2025-26_Updated";

/// Source file names within the data directory
pub const ANNUAL_WAGES_FILE: &str = "ALC_Export.csv";
pub const HOURLY_WAGES_FILE: &str = "EDC_Export.csv";
pub const GEOGRAPHY_LOOKUP_FILE: &str = "Geography.csv";
pub const OCCUPATIONS_FILE: &str = "oes_soc_occs.csv";

/// Merged output file name
pub const COMBINED_WAGES_FILE: &str = "prevailing_wages_combined.csv";

/// Fixed paths of the front-end export jobs
pub const DEFAULT_OCCUPATIONS_CSV: &str = "data/OFLC_Wages_2025-26_Updated/oes_soc_occs.csv";
pub const DEFAULT_GEOGRAPHY_CSV: &str = "data/OFLC_Wages_2025-26_Updated/geography.csv";
pub const DEFAULT_OCCUPATIONS_JSON: &str = "frontend/data/occupations.json";
pub const DEFAULT_GEOGRAPHY_JSON: &str = "frontend/data/geography.json";
pub const DEFAULT_JOBS_JSON: &str = "frontend/data/jobs.json";
