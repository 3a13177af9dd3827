pub mod geography;
pub mod job_titles;
pub mod occupations;

pub use geography::GeographyExporter;
pub use job_titles::JobTitlesExporter;
pub use occupations::OccupationExporter;
