use crate::error::Result;
use crate::models::Table;

/// The triple identifying one wage observation across both wage tables.
const WAGE_JOIN_KEYS: [&str; 3] = ["soccode", "area", "geolvl"];

const ANNUAL_SUFFIX: &str = "_annual";
const HOURLY_SUFFIX: &str = "_hourly";

/// Projection applied after the joins, in output order.
const OUTPUT_COLUMNS: [&str; 16] = [
    // Job
    "soccode",
    "title",
    // Geography
    "area",
    "areaname",
    "stateab",
    "state",
    "countytownname",
    "geolvl",
    // Annual wages
    "level1_annual",
    "level2_annual",
    "level3_annual",
    "level4_annual",
    // Hourly wages
    "level1_hourly",
    "level2_hourly",
    "level3_hourly",
    "level4_hourly",
];

const OUTPUT_RENAMES: [(&str, &str); 6] = [
    ("soccode", "soc_code"),
    ("title", "job_title"),
    ("areaname", "area_name"),
    ("stateab", "state_abbr"),
    ("countytownname", "county_or_town"),
    ("geolvl", "geography_level"),
];

/// Joins the four wage-survey tables into one denormalized table.
///
/// The pipeline is fixed: inner-join annual and hourly wages on
/// (soccode, area, geolvl), left-join geography on area, left-join
/// occupation titles on soccode, then project and rename to the output
/// schema. A wage observation without both an annual and an hourly entry
/// is dropped; missing geography or occupation metadata leaves fields
/// empty without dropping the row.
pub struct WageMerger;

impl WageMerger {
    pub fn new() -> Self {
        Self
    }

    pub fn merge(
        &self,
        annual: &Table,
        hourly: &Table,
        geography: &Table,
        occupations: &Table,
    ) -> Result<Table> {
        let wages = annual.inner_join(hourly, &WAGE_JOIN_KEYS, ANNUAL_SUFFIX, HOURLY_SUFFIX)?;
        tracing::debug!(
            annual = annual.len(),
            hourly = hourly.len(),
            matched = wages.len(),
            "joined wage tables"
        );

        let wages = wages.left_join(geography, &["area"])?;

        let titles = occupations.select(&["soccode", "title"])?;
        let wages = wages.left_join(&titles, &["soccode"])?;

        let combined = wages.select(&OUTPUT_COLUMNS)?;
        combined.rename(&OUTPUT_RENAMES)
    }
}

impl Default for WageMerger {
    fn default() -> Self {
        Self::new()
    }
}
