/// One row of the front-end geography CSV: a county or town and its state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CountyRecord {
    pub state: String,
    pub county_town: String,
}

impl CountyRecord {
    pub fn new(state: String, county_town: String) -> Self {
        Self { state, county_town }
    }
}
