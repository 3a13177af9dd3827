use serde::Serialize;

/// One row of the SOC occupation lookup table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Occupation {
    pub soc_code: String,
    pub title: String,
    pub description: String,
}

impl Occupation {
    pub fn new(soc_code: String, title: String, description: String) -> Self {
        Self {
            soc_code,
            title,
            description,
        }
    }
}

/// Record shape of `occupations.json`, one entry per source row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OccupationEntry {
    pub value: String,
    pub label: String,
    pub title: String,
    pub description: String,
    pub embedding_text: String,
}

impl From<&Occupation> for OccupationEntry {
    fn from(occupation: &Occupation) -> Self {
        Self {
            value: occupation.soc_code.clone(),
            label: format!("{} - {}", occupation.title, occupation.soc_code),
            title: occupation.title.clone(),
            description: occupation.description.clone(),
            embedding_text: format!("{}, {}", occupation.title, occupation.description),
        }
    }
}
