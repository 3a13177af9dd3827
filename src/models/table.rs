use std::collections::HashMap;

use crate::error::{ProcessingError, Result};

/// In-memory relation with a header row and string-typed cells.
///
/// Column names are lower-cased at construction so that sources whose
/// headers differ only in case (`SOCCode`, `soccode`, `SOCCODE`) share join
/// keys. Every relational operation returns a new `Table`; nothing is
/// mutated in place.
#[derive(Debug, Clone)]
pub struct Table {
    name: String,
    columns: Vec<String>,
    index: HashMap<String, usize>,
    rows: Vec<Vec<String>>,
}

impl Table {
    /// Create an empty table with the given (case-insensitive) header.
    pub fn new(name: &str, columns: Vec<String>) -> Result<Self> {
        let columns: Vec<String> = columns.into_iter().map(|c| c.to_lowercase()).collect();
        let mut index = HashMap::with_capacity(columns.len());

        for (position, column) in columns.iter().enumerate() {
            if index.insert(column.clone(), position).is_some() {
                return Err(ProcessingError::DuplicateColumn {
                    column: column.clone(),
                    table: name.to_string(),
                });
            }
        }

        Ok(Self {
            name: name.to_string(),
            columns,
            index,
            rows: Vec::new(),
        })
    }

    /// Append a row; its width must match the header.
    pub fn push_row(&mut self, row: Vec<String>) -> Result<()> {
        if row.len() != self.columns.len() {
            return Err(ProcessingError::InvalidFormat(format!(
                "row with {} fields does not match {} columns in {}",
                row.len(),
                self.columns.len(),
                self.name
            )));
        }
        self.rows.push(row);
        Ok(())
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn rows(&self) -> impl Iterator<Item = &[String]> {
        self.rows.iter().map(|r| r.as_slice())
    }

    /// Position of a column, matched case-insensitively.
    pub fn column_index(&self, column: &str) -> Option<usize> {
        self.index.get(&column.to_lowercase()).copied()
    }

    /// Cell value by row number and column name.
    pub fn get(&self, row: usize, column: &str) -> Option<&str> {
        let col = self.column_index(column)?;
        self.rows.get(row).map(|r| r[col].as_str())
    }

    /// Verify that every named column exists, before a join executes.
    pub fn require_columns(&self, columns: &[&str]) -> Result<()> {
        for column in columns {
            if self.column_index(column).is_none() {
                return Err(ProcessingError::MissingColumn {
                    column: column.to_lowercase(),
                    table: self.name.clone(),
                });
            }
        }
        Ok(())
    }

    /// Inner join on the given key columns.
    ///
    /// An output row exists only where the key tuple matches on both sides;
    /// unmatched rows are dropped. Non-key columns whose names collide
    /// across the two sides are disambiguated with the suffixes. Duplicate
    /// keys fan out, one output row per matching pair, in left row order.
    pub fn inner_join(
        &self,
        right: &Table,
        keys: &[&str],
        left_suffix: &str,
        right_suffix: &str,
    ) -> Result<Table> {
        self.require_columns(keys)?;
        right.require_columns(keys)?;

        let keys: Vec<String> = keys.iter().map(|k| k.to_lowercase()).collect();

        // Right-side columns carried into the output: everything but the keys.
        let right_carry: Vec<usize> = right
            .columns
            .iter()
            .enumerate()
            .filter(|(_, c)| !keys.contains(c))
            .map(|(i, _)| i)
            .collect();

        let mut columns = Vec::with_capacity(self.columns.len() + right_carry.len());
        for column in &self.columns {
            if !keys.contains(column) && right.index.contains_key(column) {
                columns.push(format!("{column}{left_suffix}"));
            } else {
                columns.push(column.clone());
            }
        }
        for &i in &right_carry {
            let column = &right.columns[i];
            if self.index.contains_key(column) {
                columns.push(format!("{column}{right_suffix}"));
            } else {
                columns.push(column.clone());
            }
        }

        let mut joined = Table::new(&self.name, columns)?;

        let left_keys = self.key_positions(&keys);
        let right_index = right.build_key_index(&keys);

        for row in &self.rows {
            let key = key_tuple(row, &left_keys);
            let Some(matches) = right_index.get(&key) else {
                continue;
            };
            for &m in matches {
                let mut out = row.clone();
                out.extend(right_carry.iter().map(|&i| right.rows[m][i].clone()));
                joined.push_row(out)?;
            }
        }

        Ok(joined)
    }

    /// Left join on the given key columns.
    ///
    /// Every left row survives; matched right-side fields are attached,
    /// otherwise left empty. Duplicate right keys fan out. A right non-key
    /// column whose name already exists on the left is dropped (the left
    /// side wins).
    pub fn left_join(&self, right: &Table, keys: &[&str]) -> Result<Table> {
        self.require_columns(keys)?;
        right.require_columns(keys)?;

        let keys: Vec<String> = keys.iter().map(|k| k.to_lowercase()).collect();

        let right_carry: Vec<usize> = right
            .columns
            .iter()
            .enumerate()
            .filter(|(_, c)| {
                if keys.contains(c) {
                    return false;
                }
                if self.index.contains_key(c.as_str()) {
                    tracing::debug!(
                        column = c.as_str(),
                        right = right.name.as_str(),
                        "dropping duplicate column in left join"
                    );
                    return false;
                }
                true
            })
            .map(|(i, _)| i)
            .collect();

        let mut columns = self.columns.clone();
        columns.extend(right_carry.iter().map(|&i| right.columns[i].clone()));

        let mut joined = Table::new(&self.name, columns)?;

        let left_keys = self.key_positions(&keys);
        let right_index = right.build_key_index(&keys);

        for row in &self.rows {
            let key = key_tuple(row, &left_keys);
            match right_index.get(&key) {
                Some(matches) => {
                    for &m in matches {
                        let mut out = row.clone();
                        out.extend(right_carry.iter().map(|&i| right.rows[m][i].clone()));
                        joined.push_row(out)?;
                    }
                }
                None => {
                    let mut out = row.clone();
                    out.extend(right_carry.iter().map(|_| String::new()));
                    joined.push_row(out)?;
                }
            }
        }

        Ok(joined)
    }

    /// Project to an explicit column list, in the given order.
    pub fn select(&self, columns: &[&str]) -> Result<Table> {
        let mut positions = Vec::with_capacity(columns.len());
        for column in columns {
            let position =
                self.column_index(column)
                    .ok_or_else(|| ProcessingError::MissingColumn {
                        column: column.to_lowercase(),
                        table: self.name.clone(),
                    })?;
            positions.push(position);
        }

        let mut projected = Table::new(
            &self.name,
            columns.iter().map(|c| c.to_string()).collect(),
        )?;
        for row in &self.rows {
            projected.push_row(positions.iter().map(|&i| row[i].clone()).collect())?;
        }

        Ok(projected)
    }

    /// Rename columns; pairs are (old, new). Unlisted columns keep their name.
    pub fn rename(&self, pairs: &[(&str, &str)]) -> Result<Table> {
        for (old, _) in pairs {
            if self.column_index(old).is_none() {
                return Err(ProcessingError::MissingColumn {
                    column: old.to_lowercase(),
                    table: self.name.clone(),
                });
            }
        }

        let columns = self
            .columns
            .iter()
            .map(|column| {
                pairs
                    .iter()
                    .find(|(old, _)| old.to_lowercase() == *column)
                    .map(|(_, new)| new.to_string())
                    .unwrap_or_else(|| column.clone())
            })
            .collect();

        let mut renamed = Table::new(&self.name, columns)?;
        for row in &self.rows {
            renamed.push_row(row.clone())?;
        }

        Ok(renamed)
    }

    fn key_positions(&self, keys: &[String]) -> Vec<usize> {
        keys.iter().map(|k| self.index[k]).collect()
    }

    /// Hash index from key tuple to the row numbers carrying it.
    fn build_key_index(&self, keys: &[String]) -> HashMap<Vec<String>, Vec<usize>> {
        let positions = self.key_positions(keys);
        let mut index: HashMap<Vec<String>, Vec<usize>> = HashMap::with_capacity(self.rows.len());

        for (n, row) in self.rows.iter().enumerate() {
            index.entry(key_tuple(row, &positions)).or_default().push(n);
        }

        index
    }
}

fn key_tuple(row: &[String], positions: &[usize]) -> Vec<String> {
    positions.iter().map(|&i| row[i].clone()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn table(name: &str, header: &[&str], rows: &[&[&str]]) -> Table {
        let mut t = Table::new(name, header.iter().map(|c| c.to_string()).collect()).unwrap();
        for row in rows {
            t.push_row(row.iter().map(|c| c.to_string()).collect())
                .unwrap();
        }
        t
    }

    #[test]
    fn test_headers_are_lowercased() {
        let t = table("wages", &["SOCCode", "Area", "GeoLvl"], &[]);
        assert_eq!(t.columns(), &["soccode", "area", "geolvl"]);
        assert_eq!(t.column_index("SOCCODE"), Some(0));
    }

    #[test]
    fn test_duplicate_column_rejected() {
        let result = Table::new("bad", vec!["Area".to_string(), "area".to_string()]);
        assert!(matches!(
            result,
            Err(ProcessingError::DuplicateColumn { .. })
        ));
    }

    #[test]
    fn test_row_width_mismatch_rejected() {
        let mut t = table("wages", &["a", "b"], &[]);
        let result = t.push_row(vec!["1".to_string()]);
        assert!(matches!(result, Err(ProcessingError::InvalidFormat(_))));
    }

    #[test]
    fn test_inner_join_drops_unmatched_rows() {
        let annual = table(
            "annual",
            &["soccode", "area", "level1"],
            &[&["15-1254", "100", "50000"], &["15-1254", "200", "52000"]],
        );
        let hourly = table(
            "hourly",
            &["soccode", "area", "level1"],
            &[&["15-1254", "100", "24.04"]],
        );

        let joined = annual
            .inner_join(&hourly, &["soccode", "area"], "_annual", "_hourly")
            .unwrap();

        assert_eq!(joined.len(), 1);
        assert_eq!(joined.get(0, "area"), Some("100"));
    }

    #[test]
    fn test_inner_join_suffixes_colliding_columns() {
        let annual = table(
            "annual",
            &["soccode", "level1", "footnote"],
            &[&["15-1254", "50000", "a"]],
        );
        let hourly = table("hourly", &["soccode", "level1"], &[&["15-1254", "24.04"]]);

        let joined = annual
            .inner_join(&hourly, &["soccode"], "_annual", "_hourly")
            .unwrap();

        assert_eq!(
            joined.columns(),
            &["soccode", "level1_annual", "footnote", "level1_hourly"]
        );
        assert_eq!(joined.get(0, "level1_annual"), Some("50000"));
        assert_eq!(joined.get(0, "level1_hourly"), Some("24.04"));
        assert_eq!(joined.get(0, "footnote"), Some("a"));
    }

    #[test]
    fn test_inner_join_fans_out_on_duplicate_keys() {
        let left = table("l", &["k", "a"], &[&["1", "x"]]);
        let right = table("r", &["k", "b"], &[&["1", "p"], &["1", "q"]]);

        let joined = left.inner_join(&right, &["k"], "_l", "_r").unwrap();

        assert_eq!(joined.len(), 2);
        assert_eq!(joined.get(0, "b"), Some("p"));
        assert_eq!(joined.get(1, "b"), Some("q"));
    }

    #[test]
    fn test_left_join_keeps_unmatched_rows_with_empty_fields() {
        let wages = table("wages", &["area", "level1"], &[&["99999", "50000"]]);
        let geo = table("geo", &["area", "state"], &[&["100", "CA"]]);

        let joined = wages.left_join(&geo, &["area"]).unwrap();

        assert_eq!(joined.len(), 1);
        assert_eq!(joined.get(0, "level1"), Some("50000"));
        assert_eq!(joined.get(0, "state"), Some(""));
    }

    #[test]
    fn test_left_join_drops_duplicate_right_columns() {
        let wages = table("wages", &["area", "geolvl"], &[&["100", "1"]]);
        let geo = table(
            "geo",
            &["area", "geolvl", "state"],
            &[&["100", "9", "CA"]],
        );

        let joined = wages.left_join(&geo, &["area"]).unwrap();

        assert_eq!(joined.columns(), &["area", "geolvl", "state"]);
        // The left-hand geolvl survives, not the lookup table's.
        assert_eq!(joined.get(0, "geolvl"), Some("1"));
        assert_eq!(joined.get(0, "state"), Some("CA"));
    }

    #[test]
    fn test_left_join_fans_out_on_duplicate_right_keys() {
        let wages = table("wages", &["area", "level1"], &[&["100", "50000"]]);
        let geo = table("geo", &["area", "county"], &[&["100", "Alameda"], &["100", "Butte"]]);

        let joined = wages.left_join(&geo, &["area"]).unwrap();

        assert_eq!(joined.len(), 2);
    }

    #[test]
    fn test_select_projects_in_order() {
        let t = table("t", &["a", "b", "c"], &[&["1", "2", "3"]]);
        let projected = t.select(&["c", "a"]).unwrap();

        assert_eq!(projected.columns(), &["c", "a"]);
        assert_eq!(projected.get(0, "c"), Some("3"));
    }

    #[test]
    fn test_select_missing_column_fails() {
        let t = table("t", &["a"], &[]);
        let result = t.select(&["b"]);
        assert!(matches!(result, Err(ProcessingError::MissingColumn { .. })));
    }

    #[test]
    fn test_rename_columns() {
        let t = table("t", &["soccode", "geolvl"], &[&["15-1254", "1"]]);
        let renamed = t
            .rename(&[("soccode", "soc_code"), ("geolvl", "geography_level")])
            .unwrap();

        assert_eq!(renamed.columns(), &["soc_code", "geography_level"]);
        assert_eq!(renamed.get(0, "soc_code"), Some("15-1254"));
    }

    #[test]
    fn test_join_requires_key_columns() {
        let left = table("l", &["k"], &[]);
        let right = table("r", &["other"], &[]);
        let result = left.inner_join(&right, &["k"], "_l", "_r");
        assert!(matches!(result, Err(ProcessingError::MissingColumn { .. })));
    }
}
