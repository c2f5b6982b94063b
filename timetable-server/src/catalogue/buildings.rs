//! Building code to street address table.
//!
//! Rooms in the course dataset are named like `"BA 1160"`; the first two
//! characters are the building code. The table maps codes to addresses a
//! directions service can route between.

use std::collections::HashMap;
use std::path::Path;

use super::error::CatalogueError;

/// Mapping from building code to street address.
#[derive(Debug, Clone, Default)]
pub struct BuildingTable {
    addresses: HashMap<String, String>,
}

impl BuildingTable {
    /// Create an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Read a table from a CSV file of `address,code` rows.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, CatalogueError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| CatalogueError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&text)
    }

    /// Parse `address,code` rows. The address may be double-quoted and
    /// contain commas. Blank lines are ignored.
    pub fn parse(text: &str) -> Result<Self, CatalogueError> {
        let mut table = Self::new();

        for (idx, line) in text.lines().enumerate() {
            if line.trim().is_empty() {
                continue;
            }

            let fields = split_csv_line(line).ok_or_else(|| CatalogueError::Building {
                line: idx + 1,
                message: "unterminated quoted field".to_string(),
            })?;

            let [address, code, ..] = fields.as_slice() else {
                return Err(CatalogueError::Building {
                    line: idx + 1,
                    message: "expected address and code".to_string(),
                });
            };

            table.insert(code.trim(), address.trim());
        }

        Ok(table)
    }

    /// Add or replace a building.
    pub fn insert(&mut self, code: &str, address: &str) {
        self.addresses.insert(code.to_string(), address.to_string());
    }

    /// Address for a building code.
    pub fn address(&self, code: &str) -> Option<&str> {
        self.addresses.get(code).map(String::as_str)
    }

    /// Address for a room name such as `"BA 1160"`, via its building code.
    pub fn address_for_room(&self, room: &str) -> Option<&str> {
        let code = room.get(..2)?;
        self.address(code)
    }

    pub fn len(&self) -> usize {
        self.addresses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.addresses.is_empty()
    }
}

/// Split one CSV line into fields. Returns `None` on an unterminated quote.
fn split_csv_line(line: &str) -> Option<Vec<String>> {
    let mut fields = Vec::new();
    let mut field = String::new();
    let mut in_quotes = false;
    let mut chars = line.chars().peekable();

    while let Some(c) = chars.next() {
        match (c, in_quotes) {
            ('"', true) if chars.peek() == Some(&'"') => {
                field.push('"');
                chars.next();
            }
            ('"', true) => in_quotes = false,
            ('"', false) if field.is_empty() => in_quotes = true,
            (',', false) => fields.push(std::mem::take(&mut field)),
            _ => field.push(c),
        }
    }

    if in_quotes {
        return None;
    }
    fields.push(field);
    Some(fields)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_plain_and_quoted_rows() {
        let csv = "\
40 St George St,BA
\"100 St George St, Toronto, ON\",SS

\"Say \"\"hi\"\" Hall\",SH
";
        let table = BuildingTable::parse(csv).unwrap();

        assert_eq!(table.len(), 3);
        assert_eq!(table.address("BA"), Some("40 St George St"));
        assert_eq!(table.address("SS"), Some("100 St George St, Toronto, ON"));
        assert_eq!(table.address("SH"), Some("Say \"hi\" Hall"));
        assert_eq!(table.address("XX"), None);
    }

    #[test]
    fn later_rows_replace_earlier() {
        let table = BuildingTable::parse("Old,BA\nNew,BA\n").unwrap();
        assert_eq!(table.address("BA"), Some("New"));
    }

    #[test]
    fn row_without_code_is_error() {
        let err = BuildingTable::parse("40 St George St,BA\nno code here\n").unwrap_err();
        assert!(matches!(err, CatalogueError::Building { line: 2, .. }));
    }

    #[test]
    fn unterminated_quote_is_error() {
        let err = BuildingTable::parse("\"40 St George St,BA\n").unwrap_err();
        assert!(matches!(err, CatalogueError::Building { line: 1, .. }));
    }

    #[test]
    fn room_lookup_uses_first_two_chars() {
        let mut table = BuildingTable::new();
        table.insert("BA", "40 St George St");

        assert_eq!(table.address_for_room("BA 1160"), Some("40 St George St"));
        assert_eq!(table.address_for_room("BA"), Some("40 St George St"));
        assert_eq!(table.address_for_room("MP 102"), None);
        assert_eq!(table.address_for_room("B"), None);
    }

    #[test]
    fn load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("buildings.csv");
        std::fs::write(&path, "40 St George St,BA\n").unwrap();

        let table = BuildingTable::load(&path).unwrap();
        assert_eq!(table.address("BA"), Some("40 St George St"));

        let missing = BuildingTable::load(dir.path().join("nope.csv"));
        assert!(matches!(missing, Err(CatalogueError::Io { .. })));
    }
}
