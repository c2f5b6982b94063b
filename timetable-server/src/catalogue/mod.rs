//! Course catalogue.
//!
//! Loads the course dataset and building table once at startup and answers
//! "which lecture sections does this course have this term?".

mod buildings;
mod dataset;
mod error;

use std::fmt;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::domain::Section;

pub use buildings::BuildingTable;
pub use error::CatalogueError;

use dataset::{RawDataset, split_offering_key};

/// Academic term a timetable is planned for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Term {
    #[serde(rename = "F")]
    Fall,
    #[serde(rename = "S")]
    Winter,
}

impl Term {
    /// Parse a term letter, `F` or `S`, ignoring case.
    pub fn parse(s: &str) -> Result<Self, CatalogueError> {
        match s.trim().to_ascii_uppercase().as_str() {
            "F" => Ok(Term::Fall),
            "S" => Ok(Term::Winter),
            _ => Err(CatalogueError::InvalidTerm(s.to_string())),
        }
    }

    /// The dataset's letter for this term.
    pub fn letter(&self) -> char {
        match self {
            Term::Fall => 'F',
            Term::Winter => 'S',
        }
    }

    /// Whether an offering with the given term letter runs in this term.
    /// Full-year (`Y`) offerings run in both.
    pub fn accepts(&self, offering: char) -> bool {
        offering == self.letter() || offering == 'Y'
    }
}

impl fmt::Display for Term {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letter())
    }
}

#[derive(Debug, Clone)]
struct Offering {
    code: String,
    term: char,
    sections: Vec<Section>,
}

/// All lecture offerings from the dataset, in file order.
#[derive(Debug, Clone, Default)]
pub struct Catalogue {
    offerings: Vec<Offering>,
}

impl Catalogue {
    /// Load the dataset and building table from disk.
    pub fn load(
        dataset_path: impl AsRef<Path>,
        buildings_path: impl AsRef<Path>,
    ) -> Result<Self, CatalogueError> {
        let dataset_path = dataset_path.as_ref();
        let buildings = BuildingTable::load(buildings_path)?;

        let json = std::fs::read_to_string(dataset_path).map_err(|source| CatalogueError::Io {
            path: dataset_path.to_path_buf(),
            source,
        })?;

        let catalogue = Self::from_json(&json, &buildings)?;
        info!(
            offerings = catalogue.len(),
            buildings = buildings.len(),
            path = %dataset_path.display(),
            "loaded course catalogue"
        );
        Ok(catalogue)
    }

    /// Parse a dataset, resolving rooms through `buildings`.
    ///
    /// Offerings with no lecture sections are dropped, as are keys too short
    /// to carry a course code and term.
    pub fn from_json(json: &str, buildings: &BuildingTable) -> Result<Self, CatalogueError> {
        let raw: RawDataset = serde_json::from_str(json).map_err(|e| CatalogueError::Json {
            message: e.to_string(),
        })?;

        let mut offerings = Vec::with_capacity(raw.offerings.len());
        for (key, offering) in &raw.offerings {
            let Some((code, term)) = split_offering_key(key) else {
                debug!(key, "skipping offering with malformed key");
                continue;
            };

            let sections = offering.lecture_sections(code, buildings);
            if sections.is_empty() {
                continue;
            }

            offerings.push(Offering {
                code: code.to_string(),
                term,
                sections,
            });
        }

        Ok(Self { offerings })
    }

    /// Lecture sections for a course in a term.
    ///
    /// `course` is a six-character code like `"CSC111"`, case-insensitive.
    /// If several offerings match, the last one in the dataset wins.
    pub fn candidates(&self, course: &str, term: Term) -> Result<Vec<Section>, CatalogueError> {
        let wanted = course.trim().to_ascii_uppercase();

        self.offerings
            .iter()
            .rev()
            .find(|o| o.code == wanted && term.accepts(o.term))
            .map(|o| o.sections.clone())
            .ok_or(CatalogueError::CourseNotOffered {
                course: wanted,
                term,
            })
    }

    /// Number of offerings with at least one lecture section.
    pub fn len(&self) -> usize {
        self.offerings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.offerings.is_empty()
    }
}
