use std::io::BufRead;
use std::path::{Path, PathBuf};

use crate::errors::FamilySetError;
use crate::models::{Family, Feature};
use crate::utils::get_dynamic_reader;

///
/// FamilySet struct, every family read from one input file.
///
/// Each line of the input is a JSON array of features; the 0-based line
/// number becomes the family id.
///
#[derive(Clone, Debug)]
pub struct FamilySet {
    pub families: Vec<Family>,
    pub path: Option<PathBuf>,
}

impl FamilySet {
    ///
    /// Parse a family set from a reader yielding one JSON record per line.
    ///
    /// # Arguments
    /// - reader: the source of the records
    pub fn from_reader<R: BufRead>(reader: R) -> Result<Self, FamilySetError> {
        let mut families = Vec::new();

        // records are split as bytes so a bad encoding is reported with its index
        for (index, record) in reader.split(b'\n').enumerate() {
            let members: Vec<Feature> = record
                .map_err(serde_json::Error::io)
                .and_then(|bytes| serde_json::from_slice(&bytes))
                .map_err(|source| FamilySetError::FamilyParse { index, source })?;
            families.push(Family::new(index, members));
        }

        Ok(FamilySet {
            families,
            path: None,
        })
    }

    ///
    /// Re-order families by descending member count.
    ///
    /// The sort is stable, so families with the same number of members keep
    /// their input order. All pairwise comparisons and the annotated output
    /// follow this order.
    pub fn sort_by_members(&mut self) {
        self.families.sort_by(|a, b| b.len().cmp(&a.len()));
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Family> {
        self.families.iter()
    }

    pub fn len(&self) -> usize {
        self.families.len()
    }

    pub fn is_empty(&self) -> bool {
        self.families.is_empty()
    }

    ///
    /// Total number of features across all families
    ///
    pub fn total_members(&self) -> usize {
        self.families.iter().map(Family::len).sum()
    }
}

impl TryFrom<&Path> for FamilySet {
    type Error = FamilySetError;

    ///
    /// Create a new [FamilySet] from a newline delimited JSON file.
    ///
    /// # Arguments:
    /// - value: path to the file on disk, optionally gzip compressed.
    fn try_from(value: &Path) -> Result<Self, Self::Error> {
        let reader = get_dynamic_reader(value)
            .map_err(|e| FamilySetError::FileReadError(format!("{}: {:#}", value.display(), e)))?;

        let mut fs = FamilySet::from_reader(reader)?;
        fs.path = Some(value.to_owned());

        Ok(fs)
    }
}

impl TryFrom<&str> for FamilySet {
    type Error = FamilySetError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        FamilySet::try_from(Path::new(value))
    }
}

impl TryFrom<PathBuf> for FamilySet {
    type Error = FamilySetError;

    fn try_from(value: PathBuf) -> Result<Self, Self::Error> {
        FamilySet::try_from(value.as_path())
    }
}

impl From<Vec<Family>> for FamilySet {
    fn from(families: Vec<Family>) -> Self {
        FamilySet {
            families,
            path: None,
        }
    }
}

impl<'a> IntoIterator for &'a FamilySet {
    type Item = &'a Family;
    type IntoIter = std::slice::Iter<'a, Family>;

    fn into_iter(self) -> Self::IntoIter {
        self.families.iter()
    }
}
