use std::fmt::{self, Display};

use serde::{Deserialize, Serialize};

use repfam_coverage::Span;

use crate::errors::FamilySetError;

/// Orientation of a feature relative to the reference.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(try_from = "StrandRepr", into = "i8")]
pub enum Strand {
    Forward,
    Reverse,
    #[default]
    Unknown,
}

/// Strands are written either as integers (`1`, `-1`, `0`) or as the
/// characters used in feature files (`+`, `-`, `.`).
#[derive(Deserialize)]
#[serde(untagged)]
enum StrandRepr {
    Int(i64),
    Str(String),
}

impl TryFrom<StrandRepr> for Strand {
    type Error = FamilySetError;

    fn try_from(value: StrandRepr) -> Result<Self, Self::Error> {
        match value {
            StrandRepr::Int(1) => Ok(Strand::Forward),
            StrandRepr::Int(-1) => Ok(Strand::Reverse),
            StrandRepr::Int(0) => Ok(Strand::Unknown),
            StrandRepr::Int(other) => Err(FamilySetError::StrandParseError(other.to_string())),
            StrandRepr::Str(s) => match s.as_str() {
                "+" | "+1" | "1" => Ok(Strand::Forward),
                "-" | "-1" => Ok(Strand::Reverse),
                "." | "0" | "" => Ok(Strand::Unknown),
                _ => Err(FamilySetError::StrandParseError(s)),
            },
        }
    }
}

impl From<Strand> for i8 {
    fn from(value: Strand) -> Self {
        match value {
            Strand::Forward => 1,
            Strand::Reverse => -1,
            Strand::Unknown => 0,
        }
    }
}

impl Display for Strand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let c = match self {
            Strand::Forward => '+',
            Strand::Reverse => '-',
            Strand::Unknown => '.',
        };
        write!(f, "{}", c)
    }
}

///
/// Feature struct, one member interval of a repeat family.
///
/// Coordinates are 0-based and half-open: `[start, end)`.
///
#[derive(Eq, PartialEq, Hash, Debug, Clone, Deserialize, Serialize)]
pub struct Feature {
    #[serde(rename = "C")]
    pub chr: String,
    #[serde(rename = "S")]
    pub start: u32,
    #[serde(rename = "E")]
    pub end: u32,
    #[serde(rename = "O", default)]
    pub strand: Strand,
}

impl Span for Feature {
    fn chrom(&self) -> &str {
        &self.chr
    }

    fn start(&self) -> u32 {
        self.start
    }

    fn end(&self) -> u32 {
        self.end
    }
}

impl Display for Feature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}-{}({})", self.chr, self.start, self.end, self.strand)
    }
}
