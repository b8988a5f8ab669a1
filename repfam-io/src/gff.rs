use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use repfam_core::models::{Feature, FamilySet};
use repfam_graph::{FamilyLabel, Identities};

use crate::error::Result;

pub const GFF_SOURCE: &str = "repfam";
pub const GFF_FEATURE: &str = "repeat";

///
/// Format one member feature as a GFF line, without the trailing newline.
///
/// Coordinates are shifted to GFF's 1-based closed convention. Score and frame
/// are always empty. The cluster and clique attributes are only present when
/// the family was grouped with others.
///
pub fn gff_line(feature: &Feature, label: &FamilyLabel) -> String {
    let mut attributes = format!("Family {}", label.family);
    if let Some(cluster) = label.cluster {
        attributes.push_str(&format!("; Cluster {}", cluster));
        if let Some(clique) = &label.clique {
            attributes.push_str(&format!("; Clique {}", clique));
        }
    }

    format!(
        "{}\t{}\t{}\t{}\t{}\t.\t{}\t.\t{}",
        feature.chr,
        GFF_SOURCE,
        GFF_FEATURE,
        feature.start as u64 + 1,
        feature.end,
        feature.strand,
        attributes
    )
}

pub trait GffWrite {
    ///
    /// Write annotated members as GFF to any writer.
    ///
    /// # Arguments
    /// - writer: where the lines go
    /// - identities: cluster and clique identities of the families
    fn write_gff_to<W: Write>(&self, writer: W, identities: &Identities) -> Result<()>;

    ///
    /// Write annotated members to disk as a GFF file
    ///
    /// # Arguments
    /// - path: the path to the file to dump to
    /// - identities: cluster and clique identities of the families
    fn write_gff<T: AsRef<Path>>(&self, path: T, identities: &Identities) -> Result<()>;
}

impl GffWrite for FamilySet {
    fn write_gff_to<W: Write>(&self, mut writer: W, identities: &Identities) -> Result<()> {
        for family in &self.families {
            let label = identities.label(family.id);
            for member in &family.members {
                writeln!(writer, "{}", gff_line(member, &label))?;
            }
        }
        writer.flush()?;
        Ok(())
    }

    fn write_gff<T: AsRef<Path>>(&self, path: T, identities: &Identities) -> Result<()> {
        let path = path.as_ref();

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let file = File::create(path)?;
        self.write_gff_to(BufWriter::new(file), identities)
    }
}
