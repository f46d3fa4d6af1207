use super::atom::OutputAtom;
use super::lattice::BoxExtent;
use thiserror::Error;

pub const TIMESTEP_MARKER: &str = "ITEM: TIMESTEP";
pub const ATOM_COUNT_MARKER: &str = "ITEM: NUMBER OF ATOMS";
pub const BOX_BOUNDS_MARKER: &str = "ITEM: BOX BOUNDS";
pub const ATOMS_MARKER: &str = "ITEM: ATOMS";

const ITEM_PREFIX: &str = "ITEM:";

/// Reason a dump frame produced no output.
///
/// Rejections are frame-local: the pipeline counts and logs them, then moves
/// on to the next frame.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FrameRejection {
    #[error("frame has no '{0}' section")]
    MissingSection(&'static str),

    #[error("atom header lacks required column(s): {}", .0.join(", "))]
    MissingColumns(Vec<&'static str>),
}

/// Line offsets of the sections inside a [`DumpFrame`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DumpSections {
    pub atom_count: usize,
    pub box_bounds: Option<usize>,
    pub atoms: usize,
}

/// One LAMMPS dump snapshot as trimmed text lines, starting at its
/// `ITEM: TIMESTEP` marker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DumpFrame {
    lines: Vec<String>,
}

impl DumpFrame {
    pub fn new(lines: Vec<String>) -> Self {
        Self { lines }
    }

    #[inline]
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// The value line directly after the timestep marker, if there is one.
    pub fn timestep(&self) -> Option<&str> {
        self.lines
            .get(1)
            .map(String::as_str)
            .filter(|line| !line.starts_with(ITEM_PREFIX))
    }

    /// Locates the atom-count, box-bounds and atoms sections.
    ///
    /// Scanning stops at the first `ITEM: ATOMS` header; everything after it
    /// is atom data.
    pub fn sections(&self) -> Result<DumpSections, FrameRejection> {
        let mut atom_count = None;
        let mut box_bounds = None;

        for (idx, line) in self.lines.iter().enumerate().skip(1) {
            if line.starts_with(ATOM_COUNT_MARKER) {
                atom_count = Some(idx);
            } else if line.starts_with(BOX_BOUNDS_MARKER) {
                box_bounds = Some(idx);
            } else if line.starts_with(ATOMS_MARKER) {
                let atom_count =
                    atom_count.ok_or(FrameRejection::MissingSection(ATOM_COUNT_MARKER))?;
                return Ok(DumpSections {
                    atom_count,
                    box_bounds,
                    atoms: idx,
                });
            }
        }

        Err(FrameRejection::MissingSection(match atom_count {
            None => ATOM_COUNT_MARKER,
            Some(_) => ATOMS_MARKER,
        }))
    }

    pub fn atom_header(&self, sections: &DumpSections) -> &str {
        &self.lines[sections.atoms]
    }

    /// The three lines following the box-bounds marker, when all are present.
    pub fn box_bound_lines(&self, sections: &DumpSections) -> Option<[&str; 3]> {
        let start = sections.box_bounds? + 1;
        match self.lines.get(start..start + 3)? {
            [x, y, z] => Some([x.as_str(), y.as_str(), z.as_str()]),
            _ => None,
        }
    }

    /// Atom data rows, skipping blank lines and stray `ITEM:` headers.
    pub fn atom_rows<'a>(&'a self, sections: &DumpSections) -> impl Iterator<Item = &'a str> {
        self.lines[sections.atoms + 1..]
            .iter()
            .map(String::as_str)
            .filter(|line| !line.is_empty() && !line.starts_with(ITEM_PREFIX))
    }
}

/// One frame of an XYZ trajectory, kept verbatim (line terminators
/// included) so it can be copied byte-for-byte.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct XyzFrame {
    pub count_line: String,
    pub comment: String,
    pub atoms: Vec<String>,
}

impl XyzFrame {
    #[inline]
    pub fn atom_count(&self) -> usize {
        self.atoms.len()
    }
}

/// A dump frame translated into the fixed XYZ output schema.
#[derive(Debug, Clone, PartialEq)]
pub struct ConvertedFrame {
    pub timestep: String,
    pub lattice: Option<BoxExtent>,
    pub atoms: Vec<OutputAtom>,
    /// Rows skipped because they were short or non-numeric.
    pub dropped_atoms: usize,
    /// Set when the atom header had no `id` column.
    pub identifier_fallback: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn frame(text: &str) -> DumpFrame {
        DumpFrame::new(text.lines().map(|l| l.trim().to_string()).collect())
    }

    #[test]
    fn locates_all_sections() {
        let f = frame(
            "ITEM: TIMESTEP\n100\nITEM: NUMBER OF ATOMS\n1\nITEM: BOX BOUNDS pp pp pp\n0 1\n0 2\n0 3\nITEM: ATOMS id type x y z\n1 1 0 0 0",
        );
        let sections = f.sections().unwrap();
        assert_eq!(sections.atom_count, 2);
        assert_eq!(sections.box_bounds, Some(4));
        assert_eq!(sections.atoms, 8);
        assert_eq!(f.timestep(), Some("100"));
        assert_eq!(f.box_bound_lines(&sections), Some(["0 1", "0 2", "0 3"]));
        assert_eq!(f.atom_rows(&sections).collect::<Vec<_>>(), vec!["1 1 0 0 0"]);
    }

    #[test]
    fn rejects_frame_without_atoms_section() {
        let f = frame("ITEM: TIMESTEP\n0\nITEM: NUMBER OF ATOMS\n3");
        assert_eq!(
            f.sections().unwrap_err(),
            FrameRejection::MissingSection(ATOMS_MARKER)
        );
    }

    #[test]
    fn rejects_frame_without_atom_count() {
        let f = frame("ITEM: TIMESTEP\n0\nITEM: ATOMS id type x y z\n1 1 0 0 0");
        assert_eq!(
            f.sections().unwrap_err(),
            FrameRejection::MissingSection(ATOM_COUNT_MARKER)
        );
    }

    #[test]
    fn missing_timestep_value_is_none() {
        let f = frame("ITEM: TIMESTEP\nITEM: NUMBER OF ATOMS\n0\nITEM: ATOMS type x y z");
        assert_eq!(f.timestep(), None);
        assert!(f.sections().is_ok());
    }

    #[test]
    fn truncated_box_block_yields_no_bound_lines() {
        let f = frame("ITEM: TIMESTEP\n0\nITEM: NUMBER OF ATOMS\n0\nITEM: BOX BOUNDS pp pp pp\n0 1");
        let sections = DumpSections {
            atom_count: 2,
            box_bounds: Some(4),
            atoms: 5,
        };
        assert_eq!(f.box_bound_lines(&sections), None);
    }

    #[test]
    fn atom_rows_skip_blank_and_item_lines() {
        let f = frame("ITEM: TIMESTEP\n0\nITEM: NUMBER OF ATOMS\n2\nITEM: ATOMS type x y z\n1 0 0 0\n\nITEM: EXTRA\n2 1 1 1");
        let sections = f.sections().unwrap();
        assert_eq!(
            f.atom_rows(&sections).collect::<Vec<_>>(),
            vec!["1 0 0 0", "2 1 1 1"]
        );
    }
}
