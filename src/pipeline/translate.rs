use crate::model::{
    atom::OutputAtom,
    frame::{ConvertedFrame, DumpFrame, FrameRejection},
    labels::LabelMap,
    lattice::BoxExtent,
    layout::ColumnLayout,
};
use std::collections::HashSet;

/// Turns dump frames into the fixed XYZ schema using one label map and an
/// optional type filter.
pub struct FrameTranslator<'a> {
    labels: &'a LabelMap,
    filter: Option<&'a HashSet<i64>>,
}

impl<'a> FrameTranslator<'a> {
    pub fn new(labels: &'a LabelMap, filter: Option<&'a HashSet<i64>>) -> Self {
        Self { labels, filter }
    }

    #[inline]
    fn keeps(&self, atom_type: i64) -> bool {
        self.filter.is_none_or(|allowed| allowed.contains(&atom_type))
    }

    pub fn translate(&self, frame: &DumpFrame) -> Result<ConvertedFrame, FrameRejection> {
        let sections = frame.sections()?;
        let layout = ColumnLayout::from_header(frame.atom_header(&sections))?;

        let lattice = frame
            .box_bound_lines(&sections)
            .and_then(BoxExtent::from_bound_lines);

        let mut atoms = Vec::new();
        let mut dropped_atoms = 0;
        for row in frame.atom_rows(&sections) {
            let Some(record) = layout.parse_row(row) else {
                dropped_atoms += 1;
                continue;
            };
            if !self.keeps(record.atom_type) {
                continue;
            }
            let element = self.labels.resolve(record.atom_type, record.id);
            atoms.push(OutputAtom::new(
                element,
                record.position,
                record.output_id(),
            ));
        }

        Ok(ConvertedFrame {
            timestep: frame.timestep().unwrap_or_default().to_string(),
            lattice,
            atoms,
            dropped_atoms,
            identifier_fallback: !layout.has_id(),
        })
    }
}
