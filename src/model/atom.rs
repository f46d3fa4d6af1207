/// Fields pulled out of one dump atom row through a
/// [`ColumnLayout`](super::layout::ColumnLayout).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AtomRecord {
    pub atom_type: i64,
    pub id: Option<i64>,
    pub position: [f64; 3],
}

impl AtomRecord {
    /// Identifier written to the output; falls back to the atom type when the
    /// source has no `id` column.
    #[inline]
    pub fn output_id(&self) -> i64 {
        self.id.unwrap_or(self.atom_type)
    }
}

/// One atom line of a converted XYZ frame.
#[derive(Debug, Clone, PartialEq)]
pub struct OutputAtom {
    pub element: String,
    pub position: [f64; 3],
    pub id: i64,
}

impl OutputAtom {
    pub fn new(element: impl Into<String>, position: [f64; 3], id: i64) -> Self {
        Self {
            element: element.into(),
            position,
            id,
        }
    }
}
