use super::atom::AtomRecord;
use super::frame::FrameRejection;

/// Tokens of an `ITEM: ATOMS` header that precede the column names.
const HEADER_PREFIX_TOKENS: usize = 2;

/// Column offsets of the fields the converter needs, resolved from one
/// frame's `ITEM: ATOMS` header.
///
/// Dumps may reorder or add columns between frames, so a layout is only
/// valid for the frame whose header produced it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnLayout {
    pub x: usize,
    pub y: usize,
    pub z: usize,
    pub atom_type: usize,
    pub id: Option<usize>,
}

impl ColumnLayout {
    pub fn from_header(header: &str) -> Result<Self, FrameRejection> {
        let columns: Vec<&str> = header
            .split_whitespace()
            .skip(HEADER_PREFIX_TOKENS)
            .collect();
        let find = |name: &str| columns.iter().rposition(|&col| col == name);

        let (x, y, z, atom_type) = (find("x"), find("y"), find("z"), find("type"));
        match (x, y, z, atom_type) {
            (Some(x), Some(y), Some(z), Some(atom_type)) => Ok(Self {
                x,
                y,
                z,
                atom_type,
                id: find("id"),
            }),
            _ => {
                let missing = [("x", x), ("y", y), ("z", z), ("type", atom_type)]
                    .into_iter()
                    .filter(|(_, offset)| offset.is_none())
                    .map(|(name, _)| name)
                    .collect();
                Err(FrameRejection::MissingColumns(missing))
            }
        }
    }

    #[inline]
    pub fn has_id(&self) -> bool {
        self.id.is_some()
    }

    /// Parses one data row; `None` when a field is missing or not numeric.
    pub fn parse_row(&self, row: &str) -> Option<AtomRecord> {
        let fields: Vec<&str> = row.split_whitespace().collect();
        let atom_type = fields.get(self.atom_type)?.parse::<i64>().ok()?;
        let id = match self.id {
            Some(col) => Some(fields.get(col)?.parse::<i64>().ok()?),
            None => None,
        };
        let coord = |col: usize| fields.get(col)?.parse::<f64>().ok();

        Some(AtomRecord {
            atom_type,
            id,
            position: [coord(self.x)?, coord(self.y)?, coord(self.z)?],
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolves_columns_in_any_order() {
        let layout = ColumnLayout::from_header("ITEM: ATOMS z type vx id x y").unwrap();
        assert_eq!(
            layout,
            ColumnLayout {
                x: 4,
                y: 5,
                z: 0,
                atom_type: 1,
                id: Some(3),
            }
        );
    }

    #[test]
    fn id_column_is_optional() {
        let layout = ColumnLayout::from_header("ITEM: ATOMS type x y z").unwrap();
        assert!(!layout.has_id());
        let record = layout.parse_row("2 1.0 2.0 3.0").unwrap();
        assert_eq!(record.id, None);
        assert_eq!(record.output_id(), 2);
    }

    #[test]
    fn reports_missing_required_columns() {
        let err = ColumnLayout::from_header("ITEM: ATOMS id x z").unwrap_err();
        assert_eq!(err, FrameRejection::MissingColumns(vec!["y", "type"]));
        assert_eq!(
            err.to_string(),
            "atom header lacks required column(s): y, type"
        );
    }

    #[test]
    fn parses_row_through_offsets() {
        let layout = ColumnLayout::from_header("ITEM: ATOMS id type x y z q").unwrap();
        let record = layout.parse_row("7 3 0.5 -1.25 4 0.1").unwrap();
        assert_eq!(record.atom_type, 3);
        assert_eq!(record.id, Some(7));
        assert_eq!(record.position, [0.5, -1.25, 4.0]);
    }

    #[test]
    fn rejects_short_or_non_numeric_rows() {
        let layout = ColumnLayout::from_header("ITEM: ATOMS id type x y z").unwrap();
        assert!(layout.parse_row("1 1 0.0 0.0").is_none());
        assert!(layout.parse_row("1 C 0.0 0.0 0.0").is_none());
        assert!(layout.parse_row("1 1 0.0 abc 0.0").is_none());
        assert!(layout.parse_row("1.5 1 0.0 0.0 0.0").is_none());
    }
}
