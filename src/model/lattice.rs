/// Axis-aligned simulation box edge lengths derived from a dump's
/// `ITEM: BOX BOUNDS` block.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoxExtent {
    pub lengths: [f64; 3],
}

impl BoxExtent {
    pub fn new(lengths: [f64; 3]) -> Self {
        Self { lengths }
    }

    /// Builds the extent from the three bound lines (`lo hi [tilt]`).
    ///
    /// Tilt factors are ignored. Returns `None` if any line lacks two
    /// numeric bounds.
    pub fn from_bound_lines(lines: [&str; 3]) -> Option<Self> {
        let mut lengths = [0.0; 3];
        for (length, line) in lengths.iter_mut().zip(lines) {
            let mut fields = line.split_whitespace();
            let lo = fields.next()?.parse::<f64>().ok()?;
            let hi = fields.next()?.parse::<f64>().ok()?;
            *length = hi - lo;
        }
        Some(Self { lengths })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn computes_edge_lengths() {
        let extent = BoxExtent::from_bound_lines(["0.0 10.0", "-2.5 2.5", "1 4 0.5"]).unwrap();
        assert_eq!(extent.lengths, [10.0, 5.0, 3.0]);
    }

    #[test]
    fn malformed_bounds_give_none() {
        assert!(BoxExtent::from_bound_lines(["0.0 10.0", "0.0", "0 1"]).is_none());
        assert!(BoxExtent::from_bound_lines(["0.0 10.0", "a b", "0 1"]).is_none());
        assert!(BoxExtent::from_bound_lines(["0 1", "0 1", "ITEM: ATOMS id type x y z"]).is_none());
    }
}
