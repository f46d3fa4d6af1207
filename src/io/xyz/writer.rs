use crate::model::frame::{ConvertedFrame, XyzFrame};
use std::io::{self, Write};

pub const PROPERTIES: &str = "Properties=species:S:1:pos:R:3:id:I:1";

/// Copies a frame exactly as it was read.
pub fn write_frame<W: Write>(writer: &mut W, frame: &XyzFrame) -> io::Result<()> {
    writer.write_all(frame.count_line.as_bytes())?;
    writer.write_all(frame.comment.as_bytes())?;
    for line in &frame.atoms {
        writer.write_all(line.as_bytes())?;
    }
    Ok(())
}

/// Writes a converted dump frame as extended XYZ:
/// count line, `Timestep=… [Lattice="…"] Properties=…`, then
/// `element x y z id` per atom.
pub fn write_converted<W: Write>(writer: &mut W, frame: &ConvertedFrame) -> io::Result<()> {
    writeln!(writer, "{}", frame.atoms.len())?;

    write!(writer, "Timestep={}", frame.timestep)?;
    if let Some(extent) = &frame.lattice {
        let [a, b, c] = extent.lengths;
        write!(
            writer,
            " Lattice=\"{} 0.0 0.0 0.0 {} 0.0 0.0 0.0 {}\"",
            real(a),
            real(b),
            real(c)
        )?;
    }
    writeln!(writer, " {PROPERTIES}")?;

    for atom in &frame.atoms {
        let [x, y, z] = atom.position;
        writeln!(
            writer,
            "{} {} {} {} {}",
            atom.element,
            real(x),
            real(y),
            real(z),
            atom.id
        )?;
    }
    Ok(())
}

/// Shortest round-trip text for `value`, always with a fractional part or
/// exponent (`10.0`, `0.25`, `1e-07`, `1e+16`).
///
/// Exponents carry a sign and at least two digits; non-finite values are
/// written `nan`, `inf` and `-inf`.
pub fn real(value: f64) -> String {
    if value.is_nan() {
        return "nan".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "inf" } else { "-inf" }.to_string();
    }

    let text = format!("{value:?}");
    let Some((mantissa, exponent)) = text.split_once('e') else {
        return text;
    };
    let (sign, digits) = match exponent.strip_prefix('-') {
        Some(digits) => ('-', digits),
        None => ('+', exponent),
    };
    format!("{mantissa}e{sign}{digits:0>2}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::io::xyz::reader::XyzFrames;
    use crate::model::atom::OutputAtom;
    use crate::model::lattice::BoxExtent;
    use std::io::Cursor;

    fn converted(lattice: Option<BoxExtent>) -> ConvertedFrame {
        ConvertedFrame {
            timestep: "200".to_string(),
            lattice,
            atoms: vec![
                OutputAtom::new("C", [0.0, 1.5, -2.25], 1),
                OutputAtom::new("Xe", [10.0, 0.0, 3.0], 2),
            ],
            dropped_atoms: 0,
            identifier_fallback: false,
        }
    }

    fn render(frame: &ConvertedFrame) -> String {
        let mut buf = Vec::new();
        write_converted(&mut buf, frame).expect("write frame");
        String::from_utf8(buf).expect("utf8 output")
    }

    #[test]
    fn writes_lattice_when_box_is_known() {
        let text = render(&converted(Some(BoxExtent::new([10.0, 20.0, 30.5]))));
        assert_eq!(
            text,
            "2\n\
             Timestep=200 Lattice=\"10.0 0.0 0.0 0.0 20.0 0.0 0.0 0.0 30.5\" Properties=species:S:1:pos:R:3:id:I:1\n\
             C 0.0 1.5 -2.25 1\n\
             Xe 10.0 0.0 3.0 2\n"
        );
    }

    #[test]
    fn omits_lattice_without_box() {
        let text = render(&converted(None));
        let comment = text.lines().nth(1).unwrap();
        assert_eq!(comment, "Timestep=200 Properties=species:S:1:pos:R:3:id:I:1");
    }

    #[test]
    fn converted_output_reads_back_as_xyz() {
        let text = render(&converted(None));
        let frames: Vec<_> = XyzFrames::new(Cursor::new(text))
            .collect::<Result<_, _>>()
            .unwrap();
        assert_eq!(frames.len(), 1);
        assert_eq!(frames[0].atoms[1], "Xe 10.0 0.0 3.0 2\n");
    }

    #[test]
    fn copies_frames_byte_for_byte() {
        let frame = XyzFrame {
            count_line: " 1 \r\n".to_string(),
            comment: "anything goes\r\n".to_string(),
            atoms: vec!["H 0 0 0".to_string()],
        };
        let mut buf = Vec::new();
        write_frame(&mut buf, &frame).unwrap();
        assert_eq!(buf, b" 1 \r\nanything goes\r\nH 0 0 0");
    }

    #[test]
    fn real_formatting() {
        assert_eq!(real(10.0), "10.0");
        assert_eq!(real(0.1), "0.1");
        assert_eq!(real(-3.75), "-3.75");
        assert_eq!(real(1e15), "1000000000000000.0");
        assert_eq!(real(0.0001), "0.0001");
    }

    #[test]
    fn real_exponent_and_non_finite_forms() {
        assert_eq!(real(0.00001), "1e-05");
        assert_eq!(real(-1.5e-6), "-1.5e-06");
        assert_eq!(real(1e16), "1e+16");
        assert_eq!(real(2.5e-300), "2.5e-300");
        assert_eq!(real(f64::NAN), "nan");
        assert_eq!(real(f64::INFINITY), "inf");
        assert_eq!(real(f64::NEG_INFINITY), "-inf");
    }
}
