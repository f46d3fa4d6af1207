use std::io::{self, Write};
use std::path::Path;

use trajslice::{ChunkReport, ConvertReport, Format, ResampleReport, SelectionWindow};

use crate::util::text::truncate;

const INDENT: &str = "      ";

const BOX_INNER_WIDTH: usize = 62;
const SAFE_TABLE_WIDTH: usize = BOX_INNER_WIDTH - INDENT.len();

pub fn print_input_info(path: &Path, format: Format, detected: bool) {
    let mut out = io::stderr().lock();
    let source = if detected { "detected" } else { "--format" };
    let rows = vec![
        ("Input", file_name(path)),
        ("Format", format!("{format} ({source})")),
    ];
    print_kv_table(&mut out, "Input", &rows);
}

pub fn print_convert_summary(report: &ConvertReport, output: &Path) {
    let mut out = io::stderr().lock();

    let mut rows = window_rows(report.total_frames, &report.window);
    rows.push(("Frames Written", report.frames_written.to_string()));
    if report.frames_rejected > 0 {
        rows.push(("Frames Skipped", report.frames_rejected.to_string()));
    }
    if report.atoms_dropped > 0 {
        rows.push(("Atoms Skipped", report.atoms_dropped.to_string()));
    }
    if report.identifier_fallback {
        rows.push(("Identifiers", "atom type (no id)".to_string()));
    }
    rows.push(("Output", file_name(output)));

    print_kv_table(&mut out, "Conversion Summary", &rows);
}

pub fn print_resample_summary(report: &ResampleReport, output: &Path) {
    let mut out = io::stderr().lock();

    let mut rows = window_rows(report.total_frames, &report.window);
    rows.push(("Frames Written", report.frames_written.to_string()));
    rows.push(("Output", file_name(output)));

    print_kv_table(&mut out, "Resample Summary", &rows);
}

pub fn print_chunk_summary(report: &ChunkReport) {
    let mut out = io::stderr().lock();

    let mut rows = window_rows(report.total_frames, &report.window);
    rows.push(("Frames Written", report.frames_written().to_string()));
    rows.push(("Chunks", report.chunks.len().to_string()));
    print_kv_table(&mut out, "Chunk Summary", &rows);

    let _ = writeln!(out);
    let files: Vec<_> = report
        .chunks
        .iter()
        .map(|c| (file_name(&c.path), c.frames.to_string()))
        .collect();
    let rows: Vec<_> = files.iter().map(|(k, v)| (k.as_str(), v.clone())).collect();
    print_kv_table(&mut out, "Chunk Files", &rows);
}

fn window_rows(total_frames: usize, window: &SelectionWindow) -> Vec<(&'static str, String)> {
    vec![
        ("Total Frames", total_frames.to_string()),
        (
            "Window",
            format!("{}..={}", window.start(), window.end()),
        ),
        ("Stride", window.stride().to_string()),
        ("Selected", window.selected_count().to_string()),
    ]
}

fn file_name(path: &Path) -> String {
    path.file_name()
        .unwrap_or(path.as_os_str())
        .to_string_lossy()
        .into_owned()
}

fn print_kv_table(out: &mut impl Write, title: &str, rows: &[(&str, String)]) {
    let key_w = 16usize;
    let sep_overhead = 6;
    let val_w = SAFE_TABLE_WIDTH.saturating_sub(key_w + sep_overhead);
    let k_line = "─".repeat(key_w + 2);
    let v_line = "─".repeat(val_w + 2);

    let _ = writeln!(
        out,
        "{INDENT}┌─ {} ─┐",
        truncate(title, SAFE_TABLE_WIDTH - 6)
    );
    let _ = writeln!(out, "{INDENT}┌{k_line}┬{v_line}┐");
    for (key, val) in rows {
        let _ = writeln!(
            out,
            "{INDENT}│ {:<key_w$} │ {:>val_w$} │",
            truncate(key, key_w),
            truncate(val, val_w),
        );
    }
    let _ = writeln!(out, "{INDENT}└{k_line}┴{v_line}┘");
}
