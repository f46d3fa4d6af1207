use anyhow::{Context, Result};

use trajslice::io::read_label_file;
use trajslice::{LabelMap, parse_assignment};

use crate::cli::ConvertOptions;

/// Builds the label map for a conversion.
///
/// Starts from the default type labels. Type labels from `--label-file` or
/// `--labels` replace the defaults entirely; command-line pairs are layered
/// over file entries.
pub fn build_label_map(opts: &ConvertOptions) -> Result<LabelMap> {
    let mut labels = LabelMap::with_default_types();
    let mut types_from_file = false;

    if let Some(path) = &opts.label_file {
        let from_file = read_label_file(path)
            .with_context(|| format!("Failed to load label file: {}", path.display()))?;
        types_from_file = from_file.type_count() > 0;
        if types_from_file {
            labels.clear_types();
        }
        labels.merge(from_file);
    }

    if let Some(pairs) = &opts.labels {
        let explicit = parse_pairs(pairs, "--labels")?;
        if !types_from_file {
            labels.clear_types();
        }
        for (atom_type, label) in explicit {
            labels.insert_type(atom_type, label);
        }
    }

    if let Some(pairs) = &opts.index_assignments {
        for (id, label) in parse_pairs(pairs, "--index-assignments")? {
            labels.insert_id(id, label);
        }
    }

    Ok(labels)
}

fn parse_pairs(pairs: &[String], flag: &str) -> Result<Vec<(i64, String)>> {
    pairs
        .iter()
        .map(|pair| parse_assignment(pair).with_context(|| format!("Invalid {flag} entry")))
        .collect()
}
