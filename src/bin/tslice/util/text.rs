/// Greedy word wrap to at most `width` characters per line. Words longer
/// than `width` get a line of their own. Always returns at least one line.
pub fn wrap(text: &str, width: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();
    let mut current_len = 0;

    for word in text.split_whitespace() {
        let word_len = word.chars().count();
        if current_len > 0 && current_len + 1 + word_len > width {
            lines.push(std::mem::take(&mut current));
            current_len = 0;
        }
        if current_len > 0 {
            current.push(' ');
            current_len += 1;
        }
        current.push_str(word);
        current_len += word_len;
    }

    if current_len > 0 || lines.is_empty() {
        lines.push(current);
    }
    lines
}

/// Shortens `s` to `max_len` characters, marking the cut with `…`.
pub fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        return s.to_string();
    }
    match max_len {
        0 => String::new(),
        _ => {
            let mut out: String = s.chars().take(max_len - 1).collect();
            out.push('…');
            out
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wraps_on_word_boundaries() {
        assert_eq!(wrap("frames 3..=9 of 10", 12), vec!["frames 3..=9", "of 10"]);
        assert_eq!(wrap("short", 40), vec!["short"]);
    }

    #[test]
    fn overlong_word_stands_alone() {
        assert_eq!(
            wrap("see trajectory_chunk_0001.xyz now", 10),
            vec!["see", "trajectory_chunk_0001.xyz", "now"]
        );
    }

    #[test]
    fn empty_text_is_one_empty_line() {
        assert_eq!(wrap("   ", 10), vec![String::new()]);
    }

    #[test]
    fn truncates_by_characters() {
        assert_eq!(truncate("traj.xyz", 8), "traj.xyz");
        assert_eq!(truncate("trajectory.xyz", 6), "traje…");
        assert_eq!(truncate("Å×Å×Å", 3), "Å×…");
        assert_eq!(truncate("abc", 0), "");
    }
}
