const TAB: &str = "    ";

/// Wrap text to at most `columns` characters per line.
///
/// Explicit newlines are kept, words are broken greedily at whitespace and a
/// word longer than a full line is split mid-word. Leading indentation of a
/// source line survives on its first wrapped line.
pub fn wrap_columns(text: &str, columns: usize) -> Vec<String> {
    let columns = columns.max(1);
    let normalized = text.replace("\r\n", "\n").replace('\t', TAB);
    normalized
        .split('\n')
        .flat_map(|paragraph| wrap_paragraph(paragraph, columns))
        .collect()
}

fn wrap_paragraph(paragraph: &str, columns: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();
    let mut current_len = 0;
    let mut pending_gap = 0;

    for (is_space, run) in runs(paragraph) {
        if is_space {
            pending_gap = run.chars().count();
            continue;
        }

        let word_len = run.chars().count();
        let mut gap = pending_gap;
        pending_gap = 0;

        if current_len > 0 && current_len + gap + word_len > columns {
            lines.push(std::mem::take(&mut current));
            current_len = 0;
            gap = 0;
        }

        for ch in std::iter::repeat_n(' ', gap).chain(run.chars()) {
            if current_len == columns {
                lines.push(std::mem::take(&mut current));
                current_len = 0;
            }
            current.push(ch);
            current_len += 1;
        }
    }

    if current_len > 0 || lines.is_empty() {
        lines.push(current);
    }
    lines
}

/// Split into alternating runs of whitespace and non-whitespace.
fn runs(s: &str) -> Vec<(bool, &str)> {
    let mut out = Vec::new();
    let mut start = 0;
    let mut state: Option<bool> = None;

    for (i, ch) in s.char_indices() {
        let is_space = ch.is_whitespace();
        match state {
            Some(prev) if prev == is_space => {}
            Some(prev) => {
                out.push((prev, &s[start..i]));
                start = i;
                state = Some(is_space);
            }
            None => state = Some(is_space),
        }
    }
    if let Some(prev) = state {
        out.push((prev, &s[start..]));
    }
    out
}
