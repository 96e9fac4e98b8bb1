//! Docstring normalization utilities.

const TAB_WIDTH: usize = 8;

/// Normalizes line endings, expands tabs and removes the common indentation.
///
/// The first line is stripped on its own, because documentation strings
/// usually start right after the opening delimiter while the following
/// lines carry the source indentation. The smallest indentation of the
/// remaining non-blank lines is then removed from each of them, so relative
/// indentation (entry vs. continuation) survives. Blank lines come out
/// empty.
pub fn normalize_docstring(raw: &str) -> Vec<String> {
    let replaced = raw.replace("\r\n", "\n").replace('\r', "\n");
    let lines: Vec<String> = replaced
        .lines()
        .map(|line| expand_tabs(line).trim_end().to_string())
        .collect();

    let indent = lines
        .iter()
        .skip(1)
        .filter(|line| !line.is_empty())
        .map(|line| indent_width(line))
        .min()
        .unwrap_or(0);

    lines
        .into_iter()
        .enumerate()
        .map(|(idx, line)| {
            if idx == 0 {
                line.trim_start().to_string()
            } else if line.is_empty() {
                line
            } else {
                line[indent..].to_string()
            }
        })
        .collect()
}

/// Number of leading spaces.
pub fn indent_width(line: &str) -> usize {
    line.len() - line.trim_start_matches(' ').len()
}

/// Removes the common indentation of non-blank lines.
pub fn dedent(lines: &[String]) -> Vec<String> {
    let indent = lines
        .iter()
        .filter(|line| !line.trim().is_empty())
        .map(|line| indent_width(line))
        .min()
        .unwrap_or(0);

    lines
        .iter()
        .map(|line| {
            if line.trim().is_empty() {
                String::new()
            } else {
                line[indent..].to_string()
            }
        })
        .collect()
}

/// Drops leading/trailing blank lines and collapses blank runs to one line.
pub fn collapse_blank_lines(lines: &[String]) -> String {
    let mut out: Vec<&str> = Vec::new();
    for line in lines {
        let blank = line.trim().is_empty();
        if blank && out.last().is_none_or(|prev| prev.is_empty()) {
            continue;
        }
        out.push(if blank { "" } else { line.as_str() });
    }
    while out.last().is_some_and(|line| line.is_empty()) {
        out.pop();
    }
    out.join("\n")
}

fn expand_tabs(line: &str) -> String {
    if !line.contains('\t') {
        return line.to_string();
    }
    let mut out = String::with_capacity(line.len() + TAB_WIDTH);
    let mut column = 0;
    for ch in line.chars() {
        if ch == '\t' {
            let pad = TAB_WIDTH - column % TAB_WIDTH;
            out.extend(std::iter::repeat_n(' ', pad));
            column += pad;
        } else {
            out.push(ch);
            column += 1;
        }
    }
    out
}
