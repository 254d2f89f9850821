/// Splits raw file text into lines.
///
/// Both `\r\n` and `\n` count as a single line break. Empty lines are kept
/// as empty strings, so `""` yields `[""]` and a trailing newline yields a
/// trailing empty line. A lone `\r` is not a line break.
pub fn split_lines(raw: &str) -> Vec<String> {
    raw.split('\n')
        .map(|line| line.strip_suffix('\r').unwrap_or(line).to_string())
        .collect()
}

/// Returns `true` if the line would not produce a translation request.
pub fn is_blank(line: &str) -> bool {
    line.trim().is_empty()
}
