//! Line classifier: one forward pass over raw source text producing a
//! `SourceLine` record per line, with comment/string/paren state threaded
//! across lines as a small fold value.

/// Comment state of a line, captured for syntax-sensitive consumers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CommentState {
    #[default]
    None,
    /// The line starts inside a `#[[`-style block comment.
    InsideBlock,
    /// A line comment starts at this 1-based column.
    LineAt(usize),
}

/// String state at the start of a line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StringState {
    #[default]
    None,
    /// Inside a bracket string; `level` is the number of `=` signs in the
    /// opener, so the terminator is `]` + `=`*level + `]`.
    Bracket { level: usize },
    /// Inside a double-quoted argument continued from a previous line.
    Quoted,
}

/// One classified source line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceLine {
    /// 1-based line number.
    pub index: usize,
    /// Line content with the trailing newline (and `\r`) stripped.
    pub raw: String,
    /// `raw` with comment spans blanked to spaces; columns stay aligned.
    pub visible: String,
    pub has_trailing_whitespace: bool,
    pub has_tab: bool,
    pub comment: CommentState,
    pub string: StringState,
    pub depth_at_start: usize,
    pub depth_at_end: usize,
}

/// A structural problem found while scanning. Anomalies are surfaced as
/// `syntax` violations by the rule engine, never as fatal errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Anomaly {
    /// 1-based line number the anomaly is reported at.
    pub line: usize,
    pub kind: AnomalyKind,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnomalyKind {
    UnmatchedCloseParen,
    UnterminatedBlockComment,
    UnterminatedBracketString,
    UnterminatedQuote,
    UnterminatedCommand,
    InvalidPragma(String),
}

/// Classifier output for a whole file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClassifiedFile {
    pub lines: Vec<SourceLine>,
    pub anomalies: Vec<Anomaly>,
    pub had_carriage_return: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ScanMode {
    Normal,
    BlockComment { level: usize, opened_at: usize },
    BracketString { level: usize, opened_at: usize },
    Quoted { opened_at: usize },
}

/// Classify the full text of a file in one forward pass.
///
/// The final line counts even without a trailing newline; empty input yields
/// zero lines.
#[must_use]
pub fn classify(text: &str) -> ClassifiedFile {
    let mut file = ClassifiedFile::default();
    let mut mode = ScanMode::Normal;
    let mut depth = 0usize;

    for (i, record) in split_records(text).into_iter().enumerate() {
        let index = i + 1;
        let raw = match record.strip_suffix('\r') {
            Some(stripped) => {
                file.had_carriage_return = true;
                stripped
            }
            None => record,
        };
        let line = scan_line(index, raw, &mut mode, &mut depth, &mut file.anomalies);
        file.lines.push(line);
    }

    match mode {
        ScanMode::Normal => {}
        ScanMode::BlockComment { opened_at, .. } => file.anomalies.push(Anomaly {
            line: opened_at,
            kind: AnomalyKind::UnterminatedBlockComment,
        }),
        ScanMode::BracketString { opened_at, .. } => file.anomalies.push(Anomaly {
            line: opened_at,
            kind: AnomalyKind::UnterminatedBracketString,
        }),
        ScanMode::Quoted { opened_at } => file.anomalies.push(Anomaly {
            line: opened_at,
            kind: AnomalyKind::UnterminatedQuote,
        }),
    }

    file
}

fn split_records(text: &str) -> Vec<&str> {
    if text.is_empty() {
        return Vec::new();
    }
    let body = text.strip_suffix('\n').unwrap_or(text);
    body.split('\n').collect()
}

fn scan_line(
    index: usize,
    raw: &str,
    mode: &mut ScanMode,
    depth: &mut usize,
    anomalies: &mut Vec<Anomaly>,
) -> SourceLine {
    let chars: Vec<char> = raw.chars().collect();
    let mut mask = vec![false; chars.len()];
    let comment_at_start = matches!(mode, ScanMode::BlockComment { .. });
    let string_at_start = match *mode {
        ScanMode::BracketString { level, .. } => StringState::Bracket { level },
        ScanMode::Quoted { .. } => StringState::Quoted,
        _ => StringState::None,
    };
    let depth_at_start = *depth;
    let mut line_comment_col = None;

    let mut i = 0;
    while i < chars.len() {
        i = match *mode {
            ScanMode::BlockComment { level, .. } => {
                if let Some(len) = match_bracket_close(&chars, i, level) {
                    mask[i..i + len].fill(true);
                    *mode = ScanMode::Normal;
                    i + len
                } else {
                    mask[i] = true;
                    i + 1
                }
            }
            ScanMode::BracketString { level, .. } => {
                if let Some(len) = match_bracket_close(&chars, i, level) {
                    *mode = ScanMode::Normal;
                    i + len
                } else {
                    i + 1
                }
            }
            ScanMode::Quoted { .. } => {
                if chars[i] == '\\' && i + 1 < chars.len() {
                    i + 2
                } else {
                    if chars[i] == '"' {
                        *mode = ScanMode::Normal;
                    }
                    i + 1
                }
            }
            ScanMode::Normal => scan_normal(
                &chars,
                i,
                index,
                mode,
                depth,
                &mut mask,
                &mut line_comment_col,
                anomalies,
            ),
        };
    }

    let comment = if comment_at_start {
        CommentState::InsideBlock
    } else if let Some(column) = line_comment_col {
        CommentState::LineAt(column)
    } else {
        CommentState::None
    };

    SourceLine {
        index,
        raw: raw.to_string(),
        visible: chars
            .iter()
            .zip(&mask)
            .map(|(c, masked)| if *masked { ' ' } else { *c })
            .collect(),
        has_trailing_whitespace: chars.last().is_some_and(|c| c.is_whitespace()),
        has_tab: chars.contains(&'\t'),
        comment,
        string: string_at_start,
        depth_at_start,
        depth_at_end: *depth,
    }
}

#[allow(clippy::too_many_arguments)]
fn scan_normal(
    chars: &[char],
    i: usize,
    index: usize,
    mode: &mut ScanMode,
    depth: &mut usize,
    mask: &mut [bool],
    line_comment_col: &mut Option<usize>,
    anomalies: &mut Vec<Anomaly>,
) -> usize {
    match chars[i] {
        '#' => {
            // `#[[` / `#[=[` opens a block comment; a plain `#` eats the line.
            if let Some((len, level)) = match_bracket_open(chars, i + 1) {
                mask[i..=i + len].fill(true);
                *mode = ScanMode::BlockComment {
                    level,
                    opened_at: index,
                };
                i + 1 + len
            } else {
                *line_comment_col = Some(i + 1);
                mask[i..].fill(true);
                chars.len()
            }
        }
        '"' => {
            *mode = ScanMode::Quoted { opened_at: index };
            i + 1
        }
        '[' => {
            if let Some((len, level)) = match_bracket_open(chars, i) {
                *mode = ScanMode::BracketString {
                    level,
                    opened_at: index,
                };
                i + len
            } else {
                i + 1
            }
        }
        '(' => {
            *depth += 1;
            i + 1
        }
        ')' => {
            if *depth == 0 {
                anomalies.push(Anomaly {
                    line: index,
                    kind: AnomalyKind::UnmatchedCloseParen,
                });
            } else {
                *depth -= 1;
            }
            i + 1
        }
        _ => i + 1,
    }
}

/// Match a long-bracket opener `[` `=`*level `[` at `i`, returning the
/// consumed length and the level.
pub(super) fn match_bracket_open(chars: &[char], i: usize) -> Option<(usize, usize)> {
    if chars.get(i) != Some(&'[') {
        return None;
    }
    let mut j = i + 1;
    while chars.get(j) == Some(&'=') {
        j += 1;
    }
    if chars.get(j) == Some(&'[') {
        Some((j + 1 - i, j - i - 1))
    } else {
        None
    }
}

/// Match the closer `]` `=`*level `]` for an exact level at `i`.
pub(super) fn match_bracket_close(chars: &[char], i: usize, level: usize) -> Option<usize> {
    if chars.get(i) != Some(&']') {
        return None;
    }
    for k in 0..level {
        if chars.get(i + 1 + k) != Some(&'=') {
            return None;
        }
    }
    if chars.get(i + 1 + level) == Some(&']') {
        Some(level + 2)
    } else {
        None
    }
}

#[cfg(test)]
#[path = "line_tests.rs"]
mod tests;
