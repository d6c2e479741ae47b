//! Command tokenizer: consumes classified lines and recognizes top-level
//! command invocations `name(args...)`, splitting each body into typed
//! argument tokens while skipping quotes, bracket strings and nested parens.

use super::line::{
    match_bracket_close, match_bracket_open, Anomaly, AnomalyKind, SourceLine, StringState,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    Identifier,
    QuotedString,
    BracketString,
    VariableRef,
    Punctuation,
}

/// One argument token. Owned exclusively by its `Command`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    /// Token text; quoted and bracket strings carry their content without
    /// the delimiters, escapes left as written.
    pub text: String,
    pub kind: TokenKind,
    /// 1-based line of the token's first character.
    pub line: usize,
    /// 1-based column of the token's first character.
    pub column: usize,
}

/// A command invocation, possibly spanning multiple physical lines.
/// Immutable once built; produced in file order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Command {
    /// Name as written in the source.
    pub name: String,
    /// Lowercase copy used for matching known command names.
    pub name_lower: String,
    pub arguments: Vec<Token>,
    pub start_line: usize,
    pub end_line: usize,
    /// Whitespace between the name and its open paren.
    pub spaces_before_paren: usize,
    /// Whitespace directly after the open paren, on the starting line.
    pub spaces_after_open: usize,
    /// Whitespace directly before the matching close paren; when the close
    /// paren sits on a later line, that line's leading indent is subtracted.
    pub spaces_before_close: usize,
}

struct CommandStart {
    name: String,
    spaces_before_paren: usize,
    /// Char index just past the open paren.
    body_start: usize,
}

struct BodyScan {
    tokens: Vec<Token>,
    end_li: usize,
    close_ci: usize,
}

/// Recognize every top-level command in the classified lines.
///
/// A command whose close paren is never found stops recognition for the rest
/// of the file and records an `UnterminatedCommand` anomaly; the classified
/// lines stay valid for the line-only checks.
#[must_use]
pub fn tokenize(lines: &[SourceLine]) -> (Vec<Command>, Vec<Anomaly>) {
    let vis: Vec<Vec<char>> = lines.iter().map(|l| l.visible.chars().collect()).collect();
    let mut commands = Vec::new();
    let mut anomalies = Vec::new();

    let mut li = 0;
    while li < lines.len() {
        // Lines continuing a multi-line string never start a command.
        if lines[li].string != StringState::None {
            li += 1;
            continue;
        }
        let Some(start) = match_command_start(&vis[li]) else {
            li += 1;
            continue;
        };
        let Some(body) = consume_body(lines, &vis, li, start.body_start) else {
            anomalies.push(Anomaly {
                line: lines[li].index,
                kind: AnomalyKind::UnterminatedCommand,
            });
            break;
        };
        let end_li = body.end_li;
        commands.push(make_command(lines, &vis, li, start, body));
        li = end_li + 1;
    }

    (commands, anomalies)
}

/// Match `optional-ws identifier optional-ws '('` at the start of a line.
fn match_command_start(chars: &[char]) -> Option<CommandStart> {
    let mut i = 0;
    while i < chars.len() && chars[i].is_whitespace() {
        i += 1;
    }
    let name_start = i;
    while i < chars.len() && (chars[i].is_alphanumeric() || chars[i] == '_') {
        i += 1;
    }
    if i == name_start {
        return None;
    }
    let name_end = i;
    while i < chars.len() && chars[i].is_whitespace() {
        i += 1;
    }
    if chars.get(i) != Some(&'(') {
        return None;
    }
    Some(CommandStart {
        name: chars[name_start..name_end].iter().collect(),
        spaces_before_paren: i - name_end,
        body_start: i + 1,
    })
}

fn consume_body(
    lines: &[SourceLine],
    vis: &[Vec<char>],
    start_li: usize,
    start_ci: usize,
) -> Option<BodyScan> {
    let mut depth = 1usize;
    let mut tokens = Vec::new();
    let mut pending = PendingToken::default();
    let mut li = start_li;
    let mut ci = start_ci;

    loop {
        if li >= vis.len() {
            return None;
        }
        if ci >= vis[li].len() {
            pending.flush(&mut tokens);
            li += 1;
            ci = 0;
            continue;
        }
        let c = vis[li][ci];
        if c.is_whitespace() {
            pending.flush(&mut tokens);
            ci += 1;
            continue;
        }
        match c {
            '(' => {
                pending.flush(&mut tokens);
                tokens.push(punct(lines, li, ci, "("));
                depth += 1;
                ci += 1;
            }
            ')' => {
                pending.flush(&mut tokens);
                depth -= 1;
                if depth == 0 {
                    return Some(BodyScan {
                        tokens,
                        end_li: li,
                        close_ci: ci,
                    });
                }
                tokens.push(punct(lines, li, ci, ")"));
                ci += 1;
            }
            '"' => {
                pending.flush(&mut tokens);
                let (token, nli, nci) = scan_quoted(lines, vis, li, ci)?;
                tokens.push(token);
                li = nli;
                ci = nci;
            }
            '[' => {
                if let Some((open_len, level)) = match_bracket_open(&vis[li], ci) {
                    pending.flush(&mut tokens);
                    let (token, nli, nci) = scan_bracket(lines, vis, li, ci, open_len, level)?;
                    tokens.push(token);
                    li = nli;
                    ci = nci;
                } else {
                    pending.push(lines, li, ci, c);
                    ci += 1;
                }
            }
            _ => {
                pending.push(lines, li, ci, c);
                ci += 1;
            }
        }
    }
}

#[derive(Default)]
struct PendingToken {
    text: String,
    line: usize,
    column: usize,
}

impl PendingToken {
    fn push(&mut self, lines: &[SourceLine], li: usize, ci: usize, c: char) {
        if self.text.is_empty() {
            self.line = lines[li].index;
            self.column = ci + 1;
        }
        self.text.push(c);
    }

    fn flush(&mut self, tokens: &mut Vec<Token>) {
        if self.text.is_empty() {
            return;
        }
        let kind = if self.text.starts_with("${") {
            TokenKind::VariableRef
        } else {
            TokenKind::Identifier
        };
        tokens.push(Token {
            text: std::mem::take(&mut self.text),
            kind,
            line: self.line,
            column: self.column,
        });
    }
}

fn punct(lines: &[SourceLine], li: usize, ci: usize, text: &str) -> Token {
    Token {
        text: text.to_string(),
        kind: TokenKind::Punctuation,
        line: lines[li].index,
        column: ci + 1,
    }
}

/// Scan a double-quoted string from the opening quote, handling `\"` and
/// `\\` escapes, possibly across lines. Returns the token and the position
/// just past the closing quote, or `None` at end of file.
fn scan_quoted(
    lines: &[SourceLine],
    vis: &[Vec<char>],
    start_li: usize,
    start_ci: usize,
) -> Option<(Token, usize, usize)> {
    let mut text = String::new();
    let mut li = start_li;
    let mut ci = start_ci + 1;

    loop {
        if li >= vis.len() {
            return None;
        }
        let line = &vis[li];
        if ci >= line.len() {
            li += 1;
            ci = 0;
            text.push('\n');
            continue;
        }
        let c = line[ci];
        if c == '\\' && ci + 1 < line.len() {
            text.push(c);
            text.push(line[ci + 1]);
            ci += 2;
            continue;
        }
        if c == '"' {
            let token = Token {
                text,
                kind: TokenKind::QuotedString,
                line: lines[start_li].index,
                column: start_ci + 1,
            };
            return Some((token, li, ci + 1));
        }
        text.push(c);
        ci += 1;
    }
}

/// Scan a bracket string from its opener, possibly across lines. Returns the
/// token and the position just past the closer, or `None` at end of file.
fn scan_bracket(
    lines: &[SourceLine],
    vis: &[Vec<char>],
    start_li: usize,
    start_ci: usize,
    open_len: usize,
    level: usize,
) -> Option<(Token, usize, usize)> {
    let mut text = String::new();
    let mut li = start_li;
    let mut ci = start_ci + open_len;

    loop {
        if li >= vis.len() {
            return None;
        }
        let line = &vis[li];
        if ci >= line.len() {
            li += 1;
            ci = 0;
            text.push('\n');
            continue;
        }
        if let Some(close_len) = match_bracket_close(line, ci, level) {
            let token = Token {
                text,
                kind: TokenKind::BracketString,
                line: lines[start_li].index,
                column: start_ci + 1,
            };
            return Some((token, li, ci + close_len));
        }
        text.push(line[ci]);
        ci += 1;
    }
}

fn make_command(
    lines: &[SourceLine],
    vis: &[Vec<char>],
    start_li: usize,
    start: CommandStart,
    body: BodyScan,
) -> Command {
    let start_line = &vis[start_li];
    let spaces_after_open = start_line[start.body_start..]
        .iter()
        .take_while(|c| c.is_whitespace())
        .count();

    let close_line = &vis[body.end_li];
    let mut before = body.close_ci;
    while before > 0 && close_line[before - 1].is_whitespace() {
        before -= 1;
    }
    let mut spaces_before_close = body.close_ci - before;
    if body.end_li != start_li {
        let indent = close_line.iter().take_while(|&&c| c == ' ').count();
        if spaces_before_close >= indent {
            spaces_before_close -= indent;
        }
    }

    Command {
        name_lower: start.name.to_lowercase(),
        name: start.name,
        arguments: body.tokens,
        start_line: lines[start_li].index,
        end_line: lines[body.end_li].index,
        spaces_before_paren: start.spaces_before_paren,
        spaces_after_open,
        spaces_before_close,
    }
}

#[cfg(test)]
#[path = "command_tests.rs"]
mod tests;
