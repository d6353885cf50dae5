//! Structural check for LaTeX source.
//!
//! Not a parser: it only tracks brace groups, `\begin`/`\end` pairs and
//! inline math toggles, skipping escaped characters and `%` comments. Enough
//! to tell whether a document is syntactically closed.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StructureError {
    #[error("line {line}: '}}' without a matching '{{'")]
    UnmatchedClose { line: usize },

    #[error("{count} brace group(s) never closed")]
    UnclosedGroup { count: usize },

    #[error("line {line}: \\end{{{found}}} closes \\begin{{{expected}}}")]
    MismatchedEnvironment {
        expected: String,
        found: String,
        line: usize,
    },

    #[error("line {line}: \\end{{{env}}} without a matching \\begin")]
    UnexpectedEnd { env: String, line: usize },

    #[error("\\begin{{{0}}} never closed")]
    UnclosedEnvironment(String),

    #[error("inline math opened with '$' never closed")]
    UnclosedMath,
}

/// Checks that every opening construct in `source` has a matching close.
pub fn check_balanced(source: &str) -> Result<(), StructureError> {
    let chars: Vec<char> = source.chars().collect();
    let mut depth = 0usize;
    let mut environments: Vec<String> = Vec::new();
    let mut in_math = false;
    let mut line = 1usize;
    let mut i = 0usize;

    while i < chars.len() {
        match chars[i] {
            '\n' => {
                line += 1;
                i += 1;
            }
            '%' => {
                while i < chars.len() && chars[i] != '\n' {
                    i += 1;
                }
            }
            '$' => {
                in_math = !in_math;
                i += 1;
            }
            '{' => {
                depth += 1;
                i += 1;
            }
            '}' => {
                if depth == 0 {
                    return Err(StructureError::UnmatchedClose { line });
                }
                depth -= 1;
                i += 1;
            }
            '\\' => {
                let start = i + 1;
                let mut end = start;
                while end < chars.len() && chars[end].is_ascii_alphabetic() {
                    end += 1;
                }
                if end == start {
                    // Control symbol such as \{ or \\; a newline still counts.
                    if chars.get(start) == Some(&'\n') {
                        line += 1;
                    }
                    i = start + 1;
                    continue;
                }

                let command: String = chars[start..end].iter().collect();
                i = end;
                if command != "begin" && command != "end" {
                    continue;
                }

                let Some((env, next)) = read_group(&chars, i) else {
                    continue;
                };
                i = next;
                if command == "begin" {
                    environments.push(env);
                } else {
                    match environments.pop() {
                        Some(open) if open == env => {}
                        Some(open) => {
                            return Err(StructureError::MismatchedEnvironment {
                                expected: open,
                                found: env,
                                line,
                            })
                        }
                        None => return Err(StructureError::UnexpectedEnd { env, line }),
                    }
                }
            }
            _ => i += 1,
        }
    }

    if let Some(open) = environments.pop() {
        return Err(StructureError::UnclosedEnvironment(open));
    }
    if depth > 0 {
        return Err(StructureError::UnclosedGroup { count: depth });
    }
    if in_math {
        return Err(StructureError::UnclosedMath);
    }
    Ok(())
}

/// Reads a `{name}` argument starting at `at`. Returns the name and the index
/// just past the closing brace.
fn read_group(chars: &[char], at: usize) -> Option<(String, usize)> {
    if chars.get(at) != Some(&'{') {
        return None;
    }
    let close = chars[at + 1..].iter().position(|&c| c == '}')? + at + 1;
    let name: String = chars[at + 1..close].iter().collect();
    if name.contains('{') || name.contains('\n') {
        return None;
    }
    Some((name.trim().to_string(), close + 1))
}
