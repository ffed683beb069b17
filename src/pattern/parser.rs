use crate::pattern::{PatternError, PatternResult, PatternSegment};

/// Parses a path pattern into an ordered segment sequence.
///
/// Two parameter spellings are accepted: `{name}` / `{name:regex}` anywhere,
/// and `:name` / `:name(regex)` at a segment start. Everything else is
/// literal text. Pure function; the caller decides what to do with the
/// segments.
#[tracing::instrument(level = "trace", fields(pattern = %pattern))]
pub fn parse_pattern(pattern: &str) -> PatternResult<Vec<PatternSegment>> {
    let bytes = pattern.as_bytes();
    let mut segments: Vec<PatternSegment> = Vec::new();
    let mut literal = String::new();
    let mut seen_names: Vec<String> = Vec::new();
    let mut lit_start = 0usize;
    let mut idx = 0usize;

    while idx < bytes.len() {
        let byte = bytes[idx];
        let param = match byte {
            b'{' => {
                literal.push_str(&pattern[lit_start..idx]);
                Some(parse_braced(pattern, bytes, idx)?)
            }
            b':' if idx > 0 && bytes[idx - 1] == b'/' => {
                literal.push_str(&pattern[lit_start..idx]);
                Some(parse_colon(pattern, bytes, idx)?)
            }
            _ => {
                idx += 1;
                None
            }
        };

        if let Some((name, constraint, next_idx)) = param {
            if seen_names.iter().any(|existing| existing == &name) {
                return Err(PatternError::DuplicateParameterName {
                    pattern: pattern.to_string(),
                    name,
                });
            }
            if !literal.is_empty() {
                segments.push(PatternSegment::Literal(std::mem::take(&mut literal)));
            }
            seen_names.push(name.clone());
            segments.push(PatternSegment::Param { name, constraint });
            idx = next_idx;
            lit_start = next_idx;
        }
    }

    literal.push_str(&pattern[lit_start..]);
    if !literal.is_empty() {
        segments.push(PatternSegment::Literal(literal));
    }

    Ok(segments)
}

type ParsedParam = (String, Option<Box<str>>, usize);

/// `{name}` or `{name:regex}`; `open` points at the `{`.
fn parse_braced(pattern: &str, bytes: &[u8], open: usize) -> PatternResult<ParsedParam> {
    let name_start = open + 1;
    let mut idx = name_start;
    while idx < bytes.len() && bytes[idx] != b'}' && bytes[idx] != b':' {
        idx += 1;
    }

    let name = &pattern[name_start..idx];
    if idx >= bytes.len() {
        if name.is_empty() {
            return Err(PatternError::ParameterMissingName {
                pattern: pattern.to_string(),
                offset: open,
            });
        }
        return Err(PatternError::UnterminatedParameter {
            pattern: pattern.to_string(),
            name: name.to_string(),
            offset: open,
        });
    }
    validate_name(pattern, name, name_start, open)?;

    if bytes[idx] == b'}' {
        return Ok((name.to_string(), None, idx + 1));
    }

    // constraint follows the ':'; brace-matched so `{id:[0-9]{2,4}}` parses
    idx += 1;
    let constraint_start = idx;
    let mut depth = 1usize;
    while idx < bytes.len() {
        match bytes[idx] {
            b'{' => depth += 1,
            b'}' => {
                depth -= 1;
                if depth == 0 {
                    let raw = &pattern[constraint_start..idx];
                    return Ok((
                        name.to_string(),
                        Some(raw.to_string().into_boxed_str()),
                        idx + 1,
                    ));
                }
            }
            _ => {}
        }
        idx += 1;
    }

    Err(PatternError::UnterminatedConstraint {
        pattern: pattern.to_string(),
        name: name.to_string(),
        offset: open,
    })
}

/// `:name` or `:name(regex)`; `open` points at the `:`.
fn parse_colon(pattern: &str, bytes: &[u8], open: usize) -> PatternResult<ParsedParam> {
    let name_start = open + 1;
    let mut idx = name_start;
    while idx < bytes.len() && (bytes[idx].is_ascii_alphanumeric() || bytes[idx] == b'_') {
        idx += 1;
    }

    let name = &pattern[name_start..idx];
    validate_name(pattern, name, name_start, open)?;

    // the name run must end the segment or open a constraint
    if idx < bytes.len() && bytes[idx] != b'/' && bytes[idx] != b'(' {
        return Err(PatternError::ParameterInvalidCharacter {
            pattern: pattern.to_string(),
            name: name.to_string(),
            offset: idx,
            invalid: bytes[idx] as char,
        });
    }

    if idx >= bytes.len() || bytes[idx] != b'(' {
        return Ok((name.to_string(), None, idx));
    }

    idx += 1;
    let constraint_start = idx;
    let mut depth = 1usize;
    while idx < bytes.len() {
        match bytes[idx] {
            b'(' => depth += 1,
            b')' => {
                depth -= 1;
                if depth == 0 {
                    let raw = &pattern[constraint_start..idx];
                    return Ok((
                        name.to_string(),
                        Some(raw.to_string().into_boxed_str()),
                        idx + 1,
                    ));
                }
            }
            _ => {}
        }
        idx += 1;
    }

    Err(PatternError::UnterminatedConstraint {
        pattern: pattern.to_string(),
        name: name.to_string(),
        offset: open,
    })
}

fn validate_name(
    pattern: &str,
    name: &str,
    name_offset: usize,
    open_offset: usize,
) -> PatternResult<()> {
    let bytes = name.as_bytes();
    if bytes.is_empty() {
        return Err(PatternError::ParameterMissingName {
            pattern: pattern.to_string(),
            offset: open_offset,
        });
    }

    if !(bytes[0].is_ascii_alphabetic() || bytes[0] == b'_') {
        return Err(PatternError::ParameterInvalidStart {
            pattern: pattern.to_string(),
            name: name.to_string(),
            offset: name_offset,
            found: bytes[0] as char,
        });
    }

    for (pos, &byte) in bytes.iter().enumerate().skip(1) {
        if !(byte.is_ascii_alphanumeric() || byte == b'_') {
            return Err(PatternError::ParameterInvalidCharacter {
                pattern: pattern.to_string(),
                name: name.to_string(),
                offset: name_offset + pos,
                invalid: byte as char,
            });
        }
    }

    Ok(())
}
