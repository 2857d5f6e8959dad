//! Properties text format
//!
//! Reads and writes the flat `key=value` format used for the endpoint file.
//! The grammar matches `java.util.Properties`, so files written by earlier
//! tooling (escaped `:` in ZooKeeper addresses, `\uXXXX` escapes, continued
//! lines) load unchanged.

use thiserror::Error;

use crate::domain::ports::Properties;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum PropertiesError {
    #[error("malformed \\uxxxx encoding on line {line}")]
    MalformedUnicodeEscape { line: usize },
}

/// Parse properties text. Later duplicates of a key win.
pub fn parse_properties(text: &str) -> Result<Properties, PropertiesError> {
    let mut properties = Properties::new();
    for (line_no, logical) in logical_lines(text) {
        let (raw_key, raw_value) = split_key_value(&logical);
        let key = unescape(raw_key, line_no)?;
        let value = unescape(raw_value, line_no)?;
        properties.insert(key, value);
    }
    Ok(properties)
}

/// Render properties text: one `#` line per comment, then sorted entries.
///
/// The output always parses back to `entries`.
pub fn render_properties(entries: &Properties, comments: &[&str]) -> String {
    let mut out = String::new();
    for comment in comments {
        out.push('#');
        out.push_str(&comment.replace(['\r', '\n'], " "));
        out.push('\n');
    }
    for (key, value) in entries {
        escape_into(&mut out, key, true);
        out.push('=');
        escape_into(&mut out, value, false);
        out.push('\n');
    }
    out
}

fn is_blank(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\x0c')
}

/// Join continued lines and drop comments. Yields (1-based line, text).
fn logical_lines(text: &str) -> Vec<(usize, String)> {
    let mut lines = Vec::new();
    let mut current: Option<(usize, String)> = None;

    for (idx, natural) in natural_lines(text).into_iter().enumerate() {
        let trimmed = natural.trim_start_matches(is_blank);

        let (start, mut buf) = match current.take() {
            Some(pending) => pending,
            None => {
                if trimmed.is_empty() || trimmed.starts_with('#') || trimmed.starts_with('!') {
                    continue;
                }
                (idx + 1, String::new())
            }
        };

        buf.push_str(trimmed);
        let trailing = buf.chars().rev().take_while(|&c| c == '\\').count();
        if trailing % 2 == 1 {
            buf.pop();
            current = Some((start, buf));
        } else {
            lines.push((start, buf));
        }
    }

    if let Some(pending) = current {
        lines.push(pending);
    }
    lines
}

/// Split on `\r\n`, `\r` or `\n`. A trailing terminator adds no empty line.
fn natural_lines(text: &str) -> Vec<&str> {
    let mut lines = Vec::new();
    let mut rest = text;
    while !rest.is_empty() {
        let Some(end) = rest.find(['\r', '\n']) else {
            lines.push(rest);
            break;
        };
        lines.push(&rest[..end]);
        let terminator = if rest[end..].starts_with("\r\n") { 2 } else { 1 };
        rest = &rest[end + terminator..];
    }
    lines
}

/// Split a logical line into raw (still escaped) key and value.
fn split_key_value(line: &str) -> (&str, &str) {
    let mut key_end = line.len();
    let mut value_start = line.len();
    let mut has_separator = false;
    let mut escaped = false;

    for (i, c) in line.char_indices() {
        if escaped {
            escaped = false;
            continue;
        }
        match c {
            '\\' => escaped = true,
            '=' | ':' => {
                key_end = i;
                value_start = i + 1;
                has_separator = true;
                break;
            }
            c if is_blank(c) => {
                key_end = i;
                value_start = i + 1;
                break;
            }
            _ => {}
        }
    }

    let mut rest = &line[value_start..];
    loop {
        let Some(c) = rest.chars().next() else { break };
        if is_blank(c) {
            rest = &rest[c.len_utf8()..];
        } else if !has_separator && (c == '=' || c == ':') {
            has_separator = true;
            rest = &rest[1..];
        } else {
            break;
        }
    }

    (&line[..key_end], rest)
}

fn unescape(raw: &str, line: usize) -> Result<String, PropertiesError> {
    let mut out = String::with_capacity(raw.len());
    let mut chars = raw.chars();
    let mut units: Vec<u16> = Vec::new();

    while let Some(c) = chars.next() {
        if c != '\\' {
            flush_units(&mut units, &mut out);
            out.push(c);
            continue;
        }
        let Some(escaped) = chars.next() else { break };
        if escaped == 'u' {
            let hex: String = chars.by_ref().take(4).collect();
            if hex.len() != 4 || !hex.chars().all(|h| h.is_ascii_hexdigit()) {
                return Err(PropertiesError::MalformedUnicodeEscape { line });
            }
            let unit = u16::from_str_radix(&hex, 16)
                .map_err(|_| PropertiesError::MalformedUnicodeEscape { line })?;
            units.push(unit);
            continue;
        }
        flush_units(&mut units, &mut out);
        out.push(match escaped {
            't' => '\t',
            'n' => '\n',
            'r' => '\r',
            'f' => '\x0c',
            other => other,
        });
    }
    flush_units(&mut units, &mut out);
    Ok(out)
}

/// Decode pending `\uXXXX` units; surrogate pairs join, lone halves become U+FFFD.
fn flush_units(units: &mut Vec<u16>, out: &mut String) {
    if units.is_empty() {
        return;
    }
    out.extend(char::decode_utf16(units.drain(..)).map(|r| r.unwrap_or('\u{fffd}')));
}

fn escape_into(out: &mut String, text: &str, is_key: bool) {
    for (i, c) in text.chars().enumerate() {
        match c {
            '\\' => out.push_str("\\\\"),
            ' ' if is_key || i == 0 => out.push_str("\\ "),
            '\t' => out.push_str("\\t"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\x0c' => out.push_str("\\f"),
            '=' | ':' | '#' | '!' => {
                out.push('\\');
                out.push(c);
            }
            c if (' '..='~').contains(&c) => out.push(c),
            c => {
                let mut buf = [0u16; 2];
                for unit in c.encode_utf16(&mut buf) {
                    out.push_str(&format!("\\u{:04X}", unit));
                }
            }
        }
    }
}
