//! Parameter lists written as text, as found in doc headings and directives.

use std::collections::HashSet;

use docdrift_core::types::Parameter;

/// Split a parameter list like `a: int, b=2, *args, [c]` into parameters.
///
/// Separators (`*`, `/`, `...`) are dropped, splat prefixes are stripped, and
/// repeated names keep their first occurrence.
pub fn parse_param_list(text: &str) -> Vec<Parameter> {
    let mut seen = HashSet::new();
    let mut out = Vec::new();
    for raw in split_top_level(text) {
        if let Some(param) = parse_one(&raw) {
            if seen.insert(param.name.clone()) {
                out.push(param);
            }
        }
    }
    out
}

/// Split on commas that are not nested inside brackets or quotes.
pub fn split_top_level(text: &str) -> Vec<String> {
    let chars: Vec<char> = text.chars().collect();
    let mut parts = Vec::new();
    let mut current = String::new();
    let mut depth = 0usize;
    let mut optional = 0usize;
    let mut quote: Option<char> = None;

    for (i, &ch) in chars.iter().enumerate() {
        if let Some(q) = quote {
            current.push(ch);
            if ch == q {
                quote = None;
            }
            continue;
        }
        match ch {
            '"' | '\'' | '`' => {
                quote = Some(ch);
                current.push(ch);
            }
            // Optional-argument brackets in prose (`f(a[, b])`) are noise.
            '[' if depth == 0 && opens_optional(&chars[i + 1..], &current) => optional += 1,
            ']' if depth == 0 && optional > 0 => optional -= 1,
            '(' | '{' | '[' | '<' => {
                depth += 1;
                current.push(ch);
            }
            ')' | '}' | ']' => {
                depth = depth.saturating_sub(1);
                current.push(ch);
            }
            '>' => {
                if i == 0 || chars[i - 1] != '=' {
                    depth = depth.saturating_sub(1);
                }
                current.push(ch);
            }
            ',' if depth == 0 => parts.push(std::mem::take(&mut current)),
            _ => current.push(ch),
        }
    }
    parts.push(current);
    parts
        .into_iter()
        .map(|p| p.trim().to_string())
        .filter(|p| !p.is_empty())
        .collect()
}

fn opens_optional(rest: &[char], current: &str) -> bool {
    let next = rest.iter().find(|c| !c.is_whitespace());
    current.trim().is_empty() || next == Some(&',')
}

/// Position of the first `=` that is not part of `=>` or `==`.
fn default_split(text: &str) -> Option<usize> {
    let bytes = text.as_bytes();
    (0..bytes.len()).find(|&i| {
        bytes[i] == b'='
            && bytes.get(i + 1).map_or(true, |b| *b != b'>' && *b != b'=')
            && (i == 0 || bytes[i - 1] != b'=')
    })
}

fn parse_one(raw: &str) -> Option<Parameter> {
    let raw = raw.trim();
    if matches!(raw, "*" | "/" | "..." | "**") {
        return None;
    }

    let (head, default_value) = match default_split(raw) {
        Some(i) => (raw[..i].trim(), Some(raw[i + 1..].trim().to_string())),
        None => (raw, None),
    };
    let (name_part, type_annotation) = match head.split_once(':') {
        Some((n, t)) => (n.trim(), Some(t.trim().to_string())),
        None => (head, None),
    };

    let name: String = name_part
        .trim_start_matches("...")
        .trim_start_matches('*')
        .trim_end_matches('?')
        .chars()
        .take_while(|c| c.is_alphanumeric() || *c == '_' || *c == '$')
        .collect();
    if name.is_empty() {
        return None;
    }

    Some(Parameter {
        name,
        type_annotation: type_annotation.filter(|t| !t.is_empty()),
        default_value: default_value.filter(|d| !d.is_empty()),
    })
}
