use std::path::Path;
use std::sync::OnceLock;

use regex::Regex;

use docdrift_core::types::{DocSignature, Parameter, Signature, SignatureKind, SourceLocation};

use crate::extractor::DocExtractor;
use crate::params::parse_param_list;

/// Sphinx-style directives in reStructuredText:
/// `.. function::`, `.. class::`, `.. method::` (optionally `py:`-prefixed).
///
/// `:param name:` fields in the directive body add parameters and
/// `.. deprecated::` marks deprecation. A method directive indented under a
/// class directive belongs to that class.
#[derive(Debug, Default, Clone, Copy)]
pub struct RstExtractor;

impl RstExtractor {
    pub fn new() -> Self {
        Self
    }
}

impl DocExtractor for RstExtractor {
    fn language(&self) -> &str {
        "rst"
    }

    fn extensions(&self) -> &[&str] {
        &["rst"]
    }

    fn extract(&self, path: &Path, content: &str) -> Vec<DocSignature> {
        extract_rst(path, content)
    }
}

struct Patterns {
    directive: Regex,
    signature: Regex,
    param: Regex,
    type_field: Regex,
    deprecated: Regex,
}

fn patterns() -> &'static Patterns {
    static PATTERNS: OnceLock<Patterns> = OnceLock::new();
    PATTERNS.get_or_init(|| Patterns {
        directive: Regex::new(
            r"^(\s*)\.\.\s+(?:py:)?(function|class|method|staticmethod|classmethod)::\s+(.+)$",
        )
        .expect("valid directive regex"),
        signature: Regex::new(r"^([\w.]+)\s*(?:\((.*)\))?\s*(?:->\s*(.+))?$")
            .expect("valid signature regex"),
        param: Regex::new(r"^\s*:param\s+(?:([^:]+?)\s+)?(\w+)\s*:").expect("valid param regex"),
        type_field: Regex::new(r"^\s*:type\s+(\w+)\s*:\s*(.+)$").expect("valid type regex"),
        deprecated: Regex::new(r"^\s*\.\.\s+deprecated::").expect("valid deprecated regex"),
    })
}

fn indent_of(line: &str) -> usize {
    line.len() - line.trim_start().len()
}

pub fn extract_rst(path: &Path, content: &str) -> Vec<DocSignature> {
    let p = patterns();
    let file_path = path.to_string_lossy().replace('\\', "/");
    let lines: Vec<&str> = content.lines().collect();
    let mut out = Vec::new();
    // Open class directives: (indent, name).
    let mut classes: Vec<(usize, String)> = Vec::new();

    for (idx, line) in lines.iter().enumerate() {
        let Some(caps) = p.directive.captures(line) else {
            continue;
        };
        let indent = caps[1].len();
        classes.retain(|(class_indent, _)| *class_indent < indent);

        let directive = &caps[2];
        let Some(sig_caps) = p.signature.captures(caps[3].trim()) else {
            continue;
        };
        let dotted = &sig_caps[1];
        let mut segments: Vec<&str> = dotted.split('.').filter(|s| !s.is_empty()).collect();
        let Some(name) = segments.pop() else {
            continue;
        };

        let kind = match directive {
            "class" => SignatureKind::Class,
            "function" => SignatureKind::Function,
            _ => SignatureKind::Method,
        };
        let parent = match kind {
            SignatureKind::Method => segments
                .last()
                .map(|s| s.to_string())
                .or_else(|| classes.last().map(|(_, c)| c.clone())),
            _ => None,
        };

        let mut signature = Signature::new(name, kind, SourceLocation::new(&file_path, idx as u32 + 1));
        signature.parent = parent;
        signature.parameters = sig_caps
            .get(2)
            .map(|m| parse_param_list(m.as_str()))
            .unwrap_or_default();
        signature.return_type = sig_caps.get(3).map(|m| m.as_str().trim().to_string());

        apply_body(&lines[idx + 1..], indent, &mut signature);

        if kind == SignatureKind::Class {
            classes.push((indent, name.to_string()));
        }
        out.push(DocSignature::new(signature));
    }
    out
}

/// Scan the directive body (lines indented past `indent`) for fields.
/// Stops at a nested signature directive.
fn apply_body(body: &[&str], indent: usize, signature: &mut Signature) {
    let p = patterns();
    for line in body {
        if line.trim().is_empty() {
            continue;
        }
        if indent_of(line) <= indent || p.directive.is_match(line) {
            break;
        }
        if p.deprecated.is_match(line) {
            signature.is_deprecated = true;
        } else if let Some(caps) = p.param.captures(line) {
            let name = &caps[2];
            let type_annotation = caps.get(1).map(|m| m.as_str().trim().to_string());
            match signature.parameters.iter_mut().find(|param| param.name == name) {
                Some(existing) => {
                    if existing.type_annotation.is_none() {
                        existing.type_annotation = type_annotation;
                    }
                }
                None => signature.parameters.push(Parameter {
                    name: name.to_string(),
                    type_annotation,
                    default_value: None,
                }),
            }
        } else if let Some(caps) = p.type_field.captures(line) {
            if let Some(param) = signature.parameters.iter_mut().find(|param| param.name == caps[1]) {
                param.type_annotation = Some(caps[2].trim().to_string());
            }
        }
    }
}
