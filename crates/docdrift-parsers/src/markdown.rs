use std::collections::HashSet;
use std::path::Path;
use std::sync::OnceLock;

use regex::{Captures, Regex};

use docdrift_core::types::{DocSignature, Parameter, Signature, SignatureKind, SourceLocation};

use crate::extractor::DocExtractor;
use crate::params::parse_param_list;

/// Signature headings in Markdown, e.g. ``## `multiply(a, b)` `` or
/// `### Calculator.add(a, b)`.
///
/// The section under a heading runs to the next heading of the same or a
/// higher level. Parameter bullets in the section add parameters the heading
/// does not list; a `deprecated` marker anywhere in the section marks the
/// signature deprecated.
///
/// Fenced code blocks never open or close sections. Inside a `python`/`py`
/// fence, top-level `def name(...)` lines count as documented functions; in a
/// `js`/`ts` fence, `function name(...)` and function-valued `const`/`let`
/// bindings do. An example only adds a signature when no heading documents
/// that name.
#[derive(Debug, Default, Clone, Copy)]
pub struct MarkdownExtractor;

impl MarkdownExtractor {
    pub fn new() -> Self {
        Self
    }
}

impl DocExtractor for MarkdownExtractor {
    fn language(&self) -> &str {
        "markdown"
    }

    fn extensions(&self) -> &[&str] {
        &["md", "markdown"]
    }

    fn extract(&self, path: &Path, content: &str) -> Vec<DocSignature> {
        extract_markdown(path, content)
    }
}

struct Patterns {
    signature: Regex,
    heading: Regex,
    bullet: Regex,
    label: Regex,
    deprecated: Regex,
    fence: Regex,
    py_def: Regex,
    js_function: Regex,
    js_binding: Regex,
}

fn patterns() -> &'static Patterns {
    static PATTERNS: OnceLock<Patterns> = OnceLock::new();
    PATTERNS.get_or_init(|| Patterns {
        signature: Regex::new(
            r"^(#{1,4})\s+`?(?:(class)\s+)?(\w+(?:\.\w+)?)\s*\(([^)]*)\)`?",
        )
        .expect("valid signature heading regex"),
        heading: Regex::new(r"^(#{1,6})\s+(.*)$").expect("valid heading regex"),
        bullet: Regex::new(r"^\s*[-*+]\s+`?(\w+)`?\s*(?:\(([^)]+)\))?\s*[-:]\s*(.+)")
            .expect("valid bullet regex"),
        label: Regex::new(
            r"(?i)^\s*(?:\*\*|__)?(parameters|params|arguments|args|returns?|raises|throws|yields|examples?|notes?|see also)(?:\*\*|__)?\s*:?\s*(?:\*\*|__)?\s*$",
        )
        .expect("valid label regex"),
        deprecated: Regex::new(r"(?i)\bdeprecated\b").expect("valid deprecated regex"),
        fence: Regex::new(r"^\s*(?:```|~~~)\s*([\w+-]*)").expect("valid fence regex"),
        py_def: Regex::new(r"^(?:async\s+)?def\s+(\w+)\s*\(([^)]*)\)")
            .expect("valid python def regex"),
        js_function: Regex::new(
            r"^(?:export\s+)?(?:default\s+)?(?:async\s+)?function\s*\*?\s*(\w+)\s*\(([^)]*)\)",
        )
        .expect("valid js function regex"),
        js_binding: Regex::new(
            r"^(?:export\s+)?(?:const|let)\s+(\w+)\s*=\s*(?:async\s+)?(?:\(([^)]*)\)\s*(?::[^=]+)?=>|(\w+)\s*=>|function\b[^(]*\(([^)]*)\))",
        )
        .expect("valid js binding regex"),
    })
}

/// Whether bullets currently describe parameters.
fn is_param_label(label: &str) -> bool {
    matches!(
        label.to_ascii_lowercase().as_str(),
        "parameters" | "params" | "arguments" | "args"
    )
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FenceLang {
    Python,
    JavaScript,
    Other,
}

impl FenceLang {
    fn from_tag(tag: &str) -> Self {
        match tag.to_ascii_lowercase().as_str() {
            "python" | "py" => FenceLang::Python,
            "javascript" | "js" | "typescript" | "ts" => FenceLang::JavaScript,
            _ => FenceLang::Other,
        }
    }
}

/// An open fenced code block.
struct Fence {
    lang: FenceLang,
    indent: usize,
}

impl Fence {
    /// `(name, parameter text)` for a top-level definition on `line`.
    fn definition<'l>(&self, p: &Patterns, line: &'l str) -> Option<(&'l str, &'l str)> {
        if indent_of(line) != self.indent {
            return None;
        }
        let code = line.trim_start();
        match self.lang {
            FenceLang::Python => {
                let c = p.py_def.captures(code)?;
                Some((group(&c, 1), group(&c, 2)))
            }
            FenceLang::JavaScript => {
                if let Some(c) = p.js_function.captures(code) {
                    return Some((group(&c, 1), group(&c, 2)));
                }
                let c = p.js_binding.captures(code)?;
                // `(a, b) =>`, `a =>` or `function (a, b)`
                let params = [2, 3, 4].into_iter().map(|i| group(&c, i)).find(|g| !g.is_empty());
                Some((group(&c, 1), params.unwrap_or("")))
            }
            FenceLang::Other => None,
        }
    }
}

fn group<'h>(caps: &Captures<'h>, i: usize) -> &'h str {
    caps.get(i).map_or("", |m| m.as_str())
}

fn indent_of(line: &str) -> usize {
    line.len() - line.trim_start().len()
}

struct Section {
    level: usize,
    signature: Signature,
    bullets_are_params: bool,
}

impl Section {
    fn finish(self, out: &mut Vec<DocSignature>) {
        out.push(DocSignature::new(self.signature));
    }

    fn add_bullet(&mut self, name: &str, type_annotation: Option<&str>) {
        if !self.bullets_are_params {
            return;
        }
        let type_annotation = type_annotation.map(|t| t.trim().to_string());
        match self.signature.parameters.iter_mut().find(|p| p.name == name) {
            Some(existing) => {
                if existing.type_annotation.is_none() {
                    existing.type_annotation = type_annotation;
                }
            }
            None => self.signature.parameters.push(Parameter {
                name: name.to_string(),
                type_annotation,
                default_value: None,
            }),
        }
    }
}

pub fn extract_markdown(path: &Path, content: &str) -> Vec<DocSignature> {
    let p = patterns();
    let file_path = path.to_string_lossy().replace('\\', "/");
    let mut out = Vec::new();
    let mut section: Option<Section> = None;
    // Enclosing class heading: (level, name).
    let mut class_ctx: Option<(usize, String)> = None;
    let mut fence: Option<Fence> = None;
    // Definitions found in fenced examples, added after the headings.
    let mut examples: Vec<Signature> = Vec::new();

    for (idx, line) in content.lines().enumerate() {
        if let Some(caps) = p.fence.captures(line) {
            fence = match fence {
                Some(_) => None,
                None => Some(Fence {
                    lang: FenceLang::from_tag(caps.get(1).map_or("", |m| m.as_str())),
                    indent: indent_of(line),
                }),
            };
            continue;
        }
        if let Some(open) = &fence {
            if let Some((name, params)) = open.definition(p, line) {
                let mut signature = Signature::new(
                    name,
                    SignatureKind::Function,
                    SourceLocation::new(&file_path, idx as u32 + 1),
                );
                signature.parameters = parse_param_list(params);
                examples.push(signature);
            }
            continue;
        }

        if let Some(caps) = p.signature.captures(line) {
            if let Some(done) = section.take() {
                done.finish(&mut out);
            }
            let level = caps[1].len();
            if class_ctx.as_ref().is_some_and(|(l, _)| level <= *l) {
                class_ctx = None;
            }

            let explicit_class = caps.get(2).is_some();
            let dotted = &caps[3];
            let (parent, name) = match dotted.split_once('.') {
                Some((parent, name)) => (Some(parent.to_string()), name),
                None => (class_ctx.as_ref().map(|(_, c)| c.clone()), dotted),
            };
            let kind = if parent.is_some() {
                SignatureKind::Method
            } else if explicit_class || name.starts_with(|c: char| c.is_ascii_uppercase()) {
                SignatureKind::Class
            } else {
                SignatureKind::Function
            };

            let mut signature =
                Signature::new(name, kind, SourceLocation::new(&file_path, idx as u32 + 1));
            signature.parent = parent;
            signature.parameters = parse_param_list(&caps[4]);
            signature.is_deprecated = p.deprecated.is_match(&line[caps.get(0).map_or(0, |m| m.end())..]);

            if kind == SignatureKind::Class {
                class_ctx = Some((level, name.to_string()));
            }
            section = Some(Section {
                level,
                signature,
                bullets_are_params: true,
            });
            continue;
        }

        if let Some(caps) = p.heading.captures(line) {
            let level = caps[1].len();
            if class_ctx.as_ref().is_some_and(|(l, _)| level <= *l) {
                class_ctx = None;
            }
            match section.as_mut() {
                Some(open) if level > open.level => {
                    // Sub-heading inside the section, e.g. `#### Parameters`.
                    if let Some(label) = p.label.captures(caps[2].trim()) {
                        open.bullets_are_params = is_param_label(&label[1]);
                    }
                    if p.deprecated.is_match(&caps[2]) {
                        open.signature.is_deprecated = true;
                    }
                }
                Some(_) => {
                    if let Some(done) = section.take() {
                        done.finish(&mut out);
                    }
                }
                None => {}
            }
            continue;
        }

        let Some(open) = section.as_mut() else {
            continue;
        };
        if let Some(label) = p.label.captures(line) {
            open.bullets_are_params = is_param_label(&label[1]);
            continue;
        }
        if let Some(caps) = p.bullet.captures(line) {
            open.add_bullet(&caps[1], caps.get(2).map(|m| m.as_str()));
        }
        if p.deprecated.is_match(line) {
            open.signature.is_deprecated = true;
        }
    }

    if let Some(done) = section {
        done.finish(&mut out);
    }

    let mut documented: HashSet<String> =
        out.iter().map(|d| d.signature.name.clone()).collect();
    for example in examples {
        if documented.insert(example.name.clone()) {
            out.push(DocSignature::new(example));
        }
    }
    out
}
