use std::collections::HashSet;
use std::path::Path;

use tree_sitter::Node;

use docdrift_core::types::{CodeSignature, Parameter, Signature, SignatureKind, SourceLocation};

use crate::extractor::{CodeExtractor, ExtractError};
use crate::treesitter::{detect_language, has_keyword, named_children, node_text, start_line, TreeSitterParser};

/// Top-level functions, `const`/`let` arrow functions, classes and methods
/// from TypeScript and JavaScript.
///
/// Docstring presence comes from an adjacent `/** */` comment, deprecation
/// from a `@deprecated` tag inside it.
#[derive(Debug, Default, Clone, Copy)]
pub struct TypeScriptExtractor;

impl TypeScriptExtractor {
    pub fn new() -> Self {
        Self
    }
}

impl CodeExtractor for TypeScriptExtractor {
    fn language(&self) -> &str {
        "typescript"
    }

    fn extensions(&self) -> &[&str] {
        &["ts", "tsx", "mts", "cts", "js", "jsx", "mjs", "cjs"]
    }

    fn extract(&self, path: &Path, content: &str) -> Vec<CodeSignature> {
        match extract_typescript(path, content) {
            Ok(sigs) => sigs,
            Err(e) => {
                tracing::warn!(error = %e, "skipping typescript file");
                vec![]
            }
        }
    }
}

pub fn extract_typescript(path: &Path, content: &str) -> Result<Vec<CodeSignature>, ExtractError> {
    let lang = detect_language(path).unwrap_or("typescript");
    let mut parser = TreeSitterParser::new();
    let tree = parser
        .parse(lang, content.as_bytes())
        .map_err(|source| ExtractError::Parse {
            path: path.to_path_buf(),
            source,
        })?;

    let ctx = Ctx {
        source: content.as_bytes(),
        file_path: path.to_string_lossy().replace('\\', "/"),
    };
    let mut out = Vec::new();
    for item in named_children(tree.root_node()) {
        ctx.top_level(item, item, &mut out);
    }
    Ok(out)
}

/// JSDoc facts for one declaration.
#[derive(Debug, Default, Clone, Copy)]
struct JsDoc {
    present: bool,
    deprecated: bool,
}

struct Ctx<'a> {
    source: &'a [u8],
    file_path: String,
}

impl<'a> Ctx<'a> {
    fn text(&self, node: Node<'_>) -> &'a str {
        node_text(node, self.source)
    }

    fn location(&self, node: Node<'_>) -> SourceLocation {
        SourceLocation::new(&self.file_path, start_line(node))
    }

    /// `outer` is the statement a JSDoc comment would precede; for exports it
    /// is the `export_statement`, not the inner declaration.
    fn top_level(&self, node: Node<'_>, outer: Node<'_>, out: &mut Vec<CodeSignature>) {
        match node.kind() {
            "export_statement" => {
                let inner = node
                    .child_by_field_name("declaration")
                    .or_else(|| node.child_by_field_name("value"));
                if let Some(inner) = inner {
                    self.top_level(inner, outer, out);
                }
            }
            "function_declaration" | "generator_function_declaration" | "function_expression" => {
                let Some(name) = self.name_of(node) else {
                    return;
                };
                let doc = self.jsdoc(outer);
                out.push(self.callable(node, name, SignatureKind::Function, None, doc));
            }
            "lexical_declaration" | "variable_declaration" => {
                let doc = self.jsdoc(outer);
                for declarator in named_children(node) {
                    if declarator.kind() != "variable_declarator" {
                        continue;
                    }
                    let Some(value) = declarator.child_by_field_name("value") else {
                        continue;
                    };
                    if !matches!(value.kind(), "arrow_function" | "function_expression") {
                        continue;
                    }
                    let Some(name) = self.name_of(declarator) else {
                        continue;
                    };
                    let mut sig = self.callable(value, name, SignatureKind::Function, None, doc);
                    sig.signature.location = self.location(node);
                    out.push(sig);
                }
            }
            "class_declaration" | "abstract_class_declaration" | "class" => {
                self.class(node, self.jsdoc(outer), out)
            }
            _ => {}
        }
    }

    fn name_of(&self, node: Node<'_>) -> Option<&'a str> {
        node.child_by_field_name("name")
            .filter(|n| matches!(n.kind(), "identifier" | "type_identifier" | "property_identifier"))
            .map(|n| self.text(n))
            .filter(|n| !n.is_empty())
    }

    fn callable(
        &self,
        node: Node<'_>,
        name: &str,
        kind: SignatureKind,
        parent: Option<&str>,
        doc: JsDoc,
    ) -> CodeSignature {
        let mut sig = Signature::new(name, kind, self.location(node));
        sig.parent = parent.map(str::to_string);
        sig.parameters = self.parameters(node);
        sig.return_type = node
            .child_by_field_name("return_type")
            .map(|t| strip_colon(self.text(t)));
        sig.is_deprecated = doc.deprecated;

        let mut code = CodeSignature::new(sig);
        code.is_async = has_keyword(node, "async");
        code.docstring_present = doc.present;
        code
    }

    fn class(&self, node: Node<'_>, doc: JsDoc, out: &mut Vec<CodeSignature>) {
        let Some(name) = self.name_of(node) else {
            return;
        };
        let mut methods = Vec::new();
        let mut constructor_params = Vec::new();

        if let Some(body) = node.child_by_field_name("body") {
            for member in named_children(body) {
                if member.kind() != "method_definition" {
                    continue;
                }
                let Some(method_name) = self.name_of(member) else {
                    continue;
                };
                if method_name == "constructor" {
                    constructor_params = self.parameters(member);
                    continue;
                }
                let method_doc = self.jsdoc(member);
                methods.push(self.callable(
                    member,
                    method_name,
                    SignatureKind::Method,
                    Some(name),
                    method_doc,
                ));
            }
        }

        let mut sig = Signature::new(name, SignatureKind::Class, self.location(node));
        sig.parameters = constructor_params;
        sig.is_deprecated = doc.deprecated;
        let mut class = CodeSignature::new(sig);
        class.docstring_present = doc.present;

        out.push(class);
        out.extend(methods);
    }

    fn parameters(&self, callable: Node<'_>) -> Vec<Parameter> {
        // `x => x` has a bare `parameter` field instead of `parameters`.
        if let Some(single) = callable.child_by_field_name("parameter") {
            return vec![Parameter::named(self.text(single))];
        }
        let Some(list) = callable.child_by_field_name("parameters") else {
            return vec![];
        };
        let mut seen = HashSet::new();
        named_children(list)
            .into_iter()
            .filter_map(|p| self.parameter(p))
            .filter(|p| seen.insert(p.name.clone()))
            .collect()
    }

    fn parameter(&self, node: Node<'_>) -> Option<Parameter> {
        match node.kind() {
            "required_parameter" | "optional_parameter" => {
                let pattern = node.child_by_field_name("pattern")?;
                let name = match pattern.kind() {
                    "identifier" => self.text(pattern).to_string(),
                    "rest_pattern" => named_children(pattern)
                        .into_iter()
                        .find(|c| c.kind() == "identifier")
                        .map(|c| self.text(c).to_string())?,
                    "this" => return None,
                    // Destructured parameters are compared by their source text.
                    _ => self.text(pattern).to_string(),
                };
                Some(Parameter {
                    name,
                    type_annotation: node
                        .child_by_field_name("type")
                        .map(|t| strip_colon(self.text(t))),
                    default_value: node
                        .child_by_field_name("value")
                        .map(|v| self.text(v).to_string()),
                })
            }
            "identifier" => Some(Parameter::named(self.text(node))),
            _ => None,
        }
    }

    /// The `/** */` comment directly above `node`, skipping decorators.
    fn jsdoc(&self, node: Node<'_>) -> JsDoc {
        let mut prev = node.prev_named_sibling();
        while let Some(p) = prev {
            if p.kind() != "decorator" {
                break;
            }
            prev = p.prev_named_sibling();
        }
        let Some(comment) = prev.filter(|p| p.kind() == "comment") else {
            return JsDoc::default();
        };
        let adjacent = comment.end_position().row + 1 >= node.start_position().row;
        let text = self.text(comment);
        if !adjacent || !text.starts_with("/**") {
            return JsDoc::default();
        }
        JsDoc {
            present: true,
            deprecated: text.contains("@deprecated"),
        }
    }
}

fn strip_colon(text: &str) -> String {
    text.trim().trim_start_matches(':').trim().to_string()
}
