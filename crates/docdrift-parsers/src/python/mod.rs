use std::collections::HashSet;
use std::path::Path;

use tree_sitter::Node;

use docdrift_core::types::{CodeSignature, Parameter, Signature, SignatureKind, SourceLocation};

use crate::extractor::{CodeExtractor, ExtractError};
use crate::treesitter::{has_keyword, named_children, node_text, start_line, TreeSitterParser};

/// Module-level functions, classes and their methods from Python source.
///
/// A class signature takes its parameters from `__init__`. Nested functions
/// and nested classes are not extracted, nor are property setters, deleters
/// and `@overload` stubs.
#[derive(Debug, Default, Clone, Copy)]
pub struct PythonExtractor;

impl PythonExtractor {
    pub fn new() -> Self {
        Self
    }
}

impl CodeExtractor for PythonExtractor {
    fn language(&self) -> &str {
        "python"
    }

    fn extensions(&self) -> &[&str] {
        &["py", "pyi"]
    }

    fn extract(&self, path: &Path, content: &str) -> Vec<CodeSignature> {
        match extract_python(path, content) {
            Ok(sigs) => sigs,
            Err(e) => {
                tracing::warn!(error = %e, "skipping python file");
                vec![]
            }
        }
    }
}

pub fn extract_python(path: &Path, content: &str) -> Result<Vec<CodeSignature>, ExtractError> {
    let mut parser = TreeSitterParser::new();
    let tree = parser
        .parse("python", content.as_bytes())
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
        let (def, decorators) = unwrap_decorated(item);
        match def.kind() {
            "function_definition" if ctx.is_secondary_definition(&decorators) => {}
            "function_definition" => {
                out.extend(ctx.function(def, &decorators, SignatureKind::Function, None));
            }
            "class_definition" => ctx.class(def, &decorators, &mut out),
            _ => {}
        }
    }
    Ok(out)
}

struct Ctx<'a> {
    source: &'a [u8],
    file_path: String,
}

impl<'a> Ctx<'a> {
    fn text(&self, node: Node<'_>) -> &'a str {
        node_text(node, self.source)
    }

    fn name_of(&self, def: Node<'_>) -> Option<&'a str> {
        def.child_by_field_name("name")
            .map(|n| self.text(n))
            .filter(|n| !n.is_empty())
    }

    fn function(
        &self,
        def: Node<'_>,
        decorators: &[Node<'_>],
        kind: SignatureKind,
        parent: Option<&str>,
    ) -> Option<CodeSignature> {
        let name = self.name_of(def)?;
        let location = SourceLocation::new(&self.file_path, start_line(def));
        let mut sig = Signature::new(name, kind, location);
        sig.parent = parent.map(str::to_string);
        sig.parameters = def
            .child_by_field_name("parameters")
            .map(|p| self.parameters(p))
            .unwrap_or_default();
        sig.return_type = def
            .child_by_field_name("return_type")
            .map(|t| self.text(t).to_string());
        sig.is_deprecated = self.is_deprecated(decorators);

        let mut code = CodeSignature::new(sig);
        code.is_async = has_keyword(def, "async");
        code.docstring_present = def
            .child_by_field_name("body")
            .map(|b| self.has_docstring(b))
            .unwrap_or(false);
        Some(code)
    }

    fn class(&self, def: Node<'_>, decorators: &[Node<'_>], out: &mut Vec<CodeSignature>) {
        let Some(name) = self.name_of(def) else {
            return;
        };
        let body = def.child_by_field_name("body");

        let mut methods = Vec::new();
        if let Some(body) = body {
            for item in named_children(body) {
                let (inner, inner_decorators) = unwrap_decorated(item);
                if inner.kind() == "function_definition"
                    && !self.is_secondary_definition(&inner_decorators)
                {
                    methods.extend(self.function(
                        inner,
                        &inner_decorators,
                        SignatureKind::Method,
                        Some(name),
                    ));
                }
            }
        }

        let location = SourceLocation::new(&self.file_path, start_line(def));
        let mut sig = Signature::new(name, SignatureKind::Class, location);
        sig.parameters = methods
            .iter()
            .find(|m| m.signature.name == "__init__")
            .map(|init| init.signature.parameters.clone())
            .unwrap_or_default();
        sig.is_deprecated = self.is_deprecated(decorators);

        let mut class = CodeSignature::new(sig);
        class.docstring_present = body.map(|b| self.has_docstring(b)).unwrap_or(false);

        out.push(class);
        out.extend(methods);
    }

    /// Declared parameters; a repeated name keeps its first occurrence.
    fn parameters(&self, params: Node<'_>) -> Vec<Parameter> {
        let mut seen = HashSet::new();
        named_children(params)
            .into_iter()
            .filter_map(|p| self.parameter(p))
            .filter(|p| seen.insert(p.name.clone()))
            .collect()
    }

    fn parameter(&self, node: Node<'_>) -> Option<Parameter> {
        let field = |f: &str| node.child_by_field_name(f).map(|n| self.text(n).to_string());
        match node.kind() {
            "identifier" => Some(Parameter::named(self.text(node))),
            "list_splat_pattern" | "dictionary_splat_pattern" => {
                Some(Parameter::named(self.splat_name(node)?))
            }
            "typed_parameter" => {
                let inner = node.named_child(0)?;
                let name = match inner.kind() {
                    "identifier" => self.text(inner).to_string(),
                    _ => self.splat_name(inner)?,
                };
                Some(Parameter {
                    name,
                    type_annotation: field("type"),
                    default_value: None,
                })
            }
            "default_parameter" | "typed_default_parameter" => Some(Parameter {
                name: field("name")?,
                type_annotation: field("type"),
                default_value: field("value"),
            }),
            // keyword_separator, positional_separator, comments
            _ => None,
        }
    }

    fn splat_name(&self, node: Node<'_>) -> Option<String> {
        named_children(node)
            .into_iter()
            .find(|c| c.kind() == "identifier")
            .map(|c| self.text(c).to_string())
    }

    fn is_deprecated(&self, decorators: &[Node<'_>]) -> bool {
        decorators
            .iter()
            .any(|d| self.text(*d).to_ascii_lowercase().contains("deprecat"))
    }

    /// Property setters and deleters and `@overload` stubs restate a name
    /// whose primary definition is extracted elsewhere.
    fn is_secondary_definition(&self, decorators: &[Node<'_>]) -> bool {
        decorators.iter().any(|d| {
            let target = self.text(*d).trim_start_matches('@').trim();
            let target = target.split('(').next().unwrap_or(target).trim();
            target.ends_with(".setter")
                || target.ends_with(".deleter")
                || target == "overload"
                || target.ends_with(".overload")
        })
    }

    /// A leading string statement, ignoring comments.
    fn has_docstring(&self, body: Node<'_>) -> bool {
        named_children(body)
            .into_iter()
            .find(|n| n.kind() != "comment")
            .filter(|n| n.kind() == "expression_statement")
            .and_then(|stmt| stmt.named_child(0))
            .map(|expr| expr.kind() == "string" || expr.kind() == "concatenated_string")
            .unwrap_or(false)
    }
}

/// `(definition, decorators)` for a possibly decorated definition.
fn unwrap_decorated(node: Node<'_>) -> (Node<'_>, Vec<Node<'_>>) {
    if node.kind() != "decorated_definition" {
        return (node, vec![]);
    }
    let decorators = named_children(node)
        .into_iter()
        .filter(|c| c.kind() == "decorator")
        .collect();
    match node.child_by_field_name("definition") {
        Some(def) => (def, decorators),
        None => (node, decorators),
    }
}
