// Signatures extracted from the demo calculator repository.

use docdrift_core::types::SignatureKind;
use docdrift_parsers::SignatureCollector;

use crate::common::sample_repo;

#[test]
fn test_code_signatures() {
    let code = SignatureCollector::with_defaults().collect_code(&sample_repo().join("src"));
    let names: Vec<_> = code.iter().map(|c| c.signature.qualified_name()).collect();
    assert_eq!(
        names,
        vec![
            "add",
            "subtract",
            "multiply",
            "divide",
            "power",
            "modulo",
            "Calculator",
            "Calculator.__init__",
            "Calculator.add",
            "Calculator.clear_history",
            "_round",
        ]
    );

    let multiply = &code[2];
    let params: Vec<_> = multiply.signature.parameter_names().collect();
    assert_eq!(params, vec!["a", "b", "c"]);
    assert_eq!(multiply.signature.parameters[2].default_value.as_deref(), Some("1"));
    assert_eq!(multiply.signature.return_type.as_deref(), Some("int"));
    assert!(multiply.docstring_present);

    let class = &code[6];
    assert_eq!(class.signature.kind, SignatureKind::Class);
    let params: Vec<_> = class.signature.parameter_names().collect();
    assert_eq!(params, vec!["self", "precision"]);

    assert!(!code[10].docstring_present);
}

#[test]
fn test_doc_signatures() {
    let docs = SignatureCollector::with_defaults().collect_docs(&sample_repo().join("docs"));
    let names: Vec<_> = docs.iter().map(|d| d.signature.qualified_name()).collect();
    assert_eq!(
        names,
        vec![
            "add",
            "subtract",
            "multiply",
            "divide",
            "old_square_root",
            "Calculator",
            "Calculator.add",
        ]
    );

    let add = &docs[0].signature;
    assert_eq!(add.parameters[0].type_annotation.as_deref(), Some("int"));
    assert_eq!(add.parameters.len(), 2);

    let old = &docs[4].signature;
    assert!(old.is_deprecated);
    assert_eq!(old.location.line, 31);
    assert!(!docs[3].signature.is_deprecated);

    assert_eq!(docs[5].signature.kind, SignatureKind::Class);
    assert_eq!(docs[6].signature.kind, SignatureKind::Method);
}

#[test]
fn test_single_file_roots() {
    let collector = SignatureCollector::with_defaults();
    let root = sample_repo();
    let code = collector.collect_code(&root.join("src/calculator.py"));
    assert_eq!(code.len(), 11);
    let docs = collector.collect_docs(&root.join("docs/api.md"));
    assert_eq!(docs.len(), 7);
}
