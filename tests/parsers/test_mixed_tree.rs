// Mixed-language trees, ignore files, and unsupported content.

use docdrift_parsers::SignatureCollector;

use crate::common::write_tree;

#[test]
fn test_code_from_python_and_typescript() {
    let dir = write_tree(&[
        (
            "src/api.ts",
            "/** Fetch. */\nexport function fetchUser(id: number) {}\n",
        ),
        ("src/util.py", "def slugify(text):\n    \"\"\"Slug.\"\"\"\n"),
        ("src/legacy.js", "function legacy(a, b) {}\n"),
        ("src/README.md", "## `notCode(x)`\n"),
    ]);
    let code = SignatureCollector::with_defaults().collect_code(dir.path());
    let names: Vec<_> = code.iter().map(|c| c.signature.name.as_str()).collect();
    assert_eq!(names, vec!["fetchUser", "legacy", "slugify"]);
    assert!(code[0].docstring_present);
    assert!(!code[1].docstring_present);
}

#[test]
fn test_docs_from_markdown_and_rst() {
    let dir = write_tree(&[
        ("docs/guide.md", "## `fetchUser(id)`\n"),
        (
            "docs/api.rst",
            ".. function:: slugify(text)\n\n   .. deprecated:: 1.2\n",
        ),
        ("docs/notes.txt", "## `ignored(x)`\n"),
    ]);
    let docs = SignatureCollector::with_defaults().collect_docs(dir.path());
    let names: Vec<_> = docs.iter().map(|d| d.signature.name.as_str()).collect();
    assert_eq!(names, vec!["slugify", "fetchUser"]);
    assert!(docs[0].signature.is_deprecated);
}

#[test]
fn test_ignore_files_are_honored() {
    let dir = write_tree(&[
        (".docdriftignore", "generated/\n"),
        (".gitignore", "*.tmp.py\n"),
        ("keep.py", "def keep():\n    pass\n"),
        ("scratch.tmp.py", "def scratch():\n    pass\n"),
        ("generated/out.py", "def generated():\n    pass\n"),
        ("node_modules/pkg/index.js", "function vendored() {}\n"),
    ]);
    let code = SignatureCollector::with_defaults().collect_code(dir.path());
    let names: Vec<_> = code.iter().map(|c| c.signature.name.as_str()).collect();
    assert_eq!(names, vec!["keep"]);
}

#[test]
fn test_unparseable_file_contributes_nothing() {
    let dir = write_tree(&[
        ("bad.py", "def broken(:\n    ???\n"),
        ("good.py", "def fine(x):\n    pass\n"),
    ]);
    let code = SignatureCollector::with_defaults().collect_code(dir.path());
    assert!(code.iter().any(|c| c.signature.name == "fine"));
    assert!(code.iter().all(|c| !c.signature.name.is_empty()));
}
