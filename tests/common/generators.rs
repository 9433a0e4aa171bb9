/// Project generators for benchmarks and large-scale tests.
use std::fmt::Write;

/// A Python module with `count` documented functions `func_{i}(a, b)`.
/// Every `extra_param_every`-th function gains a third parameter `c`.
#[allow(dead_code)]
pub fn generate_python_module(count: usize, extra_param_every: usize) -> String {
    let mut source = String::new();
    for i in 0..count {
        let extra = extra_param_every > 0 && i % extra_param_every == 0;
        let params = if extra { "a, b, c" } else { "a, b" };
        writeln!(source, "def func_{i}({params}):").unwrap();
        writeln!(source, "    \"\"\"Function {i}.\"\"\"").unwrap();
        writeln!(source, "    return a\n").unwrap();
    }
    source
}

/// Markdown docs for `func_0..count`, two parameters each.
#[allow(dead_code)]
pub fn generate_markdown_docs(count: usize) -> String {
    let mut docs = String::from("# API\n\n");
    for i in 0..count {
        writeln!(docs, "## `func_{i}(a, b)`\n\nFunction {i}.\n").unwrap();
    }
    docs
}
