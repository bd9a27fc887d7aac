//! Compile helpers shared by the integration tests.

use xuml_model::{Class, Compilation, CompileError, CompileOptions, Compiler};

/// Compile with the given options, failing the test on any error.
pub fn compile_ok_with(options: CompileOptions, text: &str) -> Compilation {
    match Compiler::new(options).compile_text(text) {
        Ok(compilation) => compilation,
        Err(CompileError::Syntax(errors)) => panic!(
            "Expected text to compile, got {} syntax error(s):\n{}",
            errors.len(),
            errors
                .iter()
                .map(|e| format!("  {e}"))
                .collect::<Vec<_>>()
                .join("\n")
        ),
        Err(err) => panic!("Expected text to compile, got: {err}"),
    }
}

/// Compile with default options, failing the test on any error.
pub fn compile_ok(text: &str) -> Compilation {
    compile_ok_with(CompileOptions::default(), text)
}

/// Look up a class by name, failing the test if absent.
pub fn class<'a>(compilation: &'a Compilation, name: &str) -> &'a Class {
    compilation
        .subsystem
        .class(name)
        .unwrap_or_else(|| panic!("Class `{name}` not found"))
}
