mod tests_compile_text;
mod tests_warnings;
