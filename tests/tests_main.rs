#[path = "helpers/mod.rs"]
mod helpers;

#[path = "compile/mod.rs"]
mod compile;

#[path = "parser/mod.rs"]
mod parser;
