/// Built-in operation implementations.
///
/// Contains the `ADD`, `SUB`, `MUL` and `DIV` reducers registered in every
/// new calculator.
pub mod builtin;

pub mod core;
