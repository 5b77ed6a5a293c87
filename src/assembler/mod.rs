//! Assembly of extracted snippets into a single Java source file.
//!
//! The result is meant to be redirected to a `.java` file and compiled, so
//! that documentation examples are checked by the same toolchain as the code.

pub mod assembler;
