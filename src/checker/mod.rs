//! Identifier case checker.
//!
//! Enforces the camel case rule from
//! <https://google.github.io/styleguide/jsguide.html#naming-camel-case-defined>:
//! acronyms inside identifiers are written like words (`getHttpResponse`,
//! not `getHTTPResponse`). Constant-style names such as `MAX_SIZE` are exempt.

pub mod checker;
