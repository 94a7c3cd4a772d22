//! # tagtree
//!
//! Infers the nesting of loose, possibly malformed markup and renders it as an
//! indented tree.
//!
//! The pipeline is tokenize → classify → depth-annotate → rebuild:
//!
//! ```text
//! "<a><b>x</b></a>"  →  [Container(<a>, [Container(<b>, [Leaf(x)])])]
//! ```
//!
//! Nothing in the core can fail. Input that does not nest cleanly yields a
//! flatter tree, and unterminated containers are dropped.
//!
//! ## Testing
//!
//! Tree builders for assertions live in the [testing module](tagtree::testing).

pub mod tagtree;

pub use tagtree::ast::Node;
pub use tagtree::building::build_tree;
pub use tagtree::formats::{escape, render};
pub use tagtree::lexing::{tokenize, Token};
pub use tagtree::processor::decompose;
