#![forbid(unsafe_code)]
//! dirtree — render a directory subtree as a box-drawing tree diagram.

pub mod cli;
pub mod error;
pub mod logging;
pub mod render;
pub mod tree;

pub use error::{Error, ErrorKind, Result};
pub use render::{render, render_with};
