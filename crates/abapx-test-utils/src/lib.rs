//! Shared record and table fixtures for abapx development.
//!
//! Declares the small set of types the workspace tests and benches
//! exercise, so every crate builds them the same way:
//!
//! - [`plain_struct`]: `PLAIN_STRUCT` with string members `PYTHON`, `LINUX`.
//! - [`plain_struct_tt`]: `PLAIN_STRUCT_TT`, a table of `PLAIN_STRUCT`.
//! - [`struct_with_string_table`]: `PLAIN_STRUCT` plus a `DISTROS` string table.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod fixtures;

pub use fixtures::{
    plain_row, plain_struct, plain_struct_tt, plain_table, struct_with_string_table, wide_struct,
};
