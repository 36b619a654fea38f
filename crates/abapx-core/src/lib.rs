//! Typed records and internal tables mirroring ABAP data shapes.
//!
//! This is the leaf crate of the workspace. It defines:
//!
//! - [`RecordType`]: an ordered field schema, declared once.
//! - [`Record`]: a value of a record type with unset-until-assigned members.
//! - [`TableType`] and [`Table`]: ordered containers whose rows all share
//!   one [`RowType`], either a record type or bare strings.
//! - [`Value`] and [`ValueRef`]: the closed set of shapes a member or row
//!   can take.
//! - [`TypeError`]: every construction and mutation failure.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod error;
pub mod record;
pub mod schema;
pub mod table;
pub mod value;

pub use error::TypeError;
pub use record::Record;
pub use schema::{
    FieldKind, RecordType, RecordTypeBuilder, RowType, TableType, STRING_KIND, STRING_TABLE,
};
pub use table::{AppendArgs, Table};
pub use value::{Value, ValueRef};
