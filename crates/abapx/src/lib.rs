//! abapx: typed ABAP records and internal tables with asXML serialization.
//!
//! This is the top-level facade crate that re-exports the public API from
//! the abapx sub-crates. For most users, adding `abapx` as a single
//! dependency is sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use abapx::prelude::*;
//!
//! let plain = RecordType::builder("PLAIN_STRUCT")
//!     .string("PYTHON")
//!     .string("LINUX")
//!     .build()
//!     .unwrap();
//! let lines_type = TableType::of_records("PLAIN_STRUCT_TT", &plain);
//!
//! let mut lines = Table::new(&lines_type);
//! lines.append_fields([("PYTHON", "Nice"), ("LINUX", "Awesome")]).unwrap();
//! lines
//!     .append(AppendArgs::new().row(Record::with_fields(&plain, [("PYTHON", "Cool")]).unwrap()))
//!     .unwrap();
//!
//! let mut out = Vec::new();
//! to_xml(&lines, &mut out, None).unwrap();
//! let text = String::from_utf8(out).unwrap();
//!
//! assert!(text.starts_with("<?xml version=\"1.0\" encoding=\"utf-8\"?>\n"));
//! assert!(text.contains("  <PLAIN_STRUCT_TT>\n   <PLAIN_STRUCT>\n    <PYTHON>Nice</PYTHON>\n"));
//! ```
//!
//! # Modules
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `abapx-core` | Record and table types, values, errors |
//! | [`xml`] | `abapx-xml` | asXML serializer and text escaping |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Record types, records, tables, and values (`abapx-core`).
///
/// Contains [`types::RecordType`], [`types::Record`], [`types::TableType`],
/// [`types::Table`], and the [`types::TypeError`] taxonomy.
pub use abapx_core as types;

/// asXML serialization (`abapx-xml`).
///
/// Use [`xml::to_xml`] for whole documents, [`xml::abap_to_xml`] for
/// fragments, and [`xml::XmlWriter`] to combine options.
pub use abapx_xml as xml;

/// Common imports for typical abapx usage.
///
/// ```rust
/// use abapx::prelude::*;
/// ```
pub mod prelude {
    // Types and values
    pub use abapx_core::{
        AppendArgs, FieldKind, Record, RecordType, RowType, Table, TableType, Value, ValueRef,
    };

    // Errors
    pub use abapx_core::TypeError;

    // Serialization
    pub use abapx_xml::{abap_to_xml, to_xml, to_xml_string, XmlWriter};
}
