//! asXML serialization of abapx records and internal tables.
//!
//! Renders a [`Record`](abapx_core::Record), [`Table`](abapx_core::Table),
//! or bare string into the nested-tag text format used to exchange data
//! with an ABAP system.
//!
//! # Architecture
//!
//! - [`XmlWriter`] holds the per-call options (top element, row naming)
//!   and performs the recursive walk
//! - [`to_xml`] writes a full document with the envelope
//! - [`abap_to_xml`] writes a bare fragment at a given indentation
//! - [`escape_text`] escapes leaf values
//!
//! # Format
//!
//! ```text
//! <?xml version="1.0" encoding="utf-8"?>
//! <asx:abap xmlns:asx="http://www.sap.com/abapxml" version="1.0">
//!  <asx:values>
//!   <ROOT>
//!    <MEMBER>value</MEMBER>
//!   </ROOT>
//!  </asx:values>
//! </asx:abap>
//! ```
//!
//! One space of indentation per nesting level, one element per line,
//! and a trailing newline.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod escape;
pub mod writer;

use std::io::{self, Write};

use abapx_core::{Value, ValueRef};

pub use escape::escape_text;
pub use writer::{RowNameFn, XmlWriter};

/// First line of every document.
pub const XML_DECLARATION: &str = r#"<?xml version="1.0" encoding="utf-8"?>"#;

/// Opening tag of the asXML envelope.
pub const ENVELOPE_OPEN: &str = r#"<asx:abap xmlns:asx="http://www.sap.com/abapxml" version="1.0">"#;

/// Closing tag of the asXML envelope.
pub const ENVELOPE_CLOSE: &str = "</asx:abap>";

/// Wrapper element holding the root value inside the envelope.
pub const VALUES_TAG: &str = "asx:values";

/// Element name of scalar table rows.
pub const ITEM_TAG: &str = "item";

/// Write `value` as a complete asXML document.
///
/// The root element is named `top_element` if given, otherwise after the
/// value's type. Sink errors are returned as-is; the sink may hold a
/// partial document afterwards.
///
/// # Examples
///
/// ```
/// use abapx_core::{Record, RecordType};
///
/// let ty = RecordType::builder("PLAIN_STRUCT")
///     .string("PYTHON")
///     .string("LINUX")
///     .build()
///     .unwrap();
/// let plain = Record::with_fields(&ty, [("PYTHON", "theBest"), ("LINUX", "better")]).unwrap();
///
/// let mut out = Vec::new();
/// abapx_xml::to_xml(&plain, &mut out, None).unwrap();
/// let text = String::from_utf8(out).unwrap();
///
/// assert!(text.contains("  <PLAIN_STRUCT>\n   <PYTHON>theBest</PYTHON>\n"));
/// assert!(text.ends_with("</asx:abap>\n"));
/// ```
pub fn to_xml<'v>(
    value: impl Into<ValueRef<'v>>,
    dest: &mut dyn Write,
    top_element: Option<&str>,
) -> io::Result<()> {
    let mut writer = XmlWriter::new();
    if let Some(name) = top_element {
        writer = writer.top_element(name);
    }
    writer.write(value, dest)
}

/// Write `value` as a fragment without the envelope.
///
/// Every line starts with `prefix`. When `row_name_getter` is given, it
/// names the record rows of every table in `value` instead of their type
/// name.
pub fn abap_to_xml<'v>(
    value: impl Into<ValueRef<'v>>,
    dest: &mut dyn Write,
    prefix: &str,
    row_name_getter: Option<&RowNameFn<'_>>,
) -> io::Result<()> {
    let mut writer = XmlWriter::new();
    if let Some(f) = row_name_getter {
        writer = writer.row_name(move |row: &Value| f(row));
    }
    writer.write_fragment(value, dest, prefix)
}

/// Render `value` as a complete asXML document in memory.
pub fn to_xml_string<'v>(
    value: impl Into<ValueRef<'v>>,
    top_element: Option<&str>,
) -> io::Result<String> {
    let mut buf = Vec::new();
    to_xml(value, &mut buf, top_element)?;
    String::from_utf8(buf).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
}
