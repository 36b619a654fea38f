//! Recursive asXML rendering.
//!
//! [`XmlWriter`] walks a record, table, or string depth-first and writes
//! one element per line to any `Write` sink, indenting one space per
//! nesting level. Members are emitted in declaration order, rows in
//! insertion order, and unset members are skipped.

use std::borrow::Cow;
use std::fmt;
use std::io::{self, Write};

use abapx_core::{Value, ValueRef};

use crate::escape::escape_text;
use crate::{ENVELOPE_CLOSE, ENVELOPE_OPEN, ITEM_TAG, VALUES_TAG, XML_DECLARATION};

/// Computes the element name of a record row.
pub type RowNameFn<'a> = dyn Fn(&Value) -> String + 'a;

/// Configurable asXML serializer.
///
/// The top element defaults to the root value's type name and only
/// renames the outermost element. The row-name function, when set,
/// names the record rows of every table reached by the same call;
/// string rows are always `item`.
///
/// # Examples
///
/// ```
/// use abapx_core::{Record, RecordType};
/// use abapx_xml::XmlWriter;
///
/// let ty = RecordType::builder("PLAIN_STRUCT")
///     .string("PYTHON")
///     .string("LINUX")
///     .build()
///     .unwrap();
/// let plain = Record::with_fields(&ty, [("PYTHON", "theBest")]).unwrap();
///
/// let mut out = Vec::new();
/// XmlWriter::new()
///     .top_element("ROOT")
///     .write_fragment(&plain, &mut out, "")
///     .unwrap();
///
/// assert_eq!(
///     String::from_utf8(out).unwrap(),
///     "<ROOT>\n <PYTHON>theBest</PYTHON>\n</ROOT>\n"
/// );
/// ```
#[derive(Default)]
pub struct XmlWriter<'a> {
    top_element: Option<String>,
    row_name: Option<Box<RowNameFn<'a>>>,
}

impl<'a> XmlWriter<'a> {
    /// Serializer with default element names.
    pub fn new() -> Self {
        Self::default()
    }

    /// Rename the outermost element.
    pub fn top_element(mut self, name: impl Into<String>) -> Self {
        self.top_element = Some(name.into());
        self
    }

    /// Name record rows with `f` instead of their type name.
    pub fn row_name(mut self, f: impl Fn(&Value) -> String + 'a) -> Self {
        self.row_name = Some(Box::new(f));
        self
    }

    /// Write a complete document: declaration, envelope, and `value`.
    pub fn write<'v>(
        &self,
        value: impl Into<ValueRef<'v>>,
        dest: &mut dyn Write,
    ) -> io::Result<()> {
        writeln!(dest, "{XML_DECLARATION}")?;
        writeln!(dest, "{ENVELOPE_OPEN}")?;
        writeln!(dest, " <{VALUES_TAG}>")?;
        self.write_fragment(value, dest, "  ")?;
        writeln!(dest, " </{VALUES_TAG}>")?;
        writeln!(dest, "{ENVELOPE_CLOSE}")
    }

    /// Write `value` alone, each line starting with `prefix`.
    pub fn write_fragment<'v>(
        &self,
        value: impl Into<ValueRef<'v>>,
        dest: &mut dyn Write,
        prefix: &str,
    ) -> io::Result<()> {
        let value = value.into();
        let tag = self.top_element.as_deref().unwrap_or(value.type_name());
        self.render(value, dest, prefix, tag)
    }

    fn render(
        &self,
        value: ValueRef<'_>,
        dest: &mut dyn Write,
        prefix: &str,
        tag: &str,
    ) -> io::Result<()> {
        match value {
            ValueRef::String(text) => {
                writeln!(dest, "{prefix}<{tag}>{}</{tag}>", escape_text(text))
            }
            ValueRef::Record(record) => {
                writeln!(dest, "{prefix}<{tag}>")?;
                let inner = format!("{prefix} ");
                for (member, value) in record.iter() {
                    if let Some(value) = value {
                        self.render(value.into(), dest, &inner, member)?;
                    }
                }
                writeln!(dest, "{prefix}</{tag}>")
            }
            ValueRef::Table(table) => {
                writeln!(dest, "{prefix}<{tag}>")?;
                let inner = format!("{prefix} ");
                for row in table {
                    let name = self.row_tag(row);
                    self.render(row.into(), dest, &inner, &name)?;
                }
                writeln!(dest, "{prefix}</{tag}>")
            }
        }
    }

    fn row_tag<'v>(&self, row: &'v Value) -> Cow<'v, str> {
        match (row, &self.row_name) {
            (Value::String(_), _) => Cow::Borrowed(ITEM_TAG),
            (_, Some(f)) => Cow::Owned(f(row)),
            (_, None) => Cow::Borrowed(row.type_name()),
        }
    }
}

impl fmt::Debug for XmlWriter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("XmlWriter")
            .field("top_element", &self.top_element)
            .field("row_name", &self.row_name.as_ref().map(|_| "<fn>"))
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use abapx_core::{Record, RecordType, Table, TableType};

    fn render(writer: &XmlWriter<'_>, value: ValueRef<'_>) -> String {
        let mut out = Vec::new();
        writer.write_fragment(value, &mut out, "").unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn bare_string_is_one_line() {
        let out = render(&XmlWriter::new(), ValueRef::String("a&b"));
        assert_eq!(out, "<string>a&amp;b</string>\n");
    }

    #[test]
    fn unset_members_are_omitted() {
        let ty = RecordType::builder("S")
            .string("A")
            .string("B")
            .build()
            .unwrap();
        let record = Record::with_fields(&ty, [("B", "x")]).unwrap();
        let out = render(&XmlWriter::new(), (&record).into());
        assert_eq!(out, "<S>\n <B>x</B>\n</S>\n");
    }

    #[test]
    fn empty_table_has_open_and_close() {
        let table = Table::new(&TableType::string_table());
        let out = render(&XmlWriter::new(), (&table).into());
        assert_eq!(out, "<StringTable>\n</StringTable>\n");
    }

    #[test]
    fn row_name_does_not_rename_string_rows() {
        let table = Table::strings(["x"]);
        let writer = XmlWriter::new().row_name(|_| "ROW".to_owned());
        assert_eq!(
            render(&writer, (&table).into()),
            "<StringTable>\n <item>x</item>\n</StringTable>\n"
        );
    }

    #[test]
    fn top_element_only_renames_root() {
        let inner = RecordType::builder("INNER").string("X").build().unwrap();
        let outer = RecordType::builder("OUTER")
            .record("CHILD", &inner)
            .build()
            .unwrap();
        let child = Record::with_fields(&inner, [("X", "1")]).unwrap();
        let record = Record::with_fields(&outer, [("CHILD", child)]).unwrap();

        let out = render(&XmlWriter::new().top_element("ROOT"), (&record).into());
        assert_eq!(out, "<ROOT>\n <CHILD>\n  <X>1</X>\n </CHILD>\n</ROOT>\n");
    }

    #[test]
    fn debug_hides_closure() {
        let writer = XmlWriter::new().row_name(|_| "item".to_owned());
        let debug = format!("{writer:?}");
        assert!(debug.contains("<fn>"));
    }
}
