//! Record and table type declarations.
//!
//! A [`RecordType`] is an ordered, immutable field schema. A [`TableType`]
//! binds a table name to the one [`RowType`] every row must have. Both are
//! shared behind `Arc` so records and tables can point at their type
//! without copying it.

use std::fmt;
use std::sync::Arc;

use indexmap::IndexMap;

use crate::error::TypeError;
use crate::value::Value;

/// Name of the bare string kind, as reported in shape names and errors.
pub const STRING_KIND: &str = "string";

/// Name of the predefined string table type.
pub const STRING_TABLE: &str = "StringTable";

/// Declared kind of a record member.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FieldKind {
    /// A bare character string.
    String,
    /// A nested structure.
    Record(Arc<RecordType>),
    /// A nested internal table.
    Table(Arc<TableType>),
}

impl FieldKind {
    /// Shape name of this kind.
    pub fn name(&self) -> &str {
        match self {
            Self::String => STRING_KIND,
            Self::Record(ty) => ty.name(),
            Self::Table(ty) => ty.name(),
        }
    }

    /// Returns `true` if `value` has the shape this kind declares.
    ///
    /// Nested tables match on row type, so any table whose rows have the
    /// declared shape may be assigned regardless of its own type name.
    pub fn accepts(&self, value: &Value) -> bool {
        match (self, value) {
            (Self::String, Value::String(_)) => true,
            (Self::Record(ty), Value::Record(record)) => same_type(ty, record.record_type()),
            (Self::Table(ty), Value::Table(table)) => ty.row_type() == table.row_type(),
            _ => false,
        }
    }
}

fn same_type(a: &Arc<RecordType>, b: &Arc<RecordType>) -> bool {
    Arc::ptr_eq(a, b) || a == b
}

/// A named, ordered field schema.
///
/// Field order is declaration order and drives serialization order.
/// Equality compares the name and the field map, so two independently
/// declared types with the same name and members are the same shape.
///
/// # Examples
///
/// ```
/// use abapx_core::RecordType;
///
/// let ty = RecordType::builder("PLAIN_STRUCT")
///     .string("PYTHON")
///     .string("LINUX")
///     .build()
///     .unwrap();
///
/// assert_eq!(ty.name(), "PLAIN_STRUCT");
/// let names: Vec<_> = ty.fields().map(|(name, _)| name).collect();
/// assert_eq!(names, ["PYTHON", "LINUX"]);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RecordType {
    name: String,
    fields: IndexMap<String, FieldKind>,
}

impl RecordType {
    /// Start declaring a record type called `name`.
    pub fn builder(name: impl Into<String>) -> RecordTypeBuilder {
        RecordTypeBuilder {
            name: name.into(),
            fields: IndexMap::new(),
            duplicate: None,
        }
    }

    /// The type name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Iterate over `(member, kind)` pairs in declaration order.
    pub fn fields(&self) -> impl Iterator<Item = (&str, &FieldKind)> {
        self.fields.iter().map(|(name, kind)| (name.as_str(), kind))
    }

    /// Declared kind of `member`, if the type has it.
    pub fn field_kind(&self, member: &str) -> Option<&FieldKind> {
        self.fields.get(member)
    }

    /// Returns `true` if `member` is declared.
    pub fn contains(&self, member: &str) -> bool {
        self.fields.contains_key(member)
    }

    /// Number of declared members.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Returns `true` if the type declares no members.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Declaration index of `member`.
    pub(crate) fn position(&self, member: &str) -> Option<usize> {
        self.fields.get_index_of(member)
    }

    /// Member name and kind at declaration index `index`.
    pub(crate) fn field_at(&self, index: usize) -> Option<(&str, &FieldKind)> {
        self.fields
            .get_index(index)
            .map(|(name, kind)| (name.as_str(), kind))
    }
}

impl fmt::Display for RecordType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

/// Builder for [`RecordType`].
///
/// Members are kept in the order they are declared. Declaring a member
/// twice is reported by [`build`](RecordTypeBuilder::build).
#[derive(Debug)]
pub struct RecordTypeBuilder {
    name: String,
    fields: IndexMap<String, FieldKind>,
    duplicate: Option<String>,
}

impl RecordTypeBuilder {
    /// Declare a member of the given kind.
    pub fn field(mut self, member: impl Into<String>, kind: FieldKind) -> Self {
        let member = member.into();
        if self.fields.contains_key(&member) {
            self.duplicate.get_or_insert(member);
        } else {
            self.fields.insert(member, kind);
        }
        self
    }

    /// Declare a string member.
    pub fn string(self, member: impl Into<String>) -> Self {
        self.field(member, FieldKind::String)
    }

    /// Declare a nested structure member.
    pub fn record(self, member: impl Into<String>, ty: &Arc<RecordType>) -> Self {
        self.field(member, FieldKind::Record(Arc::clone(ty)))
    }

    /// Declare a nested table member.
    pub fn table(self, member: impl Into<String>, ty: &Arc<TableType>) -> Self {
        self.field(member, FieldKind::Table(Arc::clone(ty)))
    }

    /// Finish the declaration.
    pub fn build(self) -> Result<Arc<RecordType>, TypeError> {
        if let Some(member) = self.duplicate {
            return Err(TypeError::DuplicateMember {
                type_name: self.name,
                member,
            });
        }
        Ok(Arc::new(RecordType {
            name: self.name,
            fields: self.fields,
        }))
    }
}

/// The shape every row of a table must have.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RowType {
    /// Rows are bare strings.
    String,
    /// Rows are records of one type.
    Record(Arc<RecordType>),
}

impl RowType {
    /// Shape name of the row type.
    pub fn name(&self) -> &str {
        match self {
            Self::String => STRING_KIND,
            Self::Record(ty) => ty.name(),
        }
    }

    /// Returns `true` if `value` can be stored as a row of this type.
    pub fn accepts(&self, value: &Value) -> bool {
        match (self, value) {
            (Self::String, Value::String(_)) => true,
            (Self::Record(ty), Value::Record(record)) => same_type(ty, record.record_type()),
            _ => false,
        }
    }

    /// Returns `true` if rows are scalar values rather than records.
    pub fn is_scalar(&self) -> bool {
        matches!(self, Self::String)
    }
}

/// A named internal table type with a fixed row type.
///
/// # Examples
///
/// ```
/// use abapx_core::{RecordType, RowType, TableType};
///
/// let row = RecordType::builder("PLAIN_STRUCT").string("PYTHON").build().unwrap();
/// let ty = TableType::of_records("PLAIN_STRUCT_TT", &row);
///
/// assert_eq!(ty.name(), "PLAIN_STRUCT_TT");
/// assert_eq!(ty.row_type(), &RowType::Record(row));
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TableType {
    name: String,
    row: RowType,
}

impl TableType {
    /// Declare a table type.
    pub fn new(name: impl Into<String>, row: RowType) -> Arc<Self> {
        Arc::new(Self {
            name: name.into(),
            row,
        })
    }

    /// Declare a table type whose rows are records of `row`.
    pub fn of_records(name: impl Into<String>, row: &Arc<RecordType>) -> Arc<Self> {
        Self::new(name, RowType::Record(Arc::clone(row)))
    }

    /// The predefined table of bare strings.
    pub fn string_table() -> Arc<Self> {
        Self::new(STRING_TABLE, RowType::String)
    }

    /// The type name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The row type.
    pub fn row_type(&self) -> &RowType {
        &self.row
    }
}

impl fmt::Display for TableType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}
