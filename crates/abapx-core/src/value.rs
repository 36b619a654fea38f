//! The closed set of value shapes: strings, records, and tables.

use crate::record::Record;
use crate::schema::STRING_KIND;
use crate::table::Table;

/// An owned member value or table row.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Value {
    /// A bare character string.
    String(String),
    /// A structure.
    Record(Record),
    /// An internal table.
    Table(Table),
}

impl Value {
    /// Shape name: `string`, or the record or table type name.
    pub fn type_name(&self) -> &str {
        self.as_value_ref().type_name()
    }

    /// Borrow this value as a [`ValueRef`].
    pub fn as_value_ref(&self) -> ValueRef<'_> {
        ValueRef::from(self)
    }

    /// The string, if this is a string value.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            _ => None,
        }
    }

    /// The record, if this is a record value.
    pub fn as_record(&self) -> Option<&Record> {
        match self {
            Self::Record(record) => Some(record),
            _ => None,
        }
    }

    /// The table, if this is a table value.
    pub fn as_table(&self) -> Option<&Table> {
        match self {
            Self::Table(table) => Some(table),
            _ => None,
        }
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Self::String(s)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Self::String(s.to_owned())
    }
}

impl From<Record> for Value {
    fn from(record: Record) -> Self {
        Self::Record(record)
    }
}

impl From<Table> for Value {
    fn from(table: Table) -> Self {
        Self::Table(table)
    }
}

/// A borrowed value of any shape.
///
/// Lets callers hand a record, a table, or a string to code that
/// walks values without first wrapping it in an owned [`Value`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ValueRef<'a> {
    /// A bare character string.
    String(&'a str),
    /// A structure.
    Record(&'a Record),
    /// An internal table.
    Table(&'a Table),
}

impl<'a> ValueRef<'a> {
    /// Shape name: `string`, or the record or table type name.
    pub fn type_name(&self) -> &'a str {
        match *self {
            Self::String(_) => STRING_KIND,
            Self::Record(record) => record.type_name(),
            Self::Table(table) => table.type_name(),
        }
    }
}

impl<'a> From<&'a Value> for ValueRef<'a> {
    fn from(value: &'a Value) -> Self {
        match value {
            Value::String(s) => Self::String(s),
            Value::Record(record) => Self::Record(record),
            Value::Table(table) => Self::Table(table),
        }
    }
}

impl<'a> From<&'a str> for ValueRef<'a> {
    fn from(s: &'a str) -> Self {
        Self::String(s)
    }
}

impl<'a> From<&'a Record> for ValueRef<'a> {
    fn from(record: &'a Record) -> Self {
        Self::Record(record)
    }
}

impl<'a> From<&'a Table> for ValueRef<'a> {
    fn from(table: &'a Table) -> Self {
        Self::Table(table)
    }
}
