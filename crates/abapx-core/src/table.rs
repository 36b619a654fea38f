//! Internal tables: ordered, row-type-checked containers.

use std::ops::Index;
use std::sync::Arc;

use smallvec::SmallVec;

use crate::error::TypeError;
use crate::record::Record;
use crate::schema::{RowType, TableType};
use crate::value::Value;

/// Arguments for [`Table::append`].
///
/// Either exactly one positional row, or keyword members used to build a
/// new record row. The checks for mixing, missing, and extra arguments
/// happen in [`Table::append`] before the table is touched.
#[derive(Clone, Debug, Default)]
pub struct AppendArgs {
    positional: SmallVec<[Value; 1]>,
    keywords: Vec<(String, Value)>,
}

impl AppendArgs {
    /// Empty argument list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a positional row.
    pub fn row(mut self, row: impl Into<Value>) -> Self {
        self.positional.push(row.into());
        self
    }

    /// Add a keyword member.
    pub fn field(mut self, member: impl Into<String>, value: impl Into<Value>) -> Self {
        self.keywords.push((member.into(), value.into()));
        self
    }
}

/// An ordered sequence of rows of one [`RowType`].
///
/// Duplicates are allowed and insertion order is iteration order. Every
/// mutation checks row shapes first, so a failed call never changes
/// the table.
///
/// # Examples
///
/// ```
/// use abapx_core::{AppendArgs, RecordType, Table, TableType};
///
/// let row = RecordType::builder("PLAIN_STRUCT")
///     .string("PYTHON")
///     .string("LINUX")
///     .build()
///     .unwrap();
/// let ty = TableType::of_records("PLAIN_STRUCT_TT", &row);
///
/// let mut table = Table::new(&ty);
/// table.append_fields([("PYTHON", "3.7"), ("LINUX", "4.20")]).unwrap();
/// assert_eq!(table.len(), 1);
///
/// let err = table.append(AppendArgs::new()).unwrap_err();
/// assert_eq!(err.to_string(), "no parameters given");
/// assert_eq!(table.len(), 1);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Table {
    ty: Arc<TableType>,
    rows: Vec<Value>,
}

impl Table {
    /// Create an empty table.
    pub fn new(ty: &Arc<TableType>) -> Self {
        Self {
            ty: Arc::clone(ty),
            rows: Vec::new(),
        }
    }

    /// Create a table holding a single row.
    pub fn from_row(ty: &Arc<TableType>, row: impl Into<Value>) -> Result<Self, TypeError> {
        Self::from_rows(ty, [row])
    }

    /// Create a table from rows, kept in the order given.
    ///
    /// Each row is checked; the first mismatch fails the whole call.
    pub fn from_rows<I, V>(ty: &Arc<TableType>, rows: I) -> Result<Self, TypeError>
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        let mut table = Self::new(ty);
        table.rows = rows
            .into_iter()
            .map(|row| {
                let row = row.into();
                table.check_row(&row).map(|()| row)
            })
            .collect::<Result<_, _>>()?;
        Ok(table)
    }

    /// Create a table by copying the rows of `other`.
    ///
    /// The copy is deep, so later changes to `other` are not seen here.
    /// Fails unless `other` has exactly this table's row type.
    pub fn from_table(ty: &Arc<TableType>, other: &Table) -> Result<Self, TypeError> {
        if other.row_type() != ty.row_type() {
            return Err(TypeError::TableCopyMismatch {
                row_type: other.row_type().name().to_owned(),
            });
        }
        Ok(Self {
            ty: Arc::clone(ty),
            rows: other.rows.clone(),
        })
    }

    /// Create a [string table](TableType::string_table) from `items`.
    pub fn strings<I, S>(items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            ty: TableType::string_table(),
            rows: items
                .into_iter()
                .map(|item| Value::String(item.into()))
                .collect(),
        }
    }

    /// The table's type.
    pub fn table_type(&self) -> &Arc<TableType> {
        &self.ty
    }

    /// Name of the table's type.
    pub fn type_name(&self) -> &str {
        self.ty.name()
    }

    /// The row type.
    pub fn row_type(&self) -> &RowType {
        self.ty.row_type()
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Returns `true` if the table has no rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Row at zero-based `index`.
    pub fn get(&self, index: usize) -> Option<&Value> {
        self.rows.get(index)
    }

    /// All rows in insertion order.
    pub fn rows(&self) -> &[Value] {
        &self.rows
    }

    /// Iterate over rows in insertion order.
    pub fn iter(&self) -> std::slice::Iter<'_, Value> {
        self.rows.iter()
    }

    /// Append using either a single positional row or keyword members.
    pub fn append(&mut self, args: AppendArgs) -> Result<(), TypeError> {
        let AppendArgs {
            mut positional,
            keywords,
        } = args;
        if !positional.is_empty() && !keywords.is_empty() {
            return Err(TypeError::MixedParameters);
        }
        if positional.len() > 1 {
            return Err(TypeError::TooManyPositional {
                given: positional.len(),
            });
        }
        match positional.pop() {
            Some(row) => self.append_row(row),
            None if keywords.is_empty() => Err(TypeError::NoParameters),
            None => self.append_fields(keywords),
        }
    }

    /// Append one row after checking its shape.
    pub fn append_row(&mut self, row: impl Into<Value>) -> Result<(), TypeError> {
        let row = row.into();
        self.check_row(&row)?;
        self.rows.push(row);
        Ok(())
    }

    /// Build a record row from keyword members and append it.
    pub fn append_fields<I, K, V>(&mut self, fields: I) -> Result<(), TypeError>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<Value>,
    {
        let row = match self.row_type() {
            RowType::Record(ty) => Record::with_fields(ty, fields)?,
            RowType::String => {
                return Err(TypeError::KeywordsOnScalarRows {
                    row_type: self.row_type().name().to_owned(),
                })
            }
        };
        self.rows.push(Value::Record(row));
        Ok(())
    }

    fn check_row(&self, row: &Value) -> Result<(), TypeError> {
        if self.row_type().accepts(row) {
            Ok(())
        } else {
            Err(TypeError::RowTypeMismatch {
                value_type: row.type_name().to_owned(),
                table_type: self.row_type().name().to_owned(),
            })
        }
    }
}

impl Index<usize> for Table {
    type Output = Value;

    fn index(&self, index: usize) -> &Value {
        &self.rows[index]
    }
}

impl<'a> IntoIterator for &'a Table {
    type Item = &'a Value;
    type IntoIter = std::slice::Iter<'a, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::RecordType;

    fn plain() -> Arc<RecordType> {
        RecordType::builder("PLAIN_STRUCT")
            .string("PYTHON")
            .string("LINUX")
            .build()
            .unwrap()
    }

    fn row(python: &str, linux: &str) -> Record {
        Record::with_fields(&plain(), [("PYTHON", python), ("LINUX", linux)]).unwrap()
    }

    #[test]
    fn new_table_is_empty() {
        let ty = TableType::of_records("PLAIN_STRUCT_TT", &plain());
        let table = Table::new(&ty);
        assert!(table.is_empty());
        assert_eq!(table.row_type(), &RowType::Record(plain()));
    }

    #[test]
    fn from_rows_stops_at_first_mismatch() {
        let ty = TableType::of_records("PLAIN_STRUCT_TT", &plain());
        let err = Table::from_rows(
            &ty,
            [Value::from(row("3.7", "4.20")), Value::from("foo")],
        )
        .unwrap_err();
        assert_eq!(
            err.to_string(),
            "type of appended value string does not match table type PLAIN_STRUCT"
        );
    }

    #[test]
    fn table_is_not_a_row() {
        let ty = TableType::of_records("PLAIN_STRUCT_TT", &plain());
        let nested = Table::from_row(&ty, row("3.7", "4.20")).unwrap();
        let err = Table::from_row(&ty, nested).unwrap_err();
        assert_eq!(
            err,
            TypeError::RowTypeMismatch {
                value_type: "PLAIN_STRUCT_TT".into(),
                table_type: "PLAIN_STRUCT".into(),
            }
        );
    }

    #[test]
    fn append_fields_on_string_table_fails() {
        let mut table = Table::strings(["Fedora"]);
        let err = table.append_fields([("PYTHON", "3.7")]).unwrap_err();
        assert_eq!(
            err.to_string(),
            "cannot build a row of table type string from keyword parameters"
        );
        assert_eq!(table.len(), 1);
    }

    #[test]
    fn append_fields_unknown_member_leaves_table_unchanged() {
        let ty = TableType::of_records("PLAIN_STRUCT_TT", &plain());
        let mut table = Table::new(&ty);
        let err = table
            .append(AppendArgs::new().field("JAVASCRIPT", "@"))
            .unwrap_err();
        assert_eq!(err.to_string(), "PLAIN_STRUCT does not define member JAVASCRIPT");
        assert!(table.is_empty());
    }

    #[test]
    fn string_table_appends_strings() {
        let mut table = Table::strings(["Fedora"]);
        table.append(AppendArgs::new().row("CentOS")).unwrap();
        let rows: Vec<_> = table.iter().filter_map(Value::as_str).collect();
        assert_eq!(rows, ["Fedora", "CentOS"]);
        assert_eq!(table[1].as_str(), Some("CentOS"));
    }

    #[test]
    fn copy_is_independent_of_source() {
        let ty = TableType::of_records("PLAIN_STRUCT_TT", &plain());
        let mut source = Table::from_row(&ty, row("3.7", "4.20")).unwrap();
        let copy = Table::from_table(&ty, &source).unwrap();

        source.append_row(row("3.6", "4.19")).unwrap();

        assert_eq!(source.len(), 2);
        assert_eq!(copy.len(), 1);
        assert_eq!(copy[0], Value::from(row("3.7", "4.20")));
    }
}
