//! Reusable type declarations and row builders.

use std::sync::Arc;

use abapx_core::{Record, RecordType, Table, TableType};

/// `PLAIN_STRUCT`: two string members, `PYTHON` then `LINUX`.
pub fn plain_struct() -> Arc<RecordType> {
    RecordType::builder("PLAIN_STRUCT")
        .string("PYTHON")
        .string("LINUX")
        .build()
        .expect("fixture declares unique members")
}

/// `PLAIN_STRUCT_TT`: a table of [`plain_struct`] rows.
pub fn plain_struct_tt() -> Arc<TableType> {
    TableType::of_records("PLAIN_STRUCT_TT", &plain_struct())
}

/// `STRUCT_WITH_STRING_TABLE`: `PYTHON`, `LINUX`, and a `DISTROS` string table.
pub fn struct_with_string_table() -> Arc<RecordType> {
    RecordType::builder("STRUCT_WITH_STRING_TABLE")
        .string("PYTHON")
        .string("LINUX")
        .table("DISTROS", &TableType::string_table())
        .build()
        .expect("fixture declares unique members")
}

/// A record type with `n` string members named `F0..F{n-1}`.
pub fn wide_struct(n: usize) -> Arc<RecordType> {
    (0..n)
        .fold(RecordType::builder("WIDE_STRUCT"), |builder, i| {
            builder.string(format!("F{i}"))
        })
        .build()
        .expect("fixture declares unique members")
}

/// A fully populated `PLAIN_STRUCT` row.
pub fn plain_row(python: &str, linux: &str) -> Record {
    Record::with_fields(&plain_struct(), [("PYTHON", python), ("LINUX", linux)])
        .expect("fixture members are declared")
}

/// A `PLAIN_STRUCT_TT` holding `(PYTHON, LINUX)` rows in order.
pub fn plain_table(rows: &[(&str, &str)]) -> Table {
    Table::from_rows(
        &plain_struct_tt(),
        rows.iter().map(|(python, linux)| plain_row(python, linux)),
    )
    .expect("fixture rows match the row type")
}
