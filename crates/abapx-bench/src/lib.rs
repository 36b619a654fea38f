//! Benchmark profiles for abapx.
//!
//! Provides pre-built values of realistic size for benchmarks:
//!
//! - [`release_table`]: a `PLAIN_STRUCT_TT` with `n` rows
//! - [`nested_profile`]: a record holding a string table and a record table

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use abapx_core::{Record, RecordType, Table, TableType, Value};
use abapx_test_utils::{plain_row, plain_struct_tt};

/// A `PLAIN_STRUCT_TT` with `n` distinct rows.
pub fn release_table(n: usize) -> Table {
    Table::from_rows(
        &plain_struct_tt(),
        (0..n).map(|i| plain_row(&format!("3.{i}"), &format!("6.{i}"))),
    )
    .expect("profile rows match the row type")
}

/// A record with a `DISTROS` string table of `n` entries and a `BUILDS`
/// table of `n` rows.
pub fn nested_profile(n: usize) -> Record {
    let ty = RecordType::builder("RELEASE_PROFILE")
        .string("NAME")
        .table("DISTROS", &TableType::string_table())
        .table("BUILDS", &plain_struct_tt())
        .build()
        .expect("profile declares unique members");
    Record::with_fields(
        &ty,
        [
            ("NAME", Value::from("nightly & <stable>")),
            (
                "DISTROS",
                Value::from(Table::strings((0..n).map(|i| format!("distro-{i}")))),
            ),
            ("BUILDS", Value::from(release_table(n))),
        ],
    )
    .expect("profile members are declared")
}
