//! Error types for record and table construction.
//!
//! Every violation is reported before the offending record or table is
//! mutated, so a failed call leaves its target exactly as it was.

use std::error::Error;
use std::fmt;

/// Errors raised while declaring types or building records and tables.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TypeError {
    /// A record was given a member its type does not declare.
    UnknownMember {
        /// Name of the record type.
        type_name: String,
        /// The undeclared member name.
        member: String,
    },
    /// A record type declaration listed the same member twice.
    DuplicateMember {
        /// Name of the record type being declared.
        type_name: String,
        /// The repeated member name.
        member: String,
    },
    /// A member was assigned a value of a different shape than declared.
    FieldKindMismatch {
        /// Name of the record type.
        type_name: String,
        /// The member being assigned.
        member: String,
        /// Declared kind of the member.
        expected: String,
        /// Shape of the offered value.
        found: String,
    },
    /// A value offered as a table row does not match the table's row type.
    RowTypeMismatch {
        /// Shape of the offered value.
        value_type: String,
        /// The table's row type.
        table_type: String,
    },
    /// A table was copied from another table with a different row type.
    TableCopyMismatch {
        /// Row type of the source table.
        row_type: String,
    },
    /// `append` received both a positional row and keyword members.
    MixedParameters,
    /// `append` received neither a positional row nor keyword members.
    NoParameters,
    /// `append` received more than one positional row.
    TooManyPositional {
        /// Number of positional rows supplied.
        given: usize,
    },
    /// Keyword members were used to build a row of a scalar table.
    KeywordsOnScalarRows {
        /// The table's row type.
        row_type: String,
    },
}

impl fmt::Display for TypeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownMember { type_name, member } => {
                write!(f, "{type_name} does not define member {member}")
            }
            Self::DuplicateMember { type_name, member } => {
                write!(f, "{type_name} already defines member {member}")
            }
            Self::FieldKindMismatch {
                type_name,
                member,
                expected,
                found,
            } => write!(
                f,
                "member {member} of {type_name} expects {expected} but got {found}"
            ),
            Self::RowTypeMismatch {
                value_type,
                table_type,
            } => write!(
                f,
                "type of appended value {value_type} does not match table type {table_type}"
            ),
            Self::TableCopyMismatch { row_type } => {
                write!(f, "cannot copy InternalTable of type {row_type}")
            }
            Self::MixedParameters => write!(f, "cannot mix positional and keyword parameters"),
            Self::NoParameters => write!(f, "no parameters given"),
            Self::TooManyPositional { given } => write!(
                f,
                "append accepts only one positional argument but {given} were given"
            ),
            Self::KeywordsOnScalarRows { row_type } => write!(
                f,
                "cannot build a row of table type {row_type} from keyword parameters"
            ),
        }
    }
}

impl Error for TypeError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_member_names_type_and_member() {
        let err = TypeError::UnknownMember {
            type_name: "PLAIN_STRUCT".into(),
            member: "JAVASCRIPT".into(),
        };
        assert_eq!(err.to_string(), "PLAIN_STRUCT does not define member JAVASCRIPT");
    }

    #[test]
    fn arity_error_reports_count() {
        let err = TypeError::TooManyPositional { given: 3 };
        assert_eq!(
            err.to_string(),
            "append accepts only one positional argument but 3 were given"
        );
    }
}
