//! Record instances: fixed-member values of a [`RecordType`].

use std::sync::Arc;

use crate::error::TypeError;
use crate::schema::RecordType;
use crate::value::Value;

/// A value conforming to a [`RecordType`].
///
/// Holds one slot per declared member, in declaration order. A slot is
/// `None` until it is assigned; unset members are never defaulted to an
/// empty string.
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
///
/// let plain = Record::with_fields(&ty, [("PYTHON", "3.7")]).unwrap();
/// assert_eq!(plain.get_str("PYTHON"), Some("3.7"));
/// assert!(plain.get("LINUX").is_none());
///
/// let err = Record::with_fields(&ty, [("JAVASCRIPT", "@")]).unwrap_err();
/// assert_eq!(err.to_string(), "PLAIN_STRUCT does not define member JAVASCRIPT");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Record {
    ty: Arc<RecordType>,
    values: Vec<Option<Value>>,
}

impl Record {
    /// Create a record with every member unset.
    pub fn new(ty: &Arc<RecordType>) -> Self {
        Self {
            ty: Arc::clone(ty),
            values: vec![None; ty.len()],
        }
    }

    /// Create a record with the given members set and the rest unset.
    ///
    /// Every pair is validated before any member is assigned.
    pub fn with_fields<I, K, V>(ty: &Arc<RecordType>, fields: I) -> Result<Self, TypeError>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<Value>,
    {
        let mut record = Self::new(ty);
        let staged = fields
            .into_iter()
            .map(|(member, value)| {
                let value = value.into();
                record.check(member.as_ref(), &value).map(|idx| (idx, value))
            })
            .collect::<Result<Vec<_>, _>>()?;
        for (idx, value) in staged {
            record.values[idx] = Some(value);
        }
        Ok(record)
    }

    /// The record's type.
    pub fn record_type(&self) -> &Arc<RecordType> {
        &self.ty
    }

    /// Name of the record's type.
    pub fn type_name(&self) -> &str {
        self.ty.name()
    }

    /// Current value of `member`, or `None` if it is unset or undeclared.
    pub fn get(&self, member: &str) -> Option<&Value> {
        self.ty
            .position(member)
            .and_then(|idx| self.values[idx].as_ref())
    }

    /// Current value of a string member.
    pub fn get_str(&self, member: &str) -> Option<&str> {
        self.get(member).and_then(Value::as_str)
    }

    /// Returns `true` if `member` currently holds a value.
    pub fn is_set(&self, member: &str) -> bool {
        self.get(member).is_some()
    }

    /// Assign `member`, returning its previous value.
    pub fn set(
        &mut self,
        member: &str,
        value: impl Into<Value>,
    ) -> Result<Option<Value>, TypeError> {
        let value = value.into();
        let idx = self.check(member, &value)?;
        Ok(self.values[idx].replace(value))
    }

    /// Clear `member`, returning its previous value.
    pub fn unset(&mut self, member: &str) -> Result<Option<Value>, TypeError> {
        let idx = self.position(member)?;
        Ok(self.values[idx].take())
    }

    /// Iterate over `(member, value)` pairs in declaration order.
    ///
    /// Unset members are yielded with `None`.
    pub fn iter(&self) -> impl Iterator<Item = (&str, Option<&Value>)> {
        self.values
            .iter()
            .enumerate()
            .filter_map(move |(idx, value)| {
                self.ty
                    .field_at(idx)
                    .map(|(member, _)| (member, value.as_ref()))
            })
    }

    fn position(&self, member: &str) -> Result<usize, TypeError> {
        self.ty
            .position(member)
            .ok_or_else(|| TypeError::UnknownMember {
                type_name: self.ty.name().to_owned(),
                member: member.to_owned(),
            })
    }

    /// Resolve `member` and check that `value` fits its declared kind.
    fn check(&self, member: &str, value: &Value) -> Result<usize, TypeError> {
        let idx = self.position(member)?;
        match self.ty.field_at(idx) {
            Some((_, kind)) if !kind.accepts(value) => Err(TypeError::FieldKindMismatch {
                type_name: self.ty.name().to_owned(),
                member: member.to_owned(),
                expected: kind.name().to_owned(),
                found: value.type_name().to_owned(),
            }),
            _ => Ok(idx),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::TableType;
    use crate::table::Table;
    use proptest::prelude::*;

    fn plain() -> Arc<RecordType> {
        RecordType::builder("PLAIN_STRUCT")
            .string("PYTHON")
            .string("LINUX")
            .build()
            .unwrap()
    }

    #[test]
    fn new_record_is_all_unset() {
        let record = Record::new(&plain());
        assert!(record.get("PYTHON").is_none());
        assert!(record.get("LINUX").is_none());
        assert!(record.iter().all(|(_, value)| value.is_none()));
    }

    #[test]
    fn set_and_unset_round_trip() {
        let mut record = Record::new(&plain());
        assert_eq!(record.set("LINUX", "Fedora").unwrap(), None);
        assert_eq!(
            record.set("LINUX", "CentOS").unwrap(),
            Some(Value::from("Fedora"))
        );
        assert_eq!(record.get_str("LINUX"), Some("CentOS"));
        assert_eq!(record.unset("LINUX").unwrap(), Some(Value::from("CentOS")));
        assert!(!record.is_set("LINUX"));
    }

    #[test]
    fn set_unknown_member_fails() {
        let mut record = Record::new(&plain());
        let err = record.set("JAVASCRIPT", "@").unwrap_err();
        assert_eq!(err.to_string(), "PLAIN_STRUCT does not define member JAVASCRIPT");
        assert!(record.unset("JAVASCRIPT").is_err());
    }

    #[test]
    fn set_wrong_kind_fails_without_mutation() {
        let mut record = Record::with_fields(&plain(), [("PYTHON", "3.7")]).unwrap();
        let err = record
            .set("PYTHON", Table::strings(["3.6"]))
            .unwrap_err();
        assert_eq!(
            err.to_string(),
            "member PYTHON of PLAIN_STRUCT expects string but got StringTable"
        );
        assert_eq!(record.get_str("PYTHON"), Some("3.7"));
    }

    #[test]
    fn with_fields_validates_before_assigning() {
        let err = Record::with_fields(&plain(), [("PYTHON", "3.7"), ("RUBY", "3.2")]).unwrap_err();
        assert_eq!(
            err,
            TypeError::UnknownMember {
                type_name: "PLAIN_STRUCT".into(),
                member: "RUBY".into(),
            }
        );
    }

    #[test]
    fn nested_members_accept_matching_values() {
        let distros = TableType::string_table();
        let ty = RecordType::builder("STRUCT_WITH_STRING_TABLE")
            .string("PYTHON")
            .table("DISTROS", &distros)
            .build()
            .unwrap();
        let record = Record::with_fields(
            &ty,
            [
                ("PYTHON", Value::from("3.7")),
                ("DISTROS", Value::from(Table::strings(["Fedora", "CentOS"]))),
            ],
        )
        .unwrap();
        let table = record.get("DISTROS").and_then(Value::as_table).unwrap();
        assert_eq!(table.len(), 2);
    }

    #[test]
    fn iter_follows_declaration_order() {
        let record = Record::with_fields(&plain(), [("LINUX", "Fedora"), ("PYTHON", "3.7")]).unwrap();
        let members: Vec<_> = record.iter().map(|(member, _)| member).collect();
        assert_eq!(members, ["PYTHON", "LINUX"]);
    }

    proptest! {
        #[test]
        fn subset_sets_exactly_those_members(mask in prop::collection::vec(any::<bool>(), 6)) {
            let mut builder = RecordType::builder("WIDE");
            for i in 0..mask.len() {
                builder = builder.string(format!("F{i}"));
            }
            let ty = builder.build().unwrap();

            let chosen: Vec<(String, String)> = mask
                .iter()
                .enumerate()
                .filter(|(_, on)| **on)
                .map(|(i, _)| (format!("F{i}"), format!("v{i}")))
                .collect();
            let record = Record::with_fields(&ty, chosen).unwrap();

            for (i, &on) in mask.iter().enumerate() {
                let member = format!("F{i}");
                if on {
                    let expected = format!("v{i}");
                    prop_assert_eq!(record.get_str(&member), Some(expected.as_str()));
                } else {
                    prop_assert!(record.get(&member).is_none());
                }
            }
        }
    }
}
