//! Compound filter expressions for entity queries.
//!
//! Filters are sent as a single JSON-encoded `filters` query parameter.
//! A flat clause list means implicit AND; a list of lists is disjunctive
//! normal form (OR of ANDs).

use serde::{Deserialize, Serialize};

/// Comparison operator of a filter clause.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FilterOperator {
    #[serde(rename = "=")]
    Eq,
    #[serde(rename = "!=")]
    Ne,
    #[serde(rename = "<")]
    Lt,
    #[serde(rename = "<=")]
    Le,
    #[serde(rename = ">")]
    Gt,
    #[serde(rename = ">=")]
    Ge,
    #[serde(rename = "in")]
    In,
    #[serde(rename = "like")]
    Like,
    #[serde(rename = "is")]
    Is,
    #[serde(rename = "is not")]
    IsNot,
}

/// Filter comparison value: a scalar or a sequence of scalars (for `in`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FilterValue {
    String(String),
    Number(serde_json::Number),
    List(Vec<FilterValue>),
}

impl From<&str> for FilterValue {
    fn from(s: &str) -> Self {
        FilterValue::String(s.to_string())
    }
}

impl From<String> for FilterValue {
    fn from(s: String) -> Self {
        FilterValue::String(s)
    }
}

impl From<i64> for FilterValue {
    fn from(n: i64) -> Self {
        FilterValue::Number(n.into())
    }
}

impl<T: Into<FilterValue>> From<Vec<T>> for FilterValue {
    fn from(values: Vec<T>) -> Self {
        FilterValue::List(values.into_iter().map(Into::into).collect())
    }
}

/// One column comparison.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FilterClause {
    pub column: String,
    pub operator: FilterOperator,
    pub value: FilterValue,
}

impl FilterClause {
    pub fn new(
        column: impl Into<String>,
        operator: FilterOperator,
        value: impl Into<FilterValue>,
    ) -> Self {
        Self {
            column: column.into(),
            operator,
            value: value.into(),
        }
    }
}

/// A complete filter expression.
///
/// `Clauses` is the convenience form (all clauses ANDed); `Dnf` expresses
/// OR of AND-groups. Both serialize to the array shapes the API expects.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FilterExpression {
    Clauses(Vec<FilterClause>),
    Dnf(Vec<Vec<FilterClause>>),
}

impl From<Vec<FilterClause>> for FilterExpression {
    fn from(clauses: Vec<FilterClause>) -> Self {
        FilterExpression::Clauses(clauses)
    }
}

impl From<Vec<Vec<FilterClause>>> for FilterExpression {
    fn from(groups: Vec<Vec<FilterClause>>) -> Self {
        FilterExpression::Dnf(groups)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clause_serializes_to_api_shape() {
        let clause = FilterClause::new("title", FilterOperator::Eq, "Perfect");
        let json = serde_json::to_string(&clause).unwrap();
        assert_eq!(json, r#"{"column":"title","operator":"=","value":"Perfect"}"#);
    }

    #[test]
    fn test_operator_renames() {
        assert_eq!(
            serde_json::to_string(&FilterOperator::IsNot).unwrap(),
            r#""is not""#
        );
        assert_eq!(serde_json::to_string(&FilterOperator::In).unwrap(), r#""in""#);
    }

    #[test]
    fn test_in_clause_with_list_value() {
        let clause = FilterClause::new("id", FilterOperator::In, vec![1i64, 2, 3]);
        let json = serde_json::to_value(&clause).unwrap();
        assert_eq!(json["value"], serde_json::json!([1, 2, 3]));
    }

    #[test]
    fn test_flat_expression() {
        let expr: FilterExpression =
            vec![FilterClause::new("title", FilterOperator::Eq, "Perfect")].into();
        let json = serde_json::to_string(&expr).unwrap();
        assert_eq!(
            json,
            r#"[{"column":"title","operator":"=","value":"Perfect"}]"#
        );
    }

    #[test]
    fn test_dnf_expression() {
        let expr: FilterExpression = vec![
            vec![FilterClause::new("status", FilterOperator::Eq, "open")],
            vec![FilterClause::new("priority", FilterOperator::Gt, 3i64)],
        ]
        .into();
        let json = serde_json::to_value(&expr).unwrap();
        assert!(json.is_array());
        assert!(json[0].is_array());
        assert_eq!(json[1][0]["column"], "priority");
    }

    #[test]
    fn test_expression_roundtrip_distinguishes_forms() {
        let flat: FilterExpression =
            serde_json::from_str(r#"[{"column":"a","operator":"=","value":1}]"#).unwrap();
        assert!(matches!(flat, FilterExpression::Clauses(_)));
        let dnf: FilterExpression =
            serde_json::from_str(r#"[[{"column":"a","operator":"=","value":1}]]"#).unwrap();
        assert!(matches!(dnf, FilterExpression::Dnf(_)));
    }
}
