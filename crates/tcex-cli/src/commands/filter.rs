//! Parsing of `--filter` and `--has` clauses.
//!
//! A clause is `keyword:operator:value`; a `--has` clause prefixes the
//! keyword with a relation, as in `hasTag.name:eq:APT`. Values for `in` and
//! `not in` are comma-separated.

use tcex_core::{AppError, AppResult};
use tcex_tql::{FieldType, ResourceFilter, TqlOperator, TqlValue};

/// Apply every clause to `filter`. Each `--has` clause opens its own sub-query.
pub fn apply(filter: &mut ResourceFilter<'_>, filters: &[String], has: &[String]) -> AppResult<()> {
    for clause in filters {
        add_clause(filter, clause)?;
    }
    for clause in has {
        let (relation, rest) = clause.split_once('.').ok_or_else(|| {
            AppError::validation(format!(
                "Invalid --has clause '{clause}', expected relation.keyword:operator:value"
            ))
        })?;
        let mut child = filter.has(relation)?;
        add_clause(&mut child, rest)?;
    }
    Ok(())
}

fn add_clause(filter: &mut ResourceFilter<'_>, clause: &str) -> AppResult<()> {
    let mut parts = clause.splitn(3, ':');
    let (Some(keyword), Some(operator), Some(raw)) = (parts.next(), parts.next(), parts.next())
    else {
        return Err(AppError::validation(format!(
            "Invalid filter '{clause}', expected keyword:operator:value"
        )));
    };
    let operator: TqlOperator = operator.parse()?;
    let field_type = filter
        .spec()
        .field(keyword)
        .map(|f| f.field_type)
        .unwrap_or(FieldType::String);
    let value = parse_value(field_type, operator, raw)?;
    filter.add(keyword, operator, value)?;
    Ok(())
}

/// Interpret `raw` according to the field type.
fn parse_value(field_type: FieldType, operator: TqlOperator, raw: &str) -> AppResult<TqlValue> {
    if operator.is_list() {
        let items: Vec<&str> = raw.split(',').map(str::trim).collect();
        return match field_type {
            FieldType::Integer => items
                .iter()
                .map(|i| parse_int(i))
                .collect::<AppResult<Vec<_>>>()
                .map(TqlValue::from),
            _ => Ok(TqlValue::from(items)),
        };
    }
    match field_type {
        FieldType::Boolean => match raw.to_ascii_lowercase().as_str() {
            "true" => Ok(TqlValue::Boolean(true)),
            "false" => Ok(TqlValue::Boolean(false)),
            _ => Err(AppError::validation(format!("'{raw}' is not a boolean"))),
        },
        FieldType::Integer => parse_int(raw).map(TqlValue::Integer),
        FieldType::String | FieldType::Date => Ok(TqlValue::from(raw)),
    }
}

fn parse_int(raw: &str) -> AppResult<i64> {
    raw.parse()
        .map_err(|_| AppError::validation(format!("'{raw}' is not an integer")))
}
