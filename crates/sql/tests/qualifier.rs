//! The qualifier rewrite pass.

use std::collections::BTreeMap;

use quill_schema::definition::Definition;
use quill_schema::keyword::Keyword;
use quill_schema::value::ValueType;
use quill_sql::sql::ast::{
    ColumnReference, DerivedColumn, Expression, SetFunction,
};
use quill_sql::sql::helpers::{column, derived_column, simple_select, table_primary};
use quill_sql::sql::qualifier::Qualifier;
use similar_asserts::assert_eq;

fn people() -> Definition {
    Definition::new(
        "people",
        [
            Keyword::new("age", ValueType::Integer),
            Keyword::new("first_name", ValueType::Text),
        ],
    )
}

#[test]
fn unqualified_columns_take_the_alias() {
    let qualifier = Qualifier::new("t0");
    let qualified = qualifier.qualify_expression(column(&Keyword::new("age", ValueType::Integer)));
    assert_eq!(qualified.text(), "t0.age");
}

#[test]
fn existing_qualifiers_are_kept() {
    let qualifier = Qualifier::new("t0");
    let already = Expression::Column(ColumnReference {
        name: "age".to_string(),
        qualifier: Some("p".to_string()),
    });
    assert_eq!(qualifier.qualify_expression(already).text(), "p.age");
}

#[test]
fn qualification_is_idempotent() {
    let definition = people();
    let columns = definition.columns().iter().map(derived_column).collect();
    let select = simple_select(table_primary(&definition), columns);

    let qualifier = Qualifier::new("t0");
    let once = qualifier.qualify_select(select);
    let twice = qualifier.qualify_select(once.clone());
    assert_eq!(once.sql().text, twice.sql().text);
}

#[test]
fn an_explicit_table_alias_is_never_overwritten() {
    let definition = people();
    let mut from = table_primary(&definition);
    from.alias = Some("users".to_string());
    let select = simple_select(from, vec![]);

    let qualified = Qualifier::new("t0").qualify_select(select);
    assert_eq!(qualified.sql().text, "SELECT * FROM people AS users");
}

#[test]
fn a_missing_table_alias_is_filled_in() {
    let definition = people();
    let select = simple_select(table_primary(&definition), vec![]);
    let qualified = Qualifier::new("t0").qualify_select(select);
    assert_eq!(qualified.sql().text, "SELECT * FROM people AS t0");
}

#[test]
fn aliased_derived_columns_rescope_through_the_resolver() {
    let resolver = BTreeMap::from([("people_age".to_string(), "p1".to_string())]);
    let qualifier = Qualifier::with_columns("t0", resolver);

    let rescoped = qualifier.qualify_derived_column(DerivedColumn {
        value: column(&Keyword::new("age", ValueType::Integer)),
        alias: Some("people_age".to_string()),
    });
    let kept = qualifier.qualify_derived_column(DerivedColumn {
        value: column(&Keyword::new("age", ValueType::Integer)),
        alias: Some("unknown_alias".to_string()),
    });

    assert_eq!(rescoped.value.text(), "p1.age");
    assert_eq!(kept.value.text(), "t0.age");
}

#[test]
fn set_functions_keep_their_shape_but_qualify_the_argument() {
    let qualifier = Qualifier::new("t0");
    let aggregate = Expression::SetFunction(SetFunction {
        function: "count".to_string(),
        argument: ColumnReference {
            name: "age".to_string(),
            qualifier: None,
        },
        separator: None,
    });
    assert_eq!(qualifier.qualify_expression(aggregate).text(), "count(t0.age)");
}

#[test]
fn literal_text_and_parameters_are_untouched() {
    let qualifier = Qualifier::new("t0");
    let literal = quill_sql::sql::helpers::parametrized(
        "age = ?",
        vec![quill_schema::value::Value::Integer(12)],
    );
    let qualified = qualifier.qualify_expression(literal.clone());
    assert_eq!(qualified, literal);
}

#[test]
fn tables_with_spaces_render_quoted_after_qualification() {
    let definition = Definition::new("some table", [Keyword::new("age", ValueType::Integer)]);
    let columns = definition.columns().iter().map(derived_column).collect();
    let select =
        Qualifier::new("t0").qualify_select(simple_select(table_primary(&definition), columns));
    assert_eq!(
        select.sql().text,
        "SELECT t0.age FROM \"some table\" AS t0"
    );
}
