//! Predicate-to-search-query translation scenarios.

use quill_schema::definition::Definition;
use quill_schema::keyword::Keyword;
use quill_schema::predicate::{Condition, Predicate};
use quill_schema::value::{LexicalCodec, StringCodec, Value, ValueType};
use quill_search::ast::{self, SearchQuery};
use quill_search::{SearchQueries, TYPE_FIELD};
use similar_asserts::assert_eq;

fn age() -> Keyword {
    Keyword::new("age", ValueType::Integer)
}

#[test]
fn equals_compiles_to_a_term_query() {
    let codec = LexicalCodec;
    let queries = SearchQueries::new(&codec);
    let query = queries
        .query(&Predicate::where_(age(), Condition::Equals(12.into())))
        .unwrap();
    assert_eq!(
        query,
        SearchQuery::Term {
            field: "age".to_string(),
            value: codec.encode(ValueType::Integer, &Value::Integer(12)),
        }
    );
}

#[test]
fn the_record_query_discriminates_on_the_reserved_type_field() {
    let people = Definition::new("people", [age()]);
    assert_eq!(
        ast::record_query(&people),
        SearchQuery::Term {
            field: TYPE_FIELD.to_string(),
            value: "people".to_string(),
        }
    );
}

#[test]
fn range_boundaries_come_from_the_shared_codec() {
    let codec = LexicalCodec;
    let queries = SearchQueries::new(&codec);
    let query = queries
        .query(&Predicate::where_(
            age(),
            Condition::Between(10.into(), 20.into()),
        ))
        .unwrap();
    assert_eq!(
        query,
        SearchQuery::Range {
            field: "age".to_string(),
            lower: Some(codec.encode(ValueType::Integer, &Value::Integer(10))),
            upper: Some(codec.encode(ValueType::Integer, &Value::Integer(20))),
            include_lower: true,
            include_upper: true,
        }
    );
}

#[test]
fn strict_comparisons_exclude_their_bound() {
    let codec = LexicalCodec;
    let queries = SearchQueries::new(&codec);
    let query = queries
        .query(&Predicate::where_(age(), Condition::GreaterThan(12.into())))
        .unwrap();
    match query {
        SearchQuery::Range {
            include_lower,
            include_upper,
            upper,
            ..
        } => {
            assert!(!include_lower);
            assert!(include_upper);
            assert_eq!(upper, None);
        }
        other => panic!("expected a range query, got {other:?}"),
    }
}

#[test]
fn negation_is_seeded_with_a_match_all_should_clause() {
    let codec = LexicalCodec;
    let queries = SearchQueries::new(&codec);
    let query = queries
        .query(&Predicate::not(Predicate::where_(
            age(),
            Condition::Equals(12.into()),
        )))
        .unwrap();
    match query {
        SearchQuery::Boolean {
            must,
            should,
            must_not,
        } => {
            assert!(must.is_empty());
            assert_eq!(should, vec![SearchQuery::MatchAll]);
            assert_eq!(must_not.len(), 1);
        }
        other => panic!("expected a boolean query, got {other:?}"),
    }
}

#[test]
fn is_null_is_the_negated_unbounded_range() {
    let codec = LexicalCodec;
    let queries = SearchQueries::new(&codec);
    let query = queries
        .query(&Predicate::where_(age(), Condition::IsNull))
        .unwrap();
    assert_eq!(
        query,
        ast::not(vec![SearchQuery::Range {
            field: "age".to_string(),
            lower: None,
            upper: None,
            include_lower: true,
            include_upper: true,
        }])
    );
}

#[test]
fn in_compiles_to_a_disjunction_of_terms() {
    let codec = LexicalCodec;
    let queries = SearchQueries::new(&codec);
    let query = queries
        .query(&Predicate::where_(
            age(),
            Condition::In(vec![10.into(), 20.into()]),
        ))
        .unwrap();
    match query {
        SearchQuery::Boolean { should, .. } => assert_eq!(should.len(), 2),
        other => panic!("expected a boolean query, got {other:?}"),
    }
}

#[test]
fn string_matches_compile_to_prefix_and_wildcard_queries() {
    let codec = LexicalCodec;
    let queries = SearchQueries::new(&codec);
    let name = Keyword::new("first_name", ValueType::Text);

    let starts = queries
        .query(&Predicate::where_(
            name.clone(),
            Condition::StartsWith("da".into()),
        ))
        .unwrap();
    let contains = queries
        .query(&Predicate::where_(
            name.clone(),
            Condition::Contains("a".into()),
        ))
        .unwrap();
    let ends = queries
        .query(&Predicate::where_(name, Condition::EndsWith("n".into())))
        .unwrap();

    assert_eq!(
        starts,
        SearchQuery::Prefix {
            field: "first_name".to_string(),
            value: "da".to_string(),
        }
    );
    assert_eq!(
        contains,
        SearchQuery::Wildcard {
            field: "first_name".to_string(),
            pattern: "*a*".to_string(),
        }
    );
    assert_eq!(
        ends,
        SearchQuery::Wildcard {
            field: "first_name".to_string(),
            pattern: "*n".to_string(),
        }
    );
}

#[test]
fn both_backends_agree_on_boundary_encoding() {
    let codec = LexicalCodec;
    let queries = SearchQueries::new(&codec);
    let term = queries
        .query(&Predicate::where_(age(), Condition::Equals(12.into())))
        .unwrap();
    let range = queries
        .query(&Predicate::where_(
            age(),
            Condition::GreaterThanOrEqualTo(12.into()),
        ))
        .unwrap();
    let encoded = codec.encode(ValueType::Integer, &Value::Integer(12));
    match (term, range) {
        (SearchQuery::Term { value, .. }, SearchQuery::Range { lower, .. }) => {
            assert_eq!(value, encoded);
            assert_eq!(lower, Some(encoded));
        }
        other => panic!("unexpected queries: {other:?}"),
    }
}

#[test]
fn queries_serialize_to_the_engine_json_shape() {
    let codec = LexicalCodec;
    let queries = SearchQueries::new(&codec);
    let query = queries
        .query(&Predicate::and(vec![
            Predicate::where_(
                Keyword::new("first_name", ValueType::Text),
                Condition::Equals("dan".into()),
            ),
            Predicate::AlwaysTrue,
        ]))
        .unwrap();
    let json = serde_json::to_value(&query).unwrap();
    assert_eq!(
        json,
        serde_json::json!({
            "boolean": {
                "must": [
                    { "term": { "field": "first_name", "value": "dan" } },
                    "match_all"
                ],
                "should": [],
                "must_not": []
            }
        })
    );
}
