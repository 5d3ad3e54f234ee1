//! End-to-end scenarios for the public API.

use std::collections::HashSet;

use liql::{
    compile_clause, format_query, normalize, parse_select_fields, parse_where_clause, Filter,
    FormatOptions, JoinLogic, LiqlError, LiqlResponse, MappingValue, Query, RawClause,
};

fn and() -> JoinLogic {
    JoinLogic::default()
}

// ============================================================================
// WHERE scenarios
// ============================================================================

#[test]
fn pair_with_integer() {
    assert_eq!(parse_where_clause(Filter::pair("id", 5), &and()).unwrap(), "id = 5");
}

#[test]
fn triple_with_operator() {
    assert_eq!(
        parse_where_clause(Filter::triple("id", ">", 5), &and()).unwrap(),
        "id > 5"
    );
}

#[test]
fn two_pairs_joined_by_and() {
    let filter = Filter::sequence([("id", 5), ("id", 6)]);
    assert_eq!(
        parse_where_clause(filter, &"AND".into()).unwrap(),
        "id = 5 AND id = 6"
    );
}

#[test]
fn range_with_one_element_join_sequence() {
    let filter = Filter::sequence([("replies.count(*)", ">", 5), ("replies.count(*)", "<", 10)]);
    assert_eq!(
        parse_where_clause(filter, &["AND"].into()).unwrap(),
        "replies.count(*) > 5 AND replies.count(*) < 10"
    );
}

#[test]
fn one_to_one_mapping_defaults_to_and() {
    let filter = Filter::mapping([("id", 5), ("replies.count(*)", 0)]);
    assert_eq!(
        parse_where_clause(filter, &and()).unwrap(),
        "id = 5 AND replies.count(*) = 0"
    );
}

#[test]
fn text_value_is_quoted() {
    assert_eq!(
        parse_where_clause(Filter::pair("id", "abc"), &and()).unwrap(),
        "id = 'abc'"
    );
}

#[test]
fn one_to_two_mapping() {
    let filter = Filter::Mapping(vec![
        ("board.id".into(), MappingValue::Scalar("product-ideas".into())),
        ("kudos.sum(weight)".into(), MappingValue::List(vec![">=".into(), 3.into()])),
    ]);
    assert_eq!(
        parse_where_clause(filter, &and()).unwrap(),
        "board.id = 'product-ideas' AND kudos.sum(weight) >= 3"
    );
}

#[test]
fn verbatim_group_inside_sequence() {
    let filter = Filter::Sequence(vec![
        RawClause::pair("board.id", "ideas"),
        RawClause::verbatim("(depth = 0 OR depth = 1)"),
    ]);
    assert_eq!(
        parse_where_clause(filter, &and()).unwrap(),
        "board.id = 'ideas' AND (depth = 0 OR depth = 1)"
    );
}

#[test]
fn mixed_join_keywords() {
    let filter = Filter::sequence([("a", 1), ("b", 2), ("c", 3), ("d", 4)]);
    assert_eq!(
        parse_where_clause(filter, &["OR", "AND", "MATCHES"].into()).unwrap(),
        "a = 1 OR b = 2 AND c = 3 MATCHES d = 4"
    );
}

#[test]
fn set_output_has_every_clause() {
    let set: HashSet<RawClause> = [RawClause::pair("a", 1), RawClause::pair("b", 2)].into();
    let out = parse_where_clause(Filter::Set(set), &and()).unwrap();
    let mut parts: Vec<&str> = out.split(" AND ").collect();
    parts.sort_unstable();
    assert_eq!(parts, ["a = 1", "b = 2"]);
}

// ============================================================================
// Error taxonomy
// ============================================================================

#[test]
fn invalid_comparison_operator() {
    assert!(matches!(
        compile_clause(&("id", "~=", 5).into()),
        Err(LiqlError::InvalidOperator { .. })
    ));
}

#[test]
fn invalid_join_operator() {
    assert!(matches!(
        parse_where_clause(Filter::sequence([("a", 1), ("b", 2)]), &"NAND".into()),
        Err(LiqlError::InvalidOperator { .. })
    ));
}

#[test]
fn operator_mismatch_in_mapping() {
    let filter = Filter::Mapping(vec![("id".into(), MappingValue::List(vec![">".into()]))]);
    assert!(matches!(
        normalize(filter),
        Err(LiqlError::OperatorMismatch { len: 1, .. })
    ));
}

#[test]
fn operator_count_mismatch() {
    let filter = Filter::sequence([("a", 1), ("b", 2), ("c", 3), ("d", 4)]);
    assert!(matches!(
        parse_where_clause(filter, &["AND", "OR"].into()),
        Err(LiqlError::OperatorCountMismatch {
            clauses: 4,
            operators: 2
        })
    ));
}

#[test]
fn unsupported_shape_from_json() {
    let err = Filter::from_json(&serde_json::json!(42)).unwrap_err();
    assert!(matches!(err, LiqlError::UnsupportedShape { .. }));
    assert!(err.to_string().contains("number"));
}

#[test]
fn error_messages() {
    let err = LiqlError::OperatorCountMismatch {
        clauses: 3,
        operators: 5,
    };
    assert_eq!(err.to_string(), "5 join operator(s) cannot combine 3 clause(s)");

    let err = compile_clause(&("id", "~=", 5).into()).unwrap_err();
    assert_eq!(
        err.to_string(),
        "invalid operator '~=' (expected one of: =, !=, >, <, >=, <=)"
    );
}

// ============================================================================
// Full query assembly
// ============================================================================

#[test]
fn full_query_to_query_string() {
    let query = Query::select("id; subject")
        .from("messages")
        .filter(Filter::mapping([("board.id", "announcements")]))
        .order_desc("post_time")
        .limit(5)
        .build()
        .unwrap();
    assert_eq!(
        query,
        "SELECT id,subject FROM messages WHERE board.id = 'announcements' ORDER BY post_time DESC LIMIT 5"
    );

    let options = FormatOptions {
        pretty_print: true,
        ..Default::default()
    };
    assert_eq!(
        format_query(&query, &options),
        "SELECT+id,subject+FROM+messages+WHERE+board.id+%3D+'announcements'+ORDER+BY+post_time+DESC+LIMIT+5\
         &api.pretty_print=true"
    );
}

#[test]
fn json_filter_through_query() {
    let json = serde_json::json!({"id": 5, "views": [">", 100]});
    let query = Query::select(vec!["id", "views"])
        .from("messages")
        .filter(Filter::from_json(&json).unwrap())
        .join_logic("OR")
        .build()
        .unwrap();
    assert_eq!(
        query,
        "SELECT id,views FROM messages WHERE id = 5 OR views > 100"
    );
}

#[test]
fn json_verbatim_groups_joined() {
    let json = serde_json::json!(["(a = 1 OR b = 2)", "(c = 3 OR d = 4)"]);
    let filter = Filter::from_json(&json).unwrap();
    assert_eq!(
        parse_where_clause(filter, &and()).unwrap(),
        "(a = 1 OR b = 2) AND (c = 3 OR d = 4)"
    );
}

#[test]
fn json_unsigned_beyond_i64_stays_bare() {
    let json = serde_json::json!({"id": 18446744073709551615u64, "views": [">", "00042"]});
    let filter = Filter::from_json(&json).unwrap();
    assert_eq!(
        parse_where_clause(filter, &and()).unwrap(),
        "id = 18446744073709551615 AND views > 42"
    );
}

#[test]
fn select_fields_variants() {
    assert_eq!(parse_select_fields("id, login;email".into()), "id,login,email");
    assert_eq!(parse_select_fields(["id", "login"].into()), "id,login");
}

#[test]
fn paging_with_response_cursor() {
    let body = r#"{"status": "success", "data": {"type": "users", "size": 1,
        "items": [{"id": "7"}], "next_cursor": "abc123"}}"#;
    let response = LiqlResponse::from_json(body).unwrap();

    let mut query = Query::select("id").from("users").limit(1);
    if let Some(cursor) = response.cursor() {
        query = query.cursor(cursor);
    }
    assert_eq!(
        query.build().unwrap(),
        "SELECT id FROM users LIMIT 1 CURSOR 'abc123'"
    );
}
