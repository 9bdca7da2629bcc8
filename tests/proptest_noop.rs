//! Property tests for the web-search operations.

use std::sync::Arc;

use proptest::prelude::*;
use websearch_sql::{Db, Order, QueryBuilder, Registry, SearchQuery, Value, WebSearchExt, install};

fn ident() -> impl Strategy<Value = String> {
    "[a-z_][a-z0-9_]{0,15}"
}

type Shape = (Vec<String>, Vec<(String, String)>, Option<String>);

fn arb_shape() -> impl Strategy<Value = Shape> {
    (
        prop::collection::vec(ident(), 0..4),
        prop::collection::vec((ident(), ".{0,12}"), 0..3),
        prop::option::of(ident()),
    )
}

fn build(db: &Db, table: &str, shape: &Shape) -> QueryBuilder {
    let (columns, filters, order) = shape;
    let mut qb = db.table(table).select(columns.clone());
    for (col, value) in filters {
        qb = qb.where_eq(col, value.as_str()).unwrap();
    }
    if let Some(col) = order {
        qb = qb.order_by(col.clone(), Order::Desc);
    }
    qb
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn absent_query_is_identity(
        table in ident(),
        column in ident(),
        shape in arb_shape(),
    ) {
        let db = install(Db::with_registry(Arc::new(Registry::new("prop"))));
        let base = build(&db, &table, &shape);
        let expected = base.to_sql().unwrap();

        let after = base
            .where_web_search(&column, SearchQuery::Absent)
            .unwrap()
            .select_web_search_rank(&column, SearchQuery::Absent)
            .unwrap();
        prop_assert_eq!(after.to_sql().unwrap(), expected);
    }

    #[test]
    fn query_text_is_always_the_last_binding(
        table in ident(),
        column in ident(),
        query in "\\PC{1,40}",
        shape in arb_shape(),
    ) {
        let db = install(Db::with_registry(Arc::new(Registry::new("prop"))));
        let base = build(&db, &table, &shape);
        let before = base.to_sql().unwrap();

        let built = base.where_web_search(&column, query.as_str()).unwrap().to_sql().unwrap();
        let predicate = format!("\"{column}\" @@ websearch_to_tsquery('simple', ?)");
        prop_assert!(built.sql.contains(&predicate));
        prop_assert_eq!(built.bindings.len(), before.bindings.len() + 1);
        prop_assert_eq!(built.bindings.last(), Some(&Value::Text(query.clone())));
    }
}
