use crate::{
    db::{
        Direction,
        pipeline::Stage,
        primitives::FilterExpr,
        store::{DocumentStore, SortSpec, memory::MemoryStore},
    },
    test_fixtures::{invoice_doc, line_doc},
    value::Value,
};

fn ids(documents: &[crate::db::document::Document]) -> Vec<u64> {
    documents
        .iter()
        .map(|doc| match doc.field("id") {
            Some(Value::Uint(id)) => *id,
            other => panic!("unexpected id value: {other:?}"),
        })
        .collect()
}

#[test]
fn count_applies_the_filter() {
    let store = MemoryStore::new();
    store.insert_many("invoice", (1..=10).map(invoice_doc));

    assert_eq!(store.count(&FilterExpr::True, "invoice").unwrap(), 10);
    assert_eq!(
        store
            .count(&FilterExpr::eq("region", "east"), "invoice")
            .unwrap(),
        5
    );
    assert_eq!(store.count(&FilterExpr::True, "missing").unwrap(), 0);
}

#[test]
fn find_sorts_skips_and_limits() {
    let store = MemoryStore::new();
    // Insertion order is deliberately shuffled.
    for id in [4u64, 1, 5, 3, 2] {
        store.insert("invoice", invoice_doc(id));
    }

    let ascending = store
        .find(&FilterExpr::True, &SortSpec::asc("id"), 1, 3, "invoice")
        .unwrap();
    assert_eq!(ids(&ascending), vec![2, 3, 4]);

    let descending = store
        .find(&FilterExpr::True, &SortSpec::desc("id"), 0, 2, "invoice")
        .unwrap();
    assert_eq!(ids(&descending), vec![5, 4]);
}

#[test]
fn lookup_attaches_matching_foreign_documents() {
    let store = MemoryStore::new();
    store.insert_many("invoice", (1..=3).map(invoice_doc));
    store.insert_many(
        "invoiceLine",
        [
            line_doc(1, "widget", "open"),
            line_doc(1, "gadget", "closed"),
            line_doc(3, "widget", "open"),
        ],
    );

    let pipeline = [
        Stage::Sort {
            field: "id".into(),
            direction: Direction::Desc,
        },
        Stage::Lookup {
            from: "invoiceLine".into(),
            local_field: "id".into(),
            foreign_field: "id".into(),
            as_field: "lines".into(),
        },
        Stage::MatchNonEmpty {
            field: "lines".into(),
        },
    ];

    let results = store.aggregate(&pipeline, "invoice").unwrap();

    // Invoice 2 has no lines and is dropped; order is the sort stage's.
    assert_eq!(ids(&results), vec![3, 1]);

    let Some(Value::List(lines)) = results[1].field("lines") else {
        panic!("expected attached lines");
    };
    assert_eq!(lines.len(), 2);
}

#[test]
fn match_stage_filters_after_lookup() {
    let store = MemoryStore::new();
    store.insert_many("invoice", (1..=2).map(invoice_doc));
    store.insert_many(
        "invoiceLine",
        [line_doc(1, "widget", "open"), line_doc(2, "gadget", "closed")],
    );

    let pipeline = [
        Stage::Lookup {
            from: "invoiceLine".into(),
            local_field: "id".into(),
            foreign_field: "id".into(),
            as_field: "lines".into(),
        },
        Stage::Match(FilterExpr::eq("lines.status", "open")),
    ];

    let results = store.aggregate(&pipeline, "invoice").unwrap();
    assert_eq!(ids(&results), vec![1]);
}
