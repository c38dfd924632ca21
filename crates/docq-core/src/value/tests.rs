use crate::{
    db::document::Document,
    value::{Value, canonical_cmp, strict_order_cmp},
};
use std::cmp::Ordering;

#[test]
fn canonical_cmp_orders_same_variant_values() {
    assert_eq!(
        canonical_cmp(&Value::Uint(3), &Value::Uint(7)),
        Ordering::Less
    );
    assert_eq!(
        canonical_cmp(&Value::Text("b".into()), &Value::Text("a".into())),
        Ordering::Greater
    );
    assert_eq!(canonical_cmp(&Value::Int(-2), &Value::Int(-2)), Ordering::Equal);
}

#[test]
fn canonical_cmp_falls_back_to_rank_for_mixed_variants() {
    // Rank order: Null < Bool < Int < Uint < Text < List < Doc.
    assert_eq!(
        canonical_cmp(&Value::Null, &Value::Bool(false)),
        Ordering::Less
    );
    assert_eq!(
        canonical_cmp(&Value::Text("z".into()), &Value::Uint(u64::MAX)),
        Ordering::Greater
    );
}

#[test]
fn canonical_cmp_is_deterministic_over_lists() {
    let shorter = Value::List(vec![Value::Uint(1), Value::Uint(2)]);
    let longer = Value::List(vec![Value::Uint(1), Value::Uint(2), Value::Uint(3)]);

    assert_eq!(canonical_cmp(&shorter, &longer), Ordering::Less);
    assert_eq!(canonical_cmp(&longer, &shorter), Ordering::Greater);
    assert_eq!(canonical_cmp(&shorter, &shorter), Ordering::Equal);
}

#[test]
fn strict_order_cmp_rejects_mixed_variants() {
    assert_eq!(
        strict_order_cmp(&Value::Uint(5), &Value::Uint(6)),
        Some(Ordering::Less)
    );
    assert_eq!(strict_order_cmp(&Value::Uint(5), &Value::Int(6)), None);
    assert_eq!(
        strict_order_cmp(&Value::Text("5".into()), &Value::Uint(5)),
        None
    );
}

#[test]
fn documents_compare_by_key_then_value() {
    let left = Document::new().with_field("a", 1u64);
    let right = Document::new().with_field("a", 2u64);

    assert_eq!(
        canonical_cmp(&Value::Doc(left.clone()), &Value::Doc(right)),
        Ordering::Less
    );
    assert_eq!(
        canonical_cmp(&Value::Doc(left.clone()), &Value::Doc(left)),
        Ordering::Equal
    );
}
