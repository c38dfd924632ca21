use crate::{
    db::metadata::{self, EntityMetadata, MetadataCache, MetadataError},
    test_fixtures::{
        INVOICE_MODEL, Invoice, LEDGER_ENTRY_MODEL, LedgerEntry, TAG_BAG_MODEL, TagBag,
        UNKEYED_MODEL, Unkeyed,
    },
    traits::{EntityKind, collection_name},
};

#[test]
fn resolves_identifier_order_and_child_collection() {
    let metadata = metadata::resolve(&INVOICE_MODEL).unwrap();

    assert_eq!(
        metadata,
        EntityMetadata {
            id_field: "id",
            order_field: None,
            child_collection_field: Some("lines"),
        }
    );
    assert_eq!(metadata.effective_order_field(), "id");
}

#[test]
fn identifier_scan_walks_the_ancestor_chain() {
    let metadata = metadata::resolve(&LEDGER_ENTRY_MODEL).unwrap();

    assert_eq!(metadata.id_field, "record_id");
    assert_eq!(metadata.order_field, Some("posted_at"));
    assert_eq!(metadata.effective_order_field(), "posted_at");
}

#[test]
fn missing_identifier_is_fatal() {
    let err = metadata::resolve(&UNKEYED_MODEL).unwrap_err();

    assert_eq!(err, MetadataError::MissingIdentifier { entity: "Unkeyed" });
}

#[test]
fn child_collection_marker_on_scalar_field_does_not_count() {
    let metadata = metadata::resolve(&TAG_BAG_MODEL).unwrap();
    assert_eq!(metadata.child_collection_field, None);

    let err = metadata::require_child_collection(TagBag::MODEL, &metadata).unwrap_err();
    assert_eq!(
        err,
        MetadataError::MissingChildCollection { entity: "TagBag" }
    );
}

#[test]
fn resolution_is_idempotent() {
    let first = metadata::resolve(&INVOICE_MODEL).unwrap();
    let second = metadata::resolve(&INVOICE_MODEL).unwrap();

    assert_eq!(first, second);
}

#[test]
fn cache_returns_identical_metadata_on_repeat_lookups() {
    let cache = MetadataCache::new();
    assert!(cache.is_empty());

    let first = cache.get_or_resolve::<Invoice>().unwrap();
    let second = cache.get_or_resolve::<Invoice>().unwrap();

    assert_eq!(first, second);
    assert_eq!(cache.len(), 1);
}

#[test]
fn cache_surfaces_resolver_errors_without_caching_them() {
    let cache = MetadataCache::new();

    assert!(cache.get_or_resolve::<Unkeyed>().is_err());
    assert!(cache.is_empty());

    cache.get_or_resolve::<LedgerEntry>().unwrap();
    assert_eq!(cache.len(), 1);
}

#[test]
fn collection_names_lowercase_the_first_character() {
    assert_eq!(Invoice::collection(), "invoice");
    assert_eq!(collection_name("OrderRecord"), "orderRecord");
    assert_eq!(collection_name(""), "");
}
