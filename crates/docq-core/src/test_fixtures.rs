//! Shared entity models and datasets for module tests.

use crate::{
    db::{document::Document, store::memory::MemoryStore},
    model::{EntityFieldKind, EntityFieldModel, EntityModel, FieldMarker},
    traits::EntityKind,
};

///
/// Invoice
///
/// Join primary: marked identifier plus a marked child-collection field.
///

pub struct Invoice;

pub static INVOICE_MODEL: EntityModel = EntityModel {
    entity_name: "Invoice",
    parent: None,
    fields: &[
        EntityFieldModel {
            name: "id",
            kind: EntityFieldKind::Uint,
            markers: &[FieldMarker::Identifier],
        },
        EntityFieldModel {
            name: "customer",
            kind: EntityFieldKind::Text,
            markers: &[],
        },
        EntityFieldModel {
            name: "region",
            kind: EntityFieldKind::Text,
            markers: &[],
        },
        EntityFieldModel {
            name: "lines",
            kind: EntityFieldKind::List,
            markers: &[FieldMarker::ChildCollection],
        },
    ],
};

impl EntityKind for Invoice {
    const MODEL: &'static EntityModel = &INVOICE_MODEL;
}

///
/// InvoiceLine
///
/// Join secondary: shares the identifier value of its owning invoice.
///

pub struct InvoiceLine;

pub static INVOICE_LINE_MODEL: EntityModel = EntityModel {
    entity_name: "InvoiceLine",
    parent: None,
    fields: &[
        EntityFieldModel {
            name: "id",
            kind: EntityFieldKind::Uint,
            markers: &[FieldMarker::Identifier],
        },
        EntityFieldModel {
            name: "sku",
            kind: EntityFieldKind::Text,
            markers: &[],
        },
        EntityFieldModel {
            name: "status",
            kind: EntityFieldKind::Text,
            markers: &[],
        },
    ],
};

impl EntityKind for InvoiceLine {
    const MODEL: &'static EntityModel = &INVOICE_LINE_MODEL;
}

///
/// LedgerEntry
///
/// Inherits its identifier from an ancestor model; its own fields carry an
/// order marker only.
///

pub struct LedgerEntry;

pub static BASE_RECORD_MODEL: EntityModel = EntityModel {
    entity_name: "BaseRecord",
    parent: None,
    fields: &[EntityFieldModel {
        name: "record_id",
        kind: EntityFieldKind::Uint,
        markers: &[FieldMarker::Identifier],
    }],
};

pub static LEDGER_ENTRY_MODEL: EntityModel = EntityModel {
    entity_name: "LedgerEntry",
    parent: Some(&BASE_RECORD_MODEL),
    fields: &[
        EntityFieldModel {
            name: "posted_at",
            kind: EntityFieldKind::Uint,
            markers: &[FieldMarker::Order],
        },
        EntityFieldModel {
            name: "amount",
            kind: EntityFieldKind::Int,
            markers: &[],
        },
    ],
};

impl EntityKind for LedgerEntry {
    const MODEL: &'static EntityModel = &LEDGER_ENTRY_MODEL;
}

///
/// Unkeyed
///
/// No identifier marker anywhere in the chain.
///

pub struct Unkeyed;

pub static UNKEYED_MODEL: EntityModel = EntityModel {
    entity_name: "Unkeyed",
    parent: None,
    fields: &[EntityFieldModel {
        name: "note",
        kind: EntityFieldKind::Text,
        markers: &[],
    }],
};

impl EntityKind for Unkeyed {
    const MODEL: &'static EntityModel = &UNKEYED_MODEL;
}

///
/// TagBag
///
/// Child-collection marker misapplied to a scalar field; a scalar marker
/// must not satisfy join resolution.
///

pub struct TagBag;

pub static TAG_BAG_MODEL: EntityModel = EntityModel {
    entity_name: "TagBag",
    parent: None,
    fields: &[
        EntityFieldModel {
            name: "id",
            kind: EntityFieldKind::Uint,
            markers: &[FieldMarker::Identifier],
        },
        EntityFieldModel {
            name: "label",
            kind: EntityFieldKind::Text,
            markers: &[FieldMarker::ChildCollection],
        },
    ],
};

impl EntityKind for TagBag {
    const MODEL: &'static EntityModel = &TAG_BAG_MODEL;
}

/// One invoice document with a sequential identifier.
pub fn invoice_doc(id: u64) -> Document {
    Document::new()
        .with_field("id", id)
        .with_field("customer", format!("customer-{id}"))
        .with_field("region", if id % 2 == 0 { "east" } else { "west" })
}

/// One line document owned by the invoice with the same identifier.
pub fn line_doc(id: u64, sku: &str, status: &str) -> Document {
    Document::new()
        .with_field("id", id)
        .with_field("sku", sku)
        .with_field("status", status)
}

/// Store seeded with invoices `1..=count` in insertion order.
pub fn seeded_invoices(count: u64) -> MemoryStore {
    let store = MemoryStore::new();
    store.insert_many(Invoice::collection(), (1..=count).map(invoice_doc));
    store
}
