use crate::model::field::EntityFieldModel;

///
/// EntityModel
///
/// Declared runtime model for one entity type. `parent` chains to the
/// ancestor model so marker scans cover inherited fields; the chain ends at
/// the root (`None`).
///

pub struct EntityModel {
    /// Simple type name; also the source of the store collection name.
    pub entity_name: &'static str,
    /// Ancestor model whose fields participate in marker scans.
    pub parent: Option<&'static EntityModel>,
    /// Ordered field list (authoritative scan order for this level).
    pub fields: &'static [EntityFieldModel],
}

impl EntityModel {
    /// Own fields first, then each ancestor level up to the root.
    ///
    /// This is the scan order every marker lookup uses; "first encountered"
    /// is defined against this sequence.
    pub fn scan_fields(&'static self) -> impl Iterator<Item = &'static EntityFieldModel> {
        let mut levels = Vec::new();
        let mut current = Some(self);
        while let Some(model) = current {
            levels.push(model.fields);
            current = model.parent;
        }

        levels.into_iter().flatten()
    }
}
