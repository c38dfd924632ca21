use crate::db::{Direction, metadata::EntityMetadata, pipeline::Stage, primitives::FilterExpr};

/// Build the join pipeline in its fixed stage order.
///
/// The descending identifier sort must come first: the lookup and match
/// stages do not guarantee input ordering, so deterministic order has to be
/// established before the join. The non-empty filter always directly follows
/// the lookup; caller filters run last and only when supplied.
pub fn build_pipeline(
    primary: &EntityMetadata,
    secondary: &EntityMetadata,
    secondary_collection: String,
    child_field: &str,
    primary_filter: Option<FilterExpr>,
    secondary_filter: Option<FilterExpr>,
) -> Vec<Stage> {
    let mut stages = vec![
        Stage::Sort {
            field: primary.id_field.to_string(),
            direction: Direction::Desc,
        },
        Stage::Lookup {
            from: secondary_collection,
            local_field: primary.id_field.to_string(),
            foreign_field: secondary.id_field.to_string(),
            as_field: child_field.to_string(),
        },
        Stage::MatchNonEmpty {
            field: child_field.to_string(),
        },
    ];

    if let Some(filter) = primary_filter {
        stages.push(Stage::Match(filter));
    }

    if let Some(filter) = secondary_filter {
        stages.push(Stage::Match(filter));
    }

    stages
}
