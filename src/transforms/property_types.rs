use std::borrow::Cow;

use tracing::debug;

use crate::{
    ast::Expr,
    catalog::{CatalogError, PropertyCatalog},
    context::QueryContext,
    database::DEFAULT_TIMEZONE,
    transforms::{PropertyFinder, PropertySwapper, PropertyTypeMaps},
};

/// Coerce property reads in `node` to their cataloged types and normalize
/// date/time columns to the query timezone.
///
/// The tree is analyzed completely before anything is rewritten, so every
/// reference to a property resolves against the same type. When there is
/// nothing to do the input is handed back borrowed; otherwise a new tree is
/// returned and one notice per coerced property is appended to the context.
///
/// Without a context the timezone is `UTC`, no lookups are made and notices
/// are discarded. Catalog failures are returned as-is.
pub fn resolve_property_types<'a>(
    node: &'a Expr,
    context: Option<&mut QueryContext>,
    catalog: &dyn PropertyCatalog,
) -> Result<Cow<'a, Expr>, CatalogError> {
    let finder = PropertyFinder::find(node);

    let team_id = context.as_ref().and_then(|ctx| ctx.team_id);
    let types = PropertyTypeMaps::fetch(&finder, team_id, catalog)?;

    if types.is_noop(finder.found_timestamps) {
        debug!("no typed properties or timestamps, leaving tree unchanged");
        return Ok(Cow::Borrowed(node));
    }

    let timezone = context
        .as_ref()
        .and_then(|ctx| ctx.timezone())
        .unwrap_or(DEFAULT_TIMEZONE)
        .to_string();
    let notices = context.map(|ctx| &mut ctx.notices);

    debug!(
        event_properties = types.event_properties.len(),
        person_properties = types.person_properties.len(),
        found_timestamps = finder.found_timestamps,
        %timezone,
        "rewriting property types"
    );
    let swapped = PropertySwapper::new(timezone, &types, notices).swap(node);
    Ok(Cow::Owned(swapped))
}
