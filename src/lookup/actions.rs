use crate::catalog::Catalog;
use crate::lookup::failure::LookupFailure;
use crate::lookup::LookupOutcome;

/// Fetch one record by identifier.
///
/// Performs no validation of `id`; callers refuse blank input.
pub async fn fetch_by_id(catalog: &dyn Catalog, id: &str) -> LookupOutcome {
    match catalog.lookup(id).await {
        Ok(record) => {
            tracing::info!(id = %id, name = %record.name, "Asteroid loaded");
            Ok(record)
        }
        Err(err) => {
            tracing::warn!(id = %id, kind = err.error_type(), error = %err, "Asteroid lookup failed");
            Err(LookupFailure::lookup(&err))
        }
    }
}

/// Fetch the listing, then the first listed object.
///
/// A failed listing never falls through to the lookup, and an empty
/// listing is reported as [`LookupFailure::no_data`].
pub async fn random_pick(catalog: &dyn Catalog) -> LookupOutcome {
    let page = catalog.browse().await.map_err(|err| {
        tracing::warn!(kind = err.error_type(), error = %err, "Catalog listing failed");
        LookupFailure::random_pick(&err)
    })?;

    let Some(id) = page.first_id() else {
        tracing::warn!("Catalog listing returned no objects");
        return Err(LookupFailure::no_data());
    };

    tracing::debug!(id = %id, "Random pick resolved identifier");
    fetch_by_id(catalog, id).await
}
