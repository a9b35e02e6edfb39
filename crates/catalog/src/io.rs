use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::info;
use wayfarer_core::{Catalog, InMemoryCatalog};

#[derive(Debug, Error)]
pub enum CatalogLoadError {
    #[error("failed reading catalog at {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed catalog json: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid catalog: {0}")]
    Invalid(String),
}

pub fn load_catalog_json(path: impl AsRef<Path>) -> Result<InMemoryCatalog, CatalogLoadError> {
    let path = path.as_ref();
    let raw = fs::read_to_string(path).map_err(|source| CatalogLoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let catalog = catalog_from_json(&raw)?;
    info!(
        path = %path.display(),
        destinations = catalog.destinations().len(),
        activities = catalog.activities().len(),
        "catalog loaded"
    );
    Ok(catalog)
}

pub fn catalog_from_json(raw: &str) -> Result<InMemoryCatalog, CatalogLoadError> {
    let catalog: InMemoryCatalog = serde_json::from_str(raw)?;
    validate_catalog(&catalog)?;
    Ok(catalog)
}

pub fn catalog_to_json(catalog: &InMemoryCatalog) -> Result<String, CatalogLoadError> {
    Ok(serde_json::to_string_pretty(catalog)?)
}

/// Rejects datasets the planner cannot price: dangling destination ids,
/// negative costs, non-positive speeds, out-of-range scores.
pub fn validate_catalog(catalog: &dyn Catalog) -> Result<(), CatalogLoadError> {
    let mut ids = HashSet::new();
    for destination in catalog.destinations() {
        if !ids.insert(destination.id) {
            return invalid(format!("duplicate destination id {}", destination.id));
        }
        if !(1..=5).contains(&destination.cost_level) {
            return invalid(format!(
                "{} has cost level {} outside 1-5",
                destination.name, destination.cost_level
            ));
        }
        if destination
            .affinities
            .iter()
            .any(|value| !(0.0..=1.0).contains(value))
        {
            return invalid(format!("{} has an affinity outside [0, 1]", destination.name));
        }
    }

    for activity in catalog.activities() {
        if !ids.contains(&activity.destination_id) {
            return invalid(format!(
                "activity {} references unknown destination {}",
                activity.id, activity.destination_id
            ));
        }
        if negative_or_nan(activity.cost) {
            return invalid(format!("activity {} has a negative cost", activity.id));
        }
        if !(0.0..=1.0).contains(&activity.popularity) {
            return invalid(format!("activity {} popularity is outside [0, 1]", activity.id));
        }
    }

    for accommodation in catalog.accommodations() {
        if !ids.contains(&accommodation.destination_id) {
            return invalid(format!(
                "{} references unknown destination {}",
                accommodation.name, accommodation.destination_id
            ));
        }
        if negative_or_nan(accommodation.cost_per_night) {
            return invalid(format!("{} has a negative nightly cost", accommodation.name));
        }
    }

    for mode in catalog.transportation_modes() {
        if negative_or_nan(mode.cost_per_km) || mode.speed_km_h.is_nan() || mode.speed_km_h <= 0.0 {
            return invalid(format!("{} needs a positive speed and non-negative cost", mode.mode));
        }
    }

    Ok(())
}

fn negative_or_nan(value: f64) -> bool {
    value.is_nan() || value < 0.0
}

fn invalid(reason: String) -> Result<(), CatalogLoadError> {
    Err(CatalogLoadError::Invalid(reason))
}
