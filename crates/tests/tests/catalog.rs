use wayfarer_catalog::{
    builtin_catalog, catalog_from_json, catalog_to_json, load_catalog_json, CatalogLoadError,
    DEFAULT_CATALOG_SEED,
};
use wayfarer_core::{recommend_destinations, Catalog, InterestCategory};
use wayfarer_service::{CatalogSource, PlannerService};

#[test]
fn builtin_catalog_is_deterministic_per_seed() {
    assert_eq!(builtin_catalog(7), builtin_catalog(7));
    assert_ne!(builtin_catalog(7), builtin_catalog(8));
}

#[test]
fn exported_catalog_loads_back_from_disk() -> anyhow::Result<()> {
    let catalog = builtin_catalog(DEFAULT_CATALOG_SEED);
    let path = std::env::temp_dir().join(format!("wayfarer-catalog-{}.json", std::process::id()));
    std::fs::write(&path, catalog_to_json(&catalog)?)?;

    let loaded = load_catalog_json(&path)?;
    std::fs::remove_file(&path)?;
    assert_eq!(loaded, catalog);

    let service = PlannerService::from_source(&CatalogSource::JsonFile(path), Default::default());
    assert!(service.is_err());
    Ok(())
}

#[test]
fn malformed_json_is_rejected() {
    let err = catalog_from_json("{\"destinations\": 3}").unwrap_err();
    assert!(matches!(err, CatalogLoadError::Json(_)));
}

#[test]
fn culinary_interest_ranks_by_cosine_similarity() {
    let catalog = builtin_catalog(DEFAULT_CATALOG_SEED);
    let ranked = recommend_destinations(&catalog, &[InterestCategory::FoodCulinary], 60.0);

    assert_eq!(ranked.len(), catalog.destinations().len());
    for pair in ranked.windows(2) {
        assert!(pair[0].similarity >= pair[1].similarity);
    }
    assert_eq!(ranked[0].destination.name, "Tokyo, Japan");
    assert_eq!(ranked[ranked.len() - 1].destination.name, "Rio de Janeiro, Brazil");
}
