mod builtin;
mod destinations;
mod io;

pub use builtin::{builtin_catalog, transportation_modes, DEFAULT_CATALOG_SEED};
pub use io::{
    catalog_from_json, catalog_to_json, load_catalog_json, validate_catalog, CatalogLoadError,
};
