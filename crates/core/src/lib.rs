pub mod catalog;
pub mod config;
pub mod error;
pub mod models;
pub mod overview;
pub mod planner;
pub mod random;
pub mod recommender;
pub mod similarity;

pub use catalog::{Catalog, InMemoryCatalog};
pub use config::PlannerConfig;
pub use error::{PlannerError, Result};
pub use models::*;
pub use overview::compose_overview;
pub use planner::{generate_itinerary, ItineraryPlanner};
pub use random::{RandomSource, SeededRandom};
pub use recommender::Recommender;
pub use similarity::{recommend_destinations, user_feature_vector};
