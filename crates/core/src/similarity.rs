use crate::catalog::Catalog;
use crate::models::{InterestCategory, RankedDestination};

/// Seven interest columns plus a cost level derived from the daily budget, in
/// the same layout as [`crate::models::Destination::feature_vector`].
pub fn user_feature_vector(interests: &[InterestCategory], daily_budget: f64) -> [f64; 8] {
    let mut features = [0.0; 8];

    if !interests.is_empty() {
        let weight = 0.5 + 0.5 / interests.len() as f64;
        for interest in interests {
            features[interest.feature_index()] = weight;
        }
    }

    features[7] = f64::from(cost_level_for(daily_budget)) / 5.0;
    features
}

pub fn cost_level_for(daily_budget: f64) -> u8 {
    if daily_budget < 50.0 {
        1
    } else if daily_budget < 100.0 {
        2
    } else if daily_budget < 200.0 {
        3
    } else if daily_budget < 350.0 {
        4
    } else {
        5
    }
}

/// Every destination, most similar first; ties keep catalog order.
pub fn recommend_destinations(
    catalog: &dyn Catalog,
    interests: &[InterestCategory],
    daily_budget: f64,
) -> Vec<RankedDestination> {
    let user = user_feature_vector(interests, daily_budget);

    let mut ranked = catalog
        .destinations()
        .iter()
        .map(|destination| RankedDestination {
            similarity: cosine_similarity(&user, &destination.feature_vector()),
            destination: destination.clone(),
        })
        .collect::<Vec<_>>();

    ranked.sort_by(|a, b| b.similarity.total_cmp(&a.similarity));
    ranked
}

pub fn cosine_similarity(a: &[f64], b: &[f64]) -> f64 {
    if a.len() != b.len() || a.is_empty() {
        return 0.0;
    }

    let mut dot = 0.0;
    let mut a_norm = 0.0;
    let mut b_norm = 0.0;
    for (lhs, rhs) in a.iter().zip(b.iter()) {
        dot += lhs * rhs;
        a_norm += lhs * lhs;
        b_norm += rhs * rhs;
    }

    if a_norm == 0.0 || b_norm == 0.0 {
        0.0
    } else {
        dot / (a_norm.sqrt() * b_norm.sqrt())
    }
}
