// src/catalog/aggregate.rs
// DOCUMENTATION: Derived review aggregates
// PURPOSE: Average rating and review count, recomputed on demand

use crate::models::Review;

/// Arithmetic mean of the review ratings, rounded to one decimal
/// DOCUMENTATION: None is the "no reviews" sentinel and is distinguishable
/// from every real average, which lies in [1.0, 5.0] since ratings are >= 1.
/// Sum/count is order-independent, so the result is stable under any
/// permutation of the review collection.
pub fn average_rating(reviews: &[&Review]) -> Option<f32> {
    if reviews.is_empty() {
        return None;
    }
    let sum: u32 = reviews.iter().map(|r| u32::from(r.rating)).sum();
    let mean = sum as f32 / reviews.len() as f32;
    Some((mean * 10.0).round() / 10.0)
}

/// Number of reviews behind the average
pub fn review_count(reviews: &[&Review]) -> usize {
    reviews.len()
}

/// Wire representation of the average: the sentinel maps to 0
/// DOCUMENTATION: The backend reports COALESCE(AVG(rating), 0); both code
/// paths must agree, so locally computed summaries use the same convention.
pub fn display_rating(avg: Option<f32>) -> f32 {
    avg.unwrap_or(0.0)
}
