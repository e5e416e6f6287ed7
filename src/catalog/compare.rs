// src/catalog/compare.rs
// DOCUMENTATION: Side-by-side breed comparison
// PURPOSE: Pair two breeds' profiles and characteristic tables for the
// comparison view

use serde::{Deserialize, Serialize};

use crate::catalog::{average_rating, display_rating, CatalogSnapshot};
use crate::models::Breed;

/// Two breeds paired for side-by-side display
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BreedComparison {
    pub first: ComparedBreed,
    pub second: ComparedBreed,
    /// One row per characteristic name, first breed's order, with
    /// second-breed extras appended
    pub characteristics: Vec<CharacteristicRow>,
}

/// One side of the comparison
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComparedBreed {
    #[serde(flatten)]
    pub breed: Breed,
    pub avg_rating: f32,
    pub review_count: usize,
}

/// A single characteristic paired across both breeds
/// DOCUMENTATION: A side is None when that breed has no characteristic with
/// this name. With duplicate names, the first rating in collection order is
/// taken for the row.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CharacteristicRow {
    pub name: String,
    pub first_rating: Option<u8>,
    pub second_rating: Option<u8>,
}

/// Build a comparison of two breeds from the current snapshot
/// DOCUMENTATION: Returns None when either id is unknown; comparing a breed
/// with itself is allowed and simply mirrors both sides.
pub fn compare_breeds(
    snapshot: &CatalogSnapshot,
    first_id: i64,
    second_id: i64,
) -> Option<BreedComparison> {
    let first = snapshot.breed_by_id(first_id)?;
    let second = snapshot.breed_by_id(second_id)?;

    let first_chars = snapshot.characteristics_for_breed(first_id);
    let second_chars = snapshot.characteristics_for_breed(second_id);

    let mut rows: Vec<CharacteristicRow> = Vec::new();
    for c in &first_chars {
        if rows.iter().any(|row| row.name == c.name) {
            continue;
        }
        let other = second_chars
            .iter()
            .find(|s| s.name == c.name)
            .map(|s| s.rating);
        rows.push(CharacteristicRow {
            name: c.name.clone(),
            first_rating: Some(c.rating),
            second_rating: other,
        });
    }
    for c in &second_chars {
        if rows.iter().any(|row| row.name == c.name) {
            continue;
        }
        rows.push(CharacteristicRow {
            name: c.name.clone(),
            first_rating: None,
            second_rating: Some(c.rating),
        });
    }

    Some(BreedComparison {
        first: compared(snapshot, first),
        second: compared(snapshot, second),
        characteristics: rows,
    })
}

fn compared(snapshot: &CatalogSnapshot, breed: &Breed) -> ComparedBreed {
    let reviews = snapshot.reviews_for_breed(breed.id);
    ComparedBreed {
        breed: breed.clone(),
        avg_rating: display_rating(average_rating(&reviews)),
        review_count: reviews.len(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::sample_data::sample_snapshot;

    #[test]
    fn test_unknown_breed_yields_none() {
        let snapshot = sample_snapshot();
        assert!(compare_breeds(&snapshot, 1, 9999).is_none());
        assert!(compare_breeds(&snapshot, 9999, 1).is_none());
    }

    #[test]
    fn test_rows_follow_first_breed_order() {
        let snapshot = sample_snapshot();
        let cmp = compare_breeds(&snapshot, 1, 2).unwrap();
        let first_names: Vec<&str> = snapshot
            .characteristics_for_breed(1)
            .iter()
            .map(|c| c.name.as_str())
            .collect();
        let row_names: Vec<&str> = cmp
            .characteristics
            .iter()
            .map(|r| r.name.as_str())
            .collect();
        assert!(row_names.starts_with(&first_names));
    }

    #[test]
    fn test_union_includes_second_only_characteristics() {
        let snapshot = sample_snapshot();
        let cmp = compare_breeds(&snapshot, 4, 1).unwrap();
        // breed 1 carries characteristics breed 4 lacks
        assert!(cmp
            .characteristics
            .iter()
            .any(|r| r.first_rating.is_none() && r.second_rating.is_some()));
    }

    #[test]
    fn test_self_comparison_mirrors_both_sides() {
        let snapshot = sample_snapshot();
        let cmp = compare_breeds(&snapshot, 2, 2).unwrap();
        assert_eq!(cmp.first.breed.id, cmp.second.breed.id);
        for row in &cmp.characteristics {
            assert_eq!(row.first_rating, row.second_rating);
        }
    }
}
