use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A shelter dog as returned by `POST /dogs`.
///
/// Records are never mutated locally; a new search or favorites refresh
/// replaces them wholesale.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dog {
    pub id: String,
    /// Image URL
    pub img: String,
    pub name: String,
    pub age: u32,
    pub zip_code: String,
    pub breed: String,
}

impl Dog {
    /// Human readable age ("Puppy", "1 year", "7 years").
    pub fn age_label(&self) -> String {
        match self.age {
            0 => "Puppy".to_string(),
            1 => "1 year".to_string(),
            n => format!("{} years", n),
        }
    }
}

/// Reorder dogs to follow `ids`.
///
/// The batch endpoint does not promise to preserve request order, while the
/// search endpoint returns ids already sorted. Dogs whose id is missing from
/// `ids` are dropped; ids the server did not resolve are skipped.
pub fn arrange_by_ids(dogs: Vec<Dog>, ids: &[String]) -> Vec<Dog> {
    let mut by_id: HashMap<String, Dog> = dogs.into_iter().map(|d| (d.id.clone(), d)).collect();
    ids.iter().filter_map(|id| by_id.remove(id)).collect()
}
