use serde::{Deserialize, Serialize};

/// A film record as the backend stores it. Updates are full-record PUTs,
/// so every field round-trips through serde unchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Film {
    pub id: u64,
    pub title: String,
    pub poster: String,
    pub runtime: u32,
    pub description: String,
    pub showtime: String,
    pub capacity: u32,
    pub tickets_sold: u32,
}

impl Film {
    pub fn tickets_remaining(&self) -> u32 {
        self.capacity.saturating_sub(self.tickets_sold)
    }

    pub fn sold_out(&self) -> bool {
        self.tickets_sold >= self.capacity
    }

    pub fn runtime_text(&self) -> String {
        format!("{} minutes", self.runtime)
    }
}
