use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Campsite {
    pub id: u32,
    pub name: String,
    pub image: String,       // Image URI, relative to the site root
    pub description: String,
}
