//! Pet catalog shown to foster families.
//!
//! DESIGN
//! ======
//! The catalog is seeded at startup and held in memory. Listing supports
//! the browse page's filters: type and status match exactly, breed matches
//! case-insensitively.

use serde::{Deserialize, Serialize};
use tokio::sync::RwLock;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PetType {
    Dog,
    Cat,
    Other,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PetStatus {
    Available,
    Fostered,
    Adopted,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Pet {
    pub id: i64,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: PetType,
    pub breed: String,
    /// Age in years.
    pub age: u32,
    pub gender: String,
    pub status: PetStatus,
    pub description: String,
    pub image_url: Option<String>,
    pub traits: Vec<String>,
}

/// Query parameters of `GET /api/pets`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PetFilter {
    #[serde(rename = "type")]
    pub kind: Option<PetType>,
    pub status: Option<PetStatus>,
    pub breed: Option<String>,
}

impl PetFilter {
    #[must_use]
    pub fn matches(&self, pet: &Pet) -> bool {
        self.kind.is_none_or(|kind| pet.kind == kind)
            && self.status.is_none_or(|status| pet.status == status)
            && self
                .breed
                .as_deref()
                .map(str::trim)
                .filter(|b| !b.is_empty())
                .is_none_or(|breed| pet.breed.eq_ignore_ascii_case(breed))
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct PetCounts {
    pub total: usize,
    pub available: usize,
    pub fostered: usize,
    pub adopted: usize,
}

#[derive(Default)]
pub struct PetCatalog {
    pets: RwLock<Vec<Pet>>,
}

impl PetCatalog {
    #[must_use]
    pub fn new(pets: Vec<Pet>) -> Self {
        Self { pets: RwLock::new(pets) }
    }

    /// Catalog with the starter set of shelter animals.
    #[must_use]
    pub fn seeded() -> Self {
        Self::new(seed_pets())
    }

    /// Pets matching `filter`, ordered by id.
    pub async fn list(&self, filter: &PetFilter) -> Vec<Pet> {
        let mut pets: Vec<Pet> = self
            .pets
            .read()
            .await
            .iter()
            .filter(|p| filter.matches(p))
            .cloned()
            .collect();
        pets.sort_by_key(|p| p.id);
        pets
    }

    pub async fn get(&self, id: i64) -> Option<Pet> {
        self.pets.read().await.iter().find(|p| p.id == id).cloned()
    }

    pub async fn counts(&self) -> PetCounts {
        let pets = self.pets.read().await;
        let mut counts = PetCounts { total: pets.len(), ..PetCounts::default() };
        for pet in pets.iter() {
            match pet.status {
                PetStatus::Available => counts.available += 1,
                PetStatus::Fostered => counts.fostered += 1,
                PetStatus::Adopted => counts.adopted += 1,
            }
        }
        counts
    }
}

#[allow(clippy::too_many_arguments)]
fn pet(
    id: i64,
    name: &str,
    kind: PetType,
    breed: &str,
    age: u32,
    gender: &str,
    status: PetStatus,
    description: &str,
    traits: &[&str],
) -> Pet {
    Pet {
        id,
        name: name.to_owned(),
        kind,
        breed: breed.to_owned(),
        age,
        gender: gender.to_owned(),
        status,
        description: description.to_owned(),
        image_url: None,
        traits: traits.iter().map(|t| (*t).to_owned()).collect(),
    }
}

fn seed_pets() -> Vec<Pet> {
    vec![
        pet(
            1,
            "Buddy",
            PetType::Dog,
            "Golden Retriever",
            3,
            "male",
            PetStatus::Available,
            "Loves fetch and long walks; great with children.",
            &["friendly", "energetic", "house-trained"],
        ),
        pet(
            2,
            "Whiskers",
            PetType::Cat,
            "Siamese",
            2,
            "female",
            PetStatus::Available,
            "Chatty lap cat who follows you from room to room.",
            &["affectionate", "vocal"],
        ),
        pet(
            3,
            "Max",
            PetType::Dog,
            "German Shepherd",
            5,
            "male",
            PetStatus::Fostered,
            "Calm and loyal; needs a home without other dogs.",
            &["loyal", "protective"],
        ),
        pet(
            4,
            "Luna",
            PetType::Cat,
            "Maine Coon",
            4,
            "female",
            PetStatus::Available,
            "Gentle giant who enjoys brushing sessions.",
            &["gentle", "quiet"],
        ),
        pet(
            5,
            "Pip",
            PetType::Other,
            "Holland Lop",
            1,
            "male",
            PetStatus::Available,
            "Curious rabbit that needs daily time out of the hutch.",
            &["curious", "shy"],
        ),
        pet(
            6,
            "Daisy",
            PetType::Dog,
            "Beagle",
            7,
            "female",
            PetStatus::Adopted,
            "Senior beagle with a great nose and a soft heart.",
            &["calm", "food-motivated"],
        ),
    ]
}

#[cfg(test)]
#[path = "pets_test.rs"]
mod tests;
