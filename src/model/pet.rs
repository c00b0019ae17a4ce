use serde::{Deserialize, Serialize};

/// Adoption lifecycle state of a pet.
///
/// A pet with no status is "unset", which is distinct from every variant
/// here; filters and inventory never match it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    Available,
    Pending,
    Adopted,
}

/// Free-form label attached to pets.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tag {
    pub id: Option<i64>,
    pub name: String,
}

impl Tag {
    pub fn named(name: impl Into<String>) -> Self {
        Tag {
            id: None,
            name: name.into(),
        }
    }
}

/// Grouping a pet belongs to (at most one per pet).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: Option<i64>,
    pub name: String,
}

impl Category {
    pub fn named(name: impl Into<String>) -> Self {
        Category {
            id: None,
            name: name.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pet {
    pub id: Option<i64>,
    pub name: String,
    pub category: Option<Category>,
    #[serde(default)]
    pub photo_urls: Vec<String>,
    pub tags: Option<Vec<Tag>>,
    pub status: Option<Status>,
}

impl Pet {
    /// A new unpersisted pet with just a name.
    pub fn named(name: impl Into<String>) -> Self {
        Pet {
            id: None,
            name: name.into(),
            category: None,
            photo_urls: Vec::new(),
            tags: None,
            status: None,
        }
    }

    /// Whether every requested tag name appears among this pet's tags.
    ///
    /// A pet without tags matches only an empty request.
    pub fn has_all_tags(&self, names: &[String]) -> bool {
        names.iter().all(|wanted| {
            self.tags
                .iter()
                .flatten()
                .any(|tag| tag.name == *wanted)
        })
    }
}

/// Pet counts grouped by status.
///
/// Statuses with no matching pets report an explicit zero; callers can
/// rely on all three fields being present.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Inventory {
    pub available: u64,
    pub pending: u64,
    pub adopted: u64,
}

impl Inventory {
    pub(crate) fn count(&mut self, status: Status) {
        match status {
            Status::Available => self.available += 1,
            Status::Pending => self.pending += 1,
            Status::Adopted => self.adopted += 1,
        }
    }
}
