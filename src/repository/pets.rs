use super::Repository;
use crate::error::StoreError;
use crate::model::{Inventory, Pet, Status};

impl Repository {
    /// Look up a pet by id.
    pub async fn pet(&self, id: i64) -> Result<Pet, StoreError> {
        self.pets.get(id).await.ok_or(StoreError::PetNotFound(id))
    }

    /// Store a new pet under a fresh id and return that id.
    ///
    /// The pet's embedded tags and category are persisted to their own
    /// stores best-effort: a label that arrives with a preset id is
    /// dropped without failing the pet write, and none of those writes
    /// is atomic with the pet insert.
    pub async fn add_pet(&self, pet: Pet) -> Result<i64, StoreError> {
        if pet.id.is_some() {
            return Err(StoreError::PresetId);
        }
        let id = self
            .pets
            .insert(|id| Pet {
                id: Some(id),
                ..pet.clone()
            })
            .await;

        for tag in pet.tags.into_iter().flatten() {
            self.add_tag(tag).await.ok();
        }
        if let Some(category) = pet.category {
            self.add_category(category).await.ok();
        }
        Ok(id)
    }

    /// Replace the stored pet wholesale, keyed by the record's own id.
    pub async fn update_pet(&self, pet: Pet) -> Result<Pet, StoreError> {
        let id = pet.id.ok_or(StoreError::MissingId)?;
        if !self.pets.update(id, pet.clone()).await {
            return Err(StoreError::PetNotFound(id));
        }
        Ok(pet)
    }

    /// Remove a pet. Unlike `delete_order`, an unknown id is an error.
    pub async fn delete_pet(&self, id: i64) -> Result<(), StoreError> {
        self.pets
            .remove(id)
            .await
            .map(|_| ())
            .ok_or(StoreError::PetNotFound(id))
    }

    /// Partial update: provided fields overwrite, absent fields stay.
    pub async fn update_pet_fields(
        &self,
        id: i64,
        name: Option<String>,
        status: Option<Status>,
    ) -> Result<Pet, StoreError> {
        let mut rows = self.pets.rows().await;
        let pet = rows.get_mut(&id).ok_or(StoreError::PetNotFound(id))?;
        if let Some(name) = name {
            pet.name = name;
        }
        if let Some(status) = status {
            pet.status = Some(status);
        }
        Ok(pet.clone())
    }

    /// Pets whose status matches any requested status, ascending by id.
    ///
    /// Pets with no status never match.
    pub async fn pets_by_status(&self, statuses: &[Status]) -> Vec<Pet> {
        self.pets
            .all()
            .await
            .into_iter()
            .filter(|pet| pet.status.is_some_and(|s| statuses.contains(&s)))
            .collect()
    }

    /// Pets carrying every requested tag name, ascending by id.
    ///
    /// Superset semantics: a pet tagged `["a"]` does not match a request
    /// for `["a", "b"]`. An empty request matches every pet.
    pub async fn pets_by_tags(&self, names: &[String]) -> Vec<Pet> {
        self.pets
            .all()
            .await
            .into_iter()
            .filter(|pet| pet.has_all_tags(names))
            .collect()
    }

    /// Store raw photo bytes for a pet and return the derived URL.
    ///
    /// Photo ids are allocated store-wide, so consecutive uploads get
    /// consecutive URLs regardless of which pet they land on.
    pub async fn add_photo(&self, pet_id: i64, bytes: Vec<u8>) -> Result<String, StoreError> {
        let mut pet = self.pet(pet_id).await?;
        let photo_id = self.photos.insert(|_| bytes).await;
        let url = format!("/photos/{}", photo_id);
        pet.photo_urls.push(url.clone());
        // Full replace. If the pet was deleted between the lookup and
        // this write, the bytes stay reachable through the returned URL.
        self.pets.update(pet_id, pet).await;
        Ok(url)
    }

    /// Raw bytes for a stored photo, if any.
    pub async fn photo(&self, id: i64) -> Option<Vec<u8>> {
        self.photos.get(id).await
    }

    /// Pet counts per status. Statuses with no pets report zero rather
    /// than being omitted; unset statuses are counted nowhere.
    pub async fn inventory(&self) -> Inventory {
        let mut counts = Inventory::default();
        for pet in self.pets.all().await {
            if let Some(status) = pet.status {
                counts.count(status);
            }
        }
        counts
    }
}
