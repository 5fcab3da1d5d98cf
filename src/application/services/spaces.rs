//! Space use-case orchestration

use std::sync::Arc;

use chrono::Utc;
use tracing::info;
use uuid::Uuid;

use crate::application::dto::{CreateSpaceDto, UpdateSpaceDto};
use crate::domain::{Space, SpacesRepository};
use crate::shared::types::errors::{DomainError, DomainResult};

pub struct SpaceService {
    spaces: Arc<dyn SpacesRepository>,
}

impl SpaceService {
    pub fn new(spaces: Arc<dyn SpacesRepository>) -> Self {
        Self { spaces }
    }

    pub async fn get_all_spaces(&self) -> DomainResult<Vec<Space>> {
        info!("Getting all spaces");
        self.spaces.find_all().await
    }

    pub async fn get_space_by_id(&self, id: Uuid) -> DomainResult<Space> {
        info!(%id, "Getting space by ID");

        self.spaces
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::NotFound {
                entity: "Space",
                id: id.to_string(),
            })
    }

    pub async fn create_space(&self, dto: CreateSpaceDto) -> DomainResult<Space> {
        info!(name = %dto.name, "Creating new space");

        let space = Space::create_new(
            Uuid::new_v4(),
            &dto.name,
            &dto.location,
            dto.capacity,
            dto.description.as_deref(),
        )?;

        let created = self.spaces.create(space).await?;

        info!(id = %created.id(), name = %created.name(), "Space created successfully");

        Ok(created)
    }

    /// Partial update: absent fields keep their current value. The updated
    /// entity keeps its id and created_at; updated_at is set to now.
    pub async fn update_space(&self, dto: UpdateSpaceDto) -> DomainResult<Space> {
        info!(id = %dto.id, "Updating space");

        let existing = self.get_space_by_id(dto.id).await?;

        let updated = Space::create(
            existing.id(),
            dto.name.as_deref().unwrap_or(existing.name()),
            dto.location.as_deref().unwrap_or(existing.location()),
            dto.capacity.unwrap_or(existing.capacity()),
            dto.description.as_deref().or(existing.description()),
            dto.active.unwrap_or(existing.is_active()),
            existing.created_at(),
            Utc::now(),
        )?;

        let saved = self.spaces.update(updated).await?;

        info!(id = %dto.id, "Space updated successfully");

        Ok(saved)
    }

    pub async fn delete_space(&self, id: Uuid) -> DomainResult<()> {
        info!(%id, "Deleting space");

        if !self.spaces.exists_by_id(id).await? {
            return Err(DomainError::NotFound {
                entity: "Space",
                id: id.to_string(),
            });
        }

        self.spaces.delete(id).await?;

        info!(%id, "Space deleted successfully");

        Ok(())
    }
}
