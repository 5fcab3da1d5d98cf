//! Spaces repository interface

use async_trait::async_trait;
use uuid::Uuid;

use super::model::Space;
use crate::shared::types::errors::DomainResult;

#[async_trait]
pub trait SpacesRepository: Send + Sync {
    async fn find_all(&self) -> DomainResult<Vec<Space>>;

    async fn find_by_id(&self, id: Uuid) -> DomainResult<Option<Space>>;

    async fn create(&self, space: Space) -> DomainResult<Space>;

    async fn update(&self, space: Space) -> DomainResult<Space>;

    async fn delete(&self, id: Uuid) -> DomainResult<()>;

    async fn exists_by_id(&self, id: Uuid) -> DomainResult<bool>;
}
