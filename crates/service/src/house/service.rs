use std::sync::Arc;
use models::house;
use tracing::{info, instrument};

use crate::errors::ServiceError;
use crate::house::forms::{HouseEditForm, HouseRegisterForm};
use crate::house::repository::HouseRepository;

/// Write-side orchestration for houses: validation, image-name policy, persistence.
pub struct HouseService<R: HouseRepository + ?Sized> {
    repo: Arc<R>,
}

impl<R: HouseRepository + ?Sized> HouseService<R> {
    pub fn new(repo: Arc<R>) -> Self { Self { repo } }

    /// Validate and insert. The image filename is recorded as supplied by the
    /// image store; storage assigns id and timestamps.
    #[instrument(skip(self, form), fields(name = %form.name))]
    pub async fn create(&self, form: &HouseRegisterForm) -> Result<house::Model, ServiceError> {
        let valid = form.validate().map_err(ServiceError::InvalidForm)?;
        let created = self.repo.insert(valid.attrs, valid.image_name).await?;
        info!(id = created.id, name = %created.name, "house_created");
        Ok(created)
    }

    /// Validate, load the current row and overwrite it. The stored image name
    /// survives unless the form carries a new one.
    #[instrument(skip(self, form))]
    pub async fn update(&self, id: i32, form: &HouseEditForm) -> Result<house::Model, ServiceError> {
        let valid = form.validate().map_err(ServiceError::InvalidForm)?;
        let existing = self.repo.get(id).await?;
        let replaced_image = valid.image_name.is_some();
        let updated = self.repo.save(existing, valid.attrs, valid.image_name).await?;
        info!(id = updated.id, replaced_image, "house_updated");
        Ok(updated)
    }
}
