use async_trait::async_trait;
use common::pagination::{Page, PageRequest};
use models::house::{self, HouseAttrs};
use sea_orm::DatabaseConnection;

use crate::errors::ServiceError;

#[async_trait]
pub trait HouseRepository: Send + Sync {
    async fn find_all(&self, req: &PageRequest) -> Result<Page<house::Model>, ServiceError>;
    async fn find_by_name_like(&self, keyword: &str, req: &PageRequest) -> Result<Page<house::Model>, ServiceError>;
    async fn find_by_id(&self, id: i32) -> Result<Option<house::Model>, ServiceError>;
    async fn insert(&self, attrs: HouseAttrs, image_name: Option<String>) -> Result<house::Model, ServiceError>;
    async fn save(&self, existing: house::Model, attrs: HouseAttrs, image_name: Option<String>) -> Result<house::Model, ServiceError>;
    /// `false` when no row had this id.
    async fn delete_by_id(&self, id: i32) -> Result<bool, ServiceError>;

    /// Keyword search when `keyword` is non-empty, otherwise the full listing.
    async fn search(&self, keyword: Option<&str>, req: &PageRequest) -> Result<Page<house::Model>, ServiceError> {
        match keyword {
            Some(k) if !k.is_empty() => self.find_by_name_like(k, req).await,
            _ => self.find_all(req).await,
        }
    }

    /// Eager fetch that turns a missing row into `NotFound`.
    async fn get(&self, id: i32) -> Result<house::Model, ServiceError> {
        self.find_by_id(id).await?.ok_or_else(|| ServiceError::not_found("house"))
    }
}

/// SeaORM-backed repository implementation.
#[derive(Clone)]
pub struct SeaOrmHouseRepository {
    pub db: DatabaseConnection,
}

impl SeaOrmHouseRepository {
    pub fn new(db: DatabaseConnection) -> Self { Self { db } }
}

#[async_trait]
impl HouseRepository for SeaOrmHouseRepository {
    async fn find_all(&self, req: &PageRequest) -> Result<Page<house::Model>, ServiceError> {
        Ok(house::find_all_paginated(&self.db, req).await?)
    }

    async fn find_by_name_like(&self, keyword: &str, req: &PageRequest) -> Result<Page<house::Model>, ServiceError> {
        Ok(house::find_by_name_like_paginated(&self.db, keyword, req).await?)
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<house::Model>, ServiceError> {
        Ok(house::find_by_id(&self.db, id).await?)
    }

    async fn insert(&self, attrs: HouseAttrs, image_name: Option<String>) -> Result<house::Model, ServiceError> {
        Ok(house::insert(&self.db, attrs, image_name).await?)
    }

    async fn save(&self, existing: house::Model, attrs: HouseAttrs, image_name: Option<String>) -> Result<house::Model, ServiceError> {
        Ok(house::update(&self.db, existing, attrs, image_name).await?)
    }

    async fn delete_by_id(&self, id: i32) -> Result<bool, ServiceError> {
        Ok(house::delete_by_id(&self.db, id).await? > 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{get_db, sample_attrs};
    use common::pagination::Sort;

    #[tokio::test]
    async fn twenty_five_rows_page_as_ten_ten_five() -> anyhow::Result<()> {
        let repo = SeaOrmHouseRepository::new(get_db().await?);
        for i in 0..25 {
            repo.insert(sample_attrs(&format!("House {i:02}")), None).await?;
        }
        let mut sizes = vec![];
        for page in 0..3 {
            let p = repo.search(None, &PageRequest::new(page, 10, Sort::default())).await?;
            assert_eq!(p.total_elements, 25);
            sizes.push(p.content.len());
        }
        assert_eq!(sizes, vec![10, 10, 5]);
        Ok(())
    }

    #[tokio::test]
    async fn keyword_filters_and_empty_keyword_lists_all() -> anyhow::Result<()> {
        let repo = SeaOrmHouseRepository::new(get_db().await?);
        for name in ["Seaside Villa", "Seaside Cottage", "Hill Inn"] {
            repo.insert(sample_attrs(name), None).await?;
        }
        let req = PageRequest::default();
        let hits = repo.search(Some("Seaside"), &req).await?;
        assert_eq!(hits.total_elements, 2);
        assert!(hits.content.iter().all(|h| h.name.contains("Seaside")));

        let all = repo.search(Some(""), &req).await?;
        assert_eq!(all.total_elements, 3);
        Ok(())
    }

    #[tokio::test]
    async fn get_missing_is_not_found_and_delete_reports_absence() -> anyhow::Result<()> {
        let repo = SeaOrmHouseRepository::new(get_db().await?);
        let h = repo.insert(sample_attrs("Temp"), None).await?;
        assert_eq!(repo.get(h.id).await?.name, "Temp");
        assert!(repo.delete_by_id(h.id).await?);
        assert!(!repo.delete_by_id(h.id).await?);
        assert!(matches!(repo.get(h.id).await, Err(ServiceError::NotFound(_))));
        Ok(())
    }
}
