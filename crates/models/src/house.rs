use chrono::Utc;
use common::pagination::{Direction, Page, PageRequest};
use sea_orm::{
    entity::prelude::*, ActiveModelTrait, DatabaseConnection, EntityTrait, Order, PaginatorTrait,
    QueryFilter, QueryOrder, Select, Set,
};
use serde::{Deserialize, Serialize};

use crate::errors::ModelError;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "houses")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub image_name: Option<String>,
    #[sea_orm(column_type = "Text")]
    pub description: String,
    pub price: i32,
    pub capacity: i32,
    pub postal_code: String,
    pub address: String,
    pub phone_number: String,
    pub created_at: DateTime,
    pub updated_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

#[async_trait::async_trait]
impl ActiveModelBehavior for ActiveModel {
    /// `created_at` and the initial `updated_at` come from column defaults;
    /// every later save refreshes `updated_at` here.
    async fn before_save<C>(mut self, _db: &C, insert: bool) -> Result<Self, DbErr>
    where
        C: ConnectionTrait,
    {
        if !insert {
            self.updated_at = Set(Utc::now().naive_utc());
        }
        Ok(self)
    }
}

/// Writable attributes of a house: everything except identity, image and timestamps.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HouseAttrs {
    pub name: String,
    pub description: String,
    pub price: i32,
    pub capacity: i32,
    pub postal_code: String,
    pub address: String,
    pub phone_number: String,
}

/// Map a public sort key onto a column. Both camelCase and snake_case
/// spellings are accepted for the timestamp columns.
pub fn sort_column(field: &str) -> Option<Column> {
    match field {
        "id" => Some(Column::Id),
        "name" => Some(Column::Name),
        "price" => Some(Column::Price),
        "capacity" => Some(Column::Capacity),
        "createdAt" | "created_at" => Some(Column::CreatedAt),
        "updatedAt" | "updated_at" => Some(Column::UpdatedAt),
        _ => None,
    }
}

async fn fetch_page(
    db: &DatabaseConnection,
    select: Select<Entity>,
    req: &PageRequest,
) -> Result<Page<Model>, ModelError> {
    let column = sort_column(&req.sort.field)
        .ok_or_else(|| ModelError::Validation(format!("unknown sort field: {}", req.sort.field)))?;
    let order = match req.sort.direction {
        Direction::Asc => Order::Asc,
        Direction::Desc => Order::Desc,
    };
    let mut select = select.order_by(column, order);
    if !matches!(column, Column::Id) {
        // stable ordering across pages when the sort key has duplicates
        select = select.order_by_asc(Column::Id);
    }
    let paginator = select.paginate(db, req.size);
    let total = paginator.num_items().await?;
    let rows = paginator.fetch_page(req.page).await?;
    Ok(Page::new(rows, req, total))
}

pub async fn find_all_paginated(db: &DatabaseConnection, req: &PageRequest) -> Result<Page<Model>, ModelError> {
    fetch_page(db, Entity::find(), req).await
}

/// `name LIKE '%keyword%'`; case sensitivity follows the database collation.
pub async fn find_by_name_like_paginated(
    db: &DatabaseConnection,
    keyword: &str,
    req: &PageRequest,
) -> Result<Page<Model>, ModelError> {
    fetch_page(db, Entity::find().filter(Column::Name.contains(keyword)), req).await
}

pub async fn find_by_id(db: &DatabaseConnection, id: i32) -> Result<Option<Model>, ModelError> {
    Ok(Entity::find_by_id(id).one(db).await?)
}

pub async fn insert(db: &DatabaseConnection, attrs: HouseAttrs, image_name: Option<String>) -> Result<Model, ModelError> {
    let am = ActiveModel {
        name: Set(attrs.name),
        image_name: Set(image_name),
        description: Set(attrs.description),
        price: Set(attrs.price),
        capacity: Set(attrs.capacity),
        postal_code: Set(attrs.postal_code),
        address: Set(attrs.address),
        phone_number: Set(attrs.phone_number),
        ..Default::default()
    };
    Ok(am.insert(db).await?)
}

/// Overwrite `existing` with `attrs`. `image_name` replaces the stored image
/// only when `Some`.
pub async fn update(
    db: &DatabaseConnection,
    existing: Model,
    attrs: HouseAttrs,
    image_name: Option<String>,
) -> Result<Model, ModelError> {
    let id = existing.id;
    let mut am: ActiveModel = existing.into();
    am.name = Set(attrs.name);
    am.description = Set(attrs.description);
    am.price = Set(attrs.price);
    am.capacity = Set(attrs.capacity);
    am.postal_code = Set(attrs.postal_code);
    am.address = Set(attrs.address);
    am.phone_number = Set(attrs.phone_number);
    if let Some(name) = image_name {
        am.image_name = Set(Some(name));
    }
    am.update(db).await.map_err(|e| match e {
        DbErr::RecordNotUpdated => ModelError::NotFound(format!("house {id} not found")),
        other => other.into(),
    })
}

/// Returns the number of rows removed (0 or 1).
pub async fn delete_by_id(db: &DatabaseConnection, id: i32) -> Result<u64, ModelError> {
    let res = Entity::delete_by_id(id).exec(db).await?;
    Ok(res.rows_affected)
}
