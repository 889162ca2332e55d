#![cfg(test)]
use models::house::HouseAttrs;
use sea_orm::DatabaseConnection;

use crate::house::HouseRegisterForm;

/// Fresh in-memory database per test, schema applied by the real migrator.
pub async fn get_db() -> Result<DatabaseConnection, anyhow::Error> {
    models::db::connect_sqlite_memory().await
}

pub fn sample_attrs(name: &str) -> HouseAttrs {
    HouseAttrs {
        name: name.to_string(),
        description: "A calm place to stay".into(),
        price: 8000,
        capacity: 4,
        postal_code: "100-0001".into(),
        address: "1-1 Beach Road".into(),
        phone_number: "090-1234-5678".into(),
    }
}

pub fn sample_register_form(name: &str) -> HouseRegisterForm {
    HouseRegisterForm {
        name: name.to_string(),
        image_name: Some("house.jpg".into()),
        description: "A calm place to stay".into(),
        price: "8000".into(),
        capacity: "4".into(),
        postal_code: "100-0001".into(),
        address: "1-1 Beach Road".into(),
        phone_number: "090-1234-5678".into(),
    }
}
