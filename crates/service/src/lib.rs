//! Service layer for house listings.
//! - `house::repository` is the data-access seam (trait + SeaORM implementation).
//! - `house::service` orchestrates validated writes.
//! - `house::forms` binds and validates the registration and edit forms.

pub mod errors;
pub mod house;
#[cfg(test)]
pub mod test_support;
