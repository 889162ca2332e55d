//! Registration and edit forms for houses.
//!
//! Forms are bound straight from urlencoded bodies, so numeric fields arrive
//! as text and are parsed during validation; a bad number becomes a field
//! error instead of a rejected request.

use common::types::FieldError;
use models::house::{HouseAttrs, Model};
use serde::{Deserialize, Serialize};

const NAME_MAX: usize = 255;
const ADDRESS_MAX: usize = 255;
const SHORT_MAX: usize = 50;

/// Input for `POST /admin/houses/create`.
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(default)]
pub struct HouseRegisterForm {
    pub name: String,
    /// Filename assigned by the external image store, if an image was uploaded.
    pub image_name: Option<String>,
    pub description: String,
    pub price: String,
    pub capacity: String,
    pub postal_code: String,
    pub address: String,
    pub phone_number: String,
}

/// Input for `POST /admin/houses/{id}/update`.
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(default)]
pub struct HouseEditForm {
    pub id: Option<i32>,
    pub name: String,
    /// Replacement image filename; blank keeps the current image.
    pub image_name: Option<String>,
    pub description: String,
    pub price: String,
    pub capacity: String,
    pub postal_code: String,
    pub address: String,
    pub phone_number: String,
}

/// A form that passed validation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ValidHouse {
    pub attrs: HouseAttrs,
    pub image_name: Option<String>,
}

impl HouseRegisterForm {
    pub fn validate(&self) -> Result<ValidHouse, Vec<FieldError>> {
        let attrs = validate_attrs(&Fields {
            name: &self.name,
            description: &self.description,
            price: &self.price,
            capacity: &self.capacity,
            postal_code: &self.postal_code,
            address: &self.address,
            phone_number: &self.phone_number,
        })?;
        Ok(ValidHouse { attrs, image_name: non_blank(self.image_name.as_deref()) })
    }
}

impl HouseEditForm {
    /// Pre-fill from a stored row. The image field stays empty so that a
    /// resubmission without a new upload keeps the current image.
    pub fn from_house(house: &Model) -> Self {
        Self {
            id: Some(house.id),
            name: house.name.clone(),
            image_name: None,
            description: house.description.clone(),
            price: house.price.to_string(),
            capacity: house.capacity.to_string(),
            postal_code: house.postal_code.clone(),
            address: house.address.clone(),
            phone_number: house.phone_number.clone(),
        }
    }

    pub fn validate(&self) -> Result<ValidHouse, Vec<FieldError>> {
        let attrs = validate_attrs(&Fields {
            name: &self.name,
            description: &self.description,
            price: &self.price,
            capacity: &self.capacity,
            postal_code: &self.postal_code,
            address: &self.address,
            phone_number: &self.phone_number,
        })?;
        Ok(ValidHouse { attrs, image_name: non_blank(self.image_name.as_deref()) })
    }
}

struct Fields<'a> {
    name: &'a str,
    description: &'a str,
    price: &'a str,
    capacity: &'a str,
    postal_code: &'a str,
    address: &'a str,
    phone_number: &'a str,
}

fn non_blank(v: Option<&str>) -> Option<String> {
    v.map(str::trim).filter(|s| !s.is_empty()).map(str::to_string)
}

fn required_text(
    errors: &mut Vec<FieldError>,
    field: &'static str,
    label: &str,
    value: &str,
    max: Option<usize>,
) -> String {
    let v = value.trim();
    if v.is_empty() {
        errors.push(FieldError::new(field, format!("Please enter the {label}.")));
    } else if let Some(max) = max {
        if v.chars().count() > max {
            errors.push(FieldError::new(field, format!("The {label} must be at most {max} characters.")));
        }
    }
    v.to_string()
}

fn non_negative(errors: &mut Vec<FieldError>, field: &'static str, label: &str, value: &str) -> i32 {
    let v = value.trim();
    if v.is_empty() {
        errors.push(FieldError::new(field, format!("Please enter the {label}.")));
        return 0;
    }
    match v.parse::<i32>() {
        Ok(n) if n >= 0 => n,
        Ok(_) => {
            errors.push(FieldError::new(field, format!("The {label} must be 0 or greater.")));
            0
        }
        Err(_) => {
            errors.push(FieldError::new(field, format!("The {label} must be a whole number.")));
            0
        }
    }
}

fn validate_attrs(f: &Fields<'_>) -> Result<HouseAttrs, Vec<FieldError>> {
    let mut errors = Vec::new();
    let attrs = HouseAttrs {
        name: required_text(&mut errors, "name", "house name", f.name, Some(NAME_MAX)),
        description: required_text(&mut errors, "description", "description", f.description, None),
        price: non_negative(&mut errors, "price", "price", f.price),
        capacity: non_negative(&mut errors, "capacity", "capacity", f.capacity),
        postal_code: required_text(&mut errors, "postal_code", "postal code", f.postal_code, Some(SHORT_MAX)),
        address: required_text(&mut errors, "address", "address", f.address, Some(ADDRESS_MAX)),
        phone_number: required_text(&mut errors, "phone_number", "phone number", f.phone_number, Some(SHORT_MAX)),
    };
    if errors.is_empty() { Ok(attrs) } else { Err(errors) }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> HouseRegisterForm {
        HouseRegisterForm {
            name: "Seaside Villa".into(),
            image_name: Some("villa.jpg".into()),
            description: "Ocean view".into(),
            price: "8000".into(),
            capacity: "4".into(),
            postal_code: "100-0001".into(),
            address: "1-1 Beach Road".into(),
            phone_number: "090-1234-5678".into(),
        }
    }

    fn fields(errors: &[FieldError]) -> Vec<&'static str> {
        errors.iter().map(|e| e.field).collect()
    }

    #[test]
    fn valid_registration_trims_and_parses() {
        let mut form = filled();
        form.name = "  Seaside Villa ".into();
        let valid = form.validate().unwrap();
        assert_eq!(valid.attrs.name, "Seaside Villa");
        assert_eq!(valid.attrs.price, 8000);
        assert_eq!(valid.attrs.capacity, 4);
        assert_eq!(valid.image_name.as_deref(), Some("villa.jpg"));
    }

    #[test]
    fn empty_form_reports_every_required_field() {
        let errors = HouseRegisterForm::default().validate().unwrap_err();
        assert_eq!(
            fields(&errors),
            vec!["name", "description", "price", "capacity", "postal_code", "address", "phone_number"]
        );
    }

    #[test]
    fn numbers_must_be_whole_and_non_negative() {
        let mut form = filled();
        form.price = "-1".into();
        form.capacity = "four".into();
        let errors = form.validate().unwrap_err();
        assert_eq!(fields(&errors), vec!["price", "capacity"]);
        assert!(errors[0].message.contains("0 or greater"));
        assert!(errors[1].message.contains("whole number"));

        form.price = "0".into();
        form.capacity = "0".into();
        assert!(form.validate().is_ok());
    }

    #[test]
    fn overlong_name_is_rejected() {
        let mut form = filled();
        form.name = "x".repeat(256);
        let errors = form.validate().unwrap_err();
        assert_eq!(fields(&errors), vec!["name"]);
    }

    #[test]
    fn blank_image_means_no_image() {
        let mut form = filled();
        form.image_name = Some("   ".into());
        assert_eq!(form.validate().unwrap().image_name, None);
    }

    #[test]
    fn edit_form_prefill_leaves_image_empty() {
        let house = Model {
            id: 7,
            name: "Lake House".into(),
            image_name: Some("lake.png".into()),
            description: "Calm".into(),
            price: 12000,
            capacity: 6,
            postal_code: "060-0000".into(),
            address: "Sapporo".into(),
            phone_number: "011-000-0000".into(),
            created_at: Default::default(),
            updated_at: Default::default(),
        };
        let form = HouseEditForm::from_house(&house);
        assert_eq!(form.id, Some(7));
        assert_eq!(form.price, "12000");
        assert_eq!(form.image_name, None);
        let valid = form.validate().unwrap();
        assert_eq!(valid.attrs.capacity, 6);
        assert_eq!(valid.image_name, None);
    }
}
