pub mod forms;
pub mod repository;
pub mod service;

pub use forms::{HouseEditForm, HouseRegisterForm, ValidHouse};
pub use repository::{HouseRepository, SeaOrmHouseRepository};
pub use service::HouseService;
