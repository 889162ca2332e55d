pub mod routes;
pub mod startup;
pub mod state;
pub mod houses;
pub mod flash;
pub mod view;
pub mod metrics;
pub mod errors;
pub mod openapi;

pub use startup::run;
