pub mod configuration;
pub mod routes;
pub mod services;
pub mod startup;
