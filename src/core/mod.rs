pub mod dork_builder;
pub mod interfaces;
pub mod models;
pub mod orchestrators;
pub mod people_databases;
