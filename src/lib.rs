pub mod config;
pub mod data_models;
pub mod ideas;
pub mod service;
