//! Resource models for generating test configs

pub mod warehouse;

pub use warehouse::WarehouseModel;
