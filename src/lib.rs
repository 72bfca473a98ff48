// Library for tests to access modules

pub mod config;
pub mod delta;
pub mod error;
pub mod metrics_repo;
pub mod models;
pub mod report;
pub mod sensor;
pub mod state_store;
