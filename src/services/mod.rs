// Service exports
pub mod catalog;
pub mod metrics;

pub use catalog::{CatalogError, CatalogSkill, SkillCatalog};
pub use metrics::{metadata, Metadata, OperationStats, PerformanceLogger, PerformanceMetric};
