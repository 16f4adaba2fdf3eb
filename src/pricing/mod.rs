pub mod calculator;
pub mod catalog;
pub mod engine;
pub mod models;

pub use calculator::calculate;
pub use catalog::CatalogKind;
pub use engine::PricingEngine;
pub use models::{
    AcademicLevel, CatalogOption, FieldOption, PriceBreakdown, ProjectType, Quote, Selection,
};
