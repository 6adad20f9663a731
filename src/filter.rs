pub mod engine;
pub mod facets;
pub mod model;
pub mod quick;
pub mod weekly;
