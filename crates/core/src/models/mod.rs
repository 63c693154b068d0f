pub mod analysis;
pub mod chart;
pub mod route;
pub mod settings;
pub mod table;
