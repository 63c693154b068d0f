pub mod chart_service;
pub mod table_service;
