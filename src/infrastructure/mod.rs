pub mod config;
pub mod csv;
pub mod excel;
pub mod logging;
pub mod storage;
