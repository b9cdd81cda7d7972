// Library root for the Content Site Challenge server

pub mod api;
pub mod config;
pub mod core;
pub mod monitoring;
pub mod pages;
pub mod utils;
