pub mod controllers;
pub mod form;
pub mod pages;
pub mod routers;
pub mod server;
pub mod storage;
pub mod types;
pub mod utilities;
