pub mod catalog;
pub mod order;
pub mod response;
