pub mod orders;
pub mod pages;
pub mod public;
