pub mod book;
pub mod pages;
