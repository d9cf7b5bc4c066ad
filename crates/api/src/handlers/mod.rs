pub mod artworks;
pub mod assets;
pub mod dashboard;
pub mod pages;
