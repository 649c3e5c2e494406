pub mod classes;
pub mod components;
pub mod pages;
pub mod shell;
pub mod theme;
pub mod trend;
