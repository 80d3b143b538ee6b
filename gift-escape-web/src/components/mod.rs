pub mod atoms;
pub mod footer;
pub mod header;
pub mod ui;
