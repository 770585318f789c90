pub mod grid;
pub mod letterbox;
pub mod overlay;
pub mod roi;
