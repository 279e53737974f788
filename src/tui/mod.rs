pub mod footer;
pub mod header;
pub mod home;
pub mod render;
pub mod runs;
pub mod spinner;
