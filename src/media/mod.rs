pub mod mime;
pub mod player;
