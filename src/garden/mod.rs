pub mod blob;
pub mod field;
pub mod light;
pub mod palette;
pub mod plugin;

pub use field::GardenField;
pub use palette::Palette;
pub use plugin::GardenPlugin;
