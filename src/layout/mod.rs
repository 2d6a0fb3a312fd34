mod loader;
mod types;

pub use loader::load_layouts;
pub use types::LayoutFile;
