mod coords;
mod edge;
mod rectangle;

pub use coords::EdgeCoordinates;
pub use edge::Edge;
pub use rectangle::Rectangle;
