mod coords;
mod filter;
mod style;
mod view;

pub use coords::*;
pub use filter::*;
pub use style::*;
pub use view::*;
