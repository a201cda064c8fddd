pub mod assets;
pub mod prelude;
pub mod stripes;
pub mod styling;
pub mod theme;

pub use assets::*;
pub use stripes::*;
pub use theme::*;
