pub mod io;
pub mod pixel;
pub mod rgba;
pub mod traits;

pub use self::pixel::Rgba;
pub use self::rgba::ImageRgba;
pub use self::traits::{ImageView, Rows};
