pub mod bbox;
pub mod dataset;
pub mod image;
pub mod operations;

pub use self::bbox::*;
pub use self::dataset::*;
pub use self::image::*;
pub use self::operations::*;
