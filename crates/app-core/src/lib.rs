pub mod constants;
pub mod gestures;
pub mod landmarks;
pub mod mapping;
pub mod noise;

pub use constants::*;
pub use gestures::*;
pub use landmarks::*;
pub use mapping::*;
pub use noise::*;
