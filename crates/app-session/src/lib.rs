pub mod bodies;
pub mod feed;
pub mod frame;
pub mod scene;
pub mod services;

pub use bodies::*;
pub use feed::*;
pub use frame::*;
pub use scene::*;
pub use services::*;
