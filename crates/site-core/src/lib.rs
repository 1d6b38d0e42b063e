pub mod constants;
pub mod follower;
pub mod glow;
pub mod layout;
pub mod pointer;
pub mod repel;

pub use follower::*;
pub use glow::*;
pub use layout::*;
pub use pointer::*;
pub use repel::*;
