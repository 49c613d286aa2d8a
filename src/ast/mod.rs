pub mod display;
pub mod dto;
pub mod node;
pub mod normalizer;

pub use display::*;
pub use dto::AstNodeDto;
pub use node::*;
pub use normalizer::*;
