pub mod matrix;
pub mod normalize;
pub mod rsqrt;
pub mod rsqrt_neon;
pub mod rsqrt_sse;
pub mod table;
pub mod types;

pub use matrix::*;
pub use normalize::*;
pub use table::*;
pub use types::*;
