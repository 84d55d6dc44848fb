mod macros;

pub mod blend;
pub mod channels;
pub mod compositor;
pub mod evaluator;
pub mod math;
pub mod packet;
pub mod resolver;
pub mod settings;

#[doc(hidden)]
pub use log;
