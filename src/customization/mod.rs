pub mod method;
pub mod settings;
pub mod tolerance;

pub use method::*;
pub use settings::*;
pub use tolerance::*;
