pub mod drift;
pub mod settings_record;

pub use drift::*;
pub use settings_record::*;
