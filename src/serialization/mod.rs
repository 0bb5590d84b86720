pub mod codec;
pub mod formats;
pub mod options;

pub use codec::*;
pub use formats::*;
pub use options::*;
