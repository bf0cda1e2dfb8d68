pub mod bits;
pub mod encoder;
pub mod error;
pub mod level;
pub mod scheme;
pub mod signal;
pub mod time_axis;
pub mod validate;

pub use bits::BitString;
pub use encoder::{encode, encode_str};
pub use error::{LinecodeError, LinecodeResult};
pub use level::{Level, LevelSequence};
pub use scheme::Scheme;
pub use signal::Signal;
pub use time_axis::{build_axis, Tick, TimeAxis};
pub use validate::validate;
