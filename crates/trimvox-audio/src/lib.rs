pub mod accumulator;
pub mod error;
pub mod wav;

pub use accumulator::FrameAccumulator;
pub use error::AudioError;
pub use wav::{read_stereo, write_mono, StereoPcm};
