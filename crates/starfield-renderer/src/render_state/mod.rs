mod canvas;
mod frame;
mod helpers;
mod state;

pub use canvas::FrameCanvas;
pub use frame::FrameOutcome;
pub use state::RenderState;
