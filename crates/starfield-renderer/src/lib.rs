pub mod gpu;
pub mod perf;
pub mod render_state;
pub mod star_pipeline;

pub use gpu::{GpuContext, PhysicalSize, RendererError};
pub use perf::{FrameGate, FrameTimer};
pub use render_state::{FrameCanvas, FrameOutcome, RenderState};
pub use star_pipeline::{StarBufferSet, StarPipeline};
