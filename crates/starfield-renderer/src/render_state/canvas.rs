use starfield_core::{CircleMesh, MeshCanvas};

use crate::star_pipeline::StarBufferSet;

/// [`MeshCanvas`] that uploads each star's mesh to its GPU buffers and
/// remembers which slots to draw this frame.
pub struct FrameCanvas<'a> {
    device: &'a wgpu::Device,
    queue: &'a wgpu::Queue,
    buffers: &'a mut StarBufferSet,
    drawn: Vec<usize>,
}

impl<'a> FrameCanvas<'a> {
    pub fn new(device: &'a wgpu::Device, queue: &'a wgpu::Queue, buffers: &'a mut StarBufferSet) -> Self {
        Self {
            device,
            queue,
            buffers,
            drawn: Vec::new(),
        }
    }

    /// Slots drawn this frame, in draw order.
    pub fn into_drawn(self) -> Vec<usize> {
        self.drawn
    }
}

impl MeshCanvas for FrameCanvas<'_> {
    fn draw_mesh(&mut self, slot: usize, mesh: &CircleMesh) {
        self.buffers.upload(self.device, self.queue, slot, mesh);
        self.drawn.push(slot);
    }
}
