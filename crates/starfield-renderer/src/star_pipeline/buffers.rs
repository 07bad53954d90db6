//! Per-star GPU buffers, keyed by star slot.

use wgpu::util::DeviceExt;

use starfield_core::CircleMesh;

/// Vertex and index buffer for one star.
///
/// The index buffer is written once at creation. The vertex buffer is
/// rewritten in place every frame the star is drawn.
pub struct StarBuffers {
    pub vertex_buffer: wgpu::Buffer,
    pub index_buffer: wgpu::Buffer,
    pub vertex_count: u32,
    pub index_count: u32,
}

impl StarBuffers {
    pub fn new(device: &wgpu::Device, slot: usize, mesh: &CircleMesh) -> Self {
        let vertex_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some(&format!("star {slot} vertices")),
            contents: bytemuck::cast_slice(mesh.vertices()),
            usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
        });
        let index_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some(&format!("star {slot} indices")),
            contents: bytemuck::cast_slice(mesh.indices()),
            usage: wgpu::BufferUsages::INDEX,
        });

        Self {
            vertex_buffer,
            index_buffer,
            vertex_count: mesh.vertices().len() as u32,
            index_count: mesh.indices().len() as u32,
        }
    }
}

/// All star buffers. A slot's buffers are created the first time that star
/// is drawn and live as long as the set.
#[derive(Default)]
pub struct StarBufferSet {
    slots: Vec<Option<StarBuffers>>,
}

impl StarBufferSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Write `mesh` into the buffers for `slot`, creating them on first use.
    pub fn upload(&mut self, device: &wgpu::Device, queue: &wgpu::Queue, slot: usize, mesh: &CircleMesh) {
        if slot >= self.slots.len() {
            self.slots.resize_with(slot + 1, || None);
        }

        match &self.slots[slot] {
            Some(buffers) if buffers.vertex_count as usize == mesh.vertices().len() => {
                queue.write_buffer(&buffers.vertex_buffer, 0, bytemuck::cast_slice(mesh.vertices()));
            }
            _ => {
                self.slots[slot] = Some(StarBuffers::new(device, slot, mesh));
            }
        }
    }

    pub fn get(&self, slot: usize) -> Option<&StarBuffers> {
        self.slots.get(slot).and_then(Option::as_ref)
    }
}
