use std::num::NonZeroU64;

use super::commands::align_up;
use super::pipeline::TRANSFORM_SIZE;

/// Per-draw transform matrices packed into one dynamic-offset uniform buffer.
///
/// Consecutive identical matrices share a slot, so a GUI frame usually needs
/// exactly one.
pub(super) struct TransformRing {
    stride: u64,
    staging: Vec<u8>,
    last: Option<([f32; 16], u32)>,
    buffer: Option<wgpu::Buffer>,
    bind_group: Option<wgpu::BindGroup>,
    capacity: u64,
}

impl TransformRing {
    pub fn new(min_offset_alignment: u32) -> Self {
        Self {
            stride: align_up(TRANSFORM_SIZE, min_offset_alignment.max(1) as u64),
            staging: Vec::new(),
            last: None,
            buffer: None,
            bind_group: None,
            capacity: 0,
        }
    }

    /// Stages `mvp` and returns its dynamic offset.
    pub fn push(&mut self, mvp: [f32; 16]) -> u32 {
        if let Some((last, offset)) = self.last {
            if last == mvp {
                return offset;
            }
        }

        let offset = self.staging.len() as u32;
        self.staging.extend_from_slice(bytemuck::cast_slice(&mvp));
        self.staging.resize(offset as usize + self.stride as usize, 0);
        self.last = Some((mvp, offset));
        offset
    }

    pub fn clear(&mut self) {
        self.staging.clear();
        self.last = None;
    }

    /// Uploads staged matrices, growing the buffer if needed.
    pub fn upload(
        &mut self,
        device: &wgpu::Device,
        queue: &wgpu::Queue,
        layout: &wgpu::BindGroupLayout,
    ) -> Option<&wgpu::BindGroup> {
        let slots = self.staging.len() as u64 / self.stride;
        if slots == 0 {
            return None;
        }

        if slots > self.capacity || self.buffer.is_none() {
            let new_cap = slots.next_power_of_two().max(4);
            let buffer = device.create_buffer(&wgpu::BufferDescriptor {
                label: Some("imbridge transform ubo"),
                size: new_cap * self.stride,
                usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
                mapped_at_creation: false,
            });
            let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
                label: Some("imbridge transform bind group"),
                layout,
                entries: &[wgpu::BindGroupEntry {
                    binding: 0,
                    resource: wgpu::BindingResource::Buffer(wgpu::BufferBinding {
                        buffer: &buffer,
                        offset: 0,
                        size: NonZeroU64::new(TRANSFORM_SIZE),
                    }),
                }],
            });

            self.buffer = Some(buffer);
            self.bind_group = Some(bind_group);
            self.capacity = new_cap;
        }

        let buffer = self.buffer.as_ref()?;
        queue.write_buffer(buffer, 0, &self.staging);
        self.bind_group.as_ref()
    }
}
