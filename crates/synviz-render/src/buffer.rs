//! GPU buffer management.

use std::marker::PhantomData;

use wgpu::util::DeviceExt;

/// Creates a uniform buffer from data.
pub fn create_uniform_buffer<T: bytemuck::Pod>(
    device: &wgpu::Device,
    data: &T,
    label: Option<&str>,
) -> wgpu::Buffer {
    device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
        label,
        contents: bytemuck::bytes_of(data),
        usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
    })
}

/// A storage buffer that is rewritten every frame and grows on demand.
///
/// Capacity is counted in elements and never shrinks. When an upload does
/// not fit, the buffer is reallocated and [`GrowableBuffer::write`] reports
/// it so dependent bind groups can be rebuilt.
pub struct GrowableBuffer<T: bytemuck::Pod> {
    buffer: wgpu::Buffer,
    capacity: usize,
    len: usize,
    label: &'static str,
    _marker: PhantomData<T>,
}

impl<T: bytemuck::Pod> GrowableBuffer<T> {
    /// Creates an empty buffer with room for `capacity` elements (at least one).
    pub fn new(device: &wgpu::Device, capacity: usize, label: &'static str) -> Self {
        let capacity = capacity.max(1);
        Self {
            buffer: Self::allocate(device, capacity, label),
            capacity,
            len: 0,
            label,
            _marker: PhantomData,
        }
    }

    /// Uploads `data`, replacing the previous contents.
    ///
    /// Returns true if the underlying buffer was reallocated.
    pub fn write(&mut self, device: &wgpu::Device, queue: &wgpu::Queue, data: &[T]) -> bool {
        let grown = data.len() > self.capacity;
        if grown {
            let capacity = data.len().next_power_of_two();
            log::debug!(
                "growing {} from {} to {capacity} elements",
                self.label,
                self.capacity
            );
            self.buffer = Self::allocate(device, capacity, self.label);
            self.capacity = capacity;
        }
        if !data.is_empty() {
            queue.write_buffer(&self.buffer, 0, bytemuck::cast_slice(data));
        }
        self.len = data.len();
        grown
    }

    /// Returns the GPU buffer.
    pub fn buffer(&self) -> &wgpu::Buffer {
        &self.buffer
    }

    /// Returns the number of elements written by the last upload.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns true if the last upload was empty.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the capacity in elements.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    fn allocate(device: &wgpu::Device, capacity: usize, label: &str) -> wgpu::Buffer {
        device.create_buffer(&wgpu::BufferDescriptor {
            label: Some(label),
            size: (capacity * std::mem::size_of::<T>()) as wgpu::BufferAddress,
            usage: wgpu::BufferUsages::STORAGE | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        })
    }
}
