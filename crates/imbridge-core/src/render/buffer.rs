use crate::device::{GraphicsDevice, IndexFormat, VertexLayout};

/// What a [`GeometryBuffer`] holds.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum GeometryKind {
    Vertices(VertexLayout),
    Indices(IndexFormat),
}

impl GeometryKind {
    /// Bytes per element.
    #[inline]
    pub fn stride(self) -> usize {
        match self {
            GeometryKind::Vertices(layout) => layout.stride as usize,
            GeometryKind::Indices(format) => format.size(),
        }
    }
}

/// Capacity chosen when `required` elements no longer fit: 1.5x, rounded up.
#[inline]
pub fn grown_capacity(required: usize) -> usize {
    (required * 3).div_ceil(2)
}

/// Device buffer plus a CPU staging mirror of the same size.
///
/// Grows when a frame needs more elements than fit and never shrinks.
#[derive(Debug)]
pub struct GeometryBuffer<B> {
    kind: GeometryKind,
    gpu: Option<B>,
    capacity: usize,
    staging: Vec<u8>,
    used: usize,
}

impl<B> GeometryBuffer<B> {
    pub fn new(kind: GeometryKind) -> Self {
        Self {
            kind,
            gpu: None,
            capacity: 0,
            staging: Vec::new(),
            used: 0,
        }
    }

    #[inline]
    pub fn kind(&self) -> GeometryKind {
        self.kind
    }

    /// Capacity in elements.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Bytes packed since the last [`GeometryBuffer::clear`].
    #[inline]
    pub fn used_bytes(&self) -> usize {
        self.used
    }

    #[inline]
    pub fn gpu(&self) -> Option<&B> {
        self.gpu.as_ref()
    }

    /// Makes room for `required` elements. Returns `true` if the device
    /// buffer was replaced.
    ///
    /// The old device buffer is released before the new one is allocated.
    /// Staged bytes do not survive growth.
    pub fn ensure_capacity<D>(&mut self, device: &mut D, required: usize) -> bool
    where
        D: GraphicsDevice<Buffer = B>,
    {
        if required <= self.capacity {
            return false;
        }

        let new_cap = grown_capacity(required);

        if let Some(old) = self.gpu.take() {
            device.release_buffer(old);
        }

        self.gpu = Some(match self.kind {
            GeometryKind::Vertices(layout) => device.create_vertex_buffer(&layout, new_cap),
            GeometryKind::Indices(format) => device.create_index_buffer(format, new_cap),
        });
        self.staging = vec![0; new_cap * self.kind.stride()];
        self.capacity = new_cap;
        self.used = 0;

        log::debug!(
            "geometry buffer {:?} grown to {} elements ({} required)",
            self.kind,
            new_cap,
            required
        );
        true
    }

    /// Starts packing a new frame.
    #[inline]
    pub fn clear(&mut self) {
        self.used = 0;
    }

    /// Appends raw element bytes after what is already packed.
    ///
    /// The caller sizes the buffer with [`GeometryBuffer::ensure_capacity`]
    /// first; overflowing the staging area panics.
    pub fn extend(&mut self, bytes: &[u8]) {
        let end = self.used + bytes.len();
        self.staging[self.used..end].copy_from_slice(bytes);
        self.used = end;
    }

    /// Writes the packed bytes (and only those) to the device buffer.
    pub fn upload<D>(&self, device: &mut D)
    where
        D: GraphicsDevice<Buffer = B>,
    {
        if self.used == 0 {
            return;
        }
        if let Some(gpu) = self.gpu.as_ref() {
            device.write_buffer(gpu, &self.staging[..self.used]);
        }
    }

    /// Gives the device buffer back to the device.
    pub fn release<D>(&mut self, device: &mut D)
    where
        D: GraphicsDevice<Buffer = B>,
    {
        if let Some(old) = self.gpu.take() {
            device.release_buffer(old);
        }
        self.staging = Vec::new();
        self.capacity = 0;
        self.used = 0;
    }
}
