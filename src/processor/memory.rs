pub trait Memory {
    /// Read a byte from the specified `address`
    fn read(&self, address: u16) -> u8;

    /// Write a byte of `data` to the specified `address`
    fn write(&mut self, address: u16, data: u8);

    /// Memory size in bytes
    fn size(&self) -> usize;
}

/// Plain read/write memory of a fixed size
pub struct Ram {
    memory: Vec<u8>,
}

impl Ram {
    pub fn new(size: usize) -> Self {
        Self {
            memory: vec![0; size],
        }
    }
}

impl Memory for Ram {
    fn read(&self, address: u16) -> u8 {
        self.memory[address as usize]
    }

    fn write(&mut self, address: u16, data: u8) {
        self.memory[address as usize] = data;
    }

    fn size(&self) -> usize {
        self.memory.len()
    }
}

/// Memory that is visible `mirrors + 1` times one after another. Any address
/// inside the mirrored window is folded back into the underlying memory.
pub struct MirroredMemory<M: Memory> {
    memory: M,
    mirrors: usize,
}

impl<M: Memory> MirroredMemory<M> {
    pub fn new(memory: M, mirrors: usize) -> Self {
        Self { memory, mirrors }
    }

    fn fold(&self, address: u16) -> u16 {
        (address as usize % self.memory.size()) as u16
    }
}

impl<M: Memory> Memory for MirroredMemory<M> {
    fn read(&self, address: u16) -> u8 {
        self.memory.read(self.fold(address))
    }

    fn write(&mut self, address: u16, data: u8) {
        self.memory.write(self.fold(address), data);
    }

    fn size(&self) -> usize {
        self.memory.size() * (self.mirrors + 1)
    }
}
