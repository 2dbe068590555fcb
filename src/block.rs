use std::fmt;

/// Descriptor of a contiguous region of a simulated memory space.
///
/// A block is plain data: lists hold handles to blocks (`&MemoryBlock`,
/// `Rc<MemoryBlock>`, ...) and compare them by value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MemoryBlock {
  base_address: usize,
  length: usize,
}

impl MemoryBlock {
  pub const fn new(
    base_address: usize,
    length: usize,
  ) -> Self {
    Self {
      base_address,
      length,
    }
  }

  pub fn base_address(&self) -> usize {
    self.base_address
  }

  pub fn length(&self) -> usize {
    self.length
  }

  /// First address past the end of the block.
  pub fn end_address(&self) -> usize {
    self.base_address.saturating_add(self.length)
  }

  pub fn contains(
    &self,
    address: usize,
  ) -> bool {
    address >= self.base_address && address < self.end_address()
  }
}

impl fmt::Display for MemoryBlock {
  fn fmt(
    &self,
    f: &mut fmt::Formatter<'_>,
  ) -> fmt::Result {
    write!(f, "({} , {})", self.base_address, self.length)
  }
}
