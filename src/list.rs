use std::{fmt, iter::FusedIterator, marker::PhantomData, ptr::NonNull};

use crate::{
  error::{ListError, ListResult},
  node::{Node, NodeId},
};

type Link<B> = Option<NonNull<Node<B>>>;

/// Prints a one-line summary of `list`: size, both ends and its rendering.
pub fn print_list<B: fmt::Display>(
  label: &str,
  list: &BlockList<B>,
) {
  let describe = |node: Option<&Node<B>>| match node {
    Some(node) => node.block().to_string(),
    None => String::from("none"),
  };

  println!(
    "[{}] size = {}, first = {}, last = {}, blocks = {}",
    label,
    list.size(),
    describe(list.first()),
    describe(list.last()),
    list
  );
}

/// Singly-linked list of block handles with O(1) access to both ends.
///
/// `first` owns the chain, every node owns its successor and `last` is a
/// non-owning alias of the final node. Both ends are `None` exactly when
/// `size == 0`.
pub struct BlockList<B> {
  first: Link<B>,
  last: Link<B>,
  size: usize,
  _owns: PhantomData<Box<Node<B>>>,
}

unsafe impl<B: Send> Send for BlockList<B> {}

unsafe impl<B: Sync> Sync for BlockList<B> {}

impl<B> BlockList<B> {
  pub fn new() -> Self {
    Self {
      first: None,
      last: None,
      size: 0,
      _owns: PhantomData,
    }
  }

  pub fn first(&self) -> Option<&Node<B>> {
    self.first.map(|node| unsafe { node.as_ref() })
  }

  pub fn last(&self) -> Option<&Node<B>> {
    self.last.map(|node| unsafe { node.as_ref() })
  }

  pub fn size(&self) -> usize {
    self.size
  }

  pub fn is_empty(&self) -> bool {
    self.size == 0
  }

  fn out_of_range(
    &self,
    index: usize,
  ) -> ListError {
    ListError::IndexOutOfRange {
      index,
      size: self.size,
    }
  }

  /// Walks `index` links from the head; `None` once the chain runs out.
  fn node_ptr(
    &self,
    index: usize,
  ) -> Link<B> {
    let mut current = self.first;
    for _ in 0..index {
      current = current.and_then(|node| unsafe { node.as_ref().next });
    }
    current
  }

  /// Returns the node at `index`.
  ///
  /// `index == size` is accepted and yields `Ok(None)`; anything past that is
  /// out of range.
  pub fn node_at(
    &self,
    index: usize,
  ) -> ListResult<Option<&Node<B>>> {
    if index > self.size {
      return Err(self.out_of_range(index));
    }
    Ok(self.node_ptr(index).map(|node| unsafe { node.as_ref() }))
  }

  pub fn block_at(
    &self,
    index: usize,
  ) -> ListResult<&B> {
    if index >= self.size {
      return Err(self.out_of_range(index));
    }
    self
      .node_ptr(index)
      .map(|node| unsafe { &node.as_ref().block })
      .ok_or(self.out_of_range(index))
  }

  /// Inserts `block` so that it ends up at position `index`, shifting the
  /// following elements back by one.
  ///
  /// Inserting at either end is O(1); anywhere else costs a walk to
  /// `index - 1`.
  pub fn insert_at(
    &mut self,
    index: usize,
    block: B,
  ) -> ListResult<()> {
    if index > self.size {
      return Err(self.out_of_range(index));
    }
    self.link(index, block);
    Ok(())
  }

  pub fn insert_first(
    &mut self,
    block: B,
  ) {
    self.link(0, block);
  }

  pub fn insert_last(
    &mut self,
    block: B,
  ) {
    self.link(self.size, block);
  }

  fn link(
    &mut self,
    index: usize,
    block: B,
  ) {
    debug_assert!(index <= self.size);

    let node = NonNull::from(Box::leak(Box::new(Node::new(block))));

    unsafe {
      match self.last {
        Some(last) if index == self.size => {
          (*last.as_ptr()).next = Some(node);
          self.last = Some(node);
        }
        _ if index == 0 => {
          (*node.as_ptr()).next = self.first;
          self.first = Some(node);
          if self.last.is_none() {
            self.last = Some(node);
          }
        }
        _ => {
          if let Some(prev) = self.node_ptr(index - 1) {
            (*node.as_ptr()).next = (*prev.as_ptr()).next;
            (*prev.as_ptr()).next = Some(node);
          }
        }
      }
    }

    self.size += 1;
  }

  /// Detaches the node following `prev` (the head when `prev` is `None`) and
  /// hands back its block. The list is consistent again before the node is
  /// released.
  ///
  /// # Safety
  ///
  /// `prev` must be `None` or a node of this list.
  unsafe fn unlink_after(
    &mut self,
    prev: Link<B>,
  ) -> Option<B> {
    unsafe {
      let node = match prev {
        None => {
          let node = self.first?;
          self.first = node.as_ref().next;
          node
        }
        Some(prev) => {
          let node = prev.as_ref().next?;
          (*prev.as_ptr()).next = node.as_ref().next;
          node
        }
      };

      if self.last == Some(node) {
        self.last = prev;
      }
      self.size -= 1;

      Some(Box::from_raw(node.as_ptr()).block)
    }
  }

  pub fn remove_at(
    &mut self,
    index: usize,
  ) -> ListResult<B> {
    if index >= self.size {
      return Err(self.out_of_range(index));
    }

    let prev = if index == 0 {
      None
    } else {
      self.node_ptr(index - 1)
    };

    unsafe { self.unlink_after(prev) }.ok_or(self.out_of_range(index))
  }

  /// Removes the node identified by `id`.
  ///
  /// The chain is searched first, so an id belonging to another list or to a
  /// node that was already removed is reported as `NodeNotFound` and the list
  /// is left untouched.
  pub fn remove_node(
    &mut self,
    id: NodeId,
  ) -> ListResult<B> {
    let mut prev: Link<B> = None;
    let mut current = self.first;

    while let Some(node) = current {
      let node = unsafe { node.as_ref() };
      if node.id() == id {
        return unsafe { self.unlink_after(prev) }.ok_or(ListError::NodeNotFound);
      }
      prev = current;
      current = node.next;
    }

    Err(ListError::NodeNotFound)
  }

  fn remove_first(&mut self) -> Option<B> {
    unsafe { self.unlink_after(None) }
  }

  /// Releases every node.
  ///
  /// The chain is detached before any block is dropped, so a panicking
  /// `Drop` in a block leaves behind an empty list; the remaining nodes are
  /// still released while unwinding.
  pub fn clear(&mut self) {
    let chain = self.first.take();
    self.last = None;
    self.size = 0;

    let mut guard = ChainGuard(chain);
    while let Some(node) = guard.0 {
      let node = unsafe { Box::from_raw(node.as_ptr()) };
      guard.0 = node.next;
      drop(node);
    }
  }

  pub fn iter(&self) -> Iter<'_, B> {
    Iter {
      next: self.first(),
      remaining: self.size,
    }
  }
}

/// Owns a detached tail of a chain and frees it if dropped mid-walk.
struct ChainGuard<B>(Link<B>);

impl<B> Drop for ChainGuard<B> {
  fn drop(&mut self) {
    while let Some(node) = self.0 {
      let node = unsafe { Box::from_raw(node.as_ptr()) };
      self.0 = node.next;
    }
  }
}

impl<B: PartialEq> BlockList<B> {
  /// Position of the first block equal to `block`, or `None`.
  pub fn index_of(
    &self,
    block: &B,
  ) -> Option<usize> {
    self.iter().position(|candidate| candidate == block)
  }

  pub fn contains(
    &self,
    block: &B,
  ) -> bool {
    self.index_of(block).is_some()
  }

  /// Removes the first block equal to `block`.
  pub fn remove_block(
    &mut self,
    block: &B,
  ) -> ListResult<B> {
    let index = self.index_of(block).ok_or(ListError::BlockNotFound)?;
    self.remove_at(index)
  }
}

impl<B> Drop for BlockList<B> {
  fn drop(&mut self) {
    self.clear();
  }
}

impl<B> Default for BlockList<B> {
  fn default() -> Self {
    Self::new()
  }
}

impl<B: fmt::Display> fmt::Display for BlockList<B> {
  fn fmt(
    &self,
    f: &mut fmt::Formatter<'_>,
  ) -> fmt::Result {
    for block in self {
      write!(f, "{} ", block)?;
    }
    Ok(())
  }
}

impl<B: fmt::Debug> fmt::Debug for BlockList<B> {
  fn fmt(
    &self,
    f: &mut fmt::Formatter<'_>,
  ) -> fmt::Result {
    f.debug_list().entries(self.iter()).finish()
  }
}

impl<B> FromIterator<B> for BlockList<B> {
  fn from_iter<I: IntoIterator<Item = B>>(iter: I) -> Self {
    let mut list = Self::new();
    list.extend(iter);
    list
  }
}

impl<B> Extend<B> for BlockList<B> {
  fn extend<I: IntoIterator<Item = B>>(
    &mut self,
    iter: I,
  ) {
    for block in iter {
      self.insert_last(block);
    }
  }
}

/// Borrowing iterator over the blocks of a `BlockList`, head to tail.
pub struct Iter<'a, B> {
  next: Option<&'a Node<B>>,
  remaining: usize,
}

impl<'a, B> Iterator for Iter<'a, B> {
  type Item = &'a B;

  fn next(&mut self) -> Option<Self::Item> {
    let node = self.next?;
    self.next = node.next();
    self.remaining -= 1;
    Some(node.block())
  }

  fn size_hint(&self) -> (usize, Option<usize>) {
    (self.remaining, Some(self.remaining))
  }
}

impl<B> ExactSizeIterator for Iter<'_, B> {}

impl<B> FusedIterator for Iter<'_, B> {}

impl<'a, B> IntoIterator for &'a BlockList<B> {
  type Item = &'a B;
  type IntoIter = Iter<'a, B>;

  fn into_iter(self) -> Self::IntoIter {
    self.iter()
  }
}

/// Owning iterator; drains the list from the head.
pub struct IntoIter<B>(BlockList<B>);

impl<B> Iterator for IntoIter<B> {
  type Item = B;

  fn next(&mut self) -> Option<Self::Item> {
    self.0.remove_first()
  }

  fn size_hint(&self) -> (usize, Option<usize>) {
    (self.0.size, Some(self.0.size))
  }
}

impl<B> ExactSizeIterator for IntoIter<B> {}

impl<B> FusedIterator for IntoIter<B> {}

impl<B> IntoIterator for BlockList<B> {
  type Item = B;
  type IntoIter = IntoIter<B>;

  fn into_iter(self) -> Self::IntoIter {
    IntoIter(self)
  }
}
