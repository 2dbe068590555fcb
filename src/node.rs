use std::{
  fmt,
  ptr::NonNull,
  sync::atomic::{AtomicU64, Ordering},
};

static NEXT_NODE_ID: AtomicU64 = AtomicU64::new(0);

/// Identity of a node, unique for the lifetime of the process.
///
/// Ids are never reused, so an id taken from a removed node (or from another
/// list) simply fails to match anything.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(u64);

impl NodeId {
  fn next() -> Self {
    Self(NEXT_NODE_ID.fetch_add(1, Ordering::Relaxed))
  }
}

/// Link in a `BlockList` chain.
///
/// The `next` pointer is owning: it was leaked from a `Box` and is
/// released by the list that holds this node.
pub struct Node<B> {
  pub(crate) block: B,
  pub(crate) next: Option<NonNull<Node<B>>>,
  id: NodeId,
}

impl<B> Node<B> {
  pub(crate) fn new(block: B) -> Self {
    Self {
      block,
      next: None,
      id: NodeId::next(),
    }
  }

  pub fn id(&self) -> NodeId {
    self.id
  }

  pub fn block(&self) -> &B {
    &self.block
  }

  pub fn next(&self) -> Option<&Node<B>> {
    self.next.map(|next| unsafe { next.as_ref() })
  }
}

unsafe impl<B: Send> Send for Node<B> {}

unsafe impl<B: Sync> Sync for Node<B> {}

impl<B: fmt::Debug> fmt::Debug for Node<B> {
  fn fmt(
    &self,
    f: &mut fmt::Formatter<'_>,
  ) -> fmt::Result {
    f.debug_struct("Node")
      .field("id", &self.id)
      .field("block", &self.block)
      .field("has_next", &self.next.is_some())
      .finish()
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_ids_are_unique() {
    let a = Node::new(1u32);
    let b = Node::new(1u32);

    assert_ne!(a.id(), b.id());
    assert_eq!(a.block(), b.block());
  }

  #[test]
  fn test_fresh_node_is_unlinked() {
    let node = Node::new("block");

    assert!(node.next().is_none());
    assert_eq!(*node.block(), "block");
  }
}
