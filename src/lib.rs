//! # blocklist - An Ordered List of Memory Blocks
//!
//! This crate provides a **singly-linked list** whose elements are handles to
//! memory-block descriptors: a base address plus a length, the kind of record
//! a simulated memory space keeps for its allocated and free regions.
//!
//! ## Overview
//!
//! ```text
//!   BlockList Layout:
//!
//!    first                                              last
//!      │                                                  │
//!      ▼                                                  ▼
//!   ┌────────────┐     ┌────────────┐     ┌────────────┐
//!   │ block: &B0 │     │ block: &B1 │     │ block: &B2 │
//!   │ next: ─────┼────►│ next: ─────┼────►│ next: null │
//!   └────────────┘     └────────────┘     └────────────┘
//!
//!   size = 3
//! ```
//!
//! The list owns its nodes and each node owns its successor. The blocks
//! themselves belong to the caller: a node stores whatever handle the caller
//! hands in (`&MemoryBlock`, `Rc<MemoryBlock>`, ...), compares it by value and
//! renders it with `Display`.
//!
//! ## Crate Structure
//!
//! ```text
//!   blocklist
//!   ├── block      - MemoryBlock descriptor
//!   ├── error      - ListError and ListResult
//!   ├── list       - BlockList, iterators, print_list
//!   └── node       - Node and NodeId
//! ```
//!
//! ## Quick Start
//!
//! ```rust
//! use blocklist::{BlockList, MemoryBlock};
//!
//! let a = MemoryBlock::new(0, 16);
//! let b = MemoryBlock::new(16, 32);
//! let c = MemoryBlock::new(48, 8);
//!
//! let mut list = BlockList::new();
//! list.insert_last(&a);
//! list.insert_first(&b);
//! list.insert_at(1, &c).unwrap();
//!
//! assert_eq!(list.index_of(&&a), Some(2));
//! assert_eq!(list.to_string(), "(16 , 32) (48 , 8) (0 , 16) ");
//!
//! list.remove_block(&&c).unwrap();
//! assert_eq!(list.size(), 2);
//! ```
//!
//! ## Costs
//!
//! ```text
//!   Operation                         Cost
//!   ────────────────────────────────  ─────────
//!   first / last / size               O(1)
//!   insert_first / insert_last        O(1)
//!   insert_at(i) / remove_at(i)       O(i)
//!   node_at(i) / block_at(i)          O(i)
//!   index_of / remove_block           O(n)
//!   remove_node                       O(n)
//! ```
//!
//! ## Errors
//!
//! Invalid arguments never panic. Out-of-range indexes, missing blocks and
//! unknown nodes come back as distinct `ListError` variants, and a rejected
//! call leaves the list untouched.
//!
//! ## Limitations
//!
//! - **Single-threaded only**: No synchronization primitives
//! - **No allocation policy**: Blocks are recorded, never carved or merged

mod block;
mod error;
mod list;
mod node;

pub use block::MemoryBlock;
pub use error::{ListError, ListResult};
pub use list::{BlockList, IntoIter, Iter, print_list};
pub use node::{Node, NodeId};
