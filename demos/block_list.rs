use libc::{c_void, free, malloc};

use blocklist::{BlockList, MemoryBlock, print_list};

/// Takes `length` bytes from the C heap and describes them as a block.
unsafe fn take_region(length: usize) -> Option<MemoryBlock> {
  let address = unsafe { malloc(length) };

  if address.is_null() {
    return None;
  }

  Some(MemoryBlock::new(address as usize, length))
}

fn main() {
  // Region sizes in bytes. The descriptors live in `regions` for the whole
  // program; both lists only borrow them.
  let sizes = [32usize, 100, 64, 4096];

  let regions: Vec<MemoryBlock> = sizes
    .iter()
    .filter_map(|&size| unsafe { take_region(size) })
    .collect();

  let mut allocated: BlockList<&MemoryBlock> = BlockList::new();
  let mut freed: BlockList<&MemoryBlock> = BlockList::new();

  // --------------------------------------------------------------------
  // 1) Record every region as allocated, in allocation order.
  // --------------------------------------------------------------------
  for region in &regions {
    allocated.insert_last(region);
    println!(
      "\n[1] Allocated {} bytes, base = {:#X}, end = {:#X}",
      region.length(),
      region.base_address(),
      region.end_address()
    );
  }
  print_list("allocated", &allocated);

  // --------------------------------------------------------------------
  // 2) Release the second region: move its descriptor to the freed list
  //    and hand the memory back to the C heap.
  // --------------------------------------------------------------------
  if let Some(region) = regions.get(1) {
    match allocated.remove_block(&region) {
      Ok(block) => {
        unsafe { free(block.base_address() as *mut c_void) };
        freed.insert_first(block);
        println!("\n[2] Freed {}", block);
      }
      Err(err) => println!("\n[2] Could not free {}: {}", region, err),
    }
  }
  print_list("allocated", &allocated);
  print_list("freed", &freed);

  // --------------------------------------------------------------------
  // 3) Release the most recent region through its node id.
  // --------------------------------------------------------------------
  if let Some(id) = allocated.last().map(|node| node.id()) {
    match allocated.remove_node(id) {
      Ok(block) => {
        unsafe { free(block.base_address() as *mut c_void) };
        freed.insert_last(block);
        println!("\n[3] Freed {} by node id {:?}", block, id);
      }
      Err(err) => println!("\n[3] Could not free node {:?}: {}", id, err),
    }
  }
  print_list("allocated", &allocated);
  print_list("freed", &freed);

  // --------------------------------------------------------------------
  // 4) Look up an address among the allocated regions.
  // --------------------------------------------------------------------
  if let Some(first) = regions.first() {
    let probe = first.base_address() + first.length() / 2;
    let owner = allocated.iter().position(|block| block.contains(probe));
    println!("\n[4] Address {:#X} belongs to allocated index {:?}", probe, owner);
  }

  // --------------------------------------------------------------------
  // 5) Out-of-range requests are reported, not fatal.
  // --------------------------------------------------------------------
  let size = allocated.size();
  if let Err(err) = allocated.block_at(size) {
    println!("\n[5] block_at({}) rejected: {}", size, err);
  }

  // --------------------------------------------------------------------
  // 6) Release whatever is still allocated.
  // --------------------------------------------------------------------
  for block in allocated {
    unsafe { free(block.base_address() as *mut c_void) };
    freed.insert_last(block);
  }
  println!("\n[6] End of demo.");
  print_list("freed", &freed);
}
