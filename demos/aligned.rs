use std::ptr;

use raligned::{PATH, allocate, deallocate, fallback};

/// Logs where a block landed and how it sits relative to its alignment.
fn report(
  label: &str,
  size: usize,
  alignment: usize,
  addr: *mut u8,
) {
  log::info!(
    "[{label}] {size} bytes, align = {alignment}, address = {addr:?}, addr % align = {}",
    addr as usize % alignment
  );
}

fn main() -> Result<(), raligned::AllocError> {
  env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

  log::info!("top-level allocate/deallocate use the {PATH} path");

  unsafe {
    // --------------------------------------------------------------------
    // 1) Cache-line aligned block through the default path.
    // --------------------------------------------------------------------
    let line = allocate(100, 64)?;
    report("1", 100, 64, line.as_ptr());

    for i in 0..100 {
      line.as_ptr().add(i).write(i as u8);
    }
    log::info!("[1] byte 99 reads back as {}", line.as_ptr().add(99).read());

    // --------------------------------------------------------------------
    // 2) Alignment below pointer size. Raised to pointer size internally.
    // --------------------------------------------------------------------
    let small = allocate(3, 2)?;
    report("2", 3, 2, small.as_ptr());

    // --------------------------------------------------------------------
    // 3) Page aligned block through the fallback path explicitly.
    //    The raw malloc pointer sits in the word just before the address.
    // --------------------------------------------------------------------
    let page = fallback::allocate(4096, 4096)?;
    report("3", 4096, 4096, page.as_ptr());
    ptr::write_bytes(page.as_ptr(), 0xAB, 4096);

    let raw = (page.as_ptr() as *mut *mut u8).sub(1).read();
    log::info!(
      "[3] malloc returned {raw:?}, {} bytes of padding and header",
      page.as_ptr() as usize - raw as usize
    );

    // --------------------------------------------------------------------
    // 4) Zero-size request still yields a pointer that can be freed.
    // --------------------------------------------------------------------
    let empty = allocate(0, 16)?;
    report("4", 0, 16, empty.as_ptr());

    // --------------------------------------------------------------------
    // 5) Release everything through the path that produced it.
    // --------------------------------------------------------------------
    deallocate(line.as_ptr());
    deallocate(small.as_ptr());
    fallback::deallocate(page.as_ptr());
    deallocate(empty.as_ptr());
    deallocate(ptr::null_mut());

    log::info!("[5] all blocks released");
  }

  Ok(())
}
