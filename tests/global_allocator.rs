use std::sync::atomic::{AtomicUsize, Ordering};

use log::{LevelFilter, Log, Metadata, Record};
use raligned::{AlignedAllocator, allocate, deallocate};

#[global_allocator]
static GLOBAL: AlignedAllocator = AlignedAllocator;

/// Logger that builds a `String` for every record, like env_logger does.
struct FormattingLogger {
  lines: AtomicUsize,
  bytes: AtomicUsize,
}

impl Log for FormattingLogger {
  fn enabled(
    &self,
    _metadata: &Metadata,
  ) -> bool {
    true
  }

  fn log(
    &self,
    record: &Record,
  ) {
    let line = format!("{} {}: {}", record.level(), record.target(), record.args());
    self.bytes.fetch_add(line.len(), Ordering::SeqCst);
    self.lines.fetch_add(1, Ordering::SeqCst);
  }

  fn flush(&self) {}
}

static LOGGER: FormattingLogger = FormattingLogger {
  lines: AtomicUsize::new(0),
  bytes: AtomicUsize::new(0),
};

#[test]
fn test_global_allocator_with_trace_logger() {
  log::set_logger(&LOGGER).unwrap();
  log::set_max_level(LevelFilter::Trace);

  let bytes = vec![7u8; 32];
  assert!(bytes.iter().all(|b| *b == 7));

  let words: Vec<u64> = (0..1000).collect();
  assert_eq!(words.iter().sum::<u64>(), 499_500);

  let text = format!("{:?}", words.len());
  assert_eq!(text, "1000");

  // Only the explicit API logs; its records allocate through `GLOBAL`.
  let before = LOGGER.lines.load(Ordering::SeqCst);

  let ptr = allocate(100, 64).unwrap();
  assert_eq!(ptr.as_ptr() as usize % 64, 0);
  unsafe { deallocate(ptr.as_ptr()) };

  assert_eq!(LOGGER.lines.load(Ordering::SeqCst), before + 2);
  assert!(LOGGER.bytes.load(Ordering::SeqCst) > 0);
}
