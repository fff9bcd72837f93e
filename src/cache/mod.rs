mod event;
mod table;

pub use event::{Allocation, CacheObserver, DrainEntry, WriteEvent};
pub use table::{Slot, WordCache};
