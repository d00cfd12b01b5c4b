//! Slot pooling for finite, recyclable resources

mod slot_pool;

pub use slot_pool::{SlotHandle, SlotPool};
