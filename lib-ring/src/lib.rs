#![cfg_attr(not(test), no_std)]

extern crate alloc;

use alloc::vec;
use alloc::vec::Vec;
use core::fmt;

/// Fixed capacity ring buffer that overwrites its oldest value once full.
///
/// The write counter is advanced *before* indexing, so the first value pushed lands in slot 1
/// and slot 0 is only written once the counter reaches a multiple of the capacity. Slots that 
/// were never written hold `T::default()`.
/// 
pub struct RingBuffer<T: Copy + Default> {
    pub(crate) data: Vec<T>,

    /// Total amount of values ever pushed, never reset.
    pub(crate) counter: u64,
}

impl<T: Copy + Default> RingBuffer<T> {

    /// Creates a ring buffer holding at most `capacity` values, the capacity must not be zero.
    /// 
    pub fn new(capacity: usize) -> RingBuffer<T> {
        assert!(capacity > 0, "ring buffer capacity must be non-zero");
        RingBuffer {
            data: vec![T::default(); capacity],
            counter: 0,
        }
    }

    /// Advances the write counter and stores the item at `counter % capacity`.
    /// 
    #[inline]
    pub fn push(&mut self, item: T) {
        self.counter += 1;
        let index = (self.counter % self.data.len() as u64) as usize;
        self.data[index] = item;
    }

    /// Amount of values pushed over the lifetime of the buffer.
    /// 
    #[inline]
    pub fn counter(&self) -> u64 {
        self.counter
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.data.len()
    }

    /// Amount of slots holding a pushed value, i.e. `min(counter, capacity)`.
    /// 
    #[inline]
    pub fn len(&self) -> usize {
        core::cmp::min(self.counter, self.data.len() as u64) as usize
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.counter == 0
    }

    /// All slots in storage order, unwritten ones included.
    /// 
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }
}

impl<T: Copy + Default + fmt::Debug> fmt::Debug for RingBuffer<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "RingBuffer [counter: {}] {:?}", self.counter, self.data)
    }
}
