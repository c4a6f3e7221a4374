use alloc::rc::Rc;
use core::cell::Cell;
use crate::*;

/// Listener that counts the steps it is told about. Clones share the same count, so one clone 
/// can be handed to the detector while another is kept around to read the total.
/// 
#[derive(Debug, Clone, Default)]
pub struct StepCounter
{
    steps: Rc<Cell<u32>>,
}

impl StepCounter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn count(&self) -> u32 {
        self.steps.get()
    }

    /// Start counting from zero again.
    pub fn reset(&self) {
        self.steps.set(0);
    }
}

impl StepListener for StepCounter {
    fn step(&mut self, _timestamp_ns: i64) {
        self.steps.set(self.steps.get().saturating_add(1));
    }
}
