use std::collections::VecDeque;

use super::scheduler::FrameTask;
use super::Flow;

type Start = Box<dyn FnOnce() -> Box<dyn FrameTask>>;

/// Runs tasks end to end: the next one is created only once the current one
/// stops, so its clock starts when it actually begins.
#[derive(Default)]
pub struct Sequence {
    pending: VecDeque<Start>,
    current: Option<Box<dyn FrameTask>>,
}

impl Sequence {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a step. `start` runs when the previous step has finished.
    pub fn then<T, S>(mut self, start: S) -> Self
    where
        T: FrameTask + 'static,
        S: FnOnce() -> T + 'static,
    {
        self.pending.push_back(Box::new(move || Box::new(start()) as Box<dyn FrameTask>));
        self
    }

    #[inline]
    pub fn remaining(&self) -> usize {
        self.pending.len() + usize::from(self.current.is_some())
    }
}

impl FrameTask for Sequence {
    fn frame(&mut self) -> Flow {
        if self.current.is_none() {
            self.current = self.pending.pop_front().map(|start| start());
        }
        let Some(task) = self.current.as_mut() else {
            return Flow::Stop;
        };
        if task.frame().is_stop() {
            self.current = None;
            if self.pending.is_empty() {
                return Flow::Stop;
            }
        }
        Flow::Continue
    }
}
