use super::Flow;

/// Anything that advances once per frame.
pub trait FrameTask {
    fn frame(&mut self) -> Flow;
}

impl<F: FnMut() -> Flow> FrameTask for F {
    fn frame(&mut self) -> Flow {
        self()
    }
}

/// Handle returned by [`FrameScheduler::schedule`].
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct TaskId(u64);

/// Runs scheduled tasks once per frame, in schedule order, dropping each
/// task on the frame it returns [`Flow::Stop`].
///
/// Tasks never share state through the scheduler; independent animations
/// on overlapping frames each keep their own clock.
#[derive(Default)]
pub struct FrameScheduler {
    tasks: Vec<(TaskId, Box<dyn FrameTask>)>,
    next_id: u64,
}

impl FrameScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn schedule(&mut self, task: impl FrameTask + 'static) -> TaskId {
        let id = TaskId(self.next_id);
        self.next_id += 1;
        self.tasks.push((id, Box::new(task)));
        id
    }

    /// Removes a task before its next frame. Returns `false` if it already
    /// finished or was never scheduled here.
    pub fn cancel(&mut self, id: TaskId) -> bool {
        let before = self.tasks.len();
        self.tasks.retain(|(tid, _)| *tid != id);
        self.tasks.len() != before
    }

    pub fn cancel_all(&mut self) {
        self.tasks.clear();
    }

    /// Runs every live task once. Returns the number still scheduled.
    pub fn run_frame(&mut self) -> usize {
        self.tasks.retain_mut(|(id, task)| {
            let keep = !task.frame().is_stop();
            if !keep {
                log::trace!("frame task {id:?} finished");
            }
            keep
        });
        self.tasks.len()
    }

    #[inline]
    pub fn is_scheduled(&self, id: TaskId) -> bool {
        self.tasks.iter().any(|(tid, _)| *tid == id)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    #[inline]
    pub fn is_idle(&self) -> bool {
        self.tasks.is_empty()
    }
}
