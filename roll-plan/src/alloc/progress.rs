/// Receives a notification every time an iteration of a simulation completes.
///
/// Implemented for every `Fn(usize, usize) + Sync` closure, which is called with
/// the number of completed iterations and the total number of iterations.
/// Iterations may complete on any thread of the rayon pool.
pub trait ProgressHook: Sync {
    fn iteration_completed(&self, completed: usize, total: usize);
}

impl<F> ProgressHook for F
where
    F: Fn(usize, usize) + Sync,
{
    fn iteration_completed(&self, completed: usize, total: usize) {
        self(completed, total)
    }
}
