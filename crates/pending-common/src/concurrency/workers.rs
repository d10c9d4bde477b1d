use std::collections::VecDeque;

use futures_core::future::BoxFuture;
use tokio::task::JoinSet;
use tracing::Instrument;

use crate::concurrency::Error;

/// Convenience macro to create task that can be registered in the [`ConcurrentExecutor`].
/// It wraps the given block into a BoxFuture and move the environment into the block
#[macro_export]
macro_rules! task {
    (|$n: ident| $e: block) => {
        move |$n| { Box::pin(async move $e) }
    };
    (|_| $e: block) => {
        move |_| { Box::pin(async move $e) }
    };
}

type Task<C, S> = Box<dyn FnOnce(C) -> BoxFuture<'static, S> + Send + Sync>;

/// Bounded task queue running at most `n_workers` tasks at the same time.
/// Example
/// ```rust
///  use pending_common::concurrency::ConcurrentExecutor;
///  use pending_common::task;
///
///  let mut executor = ConcurrentExecutor::new((), 8);
///  executor.register(task!(|_| { 1 }));
///  executor.register(task!(|_| { 1 }));
///
///  let result = executor.execute().await;
/// ```
pub struct ConcurrentExecutor<C, S> {
    context: C,
    n_workers: usize,

    registered: usize,
    workers: JoinSet<(usize, S)>,
    queue: VecDeque<(usize, Task<C, S>)>,
}

impl<C: Clone, S: 'static + Send + Sync> ConcurrentExecutor<C, S> {
    /// Create a new executor which spawns at most n_workers tasks in parallel. Once a task
    /// is done, the oldest waiting task is spawned. The given context is cloned into each task.
    pub fn new(context: C, n_workers: usize) -> Self {
        Self {
            context,
            n_workers,

            registered: 0,
            workers: JoinSet::new(),
            queue: VecDeque::new(),
        }
    }

    /// Register a new task. The macro [`task!`] can be used to improve readability.
    /// If a worker is available the task starts immediately
    pub fn register<F>(&mut self, task: F) -> &mut Self
    where
        F: 'static + FnOnce(C) -> BoxFuture<'static, S>,
        F: Send + Sync,
    {
        let index = self.registered;
        self.registered += 1;

        if self.workers.len() >= self.n_workers {
            self.queue.push_back((index, Box::new(task)));
        } else {
            self.spawn(index, Box::new(task));
        }

        self
    }

    fn spawn(&mut self, index: usize, task: Task<C, S>) {
        let future = task(self.context.clone());
        self.workers.spawn(async move { (index, future.await) }.in_current_span());
    }

    async fn next_indexed(&mut self) -> Option<Result<(usize, S), Error>> {
        if self.n_workers == 0 {
            return Some(Err(Error::NoWorkers));
        }

        let value = match self.workers.join_next().await {
            Some(Ok(value)) => Some(Ok(value)),
            None => None,
            Some(Err(e)) => return Some(Err(Error::Join(e))),
        };

        if let Some((index, task)) = self.queue.pop_front() {
            self.spawn(index, task);
        }

        value
    }

    /// Execute all the registered tasks and return their results in registration order.
    /// A waiting task is started each time a task completes.
    /// Errors
    ///  - [`Error::Join`] indicates that a task could not be joined properly
    ///  - [`Error::NoWorkers`] indicates that n_workers was set to 0
    pub async fn execute(&mut self) -> Result<Vec<S>, Error> {
        let mut results = Vec::with_capacity(self.workers.len() + self.queue.len());
        while let Some(value) = self.next_indexed().await {
            results.push(value?)
        }

        results.sort_by_key(|(index, _)| *index);
        Ok(results.into_iter().map(|(_, value)| value).collect())
    }
}
