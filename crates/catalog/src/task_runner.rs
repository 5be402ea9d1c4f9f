use std::sync::Arc;

use anyhow::Context;
use futures::future::BoxFuture;
use tokio::{sync::Semaphore, task::JoinSet};

/// Runs a fixed set of independent tasks, with at most `limit` of them in flight.
///
/// The first error observed is returned as soon as it is seen. Tasks which are
/// still running at that point are detached, not aborted, and run to completion
/// in the background. Results come back in completion order.
pub struct TaskRunner<T> {
    limit: usize,
    tasks: Vec<BoxFuture<'static, anyhow::Result<T>>>,
}

impl<T: Send + 'static> TaskRunner<T> {
    pub fn new(limit: usize) -> Self {
        Self {
            limit: limit.max(1),
            tasks: Vec::new(),
        }
    }

    pub fn add<Fut>(&mut self, task: Fut) -> &mut Self
    where
        Fut: Future<Output = anyhow::Result<T>> + Send + 'static,
    {
        self.tasks.push(Box::pin(task));
        self
    }

    #[tracing::instrument(skip(self), fields(tasks = self.tasks.len(), limit = self.limit), level = "trace")]
    pub async fn run(self) -> anyhow::Result<Vec<T>> {
        let permits = Arc::new(Semaphore::new(self.limit));
        let mut join_set = JoinSet::new();

        for task in self.tasks {
            let permits = permits.clone();

            join_set.spawn(async move {
                let _permit = permits
                    .acquire_owned()
                    .await
                    .context("task runner semaphore closed")?;

                task.await
            });
        }

        let mut outputs = Vec::with_capacity(join_set.len());
        while let Some(res) = join_set.join_next().await {
            let res = res
                .context("task panicked")
                .and_then(|output| output);

            match res {
                Ok(output) => outputs.push(output),
                Err(e) => {
                    tracing::trace!(remaining = join_set.len(), "task failed, detaching remaining tasks");
                    join_set.detach_all();

                    return Err(e);
                }
            }
        }

        Ok(outputs)
    }
}
