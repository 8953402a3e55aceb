// THEORY:
// Images are independent: each has its own grid and catalog, and nothing is
// shared between them. The `ParallelPipeline` exploits that with a small worker
// pool. A dispatcher task hands incoming jobs to workers round-robin, and each
// worker runs the ordinary single-threaded `SilhouettePipeline` on a blocking
// thread so the flood fill never stalls the async runtime. Results travel back
// over one-shot channels and are reassembled in submission order.
//
// The pool must be created from inside a tokio runtime.

use crate::error::{Result, SilhouetteError};
use crate::pipeline::{ImageSummary, PipelineConfig, SilhouettePipeline};
use futures::future::join_all;
use std::path::{Path, PathBuf};
use tokio::sync::{mpsc, oneshot};
use tokio::task::JoinHandle;
use tracing::{debug, warn};

/// One image to process and where to send its summary.
pub struct ImageTask {
    pub path: PathBuf,
    pub result_sender: oneshot::Sender<Result<ImageSummary>>,
}

pub struct WorkerPool {
    task_sender: mpsc::UnboundedSender<ImageTask>,
    dispatcher: JoinHandle<()>,
    workers: Vec<JoinHandle<()>>,
}

impl WorkerPool {
    pub fn new(pipeline: SilhouettePipeline, worker_count: usize) -> Self {
        let worker_count = worker_count.max(1);
        let (task_sender, mut task_receiver) = mpsc::unbounded_channel::<ImageTask>();

        let (worker_senders, worker_receivers): (Vec<_>, Vec<_>) = (0..worker_count)
            .map(|_| mpsc::unbounded_channel::<ImageTask>())
            .unzip();

        // Spawn dispatcher
        let dispatcher = tokio::spawn(async move {
            let mut worker_idx = 0;
            while let Some(task) = task_receiver.recv().await {
                if worker_senders[worker_idx].send(task).is_err() {
                    warn!(worker = worker_idx, "worker is gone, dropping task");
                }
                worker_idx = (worker_idx + 1) % worker_count;
            }
        });

        // Spawn workers
        let workers = worker_receivers
            .into_iter()
            .enumerate()
            .map(|(worker_idx, mut worker_receiver)| {
                let worker_pipeline = pipeline.clone();
                tokio::spawn(async move {
                    while let Some(task) = worker_receiver.recv().await {
                        debug!(
                            worker = worker_idx,
                            path = %task.path.display(),
                            "processing image"
                        );
                        let summary =
                            Self::process_image(worker_pipeline.clone(), task.path).await;
                        let _ = task.result_sender.send(summary);
                    }
                })
            })
            .collect();

        Self {
            task_sender,
            dispatcher,
            workers,
        }
    }

    async fn process_image(pipeline: SilhouettePipeline, path: PathBuf) -> Result<ImageSummary> {
        tokio::task::spawn_blocking(move || pipeline.process_file(&path))
            .await
            .map_err(|e| SilhouetteError::WorkerPool(e.to_string()))?
    }

    /// Queues one image. The receiver resolves once a worker has finished it.
    pub fn submit(&self, path: PathBuf) -> Result<oneshot::Receiver<Result<ImageSummary>>> {
        let (result_sender, result_receiver) = oneshot::channel();
        self.task_sender
            .send(ImageTask {
                path,
                result_sender,
            })
            .map_err(|_| SilhouetteError::WorkerPool("failed to send task to worker pool".into()))?;
        Ok(result_receiver)
    }

    pub fn worker_count(&self) -> usize {
        self.workers.len()
    }

    /// Closes the queue and waits for the dispatcher and every worker to drain.
    /// Returns how many of those tasks panicked or were cancelled.
    pub async fn shutdown(self) -> usize {
        drop(self.task_sender);
        let mut failed = 0;
        if let Err(e) = self.dispatcher.await {
            warn!("dispatcher ended abnormally: {e}");
            failed += 1;
        }
        for (worker_idx, worker) in self.workers.into_iter().enumerate() {
            if let Err(e) = worker.await {
                warn!(worker = worker_idx, "worker ended abnormally: {e}");
                failed += 1;
            }
        }
        failed
    }
}

/// Runs the single-image pipeline over many images concurrently.
pub struct ParallelPipeline {
    worker_pool: WorkerPool,
}

impl ParallelPipeline {
    pub fn new(config: PipelineConfig, worker_count: usize) -> Self {
        Self {
            worker_pool: WorkerPool::new(SilhouettePipeline::new(config), worker_count),
        }
    }

    /// One worker per logical CPU.
    pub fn with_default_workers(config: PipelineConfig) -> Self {
        Self::new(config, num_cpus::get())
    }

    pub fn worker_count(&self) -> usize {
        self.worker_pool.worker_count()
    }

    /// Processes every path and returns one result per path, in input order.
    /// A failing image only fails its own entry.
    pub async fn process_files<P: AsRef<Path>>(
        &self,
        paths: impl IntoIterator<Item = P>,
    ) -> Vec<Result<ImageSummary>> {
        let pending: Vec<_> = paths
            .into_iter()
            .map(|path| self.worker_pool.submit(path.as_ref().to_path_buf()))
            .collect();

        join_all(pending.into_iter().map(|submitted| async move {
            submitted?.await.map_err(|_| {
                SilhouetteError::WorkerPool("failed to receive result from worker".into())
            })?
        }))
        .await
    }

    pub async fn shutdown(self) -> usize {
        self.worker_pool.shutdown().await
    }
}
