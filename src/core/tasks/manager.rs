use std::{
    sync::{
        mpsc,
        Arc,
    },
    thread,
};

use tokio::runtime::Runtime;
use tracing::{
    error,
    info,
};

use super::TaskResult;
use crate::core::{
    http::{
        fetch_catalog,
        http_client,
    },
    DashError,
};

pub struct TaskManager {
    runtime: Arc<Runtime>,
    receiver: mpsc::Receiver<TaskResult>,
    sender: mpsc::Sender<TaskResult>,
}

impl TaskManager {
    pub fn new() -> Result<Self, DashError> {
        let runtime = Runtime::new().map_err(|e| DashError::Runtime(e.to_string()))?;

        let (sender, receiver) = mpsc::channel();

        Ok(Self { runtime: Arc::new(runtime), receiver, sender })
    }

    pub fn poll_results(&mut self) -> Vec<TaskResult> {
        let mut results = Vec::new();

        while let Ok(result) = self.receiver.try_recv() {
            results.push(result);
        }

        results
    }

    fn task_context(&self) -> (mpsc::Sender<TaskResult>, Arc<Runtime>) {
        (self.sender.clone(), self.runtime.clone())
    }

    /// Fetches the catalog once on a helper thread. The outcome arrives through
    /// [`TaskManager::poll_results`] as [`TaskResult::CatalogLoaded`].
    pub fn load_catalog(&self, url: String) {
        let (sender, runtime) = self.task_context();

        thread::spawn(move || {
            let _ = sender.send(TaskResult::LoadingMessage("Loading amiibo catalog...".to_string()));

            let result = runtime.block_on(async {
                let client = http_client()?;
                fetch_catalog(&client, &url).await
            });

            let result = match result {
                Ok(records) => {
                    info!(count = records.len(), "amiibo catalog fetched");
                    Ok(records)
                }
                Err(e) => {
                    error!(error = %e, url = %url, "error getting the amiibo catalog");
                    Err(e.to_string())
                }
            };

            let _ = sender.send(TaskResult::CatalogLoaded(result));
        });
    }
}
