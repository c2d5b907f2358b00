use std::{
    sync::{mpsc, Arc},
    thread,
};

use reqwest::Client;
use tokio::runtime::Runtime;

use super::TaskResult;
use crate::{
    core::{TermdeckError, TermRecord},
    provider::{api, GeminiConfig},
};

/// Runs provider calls off the UI thread. Each task gets a clone of the
/// result sender and the shared runtime; the UI drains completed results
/// once per frame with [`TaskManager::poll_results`].
pub struct TaskManager {
    runtime: Arc<Runtime>,
    client: Client,
    config: GeminiConfig,
    receiver: mpsc::Receiver<TaskResult>,
    sender: mpsc::Sender<TaskResult>,
}

impl TaskManager {
    pub fn new(config: GeminiConfig) -> Result<Self, TermdeckError> {
        let runtime = Arc::new(Runtime::new()?);
        let client = api::http_client()?;

        let (sender, receiver) = mpsc::channel();

        Ok(Self { runtime, client, config, receiver, sender })
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

    /// Fetch one card's definition. The caller has already claimed the id in
    /// the definition store, so duplicate in-flight calls never reach here.
    pub fn fetch_definition(&self, card: TermRecord) {
        let (sender, runtime) = self.task_context();
        let client = self.client.clone();
        let config = self.config.clone();

        thread::spawn(move || {
            let result = runtime.block_on(async {
                api::generate_definition(&client, &config, card.term, card.category.label())
                    .await
                    .map_err(|e| e.to_string())
            });

            let _ = sender.send(TaskResult::DefinitionFetched { id: card.id, result });
        });
    }

    pub fn check_provider(&self) {
        let (sender, runtime) = self.task_context();
        let client = self.client.clone();
        let config = self.config.clone();

        thread::spawn(move || {
            let reachable =
                runtime.block_on(async { api::probe(&client, &config).await.is_ok() });

            let _ = sender.send(TaskResult::ProviderStatus(reachable));
        });
    }
}
