//! Task manager for async operations
//!
//! Tasks run HTTP calls and other slow work off the main loop and report
//! back by resolving to an action. A task that has nothing to report (its
//! outcome is propagated some other way, e.g. a hub publication) resolves
//! to `None`.

use std::collections::HashMap;
use std::future::Future;

use tokio::sync::mpsc;
use tokio::task::{AbortHandle, JoinHandle};

use crate::action::Action;

/// Identifies a task for cancellation and replacement.
///
/// Tasks with the same key are mutually exclusive - spawning a new task
/// with a key that's already running will cancel the existing task.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct TaskKey(String);

impl TaskKey {
    /// Create a new task key.
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// Get the key name.
    pub fn name(&self) -> &str {
        &self.0
    }
}

impl From<&'static str> for TaskKey {
    fn from(s: &'static str) -> Self {
        Self::new(s)
    }
}

impl From<String> for TaskKey {
    fn from(s: String) -> Self {
        Self(s)
    }
}

/// Manages async task lifecycle.
///
/// Maintains a registry of running tasks by key. Spawning with a key that
/// already exists cancels the previous task first; [`TaskManager::spawn_each`]
/// generates a fresh key per call for work that must run to completion.
pub struct TaskManager<A> {
    tasks: HashMap<TaskKey, AbortHandle>,
    action_tx: mpsc::UnboundedSender<A>,
    next_seq: u64,
}

impl<A> TaskManager<A>
where
    A: Action,
{
    /// Create a new task manager.
    ///
    /// The `action_tx` channel is used to send actions back to the main loop
    /// when tasks complete.
    pub fn new(action_tx: mpsc::UnboundedSender<A>) -> Self {
        Self {
            tasks: HashMap::new(),
            action_tx,
            next_seq: 0,
        }
    }

    /// Spawn a task, cancelling any existing task with the same key.
    ///
    /// When the future resolves to `Some(action)` the action is sent to the
    /// action channel; `None` completes silently. If the task is cancelled
    /// before completion, nothing is sent.
    pub fn spawn<F>(&mut self, key: impl Into<TaskKey>, future: F) -> &mut Self
    where
        F: Future<Output = Option<A>> + Send + 'static,
    {
        let key = key.into();

        // Replace any in-flight task under this key
        self.cancel(&key);

        let tx = self.action_tx.clone();
        let handle: JoinHandle<()> = tokio::spawn(async move {
            if let Some(action) = future.await {
                let _ = tx.send(action);
            }
        });

        self.tasks.insert(key, handle.abort_handle());
        self
    }

    /// Spawn a task under a generated unique key.
    ///
    /// Unlike [`TaskManager::spawn`], repeated calls never cancel each other:
    /// every task runs to completion (or failure). Use this for mutations
    /// that must not be aborted by a newer request; which response applies
    /// last is decided by arrival order.
    pub fn spawn_each<F>(&mut self, key_prefix: &str, future: F) -> &mut Self
    where
        F: Future<Output = Option<A>> + Send + 'static,
    {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.spawn(TaskKey::new(format!("{key_prefix}#{seq}")), future)
    }

    /// Cancel a task by key.
    ///
    /// If no task exists with the given key, this is a no-op.
    pub fn cancel(&mut self, key: &TaskKey) {
        if let Some(handle) = self.tasks.remove(key) {
            handle.abort();
        }
    }

    /// Cancel all running tasks.
    ///
    /// Useful for cleanup on shutdown.
    pub fn cancel_all(&mut self) {
        for (_, handle) in self.tasks.drain() {
            handle.abort();
        }
    }

    /// Check if a task with the given key is currently running.
    pub fn is_running(&self, key: &TaskKey) -> bool {
        self.tasks.contains_key(key)
    }

    /// Get the number of tracked tasks.
    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    /// Check if there are no tracked tasks.
    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }
}

impl<A> Drop for TaskManager<A> {
    fn drop(&mut self) {
        for (_, handle) in self.tasks.drain() {
            handle.abort();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;
    use std::time::Duration;

    #[derive(Clone, Debug)]
    enum TestAction {
        Done(usize),
    }

    impl Action for TestAction {
        fn name(&self) -> &'static str {
            "Done"
        }
    }

    #[test]
    fn task_key_conversions() {
        let k1 = TaskKey::new("test");
        let k2 = TaskKey::from("test");
        let k3: TaskKey = "test".into();

        assert_eq!(k1, k2);
        assert_eq!(k2, k3);
        assert_eq!(k1.name(), "test");
    }

    #[tokio::test]
    async fn spawn_sends_action() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let mut tasks = TaskManager::new(tx);

        tasks.spawn("test", async { Some(TestAction::Done(42)) });

        let action = tokio::time::timeout(Duration::from_millis(100), rx.recv())
            .await
            .expect("timeout")
            .expect("channel closed");

        assert!(matches!(action, TestAction::Done(42)));
    }

    #[tokio::test]
    async fn spawn_none_sends_nothing() {
        let (tx, mut rx) = mpsc::unbounded_channel::<TestAction>();
        let mut tasks = TaskManager::new(tx);

        tasks.spawn("test", async { None });

        let result = tokio::time::timeout(Duration::from_millis(50), rx.recv()).await;
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn spawn_cancels_previous_with_same_key() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let mut tasks = TaskManager::new(tx);

        let counter = Arc::new(AtomicUsize::new(0));

        let c1 = counter.clone();
        tasks.spawn("test", async move {
            tokio::time::sleep(Duration::from_millis(100)).await;
            c1.fetch_add(1, Ordering::SeqCst);
            Some(TestAction::Done(1))
        });

        let c2 = counter.clone();
        tasks.spawn("test", async move {
            c2.fetch_add(10, Ordering::SeqCst);
            Some(TestAction::Done(2))
        });

        let action = tokio::time::timeout(Duration::from_millis(200), rx.recv())
            .await
            .expect("timeout")
            .expect("channel closed");

        assert!(matches!(action, TestAction::Done(2)));
        assert_eq!(counter.load(Ordering::SeqCst), 10);
    }

    #[tokio::test]
    async fn spawn_each_runs_both_to_completion() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let mut tasks = TaskManager::new(tx);

        tasks.spawn_each("mutate", async {
            tokio::time::sleep(Duration::from_millis(30)).await;
            Some(TestAction::Done(1))
        });
        tasks.spawn_each("mutate", async { Some(TestAction::Done(2)) });

        assert_eq!(tasks.len(), 2);

        let first = tokio::time::timeout(Duration::from_millis(200), rx.recv())
            .await
            .expect("timeout")
            .expect("channel closed");
        let second = tokio::time::timeout(Duration::from_millis(200), rx.recv())
            .await
            .expect("timeout")
            .expect("channel closed");

        // Quicker task lands first; the slower one still completes.
        assert!(matches!(first, TestAction::Done(2)));
        assert!(matches!(second, TestAction::Done(1)));
    }

    #[tokio::test]
    async fn cancel_prevents_delivery() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let mut tasks = TaskManager::new(tx);

        tasks.spawn("test", async {
            tokio::time::sleep(Duration::from_millis(100)).await;
            Some(TestAction::Done(1))
        });

        assert!(tasks.is_running(&TaskKey::new("test")));

        tasks.cancel(&TaskKey::new("test"));

        assert!(!tasks.is_running(&TaskKey::new("test")));

        let result = tokio::time::timeout(Duration::from_millis(150), rx.recv()).await;
        assert!(result.is_err() || result.unwrap().is_none());
    }

    #[tokio::test]
    async fn cancel_all_empties_registry() {
        let (tx, _rx) = mpsc::unbounded_channel();
        let mut tasks = TaskManager::new(tx);

        tasks.spawn("a", async {
            tokio::time::sleep(Duration::from_secs(10)).await;
            Some(TestAction::Done(1))
        });
        tasks.spawn("b", async {
            tokio::time::sleep(Duration::from_secs(10)).await;
            Some(TestAction::Done(2))
        });

        assert_eq!(tasks.len(), 2);

        tasks.cancel_all();

        assert!(tasks.is_empty());
    }
}
