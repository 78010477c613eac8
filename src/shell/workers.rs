use tokio::sync::watch;
use tokio::task::JoinHandle;

use crate::modules::scheduled::count_to_ten::CountToTenWorker;
use crate::shell::config::AppConfig;

pub struct Workers {
    shutdown: watch::Sender<bool>,
    handles: Vec<JoinHandle<u64>>,
}

impl Workers {
    pub fn spawn(config: &AppConfig) -> Self {
        let (shutdown, rx) = watch::channel(false);
        let mut handles = Vec::new();
        match config.counter_interval {
            Some(period) => {
                tracing::info!(?period, "starting count_to_ten worker");
                handles.push(CountToTenWorker::new(period).spawn(rx));
            }
            None => tracing::info!("count_to_ten worker disabled"),
        }
        Self { shutdown, handles }
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.handles.len()
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.handles.is_empty()
    }

    pub async fn shutdown(self) {
        let _ = self.shutdown.send(true);
        for handle in self.handles {
            if let Err(e) = handle.await {
                tracing::warn!(error = %e, "worker ended abnormally");
            }
        }
    }
}

#[cfg(test)]
mod workers_tests {
    use super::*;
    use rstest::rstest;
    use std::time::Duration;

    fn config(counter_interval: Option<Duration>) -> AppConfig {
        AppConfig {
            counter_interval,
            ..AppConfig::from_lookup(|_| None).unwrap()
        }
    }

    #[rstest]
    #[tokio::test(start_paused = true)]
    async fn it_should_spawn_and_stop_the_counter() {
        let workers = Workers::spawn(&config(Some(Duration::from_secs(5))));
        assert_eq!(workers.len(), 1);
        workers.shutdown().await;
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_skip_the_counter_when_disabled() {
        let workers = Workers::spawn(&config(None));
        assert!(workers.is_empty());
        workers.shutdown().await;
    }
}
