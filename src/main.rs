use std::sync::{Arc, Mutex};
use std::thread;
use std::time::Duration;

use anyhow::{Context, Result};
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use ArrayQueueMini::core::buildcore::{LoggedQueue, QueueConfig};

fn init_logging() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,ArrayQueueMini=debug"));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr).with_target(true))
        .init();
}

fn main() -> Result<()> {
    init_logging();

    // Optional config path as the first argument
    let config = match std::env::args().nth(1) {
        Some(path) => QueueConfig::load(&path).with_context(|| format!("loading config {}", path))?,
        None => QueueConfig::default(),
    };
    tracing::info!(?config, "starting queue demo");

    // The queue does no locking; the Mutex is ours
    let queue = Arc::new(Mutex::new(LoggedQueue::<String>::from_config(&config)?));

    let mut handles = vec![];
    for worker in 0..config.workers {
        let queue = Arc::clone(&queue);
        let items = config.items_per_worker;
        handles.push(thread::spawn(move || {
            for i in 1..=items {
                let item = format!("W{}-Item {}", worker, i);
                queue.lock().unwrap_or_else(|e| e.into_inner()).add(item);
                thread::sleep(Duration::from_millis(10));
            }
        }));
    }

    // Wait for all threads to complete
    for handle in handles {
        handle.join().map_err(|_| anyhow::anyhow!("worker thread panicked"))?;
    }

    let mut queue = queue.lock().unwrap_or_else(|e| e.into_inner());
    tracing::info!(len = queue.len(), capacity = queue.capacity(), "all workers done");

    // Drain one past the end to show the empty sentinel
    while let Some(item) = queue.delete() {
        println!("{}", item);
    }
    assert!(queue.delete().is_none() && queue.is_empty());

    if let Some(path) = &config.log_path {
        queue.export_logs(path)?;
        tracing::info!("Wrote operation log to {}", path.display());
    }
    Ok(())
}
