use std::sync::atomic::{AtomicUsize, Ordering};
use log::{info, warn};
use rayon::prelude::*;

pub trait ParallelProcessor {
    fn init_parallel_processing() {
        // Configure thread pool if not already configured
        if rayon::current_num_threads() == 1 {
            if let Err(e) = rayon::ThreadPoolBuilder::new()
                .num_threads(num_cpus::get())
                .build_global()
            {
                warn!("Could not configure thread pool: {}", e);
            }
        }
        info!("Using {} CPU threads for processing", rayon::current_num_threads());
    }

    fn get_progress_counter() -> AtomicUsize {
        AtomicUsize::new(0)
    }

    /// Applies `f` to every item in parallel, keeping input order and
    /// logging progress every `report_every` items.
    fn parallel_map<T, F, R>(items: &[T], report_every: usize, f: F) -> Vec<R>
    where
        T: Sync,
        R: Send,
        F: Fn(&T) -> R + Send + Sync,
    {
        let progress = Self::get_progress_counter();
        let total = items.len();

        items
            .par_iter()
            .map(|item| {
                let result = f(item);
                let processed = progress.fetch_add(1, Ordering::SeqCst) + 1;
                if processed % report_every.max(1) == 0 || processed == total {
                    info!(
                        "Progress: {}/{} files ({:.1}%)",
                        processed,
                        total,
                        (processed as f64 / total as f64) * 100.0
                    );
                }
                result
            })
            .collect()
    }
}
