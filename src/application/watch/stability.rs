//! File stability heuristic

use std::fs;
use std::path::Path;
use std::thread;
use std::time::Instant;

use super::event::StabilityPolicy;

/// Poll the size of `path` until two consecutive polls agree on a non-zero
/// size, or the policy timeout elapses.
///
/// Returns whether stability was observed. A stat failure counts as "not
/// ready yet".
pub fn wait_until_stable(path: &Path, policy: &StabilityPolicy) -> bool {
    let deadline = Instant::now() + policy.timeout;
    let mut last_size: Option<u64> = None;

    loop {
        match fs::metadata(path) {
            Ok(meta) => {
                let size = meta.len();
                if size > 0 && last_size == Some(size) {
                    return true;
                }
                last_size = Some(size);
            }
            Err(e) => {
                tracing::trace!(path = %path.display(), error = %e, "file not readable yet");
                last_size = None;
            }
        }

        let now = Instant::now();
        if now >= deadline {
            tracing::debug!(
                path = %path.display(),
                timeout_ms = policy.timeout.as_millis() as u64,
                "file did not settle before timeout"
            );
            return false;
        }
        thread::sleep(policy.interval.min(deadline - now));
    }
}
