//! Interrupt guard.
//!
//! `main` creates one [`Guard`] and installs it. Every open store registers
//! its key material and plaintext with the guard; on Ctrl-C or SIGTERM the
//! guard wipes everything still alive before the process exits.

use std::sync::{Arc, Mutex, PoisonError, Weak};

use tracing::debug;

use crate::error::Result;

/// Exit status used after an interrupt.
pub const INTERRUPTED_EXIT_CODE: i32 = 130;

/// Something holding secrets that can be wiped on demand.
pub trait Purge: Send + Sync {
    /// Zero all held secrets. Must be safe to call repeatedly.
    fn purge(&self);
}

/// Tracks live secret holders for the lifetime of the process.
#[derive(Clone, Default)]
pub struct Guard {
    tracked: Arc<Mutex<Vec<Weak<dyn Purge>>>>,
}

impl Guard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Install the interrupt handler. Call once, from `main`.
    ///
    /// # Errors
    ///
    /// Returns an I/O error if a handler is already installed or the
    /// platform refuses the registration.
    pub fn install(&self) -> Result<()> {
        let guard = self.clone();
        ctrlc::set_handler(move || {
            let purged = guard.purge_all();
            debug!("interrupted, purged {} secret holders", purged);
            std::process::exit(INTERRUPTED_EXIT_CODE);
        })
        .map_err(|e| std::io::Error::new(std::io::ErrorKind::Other, e.to_string()))?;
        Ok(())
    }

    /// Register a holder. Only a weak handle is kept.
    pub fn track(&self, holder: Weak<dyn Purge>) {
        let mut tracked = self.tracked.lock().unwrap_or_else(PoisonError::into_inner);
        tracked.retain(|h| h.strong_count() > 0);
        tracked.push(holder);
    }

    /// Number of holders that are still alive.
    pub fn live(&self) -> usize {
        let tracked = self.tracked.lock().unwrap_or_else(PoisonError::into_inner);
        tracked.iter().filter(|h| h.strong_count() > 0).count()
    }

    /// Wipe every live holder. Returns how many were purged.
    pub fn purge_all(&self) -> usize {
        let tracked = self.tracked.lock().unwrap_or_else(PoisonError::into_inner);
        let mut purged = 0;
        for holder in tracked.iter().filter_map(Weak::upgrade) {
            holder.purge();
            purged += 1;
        }
        purged
    }
}

impl std::fmt::Debug for Guard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Guard").field("live", &self.live()).finish()
    }
}
