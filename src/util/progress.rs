//! Progress indicator for the page fetch loop.
//!
//! A spinner on stderr shows the current page and running total. It is
//! drawn only when stderr is an interactive terminal, so piped runs and
//! tests stay silent.

use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};
use std::io::{IsTerminal, stderr};
use std::time::Duration;

/// Check if we should show progress indicators.
#[must_use]
pub fn should_show_progress() -> bool {
    stderr().is_terminal()
}

/// Create a spinner for indeterminate operations.
///
/// Falls back to the default spinner style if the template is rejected.
#[must_use]
pub fn create_spinner(message: &str, show: bool) -> ProgressBar {
    let pb = ProgressBar::new_spinner();

    if show {
        if let Ok(style) = ProgressStyle::default_spinner().template("{spinner:.green} {msg}") {
            pb.set_style(style);
        }
        pb.set_message(message.to_string());
        pb.enable_steady_tick(Duration::from_millis(100));
    } else {
        pb.set_draw_target(ProgressDrawTarget::hidden());
    }

    pb
}

/// Spinner wrapper that reports paging progress.
pub struct PageProgress {
    bar: ProgressBar,
}

impl PageProgress {
    /// Start a spinner for `owner/repo`.
    #[must_use]
    pub fn start(scope: &str) -> Self {
        Self::with_visibility(scope, should_show_progress())
    }

    #[must_use]
    pub fn with_visibility(scope: &str, show: bool) -> Self {
        Self {
            bar: create_spinner(&format!("Searching {scope}..."), show),
        }
    }

    /// Record that `page` was fetched and `total` issues are held.
    pub fn page_done(&self, page: u32, total: usize) {
        self.bar
            .set_message(format!("page {page}: {total} issue(s) so far"));
    }

    /// Show that the loop is sleeping before the next request.
    pub fn waiting(&self, delay: Duration) {
        if !delay.is_zero() {
            self.bar
                .set_message(format!("waiting {}s before next page", delay.as_secs()));
        }
    }

    /// Run `f` with the spinner temporarily hidden.
    pub fn suspend<F: FnOnce() -> R, R>(&self, f: F) -> R {
        self.bar.suspend(f)
    }

    /// Finish and clear the spinner.
    pub fn finish(&self) {
        self.bar.finish_and_clear();
    }
}
