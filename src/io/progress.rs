//! Progress display for sampling many phantom instances

use crate::io::configuration::{MIN_INSTANCES_FOR_PROGRESS, PROGRESS_BAR_WIDTH};
use indicatif::{ProgressBar, ProgressStyle};
use std::sync::LazyLock;

static INSTANCE_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template(&format!(
            "[{{elapsed_precise}}] Instances: [{{bar:{PROGRESS_BAR_WIDTH}.cyan/blue}}] {{pos}}/{{len}}"
        ))
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

/// Tracks sampled instances on stderr
///
/// Single-instance runs finish too quickly for a bar to be useful, so no
/// bar is drawn below [`MIN_INSTANCES_FOR_PROGRESS`].
pub struct ProgressManager {
    bar: Option<ProgressBar>,
}

impl ProgressManager {
    /// Create a progress display for `total` instances
    pub fn new(total: usize) -> Self {
        let bar = (total >= MIN_INSTANCES_FOR_PROGRESS).then(|| {
            let bar = ProgressBar::new(total as u64);
            bar.set_style(INSTANCE_STYLE.clone());
            bar
        });
        Self { bar }
    }

    /// Whether a bar is being drawn
    pub const fn is_visible(&self) -> bool {
        self.bar.is_some()
    }

    /// Mark one instance as sampled
    pub fn complete_instance(&self) {
        if let Some(ref bar) = self.bar {
            bar.inc(1);
        }
    }

    /// Number of instances marked as sampled
    pub fn completed(&self) -> u64 {
        self.bar.as_ref().map_or(0, ProgressBar::position)
    }

    /// Clear the display
    pub fn finish(&self) {
        if let Some(ref bar) = self.bar {
            bar.finish_and_clear();
        }
    }
}
