//! Multi-task progress tracking with automatic batching for large sets

use crate::io::configuration::MAX_INDIVIDUAL_PROGRESS_BARS;
use indicatif::{MultiProgress, ProgressBar, ProgressStyle};
use std::sync::LazyLock;

/// Coordinates progress display for batch operations
///
/// Shows one bar per task for small batches and adds an overall bar once
/// the batch is larger than the rolling window of task bars.
pub struct ProgressManager {
    multi_progress: MultiProgress,
    batch_bar: Option<ProgressBar>,
    task_bars: Vec<ProgressBar>,
    task_count: usize,
    /// (`name`, `current_step`, `total_steps`) per started task
    task_states: Vec<(String, usize, usize)>,
}

impl Default for ProgressManager {
    fn default() -> Self {
        Self::new()
    }
}

static PROGRESS_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template("{msg} [{bar:30.cyan/blue}] {prefix}")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

static BATCH_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template("[{elapsed_precise}] Files: [{bar:40.cyan/blue}] {pos}/{len}")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
});

impl ProgressManager {
    /// Create a progress manager drawing to stderr
    pub fn new() -> Self {
        Self::with_target(MultiProgress::new())
    }

    /// Progress manager that draws nothing, for tests and quiet runs
    pub fn hidden() -> Self {
        Self::with_target(MultiProgress::with_draw_target(
            indicatif::ProgressDrawTarget::hidden(),
        ))
    }

    fn with_target(multi_progress: MultiProgress) -> Self {
        Self {
            multi_progress,
            batch_bar: None,
            task_bars: Vec::new(),
            task_count: 0,
            task_states: Vec::new(),
        }
    }

    /// Create bars for `task_count` tasks
    pub fn initialize(&mut self, task_count: usize) {
        self.task_count = task_count;

        if task_count > MAX_INDIVIDUAL_PROGRESS_BARS + 1 {
            let batch_bar = ProgressBar::new(task_count as u64);
            batch_bar.set_style(BATCH_STYLE.clone());
            self.batch_bar = Some(self.multi_progress.add(batch_bar));
        }

        let bars_to_create = task_count.min(MAX_INDIVIDUAL_PROGRESS_BARS);
        for _ in 0..bars_to_create {
            let pb = ProgressBar::new(0);
            pb.set_style(PROGRESS_STYLE.clone());
            self.task_bars.push(self.multi_progress.add(pb));
        }
    }

    /// Register task `index` under `name` with `steps` units of work
    pub fn start_task(&mut self, index: usize, name: &str, steps: usize) {
        if index >= self.task_states.len() {
            self.task_states.resize(index + 1, (String::new(), 0, 0));
        }
        if let Some(state) = self.task_states.get_mut(index) {
            *state = (name.to_string(), 0, steps);
        }
        self.update_bars();
    }

    /// Report that task `index` has finished `step` units
    pub fn update_task(&mut self, index: usize, step: usize) {
        if let Some(state) = self.task_states.get_mut(index) {
            state.1 = step.min(state.2);
        }
        self.update_bars();
    }

    /// Mark task `index` complete, appending `summary` to its name
    pub fn complete_task(&mut self, index: usize, summary: &str) {
        if let Some(ref batch_bar) = self.batch_bar {
            batch_bar.inc(1);
        }

        if let Some(state) = self.task_states.get_mut(index) {
            state.0 = if summary.is_empty() {
                format!("✓ {}", state.0)
            } else {
                format!("✓ {} ({summary})", state.0)
            };
            state.1 = state.2;
        }
        self.update_bars();
    }

    /// Tasks announced by `initialize`
    pub const fn task_count(&self) -> usize {
        self.task_count
    }

    /// Number of individual task bars in use
    pub fn visible_bars(&self) -> usize {
        self.task_bars.len()
    }

    /// Whether an overall batch bar is shown
    pub const fn has_batch_bar(&self) -> bool {
        self.batch_bar.is_some()
    }

    /// Step counts of task `index`, as (`current`, `total`)
    pub fn task_progress(&self, index: usize) -> Option<(usize, usize)> {
        self.task_states
            .get(index)
            .map(|(_, current, total)| (*current, *total))
    }

    /// Clean up all progress displays
    pub fn finish(&self) {
        if let Some(ref batch_bar) = self.batch_bar {
            batch_bar.finish_with_message("All files processed");
        }
        let _ = self.multi_progress.clear();
    }

    /// Show the most recently started tasks in the rolling window of bars
    fn update_bars(&self) {
        let active: Vec<&(String, usize, usize)> = self
            .task_states
            .iter()
            .filter(|(name, _, _)| !name.is_empty())
            .collect();

        let start_idx = active.len().saturating_sub(MAX_INDIVIDUAL_PROGRESS_BARS);
        let visible = active.get(start_idx..).unwrap_or(&[]);

        for (bar_idx, (name, current, total)) in visible.iter().enumerate() {
            if let Some(bar) = self.task_bars.get(bar_idx) {
                bar.set_length(*total as u64);
                bar.set_position(*current as u64);
                let width = total.to_string().len();
                bar.set_message(format!("{current:>width$}/{total}"));
                bar.set_prefix(name.clone());
            }
        }

        for bar in self.task_bars.iter().skip(visible.len()) {
            bar.set_length(0);
            bar.set_position(0);
            bar.set_message(String::new());
            bar.set_prefix(String::new());
        }
    }
}
