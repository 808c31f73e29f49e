use crate::ports::outbound::ProgressReporter;
use indicatif::{ProgressBar, ProgressStyle};
use owo_colors::OwoColorize;
use std::cell::RefCell;

const STAGE_TEMPLATE: &str = "   {spinner:.green} [{bar:30.cyan/blue}] {pos}/{len} - {msg}";

/// StderrProgressReporter adapter for diagnostics on stderr
///
/// Messages go to stderr so that a dot graph or JSON document written to
/// stdout can be piped straight into another tool. Pipeline stages are
/// shown on an indicatif bar, which hides itself when stderr is not a
/// terminal.
pub struct StderrProgressReporter {
    stage_bar: RefCell<Option<ProgressBar>>,
}

impl StderrProgressReporter {
    pub fn new() -> Self {
        Self {
            stage_bar: RefCell::new(None),
        }
    }

    fn stage_bar(&self, total: usize) -> ProgressBar {
        let mut slot = self.stage_bar.borrow_mut();
        if let Some(bar) = slot.as_ref() {
            return bar.clone();
        }
        let bar = ProgressBar::new(total as u64);
        if let Ok(style) = ProgressStyle::default_bar().template(STAGE_TEMPLATE) {
            bar.set_style(style.progress_chars("=>-"));
        }
        *slot = Some(bar.clone());
        bar
    }

    fn clear_bar(&self) {
        if let Some(bar) = self.stage_bar.borrow_mut().take() {
            bar.finish_and_clear();
        }
    }

    /// Prints through the bar when one is active so lines are not torn.
    fn print(&self, line: String) {
        match self.stage_bar.borrow().as_ref() {
            Some(bar) => bar.suspend(|| eprintln!("{}", line)),
            None => eprintln!("{}", line),
        }
    }
}

impl Default for StderrProgressReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressReporter for StderrProgressReporter {
    fn report(&self, message: &str) {
        self.print(message.to_string());
    }

    fn report_progress(&self, current: usize, total: usize, message: Option<&str>) {
        let bar = self.stage_bar(total);
        bar.set_position(current as u64);
        if let Some(msg) = message {
            bar.set_message(msg.to_string());
        }
    }

    fn report_error(&self, message: &str) {
        self.print(format!("{}", message.yellow()));
    }

    fn report_completion(&self, message: &str) {
        self.clear_bar();
        eprintln!("{}", message.green());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_progress_reporter_lifecycle() {
        let reporter = StderrProgressReporter::new();
        reporter.report("removing foo from the graph");
        reporter.report_progress(1, 6, Some("building graph"));
        reporter.report_progress(2, 6, Some("classifying versions"));
        reporter.report_error("failed to parse dependency 'x' of y @ 1.0.0");
        reporter.report_completion("done");
        assert!(reporter.stage_bar.borrow().is_none());
    }

    #[test]
    fn test_stage_bar_is_reused() {
        let reporter = StderrProgressReporter::default();
        reporter.report_progress(1, 5, None);
        let first = reporter.stage_bar(5);
        reporter.report_progress(2, 5, Some("graph built"));
        assert_eq!(first.position(), 2);
        reporter.report_completion("done");
    }
}
