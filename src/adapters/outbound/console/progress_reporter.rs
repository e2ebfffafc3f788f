use crate::ports::outbound::ProgressReporter;
use indicatif::{ProgressBar, ProgressStyle};
use owo_colors::{OwoColorize, Stream};
use std::cell::RefCell;
use std::time::Duration;

/// StderrProgressReporter adapter for reporting progress to stderr
///
/// Writes to stderr so it never mixes with the result on stdout.
/// Informational messages and the spinner only appear in verbose mode;
/// warnings are always shown.
pub struct StderrProgressReporter {
    verbose: bool,
    spinner: RefCell<Option<ProgressBar>>,
}

impl StderrProgressReporter {
    pub fn new(verbose: bool) -> Self {
        Self {
            verbose,
            spinner: RefCell::new(None),
        }
    }

    fn create_spinner(message: &str) -> ProgressBar {
        let spinner = ProgressBar::new_spinner();
        spinner.set_style(
            ProgressStyle::default_spinner()
                .template("   {spinner:.green} {msg} [{elapsed}]")
                .expect("Failed to set spinner template"),
        );
        spinner.set_message(message.to_string());
        spinner.enable_steady_tick(Duration::from_millis(100));
        spinner
    }

    /// Prints a line without tearing an active spinner
    fn print_line(&self, line: &str) {
        match self.spinner.borrow().as_ref() {
            Some(spinner) => spinner.suspend(|| eprintln!("{}", line)),
            None => eprintln!("{}", line),
        }
    }
}

impl Default for StderrProgressReporter {
    fn default() -> Self {
        Self::new(false)
    }
}

impl ProgressReporter for StderrProgressReporter {
    fn report(&self, message: &str) {
        if self.verbose {
            self.print_line(message);
        }
    }

    fn report_error(&self, message: &str) {
        let prefix = "Warning:";
        self.print_line(&format!(
            "⚠️  {} {}",
            prefix.if_supports_color(Stream::Stderr, |text| text.yellow()),
            message
        ));
    }

    fn start_activity(&self, message: &str) {
        if !self.verbose {
            return;
        }
        let spinner = Self::create_spinner(message);
        if let Some(previous) = self.spinner.replace(Some(spinner)) {
            previous.finish_and_clear();
        }
    }

    fn finish_activity(&self, message: &str) {
        if let Some(spinner) = self.spinner.borrow_mut().take() {
            spinner.finish_and_clear();
        }
        if self.verbose {
            eprintln!("{}", message);
        }
    }
}
