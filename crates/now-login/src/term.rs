//! Terminal presentation: informational lines and the wait spinner.

use crossterm::style::Stylize;
use indicatif::{ProgressBar, ProgressStyle};
use login_flow::{Presenter, ProgressHandle};
use std::sync::Mutex;
use std::time::Duration;

const SPINNER_TICK: Duration = Duration::from_millis(100);

/// Presenter for a real terminal.
pub struct TerminalPresenter;

impl Presenter for TerminalPresenter {
    fn info(&self, message: &str) {
        println!("> {}", message);
    }

    fn blank_line(&self) {
        println!();
    }

    fn emphasis(&self, text: &str) -> String {
        text.bold().to_string()
    }

    fn highlight(&self, text: &str) -> String {
        text.bold().cyan().to_string()
    }

    fn start_progress(&self, label: &str) -> Box<dyn ProgressHandle> {
        let spinner = ProgressBar::new_spinner();
        spinner.set_style(
            ProgressStyle::with_template("{spinner} {msg}")
                .expect("spinner template must compile"),
        );
        spinner.set_message(label.to_string());
        spinner.enable_steady_tick(SPINNER_TICK);

        Box::new(SpinnerHandle {
            spinner,
            label: Mutex::new(label.to_string()),
        })
    }
}

struct SpinnerHandle {
    spinner: ProgressBar,
    label: Mutex<String>,
}

impl ProgressHandle for SpinnerHandle {
    fn set_label(&self, label: &str) {
        *self.label.lock().unwrap() = label.to_string();
        self.spinner.set_message(label.to_string());
    }

    fn finish(&self, mark: &str) {
        // Replace the spinner line with a persistent marked line.
        self.spinner.finish_and_clear();
        println!("{} {}", mark.green(), *self.label.lock().unwrap());
    }
}
