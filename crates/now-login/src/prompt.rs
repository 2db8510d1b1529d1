//! Terminal prompts backed by dialoguer.

use dialoguer::{Confirm, Input};
use login_flow::Prompter;
use std::io;

/// Interactive prompter for a real terminal.
pub struct TerminalPrompter;

impl Prompter for TerminalPrompter {
    fn read_email(&self, previous_invalid: bool) -> io::Result<String> {
        let prompt = if previous_invalid {
            "Invalid email address. Enter your email"
        } else {
            "Enter your email"
        };

        Input::<String>::new().with_prompt(prompt).interact_text()
    }

    fn confirm(&self, prompt: &str) -> io::Result<bool> {
        Confirm::new().with_prompt(prompt).default(true).interact()
    }
}
