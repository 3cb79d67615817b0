use std::io::{self, Write};
use std::time::Duration;

use rand::{Rng, distr::Alphanumeric};
use tokio::time::Instant;

/// Generates the random `state` nonce carried through the authorization
/// redirect to tie the callback to this run.
pub fn generate_state_nonce() -> String {
    rand::rng()
        .sample_iter(&Alphanumeric)
        .take(32)
        .map(char::from)
        .collect()
}

/// Reads one trimmed line from stdin after printing a prompt.
pub fn prompt_line(prompt: &str) -> String {
    print!("{}", prompt);
    io::stdout().flush().ok();
    let mut line = String::new();
    io::stdin().read_line(&mut line).ok();
    line.trim().to_string()
}

/// Prompts until the user enters a 1-based choice within `1..=max`.
pub fn prompt_choice(max: usize) -> usize {
    loop {
        let line = prompt_line(&format!("Please enter candidate choice (1 - {}): ", max));
        match line.parse::<usize>() {
            Ok(n) if (1..=max).contains(&n) => return n,
            Ok(_) => println!("Please enter a number within the range"),
            Err(_) => println!("Please enter an integer"),
        }
    }
}

/// Prompts until the answer starts with a y or an n.
pub fn prompt_yes_no(prompt: &str) -> bool {
    loop {
        let line = prompt_line(prompt).to_lowercase();
        match line.chars().next() {
            Some('y') => return true,
            Some('n') => return false,
            _ => println!("Please enter a yes or no response"),
        }
    }
}

/// Enforces a minimum interval between sequential requests.
///
/// The first `wait` returns immediately; every later one sleeps until the
/// interval since the previous request has passed. Built on `tokio::time`
/// so tests can drive it with a paused clock instead of real sleeps.
pub struct Pacer {
    interval: Duration,
    next_slot: Option<Instant>,
}

impl Pacer {
    pub fn new(interval: Duration) -> Self {
        Pacer {
            interval,
            next_slot: None,
        }
    }

    pub async fn wait(&mut self) {
        if let Some(slot) = self.next_slot {
            tokio::time::sleep_until(slot).await;
        }
        self.next_slot = Some(Instant::now() + self.interval);
    }
}
