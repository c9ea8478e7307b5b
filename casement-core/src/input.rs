//! Input event source
//!
//! Widgets block on exactly one call per edit-loop iteration. Anything that
//! can produce key codes (keyboard driver, serial console, test script)
//! implements `InputSource`.

use casement_codes::KeyCode;
use heapless::Deque;

/// Blocking source of key codes
pub trait InputSource {
    /// Wait for and return the next key
    fn next_key(&mut self) -> KeyCode;
}

/// Replays a fixed key sequence
///
/// Once the script runs out every read returns Escape, so an edit loop fed
/// a short script still terminates.
#[derive(Debug, Clone)]
pub struct ScriptedInput<const N: usize> {
    keys: Deque<KeyCode, N>,
}

impl<const N: usize> ScriptedInput<N> {
    /// Build a script from a key slice; keys past capacity are dropped
    pub fn new(keys: &[KeyCode]) -> Self {
        let mut queue = Deque::new();
        for &key in keys {
            if queue.push_back(key).is_err() {
                break;
            }
        }
        Self { keys: queue }
    }

    /// Keys not yet read
    pub fn remaining(&self) -> usize {
        self.keys.len()
    }
}

impl<const N: usize> InputSource for ScriptedInput<N> {
    fn next_key(&mut self) -> KeyCode {
        self.keys.pop_front().unwrap_or(KeyCode::ESC)
    }
}
