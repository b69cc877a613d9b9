// Shared by the unit tests and, via `#[path]`, the integration tests.
#![allow(dead_code)]

use crate::error::Result;
use crate::interactive::Prompter;
use std::collections::VecDeque;
use std::fs;
use std::path::PathBuf;

/// Answers prompts from a fixed script and records what it was asked.
pub struct ScriptedPrompter {
    pub inputs: VecDeque<String>,
    pub confirms: VecDeque<bool>,
    pub prompts: Vec<String>,
    watched: Option<PathBuf>,
    /// Contents of the watched file at each `input` call, `None` if missing.
    pub observed: Vec<Option<String>>,
}

impl ScriptedPrompter {
    pub fn new(inputs: &[&str], confirms: &[bool]) -> Self {
        Self {
            inputs: inputs.iter().map(|s| s.to_string()).collect(),
            confirms: confirms.iter().copied().collect(),
            prompts: Vec::new(),
            watched: None,
            observed: Vec::new(),
        }
    }

    pub fn watching(mut self, path: impl Into<PathBuf>) -> Self {
        self.watched = Some(path.into());
        self
    }
}

impl Prompter for ScriptedPrompter {
    fn input(&mut self, prompt: &str, _allow_empty: bool) -> Result<String> {
        if let Some(path) = &self.watched {
            self.observed.push(fs::read_to_string(path).ok());
        }
        self.prompts.push(prompt.to_string());
        Ok(self.inputs.pop_front().expect("unexpected input prompt"))
    }

    fn confirm(&mut self, prompt: &str, _default: bool) -> Result<bool> {
        self.prompts.push(prompt.to_string());
        Ok(self.confirms.pop_front().expect("unexpected confirm prompt"))
    }
}
