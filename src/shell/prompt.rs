// Line input for the interactive shell
// Author: Gabriel Demetrios Lafis

use std::collections::VecDeque;

use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;

use crate::utils::{AppError, AppResult};

/// One answer read from the user
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PromptInput {
    Line(String),
    /// Ctrl-C, Ctrl-D or end of input
    Interrupted,
}

/// Source of user answers
pub trait Prompt {
    /// Show `prompt` and read one line
    fn read_line(&mut self, prompt: &str) -> AppResult<PromptInput>;
}

/// Terminal prompt backed by rustyline
pub struct LinePrompt {
    editor: DefaultEditor,
}

impl LinePrompt {
    pub fn new() -> AppResult<Self> {
        let editor = DefaultEditor::new().map_err(|e| AppError::Input(e.to_string()))?;
        Ok(LinePrompt { editor })
    }
}

impl Prompt for LinePrompt {
    fn read_line(&mut self, prompt: &str) -> AppResult<PromptInput> {
        match self.editor.readline(prompt) {
            Ok(line) => {
                if !line.trim().is_empty() {
                    let _ = self.editor.add_history_entry(line.as_str());
                }
                Ok(PromptInput::Line(line))
            },
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => Ok(PromptInput::Interrupted),
            Err(err) => Err(AppError::Input(err.to_string())),
        }
    }
}

/// Prompt answering from a fixed script; reports an interrupt once the
/// script runs out. Records every prompt it was shown.
#[derive(Debug, Default)]
pub struct ScriptedPrompt {
    answers: VecDeque<String>,
    pub shown: Vec<String>,
}

impl ScriptedPrompt {
    pub fn new<I, S>(answers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        ScriptedPrompt {
            answers: answers.into_iter().map(Into::into).collect(),
            shown: Vec::new(),
        }
    }
}

impl Prompt for ScriptedPrompt {
    fn read_line(&mut self, prompt: &str) -> AppResult<PromptInput> {
        self.shown.push(prompt.to_string());
        Ok(match self.answers.pop_front() {
            Some(line) => PromptInput::Line(line),
            None => PromptInput::Interrupted,
        })
    }
}
