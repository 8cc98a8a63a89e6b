//! Scripted session format and replay.

use anyhow::Context;
use kurbo::Point;
use serde::Deserialize;
use sketchpad_core::{
    Canvas, Collaborators, Confirmation, ConfirmationProvider, DrawMode, InteractionOutcome,
    PointerEvent, RedrawCounter, SerializableColor, ShapeKind, ToolSettings,
};
use std::collections::VecDeque;
use std::path::Path;

/// One step of a scripted session.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Step {
    Press(Point),
    Drag(Point),
    Release(Point),
    /// Toolbar: switch mode.
    Mode(DrawMode),
    /// Toolbar: pick a shape tool, or none.
    Shape(Option<ShapeKind>),
    Color(SerializableColor),
    Filled(bool),
    Anchor(Point),
    /// Host "clear" button.
    Clear,
}

/// A session: initial tools, queued dialog answers and the steps to play.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Script {
    pub tools: ToolSettings,
    /// Answers handed out to delete prompts, in order.
    pub confirmations: Vec<Confirmation>,
    pub steps: Vec<Step>,
}

impl Script {
    pub fn from_json(json: &str) -> anyhow::Result<Self> {
        serde_json::from_str(json).context("Invalid session script")
    }

    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let json = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read script {}", path.display()))?;
        Self::from_json(&json)
    }
}

/// Confirmation provider that plays back queued answers.
///
/// Once the queue runs dry every prompt counts as dismissed.
#[derive(Debug, Default)]
pub struct ScriptedAnswers {
    answers: VecDeque<Confirmation>,
    pub prompts: Vec<String>,
}

impl ScriptedAnswers {
    pub fn new(answers: Vec<Confirmation>) -> Self {
        Self {
            answers: answers.into(),
            prompts: Vec::new(),
        }
    }
}

impl ConfirmationProvider for ScriptedAnswers {
    fn confirm(&mut self, prompt: &str) -> Confirmation {
        self.prompts.push(prompt.to_string());
        self.answers.pop_front().unwrap_or_else(|| {
            log::warn!("No scripted answer for \"{}\", treating as dismissed", prompt);
            Confirmation::Dismissed
        })
    }
}

/// Result of playing a script.
#[derive(Debug)]
pub struct Replay {
    pub canvas: Canvas,
    pub tools: ToolSettings,
    pub outcomes: Vec<InteractionOutcome>,
    pub prompts: Vec<String>,
    pub redraws: usize,
}

/// Play every step of `script` against a fresh canvas.
pub fn run(script: Script) -> Replay {
    let mut canvas = Canvas::new();
    let mut tools = script.tools;
    let mut answers = ScriptedAnswers::new(script.confirmations);
    let mut redraws = RedrawCounter::new();
    let mut outcomes = Vec::new();

    for step in script.steps {
        let event = match step {
            Step::Press(p) => PointerEvent::Pressed(p),
            Step::Drag(p) => PointerEvent::Dragged(p),
            Step::Release(p) => PointerEvent::Released(p),
            Step::Mode(mode) => {
                tools.mode = mode;
                continue;
            }
            Step::Shape(kind) => {
                tools.shape_kind = kind;
                continue;
            }
            Step::Color(color) => {
                tools.color = color;
                continue;
            }
            Step::Filled(filled) => {
                tools.filled = filled;
                continue;
            }
            Step::Anchor(anchor) => {
                tools.anchor = anchor;
                continue;
            }
            Step::Clear => {
                canvas.clear(&mut redraws);
                continue;
            }
        };

        let mut env = Collaborators::new(&mut tools, &mut answers, &mut redraws);
        let outcome = canvas.handle_pointer_event(event, &mut env);
        log::debug!("{:?} -> {:?}", event, outcome);
        outcomes.push(outcome);
    }

    Replay {
        canvas,
        tools,
        outcomes,
        prompts: answers.prompts,
        redraws: redraws.requests,
    }
}
