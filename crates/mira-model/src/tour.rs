use serde::{Deserialize, Serialize};

use crate::error::{GuideError, Result};
use crate::geometry::Point;

/// One stage of a guided tour: a message and the screen position the
/// mascot moves to while delivering it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GuideStep {
    /// Step name, unique within its sequence. Also used as the target
    /// element id while the step is active, and as the key for fixed
    /// position and placement overrides.
    pub name: String,
    /// Dialog text shown for this step.
    pub message: String,
    /// Carried target position, used when no override exists for `name`.
    pub position: Point,
}

impl GuideStep {
    pub fn new(
        name: impl Into<String>,
        message: impl Into<String>,
        position: impl Into<Point>,
    ) -> Self {
        Self {
            name: name.into(),
            message: message.into(),
            position: position.into(),
        }
    }
}

/// An ordered, named list of [`GuideStep`]s composing one guided tour.
///
/// Sequences are cheap data; one is built per tour start. Step names must
/// be unique within the sequence, which [`GuideSequence::add_step`]
/// enforces.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GuideSequence {
    /// Tour name, used in diagnostics and error messages.
    pub name: String,
    steps: Vec<GuideStep>,
}

impl GuideSequence {
    /// Create an empty sequence. An empty sequence is a valid value but
    /// cannot be started.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            steps: Vec::new(),
        }
    }

    /// Build a sequence from steps, validating name uniqueness.
    pub fn from_steps(name: impl Into<String>, steps: Vec<GuideStep>) -> Result<Self> {
        let mut sequence = Self::new(name);
        for step in steps {
            sequence.add_step(step)?;
        }
        Ok(sequence)
    }

    /// Append a step, rejecting duplicate step names.
    pub fn add_step(&mut self, step: GuideStep) -> Result<()> {
        if self.steps.iter().any(|s| s.name == step.name) {
            return Err(GuideError::duplicate_step(&self.name, &step.name));
        }
        self.steps.push(step);
        Ok(())
    }

    pub fn steps(&self) -> &[GuideStep] {
        &self.steps
    }

    pub fn step(&self, index: usize) -> Option<&GuideStep> {
        self.steps.get(index)
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Step names in order, handy for progress UI and tests.
    pub fn step_names(&self) -> impl Iterator<Item = &str> {
        self.steps.iter().map(|s| s.name.as_str())
    }
}

/// Opaque handle to the active screen's scrollable container.
///
/// Screens register one with the guide store on mount/focus. The store
/// holds it without interpreting it; only tour transitions invoke it, to
/// bring the screen back to its origin before the mascot moves.
pub trait ScrollRegion {
    /// Scroll the container back to its origin.
    fn scroll_to_origin(&self);
}
