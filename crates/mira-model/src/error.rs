use thiserror::Error;

/// Errors produced by guide construction and string boundaries.
///
/// Everything else in the core is modeled as a tolerated no-op rather than
/// an error: unsaving an absent card, advancing past the end of a tour, or
/// retreating before its first step never fail.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum GuideError {
    /// A guided tour was started with no steps.
    #[error("guided tour '{flow}' has no steps")]
    EmptySequence {
        /// Name of the offending sequence.
        flow: String,
    },

    /// Two steps in the same sequence share a name.
    #[error("guided tour '{flow}' already contains a step named '{step}'")]
    DuplicateStepName {
        /// Name of the sequence being built.
        flow: String,
        /// The duplicated step name.
        step: String,
    },

    /// An animation mode string did not match any known mode.
    #[error("unknown animation state: {value}")]
    InvalidAnimationState {
        /// The rejected input.
        value: String,
    },
}

impl GuideError {
    /// Create an empty-sequence error.
    pub fn empty_sequence(flow: impl Into<String>) -> Self {
        Self::EmptySequence { flow: flow.into() }
    }

    /// Create a duplicate-step error.
    pub fn duplicate_step(flow: impl Into<String>, step: impl Into<String>) -> Self {
        Self::DuplicateStepName {
            flow: flow.into(),
            step: step.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, GuideError>;
