use serde::{Deserialize, Serialize};

/// One transcript guess for a result entry
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Alternative {
    pub transcript: String,

    /// Confidence score (0.0 to 1.0), if the engine reports one
    pub confidence: Option<f32>,
}

impl Alternative {
    pub fn new(transcript: impl Into<String>) -> Self {
        Self {
            transcript: transcript.into(),
            confidence: None,
        }
    }
}

/// One entry in the engine's result window
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResultEntry {
    /// Whether the engine has finalized this entry
    #[serde(rename = "final")]
    pub is_final: bool,

    /// Ranked guesses, best first. Only the top guess is consumed.
    pub alternatives: Vec<Alternative>,
}

impl ResultEntry {
    pub fn interim(transcript: impl Into<String>) -> Self {
        Self {
            is_final: false,
            alternatives: vec![Alternative::new(transcript)],
        }
    }

    pub fn finalized(transcript: impl Into<String>) -> Self {
        Self {
            is_final: true,
            alternatives: vec![Alternative::new(transcript)],
        }
    }

    /// The best transcript guess, if the engine reported any
    pub fn top_transcript(&self) -> Option<&str> {
        self.alternatives.first().map(|a| a.transcript.as_str())
    }
}

/// A batch of recognition results, as reported by the engine.
///
/// `results` is the ordered entry list up to the current recognition window;
/// `resume_index` marks the first entry not yet delivered in a prior batch.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResultBatch {
    pub resume_index: usize,
    pub results: Vec<ResultEntry>,
}

impl ResultBatch {
    pub fn new(resume_index: usize, results: Vec<ResultEntry>) -> Self {
        Self {
            resume_index,
            results,
        }
    }

    /// The entries not yet seen in a prior batch. The engine owns the resume
    /// index, so an out-of-range value yields an empty slice instead of a
    /// panic.
    pub fn new_entries(&self) -> &[ResultEntry] {
        &self.results[self.resume_index.min(self.results.len())..]
    }
}

/// An error reported by the engine, with an implementation-defined code
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EngineError {
    pub code: String,
    pub message: String,
}

impl std::fmt::Display for EngineError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.code, self.message)
    }
}

/// Asynchronous events pushed by a recognition engine
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum RecognitionEvent {
    /// Capture has begun
    Started,

    /// A batch of interim and/or finalized results
    Result(ResultBatch),

    /// The engine failed; the current session is over
    Error(EngineError),

    /// Capture has ended, however it was initiated
    Ended,
}
