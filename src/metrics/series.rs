//! Per-epoch loss series and a small recorder for building them during
//! training.

use serde::{Deserialize, Serialize};

/// An ordered sequence of per-epoch loss values for one named run or branch
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LossSeries {
    /// Legend label; rendered as `"{label} Loss"`
    pub label: String,

    /// One loss value per epoch, in epoch order
    pub losses: Vec<f32>,
}

impl LossSeries {
    pub fn new(label: impl Into<String>, losses: Vec<f32>) -> Self {
        LossSeries {
            label: label.into(),
            losses,
        }
    }

    pub fn len(&self) -> usize {
        self.losses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.losses.is_empty()
    }
}

/// Accumulates per-epoch training losses as a run progresses.
///
/// The history converts into the `(epochs, series)` pair the renderer takes,
/// and can be saved to or restored from JSON between sessions.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LossHistory {
    epochs: Vec<f32>,
    losses: Vec<f32>,
}

impl LossHistory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the loss for one epoch
    pub fn record(&mut self, epoch: usize, loss: f32) {
        self.epochs.push(epoch as f32);
        self.losses.push(loss);
    }

    /// The shared epoch axis
    pub fn epochs(&self) -> &[f32] {
        &self.epochs
    }

    pub fn len(&self) -> usize {
        self.epochs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.epochs.is_empty()
    }

    /// Most recently recorded loss
    pub fn last_loss(&self) -> Option<f32> {
        self.losses.last().copied()
    }

    /// Convert the recorded losses into a labeled series
    pub fn into_series(self, label: impl Into<String>) -> LossSeries {
        LossSeries::new(label, self.losses)
    }

    /// Save history to file
    pub fn save(&self, path: &str) -> crate::error::Result<()> {
        let serialized = serde_json::to_string_pretty(self)?;
        std::fs::write(path, serialized)?;
        Ok(())
    }

    /// Load history from file
    pub fn load(path: &str) -> crate::error::Result<Self> {
        let data = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&data)?)
    }
}
