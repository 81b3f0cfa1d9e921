// Data types shared by loading, ranking and rendering

use serde::{Deserialize, Serialize};

/// One ranking algorithm's output: its name and the probability of every page.
#[derive(Debug, Clone, PartialEq)]
pub struct Variant {
    pub name: String,
    pub probabilities: Vec<f64>,
}

impl Variant {
    pub fn new(name: impl Into<String>, probabilities: Vec<f64>) -> Self {
        Self {
            name: name.into(),
            probabilities,
        }
    }

    pub fn len(&self) -> usize {
        self.probabilities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.probabilities.is_empty()
    }
}

/// A single resolved row of a report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedPage {
    /// 1-based position in the ranking
    pub rank: usize,
    /// Position of the page in the input files
    pub index: usize,
    pub probability: f64,
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VariantReport {
    pub variant: String,
    pub pages: Vec<RankedPage>,
}
