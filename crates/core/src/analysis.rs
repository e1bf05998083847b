//! Analysis Data Model
//!
//! The structured result returned by the model service: a document title, a
//! sequence of risk-labeled clauses, and a top-level summary. Field names are
//! serde-renamed to the camelCase wire contract declared in the response
//! schema. The result is created once per successful analysis and replaced
//! wholesale on re-analysis.

use serde::{Deserialize, Serialize};

/// Risk label for a clause, from a closed set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum RiskLevel {
    Safe,
    Caution,
    Danger,
}

impl RiskLevel {
    /// Whether this level warrants the reader's attention.
    pub fn is_flagged(&self) -> bool {
        matches!(self, RiskLevel::Caution | RiskLevel::Danger)
    }
}

impl std::fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RiskLevel::Safe => write!(f, "SAFE"),
            RiskLevel::Caution => write!(f, "CAUTION"),
            RiskLevel::Danger => write!(f, "DANGER"),
        }
    }
}

/// A logically coherent section of the document, as partitioned by the model.
///
/// `original_text` is a verbatim quote by prompt contract; the client trusts
/// the grounding and does not verify it against the document. `id` is a
/// human-readable reference label, unique only for display purposes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Clause {
    /// Short reference label, e.g. "Section 1.1" or "Termination Clause"
    pub id: String,
    /// Verbatim quote of the clause's most important text
    pub original_text: String,
    /// Plain-language explanation
    pub simple_explanation: String,
    /// Risk label from the closed set
    pub risk_level: RiskLevel,
    /// Why the clause received its risk label
    pub risk_justification: String,
    /// Obligations the document places on the user, in document order
    pub obligations: Vec<String>,
    /// Rights the document grants the user, in document order
    pub rights: Vec<String>,
}

/// Top-level summary of the whole document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentSummary {
    /// High-level overview of the document
    pub overview: String,
    /// Key risks worth knowing about
    pub key_risks: Vec<String>,
    /// Suggested next steps for the reader
    pub suggested_actions: Vec<String>,
    /// Clause ids worth re-reading; the service may omit this field
    #[serde(default)]
    pub critical_clauses: Vec<String>,
}

/// The full structured analysis of one document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    /// Document title as identified by the model
    pub title: String,
    /// Risk-labeled clauses in document order
    pub clauses: Vec<Clause>,
    /// Top-level document summary
    pub summary: DocumentSummary,
}

impl AnalysisResult {
    /// Look up a clause by its reference label.
    pub fn clause(&self, id: &str) -> Option<&Clause> {
        self.clauses.iter().find(|c| c.id == id)
    }

    /// Clauses the summary flags as worth re-reading, resolved against the
    /// clause list. Ids that resolve to nothing are skipped.
    pub fn critical_clauses(&self) -> Vec<&Clause> {
        self.summary
            .critical_clauses
            .iter()
            .filter_map(|id| self.clause(id))
            .collect()
    }
}
