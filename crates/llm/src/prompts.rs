//! Prompt Templates
//!
//! The fixed instruction texts sent with every request. Grounding is
//! enforced here, by contract with the model, not by client-side
//! validation of the response.

/// Instruction text for the analysis request. Directs the model to
/// partition the document, label each section's risk, list rights and
/// obligations, and summarize — using only the supplied document.
pub const ANALYSIS_INSTRUCTIONS: &str = "\
Analyze this legal document.

INSTRUCTIONS:
1. Identify and group the document's content into the most critical logical clauses/sections.
2. For each identified section, provide:
   - A short reference ID (e.g., \"Section 1.1\", \"Termination Clause\").
   - The most important verbatim quote from that section.
   - A single, clear explanation in plain English.
   - A risk assessment (SAFE, CAUTION, or DANGER).
   - Explicitly list the RIGHTS and OBLIGATIONS for the user found in that specific section.
3. Provide a high-level summary of the entire document.

STRICT GROUNDING:
- Use ONLY the provided document.
- If information for a field is missing, do not guess.
- Output MUST be valid JSON.";

/// Grounding instruction for the Q&A request. The prior transcript and the
/// new question follow this as separate turns.
pub const GROUNDING_INSTRUCTIONS: &str = "\
You are a legal document assistant. You interpret legal documents verbatim.
Only use the provided text. If the answer is not found, say it is missing.";
