//! Prompt Composer — merges the coach persona, an optional methodology
//! block, the analysis-focus instruction, and the raw transcript into the
//! single instruction string sent to the completion service.
//!
//! `compose` is pure: no state, no clock, no randomness. Identical inputs
//! produce byte-identical output, which is the property the tests pin down.

use crate::coaching::analysis::AnalysisType;
use crate::coaching::methodology::{Breakdown, MethodologyRecord};
use crate::coaching::prompts::COACH_PERSONA;

/// Builds the full prompt in fixed order: persona, methodology block (when a
/// methodology is selected), analysis instruction, transcript. Sections are
/// separated by blank lines and the transcript is appended verbatim with no
/// escaping or truncation.
///
/// An empty transcript is accepted here; rejecting it is the caller's job,
/// and the caller must not invoke the feedback adapter at all in that case.
pub fn compose(
    transcript: &str,
    analysis_type: AnalysisType,
    methodology: Option<&MethodologyRecord>,
) -> String {
    let mut prompt = String::from(COACH_PERSONA);

    if let Some(record) = methodology {
        prompt.push_str(&methodology_block(record));
    }

    prompt.push_str("\n\n");
    prompt.push_str(analysis_type.instruction());
    prompt.push_str("\n\n");
    prompt.push_str(transcript);
    prompt
}

/// Renders a methodology's descriptive record as a prompt section: lead-in
/// naming the methodology, its description, its structured breakdown, and
/// its key principles when it has any.
///
/// Example questions are intentionally not rendered even though the catalog
/// carries them; adding them would change what the completion service sees
/// and therefore its output.
fn methodology_block(record: &MethodologyRecord) -> String {
    let mut block = format!(
        "\n\nIncorporate principles from the {} methodology in your analysis:",
        record.name
    );
    block.push_str(&format!("\n- Description: {}", record.description));

    match &record.breakdown {
        Breakdown::Components(components) => {
            block.push_str("\n- Key Components:");
            for component in components {
                block.push_str(&format!(
                    "\n  - {}: {}",
                    component.label, component.description
                ));
            }
        }
        Breakdown::Stages(stages) => {
            // Stage strings already carry their "Label: text" form.
            block.push_str("\n- Key Stages:");
            for stage in stages {
                block.push_str(&format!("\n  - {stage}"));
            }
        }
    }

    if !record.key_principles.is_empty() {
        block.push_str("\n- Key Principles:");
        for principle in &record.key_principles {
            block.push_str(&format!("\n  - {principle}"));
        }
    }

    block
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coaching::methodology::MethodologyCatalog;

    #[test]
    fn test_compose_is_deterministic() {
        let catalog = MethodologyCatalog::builtin();
        let spin = catalog.lookup("SPIN");
        let a = compose("Customer: hi", AnalysisType::Objections, spin);
        let b = compose("Customer: hi", AnalysisType::Objections, spin);
        assert_eq!(a, b);
    }

    #[test]
    fn test_compose_ends_with_transcript_verbatim() {
        let transcript = "  Salesperson: hello\nCustomer: busy right now.\n";
        let out = compose(transcript, AnalysisType::General, None);
        assert!(out.ends_with(transcript));
    }

    #[test]
    fn test_compose_without_methodology_omits_the_block() {
        let out = compose("Customer: hi", AnalysisType::General, None);
        assert!(!out.contains("Incorporate principles from"));
        assert!(out.starts_with("You are an expert AI Sales Coach"));
    }

    #[test]
    fn test_compose_contains_only_the_selected_instruction() {
        for selected in AnalysisType::ALL {
            let out = compose("Customer: hi", selected, None);
            assert!(out.contains(selected.instruction()));
            for other in AnalysisType::ALL {
                if other != selected {
                    assert!(
                        !out.contains(other.instruction()),
                        "{selected} prompt leaked the {other} instruction"
                    );
                }
            }
        }
    }

    #[test]
    fn test_spin_general_scenario() {
        let catalog = MethodologyCatalog::builtin();
        let out = compose("Customer: hi", AnalysisType::General, catalog.lookup("SPIN"));

        assert!(out.starts_with("You are an expert AI Sales Coach"));
        assert!(out.contains("Incorporate principles from the SPIN Selling methodology"));
        for label in ["Situation", "Problem", "Implication", "Need-Payoff"] {
            assert!(out.contains(&format!("\n  - {label}: ")), "missing {label}");
        }
        assert!(out.contains(AnalysisType::General.instruction()));
        assert!(out.ends_with("Customer: hi"));

        // Persona block precedes the methodology block, which precedes the
        // instruction, which precedes the transcript.
        let methodology_at = out.find("Incorporate principles").unwrap();
        let instruction_at = out.find(AnalysisType::General.instruction()).unwrap();
        assert!(methodology_at < instruction_at);
    }

    #[test]
    fn test_key_principles_rendered_when_present() {
        let catalog = MethodologyCatalog::builtin();
        let out = compose(
            "Customer: hi",
            AnalysisType::General,
            catalog.lookup("CHALLENGER"),
        );
        assert!(out.contains("- Key Principles:"));
        assert!(out.contains("Lead with insights that challenge customer assumptions"));
    }

    #[test]
    fn test_stage_based_methodology_renders_stages() {
        let catalog = MethodologyCatalog::builtin();
        let out = compose(
            "Customer: hi",
            AnalysisType::Closing,
            catalog.lookup("SOLUTION"),
        );
        assert!(out.contains("- Key Stages:"));
        assert!(out.contains("Pain: Identify and develop customer pain points"));
        // SOLUTION carries principles too; they must render after the stages.
        assert!(out.contains("Focus on solving problems, not pitching products"));
    }

    #[test]
    fn test_example_questions_never_reach_the_prompt() {
        let catalog = MethodologyCatalog::builtin();
        let out = compose("Customer: hi", AnalysisType::General, catalog.lookup("SPIN"));
        assert!(!out.contains("How do you currently handle...?"));
    }

    #[test]
    fn test_empty_transcript_is_accepted() {
        let out = compose("", AnalysisType::General, None);
        assert!(out.ends_with("\n\n"));
    }
}
