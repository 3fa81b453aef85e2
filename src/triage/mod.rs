//! Local symptom matcher.
//!
//! Maps free text to candidate conditions by case-insensitive substring
//! containment against a fixed keyword table. Used whenever the completion
//! endpoint is not configured or fails. Pure: no I/O, cannot fail.

mod keywords;

pub use keywords::{SymptomEntry, SYMPTOM_TABLE};

/// Reply when no keyword matches.
pub const NO_MATCH_MESSAGE: &str =
    "I couldn't match symptoms locally. Please provide more details.";

/// Appended when any matched condition mentions seeking care.
pub const URGENT_WARNING: &str = "⚠️ Some symptoms may be serious. Seek medical attention.";

/// Always the last line of a local reply.
pub const DISCLAIMER: &str = "Disclaimer: This is not medical advice.";

/// Result of matching one input against the symptom table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SymptomAssessment {
    /// Matched entries, in table order.
    pub matches: Vec<&'static SymptomEntry>,
    /// True if any matched condition suggests seeking immediate care.
    pub urgent: bool,
}

impl SymptomAssessment {
    pub fn is_empty(&self) -> bool {
        self.matches.is_empty()
    }

    /// Render the assessment as the multi-line reply text.
    pub fn render(&self) -> String {
        let mut lines: Vec<String> = Vec::with_capacity(self.matches.len() + 2);

        if self.matches.is_empty() {
            lines.push(NO_MATCH_MESSAGE.to_string());
        } else {
            lines.extend(
                self.matches
                    .iter()
                    .map(|entry| format!("{}: {}", entry.keyword, entry.conditions.join(", "))),
            );
            if self.urgent {
                lines.push(URGENT_WARNING.to_string());
            }
        }

        lines.push(DISCLAIMER.to_string());
        lines.join("\n")
    }
}

/// Match `text` against every keyword in the table.
pub fn assess(text: &str) -> SymptomAssessment {
    let lowered = text.to_lowercase();

    let matches: Vec<&'static SymptomEntry> = SYMPTOM_TABLE
        .iter()
        .filter(|entry| lowered.contains(entry.keyword))
        .collect();

    let urgent = matches.iter().any(|entry| entry.is_urgent());

    SymptomAssessment { matches, urgent }
}

/// Full local reply for `text`.
pub fn local_symptom_check(text: &str) -> String {
    assess(text).render()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_keyword_yields_its_exact_line() {
        for entry in SYMPTOM_TABLE {
            let reply = local_symptom_check(&format!("lately I notice {}", entry.keyword));
            let expected = format!("{}: {}", entry.keyword, entry.conditions.join(", "));
            assert!(
                reply.lines().any(|l| l == expected),
                "missing line {expected:?} in {reply:?}"
            );
        }
    }

    #[test]
    fn matching_is_case_insensitive() {
        let assessment = assess("Terrible HEADACHE and Fever since Monday");
        let keywords: Vec<_> = assessment.matches.iter().map(|e| e.keyword).collect();
        assert_eq!(keywords, vec!["fever", "headache"]);
    }

    #[test]
    fn matches_follow_table_order_not_input_order() {
        let assessment = assess("dizziness, then a cough, then fever");
        let keywords: Vec<_> = assessment.matches.iter().map(|e| e.keyword).collect();
        assert_eq!(keywords, vec!["fever", "cough", "dizziness"]);
    }

    #[test]
    fn no_match_returns_fixed_message_and_disclaimer() {
        let reply = local_symptom_check("my elbow feels odd");
        assert_eq!(reply, format!("{NO_MATCH_MESSAGE}\n{DISCLAIMER}"));
    }

    #[test]
    fn fever_and_headache_render_exactly() {
        let reply = local_symptom_check("I have a fever and a headache");
        assert_eq!(
            reply,
            "fever: Viral infection, COVID-19, Heat-related illness\n\
             headache: Tension headache, Migraine, Dehydration, High blood pressure\n\
             Disclaimer: This is not medical advice."
        );
    }

    #[test]
    fn urgent_warning_present_for_chest_pain() {
        let assessment = assess("sharp chest pain when climbing stairs");
        assert!(assessment.urgent);
        let reply = assessment.render();
        assert!(reply.contains(URGENT_WARNING));
        assert!(reply.ends_with(DISCLAIMER));
    }

    #[test]
    fn urgent_warning_present_for_shortness_of_breath() {
        assert!(assess("Shortness of breath at night").urgent);
    }

    #[test]
    fn urgent_warning_absent_for_non_urgent_matches() {
        let assessment = assess("cough, stomach pain and dizziness");
        assert!(!assessment.urgent);
        assert!(!assessment.render().contains(URGENT_WARNING));
    }

    #[test]
    fn urgent_line_sits_between_matches_and_disclaimer() {
        let reply = local_symptom_check("fever with chest pain");
        let lines: Vec<_> = reply.lines().collect();
        assert_eq!(lines.len(), 4);
        assert!(lines[0].starts_with("fever: "));
        assert!(lines[1].starts_with("chest pain: "));
        assert_eq!(lines[2], URGENT_WARNING);
        assert_eq!(lines[3], DISCLAIMER);
    }

    #[test]
    fn overlapping_keywords_all_reported() {
        // "chest pain" and "stomach pain" share a suffix; both still match
        let assessment = assess("stomach pain and chest pain and a cough");
        let keywords: Vec<_> = assessment.matches.iter().map(|e| e.keyword).collect();
        assert_eq!(keywords, vec!["cough", "stomach pain", "chest pain"]);
    }

    #[test]
    fn keyword_inside_longer_word_still_matches() {
        // Plain containment, no word boundaries
        assert!(!assess("feverish").is_empty());
    }

    #[test]
    fn only_urgent_entries_mention_care() {
        let urgent: Vec<_> = SYMPTOM_TABLE
            .iter()
            .filter(|e| e.is_urgent())
            .map(|e| e.keyword)
            .collect();
        assert_eq!(urgent, vec!["chest pain", "shortness of breath"]);
    }
}
