/// One row of the symptom table.
#[derive(Debug, PartialEq, Eq)]
pub struct SymptomEntry {
    /// Lowercase substring searched for in the input.
    pub keyword: &'static str,
    /// Candidate conditions, rendered comma-joined.
    pub conditions: &'static [&'static str],
}

/// Marker that flags a condition as urgent.
const URGENCY_MARKER: &str = "care";

impl SymptomEntry {
    /// Whether any condition of this entry tells the user to seek care.
    pub fn is_urgent(&self) -> bool {
        self.conditions
            .iter()
            .any(|c| c.to_lowercase().contains(URGENCY_MARKER))
    }
}

/// Fixed keyword table. Declaration order is the output order.
pub static SYMPTOM_TABLE: &[SymptomEntry] = &[
    SymptomEntry {
        keyword: "fever",
        conditions: &["Viral infection", "COVID-19", "Heat-related illness"],
    },
    SymptomEntry {
        keyword: "cough",
        conditions: &["Common cold", "Bronchitis", "COVID-19", "Allergic reaction"],
    },
    SymptomEntry {
        keyword: "headache",
        conditions: &["Tension headache", "Migraine", "Dehydration", "High blood pressure"],
    },
    SymptomEntry {
        keyword: "stomach pain",
        conditions: &["Gastritis", "Food poisoning", "IBS"],
    },
    SymptomEntry {
        keyword: "chest pain",
        conditions: &["Could be serious: heart attack, angina — seek immediate care"],
    },
    SymptomEntry {
        keyword: "shortness of breath",
        conditions: &["Asthma, pneumonia, heart-related — seek immediate care"],
    },
    SymptomEntry {
        keyword: "dizziness",
        conditions: &["Low BP", "Dehydration", "Inner ear problem"],
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_has_seven_lowercase_keywords() {
        assert_eq!(SYMPTOM_TABLE.len(), 7);
        for entry in SYMPTOM_TABLE {
            assert_eq!(entry.keyword, entry.keyword.to_lowercase());
            assert!(!entry.conditions.is_empty());
        }
    }
}
