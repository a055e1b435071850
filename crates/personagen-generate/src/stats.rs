/// Aggregate counts derived from preview text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatsSummary {
    pub total_profiles: usize,
    pub male_count: usize,
    pub female_count: usize,
}

/// Count `"Profile"`, `" M"`, and `" F"` substring occurrences in `text`.
///
/// Known limitation: this is a literal substring heuristic, not field-aware
/// parsing. "Profile" inside a mail address or a stray " M"/" F" in an
/// address line is counted too. That imprecision is part of the contract.
pub fn summarize(text: &str) -> StatsSummary {
    StatsSummary {
        total_profiles: text.matches("Profile").count(),
        male_count: text.matches(" M").count(),
        female_count: text.matches(" F").count(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_profiles_and_sexes() {
        let summary = summarize("Profile 1:\n• Sex: M\nProfile 2:\n• Sex: F\n");
        assert_eq!(summary, StatsSummary {
            total_profiles: 2,
            male_count: 1,
            female_count: 1,
        });
    }

    #[test]
    fn heuristic_counts_unrelated_substrings() {
        // "Profile" inside a value and " M"/" F" inside an address both
        // inflate the counts. That is the accepted behavior.
        let summary = summarize("Profile 1:\n• Mail: Profiler@example.org\n• Address: 9 Fir Mews\n");
        // "Profiler" doubles the profile count; " Mail"/" Mews" read as
        // males and " Fir" as a female.
        assert_eq!(summary, StatsSummary {
            total_profiles: 2,
            male_count: 2,
            female_count: 1,
        });
    }

    #[test]
    fn empty_text_counts_nothing() {
        let summary = summarize("");
        assert_eq!(summary, StatsSummary {
            total_profiles: 0,
            male_count: 0,
            female_count: 0,
        });
    }
}
