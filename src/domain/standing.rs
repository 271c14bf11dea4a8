use std::fmt;

/// Academic standing band of a GPA.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Standing {
    FirstClass,
    UpperSecond,
    LowerSecond,
    Third,
    Pass,
    ConditionalPass,
    Fail,
}

impl Standing {
    /// Ordered from the highest band to the lowest.
    pub const SCALE: [Standing; 7] = [
        Standing::FirstClass,
        Standing::UpperSecond,
        Standing::LowerSecond,
        Standing::Third,
        Standing::Pass,
        Standing::ConditionalPass,
        Standing::Fail,
    ];

    pub fn from_gpa(gpa: f64) -> Standing {
        Self::SCALE
            .into_iter()
            .find(|standing| gpa >= standing.lower_bound())
            .unwrap_or(Standing::Fail)
    }

    pub fn lower_bound(&self) -> f64 {
        match self {
            Standing::FirstClass => 3.7,
            Standing::UpperSecond => 3.3,
            Standing::LowerSecond => 3.0,
            Standing::Third => 2.7,
            Standing::Pass => 2.3,
            Standing::ConditionalPass => 2.0,
            Standing::Fail => 0.0,
        }
    }

    /// Highest GPA shown for the band in the scale table.
    pub fn upper_bound(&self) -> f64 {
        let above = match self {
            Standing::FirstClass => return 4.0,
            Standing::UpperSecond => Standing::FirstClass,
            Standing::LowerSecond => Standing::UpperSecond,
            Standing::Third => Standing::LowerSecond,
            Standing::Pass => Standing::Third,
            Standing::ConditionalPass => Standing::Pass,
            Standing::Fail => Standing::ConditionalPass,
        };
        above.lower_bound() - 0.01
    }

    pub fn letter(&self) -> &'static str {
        match self {
            Standing::FirstClass => "A",
            Standing::UpperSecond => "B+",
            Standing::LowerSecond => "B",
            Standing::Third => "C+",
            Standing::Pass => "C",
            Standing::ConditionalPass => "D",
            Standing::Fail => "F",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Standing::FirstClass => "First Class Honors",
            Standing::UpperSecond => "Upper Second Class",
            Standing::LowerSecond => "Lower Second Class",
            Standing::Third => "Third Class",
            Standing::Pass => "Pass",
            Standing::ConditionalPass => "Conditional Pass",
            Standing::Fail => "Fail",
        }
    }

    pub fn is_passing(&self) -> bool {
        *self != Standing::Fail
    }
}

impl fmt::Display for Standing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Headline and one line of advice for a GPA.
///
/// The bands are coarser than [Standing]: everything from 2.00 up to 2.70 is one band.
pub(crate) fn assessment(gpa: f64) -> (&'static str, &'static str) {
    if gpa >= 3.7 {
        (
            "Excellent - First Class Honors!",
            "Outstanding academic performance. Eligible for honors programs.",
        )
    } else if gpa >= 3.3 {
        (
            "Very Good - Upper Second Class",
            "Strong academic record. Consider research opportunities.",
        )
    } else if gpa >= 3.0 {
        (
            "Good - Lower Second Class",
            "Solid performance. Maintain current study habits.",
        )
    } else if gpa >= 2.7 {
        (
            "Satisfactory - Third Class",
            "Meeting requirements. Room for improvement in some areas.",
        )
    } else if gpa >= 2.0 {
        (
            "Conditional - Minimum Passing",
            "Academic probation risk. Consider academic counseling.",
        )
    } else {
        (
            "Below Standard",
            "Immediate academic intervention required.",
        )
    }
}

/// Study advice for a GPA.
pub(crate) fn recommendations(gpa: f64) -> &'static [&'static str] {
    if gpa < 2.5 {
        &[
            "Schedule meeting with academic advisor",
            "Utilize tutoring services",
            "Improve time management skills",
        ]
    } else if gpa < 3.0 {
        &[
            "Join study groups",
            "Focus on weaker subjects",
            "Regular review of materials",
        ]
    } else {
        &[
            "Consider honors courses",
            "Explore research opportunities",
            "Mentor fellow students",
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bands() {
        assert_eq!(Standing::from_gpa(4.0), Standing::FirstClass);
        assert_eq!(Standing::from_gpa(3.7), Standing::FirstClass);
        assert_eq!(Standing::from_gpa(3.69), Standing::UpperSecond);
        assert_eq!(Standing::from_gpa(3.43), Standing::UpperSecond);
        assert_eq!(Standing::from_gpa(3.0), Standing::LowerSecond);
        assert_eq!(Standing::from_gpa(2.7), Standing::Third);
        assert_eq!(Standing::from_gpa(2.3), Standing::Pass);
        assert_eq!(Standing::from_gpa(2.0), Standing::ConditionalPass);
        assert_eq!(Standing::from_gpa(1.99), Standing::Fail);
        assert_eq!(Standing::from_gpa(0.0), Standing::Fail);
    }

    #[test]
    fn scale_bounds_are_contiguous() {
        assert_eq!(Standing::FirstClass.upper_bound(), 4.0);
        assert!((Standing::UpperSecond.upper_bound() - 3.69).abs() < 1e-9);
        assert!((Standing::Fail.upper_bound() - 1.99).abs() < 1e-9);
        for pair in Standing::SCALE.windows(2) {
            assert!((pair[1].upper_bound() + 0.01 - pair[0].lower_bound()).abs() < 1e-9);
        }
        assert!(!Standing::Fail.is_passing());
        assert_eq!(Standing::UpperSecond.letter(), "B+");
    }

    #[test]
    fn assessment_bands() {
        assert_eq!(assessment(3.7).0, "Excellent - First Class Honors!");
        assert_eq!(
            assessment(3.43).1,
            "Strong academic record. Consider research opportunities."
        );
        assert_eq!(assessment(3.0).0, "Good - Lower Second Class");
        assert_eq!(assessment(2.7).0, "Satisfactory - Third Class");
        assert_eq!(assessment(2.69).0, "Conditional - Minimum Passing");
        assert_eq!(assessment(2.0).0, "Conditional - Minimum Passing");
        assert_eq!(
            assessment(1.99),
            ("Below Standard", "Immediate academic intervention required.")
        );
    }

    #[test]
    fn advice_by_gpa() {
        assert_eq!(recommendations(2.49)[0], "Schedule meeting with academic advisor");
        assert_eq!(recommendations(2.5)[0], "Join study groups");
        assert_eq!(recommendations(3.0)[0], "Consider honors courses");
    }
}
