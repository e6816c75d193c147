use super::config::SegmentModifiers;

/// Credit risk class derived from the last four digits of an identity code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CreditSegment {
    Debt,
    Segment1,
    Segment2,
    Segment3,
}

impl CreditSegment {
    pub fn classify(segment_value: u16) -> Self {
        match segment_value {
            0..=2499 => Self::Debt,
            2500..=4999 => Self::Segment1,
            5000..=7499 => Self::Segment2,
            _ => Self::Segment3,
        }
    }

    /// Credit modifier for this segment; zero marks an applicant with no credit.
    pub fn modifier(self, modifiers: &SegmentModifiers) -> u32 {
        match self {
            Self::Debt => 0,
            Self::Segment1 => modifiers.segment_1,
            Self::Segment2 => modifiers.segment_2,
            Self::Segment3 => modifiers.segment_3,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Debt => "debt",
            Self::Segment1 => "segment 1",
            Self::Segment2 => "segment 2",
            Self::Segment3 => "segment 3",
        }
    }
}
