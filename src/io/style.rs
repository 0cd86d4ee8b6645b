//! Categorical display styling
//!
//! One tone table shared by every view, instead of per-view color switches.

use colored::{Color, ColoredString, Colorize};

use crate::core::types::{
    ChurnRisk, DocumentStatus, NotificationKind, RequestPriority, RequestStatus,
};
use crate::portfolio::benchmark::BenchmarkTier;
use crate::portfolio::compliance::ExpiryUrgency;

/// Display tone for a categorical value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Good,
    Caution,
    Elevated,
    Severe,
    Active,
    Pending,
    Neutral,
}

impl Tone {
    /// Terminal color for this tone
    pub fn color(self) -> Color {
        match self {
            Tone::Good => Color::Green,
            Tone::Caution => Color::Yellow,
            Tone::Elevated => Color::BrightRed,
            Tone::Severe => Color::Red,
            Tone::Active => Color::Blue,
            Tone::Pending => Color::Magenta,
            Tone::Neutral => Color::White,
        }
    }
}

/// Categories that map onto the shared tone table
pub trait Styled {
    fn tone(&self) -> Tone;

    /// Paint a label with this category's tone
    fn paint(&self, text: &str) -> ColoredString {
        text.color(self.tone().color())
    }
}

impl Styled for ChurnRisk {
    fn tone(&self) -> Tone {
        match self {
            ChurnRisk::Low => Tone::Good,
            ChurnRisk::Medium => Tone::Caution,
            ChurnRisk::High => Tone::Severe,
        }
    }
}

impl Styled for DocumentStatus {
    fn tone(&self) -> Tone {
        match self {
            DocumentStatus::Valid => Tone::Good,
            DocumentStatus::Upcoming => Tone::Caution,
            DocumentStatus::Expired => Tone::Severe,
        }
    }
}

impl Styled for RequestPriority {
    fn tone(&self) -> Tone {
        match self {
            RequestPriority::Low => Tone::Good,
            RequestPriority::Medium => Tone::Caution,
            RequestPriority::High => Tone::Elevated,
            RequestPriority::Critical => Tone::Severe,
        }
    }
}

impl Styled for RequestStatus {
    fn tone(&self) -> Tone {
        match self {
            RequestStatus::Open => Tone::Severe,
            RequestStatus::InProgress => Tone::Active,
            RequestStatus::Scheduled => Tone::Pending,
            RequestStatus::Completed => Tone::Good,
        }
    }
}

impl Styled for NotificationKind {
    fn tone(&self) -> Tone {
        match self {
            NotificationKind::Alert => Tone::Severe,
            NotificationKind::Warning => Tone::Caution,
            NotificationKind::Info => Tone::Active,
            NotificationKind::Success => Tone::Good,
        }
    }
}

impl Styled for BenchmarkTier {
    fn tone(&self) -> Tone {
        match self {
            BenchmarkTier::ExceedsTopPerformer => Tone::Good,
            BenchmarkTier::AboveIndustryAverage => Tone::Active,
            BenchmarkTier::BelowAverage => Tone::Caution,
        }
    }
}

impl Styled for ExpiryUrgency {
    fn tone(&self) -> Tone {
        match self {
            ExpiryUrgency::Overdue => Tone::Severe,
            ExpiryUrgency::Warning => Tone::Caution,
            ExpiryUrgency::Clear => Tone::Good,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_risk_tones_follow_severity() {
        assert_eq!(ChurnRisk::Low.tone(), Tone::Good);
        assert_eq!(ChurnRisk::Medium.tone(), Tone::Caution);
        assert_eq!(ChurnRisk::High.tone(), Tone::Severe);
    }

    #[test]
    fn test_priority_tones_are_distinct() {
        let tones = [
            RequestPriority::Low.tone(),
            RequestPriority::Medium.tone(),
            RequestPriority::High.tone(),
            RequestPriority::Critical.tone(),
        ];
        for (i, a) in tones.iter().enumerate() {
            for b in tones.iter().skip(i + 1) {
                assert_ne!(a, b);
            }
        }
    }
}
