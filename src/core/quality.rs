use serde::{Deserialize, Serialize};
use std::fmt;

/// Presentation tier for a match score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum QualityLevel {
    Excellent,
    Great,
    Good,
    Fair,
    Low,
}

impl QualityLevel {
    /// Lower bounds, highest first. Anything below the last band is `Low`.
    const BANDS: [(i64, QualityLevel); 4] = [
        (80, QualityLevel::Excellent),
        (60, QualityLevel::Great),
        (40, QualityLevel::Good),
        (20, QualityLevel::Fair),
    ];

    pub fn for_score(score: i64) -> Self {
        Self::BANDS
            .iter()
            .find(|(min, _)| score >= *min)
            .map(|(_, level)| *level)
            .unwrap_or(QualityLevel::Low)
    }

    pub fn label(&self) -> &'static str {
        match self {
            QualityLevel::Excellent => "Excellent",
            QualityLevel::Great => "Great",
            QualityLevel::Good => "Good",
            QualityLevel::Fair => "Fair",
            QualityLevel::Low => "Low",
        }
    }

    pub fn color_token(&self) -> &'static str {
        match self {
            QualityLevel::Excellent => "text-green-600",
            QualityLevel::Great => "text-blue-600",
            QualityLevel::Good => "text-yellow-600",
            QualityLevel::Fair => "text-orange-600",
            QualityLevel::Low => "text-gray-600",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            QualityLevel::Excellent => "Perfect match! You have many complementary skills.",
            QualityLevel::Great => "Great match! You have good skill compatibility.",
            QualityLevel::Good => "Good match! You have some complementary skills.",
            QualityLevel::Fair => "Fair match. You might have some skills to exchange.",
            QualityLevel::Low => "Limited match. Consider expanding your skill profile.",
        }
    }
}

impl fmt::Display for QualityLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Quality badge rendered next to a match
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchQuality {
    pub level: QualityLevel,
    #[serde(rename = "colorToken")]
    pub color_token: String,
    pub description: String,
}

/// Map any integer score to its quality tier
pub fn classify(score: i64) -> MatchQuality {
    let level = QualityLevel::for_score(score);
    MatchQuality {
        level,
        color_token: level.color_token().to_string(),
        description: level.description().to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_band_boundaries() {
        assert_eq!(classify(100).level, QualityLevel::Excellent);
        assert_eq!(classify(80).level, QualityLevel::Excellent);
        assert_eq!(classify(79).level, QualityLevel::Great);
        assert_eq!(classify(60).level, QualityLevel::Great);
        assert_eq!(classify(59).level, QualityLevel::Good);
        assert_eq!(classify(40).level, QualityLevel::Good);
        assert_eq!(classify(39).level, QualityLevel::Fair);
        assert_eq!(classify(20).level, QualityLevel::Fair);
        assert_eq!(classify(19).level, QualityLevel::Low);
        assert_eq!(classify(0).level, QualityLevel::Low);
    }

    #[test]
    fn test_out_of_range_scores() {
        assert_eq!(classify(i64::MAX).level, QualityLevel::Excellent);
        assert_eq!(classify(250).level, QualityLevel::Excellent);
        assert_eq!(classify(-1).level, QualityLevel::Low);
        assert_eq!(classify(i64::MIN).level, QualityLevel::Low);
    }

    #[test]
    fn test_tier_fields_are_paired() {
        let quality = classify(85);
        assert_eq!(quality.color_token, "text-green-600");
        assert!(quality.description.starts_with("Perfect match!"));

        let quality = classify(10);
        assert_eq!(quality.color_token, "text-gray-600");
        assert!(quality.description.starts_with("Limited match."));
    }

    #[test]
    fn test_serializes_level_name() {
        let json = serde_json::to_value(classify(70)).unwrap();
        assert_eq!(json["level"], "Great");
        assert_eq!(json["colorToken"], "text-blue-600");
    }
}
