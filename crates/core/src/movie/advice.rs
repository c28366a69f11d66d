use serde::{Deserialize, Serialize};

/// Ratings at or above this value are favorable.
pub const FAVORABLE_THRESHOLD: f64 = 7.5;
/// Ratings at or above this value (and below the favorable one) are neutral.
pub const NEUTRAL_THRESHOLD: f64 = 5.0;

/// Viewing recommendation derived from a movie's rating.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Advice {
    Favorable,
    Neutral,
    Unfavorable,
}

impl Advice {
    /// Classifies a rating on the 0-10 scale.
    pub fn from_rating(rating: f64) -> Self {
        if rating >= FAVORABLE_THRESHOLD {
            Self::Favorable
        } else if rating >= NEUTRAL_THRESHOLD {
            Self::Neutral
        } else {
            Self::Unfavorable
        }
    }

    /// Human readable advice shown next to the movie.
    pub fn message(self) -> &'static str {
        match self {
            Self::Favorable => {
                "It is a very good choice! A high rated movie, which is recommended to watch."
            }
            Self::Neutral => "A good option for a night, but do not expect something perfect.",
            Self::Unfavorable => {
                "A controversial choice. Not really recommended to watch, but you still can do so."
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_favorable_at_and_above_threshold() {
        assert_eq!(Advice::from_rating(7.5), Advice::Favorable);
        assert_eq!(Advice::from_rating(8.8), Advice::Favorable);
        assert_eq!(Advice::from_rating(10.0), Advice::Favorable);
    }

    #[test]
    fn test_neutral_band() {
        assert_eq!(Advice::from_rating(5.0), Advice::Neutral);
        assert_eq!(Advice::from_rating(7.49), Advice::Neutral);
    }

    #[test]
    fn test_unfavorable_below_five() {
        assert_eq!(Advice::from_rating(4.99), Advice::Unfavorable);
        assert_eq!(Advice::from_rating(0.0), Advice::Unfavorable);
    }

    #[test]
    fn test_messages() {
        assert!(Advice::Favorable.message().starts_with("It is a very good choice!"));
        assert!(Advice::Neutral.message().starts_with("A good option for a night"));
        assert!(Advice::Unfavorable.message().starts_with("A controversial choice."));
    }

    #[test]
    fn test_serializes_lowercase() {
        assert_eq!(
            serde_json::to_string(&Advice::Unfavorable).unwrap(),
            "\"unfavorable\""
        );
    }
}
