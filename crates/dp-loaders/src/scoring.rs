//! VADER sentiment scoring for news headlines.

use vader_sentiment::SentimentIntensityAnalyzer;

/// Wraps a VADER analyzer and exposes the compound score for a headline.
pub struct HeadlineScorer {
    analyzer: SentimentIntensityAnalyzer<'static>,
}

impl HeadlineScorer {
    pub fn new() -> Self {
        Self { analyzer: SentimentIntensityAnalyzer::new() }
    }

    /// Compound polarity score in [-1.0, 1.0].
    ///
    /// VADER already normalizes into that range; the clamp guards against
    /// float drift at the extremes.
    pub fn compound(&self, text: &str) -> f64 {
        let scores = self.analyzer.polarity_scores(text);
        scores.get("compound").copied().unwrap_or(0.0).clamp(-1.0, 1.0)
    }
}

impl Default for HeadlineScorer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compound_is_deterministic() {
        let scorer = HeadlineScorer::new();
        let a = scorer.compound("Stock surges on record earnings");
        let b = scorer.compound("Stock surges on record earnings");
        assert_eq!(a, b);
    }

    #[test]
    fn test_compound_stays_in_bounds() {
        let scorer = HeadlineScorer::new();
        for text in [
            "Amazing fantastic wonderful great excellent!!!",
            "Horrible terrible awful disastrous catastrophe!!!",
            "",
            "The quarterly report was published on Tuesday",
        ] {
            let score = scorer.compound(text);
            assert!((-1.0..=1.0).contains(&score), "score {score} out of range for {text:?}");
        }
    }

    #[test]
    fn test_positive_and_negative_headlines_diverge() {
        let scorer = HeadlineScorer::new();
        let pos = scorer.compound("Shares soar as profits beat expectations");
        let neg = scorer.compound("Shares crash after fraud scandal");
        assert!(pos > neg);
    }

    #[test]
    fn test_empty_text_is_neutral() {
        let scorer = HeadlineScorer::new();
        assert_eq!(scorer.compound(""), 0.0);
    }
}
