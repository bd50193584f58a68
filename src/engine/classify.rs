use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter};

/// Quality label for a played move
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumIter)]
pub enum MoveClassification {
    Best,
    Excellent,
    Good,
    Inaccuracy,
    Mistake,
    Blunder,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MoveVerdict {
    pub classification: MoveClassification,
    pub centipawn_loss: f64,
}

/// Classifies a move by how far the evaluation swung, in centipawns.
pub fn classify_move(before_eval: f64, after_eval: f64) -> MoveVerdict {
    let centipawn_loss = (after_eval - before_eval).abs() * 100.0;

    let classification = match centipawn_loss {
        loss if loss <= 0.0 => MoveClassification::Best,
        loss if loss <= 2.0 => MoveClassification::Excellent,
        loss if loss <= 5.0 => MoveClassification::Good,
        loss if loss <= 10.0 => MoveClassification::Inaccuracy,
        loss if loss <= 20.0 => MoveClassification::Mistake,
        _ => MoveClassification::Blunder,
    };

    MoveVerdict {
        classification,
        centipawn_loss,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use strum::IntoEnumIterator;

    #[rstest]
    #[case(0.5, 0.5, MoveClassification::Best)]
    #[case(0.5, 0.51, MoveClassification::Excellent)]
    #[case(0.0, -0.04, MoveClassification::Good)]
    #[case(1.0, 0.92, MoveClassification::Inaccuracy)]
    #[case(1.0, 0.85, MoveClassification::Mistake)]
    #[case(1.0, -2.0, MoveClassification::Blunder)]
    fn test_classification_thresholds(
        #[case] before: f64,
        #[case] after: f64,
        #[case] expected: MoveClassification,
    ) {
        assert_eq!(classify_move(before, after).classification, expected);
    }

    #[test]
    fn test_loss_is_symmetric() {
        let gained = classify_move(0.0, 0.3);
        let lost = classify_move(0.3, 0.0);
        assert_eq!(gained.classification, lost.classification);
        assert!((gained.centipawn_loss - 30.0).abs() < 1e-9);
    }

    #[test]
    fn test_labels_serialize_by_name() {
        let labels: Vec<String> = MoveClassification::iter().map(|c| c.to_string()).collect();
        assert_eq!(
            labels,
            vec!["Best", "Excellent", "Good", "Inaccuracy", "Mistake", "Blunder"]
        );
    }
}
