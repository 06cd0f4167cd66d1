//! Quality, distress and manipulation scores.
//!
//! Scores that compare two periods are undefined without a previous period.
//! Outputs are raw numbers; no zone or label is attached.

pub mod altman;
pub mod beneish;
pub mod ohlson;
pub mod piotroski;
pub mod sloan;
pub mod zmijewski;

use serde::{Deserialize, Serialize};

use crate::period::FinancialPeriod;
use crate::types::MetricValue;

pub use altman::altman_z_score;
pub use beneish::{beneish_indices, beneish_m_score, BeneishIndices};
pub use ohlson::ohlson_o_score;
pub use piotroski::{piotroski_f_score, piotroski_signals, PiotroskiSignals};
pub use sloan::sloan_accruals;
pub use zmijewski::zmijewski_score;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct QualityScores {
    pub piotroski_score: Option<u8>,
    pub altman_z_score: MetricValue,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EnhancedQualityScores {
    pub beneish_m_score: MetricValue,
    pub sloan_accruals: MetricValue,
    pub ohlson_o_score: MetricValue,
    pub zmijewski_score: MetricValue,
}

pub fn calculate_quality_scores(
    current: &FinancialPeriod,
    previous: Option<&FinancialPeriod>,
) -> QualityScores {
    QualityScores {
        piotroski_score: previous.map(|prev| piotroski_f_score(current, prev)),
        altman_z_score: altman_z_score(current),
    }
}

pub fn calculate_enhanced_scores(
    current: &FinancialPeriod,
    previous: Option<&FinancialPeriod>,
) -> EnhancedQualityScores {
    EnhancedQualityScores {
        beneish_m_score: previous.and_then(|prev| beneish_m_score(current, prev)),
        sloan_accruals: sloan_accruals(current),
        ohlson_o_score: ohlson_o_score(current),
        zmijewski_score: zmijewski_score(current),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{prior_period, sample_period};

    #[test]
    fn test_two_period_scores_need_previous() {
        let p = sample_period();
        let q = calculate_quality_scores(&p, None);
        assert_eq!(q.piotroski_score, None);
        assert!(q.altman_z_score.is_some());

        let e = calculate_enhanced_scores(&p, None);
        assert_eq!(e.beneish_m_score, None);
        assert!(e.sloan_accruals.is_some());
        assert!(e.ohlson_o_score.is_some());
        assert!(e.zmijewski_score.is_some());
    }

    #[test]
    fn test_with_previous() {
        let q = calculate_quality_scores(&sample_period(), Some(&prior_period()));
        assert_eq!(q.piotroski_score, Some(9));
        let e = calculate_enhanced_scores(&sample_period(), Some(&prior_period()));
        assert!(e.beneish_m_score.is_some());
    }
}
