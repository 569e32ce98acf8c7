//! Gameplay attribute sampling: hashrate and the derived power score.

use crate::rarity::Rarity;
use crate::rng::{log_uniform, Mulberry32};

/// Exponent applied to hashrate when deriving the power score.
/// Super-linear: top cards pull ahead of a straight per-MH comparison.
const POWER_EXPONENT: f64 = 1.10;

/// Sampled gameplay numbers for one card.
#[derive(Debug, Clone, PartialEq)]
pub struct CardAttributes {
    /// Hashrate in MH/s, already rounded to display precision
    pub hashrate_mh: f64,
    /// Human-formatted hashrate
    pub hashrate_label: String,
    /// Derived comparison score
    pub power_score: u64,
}

/// Draw a hashrate for `rarity` from the shared generator and derive the
/// display label and power score.
///
/// The raw draw is log-uniform across the tier range, nudged by a ±3%
/// jitter and clamped back into the range. The clamp is a hard bound:
/// jitter never pushes a card outside its tier.
pub fn sample_attributes(rarity: Rarity, rng: &mut Mulberry32) -> CardAttributes {
    let (min_mh, max_mh) = rarity.hashrate_range();

    let mut mh = log_uniform(min_mh, max_mh, rng);
    mh *= 0.97 + rng.next_f64() * 0.06;
    mh = mh.clamp(min_mh, max_mh);

    // Display precision: one decimal under 200 MH/s, whole numbers above.
    mh = if mh < 200.0 {
        (mh * 10.0).round() / 10.0
    } else {
        mh.round()
    };

    CardAttributes {
        hashrate_label: format_hashrate(mh),
        power_score: power_score(mh),
        hashrate_mh: mh,
    }
}

/// Human label for a hashrate in MH/s, switching to GH/s at 1000.
pub fn format_hashrate(mh: f64) -> String {
    if mh >= 1_000.0 {
        format!("{:.2} GH/s", mh / 1_000.0)
    } else if mh >= 100.0 {
        format!("{:.0} MH/s", mh)
    } else {
        format!("{:.1} MH/s", mh)
    }
}

/// `round(hashrate ^ 1.10)`, monotone in hashrate.
pub fn power_score(mh: f64) -> u64 {
    mh.powf(POWER_EXPONENT).round() as u64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn samples_stay_inside_tier_range() {
        for rarity in Rarity::ALL {
            let (min, max) = rarity.hashrate_range();
            for seed in 0..2_000u32 {
                let mut rng = Mulberry32::new(seed);
                let attrs = sample_attributes(rarity, &mut rng);
                assert!(
                    attrs.hashrate_mh >= min && attrs.hashrate_mh <= max,
                    "{:?} sample {} outside [{}, {}]",
                    rarity,
                    attrs.hashrate_mh,
                    min,
                    max
                );
            }
        }
    }

    #[test]
    fn sampling_is_deterministic() {
        let mut a = Mulberry32::new(561_582);
        let mut b = Mulberry32::new(561_582);
        assert_eq!(
            sample_attributes(Rarity::Rare, &mut a),
            sample_attributes(Rarity::Rare, &mut b)
        );
    }

    #[test]
    fn display_rounding_rules() {
        for seed in 0..500u32 {
            let mut rng = Mulberry32::new(seed);
            let attrs = sample_attributes(Rarity::Common, &mut rng);
            // Below 200 MH/s values carry at most one decimal.
            let scaled = attrs.hashrate_mh * 10.0;
            assert!((scaled - scaled.round()).abs() < 1e-9);
        }
        for seed in 0..500u32 {
            let mut rng = Mulberry32::new(seed);
            let attrs = sample_attributes(Rarity::Epic, &mut rng);
            assert_eq!(attrs.hashrate_mh, attrs.hashrate_mh.round());
        }
    }

    #[test]
    fn label_formatting() {
        assert_eq!(format_hashrate(950.0), "950 MH/s");
        assert_eq!(format_hashrate(1_500.0), "1.50 GH/s");
        assert_eq!(format_hashrate(45.3), "45.3 MH/s");
        assert_eq!(format_hashrate(10.0), "10.0 MH/s");
        assert_eq!(format_hashrate(42_000.0), "42.00 GH/s");
    }

    #[test]
    fn power_score_is_monotone() {
        let mut prev = 0u64;
        for mh in [10.0, 45.3, 120.0, 800.0, 4_000.0, 15_000.0, 42_000.0] {
            let score = power_score(mh);
            assert!(score >= prev, "score regressed at {} MH/s", mh);
            prev = score;
        }
    }

    #[test]
    fn power_score_rewards_superlinearly() {
        // Doubling the hashrate should more than double the score.
        assert!(power_score(2_000.0) > 2 * power_score(1_000.0));
    }
}
