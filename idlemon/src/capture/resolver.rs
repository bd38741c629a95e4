use anyhow::Result;
use serde::{
    Deserialize,
    Serialize,
};

use crate::{
    config::EngineOptions,
    error::invalid_capture_input_error,
    rng::{
        RandomSource,
        rand_util,
    },
};

/// Capture rate at or above which a capture cannot fail.
pub const GUARANTEED_CAPTURE_RATE: f64 = 255.0;

const MIN_CATCH_VALUE: f64 = 1.0;
const MAX_CATCH_VALUE: f64 = 255.0;

/// A single throw of a capture tool at a wild Mon.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CaptureAttempt {
    /// HP the target has left.
    pub current_hp: i32,
    /// Maximum HP of the target.
    pub max_hp: i32,
    /// Base HP of the target's species.
    pub base_vitality: u16,
    /// Strength multiplier of the tool.
    pub capture_rate: f64,
}

impl CaptureAttempt {
    /// Fails if the attempt cannot be evaluated.
    pub fn validate(&self) -> Result<()> {
        if self.max_hp <= 0 {
            return Err(invalid_capture_input_error(format!(
                "max hp must be positive, got {}",
                self.max_hp
            )));
        }
        if self.current_hp < 0 {
            return Err(invalid_capture_input_error(format!(
                "current hp cannot be negative, got {}",
                self.current_hp
            )));
        }
        if !self.capture_rate.is_finite() || self.capture_rate < 0.0 {
            return Err(invalid_capture_input_error(format!(
                "capture rate must be a non-negative number, got {}",
                self.capture_rate
            )));
        }
        Ok(())
    }

    /// Does the tool capture without a roll?
    pub fn guaranteed(&self) -> bool {
        self.capture_rate >= GUARANTEED_CAPTURE_RATE
    }

    /// The value a roll in `[0, 255]` must not exceed for the capture to succeed.
    ///
    /// The weighted HP term is clamped to `[1, 255]` and truncated.
    pub fn catch_value(&self) -> Result<u8> {
        self.validate()?;
        let max_hp = 3.0 * self.max_hp as f64;
        let hp_term = max_hp - 2.0 * self.current_hp as f64;
        let value = hp_term * self.base_vitality as f64 * self.capture_rate / max_hp;
        Ok(value.clamp(MIN_CATCH_VALUE, MAX_CATCH_VALUE).floor() as u8)
    }
}

/// The result of a capture attempt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CaptureOutcome {
    pub captured: bool,
    pub catch_value: u8,
    /// The roll compared against the catch value. Guaranteed captures do not roll.
    pub roll: Option<u8>,
}

/// Resolves a capture attempt.
///
/// Invalid attempts fail before any random value is consumed. Otherwise, at most one value is
/// consumed.
pub fn resolve_capture(
    attempt: &CaptureAttempt,
    rng: &mut dyn RandomSource,
    options: &EngineOptions,
) -> Result<CaptureOutcome> {
    let catch_value = attempt.catch_value()?;
    if attempt.guaranteed() {
        if options.log_catch_rate {
            log::debug!("capture guaranteed with rate {}", attempt.capture_rate);
        }
        return Ok(CaptureOutcome {
            captured: true,
            catch_value,
            roll: None,
        });
    }
    let roll = rand_util::range(rng, 0, 256) as u8;
    if options.log_catch_rate {
        log::debug!("catch value {catch_value}, rolled {roll}");
    }
    Ok(CaptureOutcome {
        captured: roll <= catch_value,
        catch_value,
        roll: Some(roll),
    })
}

#[cfg(test)]
mod capture_test {
    use assert_matches::assert_matches;
    use pretty_assertions::assert_eq;

    use crate::{
        capture::{
            CaptureAttempt,
            CaptureOutcome,
            resolve_capture,
        },
        config::EngineOptions,
        error::InvalidCaptureInputError,
        rng::{
            LcgRandomSource,
            RandomSource,
        },
    };

    fn attempt(current_hp: i32, max_hp: i32, base_vitality: u16, capture_rate: f64) -> CaptureAttempt {
        CaptureAttempt {
            current_hp,
            max_hp,
            base_vitality,
            capture_rate,
        }
    }

    #[test]
    fn truncates_catch_value() {
        // 103 * 45 / 105 = 44.14.
        assert_eq!(attempt(1, 35, 45, 1.0).catch_value().unwrap(), 44);
    }

    #[test]
    fn catch_value_grows_as_hp_drops() {
        let values = [35, 20, 10, 1, 0]
            .into_iter()
            .map(|hp| attempt(hp, 35, 45, 1.0).catch_value().unwrap())
            .collect::<Vec<_>>();
        assert_eq!(values, vec![15, 27, 36, 44, 45]);
    }

    #[test]
    fn clamps_catch_value() {
        assert_eq!(attempt(35, 35, 1, 0.5).catch_value().unwrap(), 1);
        assert_eq!(attempt(35, 35, 45, 0.0).catch_value().unwrap(), 1);
        assert_eq!(attempt(1, 35, 255, 2.0).catch_value().unwrap(), 255);
        assert_eq!(attempt(100, 35, 45, 1.0).catch_value().unwrap(), 1);
    }

    #[test]
    fn rolls_against_catch_value() {
        // Rolls 197, then 244.
        let mut rng = LcgRandomSource::new(Some(7));
        let options = EngineOptions::default();
        let attempt = attempt(1, 35, 204, 1.0);
        assert_eq!(attempt.catch_value().unwrap(), 200);
        assert_eq!(
            resolve_capture(&attempt, &mut rng, &options).unwrap(),
            CaptureOutcome {
                captured: true,
                catch_value: 200,
                roll: Some(197),
            }
        );
        assert_eq!(
            resolve_capture(&attempt, &mut rng, &options).unwrap(),
            CaptureOutcome {
                captured: false,
                catch_value: 200,
                roll: Some(244),
            }
        );
    }

    #[test]
    fn master_tool_always_captures_without_rolling() {
        let mut rng = LcgRandomSource::new(Some(7));
        let options = EngineOptions::default();
        for (current_hp, max_hp) in [(35, 35), (1, 35), (0, 1), (999, 999)] {
            for rate in [255.0, 1000.0] {
                let outcome =
                    resolve_capture(&attempt(current_hp, max_hp, 3, rate), &mut rng, &options)
                        .unwrap();
                assert!(outcome.captured);
                assert_eq!(outcome.roll, None);
            }
        }
        let mut fresh = LcgRandomSource::new(Some(7));
        assert_eq!(rng.next(), fresh.next());
    }

    #[test]
    fn rejects_zero_max_hp() {
        let mut rng = LcgRandomSource::new(Some(7));
        for max_hp in [0, -10] {
            assert_matches!(
                resolve_capture(&attempt(0, max_hp, 45, 255.0), &mut rng, &EngineOptions::default())
                    .unwrap_err()
                    .downcast::<InvalidCaptureInputError>(),
                Ok(_)
            );
        }
    }

    #[test]
    fn rejects_invalid_hp_and_rates() {
        assert_matches!(attempt(-1, 35, 45, 1.0).validate(), Err(_));
        assert_matches!(attempt(1, 35, 45, -1.0).validate(), Err(_));
        assert_matches!(attempt(1, 35, 45, f64::NAN).validate(), Err(_));
        assert_matches!(attempt(1, 35, 45, f64::INFINITY).validate(), Err(_));
        assert_matches!(attempt(1, 35, 45, 1.5).validate(), Ok(()));
    }
}
