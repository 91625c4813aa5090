use thiserror::Error;

/// Contract violation for [`nice_step`]: callers guarantee a positive,
/// finite interval (the resolvers enforce this with `max(...)` floors).
#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum StepError {
    #[error("interval must be a positive finite number, got {0}")]
    InvalidInterval(f32),
}

/// Snap a raw interval to the nearest "nice" value in the {1, 2, 5} x 10^n
/// family.
///
/// With `round = true` the fraction is rounded to the closest of 1/2/5/10
/// using midpoint thresholds (1.5, 3, 7); with `round = false` the smallest
/// nice fraction that still covers the interval is chosen. Rounded output is
/// idempotent: feeding a nice value back in returns it unchanged.
pub fn nice_step(raw_interval: f32, round: bool) -> Result<f32, StepError> {
    if !raw_interval.is_finite() || raw_interval <= 0.0 {
        return Err(StepError::InvalidInterval(raw_interval));
    }
    let exp = raw_interval.log10().floor();
    let magnitude = 10.0_f32.powf(exp);
    let frac = raw_interval / magnitude;
    let nice_frac = if round {
        if frac < 1.5 {
            1.0
        } else if frac < 3.0 {
            2.0
        } else if frac < 7.0 {
            5.0
        } else {
            10.0
        }
    } else if frac <= 1.0 {
        1.0
    } else if frac <= 2.0 {
        2.0
    } else if frac <= 5.0 {
        5.0
    } else {
        10.0
    };
    Ok(nice_frac * magnitude)
}
