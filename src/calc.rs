//! Pure salary arithmetic shared by every resource handler.
//!
//! The constants and lookup tables here must not change: stored totals were
//! produced with exactly these values, and recomputation has to agree with
//! them. One legacy client computed incentive bonuses as `rating * 1000`
//! without the position multiplier; the multiplied form is canonical.

use crate::model::shift::ShiftType;
use once_cell::sync::Lazy;
use std::collections::HashMap;

/// Assumed working hours per month for the overtime hourly rate.
pub const MONTHLY_WORKING_HOURS: f64 = 264.0;

/// Uplift applied to the hourly rate for overtime hours.
pub const OVERTIME_RATE: f64 = 1.5;

/// Peso bonus per rating star before the position multiplier.
pub const INCENTIVE_PER_STAR: f64 = 1000.0;

/// Base daily salary per position, used for shift differential pay.
static POSITION_DAILY_RATE: Lazy<HashMap<&'static str, f64>> = Lazy::new(|| {
    HashMap::from([
        ("Doctor", 3182.0),
        ("Nurse", 1591.0),
        ("Pharmacist", 1136.0),
        ("Physical Therapist", 909.0),
        ("Administrative Staff", 682.0),
    ])
});

/// Incentive multiplier per position. Positions outside the table get 1.0.
static POSITION_MULTIPLIER: Lazy<HashMap<&'static str, f64>> =
    Lazy::new(|| HashMap::from([("Doctor", 1.5), ("Nurse", 1.3), ("Pharmacist", 1.2)]));

/// Unknown positions fall through to 0, which zeroes the whole shift salary.
/// That matches the legacy lookup and is deliberately left unguarded.
pub fn position_daily_rate(position: &str) -> f64 {
    POSITION_DAILY_RATE.get(position).copied().unwrap_or(0.0)
}

pub fn position_multiplier(position: &str) -> f64 {
    POSITION_MULTIPLIER.get(position).copied().unwrap_or(1.0)
}

/// Base salary plus overtime pay at 1.5x the derived hourly rate.
/// Negative inputs are not rejected; callers get exactly what they ask for.
pub fn total_overtime_salary(base_salary: f64, overtime_hours: f64) -> f64 {
    let hourly_rate = base_salary / MONTHLY_WORKING_HOURS;
    let overtime_pay = overtime_hours * hourly_rate * OVERTIME_RATE;
    base_salary + overtime_pay
}

/// Daily rate for the position uplifted by the shift differential percentage.
pub fn shift_salary(position: &str, shift_type: ShiftType) -> f64 {
    let base = position_daily_rate(position);
    base * (1.0 + shift_type.differential_rate() / 100.0)
}

/// Base salary plus `rating x 1000 x position multiplier`.
pub fn incentive_total_salary(base_salary: f64, rating: i64, position: &str) -> f64 {
    let bonus = rating as f64 * INCENTIVE_PER_STAR * position_multiplier(position);
    base_salary + bonus
}

/// Round to two decimal places before persisting a derived amount.
pub fn round_to_cents(amount: f64) -> f64 {
    (amount * 100.0).round() / 100.0
}
