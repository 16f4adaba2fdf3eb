use crate::pricing::models::PriceBreakdown;

/// Compute the quotation from its factors
///
/// Returns a zero breakdown if the base price or any multiplier is unset (zero).
/// The factors are multiplied left to right without intermediate rounding.
pub fn calculate(
    base_price: u64,
    work_type_multiplier: f64,
    university_multiplier: f64,
    time_multiplier: f64,
    project_type_multiplier: f64,
) -> PriceBreakdown {
    if base_price == 0
        || work_type_multiplier == 0.0
        || university_multiplier == 0.0
        || time_multiplier == 0.0
    {
        return PriceBreakdown::zero();
    }

    let thesis_price =
        base_price as f64 * work_type_multiplier * university_multiplier * time_multiplier;

    PriceBreakdown {
        thesis_price,
        final_price: thesis_price * project_type_multiplier,
    }
}
