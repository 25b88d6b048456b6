use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BmiCategory {
    Underweight,
    HealthyWeight,
    Overweight,
    Obese,
}

impl BmiCategory {
    pub fn label(&self) -> &'static str {
        match self {
            BmiCategory::Underweight => "Underweight",
            BmiCategory::HealthyWeight => "Healthy Weight",
            BmiCategory::Overweight => "Overweight",
            BmiCategory::Obese => "Obese",
        }
    }
}

impl fmt::Display for BmiCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// `weight / height_m^2` rounded to one decimal, or `None` unless both inputs
/// are finite and positive.
pub fn compute_bmi(height_cm: f64, weight_kg: f64) -> Option<f64> {
    let valid = |v: f64| v.is_finite() && v > 0.0;
    if !valid(height_cm) || !valid(weight_kg) {
        return None;
    }
    let height_m = height_cm / 100.0;
    let bmi = weight_kg / (height_m * height_m);
    Some((bmi * 10.0).round() / 10.0)
}

/// Same as [`compute_bmi`] for raw form text; unparsable input yields `None`.
pub fn compute_bmi_from_input(height_cm: &str, weight_kg: &str) -> Option<f64> {
    let height = height_cm.trim().parse::<f64>().ok()?;
    let weight = weight_kg.trim().parse::<f64>().ok()?;
    compute_bmi(height, weight)
}

/// Boundary values 18.5, 25 and 30 belong to the higher bracket.
pub fn classify(bmi: f64) -> BmiCategory {
    if bmi < 18.5 {
        BmiCategory::Underweight
    } else if bmi < 25.0 {
        BmiCategory::HealthyWeight
    } else if bmi < 30.0 {
        BmiCategory::Overweight
    } else {
        BmiCategory::Obese
    }
}
