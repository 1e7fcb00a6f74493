//! Indicator rule table
//!
//! Each rule is plain data: a pattern run against lower-cased report text,
//! a threshold check on the captured integers, and a message builder.
//! Rules are evaluated in table order, which is also the order findings are
//! reported in.

#[derive(Debug, Clone, Copy)]
pub struct IndicatorRule {
    pub name: &'static str,
    /// Regex over lower-cased text; every capture group must hold an integer
    pub pattern: &'static str,
    pub unit: &'static str,
    pub is_flagged: fn(&[u64]) -> bool,
    pub message: fn(&[u64]) -> String,
}

pub const BLOOD_PRESSURE: &str = "blood_pressure";
pub const TOTAL_CHOLESTEROL: &str = "total_cholesterol";
pub const LDL: &str = "ldl";
pub const HDL: &str = "hdl";
pub const TRIGLYCERIDES: &str = "triglycerides";

pub const INDICATOR_RULES: &[IndicatorRule] = &[
    IndicatorRule {
        name: BLOOD_PRESSURE,
        pattern: r"(\d{2,3})\s*/\s*(\d{2,3})\s*mmhg",
        unit: "mmHg",
        is_flagged: blood_pressure_high,
        message: blood_pressure_message,
    },
    IndicatorRule {
        name: TOTAL_CHOLESTEROL,
        pattern: r"cholesterol.*?(\d+)\s*mg/dl",
        unit: "mg/dL",
        is_flagged: total_cholesterol_high,
        message: total_cholesterol_message,
    },
    IndicatorRule {
        name: LDL,
        pattern: r"ldl.*?(\d+)\s*mg/dl",
        unit: "mg/dL",
        is_flagged: ldl_high,
        message: ldl_message,
    },
    IndicatorRule {
        name: HDL,
        pattern: r"hdl.*?(\d+)\s*mg/dl",
        unit: "mg/dL",
        is_flagged: hdl_low,
        message: hdl_message,
    },
    IndicatorRule {
        name: TRIGLYCERIDES,
        pattern: r"triglycerides.*?(\d+)\s*mg/dl",
        unit: "mg/dL",
        is_flagged: triglycerides_high,
        message: triglycerides_message,
    },
];

fn blood_pressure_high(values: &[u64]) -> bool {
    matches!(values, [systolic, diastolic] if *systolic >= 140 || *diastolic >= 90)
}

fn blood_pressure_message(values: &[u64]) -> String {
    let (systolic, diastolic) = match values {
        [s, d] => (*s, *d),
        _ => return String::new(),
    };
    format!(
        "Blood pressure appears elevated around {}/{} mmHg, \
         which can be consistent with high blood pressure. Only a doctor can accurately interpret this.",
        systolic, diastolic
    )
}

fn single(values: &[u64]) -> Option<u64> {
    match values {
        [value] => Some(*value),
        _ => None,
    }
}

fn total_cholesterol_high(values: &[u64]) -> bool {
    single(values).is_some_and(|v| v > 200)
}

fn total_cholesterol_message(values: &[u64]) -> String {
    single(values)
        .map(|v| format!("Total cholesterol is around {} mg/dL, which is above common reference ranges.", v))
        .unwrap_or_default()
}

fn ldl_high(values: &[u64]) -> bool {
    single(values).is_some_and(|v| v > 130)
}

fn ldl_message(values: &[u64]) -> String {
    single(values)
        .map(|v| {
            format!(
                "LDL (often called 'bad' cholesterol) is about {} mg/dL, which is higher than many guidelines suggest.",
                v
            )
        })
        .unwrap_or_default()
}

fn hdl_low(values: &[u64]) -> bool {
    single(values).is_some_and(|v| v < 40)
}

fn hdl_message(values: &[u64]) -> String {
    single(values)
        .map(|v| {
            format!(
                "HDL (sometimes called 'good' cholesterol) is around {} mg/dL, which can be on the lower side.",
                v
            )
        })
        .unwrap_or_default()
}

fn triglycerides_high(values: &[u64]) -> bool {
    single(values).is_some_and(|v| v > 150)
}

fn triglycerides_message(values: &[u64]) -> String {
    single(values)
        .map(|v| {
            format!(
                "Triglycerides are about {} mg/dL, which is somewhat higher than typical reference values.",
                v
            )
        })
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rule(name: &str) -> &'static IndicatorRule {
        INDICATOR_RULES.iter().find(|r| r.name == name).unwrap()
    }

    #[test]
    fn test_rule_order_is_fixed() {
        let names: Vec<&str> = INDICATOR_RULES.iter().map(|r| r.name).collect();
        assert_eq!(names, vec![BLOOD_PRESSURE, TOTAL_CHOLESTEROL, LDL, HDL, TRIGLYCERIDES]);
    }

    #[test]
    fn test_blood_pressure_threshold_is_inclusive() {
        let bp = rule(BLOOD_PRESSURE);
        assert!((bp.is_flagged)(&[140, 80]));
        assert!((bp.is_flagged)(&[120, 90]));
        assert!(!(bp.is_flagged)(&[139, 89]));
    }

    #[test]
    fn test_lipid_thresholds_are_strict() {
        assert!(!(rule(TOTAL_CHOLESTEROL).is_flagged)(&[200]));
        assert!((rule(TOTAL_CHOLESTEROL).is_flagged)(&[201]));
        assert!(!(rule(LDL).is_flagged)(&[130]));
        assert!((rule(LDL).is_flagged)(&[131]));
        assert!(!(rule(HDL).is_flagged)(&[40]));
        assert!((rule(HDL).is_flagged)(&[39]));
        assert!(!(rule(TRIGLYCERIDES).is_flagged)(&[150]));
        assert!((rule(TRIGLYCERIDES).is_flagged)(&[151]));
    }

    #[test]
    fn test_wrong_arity_never_flags() {
        assert!(!(rule(BLOOD_PRESSURE).is_flagged)(&[180]));
        assert!(!(rule(LDL).is_flagged)(&[]));
    }

    #[test]
    fn test_messages_carry_values_and_units() {
        let msg = (rule(BLOOD_PRESSURE).message)(&[150, 95]);
        assert!(msg.starts_with("Blood pressure appears elevated around 150/95 mmHg, which"));
        let msg = (rule(HDL).message)(&[35]);
        assert!(msg.contains("35 mg/dL"));
    }
}
