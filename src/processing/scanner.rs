//! Indicator scanning over normalized report text

use crate::error::{Result, WellnessError};
use crate::processing::indicators::{IndicatorRule, INDICATOR_RULES};
use log::debug;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;

/// One out-of-range indicator found in a report
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Finding {
    pub indicator: String,
    pub values: Vec<u64>,
    pub unit: String,
    pub message: String,
}

impl std::fmt::Display for Finding {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

struct CompiledRule {
    rule: IndicatorRule,
    regex: Regex,
}

pub struct IndicatorScanner {
    rules: Vec<CompiledRule>,
}

static DEFAULT_SCANNER: LazyLock<IndicatorScanner> = LazyLock::new(IndicatorScanner::new);

/// Scan with the built-in rule table.
pub fn scan(text: &str) -> Vec<Finding> {
    DEFAULT_SCANNER.scan(text)
}

static DECIMAL_DIGIT: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\d$").expect("Invalid digit pattern"));

fn is_decimal_digit(c: char) -> bool {
    let mut buf = [0u8; 4];
    DECIMAL_DIGIT.is_match(c.encode_utf8(&mut buf))
}

/// Value of any character `\d` accepts.
///
/// Unicode lays out every decimal digit set as a contiguous 0..=9 run, so the
/// offset from the start of the enclosing run of digits gives the value.
fn digit_value(c: char) -> Option<u64> {
    if let Some(d) = c.to_digit(10) {
        return Some(u64::from(d));
    }
    if !is_decimal_digit(c) {
        return None;
    }
    let mut start = c as u32;
    while let Some(prev) = start.checked_sub(1).and_then(char::from_u32) {
        if !is_decimal_digit(prev) {
            break;
        }
        start -= 1;
    }
    Some(u64::from((c as u32 - start) % 10))
}

/// Parse a run of decimal digits. Values too large for `u64` saturate.
fn parse_integer(digits: &str) -> Option<u64> {
    if digits.is_empty() {
        return None;
    }
    digits.chars().try_fold(0u64, |acc, c| {
        let d = digit_value(c)?;
        Some(acc.saturating_mul(10).saturating_add(d))
    })
}

impl Default for IndicatorScanner {
    fn default() -> Self {
        Self::new()
    }
}

impl IndicatorScanner {
    pub fn new() -> Self {
        let rules = INDICATOR_RULES
            .iter()
            .map(|rule| CompiledRule {
                rule: *rule,
                regex: Regex::new(rule.pattern).expect("Invalid indicator pattern"),
            })
            .collect();
        Self { rules }
    }

    /// Build a scanner over a custom rule table, evaluated in the given order.
    pub fn with_rules(rules: &[IndicatorRule]) -> Result<Self> {
        let rules = rules
            .iter()
            .map(|rule| {
                Regex::new(rule.pattern)
                    .map(|regex| CompiledRule { rule: *rule, regex })
                    .map_err(|e| {
                        WellnessError::InvalidInput(format!("Invalid pattern for '{}': {}", rule.name, e))
                    })
            })
            .collect::<Result<Vec<_>>>()?;
        Ok(Self { rules })
    }

    pub fn rule_count(&self) -> usize {
        self.rules.len()
    }

    pub fn scan(&self, text: &str) -> Vec<Finding> {
        let lower = text.to_lowercase();
        self.rules
            .iter()
            .filter_map(|compiled| compiled.evaluate(&lower))
            .collect()
    }
}

impl CompiledRule {
    /// First match only; a capture that does not parse as an integer counts
    /// as no match at all.
    fn evaluate(&self, lower: &str) -> Option<Finding> {
        let captures = self.regex.captures(lower)?;
        let values = captures
            .iter()
            .skip(1)
            .map(|group| group.and_then(|m| parse_integer(m.as_str())))
            .collect::<Option<Vec<u64>>>()?;

        if !(self.rule.is_flagged)(&values) {
            debug!("{} within range: {:?}", self.rule.name, values);
            return None;
        }

        debug!("{} flagged: {:?}", self.rule.name, values);
        Some(Finding {
            indicator: self.rule.name.to_string(),
            message: (self.rule.message)(&values),
            values,
            unit: self.rule.unit.to_string(),
        })
    }
}
