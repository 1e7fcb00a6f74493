//! Beginner-friendly fitness plans adapted by goal, age group and activity level

use serde::{Deserialize, Serialize};

const WEIGHT_LOSS_BASE: &[&str] = &[
    "Day 1 – 15–20 min brisk walk + 5–10 min light stretching (neck, shoulders, legs).",
    "Day 2 – 3 rounds: 20x march in place, 15x step touches, 10x chair squats. Rest 30–60 sec between rounds.",
    "Day 3 – 10–15 min slow walk + gentle stretching or basic yoga.",
    "Day 4 – 3 rounds: 20x jumping jacks (or half-jacks), 15x high knees (slow), 10x wall pushups.",
];

const MUSCLE_GAIN_BASE: &[&str] = &[
    "Warm-up – 2–3 min arm circles, leg swings, light jogging in place.",
    "3–4 sets: 10–12x pushups (wall or knee pushups if needed).",
    "3–4 sets: 12–15x bodyweight squats.",
    "3–4 sets: 10–12x lunges each leg (use a chair for support if needed).",
    "3–4 sets: 20–30 sec plank.",
    "Cool-down – 5 min stretching (legs, back, chest, shoulders).",
];

const GENERAL_FITNESS_BASE: &[&str] = &[
    "Day 1 – 20 min brisk walk or light jog + 5 min stretching.",
    "Day 2 – 3 sets: 12x squats, 12x wall pushups, 20 sec plank, 15x glute bridges.",
    "Day 3 – 15–20 min walk + 10 min mobility (ankle circles, hip circles, arm swings).",
    "Day 4 – 10 min walk + 2 sets: 15x chair squats, 15x step-ups, 20x march in place.",
    "Day 5 – Any light fun activity: dancing, walking with friends, or light sports.",
];

const FLEXIBILITY_BASE: &[&str] = &[
    "Neck rotations – 10 each side, slow and gentle.",
    "Shoulder rolls – 10 forward, 10 backward.",
    "Arm circles – 10 each direction.",
    "Hip circles – 10 each direction.",
    "Hamstring stretch – hold 10–20 seconds gently.",
    "Calf stretch against a wall – hold 10–20 seconds each leg.",
    "Ankle circles – 10 each side.",
];

pub const FITNESS_TIPS: &[&str] = &[
    "Start small and build up slowly. Even 5–10 minutes of activity is a good start.",
    "Warm up your body before exercise and cool down afterwards.",
    "Stay hydrated throughout the day.",
    "Rest days are important for recovery.",
    "Good sleep supports both mental wellness and fitness.",
    "Consistency matters more than perfection.",
];

const HIGH_IMPACT: &str = "jumping jacks (or half-jacks)";
const LOW_IMPACT: &str = "low-impact side steps or gentle marching in place";

const AGE_46_PLUS_NOTE: &str = "Because you selected age 46+, this plan focuses on lower-impact movements and extra \
                                warm-up and recovery. Listen to your body and stop any exercise that causes pain.";
const AGE_YOUNG_NOTE: &str = "This plan balances cardio and strength to build overall fitness for your age group. \
                              Increase duration slowly if it feels comfortable.";
const AGE_MID_NOTE: &str = "For your age group, this plan keeps a mix of moderate-intensity work and recovery days. \
                            Focus on good form rather than speed.";

const BEGINNER_NOTE: &str = "Because you selected Beginner, aim for about 2–3 active days per week and keep the pace \
                             comfortable. You can skip a round or reduce reps if it feels too much.";
const MODERATE_NOTE: &str = "With a Moderate activity level, aim for about 3–4 active days per week. Try to complete \
                             the listed sets, but it’s fine to take longer rests.";
const ACTIVE_NOTE: &str = "Since you’re already Active, you can gradually increase duration or add an extra round on \
                           days you feel strong. Keep at least 1–2 lighter recovery days per week.";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FitnessPlan {
    pub goal: String,
    pub activity_level: String,
    pub age_group: Option<String>,
    pub plan: Vec<String>,
    pub tips: Vec<String>,
}

impl FitnessPlan {
    pub fn new(goal: &str, activity_level: &str, age_group: Option<&str>) -> Self {
        Self {
            goal: goal.to_string(),
            activity_level: activity_level.to_string(),
            age_group: age_group.map(str::to_string),
            plan: select_fitness_plan(goal, activity_level, age_group),
            tips: FITNESS_TIPS.iter().map(|s| s.to_string()).collect(),
        }
    }
}

fn base_plan(goal: &str) -> &'static [&'static str] {
    if goal.contains("loss") {
        WEIGHT_LOSS_BASE
    } else if goal.contains("muscle") || goal.contains("strength") {
        MUSCLE_GAIN_BASE
    } else if goal.contains("flexibility") || goal.contains("mobility") {
        FLEXIBILITY_BASE
    } else {
        GENERAL_FITNESS_BASE
    }
}

/// Pick a base plan by goal, then adapt it for age group and activity level.
///
/// The age note (if any) goes first; the activity note is inserted at
/// position 1, after the age note or after the first exercise.
pub fn select_fitness_plan(goal: &str, activity_level: &str, age_group: Option<&str>) -> Vec<String> {
    let goal = goal.to_lowercase();
    let level = activity_level.to_lowercase();
    let age = age_group.unwrap_or_default().to_lowercase();

    let mut plan: Vec<String> = base_plan(&goal).iter().map(|s| s.to_string()).collect();

    if age.contains("46") {
        plan.insert(0, AGE_46_PLUS_NOTE.to_string());
        for step in plan.iter_mut() {
            *step = step.replace(HIGH_IMPACT, LOW_IMPACT);
        }
    } else if age.contains("18-25") || age.contains("26-35") {
        plan.insert(0, AGE_YOUNG_NOTE.to_string());
    } else if age.contains("36-45") {
        plan.insert(0, AGE_MID_NOTE.to_string());
    }

    let level_note = if level.contains("beginner") {
        Some(BEGINNER_NOTE)
    } else if level.contains("moderate") {
        Some(MODERATE_NOTE)
    } else if level.contains("active") || level.contains("high") {
        Some(ACTIVE_NOTE)
    } else {
        None
    };
    if let Some(note) = level_note {
        plan.insert(1.min(plan.len()), note.to_string());
    }

    plan
}
