//! Canned supportive content

use crate::wellness::mood::Mood;

/// Read-only lookup of the text a reply is assembled from.
///
/// An empty slice means "nothing specific for this mood"; callers fall
/// back to the generic lists.
pub trait ContentLibrary {
    fn supportive_responses(&self, mood: Mood) -> &[&'static str];
    fn mindfulness_techniques(&self) -> &[&'static str];
    fn mood_tips(&self, mood: Mood) -> &[&'static str];
    fn journaling_prompts(&self, mood: Mood) -> &[&'static str];
}

/// The built-in content tables
#[derive(Debug, Clone, Copy, Default)]
pub struct StaticContent;

impl ContentLibrary for StaticContent {
    fn supportive_responses(&self, mood: Mood) -> &[&'static str] {
        match mood {
            Mood::Happy => &[
                "That’s wonderful to hear! What made you feel good today?",
                "I’m happy for you — would you like to reflect on what went well?",
                "That’s great! Anything exciting happening that you’d like to remember?",
            ],
            Mood::Neutral => &[
                "Thanks for sharing. How can I support you right now?",
                "It’s okay to have a calm or neutral day. Anything on your mind?",
                "I’m here with you, even if nothing big is happening today.",
            ],
            Mood::Stressed => &[
                "I’m sorry you’re feeling stressed. Let’s slow things down for a moment.",
                "You’re doing your best — it’s okay to pause and breathe.",
                "Stress can feel heavy. You don’t have to handle everything at once.",
            ],
            Mood::Anxious => &[
                "Anxiety can be tough. You’re not alone in feeling this way.",
                "It sounds like your mind is very full right now. We can take things one step at a time.",
                "Thank you for sharing this. It’s okay to feel how you feel.",
            ],
            Mood::Sad => &[
                "I’m really sorry you’re feeling down. Your feelings are valid.",
                "It’s okay to have low days. Be gentle with yourself today.",
                "You matter, even when things feel heavy or unclear.",
            ],
            Mood::Lonely => &[
                "Loneliness can feel very heavy. You’re not alone here.",
                "Thank you for opening up. Want to reflect on what might help you feel more connected?",
                "It’s okay to need people. Reaching out, even a little, is a brave step.",
            ],
            Mood::Angry => &[
                "It sounds like something really frustrated or upset you.",
                "Anger is a valid emotion. We can explore what’s underneath it if you’d like.",
                "It’s okay to feel angry. You don’t have to judge yourself for it.",
            ],
            Mood::Tired => &[
                "You sound exhausted. Rest is also a form of productivity.",
                "Burnout can sneak up on us. Your energy and well-being matter.",
                "Your body and mind both need care. Even a small pause can help.",
            ],
            Mood::Overwhelmed => &[
                "It’s okay to feel overwhelmed. You’re carrying a lot right now.",
                "We can try to break things into smaller, more manageable pieces.",
                "You don’t have to solve everything at once. One small next step is enough.",
            ],
            Mood::Unmotivated => &[
                "Motivation comes and goes, and that doesn’t define your worth.",
                "Thanks for being honest about how you feel. We can start with something very small.",
                "You’re allowed to move slowly. Tiny steps still count.",
            ],
        }
    }

    fn mindfulness_techniques(&self) -> &[&'static str] {
        MINDFULNESS_TECHNIQUES
    }

    fn mood_tips(&self, mood: Mood) -> &[&'static str] {
        match mood {
            Mood::Happy => &[
                "Take a moment to really savor this feeling and note what contributed to it.",
                "Share your good mood with someone — a kind message or compliment can spread positivity.",
            ],
            Mood::Neutral => &[
                "Even on neutral days, a small act of self-care can lift your mood slightly.",
                "Check in with your body: do you need water, food, a stretch, or a small break?",
            ],
            Mood::Stressed => &[
                "Break big tasks into smaller pieces and focus on just one at a time.",
                "Schedule a short break away from screens to reset your mind.",
            ],
            Mood::Anxious => &[
                "Write your worries down and separate what you can control from what you can’t.",
                "Gently limit caffeine and give yourself a calm, slow breathing break.",
            ],
            Mood::Sad => &[
                "Reach out to someone you trust, even with a small message like “I’m having a heavy day.”",
                "Do one comforting activity, like listening to soft music or sitting somewhere peaceful.",
            ],
            Mood::Lonely => &[
                "Consider sending a message or voice note to someone you feel safe with.",
                "Joining an interest-based group (online or offline) can slowly build connection.",
            ],
            Mood::Angry => &[
                "Give your body a safe outlet: a brisk walk, stretching, or squeezing a stress ball.",
                "If possible, pause before reacting and note what boundary or value feels crossed.",
            ],
            Mood::Tired => &[
                "Try to prioritize sleep and short rest periods, even if you can’t fully slow down.",
                "Notice if you’re saying yes to too many things; it’s okay to set limits.",
            ],
            Mood::Overwhelmed => &[
                "List everything on your mind, then circle just one thing to do next.",
                "Ask yourself, “What can I postpone, delegate, or simplify right now?”",
            ],
            Mood::Unmotivated => &[
                "Commit to a tiny action (2–5 minutes). Often motivation comes after starting.",
                "Be kind to yourself; low-energy days are part of being human.",
            ],
        }
    }

    fn journaling_prompts(&self, mood: Mood) -> &[&'static str] {
        match mood {
            Mood::Happy => &[
                "What made you feel happy today, and how can you bring more of that into your life?",
                "If you could bottle this feeling and open it later, what would you want to remember?",
            ],
            Mood::Neutral => &[
                "How would you describe today in a few words, and what would make it 5% better?",
                "Is there anything quietly sitting in the background of your mind right now?",
            ],
            Mood::Stressed => &[
                "What are the main things stressing you out? Which of them are within your control?",
                "If you could take one small step to reduce stress today, what would it be?",
            ],
            Mood::Anxious => &[
                "What are your mind’s “worst-case scenarios” right now, and how likely are they really?",
                "If you talked to yourself like a caring friend, what would you say about your worries?",
            ],
            Mood::Sad => &[
                "What feels heaviest on your heart right now?",
                "Who or what do you miss, and what would you want to tell them if you could?",
            ],
            Mood::Lonely => &[
                "When have you felt more connected in the past, and what was different then?",
                "What kind of connection or relationship are you craving right now?",
            ],
            Mood::Angry => &[
                "What exactly triggered your anger, and what value or boundary feels crossed?",
                "If you could express your anger without consequences, what would you say?",
            ],
            Mood::Tired => &[
                "What has been draining your energy lately?",
                "If you could remove or reduce one demand from your week, what would it be?",
            ],
            Mood::Overwhelmed => &[
                "List everything on your plate. Which 1–2 items truly need your attention first?",
                "What would “good enough” look like instead of “perfect” right now?",
            ],
            Mood::Unmotivated => &[
                "What makes it hard to start today? Is it fear, exhaustion, boredom, or something else?",
                "What is one small step you’re willing to try, even if you don’t feel like it?",
            ],
        }
    }
}

pub const MINDFULNESS_TECHNIQUES: &[&str] = &[
    "Try box breathing: inhale 4 seconds, hold 4, exhale 4, hold 4 and repeat a few times.",
    "Use the 5-4-3-2-1 grounding method: notice 5 things you see, 4 you can touch, 3 you hear, 2 you smell, and 1 you can taste.",
    "Take a slow 5-minute walk and focus on your footsteps and breathing.",
    "Do a quick body scan from head to toe, gently relaxing any tense areas.",
    "Practice 4-7-8 breathing: inhale 4 seconds, hold 7, exhale 8 to calm your nervous system.",
    "Pause and notice your posture, then adjust to a more open and relaxed position.",
];

pub const GENERIC_SUPPORTIVE: &[&str] = &["Thanks for sharing. How can I support you right now?"];

pub const GENERIC_TIPS: &[&str] = &[
    "Take a short break to stretch, hydrate, or step outside for a minute.",
    "Notice one thing you’re grateful for, even if it’s very small.",
];

pub const GENERIC_JOURNALING_PROMPTS: &[&str] = &[
    "How would you describe your current mood in your own words?",
    "What is one kind thing you can do for yourself today?",
];
