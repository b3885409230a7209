//! Static fallback lookup for the health-check flow.
//!
//! When the external AI call fails or times out, the caller substitutes a
//! canned reply matched against the submitted prompt. The table below is
//! evaluated with `carebot_core::rules::find_first_match`, the exact same
//! scanning primitive the chat engine uses, so the two call sites cannot
//! drift behaviorally: ordered rules, first match wins, else default.

use carebot_core::context::ContextFeatures;
use carebot_core::rules::{self, Rule, RuleMatcher};
use carebot_core::selector::{self, ResponseSelector};

/// Generic wellness replies used when no fallback rule matches the prompt.
const FALLBACK_DEFAULT_POOL: &[&str] = &[
    "Based on your profile, I recommend focusing on the fundamentals: 7-9 hours of sleep, regular physical activity, balanced nutrition, and staying hydrated throughout the day.",
    "General wellness guidance: maintain consistent daily routines for sleep and meals, take short movement breaks, and monitor how your energy levels respond to changes.",
    "My recommendation protocol suggests starting small: one improvement to sleep, one to activity, and one to nutrition. Consistent small changes outperform drastic ones.",
];

/// Fallback rules for the health-check topics, in priority order.
///
/// These cover the subjects the health-check form asks about (sleep hours,
/// stress level) plus the common follow-up themes.
const FALLBACK_TABLE: &[Rule] = &[
    Rule {
        name: "fallback-sleep",
        matcher: RuleMatcher::Keyword(&["sleep", "insomnia", "tired", "rest"]),
        gate: None,
        pool: &[
            "Sleep Optimization: Aim for 7-9 hours per night with a consistent bedtime. Keep your bedroom cool and dark, and avoid screens for an hour before bed. If you regularly sleep less than 6 hours, prioritize this above other changes.",
            "Rest and Recovery: Your sleep schedule is the foundation of your health. Set a fixed wake time, get morning daylight exposure, and limit caffeine after early afternoon.",
        ],
        visual: None,
    },
    Rule {
        name: "fallback-stress",
        matcher: RuleMatcher::Keyword(&["stress", "anxious", "anxiety", "overwhelmed", "worried"]),
        gate: None,
        pool: &[
            "Stress Management: Try brief daily breathing exercises (4 counts in, 7 hold, 8 out) and short walks. If your stress level stays high for weeks, consider talking to a professional.",
            "Managing Pressure: Regular breaks, physical activity, and keeping a consistent sleep schedule all measurably reduce stress. Identify one stressor you can reduce this week.",
        ],
        visual: None,
    },
    Rule {
        name: "fallback-exercise",
        matcher: RuleMatcher::Keyword(&["exercise", "workout", "fitness", "active", "activity"]),
        gate: None,
        pool: &[
            "Physical Activity: Aim for 150 minutes of moderate exercise weekly. Start with 10-minute walks if you are currently inactive, and add strength work twice a week as you progress.",
            "Movement Plan: Choose activities you enjoy so they stick. Walking, cycling, and swimming are all good starting points; consistency matters more than intensity.",
        ],
        visual: None,
    },
    Rule {
        name: "fallback-nutrition",
        matcher: RuleMatcher::Keyword(&["diet", "nutrition", "food", "eat", "meal"]),
        gate: None,
        pool: &[
            "Nutrition Basics: Build meals around vegetables, lean proteins, and whole grains. Regular meal timing supports energy levels and sleep quality.",
            "Balanced Eating: Aim for 5-9 servings of fruits and vegetables daily, limit highly processed foods, and watch portion sizes rather than counting every calorie.",
        ],
        visual: None,
    },
    Rule {
        name: "fallback-hydration",
        matcher: RuleMatcher::Keyword(&["water", "hydration", "thirsty", "drink"]),
        gate: None,
        pool: &[
            "Hydration: Most adults do well with 8-10 glasses of water daily, more with exercise or heat. Pale yellow urine is a practical indicator of adequate hydration.",
        ],
        visual: None,
    },
    Rule {
        name: "fallback-pain",
        matcher: RuleMatcher::Keyword(&["pain", "hurt", "ache"]),
        gate: None,
        pool: &[
            "Pain Guidance: For mild discomfort, rest and gentle movement usually help. Persistent, severe, or worsening pain warrants a professional evaluation; do not rely on general guidance.",
        ],
        visual: None,
    },
];

/// Returns a canned reply for the prompt: first matching fallback rule's
/// pool, else the generic wellness pool. Never fails; the user always
/// receives coherent text.
pub fn fallback_response(prompt: &str, selector: &dyn ResponseSelector) -> String {
    let normalized = rules::normalize(prompt);
    // Fallback matching is stateless; no conversation history applies here.
    let features = ContextFeatures::default();

    let reply = match rules::find_first_match(FALLBACK_TABLE, &normalized, &features) {
        Some(rule) => {
            tracing::debug!(rule = rule.name, "fallback rule matched");
            selector::select(rule.pool, rule.visual, selector)
        }
        None => selector::select(FALLBACK_DEFAULT_POOL, None, selector),
    };
    reply.text
}

#[cfg(test)]
mod tests {
    use super::*;
    use carebot_core::selector::SeededSelector;

    #[test]
    fn test_sleep_prompt_hits_sleep_rule() {
        let selector = SeededSelector::new(1);
        let text = fallback_response("I sleep about 5 hours per night", &selector);
        assert!(text.contains("sleep") || text.contains("Sleep") || text.contains("Rest"));
    }

    #[test]
    fn test_unmatched_prompt_uses_default_pool() {
        let selector = SeededSelector::new(1);
        let text = fallback_response("zzz qqq", &selector);
        assert!(FALLBACK_DEFAULT_POOL.contains(&text.as_str()));
    }

    #[test]
    fn test_priority_order_sleep_before_stress() {
        // A prompt mentioning both topics resolves to the earlier rule.
        let selector = SeededSelector::new(1);
        let text = fallback_response("my sleep suffers when my stress is high", &selector);
        let sleep_rule = FALLBACK_TABLE.iter().find(|r| r.name == "fallback-sleep").unwrap();
        assert!(sleep_rule.pool.contains(&text.as_str()));
    }

    #[test]
    fn test_fallback_never_fails() {
        let selector = SeededSelector::new(1);
        for prompt in ["", "   ", "7", "completely unrelated text"] {
            let text = fallback_response(prompt, &selector);
            assert!(!text.is_empty());
        }
    }
}
