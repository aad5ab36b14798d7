// ABOUTME: Per-category coaching strategy catalog with templated action plans
// ABOUTME: Ships defaults for the built-in categories and a fallback for arbitrary ones

// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Momentum Behavioral Intelligence

//! Category strategy catalog.
//!
//! Categories are an open set: the catalog ships hand-written strategies for
//! the built-in life dimensions and synthesizes a templated fallback for any
//! category it has never seen, so the rule engine works for every category a
//! caller tracks. Callers extend coverage with [`StrategyCatalog::register`].

use momentum_core::models::{Archetype, Category};
use std::collections::HashMap;

/// Coaching strategy for one category: a focus label plus one action plan
/// per applicable archetype (breakthrough is cross-category and lives with
/// the rule engine).
#[derive(Debug, Clone)]
pub struct CategoryStrategy {
    /// Short human label for what this category trains (e.g. "mental clarity")
    pub focus_label: String,
    /// Five-step plan for rebuilding a slipping category
    pub recovery_plan: Vec<String>,
    /// Plan for pushing an improving category further
    pub optimization_plan: Vec<String>,
    /// Plan for building a steadier routine
    pub consistency_plan: Vec<String>,
    /// Plan for maintaining and teaching a mastered category
    pub mastery_plan: Vec<String>,
}

impl CategoryStrategy {
    /// The action plan for a given archetype.
    ///
    /// `Breakthrough` has no per-category plan; it maps to the mastery plan
    /// as the closest per-category guidance should a caller ask.
    #[must_use]
    pub fn plan_for(&self, archetype: Archetype) -> &[String] {
        match archetype {
            Archetype::Recovery => &self.recovery_plan,
            Archetype::Optimization => &self.optimization_plan,
            Archetype::ConsistencyBuilding => &self.consistency_plan,
            Archetype::Maintenance | Archetype::Breakthrough => &self.mastery_plan,
        }
    }
}

/// Registry of category strategies with built-in defaults and a synthesized
/// fallback for unregistered categories
#[derive(Debug, Clone)]
pub struct StrategyCatalog {
    entries: HashMap<Category, CategoryStrategy>,
}

impl Default for StrategyCatalog {
    fn default() -> Self {
        Self::with_defaults()
    }
}

impl StrategyCatalog {
    /// Create an empty catalog (every category resolves to the fallback)
    #[must_use]
    pub fn empty() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }

    /// Create a catalog pre-populated with the built-in category strategies
    #[must_use]
    pub fn with_defaults() -> Self {
        let mut catalog = Self::empty();
        catalog.register(Category::new("mind"), mind_strategy());
        catalog.register(Category::new("body"), body_strategy());
        catalog.register(Category::new("sleep"), sleep_strategy());
        catalog.register(Category::new("nutrition"), nutrition_strategy());
        catalog.register(Category::new("social"), social_strategy());
        catalog
    }

    /// Register (or replace) the strategy for a category
    pub fn register(&mut self, category: Category, strategy: CategoryStrategy) {
        self.entries.insert(category, strategy);
    }

    /// Whether a category has a registered (non-fallback) strategy
    #[must_use]
    pub fn is_registered(&self, category: &Category) -> bool {
        self.entries.contains_key(category)
    }

    /// Resolve the strategy for a category, synthesizing a templated fallback
    /// for categories the catalog has never seen. Never fails.
    #[must_use]
    pub fn resolve(&self, category: &Category) -> CategoryStrategy {
        self.entries
            .get(category)
            .cloned()
            .unwrap_or_else(|| fallback_strategy(category))
    }
}

fn mind_strategy() -> CategoryStrategy {
    CategoryStrategy {
        focus_label: "mental clarity".into(),
        recovery_plan: vec![
            "Return to a single 10-minute guided session each morning".into(),
            "Cut session length in half until completion feels easy".into(),
            "Remove one source of digital noise from your mornings".into(),
            "Journal one line on what broke the routine".into(),
            "Add a second short session only after three completed days".into(),
        ],
        optimization_plan: vec![
            "Extend your strongest session of the week by five minutes".into(),
            "Introduce one unguided session to deepen focus".into(),
            "Track distraction count per session and trend it weekly".into(),
            "Pair practice with an existing anchor habit".into(),
        ],
        consistency_plan: vec![
            "Anchor practice to a fixed time and place".into(),
            "Prepare your space the evening before".into(),
            "Use a two-minute minimum rule on low-energy days".into(),
            "Review your completion calendar every Sunday".into(),
        ],
        mastery_plan: vec![
            "Mentor a beginner through their first week".into(),
            "Experiment with longer open-awareness sessions".into(),
            "Document your routine as a template for others".into(),
            "Protect the habit during schedule disruptions".into(),
        ],
    }
}

fn body_strategy() -> CategoryStrategy {
    CategoryStrategy {
        focus_label: "physical energy".into(),
        recovery_plan: vec![
            "Drop intensity to conversational-pace movement for one week".into(),
            "Schedule three 20-minute sessions instead of one long workout".into(),
            "Hold a consistent sleep window to support recovery".into(),
            "Re-test with a light full-body session before ramping up".into(),
            "Increase load only once two sessions in a row feel strong".into(),
        ],
        optimization_plan: vec![
            "Add one progressive-overload session per week".into(),
            "Introduce structured warm-ups to raise session quality".into(),
            "Keep two easy days for every hard day".into(),
            "Plan next week's sessions every Sunday evening".into(),
        ],
        consistency_plan: vec![
            "Lay out workout clothes the night before".into(),
            "Book sessions in your calendar like meetings".into(),
            "Keep a no-zero-days rule: five minutes counts".into(),
            "Find an accountability partner for two sessions a week".into(),
        ],
        mastery_plan: vec![
            "Coach a friend through their first month".into(),
            "Alternate build and recovery weeks deliberately".into(),
            "Add a skill-based movement goal to stay engaged".into(),
            "Keep a maintenance baseline for travel weeks".into(),
        ],
    }
}

fn sleep_strategy() -> CategoryStrategy {
    CategoryStrategy {
        focus_label: "sleep quality".into(),
        recovery_plan: vec![
            "Fix a hard lights-out time for the next seven nights".into(),
            "Move screens out of the bedroom entirely".into(),
            "Cut caffeine after midday".into(),
            "Wind down with the same 15-minute routine nightly".into(),
            "Get morning daylight within an hour of waking".into(),
        ],
        optimization_plan: vec![
            "Shift lights-out 15 minutes earlier each week toward your target".into(),
            "Keep wake time fixed on weekends".into(),
            "Cool the bedroom by a degree or two".into(),
            "Log evening energy to find your natural window".into(),
        ],
        consistency_plan: vec![
            "Set a nightly wind-down alarm one hour before bed".into(),
            "Batch late-evening obligations earlier in the day".into(),
            "Use the bed for sleep only".into(),
            "Review your sleep log each Sunday".into(),
        ],
        mastery_plan: vec![
            "Hold your schedule through one disrupted week".into(),
            "Share your wind-down routine with your household".into(),
            "Experiment carefully with nap timing".into(),
            "Keep a minimal travel protocol ready".into(),
        ],
    }
}

fn nutrition_strategy() -> CategoryStrategy {
    CategoryStrategy {
        focus_label: "nutrition habits".into(),
        recovery_plan: vec![
            "Plan tomorrow's meals the evening before".into(),
            "Rebuild breakfast as the one non-negotiable meal".into(),
            "Keep two default lunches on rotation to remove decisions".into(),
            "Front-load protein and vegetables before discretionary foods".into(),
            "Reintroduce tracking for ten days to re-anchor portions".into(),
        ],
        optimization_plan: vec![
            "Prep two batch-cooked staples every weekend".into(),
            "Match your eating window to your training days".into(),
            "Swap one processed snack for a whole-food default".into(),
            "Review one week of meals for protein consistency".into(),
        ],
        consistency_plan: vec![
            "Shop from a fixed list on a fixed day".into(),
            "Keep emergency meals stocked for low-energy evenings".into(),
            "Eat at regular times before hunger decides for you".into(),
            "Photograph meals as a lightweight log".into(),
        ],
        mastery_plan: vec![
            "Design a template week others can follow".into(),
            "Run a periodic pantry audit".into(),
            "Hold your defaults through social events".into(),
            "Teach your batch-cooking system to someone else".into(),
        ],
    }
}

fn social_strategy() -> CategoryStrategy {
    CategoryStrategy {
        focus_label: "social connection".into(),
        recovery_plan: vec![
            "Reach out to one close friend today with no agenda".into(),
            "Schedule one low-effort meetup this week".into(),
            "Reply to the three messages you have been postponing".into(),
            "Say yes to the next group invitation by default".into(),
            "Put a recurring call with family on the calendar".into(),
        ],
        optimization_plan: vec![
            "Convert one online conversation a week into a meetup".into(),
            "Host a small recurring gathering".into(),
            "Deepen two relationships instead of broadening ten".into(),
            "Plan next month's social calendar in advance".into(),
        ],
        consistency_plan: vec![
            "Attach a weekly call to an existing routine".into(),
            "Keep a short list of people to check in on".into(),
            "Batch invitations at the start of each week".into(),
            "Track connections made, not hours spent".into(),
        ],
        mastery_plan: vec![
            "Introduce friends from different circles to each other".into(),
            "Organize a monthly event others can rely on".into(),
            "Mentor someone newer to your community".into(),
            "Protect one connection ritual during busy seasons".into(),
        ],
    }
}

/// Templated strategy for categories without a registered entry
fn fallback_strategy(category: &Category) -> CategoryStrategy {
    let name = category.as_str();
    CategoryStrategy {
        focus_label: format!("{name} practice"),
        recovery_plan: vec![
            format!("Restart with one small daily {name} action you cannot fail"),
            "Halve your target until completion feels automatic".into(),
            format!("Remove the biggest obstacle between you and your {name} routine"),
            "Note one line per day on what helped or hurt".into(),
            "Scale back up only after three consecutive completed days".into(),
        ],
        optimization_plan: vec![
            format!("Extend your strongest weekly {name} session by ten percent"),
            "Add one deliberate-practice element per week".into(),
            "Adjust one variable at a time and review weekly".into(),
            "Pair the habit with an existing daily anchor".into(),
        ],
        consistency_plan: vec![
            format!("Anchor {name} practice to a fixed time and place"),
            "Use a two-minute minimum rule on low-energy days".into(),
            "Prepare everything you need the evening before".into(),
            "Review your completion calendar weekly".into(),
        ],
        mastery_plan: vec![
            format!("Codify your {name} routine as a repeatable template"),
            "Teach the routine to someone starting out".into(),
            "Introduce one stretch variation to stay engaged".into(),
            "Guard the baseline during disrupted weeks".into(),
        ],
    }
}
