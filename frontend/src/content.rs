//! Copy and static structure of the landing page.

pub const HEADLINE: &str = "AI-Powered Climate Intelligence for a Resilient Future";
pub const TAGLINE: &str =
    "Predict extreme weather, track environmental change, and turn insight into everyday climate action.";

pub struct NavEntry {
    pub target: &'static str,
    pub label: &'static str,
}

pub const NAV_ENTRIES: &[NavEntry] = &[
    NavEntry { target: "home", label: "Home" },
    NavEntry { target: "problem", label: "Challenge" },
    NavEntry { target: "solution", label: "Solution" },
    NavEntry { target: "dashboard", label: "Dashboard" },
    NavEntry { target: "impact", label: "Impact" },
    NavEntry { target: "action", label: "Take Action" },
];

pub fn has_nav_entry(target: &str) -> bool {
    NAV_ENTRIES.iter().any(|e| e.target == target)
}

pub struct HeroButton {
    pub target: &'static str,
    pub label: &'static str,
    pub primary: bool,
}

pub const HERO_BUTTONS: &[HeroButton] = &[
    HeroButton { target: "dashboard", label: "Explore Dashboard", primary: true },
    HeroButton { target: "action", label: "Start Taking Action", primary: false },
];

pub const CLOUD_COUNT: usize = 4;

pub struct ProblemCard {
    pub icon: &'static str,
    pub title: &'static str,
    pub body: &'static str,
}

pub const PROBLEM_CARDS: &[ProblemCard] = &[
    ProblemCard {
        icon: "fas fa-temperature-high",
        title: "Rising Temperatures",
        body: "Record heat waves stress cities, crops and power grids every summer.",
    },
    ProblemCard {
        icon: "fas fa-cloud-showers-heavy",
        title: "Extreme Weather",
        body: "Floods and storms arrive faster than traditional forecasts can warn.",
    },
    ProblemCard {
        icon: "fas fa-seedling",
        title: "Food Security",
        body: "Shifting rainfall patterns put harvests for millions of people at risk.",
    },
];

pub struct SolutionStep {
    pub icon: &'static str,
    pub title: &'static str,
    pub body: &'static str,
}

pub const SOLUTION_STEPS: &[SolutionStep] = &[
    SolutionStep { icon: "fas fa-satellite", title: "Collect", body: "Satellite and sensor data" },
    SolutionStep { icon: "fas fa-brain", title: "Analyze", body: "AI climate models" },
    SolutionStep { icon: "fas fa-bell", title: "Alert", body: "Early warnings" },
    SolutionStep { icon: "fas fa-hands-helping", title: "Act", body: "Community response" },
];

pub fn solution_arrow_count() -> usize {
    SOLUTION_STEPS.len().saturating_sub(1)
}

pub struct StatCounter {
    pub target: i64,
    pub suffix: &'static str,
    pub label: &'static str,
}

pub const STAT_COUNTERS: &[StatCounter] = &[
    StatCounter { target: 2_500_000, suffix: "+", label: "People Protected" },
    StatCounter { target: 150, suffix: "", label: "Cities Monitored" },
    StatCounter { target: 95, suffix: "%", label: "Forecast Accuracy" },
    StatCounter { target: 48, suffix: "h", label: "Early Warning Lead" },
];

pub struct ActionItem {
    pub icon: &'static str,
    pub title: &'static str,
    pub body: &'static str,
    pub points: u64,
}

pub const ACTION_ITEMS: &[ActionItem] = &[
    ActionItem {
        icon: "fas fa-bicycle",
        title: "Bike to Work",
        body: "Skip the car for your daily commute.",
        points: 10,
    },
    ActionItem {
        icon: "fas fa-solar-panel",
        title: "Switch to Solar",
        body: "Move your home to renewable energy.",
        points: 25,
    },
    ActionItem {
        icon: "fas fa-recycle",
        title: "Recycle Right",
        body: "Sort your waste for a week.",
        points: 5,
    },
    ActionItem {
        icon: "fas fa-tree",
        title: "Plant a Tree",
        body: "Join a local planting day.",
        points: 50,
    },
];

/// Elements that fade in once when they first scroll into view.
pub const REVEAL_KEYS: &[&str] = &["problem", "dashboard", "impact", "action"];
