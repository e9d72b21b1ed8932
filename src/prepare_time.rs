//! Prepare-time estimation from free-text drink instructions.
//!
//! The estimate is a keyword heuristic: every action or time word found in the
//! lower-cased instructions adds a fixed number of seconds, and the total is
//! floored at [`MIN_PREPARE_SECONDS`].

/// Keyword to seconds contributed per occurrence.
pub const KEYWORD_WEIGHTS: &[(&str, u32)] = &[
    ("shake", 30),
    ("stir", 20),
    ("blend", 45),
    ("pour", 10),
    ("mix", 25),
    ("add", 5),
    ("garnish", 20),
    ("layer", 40),
    ("muddle", 45),
    ("crush", 35),
    ("top", 15),
    ("next", 10),
    ("after", 10),
    ("combine", 15),
    ("well", 5),
    ("repeat", 30),
    ("serve", 5),
    ("gently", 10),
    ("minutes", 120),
    ("seconds", 20),
    ("heat", 60),
    ("cool", 30),
    ("slowly", 15),
    ("fill", 10),
    ("place", 10),
    ("squeeze", 20),
    ("cover", 15),
    ("whiz", 20),
];

/// Lower bound for any estimate computed from present instructions.
pub const MIN_PREPARE_SECONDS: u32 = 30;

/// A keyword that matched, with how often and how much it contributed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeywordHit {
    pub keyword: &'static str,
    pub occurrences: u32,
    pub seconds: u32,
}

/// Estimate how many seconds preparing a drink takes.
///
/// Absent instructions yield `0` and skip the floor. Any present text,
/// including the empty string, yields at least [`MIN_PREPARE_SECONDS`].
///
/// # Example
/// ```
/// use drinkit::prepare_time::estimate;
///
/// assert_eq!(estimate(None), 0);
/// assert_eq!(estimate(Some("")), 30);
/// assert_eq!(estimate(Some("Shake and stir")), 50);
/// ```
pub fn estimate(instructions: Option<&str>) -> u32 {
    let Some(text) = instructions else {
        return 0;
    };

    let total = keyword_breakdown(text)
        .iter()
        .fold(0u32, |acc, hit| acc.saturating_add(hit.seconds));

    total.max(MIN_PREPARE_SECONDS)
}

/// Every keyword found in `instructions`, in table order.
///
/// Occurrences are counted the way splitting on the keyword would count them,
/// so overlapping matches are not counted twice.
pub fn keyword_breakdown(instructions: &str) -> Vec<KeywordHit> {
    let text = instructions.to_lowercase();

    KEYWORD_WEIGHTS
        .iter()
        .filter_map(|&(keyword, weight)| {
            let occurrences = u32::try_from(text.matches(keyword).count()).unwrap_or(u32::MAX);
            (occurrences > 0).then(|| KeywordHit {
                keyword,
                occurrences,
                seconds: occurrences.saturating_mul(weight),
            })
        })
        .collect()
}

/// Render a number of seconds as `"N minutes M seconds"`.
///
/// Zero components are dropped (except a bare `"0 seconds"`), and the units
/// are never singularised.
pub fn format_duration(total_seconds: u32) -> String {
    let minutes = total_seconds / 60;
    let seconds = total_seconds % 60;

    if minutes == 0 {
        format!("{seconds} seconds")
    } else if seconds == 0 {
        format!("{minutes} minutes")
    } else {
        format!("{minutes} minutes {seconds} seconds")
    }
}
