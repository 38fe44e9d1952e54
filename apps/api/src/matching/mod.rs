// Deterministic matching: skill-set overlap scoring and candidate ranking.
// No model calls happen here; callers pass in the model's skill strings.

pub mod ranking;
pub mod skill_set;

pub use ranking::{chart_label, rank_candidates, Candidate};
pub use skill_set::{match_skills, score, MatchResult, SkillSet};
