// Core algorithm exports
pub mod explanation;
pub mod inference;
pub mod matcher;
pub mod preparation;
pub mod scoring;
pub mod severity;
pub mod slots;

pub use explanation::{collect_reasons, render_explanation};
pub use inference::{infer_for_case, infer_subspecialty, KEYWORD_TABLE};
pub use matcher::{rank, Matcher, MatcherOptions};
pub use preparation::preparation_checklist;
pub use scoring::{max_total_for_age, score_candidate, ADULT_MAX_TOTAL_SCORE, MAX_TOTAL_SCORE};
pub use severity::{assess_severity, Severity};
pub use slots::{has_exact_slot, parse_slot};
