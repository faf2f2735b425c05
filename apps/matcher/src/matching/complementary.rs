//! Complementary-skill suggester — a fixed association table, not a learned model,
//! so every suggestion can be traced back to the held attribute that triggered it.

use std::collections::HashSet;

/// Maximum number of suggestions returned per call.
pub const MAX_SUGGESTIONS: usize = 5;

/// Lower-cased held attribute → commonly paired attributes, in definition order.
pub const COMPLEMENTARY_SKILLS: &[(&str, &[&str])] = &[
    ("javascript", &["typescript", "react", "node.js"]),
    ("typescript", &["react", "node.js"]),
    ("python", &["django", "fastapi", "pandas"]),
    ("java", &["spring boot", "maven"]),
    ("react", &["redux", "next.js", "typescript"]),
    ("node.js", &["express", "mongodb"]),
    ("aws", &["docker", "kubernetes", "terraform"]),
    ("docker", &["kubernetes", "docker compose"]),
    ("kubernetes", &["helm", "prometheus"]),
    ("sql", &["postgresql", "database design"]),
    ("machine learning", &["python", "tensorflow", "pytorch"]),
    ("rust", &["tokio", "webassembly"]),
    ("leadership", &["mentoring", "project management"]),
    ("communication", &["public speaking", "technical writing"]),
];

/// A suggested attribute and the held attribute that triggered it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Suggestion {
    pub name: &'static str,
    pub because: &'static str,
}

/// Suggestions for a candidate holding `held` (any casing).
///
/// Walks the table in definition order, skips anything already held or already
/// suggested, and stops after `MAX_SUGGESTIONS`.
pub fn suggest_complementary<'a, I>(held: I) -> Vec<Suggestion>
where
    I: IntoIterator<Item = &'a str>,
{
    let held: HashSet<String> = held.into_iter().map(|n| n.trim().to_lowercase()).collect();
    let mut emitted: HashSet<&'static str> = HashSet::new();
    let mut suggestions = Vec::new();

    for (key, paired) in COMPLEMENTARY_SKILLS {
        if !held.contains(*key) {
            continue;
        }
        for name in paired.iter() {
            if held.contains(*name) || !emitted.insert(*name) {
                continue;
            }
            suggestions.push(Suggestion {
                name: *name,
                because: *key,
            });
            if suggestions.len() == MAX_SUGGESTIONS {
                return suggestions;
            }
        }
    }

    suggestions
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(suggestions: &[Suggestion]) -> Vec<&'static str> {
        suggestions.iter().map(|s| s.name).collect()
    }

    #[test]
    fn test_aws_suggests_container_and_iac_tools() {
        let suggestions = suggest_complementary(["aws"]);
        assert_eq!(names(&suggestions), vec!["docker", "kubernetes", "terraform"]);
        assert!(suggestions.iter().all(|s| s.because == "aws"));
    }

    #[test]
    fn test_held_skills_are_not_suggested() {
        let suggestions = suggest_complementary(["AWS", "Docker"]);
        // docker is held; kubernetes already emitted via aws; docker compose comes from docker
        assert_eq!(
            names(&suggestions),
            vec!["kubernetes", "terraform", "docker compose"]
        );
    }

    #[test]
    fn test_table_order_not_input_order() {
        let suggestions = suggest_complementary(["rust", "java"]);
        assert_eq!(
            names(&suggestions),
            vec!["spring boot", "maven", "tokio", "webassembly"]
        );
    }

    #[test]
    fn test_capped_at_five() {
        let suggestions = suggest_complementary(["javascript", "python", "aws"]);
        assert_eq!(suggestions.len(), MAX_SUGGESTIONS);
        assert_eq!(
            names(&suggestions),
            vec!["typescript", "react", "node.js", "django", "fastapi"]
        );
    }

    #[test]
    fn test_unknown_skills_yield_nothing() {
        assert!(suggest_complementary(["cobol"]).is_empty());
        assert!(suggest_complementary(Vec::<&str>::new()).is_empty());
    }

    #[test]
    fn test_no_duplicate_suggestions() {
        let suggestions = suggest_complementary(["javascript", "typescript"]);
        // typescript is held; react and node.js emitted once
        assert_eq!(names(&suggestions), vec!["react", "node.js"]);
    }
}
