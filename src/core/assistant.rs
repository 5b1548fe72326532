/// Reply used when no trigger matches
pub const DEFAULT_REPLY: &str = "I can help you understand scores, skills, and matches.";

/// A single canned-reply rule: fires when the message contains `trigger`
#[derive(Debug, Clone, Copy)]
pub struct ReplyRule {
    pub trigger: &'static str,
    pub reply: &'static str,
}

/// Stateless canned-reply assistant
///
/// Rules are checked top to bottom against the lower-cased message and the
/// first match wins.
#[derive(Debug, Clone)]
pub struct Assistant {
    rules: Vec<ReplyRule>,
    fallback: &'static str,
}

impl Assistant {
    pub fn new(rules: Vec<ReplyRule>, fallback: &'static str) -> Self {
        Self { rules, fallback }
    }

    pub fn reply(&self, message: &str) -> &'static str {
        let message = message.to_lowercase();
        self.rules
            .iter()
            .find(|rule| message.contains(rule.trigger))
            .map(|rule| rule.reply)
            .unwrap_or(self.fallback)
    }
}

impl Default for Assistant {
    fn default() -> Self {
        let rules = vec![
            ReplyRule {
                trigger: "score",
                reply: "Your match score is based on skill overlap and domain relevance.",
            },
            ReplyRule {
                trigger: "skills",
                reply: "Try adding more core skills like HTML, CSS, or SQL to boost matches.",
            },
            ReplyRule {
                trigger: "apply",
                reply: "Click 'Apply Now' on an internship card to proceed.",
            },
            ReplyRule {
                trigger: "save",
                reply: "Saved internships are stored locally in your browser.",
            },
            ReplyRule {
                trigger: "domain",
                reply: "Choose the domain you're most interested in for better results.",
            },
        ];

        Self::new(rules, DEFAULT_REPLY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trigger_is_case_insensitive() {
        let assistant = Assistant::default();
        assert_eq!(
            assistant.reply("How is my SCORE computed?"),
            "Your match score is based on skill overlap and domain relevance."
        );
    }

    #[test]
    fn test_first_rule_wins() {
        let assistant = Assistant::default();
        // Contains both "skills" and "domain"; "skills" is listed first
        assert_eq!(
            assistant.reply("which skills fit this domain"),
            "Try adding more core skills like HTML, CSS, or SQL to boost matches."
        );
    }

    #[test]
    fn test_fallback() {
        let assistant = Assistant::default();
        assert_eq!(assistant.reply("hello"), DEFAULT_REPLY);
    }

    #[test]
    fn test_custom_rules() {
        let assistant = Assistant::new(
            vec![ReplyRule { trigger: "deadline", reply: "Deadlines vary by posting." }],
            "Ask me about deadlines.",
        );
        assert_eq!(assistant.reply("Any DEADLINE soon?"), "Deadlines vary by posting.");
        assert_eq!(assistant.reply("score?"), "Ask me about deadlines.");
    }
}
