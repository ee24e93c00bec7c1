//! # InfraPulse Intent Responder
//!
//! File: cli/src/core/responder.rs
//! Author: Kamal Raj
//! Repository: https://github.com/infrapulses/infrapulse
//!
//! ## Overview
//!
//! This module implements the canned-response assistant that answers visitor
//! questions on the portfolio site. A free-text utterance is mapped to one of
//! a fixed set of reply strings by ordered keyword containment checks, with a
//! default reply when nothing matches.
//!
//! ## Architecture
//!
//! The matcher is a single ordered table, [`TOPIC_RULES`]. Each entry pairs a
//! topic tag with its trigger substrings and the reply for that topic. Rules
//! are evaluated top to bottom against the lower-cased input; the first rule
//! with any trigger contained in the input wins. Priority therefore lives in
//! the table itself rather than in a chain of conditionals, so it can be read
//! and tested directly.
//!
//! Two properties callers can rely on:
//! - Total: every string input, including the empty string, yields a reply.
//!   There is no error path and no panic.
//! - Pure: no state is read or written beyond the constant table, so calls
//!   are idempotent and safe from any number of threads.
//!
//! ## Examples
//!
//! ```rust
//! use crate::core::responder;
//!
//! let reply = responder::respond("What are your skills?");
//! assert!(reply.contains("DevOps"));
//!
//! assert_eq!(responder::match_topic("how can I reach you?"), "contact");
//! assert_eq!(responder::match_topic(""), "default");
//! ```
//!

/// One row of the intent table: a topic tag, the substrings that trigger it,
/// and the canned reply returned when it matches.
pub struct TopicRule {
    /// Identifier naming the reply category, e.g. `"skills"` or `"contact"`.
    pub tag: &'static str,
    /// Lower-cased fragments whose presence in a normalized input selects
    /// this rule.
    pub triggers: &'static [&'static str],
    /// The reply returned when this rule is the first to match.
    pub reply: &'static str,
}

/// Tag reported when no rule matches.
pub const DEFAULT_TOPIC: &str = "default";

/// Reply returned when no rule matches.
pub const DEFAULT_REPLY: &str = "That's an interesting question! I can tell you about my DevOps skills, \
     infrastructure experience, projects, resume, or how to get in touch. \
     What specifically would you like to know more about?";

/// The intent table, evaluated top to bottom. The order is load-bearing:
/// an input matching triggers from two rules always gets the earlier rule's
/// reply ("email" contains both the contact trigger "email" and the ai
/// trigger "ai"; contact wins). Append new rules at the end unless a higher
/// priority is intended, and pin any reordering with a tie-break test below.
pub const TOPIC_RULES: &[TopicRule] = &[
    TopicRule {
        tag: "skills",
        triggers: &["skill", "technology", "tech"],
        reply: "I specialize in DevOps and SRE with expertise in Linux, Kubernetes, AWS, \
             Grafana, Prometheus, and Wazuh SIEM. I'm also experienced with \
             infrastructure automation, monitoring, and AI-driven operations.",
    },
    TopicRule {
        tag: "experience",
        triggers: &["experience", "background"],
        reply: "I have over 3 years of experience in infrastructure and system operations, \
             working with enterprise environments. I've built monitoring systems, \
             automated deployments, and managed critical infrastructure.",
    },
    TopicRule {
        tag: "projects",
        triggers: &["project", "work", "portfolio"],
        reply: "I've worked on projects like VisionOps (monitoring platform), FutureOps \
             (predictive infrastructure), Kubernetes automation, and SIEM \
             implementations. You can see my portfolio above for detailed examples.",
    },
    TopicRule {
        tag: "contact",
        triggers: &["contact", "email", "reach"],
        reply: "You can reach me through the contact form above, or directly at \
             techey.kamal@gmail.com. I'm always open to discussing new opportunities!",
    },
    TopicRule {
        tag: "ai",
        triggers: &["ai", "artificial", "machine learning", "ml"],
        reply: "I'm passionate about AI for infrastructure operations. I've worked with \
             anomaly detection, predictive analytics, and AI-driven monitoring \
             solutions for infrastructure management.",
    },
    TopicRule {
        tag: "greeting",
        triggers: &["hello", "hi", "hey"],
        reply: "Hello! Nice to meet you! I'm here to help you learn more about my \
             background and experience. What would you like to know?",
    },
    TopicRule {
        tag: "hiring",
        triggers: &["hire", "job", "opportunity"],
        reply: "I'm always open to new DevOps and SRE opportunities! Feel free to reach \
             out through the contact form or email me directly. I'd love to discuss \
             how I can contribute to your infrastructure.",
    },
    TopicRule {
        tag: "resume",
        triggers: &["resume", "cv"],
        reply: "You can view my detailed resume in the Resume section above, which \
             includes my professional experience, education, and certifications in \
             DevOps and infrastructure engineering.",
    },
];

/// # Match Topic (`match_topic`)
///
/// Selects the topic tag for an utterance: the tag of the first rule in
/// [`TOPIC_RULES`] whose trigger set intersects the lower-cased input, or
/// [`DEFAULT_TOPIC`] when none does. Matching is plain substring containment;
/// no trimming or punctuation handling is applied beyond case folding.
///
/// ## Arguments
///
/// * `utterance`: Arbitrary, possibly empty, user-supplied text.
///
/// ## Returns
///
/// * `&'static str`: The selected topic tag. Exactly one tag is selected for
///   every input.
pub fn match_topic(utterance: &str) -> &'static str {
    let normalized = utterance.to_lowercase();

    TOPIC_RULES
        .iter()
        .find(|rule| rule.triggers.iter().any(|t| normalized.contains(t)))
        .map(|rule| rule.tag)
        .unwrap_or(DEFAULT_TOPIC)
}

/// # Look Up Reply (`reply_for`)
///
/// Returns the canned reply for a topic tag, or [`DEFAULT_REPLY`] for
/// [`DEFAULT_TOPIC`] and any unknown tag.
pub fn reply_for(tag: &str) -> &'static str {
    TOPIC_RULES
        .iter()
        .find(|rule| rule.tag == tag)
        .map(|rule| rule.reply)
        .unwrap_or(DEFAULT_REPLY)
}

/// # Respond to an Utterance (`respond`)
///
/// The assistant's whole contract: map a free-text utterance to a reply
/// string. Equivalent to `reply_for(match_topic(utterance))`.
///
/// Never fails. An empty or unrecognized input yields [`DEFAULT_REPLY`], and
/// identical inputs always yield identical outputs.
pub fn respond(utterance: &str) -> &'static str {
    reply_for(match_topic(utterance))
}

// --- Unit Tests ---

/// # Unit Tests for the Intent Responder
///
/// Pins the matching contract: trigger coverage, priority order, the default
/// fallback, case insensitivity, and purity.
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn skills_triggers_select_the_skills_reply() {
        let skills_reply = reply_for("skills");
        assert_eq!(respond("What are your skills?"), skills_reply);
        assert_eq!(respond("which technology do you use"), skills_reply);
        assert_eq!(respond("tech stack?"), skills_reply);
    }

    #[test]
    fn matching_is_case_insensitive() {
        assert_eq!(respond("SKILL"), respond("skill"));
        assert_eq!(respond("Skill"), respond("skill"));
        assert_eq!(match_topic("HELLO THERE"), "greeting");
    }

    #[test]
    fn empty_and_unrecognized_input_fall_back_to_the_default() {
        assert_eq!(respond(""), DEFAULT_REPLY);
        assert_eq!(respond("banana"), DEFAULT_REPLY);
        assert_eq!(respond("asdkjasd"), DEFAULT_REPLY);
        assert_eq!(match_topic(""), DEFAULT_TOPIC);
    }

    #[test]
    fn earlier_rule_wins_when_two_rules_match() {
        // "skill" (rule 1) beats "project" (rule 3).
        assert_eq!(respond("skills shown in your projects"), reply_for("skills"));
        // "email" carries the contact trigger "email" and the ai trigger "ai";
        // contact is earlier.
        assert_eq!(match_topic("what is your email"), "contact");
        // "project" (rule 3) beats the "hi" hidden inside "hire" (rule 6).
        assert_eq!(
            respond("I want to hire you for a project"),
            reply_for("projects")
        );
    }

    #[test]
    fn substring_containment_is_the_whole_contract() {
        // The original matcher uses raw containment, so fragments embedded in
        // larger words still trigger. These pin that compatibility.
        assert_eq!(match_topic("html"), "ai"); // "ml" inside "html"
        assert_eq!(match_topic("hire"), "greeting"); // "hi" inside "hire"
        assert_eq!(match_topic("network throughput"), "projects"); // "work"
    }

    #[test]
    fn hiring_and_resume_rules_are_reachable() {
        assert_eq!(match_topic("any job openings?"), "hiring");
        assert_eq!(match_topic("is there an opportunity"), "hiring");
        assert_eq!(respond("can I see your cv"), reply_for("resume"));
    }

    #[test]
    fn contact_scenario_returns_the_contact_reply() {
        assert_eq!(respond("How can I contact you?"), reply_for("contact"));
    }

    #[test]
    fn responder_is_idempotent() {
        let inputs = ["what are your skills?", "", "banana", "hello"];
        for input in inputs {
            assert_eq!(respond(input), respond(input));
        }
    }

    #[test]
    fn every_rule_has_triggers_and_a_distinct_tag() {
        let mut seen = Vec::new();
        for rule in TOPIC_RULES {
            assert!(!rule.triggers.is_empty(), "rule '{}' has no triggers", rule.tag);
            assert!(!rule.reply.is_empty(), "rule '{}' has no reply", rule.tag);
            assert!(!seen.contains(&rule.tag), "duplicate tag '{}'", rule.tag);
            seen.push(rule.tag);
        }
        assert!(!seen.contains(&DEFAULT_TOPIC));
    }

    #[test]
    fn unknown_tag_maps_to_the_default_reply() {
        assert_eq!(reply_for("no-such-tag"), DEFAULT_REPLY);
        assert_eq!(reply_for(DEFAULT_TOPIC), DEFAULT_REPLY);
    }
}
