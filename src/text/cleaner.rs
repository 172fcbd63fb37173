//! Regex-based cleaning of raw document text.
//!
//! Cleaning is an ordered list of substitution rules folded over the input.
//! Order matters: later rules assume punctuation and digits are already gone,
//! so that stray letters and foreign words stand alone between spaces.

use crate::error::{DocmineError, Result};
use once_cell::sync::Lazy;
use regex::Regex;

/// Mixed Latin/Cyrillic word patterns removed by the standard rule set.
///
/// Only these four interleavings are recognized. Words alternating scripts
/// more often (e.g. `abвгdeжз`) survive unless [`Cleaner::strict`] is used.
pub const MIXED_SCRIPT_PATTERNS: &[(&str, &str)] = &[
    ("mixed_latin_cyrillic", r"\b[a-z]+[а-я]+\b"),
    ("mixed_cyrillic_latin_cyrillic", r"\b[а-я]+[a-z]+[а-я]+\b"),
    ("mixed_cyrillic_latin", r"\b[а-я]+[a-z]+\b"),
    ("mixed_latin_cyrillic_latin", r"\b[a-z]+[а-я]+[a-z]+\b"),
];

/// Name of the final rule; rules added later are inserted before it.
const COLLAPSE_WHITESPACE: &str = "collapse_whitespace";

static STANDARD_RULES: Lazy<Vec<CleaningRule>> = Lazy::new(|| {
    let mut rules = vec![
        // ASCII punctuation, i.e. !"#$%&'()*+,-./:;<=>?@[\]^_`{|}~
        CleaningRule::compiled("punctuation", r"[[:punct:]]", " "),
        CleaningRule::compiled("digits", r"\d+", ""),
        CleaningRule::compiled("single_cyrillic", r"\b[А-Яа-я] \b|\b [А-Яа-я]\b", ""),
        CleaningRule::compiled("single_latin", r"\b[A-Za-z] \b|\b [A-Za-z]\b", ""),
        CleaningRule::compiled("latin_words", r"\b[a-z]+\b", ""),
    ];
    rules.extend(
        MIXED_SCRIPT_PATTERNS
            .iter()
            .map(|(name, pattern)| CleaningRule::compiled(name, pattern, "")),
    );
    rules.push(CleaningRule::compiled(COLLAPSE_WHITESPACE, r"\s+", " "));
    rules
});

static STRICT_MIXED_SCRIPT: Lazy<CleaningRule> = Lazy::new(|| {
    CleaningRule::compiled(
        "mixed_any",
        r"\b\w*(?:[a-z][а-яё]|[а-яё][a-z])\w*\b",
        "",
    )
});

/// A single named substitution: every match of `pattern` becomes `replacement`.
#[derive(Debug, Clone)]
pub struct CleaningRule {
    name: String,
    pattern: Regex,
    replacement: String,
}

impl CleaningRule {
    /// Creates a rule from a regex pattern.
    ///
    /// The replacement may refer to capture groups (`$1`, `$name`).
    pub fn new(name: &str, pattern: &str, replacement: &str) -> Result<Self> {
        let pattern = Regex::new(pattern)
            .map_err(|e| DocmineError::Config(format!("invalid pattern for rule '{}': {}", name, e)))?;
        Ok(Self {
            name: name.to_string(),
            pattern,
            replacement: replacement.to_string(),
        })
    }

    fn compiled(name: &str, pattern: &str, replacement: &str) -> Self {
        Self::new(name, pattern, replacement).unwrap()
    }

    /// The rule name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The regex source of the rule.
    pub fn pattern(&self) -> &str {
        self.pattern.as_str()
    }

    /// The replacement text.
    pub fn replacement(&self) -> &str {
        &self.replacement
    }

    /// Applies the rule to `text`.
    pub fn apply(&self, text: &str) -> String {
        self.pattern
            .replace_all(text, self.replacement.as_str())
            .into_owned()
    }
}

/// Ordered chain of cleaning rules.
#[derive(Debug, Clone)]
pub struct Cleaner {
    rules: Vec<CleaningRule>,
}

impl Default for Cleaner {
    fn default() -> Self {
        Self::standard()
    }
}

impl Cleaner {
    /// The standard rule chain: punctuation, digits, single letters, Latin
    /// words, the four mixed-script patterns, whitespace collapse.
    pub fn standard() -> Self {
        Self {
            rules: STANDARD_RULES.clone(),
        }
    }

    /// The standard chain plus removal of any word containing both Latin and
    /// Cyrillic letters, however they alternate.
    pub fn strict() -> Self {
        let mut cleaner = Self::standard();
        cleaner.push_rule(STRICT_MIXED_SCRIPT.clone());
        cleaner
    }

    /// Builds a cleaner from an explicit rule list, applied in order.
    pub fn from_rules(rules: Vec<CleaningRule>) -> Self {
        Self { rules }
    }

    /// Adds a rule. It runs after the existing rules but before the final
    /// whitespace collapse, if there is one.
    pub fn push_rule(&mut self, rule: CleaningRule) {
        match self.rules.last() {
            Some(last) if last.name == COLLAPSE_WHITESPACE => {
                let at = self.rules.len() - 1;
                self.rules.insert(at, rule);
            }
            _ => self.rules.push(rule),
        }
    }

    /// The rules in application order.
    pub fn rules(&self) -> &[CleaningRule] {
        &self.rules
    }

    /// Rule names in application order.
    pub fn rule_names(&self) -> Vec<&str> {
        self.rules.iter().map(|r| r.name()).collect()
    }

    /// Applies the single rule called `name`, or `None` if there is no such rule.
    pub fn apply(&self, name: &str, text: &str) -> Option<String> {
        self.rules
            .iter()
            .find(|r| r.name == name)
            .map(|r| r.apply(text))
    }

    /// Runs every rule in order. Expects already lower-cased text.
    ///
    /// Leading and trailing whitespace is collapsed but not trimmed.
    pub fn clean(&self, text: &str) -> String {
        self.rules
            .iter()
            .fold(text.to_string(), |acc, rule| rule.apply(&acc))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rule_order() {
        let cleaner = Cleaner::standard();
        assert_eq!(
            cleaner.rule_names(),
            vec![
                "punctuation",
                "digits",
                "single_cyrillic",
                "single_latin",
                "latin_words",
                "mixed_latin_cyrillic",
                "mixed_cyrillic_latin_cyrillic",
                "mixed_cyrillic_latin",
                "mixed_latin_cyrillic_latin",
                "collapse_whitespace",
            ]
        );
    }

    #[test]
    fn test_punctuation_becomes_space() {
        let cleaner = Cleaner::standard();
        assert_eq!(
            cleaner.apply("punctuation", "кот,пёс!(дом)").unwrap(),
            "кот пёс  дом "
        );
        assert_eq!(cleaner.apply("punctuation", r#"a-b_c"d\e"#).unwrap(), "a b c d e");
    }

    #[test]
    fn test_digits_are_deleted() {
        let cleaner = Cleaner::standard();
        assert_eq!(cleaner.apply("digits", "в 2024году 15").unwrap(), "в году ");
    }

    #[test]
    fn test_single_cyrillic_letters() {
        let cleaner = Cleaner::standard();
        assert_eq!(cleaner.apply("single_cyrillic", "я иду в дом").unwrap(), "иду дом");
        assert_eq!(cleaner.apply("single_cyrillic", "кот и пёс").unwrap(), "кот пёс");
    }

    #[test]
    fn test_single_latin_letters() {
        let cleaner = Cleaner::standard();
        assert_eq!(cleaner.apply("single_latin", "x кот").unwrap(), "кот");
        assert_eq!(cleaner.apply("single_latin", "кот b").unwrap(), "кот");
    }

    #[test]
    fn test_latin_words() {
        let cleaner = Cleaner::standard();
        assert_eq!(
            cleaner.apply("latin_words", "кот cat сидел").unwrap(),
            "кот  сидел"
        );
    }

    #[test]
    fn test_each_mixed_script_pattern() {
        let cleaner = Cleaner::standard();
        let cases = [
            ("mixed_latin_cyrillic", "xyzкот дом"),
            ("mixed_cyrillic_latin_cyrillic", "коtт дом"),
            ("mixed_cyrillic_latin", "котxyz дом"),
            ("mixed_latin_cyrillic_latin", "abкотcd дом"),
        ];
        for (name, input) in cases {
            assert_eq!(cleaner.apply(name, input).unwrap(), " дом", "rule {}", name);
        }
    }

    #[test]
    fn test_longer_alternations_survive_standard_rules() {
        let cleaner = Cleaner::standard();
        assert_eq!(cleaner.clean("abвгdeжз дом"), "abвгdeжз дом");
    }

    #[test]
    fn test_strict_removes_any_mixed_word() {
        let cleaner = Cleaner::strict();
        assert_eq!(cleaner.clean("abвгdeжз дом"), " дом");
        assert_eq!(cleaner.rule_names().last(), Some(&"collapse_whitespace"));
        assert!(cleaner.rule_names().contains(&"mixed_any"));
    }

    #[test]
    fn test_scenario_sentence() {
        let cleaner = Cleaner::standard();
        assert_eq!(
            cleaner.clean("кот сидел на окне. 123 cat watched."),
            "кот сидел на окне "
        );
    }

    #[test]
    fn test_whitespace_collapse() {
        let cleaner = Cleaner::standard();
        assert_eq!(cleaner.clean("кот\t\tсидел\n\n  дома"), "кот сидел дома");
    }

    #[test]
    fn test_empty_input() {
        let cleaner = Cleaner::standard();
        assert_eq!(cleaner.clean(""), "");
        assert_eq!(cleaner.clean("  \n"), " ");
    }

    #[test]
    fn test_no_punctuation_or_digits_remain() {
        let cleaner = Cleaner::standard();
        let inputs = [
            "Цена: 100$ (скидка 20%)!",
            "e-mail: test@example.com, тел. +7-999-123-45-67",
            "«цитата» — 3.14... [ссылка]{1}",
        ];
        for input in inputs {
            let cleaned = cleaner.clean(&input.to_lowercase());
            assert!(!cleaned.chars().any(|c| c.is_ascii_punctuation()), "{:?}", cleaned);
            assert!(!cleaned.chars().any(|c| c.is_ascii_digit()), "{:?}", cleaned);
        }
    }

    #[test]
    fn test_cleaning_is_idempotent() {
        let cleaner = Cleaner::standard();
        let once = cleaner.clean("мама мыла раму, 3 раза! ok?");
        assert_eq!(cleaner.clean(&once), once);
    }

    #[test]
    fn test_push_rule_runs_before_whitespace_collapse() {
        let mut cleaner = Cleaner::standard();
        cleaner.push_rule(CleaningRule::new("fold_yo", "ё", "е").unwrap());
        let names = cleaner.rule_names();
        assert_eq!(names[names.len() - 2], "fold_yo");
        assert_eq!(cleaner.clean("ёлка"), "елка");
    }

    #[test]
    fn test_invalid_rule_pattern() {
        let result = CleaningRule::new("broken", "[", "");
        assert!(matches!(result, Err(DocmineError::Config(_))));
    }

    #[test]
    fn test_unknown_rule_name() {
        assert!(Cleaner::standard().apply("nope", "text").is_none());
    }
}
