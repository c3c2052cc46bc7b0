//! Search criteria
//!
//! This module provides criteria for matching files, plus AND/OR combinators
//! that are themselves criteria, so arbitrary boolean expressions can be
//! composed and handed to the search engine.

use crate::errors::{FindError, FindResult};
use crate::tree::File;

/// Trait for search criteria
///
/// Anything that can judge a file is usable as a criterion, including the
/// combinators below. Criteria are immutable once handed to a search.
pub trait Criterion: Send + Sync {
    /// Check if the file matches the criterion
    fn judge(&self, file: &File) -> bool;

    /// Get the criterion description
    fn description(&self) -> String;
}

/// Factory for creating a criteria tree from command line arguments
pub struct CriteriaFactory;

impl CriteriaFactory {
    /// Create a criteria tree from command line arguments
    ///
    /// Each keyword becomes a `NameContains`, an optional threshold becomes
    /// a `SizeGreaterThan`, and the parts are combined with OR when
    /// `any_match` is set, AND otherwise. With no parts at all, the empty
    /// combinator's policy applies: AND accepts every file, OR rejects
    /// every file.
    pub fn create_criteria(
        keywords: &[String],
        larger_than: Option<u64>,
        any_match: bool,
    ) -> FindResult<Box<dyn Criterion>> {
        let mut children: Vec<Box<dyn Criterion>> = Vec::new();

        for keyword in keywords {
            children.push(Box::new(NameContains::new(keyword)?));
        }

        if let Some(threshold) = larger_than {
            children.push(Box::new(SizeGreaterThan::new(threshold)));
        }

        Ok(if any_match {
            Box::new(CriteriaOr::with_children(children))
        } else {
            Box::new(CriteriaAnd::with_children(children))
        })
    }
}

/// Criterion matching files whose name contains a keyword
///
/// Matching is case-sensitive, exact substring.
#[derive(Debug)]
pub struct NameContains {
    keyword: String,
}

impl NameContains {
    /// Create a new NameContains with the given keyword
    pub fn new(keyword: impl Into<String>) -> FindResult<Self> {
        let keyword = keyword.into();
        if keyword.is_empty() {
            return Err(FindError::EmptyKeyword);
        }
        Ok(Self { keyword })
    }
}

impl Criterion for NameContains {
    fn judge(&self, file: &File) -> bool {
        file.name().contains(&self.keyword)
    }

    fn description(&self) -> String {
        format!("name contains '{}'", self.keyword)
    }
}

/// Criterion matching files strictly larger than a threshold
pub struct SizeGreaterThan {
    threshold: u64,
}

impl SizeGreaterThan {
    /// Create a new SizeGreaterThan with the given threshold in bytes
    pub fn new(threshold: u64) -> Self {
        Self { threshold }
    }
}

impl Criterion for SizeGreaterThan {
    fn judge(&self, file: &File) -> bool {
        file.size() > self.threshold
    }

    fn description(&self) -> String {
        format!("size > {}", self.threshold)
    }
}

/// Combinator matching files that satisfy every child criterion
///
/// Children are evaluated in insertion order and evaluation short-circuits
/// on the first non-matching child. An empty CriteriaAnd matches every file
/// (vacuous truth).
#[derive(Default)]
pub struct CriteriaAnd {
    children: Vec<Box<dyn Criterion>>,
}

impl CriteriaAnd {
    /// Create a new empty CriteriaAnd
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a CriteriaAnd with the given children
    pub fn with_children(children: Vec<Box<dyn Criterion>>) -> Self {
        Self { children }
    }

    /// Append a child criterion
    pub fn add(&mut self, criterion: impl Criterion + 'static) {
        self.children.push(Box::new(criterion));
    }
}

impl Criterion for CriteriaAnd {
    fn judge(&self, file: &File) -> bool {
        self.children.iter().all(|criterion| criterion.judge(file))
    }

    fn description(&self) -> String {
        let parts: Vec<String> = self.children.iter().map(|c| c.description()).collect();
        format!("all of [{}]", parts.join(", "))
    }
}

/// Combinator matching files that satisfy at least one child criterion
///
/// Children are evaluated in insertion order and evaluation short-circuits
/// on the first matching child. An empty CriteriaOr matches no file.
#[derive(Default)]
pub struct CriteriaOr {
    children: Vec<Box<dyn Criterion>>,
}

impl CriteriaOr {
    /// Create a new empty CriteriaOr
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a CriteriaOr with the given children
    pub fn with_children(children: Vec<Box<dyn Criterion>>) -> Self {
        Self { children }
    }

    /// Append a child criterion
    pub fn add(&mut self, criterion: impl Criterion + 'static) {
        self.children.push(Box::new(criterion));
    }
}

impl Criterion for CriteriaOr {
    fn judge(&self, file: &File) -> bool {
        self.children.iter().any(|criterion| criterion.judge(file))
    }

    fn description(&self) -> String {
        let parts: Vec<String> = self.children.iter().map(|c| c.description()).collect();
        format!("any of [{}]", parts.join(", "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn file(name: &str, size: u64) -> File {
        File::new(name, size).unwrap()
    }

    #[test]
    fn test_name_contains() {
        let criterion = NameContains::new("txt").unwrap();
        assert!(criterion.judge(&file("notes.txt", 1)));
        assert!(criterion.judge(&file("txtual", 1)));
        assert!(!criterion.judge(&file("notes.md", 1)));
    }

    #[test]
    fn test_name_contains_is_case_sensitive() {
        let criterion = NameContains::new("txt").unwrap();
        assert!(!criterion.judge(&file("NOTES.TXT", 1)));
    }

    #[test]
    fn test_empty_keyword_rejected() {
        assert_eq!(
            NameContains::new("").unwrap_err(),
            FindError::EmptyKeyword
        );
    }

    #[test]
    fn test_size_greater_than_is_strict() {
        let criterion = SizeGreaterThan::new(4);
        assert!(criterion.judge(&file("a", 5)));
        assert!(!criterion.judge(&file("a", 4)));
        assert!(!criterion.judge(&file("a", 3)));
    }

    #[test]
    fn test_and_requires_all_children() {
        let mut and = CriteriaAnd::new();
        and.add(NameContains::new("txt").unwrap());
        and.add(SizeGreaterThan::new(4));

        assert!(and.judge(&file("big.txt", 5)));
        assert!(!and.judge(&file("small.txt", 3)));
        assert!(!and.judge(&file("big.md", 5)));
    }

    #[test]
    fn test_or_requires_any_child() {
        let mut or = CriteriaOr::new();
        or.add(NameContains::new("txt").unwrap());
        or.add(SizeGreaterThan::new(4));

        assert!(or.judge(&file("big.txt", 5)));
        assert!(or.judge(&file("small.txt", 3)));
        assert!(or.judge(&file("big.md", 5)));
        assert!(!or.judge(&file("small.md", 3)));
    }

    #[test]
    fn test_empty_and_accepts_everything() {
        let and = CriteriaAnd::new();
        assert!(and.judge(&file("anything", 0)));
    }

    #[test]
    fn test_empty_or_rejects_everything() {
        let or = CriteriaOr::new();
        assert!(!or.judge(&file("anything", 0)));
    }

    #[test]
    fn test_combinator_equivalence_with_pointwise_logic() {
        let a = NameContains::new("log").unwrap();
        let b = SizeGreaterThan::new(10);
        let samples = [
            file("app.log", 20),
            file("app.log", 5),
            file("app.txt", 20),
            file("app.txt", 5),
        ];

        let and = CriteriaAnd::with_children(vec![
            Box::new(NameContains::new("log").unwrap()),
            Box::new(SizeGreaterThan::new(10)),
        ]);
        let or = CriteriaOr::with_children(vec![
            Box::new(NameContains::new("log").unwrap()),
            Box::new(SizeGreaterThan::new(10)),
        ]);

        for sample in &samples {
            assert_eq!(and.judge(sample), a.judge(sample) && b.judge(sample));
            assert_eq!(or.judge(sample), a.judge(sample) || b.judge(sample));
        }
    }

    #[test]
    fn test_nested_combinators() {
        // (contains "a" OR contains "b") AND size > 1
        let inner = CriteriaOr::with_children(vec![
            Box::new(NameContains::new("a").unwrap()),
            Box::new(NameContains::new("b").unwrap()),
        ]);
        let mut outer = CriteriaAnd::new();
        outer.add(inner);
        outer.add(SizeGreaterThan::new(1));

        assert!(outer.judge(&file("alpha", 2)));
        assert!(outer.judge(&file("beta", 2)));
        assert!(!outer.judge(&file("alpha", 1)));
        assert!(!outer.judge(&file("xyz", 2)));
    }

    #[test]
    fn test_descriptions() {
        let mut and = CriteriaAnd::new();
        and.add(NameContains::new("txt").unwrap());
        and.add(SizeGreaterThan::new(4));
        assert_eq!(and.description(), "all of [name contains 'txt', size > 4]");

        let or = CriteriaOr::new();
        assert_eq!(or.description(), "any of []");
    }

    #[test]
    fn test_factory_and_logic() {
        let criteria =
            CriteriaFactory::create_criteria(&["txt".to_string()], Some(4), false).unwrap();
        assert!(criteria.judge(&file("big.txt", 5)));
        assert!(!criteria.judge(&file("small.txt", 3)));
    }

    #[test]
    fn test_factory_or_logic() {
        let criteria =
            CriteriaFactory::create_criteria(&["txt".to_string()], Some(4), true).unwrap();
        assert!(criteria.judge(&file("small.txt", 3)));
        assert!(criteria.judge(&file("big.md", 5)));
        assert!(!criteria.judge(&file("small.md", 3)));
    }

    #[test]
    fn test_factory_with_no_parts() {
        let all = CriteriaFactory::create_criteria(&[], None, false).unwrap();
        assert!(all.judge(&file("anything", 0)));

        let none = CriteriaFactory::create_criteria(&[], None, true).unwrap();
        assert!(!none.judge(&file("anything", 0)));
    }
}
