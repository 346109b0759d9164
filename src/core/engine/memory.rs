//! Working memory of a single engine run

use crate::core::models::{
    CourseRecord, ExplanationEntry, RecommendationEntry, Recommendations, StudentProfile,
};
use std::collections::{BTreeMap, HashSet, VecDeque};

/// The facts a rule activation is bound to
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Binding {
    /// The student fact alone
    Student,
    /// The student joined with the course fact at this index
    Course(usize),
    /// The student joined with a course code that has no catalog fact
    MissingCourse(String),
}

/// Facts and run state owned by one evaluation. Never shared between runs.
#[derive(Debug)]
pub struct WorkingMemory<'a> {
    /// The student being advised
    pub student: &'a StudentProfile,
    /// Course facts, in catalog order
    pub courses: &'a [CourseRecord],
    /// Credit limit; zero until the limit rule has fired
    pub credit_limit: u32,
    /// Credit hours accepted so far
    pub running_total: f64,
    recommendations: VecDeque<RecommendationEntry>,
    recommended: HashSet<String>,
    explanations: Vec<String>,
    explanation_facts: Vec<ExplanationEntry>,
    fired: HashSet<(&'static str, Binding)>,
}

impl<'a> WorkingMemory<'a> {
    /// Fresh memory holding the student and course facts
    #[must_use]
    pub fn new(student: &'a StudentProfile, courses: &'a [CourseRecord]) -> Self {
        Self {
            student,
            courses,
            credit_limit: 0,
            running_total: 0.0,
            recommendations: VecDeque::new(),
            recommended: HashSet::new(),
            explanations: Vec::new(),
            explanation_facts: Vec::new(),
            fired: HashSet::new(),
        }
    }

    /// Course fact bound by `binding`, if it binds one
    #[must_use]
    pub fn course(&self, binding: &Binding) -> Option<&'a CourseRecord> {
        match binding {
            Binding::Course(idx) => self.courses.get(*idx),
            Binding::Student | Binding::MissingCourse(_) => None,
        }
    }

    /// Whether a recommendation fact exists for `code`
    #[must_use]
    pub fn is_recommended(&self, code: &str) -> bool {
        self.recommended.contains(code)
    }

    /// Whether `credits` more hours stay within the credit limit
    #[must_use]
    pub fn fits(&self, credits: f64) -> bool {
        self.running_total + credits <= f64::from(self.credit_limit)
    }

    /// Whether `rule` already fired on `binding`
    #[must_use]
    pub fn has_fired(&self, rule: &'static str, binding: &Binding) -> bool {
        self.fired.contains(&(rule, binding.clone()))
    }

    /// Record that `rule` fired on `binding`
    pub fn mark_fired(&mut self, rule: &'static str, binding: Binding) {
        self.fired.insert((rule, binding));
    }

    /// Append a line to the explanation trail only
    pub fn trail(&mut self, message: impl Into<String>) {
        self.explanations.push(message.into());
    }

    /// Append a trail line and a structured explanation for `code`
    pub fn explain(&mut self, code: &str, trail: String, message: impl Into<String>) {
        self.explanations.push(trail);
        self.explanation_facts.push(ExplanationEntry {
            course_code: code.to_string(),
            message: message.into(),
        });
    }

    /// Explain why `code` is not recommended
    pub fn reject(&mut self, code: &str, message: &str) {
        self.explain(code, format!("Not recommended {code}: {message}"), message);
    }

    /// Explain a rejection for exceeding the credit limit
    pub fn reject_over_limit(&mut self, code: &str) {
        let message = format!(
            "Exceeds credit limit of {} (current: {}).",
            self.credit_limit, self.running_total
        );
        self.reject(code, &message);
    }

    /// Recommend `course` ahead of everything recommended so far
    pub fn recommend_first(&mut self, course: &CourseRecord, reason: &str, trail: String) {
        let entry =
            RecommendationEntry::new(&course.code, &course.name, course.credit_hours, reason);
        self.recommendations.push_front(entry);
        self.accept(course, reason, trail);
    }

    /// Recommend `course` after everything recommended so far
    pub fn recommend_last(&mut self, course: &CourseRecord, reason: &str, trail: String) {
        let entry =
            RecommendationEntry::new(&course.code, &course.name, course.credit_hours, reason);
        self.recommendations.push_back(entry);
        self.accept(course, reason, trail);
    }

    fn accept(&mut self, course: &CourseRecord, reason: &str, trail: String) {
        self.recommended.insert(course.code.clone());
        self.running_total += course.credit_hours;
        self.explain(&course.code, trail, format!("{reason}."));
    }

    /// Drain the run state into the caller-facing result
    #[must_use]
    pub fn into_recommendations(self) -> Recommendations {
        Recommendations {
            recommendations: self.recommendations.into_iter().collect(),
            elective_options: BTreeMap::new(),
            explanations: self.explanations,
            explanation_facts: self.explanation_facts,
            credit_limit: self.credit_limit,
            total_credit_hours: self.running_total,
        }
    }
}
