//! Forward-chaining recommendation engine
//!
//! Rules are kept sorted by salience (highest first, declaration order within a tier). After
//! every firing the agenda is recomputed from scratch, so a rule only sees the facts that exist
//! at that moment. Each rule fires at most once per binding; the run ends when no rule has an
//! unfired activation.

pub mod credit;
pub mod memory;
pub mod rules;

pub use credit::{credit_limit, CreditLimit};
pub use memory::{Binding, WorkingMemory};
pub use rules::{default_rules, Rule};

use std::cmp::Reverse;

use crate::core::catalog::{load_facts, CatalogFacts, CatalogStore};
use crate::core::error::AdvisorError;
use crate::core::models::{Recommendations, StudentInput, StudentProfile};

/// An ordered set of rules evaluated to fixpoint against one student
pub struct RuleEngine {
    rules: Vec<Box<dyn Rule>>,
}

impl Default for RuleEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl RuleEngine {
    /// Engine with the standard advising rules
    #[must_use]
    pub fn new() -> Self {
        Self::with_rules(default_rules())
    }

    /// Engine with a custom rule set
    #[must_use]
    pub fn with_rules(mut rules: Vec<Box<dyn Rule>>) -> Self {
        // stable: keeps declaration order within a salience tier
        rules.sort_by_key(|rule| Reverse(rule.salience()));
        Self { rules }
    }

    /// Rule names in firing priority order
    #[must_use]
    pub fn rule_names(&self) -> Vec<&'static str> {
        self.rules.iter().map(|rule| rule.name()).collect()
    }

    /// Run the rules to fixpoint. All run state lives in a fresh working memory.
    #[must_use]
    pub fn run(&self, student: &StudentProfile, facts: &CatalogFacts) -> Recommendations {
        let mut memory = WorkingMemory::new(student, &facts.courses);
        for skipped in &facts.skipped {
            memory.trail(skipped.clone());
        }

        let mut firings = 0usize;
        while let Some((rule, binding)) = self.next_activation(&memory) {
            crate::debug!("Firing {} on {:?}", rule.name(), binding);
            memory.mark_fired(rule.name(), binding.clone());
            rule.fire(&mut memory, &binding);
            firings += 1;
        }

        let result = memory.into_recommendations();
        crate::info!(
            "Recommended {} courses ({} of {} credits) after {} rule firings",
            result.recommendations.len(),
            result.total_credit_hours,
            result.credit_limit,
            firings
        );
        result
    }

    /// Highest-priority activation that has not fired yet
    fn next_activation(&self, memory: &WorkingMemory) -> Option<(&dyn Rule, Binding)> {
        self.rules.iter().find_map(|rule| {
            rule.activations(memory)
                .into_iter()
                .find(|binding| !memory.has_fired(rule.name(), binding))
                .map(|binding| (rule.as_ref(), binding))
        })
    }
}

/// Everything one evaluation saw and produced
#[derive(Debug, Clone)]
pub struct Evaluation {
    /// The validated student fact
    pub student: StudentProfile,
    /// Catalog facts loaded for this run
    pub catalog: CatalogFacts,
    /// Engine output
    pub recommendations: Recommendations,
}

/// Recommend courses for a student.
///
/// The term is validated before the catalog is read; the catalog is then loaded fresh and the
/// standard rules run against it.
///
/// # Errors
/// `AdvisorError::InvalidInput` when the term is not Fall, Spring, or Summer, or
/// `AdvisorError::Catalog` when the store cannot be read
pub fn evaluate<S>(store: &S, input: &StudentInput) -> Result<Recommendations, AdvisorError>
where
    S: CatalogStore + ?Sized,
{
    evaluate_detailed(store, input).map(|evaluation| evaluation.recommendations)
}

/// Like [`evaluate`], but also hands back the validated student and the catalog facts the run saw
///
/// # Errors
/// Same as [`evaluate`]
pub fn evaluate_detailed<S>(store: &S, input: &StudentInput) -> Result<Evaluation, AdvisorError>
where
    S: CatalogStore + ?Sized,
{
    let student = StudentProfile::try_from(input)?;
    let rows = store.list_all_courses()?;
    let catalog = load_facts(&rows);
    let recommendations = RuleEngine::new().run(&student, &catalog);
    Ok(Evaluation {
        student,
        catalog,
        recommendations,
    })
}
