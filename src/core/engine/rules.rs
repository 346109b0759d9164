//! Advising rules matched against the working memory

use super::credit::credit_limit;
use super::memory::{Binding, WorkingMemory};
use crate::core::models::{Category, CourseRecord};

/// Salience of rules that declare none
pub const DEFAULT_SALIENCE: i32 = 0;

/// Zero-credit first-level university requirements handled by their own rule
pub const NON_CREDIT_CODES: [&str; 2] = ["CSE011", "LAN022"];

/// A production rule: a pattern over working memory and an action per matched binding
pub trait Rule {
    /// Unique rule name, used to track fired bindings
    fn name(&self) -> &'static str;

    /// Priority; higher fires first
    fn salience(&self) -> i32 {
        DEFAULT_SALIENCE
    }

    /// Every binding for which the rule's pattern currently holds
    fn activations(&self, memory: &WorkingMemory) -> Vec<Binding>;

    /// Act on one activation
    fn fire(&self, memory: &mut WorkingMemory, binding: &Binding);
}

/// The advising rules in declaration order
#[must_use]
pub fn default_rules() -> Vec<Box<dyn Rule>> {
    vec![
        Box::new(SetCreditLimit),
        Box::new(RecommendFailed),
        Box::new(RecommendNonCredit),
        Box::new(RecommendMandatory),
        Box::new(RecommendElectivePlaceholder),
    ]
}

fn is_non_credit_code(code: &str) -> bool {
    NON_CREDIT_CODES.contains(&code)
}

/// Course facts open to the student this term: not recommended, not passed, offered, and
/// at most one semester ahead. `extra` narrows the pattern further.
fn open_courses<F>(memory: &WorkingMemory, extra: F) -> Vec<Binding>
where
    F: Fn(&CourseRecord) -> bool,
{
    let student = memory.student;
    memory
        .courses
        .iter()
        .enumerate()
        .filter(|(_, course)| {
            extra(*course)
                && !memory.is_recommended(&course.code)
                && !student.has_passed(&course.code)
                && course.offered.includes(student.term)
                && student.can_take_semester(course.target_semester)
        })
        .map(|(idx, _)| Binding::Course(idx))
        .collect()
}

/// Sets the run's credit limit from CGPA, semester, and term. Fires once.
pub struct SetCreditLimit;

impl Rule for SetCreditLimit {
    fn name(&self) -> &'static str {
        "SetCreditLimit"
    }

    fn salience(&self) -> i32 {
        100
    }

    fn activations(&self, _memory: &WorkingMemory) -> Vec<Binding> {
        vec![Binding::Student]
    }

    fn fire(&self, memory: &mut WorkingMemory, _binding: &Binding) {
        let student = memory.student;
        let limit = credit_limit(student.cgpa, student.semester, student.term);
        memory.credit_limit = limit.hours;
        memory.trail(limit.rationale);
    }
}

/// Puts failed courses the student has not since passed at the front of the plan
pub struct RecommendFailed;

impl Rule for RecommendFailed {
    fn name(&self) -> &'static str {
        "RecommendFailed"
    }

    fn salience(&self) -> i32 {
        90
    }

    fn activations(&self, memory: &WorkingMemory) -> Vec<Binding> {
        let student = memory.student;
        let mut bindings = Vec::new();
        for code in student.failed.iter().filter(|code| !student.has_passed(code)) {
            let before = bindings.len();
            bindings.extend(
                memory
                    .courses
                    .iter()
                    .enumerate()
                    .filter(|(_, course)| &course.code == code)
                    .map(|(idx, _)| Binding::Course(idx)),
            );
            if bindings.len() == before {
                bindings.push(Binding::MissingCourse(code.clone()));
            }
        }
        bindings
    }

    fn fire(&self, memory: &mut WorkingMemory, binding: &Binding) {
        let course = match binding {
            Binding::MissingCourse(code) => {
                memory.reject(code, "Course not found in course database.");
                return;
            }
            _ => match memory.course(binding) {
                Some(course) => course,
                None => return,
            },
        };
        let code = course.code.as_str();
        let term = memory.student.term;

        if memory.is_recommended(code) {
            memory.reject(code, "Already recommended.");
        } else if !course.offered.includes(term) {
            memory.reject(code, &format!("Course not offered in {term}."));
        } else if memory.fits(course.credit_hours) || course.is_non_credit() {
            memory.recommend_first(
                course,
                "Retake due to previous failure",
                format!("Prioritized {code}: Retake due to previous failure."),
            );
        } else {
            memory.reject_over_limit(code);
        }
    }
}

/// Recommends the zero-credit first-level university requirements
pub struct RecommendNonCredit;

impl Rule for RecommendNonCredit {
    fn name(&self) -> &'static str {
        "RecommendNonCredit"
    }

    fn activations(&self, memory: &WorkingMemory) -> Vec<Binding> {
        if memory.student.semester > 2 {
            return Vec::new();
        }
        open_courses(memory, |course| {
            course.category == Category::UniversityRequirement
                && course.is_non_credit()
                && course.target_semester <= 2
                && is_non_credit_code(&course.code)
        })
    }

    fn fire(&self, memory: &mut WorkingMemory, binding: &Binding) {
        let Some(course) = memory.course(binding) else {
            return;
        };
        memory.recommend_last(
            course,
            "Mandatory non-credit course",
            format!(
                "Recommended {}: Mandatory non-credit course for first level.",
                course.code
            ),
        );
    }
}

/// Recommends core courses and university requirements whose requisites are met
pub struct RecommendMandatory;

impl Rule for RecommendMandatory {
    fn name(&self) -> &'static str {
        "RecommendMandatory"
    }

    fn activations(&self, memory: &WorkingMemory) -> Vec<Binding> {
        open_courses(memory, |course| {
            course.category.is_mandatory() && !is_non_credit_code(&course.code)
        })
    }

    fn fire(&self, memory: &mut WorkingMemory, binding: &Binding) {
        let Some(course) = memory.course(binding) else {
            return;
        };
        let student = memory.student;
        let code = course.code.as_str();

        if course.requires_senior_standing() && !student.is_senior() {
            memory.reject(
                code,
                "Requires senior standing (Semester >= 9 or 125+ credits).",
            );
            return;
        }

        let missing_prereqs = student.missing_prerequisites(course);
        if !missing_prereqs.is_empty() {
            memory.reject(
                code,
                &format!("Missing prerequisites: {}.", missing_prereqs.join(", ")),
            );
            return;
        }

        let missing_coreqs: Vec<&str> = course
            .corequisites
            .iter()
            .filter(|coreq| !student.has_passed(coreq) && !memory.is_recommended(coreq))
            .map(String::as_str)
            .collect();
        if !missing_coreqs.is_empty() {
            memory.reject(
                code,
                &format!("Missing co-requisites: {}.", missing_coreqs.join(", ")),
            );
            return;
        }

        if !course.prerequisites.is_empty()
            && student.cgpa < 2.00
            && course.category != Category::UniversityRequirement
        {
            memory.reject(
                code,
                &format!("CGPA {:.2} below 2.00 for advanced course.", student.cgpa),
            );
            return;
        }

        if memory.fits(course.credit_hours) || course.is_non_credit() {
            let category = course.category;
            memory.recommend_last(
                course,
                &format!("{category} course, prerequisites met"),
                format!(
                    "Recommended {code}: {category} course, prerequisites met, CGPA {:.2} sufficient.",
                    student.cgpa
                ),
            );
        } else {
            memory.reject_over_limit(code);
        }
    }
}

/// Reserves room for an elective slot and lists the concrete courses that could fill it
pub struct RecommendElectivePlaceholder;

impl RecommendElectivePlaceholder {
    /// Same-category courses whose prerequisites are passed and that fit in place of `slot`
    fn eligible_options(memory: &WorkingMemory, slot: &CourseRecord) -> Vec<String> {
        let student = memory.student;
        let room = f64::from(memory.credit_limit) - (memory.running_total - slot.credit_hours);
        let mut options: Vec<String> = Vec::new();
        for course in memory.courses.iter().filter(|course| {
            course.category == slot.category
                && student.missing_prerequisites(course).is_empty()
                && course.credit_hours <= room
        }) {
            if !options.contains(&course.code) {
                options.push(course.code.clone());
            }
        }
        options
    }
}

impl Rule for RecommendElectivePlaceholder {
    fn name(&self) -> &'static str {
        "RecommendElectivePlaceholder"
    }

    fn activations(&self, memory: &WorkingMemory) -> Vec<Binding> {
        open_courses(memory, |course| course.category.is_elective())
    }

    fn fire(&self, memory: &mut WorkingMemory, binding: &Binding) {
        let Some(course) = memory.course(binding) else {
            return;
        };
        let code = course.code.as_str();
        let category = course.category;

        if !memory.fits(course.credit_hours) {
            memory.reject_over_limit(code);
            return;
        }

        memory.recommend_last(
            course,
            &format!("{category} course required"),
            format!(
                "Recommended {code}: {category} course required in Semester {}.",
                course.target_semester
            ),
        );

        let options = Self::eligible_options(memory, course);
        if options.is_empty() {
            memory.explain(
                code,
                format!(
                    "No eligible courses for {code} ({category}) due to prerequisites or credit limit."
                ),
                "No eligible courses due to prerequisites or credit limit.",
            );
        } else {
            let listed = options.join(", ");
            memory.explain(
                code,
                format!("Eligible courses for {code} ({category}): {listed}."),
                format!("Eligible courses: {listed}."),
            );
        }
    }
}
