//! Diagnostic agent: tries each reported symptom as a search start until one
//! reaches the goal diagnosis.
//!
//! The agent never formats output. It hands structured [`AgentEvent`]s to a
//! [`Reporter`] and returns a [`Diagnosis`] describing every attempt made.

use serde::Serialize;

use crate::graph::{KnowledgeBase, ANEMIA};
use crate::search::{SearchOutcome, Strategy};

/// Structured notifications emitted while diagnosing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum AgentEvent {
    /// A search is about to start from `symptom`.
    AttemptStarted { strategy: String, symptom: String },
    /// The search from `symptom` finished; `order` is its expansion order.
    Traversal {
        strategy: String,
        symptom: String,
        order: Vec<String>,
    },
    /// Final outcome of the whole diagnosis. Emitted exactly once.
    Verdict {
        strategy: String,
        goal: String,
        positive: bool,
        path: Vec<String>,
    },
}

/// Output-only sink for agent events. Implementations must not fail the
/// diagnosis; write errors are theirs to log.
pub trait Reporter {
    fn report(&mut self, event: &AgentEvent);
}

/// Recording sink.
impl Reporter for Vec<AgentEvent> {
    fn report(&mut self, event: &AgentEvent) {
        self.push(event.clone());
    }
}

/// One search run by the agent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Attempt {
    pub symptom: String,
    pub outcome: SearchOutcome,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "result", rename_all = "snake_case")]
pub enum Verdict {
    /// The goal was reached from `symptom` along `path`.
    Positive { symptom: String, path: Vec<String> },
    Negative,
}

/// Result of a full diagnosis.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Diagnosis {
    pub strategy: String,
    pub goal: String,
    pub attempts: Vec<Attempt>,
    pub verdict: Verdict,
}

impl Diagnosis {
    pub fn is_positive(&self) -> bool {
        matches!(self.verdict, Verdict::Positive { .. })
    }

    /// Diagnostic path for a positive verdict, empty otherwise.
    pub fn path(&self) -> &[String] {
        match &self.verdict {
            Verdict::Positive { path, .. } => path.as_slice(),
            Verdict::Negative => &[],
        }
    }
}

/// Run the diagnosis loop.
///
/// Symptoms that are not keys of `graph` are skipped without any event.
/// For every other symptom the search runs, its traversal order is reported,
/// and the first search that reaches `goal` ends the diagnosis with a positive
/// verdict. Only after all symptoms fail is a single negative verdict emitted.
pub fn diagnose<S, F>(
    symptoms: &[S],
    graph: &KnowledgeBase,
    goal: &str,
    search_fn: F,
    label: &str,
    reporter: &mut dyn Reporter,
) -> Diagnosis
where
    S: AsRef<str>,
    F: Fn(&KnowledgeBase, &str, &str) -> SearchOutcome,
{
    log::info!(
        "Diagnosing {} symptom(s) toward '{}' with {}",
        symptoms.len(),
        goal,
        label
    );
    let mut attempts = Vec::new();

    for symptom in symptoms {
        let symptom = symptom.as_ref();
        if !graph.contains(symptom) {
            log::debug!("Skipping symptom not in knowledge base: '{}'", symptom);
            continue;
        }

        reporter.report(&AgentEvent::AttemptStarted {
            strategy: label.to_string(),
            symptom: symptom.to_string(),
        });

        let outcome = search_fn(graph, symptom, goal);

        reporter.report(&AgentEvent::Traversal {
            strategy: label.to_string(),
            symptom: symptom.to_string(),
            order: outcome.order.clone(),
        });

        let found = outcome.found;
        let path = outcome.path.clone();
        attempts.push(Attempt {
            symptom: symptom.to_string(),
            outcome,
        });

        if found {
            log::info!(
                "Positive: '{}' reached '{}' in {} hop(s)",
                symptom,
                goal,
                path.len().saturating_sub(1)
            );
            reporter.report(&AgentEvent::Verdict {
                strategy: label.to_string(),
                goal: goal.to_string(),
                positive: true,
                path: path.clone(),
            });
            return Diagnosis {
                strategy: label.to_string(),
                goal: goal.to_string(),
                attempts,
                verdict: Verdict::Positive {
                    symptom: symptom.to_string(),
                    path,
                },
            };
        }
    }

    log::info!(
        "Negative: no symptom reached '{}' ({} attempt(s))",
        goal,
        attempts.len()
    );
    reporter.report(&AgentEvent::Verdict {
        strategy: label.to_string(),
        goal: goal.to_string(),
        positive: false,
        path: Vec::new(),
    });

    Diagnosis {
        strategy: label.to_string(),
        goal: goal.to_string(),
        attempts,
        verdict: Verdict::Negative,
    }
}

/// A knowledge base, goal and strategy bundled for repeated diagnoses.
#[derive(Debug, Clone)]
pub struct DiagnosticAgent<'a> {
    graph: &'a KnowledgeBase,
    goal: String,
    strategy: Strategy,
}

impl<'a> DiagnosticAgent<'a> {
    /// Agent targeting the default `Anemia` goal.
    pub fn new(graph: &'a KnowledgeBase, strategy: Strategy) -> Self {
        Self {
            graph,
            goal: ANEMIA.to_string(),
            strategy,
        }
    }

    pub fn with_goal(mut self, goal: impl Into<String>) -> Self {
        self.goal = goal.into();
        self
    }

    pub fn goal(&self) -> &str {
        &self.goal
    }

    pub fn strategy(&self) -> Strategy {
        self.strategy
    }

    pub fn diagnose<S: AsRef<str>>(&self, symptoms: &[S], reporter: &mut dyn Reporter) -> Diagnosis {
        diagnose(
            symptoms,
            self.graph,
            &self.goal,
            self.strategy.search_fn(),
            self.strategy.name(),
            reporter,
        )
    }
}
