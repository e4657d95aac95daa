//! Methodology Catalog — built-in sales methodology definitions.
//!
//! The catalog is constructed once at startup and never mutated afterwards,
//! so it is safe to share across request handlers without locking. Both the
//! prompt composer and the HTTP list/detail endpoints read from this single
//! copy; there is deliberately no second embedded table anywhere else.

use std::collections::BTreeMap;

use serde::Serialize;

/// One labeled component of a methodology (e.g. SPIN's "Situation").
#[derive(Debug, Clone, Serialize)]
pub struct Component {
    pub label: &'static str,
    pub description: &'static str,
}

/// Structured breakdown of a methodology. Component-based frameworks carry a
/// label/description pair per entry; stage-based ones carry ordered stage
/// strings that already embed their label ("Pain: Identify ...").
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Breakdown {
    Components(Vec<Component>),
    Stages(Vec<&'static str>),
}

/// Example questions associated with one component label.
/// Served over the detail endpoint but never rendered into composed prompts.
#[derive(Debug, Clone, Serialize)]
pub struct ExampleQuestionSet {
    pub component: &'static str,
    pub questions: Vec<&'static str>,
}

#[derive(Debug, Clone, Serialize)]
pub struct MethodologyRecord {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub breakdown: Breakdown,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub key_principles: Vec<&'static str>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub example_questions: Vec<ExampleQuestionSet>,
}

/// Read-only registry of the built-in methodologies.
#[derive(Debug)]
pub struct MethodologyCatalog {
    records: Vec<MethodologyRecord>,
}

impl MethodologyCatalog {
    pub fn builtin() -> Self {
        Self {
            records: vec![spin(), bant(), challenger(), solution()],
        }
    }

    /// Case-insensitive lookup. Unknown ids return `None` so callers can
    /// treat "no methodology selected" and "unrecognized id" uniformly.
    pub fn lookup(&self, id: &str) -> Option<&MethodologyRecord> {
        self.records.iter().find(|r| r.id.eq_ignore_ascii_case(id))
    }

    /// Id-to-description map for populating a methodology picker without
    /// shipping the full structured records.
    pub fn summaries(&self) -> BTreeMap<&'static str, &'static str> {
        self.records
            .iter()
            .map(|r| (r.id, r.description))
            .collect()
    }

    pub fn ids(&self) -> Vec<&'static str> {
        self.records.iter().map(|r| r.id).collect()
    }
}

fn spin() -> MethodologyRecord {
    MethodologyRecord {
        id: "SPIN",
        name: "SPIN Selling",
        description: "A questioning methodology that helps salespeople uncover customer needs.",
        breakdown: Breakdown::Components(vec![
            Component {
                label: "Situation",
                description: "Questions that establish the buyer's current context",
            },
            Component {
                label: "Problem",
                description: "Questions that identify pain points and challenges",
            },
            Component {
                label: "Implication",
                description: "Questions that explore the consequences of the problems",
            },
            Component {
                label: "Need-Payoff",
                description: "Questions that get the buyer to articulate the benefits of solving their problem",
            },
        ]),
        key_principles: vec![],
        example_questions: vec![
            ExampleQuestionSet {
                component: "Situation",
                questions: vec![
                    "How do you currently handle...?",
                    "What systems do you have in place for...?",
                    "Who's responsible for...?",
                ],
            },
            ExampleQuestionSet {
                component: "Problem",
                questions: vec![
                    "What challenges are you facing with...?",
                    "Are you satisfied with your current approach to...?",
                    "What's preventing you from...?",
                ],
            },
            ExampleQuestionSet {
                component: "Implication",
                questions: vec![
                    "How does this problem affect your...?",
                    "What happens if you don't address this issue?",
                    "How does this impact your team/revenue/customers?",
                ],
            },
            ExampleQuestionSet {
                component: "Need-Payoff",
                questions: vec![
                    "How would it help if you could...?",
                    "What would be the value of solving...?",
                    "If we could reduce the time it takes to..., how would that benefit you?",
                ],
            },
        ],
    }
}

fn bant() -> MethodologyRecord {
    MethodologyRecord {
        id: "BANT",
        name: "BANT",
        description: "A qualification framework to assess opportunity quality.",
        breakdown: Breakdown::Components(vec![
            Component {
                label: "Budget",
                description: "Does the prospect have budget allocated for this purchase?",
            },
            Component {
                label: "Authority",
                description: "Is the prospect a decision maker or influencer?",
            },
            Component {
                label: "Need",
                description: "Does the prospect have a clear need for your solution?",
            },
            Component {
                label: "Timeline",
                description: "When does the prospect plan to implement a solution?",
            },
        ]),
        key_principles: vec![],
        example_questions: vec![
            ExampleQuestionSet {
                component: "Budget",
                questions: vec![
                    "Do you have a budget allocated for this initiative?",
                    "What kind of investment have you made in similar solutions?",
                    "How does your organization typically approach budgeting for these types of solutions?",
                ],
            },
            ExampleQuestionSet {
                component: "Authority",
                questions: vec![
                    "Besides yourself, who else would be involved in this decision?",
                    "How does the purchasing process typically work for solutions like this?",
                    "Who would need to sign off on this decision?",
                ],
            },
            ExampleQuestionSet {
                component: "Need",
                questions: vec![
                    "What specific challenges are you looking to address?",
                    "How is this issue impacting your business currently?",
                    "What solutions have you tried in the past?",
                ],
            },
            ExampleQuestionSet {
                component: "Timeline",
                questions: vec![
                    "When are you looking to implement a solution?",
                    "What's driving your timeline?",
                    "Are there any specific events or milestones you're working toward?",
                ],
            },
        ],
    }
}

fn challenger() -> MethodologyRecord {
    MethodologyRecord {
        id: "CHALLENGER",
        name: "The Challenger Sale",
        description: "A selling approach based on challenging customer thinking and teaching them something new.",
        breakdown: Breakdown::Components(vec![
            Component {
                label: "Teach",
                description: "Provide unique insights about how the customer can compete more effectively",
            },
            Component {
                label: "Tailor",
                description: "Adapt the message to the customer's specific context",
            },
            Component {
                label: "Take Control",
                description: "Lead the sale by being assertive about the solution direction",
            },
        ]),
        key_principles: vec![
            "Lead with insights that challenge customer assumptions",
            "Understand the customer's business well enough to offer valuable perspective",
            "Be comfortable with constructive tension in the conversation",
            "Focus on business outcomes rather than product features",
            "Address economic drivers, not just functional needs",
        ],
        example_questions: vec![],
    }
}

fn solution() -> MethodologyRecord {
    MethodologyRecord {
        id: "SOLUTION",
        name: "Solution Selling",
        description: "A sales methodology focused on solving customer problems rather than selling products.",
        breakdown: Breakdown::Stages(vec![
            "Pain: Identify and develop customer pain points",
            "Power: Find the people with authority and budget",
            "Vision: Create a shared vision of the solution",
            "Value: Establish clear ROI and business case",
            "Control: Maintain control of the sales process",
        ]),
        key_principles: vec![
            "Focus on solving problems, not pitching products",
            "Position yourself as a consultant rather than a salesperson",
            "Diagnose before prescribing solutions",
            "Quantify the impact of the problem and potential solution",
            "Collaborate with the customer to develop the solution",
        ],
        example_questions: vec![],
    }
}
