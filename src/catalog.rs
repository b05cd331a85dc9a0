//! Built-in curriculum data: the two lean lessons shipped with the tool.

use crate::schema::{Differentiation, LessonBlock, LessonSet, LessonSpec, SourceRef};

/// Document backing the 5S lesson.
pub const LESSON_PLAN_1: &str = "lesson-plan-1.md";
/// Document backing the 8-wastes lesson.
pub const LESSON_PLAN_2: &str = "lesson-plan-2.md";

/// The shipped lesson set, audited by default when no `--lessons` file is
/// given.
pub fn builtin_lesson_set() -> LessonSet {
    LessonSet {
        lessons: vec![lean_5s(), lean_8_wastes_walk()],
    }
}

fn lean_5s() -> LessonSpec {
    LessonSpec {
        slug: "lean-5s".to_string(),
        title: "Lean 5S Classroom to Placement".to_string(),
        duration_mins: 55,
        audience: "T Level Engineering Year 1 and Year 2".to_string(),
        aims: owned(&[
            "Introduce Lean thinking and 5S as practical workplace habits.",
            "Move learners from awareness to applied improvement planning for specialist contexts.",
        ]),
        outcomes: owned(&[
            "Recall each of the 5S pillars and apply at least one action per pillar.",
            "Produce a practical 5S improvement proposal with standards and measurable impact.",
            "Link 5S evidence directly to placement and portfolio language.",
        ]),
        blocks: vec![
            LessonBlock {
                id: "lean5s-year1-hook".to_string(),
                title: "Starter and Core Concepts".to_string(),
                start_min: 0,
                end_min: 10,
                teacher_actions: owned(&[
                    "Run the messy-desk hook and define Lean, value, and waste in plain language.",
                    "Introduce all five S terms with visual classroom and workshop examples.",
                ]),
                learner_actions: owned(&[
                    "Contribute examples of poor organisation and potential improvements.",
                    "Capture vocabulary definitions and one example for each S.",
                ]),
                outputs: owned(&["Starter notes on Lean vocabulary and 5S examples."]),
                differentiation: Some(Differentiation {
                    year1: owned(&[
                        "Prioritize confidence with vocabulary and observable safe behaviours.",
                    ]),
                    year2: owned(&[
                        "Link vocabulary to industry-facing measures such as search time and defects.",
                    ]),
                    mixed: Vec::new(),
                }),
                source_refs: vec![
                    source_ref(LESSON_PLAN_1, 1, 31),
                    source_ref(LESSON_PLAN_1, 39, 59),
                ],
            },
            LessonBlock {
                id: "lean5s-activity".to_string(),
                title: "Applied 5S Audit and Design".to_string(),
                start_min: 10,
                end_min: 40,
                teacher_actions: owned(&[
                    "Issue realistic workshop scenarios with embedded waste.",
                    "Coach teams to define each S action, owner, standards, and measurement approach.",
                ]),
                learner_actions: owned(&[
                    "Conduct rapid audit to identify risks, waste, and corrective priorities.",
                    "Draft before/after layout or visual standards for high-impact changes.",
                ]),
                outputs: owned(&["Group 5S improvement plan and visual standard sketch."]),
                differentiation: Some(Differentiation {
                    year1: owned(&[
                        "Focus on identifying obvious waste and writing clear, simple actions.",
                    ]),
                    year2: owned(&[
                        "Include responsibilities, process standards, and measurable impact indicators.",
                    ]),
                    mixed: owned(&[
                        "Use paired mentoring where Year 2 learners support Year 1 audit language.",
                    ]),
                }),
                source_refs: vec![source_ref(LESSON_PLAN_1, 60, 78)],
            },
            LessonBlock {
                id: "lean5s-plenary-placement".to_string(),
                title: "Plenary, Reflection, and Placement Transfer".to_string(),
                start_min: 40,
                end_min: 55,
                teacher_actions: owned(&[
                    "Facilitate 60-90 second group pitches on highest-impact improvements.",
                    "Guide reflection writing to align with placement and portfolio evidence.",
                ]),
                learner_actions: owned(&[
                    "Share one low-cost high-impact proposal suitable for workplace trial.",
                    "Write reflection paragraph connecting 5S to safety, efficiency, and quality.",
                ]),
                outputs: owned(&["Exit reflection ready for portfolio reuse."]),
                differentiation: Some(Differentiation {
                    year1: owned(&["State one practical place to apply each S in daily routines."]),
                    year2: owned(&[
                        "Tie proposal to occupational specialism and placement behavior expectations.",
                    ]),
                    mixed: Vec::new(),
                }),
                source_refs: vec![
                    source_ref(LESSON_PLAN_1, 79, 93),
                    source_ref(LESSON_PLAN_1, 94, 101),
                ],
            },
        ],
        placement_links: owned(&[
            "Run one rapid 5S audit in your placement area.",
            "Submit one reflection paragraph using portfolio-ready language.",
        ]),
        resources: owned(&[
            "5S vocabulary board",
            "Scenario worksheet",
            "Before/after layout template",
        ]),
        source_document: Some(LESSON_PLAN_1.to_string()),
        full_source_refs: Vec::new(),
    }
}

fn lean_8_wastes_walk() -> LessonSpec {
    LessonSpec {
        slug: "lean-8-wastes-walk".to_string(),
        title: "8 Wastes Walk for SME Placement".to_string(),
        duration_mins: 55,
        audience: "T Level Engineering mixed Year 1 and Year 2 cohort".to_string(),
        aims: owned(&[
            "Build confident use of TIMWOODS to identify productivity loss in real processes.",
            "Prepare every learner to complete and report a placement waste walk.",
        ]),
        outcomes: owned(&[
            "Name and explain all eight wastes with process-specific examples.",
            "Use a structured observation sheet to capture facts, causes, and improvement ideas.",
            "Prioritise three actionable improvements with clear SME productivity benefits.",
        ]),
        blocks: vec![
            LessonBlock {
                id: "wastes-starter-input".to_string(),
                title: "Starter and TIMWOODS Input".to_string(),
                start_min: 0,
                end_min: 15,
                teacher_actions: owned(&[
                    "Use a process image prompt to surface likely wasted time and effort.",
                    "Teach TIMWOODS with one factory-specific example for each waste.",
                ]),
                learner_actions: owned(&[
                    "Identify obvious and process-level waste from starter scenarios.",
                    "Complete pair matching task of waste definitions and visual prompts.",
                ]),
                outputs: owned(&["TIMWOODS recall sheet with matched definitions."]),
                differentiation: Some(Differentiation {
                    year1: owned(&["Use everyday examples and reinforce baseline waste vocabulary."]),
                    year2: owned(&[
                        "Connect each waste to OEE, throughput, delivery, and cost impacts.",
                    ]),
                    mixed: Vec::new(),
                }),
                source_refs: vec![source_ref(LESSON_PLAN_2, 1, 84)],
            },
            LessonBlock {
                id: "wastes-walk-modelling".to_string(),
                title: "Modelled Waste Walk and Observation Method".to_string(),
                start_min: 15,
                end_min: 25,
                teacher_actions: owned(&[
                    "Model gemba walk rules: respectful observation, process focus, fact capture.",
                    "Demonstrate observation sheet structure and an example improvement statement.",
                ]),
                learner_actions: owned(&[
                    "Annotate observation sheet columns and expected evidence quality.",
                    "Plan how they would apply the same method on placement.",
                ]),
                outputs: owned(&[
                    "Prepared waste-walk observation template for activity and placement.",
                ]),
                differentiation: None,
                source_refs: vec![source_ref(LESSON_PLAN_2, 85, 119)],
            },
            LessonBlock {
                id: "wastes-simulated-walk".to_string(),
                title: "Simulated 8 Wastes Walk Activity".to_string(),
                start_min: 25,
                end_min: 40,
                teacher_actions: owned(&[
                    "Distribute scenario packs with deliberate embedded wastes for group analysis.",
                    "Coach quantification prompts for impact where appropriate.",
                ]),
                learner_actions: owned(&[
                    "Identify at least one instance of each waste and record practical improvements.",
                    "State expected benefits in throughput, quality, or time-saving terms.",
                ]),
                outputs: owned(&["Completed group observation sheet with eight waste findings."]),
                differentiation: Some(Differentiation {
                    year1: owned(&["Prioritize spotting visible wastes and simple practical ideas."]),
                    year2: owned(&["Estimate minutes saved per shift and likely output impact."]),
                    mixed: Vec::new(),
                }),
                source_refs: vec![source_ref(LESSON_PLAN_2, 120, 151)],
            },
            LessonBlock {
                id: "wastes-plenary-placement".to_string(),
                title: "Plenary, Exit Task, and Placement Commitments".to_string(),
                start_min: 40,
                end_min: 55,
                teacher_actions: owned(&[
                    "Lead class synthesis on high-impact wastes and SME productivity implications.",
                    "Set individual placement action slips and supervisor engagement expectations.",
                ]),
                learner_actions: owned(&[
                    "Present one high-impact waste and proposed fix to the class.",
                    "Complete personal placement action with three expected wastes and one improvement.",
                ]),
                outputs: owned(&[
                    "Placement action slip and three reusable report summary statements.",
                ]),
                differentiation: Some(Differentiation {
                    year1: Vec::new(),
                    year2: owned(&[
                        "Add explicit supervisor-permission and staff-involvement plan to exit response.",
                    ]),
                    mixed: Vec::new(),
                }),
                source_refs: vec![source_ref(LESSON_PLAN_2, 152, 228)],
            },
        ],
        placement_links: owned(&[
            "Complete at least one 20-30 minute waste walk during placement.",
            "Propose three prioritized improvements and present findings to a supervisor.",
        ]),
        resources: owned(&[
            "TIMWOODS visual",
            "Waste walk observation sheet",
            "SME scenario pack",
        ]),
        source_document: Some(LESSON_PLAN_2.to_string()),
        full_source_refs: Vec::new(),
    }
}

fn source_ref(file: &str, line_start: u64, line_end: u64) -> SourceRef {
    SourceRef {
        file: file.to_string(),
        line_start,
        line_end,
    }
}

fn owned(items: &[&str]) -> Vec<String> {
    items.iter().map(ToString::to_string).collect()
}
