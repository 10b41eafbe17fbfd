pub mod handlers;
pub mod prompts;

/// The fixed set of analysis templates. Each pairs a constant system prompt
/// describing the required JSON output with a user-prompt builder that
/// interpolates the raw resume and job-description text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Template {
    Analyze,
    Optimize,
    QuickScore,
    SkillsGap,
}

impl Template {
    pub fn system_prompt(self) -> &'static str {
        match self {
            Template::Analyze => prompts::ANALYZE_SYSTEM,
            Template::Optimize => prompts::OPTIMIZE_SYSTEM,
            Template::QuickScore => prompts::QUICK_SCORE_SYSTEM,
            Template::SkillsGap => prompts::SKILLS_GAP_SYSTEM,
        }
    }

    pub fn user_prompt(self, resume_text: &str, job_description_text: &str) -> String {
        match self {
            Template::Analyze => prompts::analyze_user_prompt(resume_text, job_description_text),
            Template::Optimize => prompts::optimize_user_prompt(resume_text, job_description_text),
            Template::QuickScore => {
                prompts::quick_score_user_prompt(resume_text, job_description_text)
            }
            Template::SkillsGap => {
                prompts::skills_gap_user_prompt(resume_text, job_description_text)
            }
        }
    }

    /// Lower temperature favors deterministic structured output over
    /// creative variation; the skills gap analysis runs coldest.
    pub fn temperature(self) -> f32 {
        match self {
            Template::SkillsGap => 0.2,
            _ => 0.3,
        }
    }

    /// Error body returned when no OpenAI client was configured at startup.
    /// The wording varies by endpoint and callers match on it, so it must
    /// stay byte-for-byte stable.
    pub fn not_configured_message(self) -> &'static str {
        match self {
            Template::Analyze => {
                "OpenAI client is not configured correctly. Check your API key."
            }
            _ => "OpenAI client is not configured correctly.",
        }
    }

    /// Error body returned when the provider call or JSON parse failed.
    pub fn failure_message(self, detail: &str) -> String {
        match self {
            Template::Analyze => format!("Failed to get analysis from OpenAI: {detail}"),
            Template::Optimize => format!("Failed to get optimization from OpenAI: {detail}"),
            Template::QuickScore => format!("Failed to get quick score: {detail}"),
            Template::SkillsGap => format!("Failed to get skills analysis from OpenAI: {detail}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [Template; 4] = [
        Template::Analyze,
        Template::Optimize,
        Template::QuickScore,
        Template::SkillsGap,
    ];

    #[test]
    fn temperatures_match_template() {
        assert_eq!(Template::SkillsGap.temperature(), 0.2);
        assert_eq!(Template::Analyze.temperature(), 0.3);
        assert_eq!(Template::Optimize.temperature(), 0.3);
        assert_eq!(Template::QuickScore.temperature(), 0.3);
    }

    #[test]
    fn system_prompts_declare_required_keys() {
        let required: [(Template, &[&str]); 4] = [
            (
                Template::Analyze,
                &[
                    "match_score",
                    "match_summary",
                    "what_you_have_going_for_you",
                    "areas_to_improve",
                    "ats_optimization",
                    "resume_improvements",
                    "next_steps",
                    "interview_prep",
                ],
            ),
            (
                Template::Optimize,
                &[
                    "ats_optimization",
                    "content_improvements",
                    "skills_and_projects",
                    "quantification_opportunities",
                    "tailoring_strategy",
                    "priority_actions",
                ],
            ),
            (
                Template::QuickScore,
                &[
                    "overall_score",
                    "score_breakdown",
                    "top_3_improvements",
                    "missing_keywords",
                    "your_competitive_advantage",
                    "biggest_concern",
                ],
            ),
            (
                Template::SkillsGap,
                &[
                    "technical_skills_assessment",
                    "soft_skills_analysis",
                    "experience_depth_analysis",
                    "industry_knowledge_assessment",
                    "learning_and_development_plan",
                ],
            ),
        ];

        for (template, keys) in required {
            let system = template.system_prompt();
            for key in keys {
                assert!(
                    system.contains(&format!("\"{key}\"")),
                    "{template:?} system prompt is missing key {key}"
                );
            }
        }
    }

    #[test]
    fn user_prompts_embed_inputs_verbatim() {
        let resume = "Built a Tokio service — p99 < 5ms.\nLed a team of 4.";
        let jd = "Senior Rust engineer: axum, \"observability\", unicode ✓";

        for template in ALL {
            let prompt = template.user_prompt(resume, jd);
            assert!(prompt.contains(resume), "{template:?} lost the resume text");
            assert!(prompt.contains(jd), "{template:?} lost the job text");
        }
    }

    #[test]
    fn delimited_segments_round_trip() {
        // The resume and job texts sit between `---` marker lines; slicing
        // them back out must reproduce the inputs exactly.
        let resume = "line one\nline two";
        let jd = "needs: rust";

        for template in [Template::Analyze, Template::Optimize, Template::SkillsGap] {
            let prompt = template.user_prompt(resume, jd);
            let segments: Vec<&str> = prompt
                .split("\n---")
                .enumerate()
                .filter_map(|(i, s)| (i % 2 == 1).then_some(s))
                .map(|s| s.strip_prefix('\n').unwrap_or(s))
                .collect();
            assert_eq!(segments, vec![resume, jd], "{template:?} mangled a segment");
        }
    }

    #[test]
    fn system_prompts_are_input_independent() {
        for template in ALL {
            let a = template.system_prompt();
            let b = template.system_prompt();
            assert!(std::ptr::eq(a, b));
            assert!(!a.contains("{resume_text}"));
            assert!(!a.contains("{job_description_text}"));
        }
    }
}
