//! Follow-up question prompts and response parsing.
//!
//! Before generating code, the system asks the model for a handful of
//! clarifying questions about the user's request. The response is expected
//! to be JSON; when it is not, a fixed default set is served instead so
//! the flow never stalls on a formatting quirk.

use serde::{Deserialize, Serialize};

use crate::normalize::strip_code_fences;

/// One clarifying question, with optional multiple-choice answers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FollowUpQuestion {
    pub id: u32,
    pub question: String,
    pub category: String,
    #[serde(default)]
    pub options: Vec<String>,
}

/// The full question set returned to the caller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FollowUpQuestions {
    pub questions: Vec<FollowUpQuestion>,
    pub total_questions: usize,
}

/// Assemble the prompt asking the model for follow-up questions.
pub fn build_follow_up_prompt(user_prompt: &str) -> String {
    format!("User Request: {}\n\n{}", user_prompt, FOLLOW_UP_QUESTIONS_PROMPT)
}

/// Parse a model response into a question set.
///
/// Tries a direct parse, then a fence-stripped parse. Returns `None` when
/// neither yields the expected shape; callers serve
/// [`default_follow_up_questions`] in that case.
pub fn try_parse_follow_up_questions(raw: &str) -> Option<FollowUpQuestions> {
    if let Ok(questions) = serde_json::from_str(raw) {
        return Some(questions);
    }
    serde_json::from_str(&strip_code_fences(raw)).ok()
}

/// The fixed question set served when parsing fails.
pub fn default_follow_up_questions() -> FollowUpQuestions {
    let questions = vec![
        FollowUpQuestion {
            id: 1,
            question: "What specific features would you like in your app?".to_string(),
            category: "features".to_string(),
            options: vec![
                "User authentication".to_string(),
                "Data storage".to_string(),
                "Real-time updates".to_string(),
                "Push notifications".to_string(),
            ],
        },
        FollowUpQuestion {
            id: 2,
            question: "What design style do you prefer?".to_string(),
            category: "ui_ux".to_string(),
            options: vec![
                "Modern and minimal".to_string(),
                "Colorful and playful".to_string(),
                "Professional and corporate".to_string(),
                "Dark theme".to_string(),
            ],
        },
        FollowUpQuestion {
            id: 3,
            question: "Which platforms are most important to you?".to_string(),
            category: "platform".to_string(),
            options: vec![
                "Web only".to_string(),
                "Mobile only".to_string(),
                "Both web and mobile".to_string(),
            ],
        },
    ];
    let total_questions = questions.len();
    FollowUpQuestions {
        questions,
        total_questions,
    }
}

pub const FOLLOW_UP_QUESTIONS_PROMPT: &str = r#"Based on the user's initial request, ask 3-5 intelligent follow-up questions to better understand their requirements for app development.

**Focus Areas:**
1. **App Features & Functionality:** what specific features does the user want, what is the main purpose of the app?
2. **UI/UX Preferences:** what design style does the user prefer, any specific color schemes or branding requirements?
3. **Target Platform Specifics:** which platforms are most important (iOS, Android, both)?
4. **Technical Requirements:** data storage requirements, integration with external services?

**Return the response in JSON format:**
{
  "questions": [
    {
      "id": 1,
      "question": "What specific features would you like in your app?",
      "category": "features",
      "options": ["List of features", "User input"]
    }
  ],
  "totalQuestions": 5
}

**Guidelines:**
- Make questions specific and actionable
- Provide multiple choice options when appropriate
- Keep questions concise and clear
- Focus on requirements that will impact code generation"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_plain_json() {
        let raw = r#"{"questions":[{"id":1,"question":"Q?","category":"features","options":["a"]}],"totalQuestions":1}"#;
        let questions = try_parse_follow_up_questions(raw).unwrap();
        assert_eq!(questions.total_questions, 1);
        assert_eq!(questions.questions[0].question, "Q?");
    }

    #[test]
    fn test_parse_fenced_json() {
        let raw = "```json\n{\"questions\":[{\"id\":2,\"question\":\"Style?\",\"category\":\"ui_ux\"}],\"totalQuestions\":1}\n```";
        let questions = try_parse_follow_up_questions(raw).unwrap();
        assert_eq!(questions.questions[0].id, 2);
        // Missing options defaults to empty.
        assert!(questions.questions[0].options.is_empty());
    }

    #[test]
    fn test_unparseable_response_yields_none() {
        assert!(try_parse_follow_up_questions("sorry, I cannot do that").is_none());
        assert!(try_parse_follow_up_questions("").is_none());
    }

    #[test]
    fn test_default_set_is_consistent() {
        let defaults = default_follow_up_questions();
        assert_eq!(defaults.questions.len(), defaults.total_questions);
        assert_eq!(defaults.questions.len(), 3);
        let categories: Vec<&str> = defaults
            .questions
            .iter()
            .map(|q| q.category.as_str())
            .collect();
        assert_eq!(categories, vec!["features", "ui_ux", "platform"]);
    }

    #[test]
    fn test_follow_up_prompt_leads_with_request() {
        let prompt = build_follow_up_prompt("a recipe app");
        assert!(prompt.starts_with("User Request: a recipe app\n\n"));
        assert!(prompt.contains("totalQuestions"));
    }
}
