//! Instruction templates and prompt assembly.
//!
//! The fixed instruction strings are immutable configuration data, modeled
//! as a read-only registry keyed by flavor. Prompt assembly concatenates
//! the user's requirement description, their answers to follow-up
//! questions, and the flavor-specific template.

use std::collections::BTreeMap;

use crate::project::Flavor;

/// Parameters for one code-generation call, validated by the caller.
#[derive(Debug, Clone)]
pub struct GenerationRequest {
    /// Free-form requirement description (possibly already enhanced).
    pub description: String,
    /// Answers to follow-up questions, keyed by question id.
    pub answers: BTreeMap<String, String>,
    /// Target platform for the generated file set.
    pub flavor: Flavor,
}

/// Select the code-generation template for a flavor.
pub fn code_gen_template(flavor: Flavor) -> &'static str {
    match flavor {
        Flavor::Web => CODE_GEN_PROMPT,
        Flavor::Flutter => FLUTTER_CODE_GEN_PROMPT,
        Flavor::ReactNative => REACT_NATIVE_CODE_GEN_PROMPT,
        Flavor::Combined => MOBILE_CODE_GEN_PROMPT,
    }
}

/// Assemble the full prompt for a generation request.
///
/// The description comes first, then the user's answers (when any), then
/// the flavor template, separated by blank lines.
pub fn build_generation_prompt(request: &GenerationRequest) -> String {
    let mut parts = vec![request.description.clone()];

    if !request.answers.is_empty() {
        let answers = request
            .answers
            .iter()
            .map(|(id, answer)| format!("Q{}: {}", id, answer))
            .collect::<Vec<_>>()
            .join("\n");
        parts.push(format!("User Answers to Follow-up Questions:\n{}", answers));
    }

    parts.push(code_gen_template(request.flavor).to_string());

    parts.join("\n\n")
}

/// Assemble the user-side prompt for prompt enhancement. The enhancement
/// rules themselves go into the model preamble.
pub fn build_enhance_prompt(prompt: &str) -> String {
    format!("Original prompt: {}", prompt)
}

pub const CODE_GEN_PROMPT: &str = r#"You are an expert React developer. Create a COMPLETE, FUNCTIONAL, and PRODUCTION-READY React application based on the user's requirements.

**CRITICAL REQUIREMENTS:**
- Generate REAL, WORKING code, not templates
- Include ALL necessary components, pages, and functionality
- Use modern React patterns (hooks, functional components)
- Create responsive, modern UI with animations
- Include proper error handling and loading states

**TECHNICAL SPECIFICATIONS:**
- Framework: React with Vite
- Styling: Tailwind CSS with custom animations
- Icons: Lucide React
- Navigation: React Router DOM
- Animations: Framer Motion
- State Management: React hooks + Context if needed
- No backend/database - use mock data or localStorage

**Return ONLY valid JSON with this exact schema:**
{
  "projectTitle": "string",
  "explanation": "string describing the app features and structure",
  "files": {
    "/App.js": { "code": "complete App.js code" },
    "/components/Header.jsx": { "code": "complete component code" },
    "/pages/Home.jsx": { "code": "complete page code" },
    "/package.json": { "code": "complete package.json with all dependencies" }
  },
  "generatedFiles": ["array of all file paths"]
}

**IMPORTANT:**
- Generate COMPLETE, WORKING code for each file
- Include ALL necessary imports and dependencies
- Create REAL functionality, not placeholder content
- Make the app fully interactive and functional"#;

pub const FLUTTER_CODE_GEN_PROMPT: &str = r#"You are an expert Flutter developer. Create a COMPLETE, FUNCTIONAL, and PRODUCTION-READY Flutter application based on the user's requirements.

**CRITICAL REQUIREMENTS:**
- Generate REAL, WORKING Flutter code, not templates
- Create a FULL Flutter application with multiple screens and functionality
- Implement proper state management (Provider/Riverpod)
- Add navigation with GoRouter
- Implement proper error handling and loading states

**FLUTTER TECHNICAL SPECIFICATIONS:**
- Use Flutter 3.x with Dart
- Follow Material Design 3 guidelines
- Use GoRouter for navigation
- Use proper folder structure (lib/screens/, lib/widgets/, lib/models/, etc.)
- Use responsive design with MediaQuery and LayoutBuilder

**Return ONLY valid JSON with this exact schema:**
{
  "projectTitle": "string",
  "explanation": "string describing the Flutter app features and structure",
  "flutterFiles": {
    "lib/main.dart": { "code": "complete main.dart code with routing and theme setup" },
    "lib/screens/home_screen.dart": { "code": "complete home screen" },
    "pubspec.yaml": { "code": "complete pubspec.yaml with all necessary dependencies" }
  },
  "flutterGeneratedFiles": ["array of all Flutter file paths"]
}

**IMPORTANT:**
- Generate COMPLETE, WORKING Flutter code for each file
- Include ALL necessary imports and dependencies
- Create professional, modern Material Design UI that actually works"#;

pub const REACT_NATIVE_CODE_GEN_PROMPT: &str = r#"You are an expert React Native developer. Create a COMPLETE, FUNCTIONAL, and PRODUCTION-READY React Native application based on the user's requirements.

**CRITICAL REQUIREMENTS:**
- Generate REAL, WORKING React Native code, not templates
- Create a FULL React Native application with multiple screens and functionality
- Implement proper navigation with React Navigation
- Add state management (Redux Toolkit or Zustand)
- Include proper error boundaries and loading states

**REACT NATIVE TECHNICAL SPECIFICATIONS:**
- Use React Native 0.72+ with TypeScript
- Use React Navigation for navigation
- Use proper folder structure (src/screens/, src/components/, src/services/, etc.)
- Add animations with react-native-reanimated
- Platform-specific design (iOS/Android)

**Return ONLY valid JSON with this exact schema:**
{
  "projectTitle": "string",
  "explanation": "string describing the React Native app features and structure",
  "rnFiles": {
    "App.tsx": { "code": "complete App.tsx code with navigation setup and providers" },
    "src/screens/HomeScreen.tsx": { "code": "complete home screen" },
    "package.json": { "code": "complete package.json with all necessary dependencies" }
  },
  "rnGeneratedFiles": ["array of all React Native file paths"]
}

**IMPORTANT:**
- Generate COMPLETE, WORKING React Native code for each file
- Include ALL necessary imports and dependencies
- Create REAL functionality, not placeholder content"#;

pub const MOBILE_CODE_GEN_PROMPT: &str = r#"You are an expert mobile developer. Create COMPLETE, FUNCTIONAL, and PRODUCTION-READY Flutter AND React Native applications based on the user's requirements.

**CRITICAL REQUIREMENTS:**
- Generate REAL, WORKING code for BOTH platforms, not templates
- Each platform gets its own complete file set
- Follow each platform's conventions (GoRouter/Material 3 for Flutter, React Navigation for React Native)
- Include proper error handling and loading states on both

**Return ONLY valid JSON with this exact schema:**
{
  "projectTitle": "string",
  "explanation": "string describing the mobile app features and structure",
  "flutterFiles": {
    "lib/main.dart": { "code": "complete main.dart code" },
    "pubspec.yaml": { "code": "complete pubspec.yaml" }
  },
  "rnFiles": {
    "App.tsx": { "code": "complete App.tsx code" },
    "package.json": { "code": "complete package.json" }
  },
  "flutterGeneratedFiles": ["array of all Flutter file paths"],
  "rnGeneratedFiles": ["array of all React Native file paths"]
}

**IMPORTANT:**
- Generate COMPLETE, WORKING code for each file on both platforms
- Include ALL necessary imports and dependencies"#;

pub const ENHANCE_PROMPT_RULES: &str = r#"You are a prompt enhancement expert and website designer specializing in React + Vite. Your task is to improve the given user prompt by making it more specific, detailed, and actionable.

**Enhancement Guidelines:**
1. **Make it more specific and detailed** - Add concrete requirements and features
2. **Include clear UI/UX requirements** - Specify design elements, layout, and user experience
3. **Maintain the original intent** - Don't change what the user wants, just make it clearer
4. **Use clear and precise language** - Avoid vague terms, be specific
5. **Add modern web features** when appropriate: responsive design, modern navigation,
   hero sections, card-based layouts with hover animations, contact forms with
   validation, loading states, dark/light theme support
6. **Focus on frontend only** - No backend or database requirements
7. **Keep it concise** - Under 300 words

**Example Enhancements:**
- "portfolio site" -> "modern portfolio website with hero section, project showcase with image galleries, contact form with validation, smooth scroll navigation, and responsive design"
- "e-commerce site" -> "modern e-commerce website with product grid, shopping cart functionality, product detail pages, search and filter options, and mobile-responsive design"

Return only the enhanced prompt as plain text without any JSON formatting or additional explanations."#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prompt_without_answers() {
        let request = GenerationRequest {
            description: "Build a todo app".to_string(),
            answers: BTreeMap::new(),
            flavor: Flavor::Web,
        };

        let prompt = build_generation_prompt(&request);
        assert!(prompt.starts_with("Build a todo app\n\n"));
        assert!(!prompt.contains("User Answers to Follow-up Questions:"));
        assert!(prompt.ends_with(CODE_GEN_PROMPT));
    }

    #[test]
    fn test_prompt_with_answers() {
        let mut answers = BTreeMap::new();
        answers.insert("1".to_string(), "Dark theme".to_string());
        answers.insert("2".to_string(), "Both platforms".to_string());
        let request = GenerationRequest {
            description: "Build a shop".to_string(),
            answers,
            flavor: Flavor::Flutter,
        };

        let prompt = build_generation_prompt(&request);
        assert!(prompt.contains("User Answers to Follow-up Questions:\nQ1: Dark theme\nQ2: Both platforms"));
        assert!(prompt.contains(FLUTTER_CODE_GEN_PROMPT));
    }

    #[test]
    fn test_template_registry_selects_by_flavor() {
        assert!(code_gen_template(Flavor::Web).contains("\"files\""));
        assert!(code_gen_template(Flavor::Flutter).contains("\"flutterFiles\""));
        assert!(code_gen_template(Flavor::ReactNative).contains("\"rnFiles\""));
        let combined = code_gen_template(Flavor::Combined);
        assert!(combined.contains("\"flutterFiles\"") && combined.contains("\"rnFiles\""));
    }

    #[test]
    fn test_enhance_prompt_wraps_original() {
        assert_eq!(
            build_enhance_prompt("portfolio site"),
            "Original prompt: portfolio site"
        );
    }
}
