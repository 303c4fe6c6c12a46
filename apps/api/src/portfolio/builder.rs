//! Prompt assembly: turns a validated request into a fully-specified
//! completion call.
//!
//! The builder is pure string interpolation: it must not alter, truncate, or
//! re-encode the résumé text, and two calls with the same input yield
//! byte-identical output.

use std::str::FromStr;

use crate::llm_client::MODEL;
use crate::portfolio::prompts::{
    MOBILE_CARD_PROMPT_TEMPLATE, MOBILE_CARD_SYSTEM, SAAS_THEME_PROMPT_TEMPLATE, SAAS_THEME_SYSTEM,
};
use crate::portfolio::validate::GenerationRequest;

/// Which prompt template the deployment serves. Selected by configuration,
/// never by request data.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TemplateProfile {
    /// Minimalist mobile-only card layout, fixed six-section skeleton.
    MobileCard,
    /// SaaS-styled theme with caller-configurable colors, eight sections.
    SaasTheme,
}

impl FromStr for TemplateProfile {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "mobile-card" => Ok(TemplateProfile::MobileCard),
            "saas-theme" => Ok(TemplateProfile::SaasTheme),
            other => Err(anyhow::anyhow!("Unknown template profile '{other}'")),
        }
    }
}

/// A fully-assembled completion call: everything the client needs to issue
/// the upstream request, and nothing it has to decide for itself.
#[derive(Debug, Clone, PartialEq)]
pub struct PromptSpec {
    pub system_instruction: String,
    pub user_instruction: String,
    pub model: &'static str,
    pub temperature: f32,
    pub max_tokens: Option<u32>,
}

/// Renders the profile's templates against the request.
pub fn build_prompt(request: &GenerationRequest, profile: TemplateProfile) -> PromptSpec {
    match profile {
        TemplateProfile::MobileCard => PromptSpec {
            system_instruction: MOBILE_CARD_SYSTEM.to_string(),
            user_instruction: MOBILE_CARD_PROMPT_TEMPLATE
                .replace("{resume_text}", &request.resume_text),
            model: MODEL,
            temperature: 0.35,
            max_tokens: None,
        },
        TemplateProfile::SaasTheme => PromptSpec {
            system_instruction: SAAS_THEME_SYSTEM.to_string(),
            user_instruction: SAAS_THEME_PROMPT_TEMPLATE
                .replace("{primary_color}", &request.primary_color)
                .replace("{accent_color}", &request.accent_color)
                .replace("{dark_color}", &request.dark_color)
                .replace("{resume_text}", &request.resume_text),
            model: MODEL,
            temperature: 0.2,
            max_tokens: Some(5000),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::portfolio::validate::{DEFAULT_ACCENT, DEFAULT_DARK, DEFAULT_PRIMARY};

    fn request_with_primary(primary: &str) -> GenerationRequest {
        GenerationRequest {
            resume_text: "Jane Doe, staff engineer. ".repeat(8),
            primary_color: primary.to_string(),
            accent_color: DEFAULT_ACCENT.to_string(),
            dark_color: DEFAULT_DARK.to_string(),
        }
    }

    #[test]
    fn test_mobile_card_embeds_resume_verbatim() {
        let request = request_with_primary(DEFAULT_PRIMARY);
        let spec = build_prompt(&request, TemplateProfile::MobileCard);
        assert!(spec.user_instruction.contains(&request.resume_text));
        assert!(!spec.user_instruction.contains("{resume_text}"));
    }

    #[test]
    fn test_mobile_card_parameters() {
        let spec = build_prompt(
            &request_with_primary(DEFAULT_PRIMARY),
            TemplateProfile::MobileCard,
        );
        assert_eq!(spec.model, "llama-3.1-8b-instant");
        assert_eq!(spec.temperature, 0.35);
        assert_eq!(spec.max_tokens, None);
    }

    #[test]
    fn test_mobile_card_skeleton_sections() {
        let spec = build_prompt(
            &request_with_primary(DEFAULT_PRIMARY),
            TemplateProfile::MobileCard,
        );
        for section in [
            "card about",
            "card skills",
            "card experience",
            "card projects",
            "card education",
            "card contact",
        ] {
            assert!(
                spec.user_instruction
                    .contains(&format!(r#"<section class="{section}"></section>"#)),
                "skeleton missing section: {section}"
            );
        }
        assert!(spec.system_instruction.contains("Max width: 420px"));
        assert!(spec.system_instruction.contains("NO absolute positioning"));
    }

    #[test]
    fn test_saas_theme_parameters() {
        let spec = build_prompt(
            &request_with_primary(DEFAULT_PRIMARY),
            TemplateProfile::SaasTheme,
        );
        assert_eq!(spec.temperature, 0.2);
        assert_eq!(spec.max_tokens, Some(5000));
    }

    #[test]
    fn test_saas_theme_interpolates_colors_verbatim() {
        let spec = build_prompt(&request_with_primary("#ABCDEF"), TemplateProfile::SaasTheme);
        // Tinted variant: hex color + fixed opacity suffix, no recomputation.
        assert!(spec.user_instruction.contains("#ABCDEF15"));
        // Skill-tag rule keeps the color verbatim.
        assert!(spec.user_instruction.contains("background:#ABCDEF"));
        assert!(spec.user_instruction.contains(DEFAULT_ACCENT));
        assert!(spec.user_instruction.contains(DEFAULT_DARK));
        assert!(!spec.user_instruction.contains("{primary_color}"));
        assert!(!spec.user_instruction.contains("{accent_color}"));
        assert!(!spec.user_instruction.contains("{dark_color}"));
    }

    #[test]
    fn test_saas_theme_section_outline() {
        let spec = build_prompt(
            &request_with_primary(DEFAULT_PRIMARY),
            TemplateProfile::SaasTheme,
        );
        for section in [
            "hero", "about", "experience", "skills", "education", "projects", "contact", "footer",
        ] {
            assert!(
                spec.user_instruction.contains(section),
                "outline missing section: {section}"
            );
        }
    }

    #[test]
    fn test_build_prompt_is_deterministic() {
        let request = request_with_primary("#ABCDEF");
        for profile in [TemplateProfile::MobileCard, TemplateProfile::SaasTheme] {
            let first = build_prompt(&request, profile);
            let second = build_prompt(&request, profile);
            assert_eq!(first, second);
        }
    }

    #[test]
    fn test_profile_from_str() {
        assert_eq!(
            "mobile-card".parse::<TemplateProfile>().unwrap(),
            TemplateProfile::MobileCard
        );
        assert_eq!(
            "saas-theme".parse::<TemplateProfile>().unwrap(),
            TemplateProfile::SaasTheme
        );
        assert!("dark-mode".parse::<TemplateProfile>().is_err());
    }
}
