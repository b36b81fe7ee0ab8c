//! Rendered content of the leaf files

use crate::portfolio::{Internship, Profile, Project};
use crate::render::{TextBlock, DOC_RULE_WIDTH};

/// `~/about.txt`
pub(super) fn about(profile: &Profile) -> Vec<String> {
    let title = format!("{} - PROFILE", profile.name.to_uppercase());
    TextBlock::new()
        .blank()
        .banner(&title, DOC_RULE_WIDTH)
        .blank()
        .line(format!("Role: {}", profile.role))
        .line(format!("Certification: {}", profile.certification))
        .line(format!("Focus: {}", profile.focus))
        .line(format!("Education: {}", profile.education))
        .blank()
        .lines(profile.summary.iter().copied())
        .blank()
        .into_lines()
}

/// `~/contact.txt`
pub(super) fn contact(profile: &Profile) -> Vec<String> {
    TextBlock::new()
        .blank()
        .line(format!("Email: {}", profile.email))
        .line(format!("Phone: {}", profile.phone))
        .line(format!("GitHub: {}", profile.github))
        .line(format!("LinkedIn: {}", profile.linkedin))
        .blank()
        .into_lines()
}

/// `~/projects/<slug>/README.md`: labeled markdown-ish summary
pub(super) fn project_readme(project: &Project) -> Vec<String> {
    TextBlock::new()
        .blank()
        .line(format!("# {}", project.name))
        .blank()
        .line(project.description)
        .blank()
        .line(format!("**Tech Stack:** {}", project.tech))
        .line(format!("**Status:** {}", project.status))
        .blank()
        .into_lines()
}

/// `~/projects/<slug>/details.txt`: boxed report
pub(super) fn project_details(project: &Project) -> Vec<String> {
    TextBlock::new()
        .blank()
        .banner(&project.name.to_uppercase(), DOC_RULE_WIDTH)
        .blank()
        .line("DESCRIPTION:")
        .line(project.description)
        .blank()
        .line("TECHNOLOGIES:")
        .line(project.tech)
        .blank()
        .line("STATUS:")
        .line(project.status)
        .blank()
        .into_lines()
}

/// `~/skills/<category>/<Skill>.txt`
pub(super) fn skill_note(skill: &str, description: &str) -> Vec<String> {
    TextBlock::new()
        .blank()
        .line(format!("{}:", skill))
        .line(description)
        .blank()
        .into_lines()
}

/// `~/experience/<slug>/details.txt`
pub(super) fn internship_details(internship: &Internship) -> Vec<String> {
    TextBlock::new()
        .blank()
        .banner(&internship.company.to_uppercase(), DOC_RULE_WIDTH)
        .blank()
        .line(format!("ROLE: {}", internship.role))
        .line(format!("DURATION: {}", internship.duration))
        .blank()
        .into_lines()
}

/// `~/experience/<slug>/description.txt`
pub(super) fn internship_description(internship: &Internship) -> Vec<String> {
    TextBlock::new()
        .blank()
        .line("WORK DESCRIPTION:")
        .line(internship.description)
        .blank()
        .into_lines()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::portfolio::PORTFOLIO;

    #[test]
    fn test_about_mentions_name() {
        let lines = about(&PORTFOLIO.profile);
        assert!(lines.iter().any(|l| l.contains("SWAYAM PRAKASH SAHOO - PROFILE")));
        assert!(lines.iter().any(|l| l.starts_with("Education: ")));
    }

    #[test]
    fn test_project_details_sections_in_order() {
        let project = PORTFOLIO.projects.iter().find(|p| p.slug == "tara").unwrap();
        let lines = project_details(project);
        let pos = |needle: &str| lines.iter().position(|l| l == needle).unwrap();
        assert!(pos("DESCRIPTION:") < pos("TECHNOLOGIES:"));
        assert!(pos("TECHNOLOGIES:") < pos("STATUS:"));
        assert_eq!(lines[pos("STATUS:") + 1], project.status);
    }
}
