//! Fixed reports printed by the informational commands

use super::command::HELP_ENTRIES;
use crate::portfolio::{Internship, Profile, Project, SkillCategory};
use crate::render::{TextBlock, REPORT_RULE_WIDTH};

/// Lines a fresh session starts with
pub fn welcome() -> TextBlock {
    TextBlock::new()
        .line("Welcome to Ignite's Terminal v1.0.0")
        .line("Type \"help\" for available commands")
        .blank()
}

pub fn help() -> TextBlock {
    TextBlock::new()
        .blank()
        .line("Available commands:")
        .lines(
            HELP_ENTRIES
                .iter()
                .map(|(usage, desc)| format!("  {:<16}- {}", usage, desc)),
        )
        .blank()
}

pub fn whois(profile: &Profile) -> TextBlock {
    TextBlock::new()
        .line(format!("  Name: {}", profile.name))
        .line(format!("  Title: {}", profile.title))
        .line(format!("  Status: {}", profile.current_status))
        .line(format!("  Certification: {}", profile.certification))
        .line(format!("  Specialization: {}", profile.specialization))
        .blank()
}

/// `skills` with no argument: every category on one line
pub fn skills_overview(categories: &[SkillCategory]) -> TextBlock {
    TextBlock::new()
        .blank()
        .line("Technical Skills:")
        .lines(categories.iter().map(|c| {
            format!("  {}: {}", c.key.to_uppercase(), c.skills.join(", "))
        }))
        .blank()
}

/// `skills <category>`: one bullet per skill
pub fn skill_category(category: &SkillCategory) -> TextBlock {
    TextBlock::new()
        .blank()
        .line(format!("{} Skills:", category.key.to_uppercase()))
        .lines(category.skills.iter().map(|s| format!("  → {}", s)))
        .blank()
}

pub fn projects(projects: &[Project]) -> TextBlock {
    TextBlock::new()
        .blank()
        .banner("PROJECT PORTFOLIO", REPORT_RULE_WIDTH)
        .blank()
        .lines(
            projects
                .iter()
                .filter(|p| p.featured)
                .enumerate()
                .map(|(i, p)| format!("{}. {} - {}", i + 1, p.name, p.tagline)),
        )
        .blank()
        .line("Use \"cd projects\" to explore more")
        .blank()
}

pub fn experience(internships: &[Internship]) -> TextBlock {
    let mut block = TextBlock::new()
        .blank()
        .banner("WORK EXPERIENCE", REPORT_RULE_WIDTH)
        .blank();
    for internship in internships {
        block = block
            .line(format!("→ {}", internship.company))
            .line(format!("  Role: {}", internship.role))
            .line(format!("  Duration: {}", internship.duration))
            .blank();
    }
    block
}

pub fn contact(profile: &Profile) -> TextBlock {
    TextBlock::new()
        .blank()
        .banner("CONTACT INFORMATION", REPORT_RULE_WIDTH)
        .blank()
        .line(format!("  📧 Email: {}", profile.email))
        .line(format!("  📱 Phone: {}", profile.phone))
        .line(format!("  💻 GitHub: {}", profile.github))
        .line(format!("  💼 LinkedIn: {}", profile.linkedin))
        .blank()
}

/// Printed by `exit` before the view switches back
pub fn farewell() -> TextBlock {
    TextBlock::new()
        .line("Exiting hacker mode...")
        .line("Returning to professional view...")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::portfolio::PORTFOLIO;

    #[test]
    fn test_help_alignment() {
        let lines = help().into_lines();
        assert_eq!(lines[1], "Available commands:");
        assert_eq!(lines[2], "  ls [dir]        - list directory contents");
        assert_eq!(lines[5], "  whois           - display info about me");
        assert_eq!(lines.len(), HELP_ENTRIES.len() + 3);
    }

    #[test]
    fn test_projects_lists_featured_only() {
        let lines = projects(PORTFOLIO.projects).into_lines();
        assert!(lines.contains(&"1. SWASTHYA-SETU - Multilingual AI Health Assistant".to_string()));
        assert!(lines.contains(&"6. TARA-Vision - AI Surveillance System".to_string()));
        assert!(!lines.iter().any(|l| l.contains("PRAXIFI")));
    }

    #[test]
    fn test_experience_block_per_internship() {
        let lines = experience(PORTFOLIO.internships).into_lines();
        let arrows = lines.iter().filter(|l| l.starts_with("→ ")).count();
        assert_eq!(arrows, PORTFOLIO.internships.len());
    }
}
