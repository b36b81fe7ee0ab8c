//! Compiled-in portfolio content
//!
//! Everything the terminal can show comes from the [`PORTFOLIO`] table: the
//! profile, the project list, skills grouped by category, internships and the
//! per-skill description table. Nothing here is fetched or mutated at runtime;
//! the virtual filesystem and the fixed reports are both projections of it.

/// A portfolio project, addressed in the filesystem by its `slug`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Project {
    pub slug: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub tech: &'static str,
    pub status: &'static str,
    /// One-line pitch used by the `projects` report
    pub tagline: &'static str,
    /// Whether the project appears in the `projects` report
    pub featured: bool,
}

/// A named group of skills (`~/skills/<key>`)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SkillCategory {
    pub key: &'static str,
    pub skills: &'static [&'static str],
}

/// One work-experience entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Internship {
    pub company: &'static str,
    pub role: &'static str,
    pub duration: &'static str,
    pub description: &'static str,
}

impl Internship {
    /// Directory name under `~/experience`: `{index}-{company}` with a 1-based
    /// index and every character outside `a-z` of the lowercased company
    /// name replaced by `-`.
    pub fn slug(&self, index: usize) -> String {
        let company: String = self
            .company
            .to_lowercase()
            .chars()
            .map(|c| if c.is_ascii_lowercase() { c } else { '-' })
            .collect();
        format!("{}-{}", index + 1, company)
    }
}

/// Personal details shown by `whois`, `contact` and `about.txt`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Profile {
    pub name: &'static str,
    pub title: &'static str,
    pub role: &'static str,
    pub current_status: &'static str,
    pub certification: &'static str,
    pub focus: &'static str,
    pub specialization: &'static str,
    pub education: &'static str,
    pub summary: &'static [&'static str],
    pub email: &'static str,
    pub phone: &'static str,
    pub github: &'static str,
    pub linkedin: &'static str,
}

/// The full content table
#[derive(Debug, Clone, Copy)]
pub struct Portfolio {
    pub profile: Profile,
    pub projects: &'static [Project],
    pub skills: &'static [SkillCategory],
    pub internships: &'static [Internship],
    pub skill_descriptions: &'static [(&'static str, &'static str)],
}

/// Shown by `cat <Skill>.txt` when the skill has no entry in the table
pub const FALLBACK_SKILL_DESCRIPTION: &str = "Advanced proficiency in this technology";

impl Portfolio {
    pub fn skill_category(&self, key: &str) -> Option<&SkillCategory> {
        self.skills.iter().find(|c| c.key == key)
    }

    /// Description for a skill, or [`FALLBACK_SKILL_DESCRIPTION`]
    pub fn skill_description(&self, skill: &str) -> &'static str {
        self.skill_descriptions
            .iter()
            .find(|(name, _)| *name == skill)
            .map(|(_, desc)| *desc)
            .unwrap_or(FALLBACK_SKILL_DESCRIPTION)
    }

    /// Iterate internships paired with their experience directory slug
    pub fn experience_slugs(&self) -> impl Iterator<Item = (String, &Internship)> + '_ {
        self.internships
            .iter()
            .enumerate()
            .map(|(i, internship)| (internship.slug(i), internship))
    }
}

pub static PORTFOLIO: Portfolio = Portfolio {
    profile: Profile {
        name: "Swayam Prakash Sahoo",
        title: "AI/ML Engineer | Data Analyst",
        role: "AI/ML Engineer | Data Science",
        current_status: "Currently @ Samsung R&D Institute",
        certification: "Databricks Certified Data Analyst",
        focus: "Computer Vision, NLP, Edge AI, LLMs",
        specialization: "Computer Vision | NLP | Edge AI | LLMs",
        education: "B.Tech in CS (AI & ML) - GPA: 8.4/10",
        summary: &[
            "Skilled in building production-grade AI systems",
            "spanning smart institutions, financial platforms,",
            "and Edge-optimized LLM deployment.",
        ],
        email: "swayampr.sahoo@gmail.com",
        phone: "+91-8114367279",
        github: "github.com/swayamsahoo",
        linkedin: "linkedin.com/in/swayamsahoo",
    },
    projects: &[
        Project {
            slug: "praxifi-cfo",
            name: "PRAXIFI CFO",
            description: "Enterprise AI Financial Intelligence Platform with 8-layer cryptographic security",
            tech: "Python, FastAPI, Prophet, SHAP, Redis, Docker, PostgreSQL, Paillier Encryption",
            status: "Aug 2024 – Present",
            tagline: "Enterprise AI Financial Intelligence Platform",
            featured: false,
        },
        Project {
            slug: "neuracity",
            name: "NEURACITY",
            description: "AI Nervous System for Smart Institutions with multi-modal AIOps",
            tech: "Python, YOLOv8, Google Gemini, LangChain, Redis, PostgreSQL, ChromaDB, MicroPython, Vue.js",
            status: "Mar 2024 – Present",
            tagline: "AI Nervous System for Smart Institutions",
            featured: false,
        },
        Project {
            slug: "swasthya-setu",
            name: "SWASTHYA-SETU",
            description: "Multilingual AI Health Assistant for rural healthcare",
            tech: "Rasa 3.x, Python, Sentence-Transformers, FAISS, Twilio",
            status: "Sep 2025 – Present",
            tagline: "Multilingual AI Health Assistant",
            featured: true,
        },
        Project {
            slug: "drai-ai",
            name: "DRAI-AI",
            description: "Disaster Response Autonomous Rover with AI",
            tech: "Python, Flask, OpenCV, Raspberry Pi, GPS, Leaflet.js",
            status: "Jun 2025 – Present",
            tagline: "Disaster Response Rover with AI",
            featured: true,
        },
        Project {
            slug: "cognitia",
            name: "COGNITIA",
            description: "Agentic AI Research Mentor with local LLM deployment",
            tech: "TypeScript, React, FastAPI, Python, LangChain, ChromaDB, Ollama",
            status: "Jun 2024 - Present",
            tagline: "AI Research Mentor Platform",
            featured: true,
        },
        Project {
            slug: "kali-ai",
            name: "KALI-AI",
            description: "Smart AI-powered Glasses with Edge AI deployment",
            tech: "Python, YOLOv8m, Tesseract OCR, InsightFace, CoreML, ONNXRuntime",
            status: "Apr 2025 - Present",
            tagline: "Smart AI Glasses System",
            featured: true,
        },
        Project {
            slug: "tara",
            name: "TARA",
            description: "IoT-based Women Safety Device with real-time tracking",
            tech: "Arduino Nano, SIM800L, Neo-6M GPS, Embedded C, Python",
            status: "Jan 2025 – Present",
            tagline: "IoT-based Women Safety Device",
            featured: true,
        },
        Project {
            slug: "tara-vision",
            name: "TARA-Vision",
            description: "AI-powered Surveillance System with real-time alerts",
            tech: "Python, OpenCV, TensorFlow, YOLOv8, ResNet50",
            status: "Feb 2025 – Present",
            tagline: "AI Surveillance System",
            featured: true,
        },
    ],
    skills: &[
        SkillCategory {
            key: "ai-ml-deep-learning",
            skills: &[
                "TensorFlow",
                "PyTorch",
                "YOLOv8",
                "OpenCV",
                "LangChain",
                "BERT",
                "Transformers",
            ],
        },
        SkillCategory {
            key: "data-engineering",
            skills: &["Python", "SQL", "Pandas", "NumPy", "Databricks", "SQL Server"],
        },
        SkillCategory {
            key: "deployment-apis",
            skills: &["FastAPI", "Flask", "Docker", "PostgreSQL", "Redis", "REST APIs"],
        },
        SkillCategory {
            key: "nlp-vector-db",
            skills: &[
                "Rasa 3.x",
                "Sentence-Transformers",
                "ChromaDB",
                "FAISS",
                "Ollama",
                "Prophet",
            ],
        },
        SkillCategory {
            key: "edge-ai-iot",
            skills: &[
                "CoreML",
                "ONNXRuntime",
                "MicroPython",
                "Raspberry Pi",
                "Tesseract OCR",
                "InsightFace",
            ],
        },
    ],
    internships: &[
        Internship {
            company: "Samsung R&D Institute",
            role: "Research Intern",
            duration: "Nov 2025 - Present",
            description: "Developing deep learning models for DNG image quality enhancement on low-light and noisy datasets",
        },
        Internship {
            company: "Scalable Systems",
            role: "Data Science Intern",
            duration: "Jun 2025 - Oct 2025",
            description: "Designed and optimized ETL pipelines using SQL Server and Databricks to process 10M+ records",
        },
        Internship {
            company: "DeepSurge.ai",
            role: "AI/ML Intern",
            duration: "Jul 2025 - Aug 2025",
            description: "Built YOLOv8-based computer vision pipelines to analyze road infrastructure from 500+ annotated video samples",
        },
    ],
    skill_descriptions: &[
        ("PyTorch", "Deep learning framework for building neural networks"),
        ("TensorFlow", "End-to-end ML platform for production deployments"),
        ("Scikit-learn", "Classical ML algorithms and data preprocessing"),
        ("Pandas", "Data manipulation and analysis library"),
        ("NumPy", "Numerical computing with multi-dimensional arrays"),
        ("Matplotlib", "Data visualization and plotting library"),
        ("FastAPI", "Modern, fast web framework for building APIs"),
        ("Django", "High-level Python web framework for rapid development"),
        ("Node.js", "JavaScript runtime for server-side applications"),
        ("React", "JavaScript library for building user interfaces"),
        ("TypeScript", "Typed superset of JavaScript for large-scale apps"),
        ("Tailwind", "Utility-first CSS framework for rapid UI development"),
        ("Docker", "Containerization platform for application deployment"),
        ("Kubernetes", "Container orchestration for automating deployment"),
        ("AWS", "Cloud computing platform with extensive services"),
    ],
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_experience_slugs_replace_non_letters() {
        let slugs: Vec<String> = PORTFOLIO.experience_slugs().map(|(s, _)| s).collect();
        assert_eq!(
            slugs,
            vec![
                "1-samsung-r-d-institute",
                "2-scalable-systems",
                "3-deepsurge-ai"
            ]
        );
    }

    #[test]
    fn test_skill_description_fallback() {
        assert_eq!(
            PORTFOLIO.skill_description("PyTorch"),
            "Deep learning framework for building neural networks"
        );
        assert_eq!(
            PORTFOLIO.skill_description("BERT"),
            FALLBACK_SKILL_DESCRIPTION
        );
    }

    #[test]
    fn test_lookup_by_key() {
        assert!(PORTFOLIO.skill_category("edge-ai-iot").is_some());
        assert!(PORTFOLIO.skill_category("edge").is_none());
    }
}
