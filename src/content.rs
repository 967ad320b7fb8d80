//! Static portfolio content.
//!
//! Everything here is `'static` and immutable; renderers only ever borrow it.

use serde::Serialize;
use url::Url;

use crate::icons::Icon;

#[derive(Debug, Serialize)]
pub struct Contact {
    pub phone: &'static str,
    pub email: &'static str,
    pub location: &'static str,
    pub github: &'static str,
}

impl Contact {
    /// Short handle derived from the GitHub URL path (`/kdoshi13` → `kdoshi13`).
    ///
    /// Falls back to the raw link if it does not parse as a URL.
    #[must_use]
    pub fn github_handle(&self) -> String {
        Url::parse(self.github).map_or_else(
            |_| self.github.to_string(),
            |url| url.path().replacen('/', "", 1),
        )
    }
}

#[derive(Debug, Serialize)]
pub struct Profile {
    pub name: &'static str,
    pub title: &'static str,
    pub objective: &'static str,
    pub contact: Contact,
}

#[derive(Debug, Serialize)]
pub struct SkillSet {
    pub languages: &'static [&'static str],
    pub frameworks: &'static [&'static str],
    pub tools: &'static [&'static str],
    pub core: &'static [&'static str],
}

impl SkillSet {
    /// Skill groups with their display titles, in display order.
    pub const fn groups(&self) -> [(&'static str, &'static [&'static str]); 4] {
        [
            ("Languages", self.languages),
            ("Frameworks", self.frameworks),
            ("Tools", self.tools),
            ("Core Knowledge", self.core),
        ]
    }
}

#[derive(Debug, Serialize)]
pub struct ProjectItem {
    pub name: &'static str,
    pub tech: &'static str,
    pub description: &'static str,
    #[serde(rename = "icon")]
    pub icon_key: &'static str,
}

impl ProjectItem {
    pub fn icon(&self) -> Icon {
        Icon::from_key(self.icon_key)
    }
}

#[derive(Debug, Serialize)]
pub struct EducationItem {
    pub qualification: &'static str,
    pub institution: &'static str,
    pub year: &'static str,
}

#[derive(Debug, Serialize)]
pub struct ExperienceItem {
    pub title: &'static str,
    pub company: &'static str,
    pub duration: &'static str,
    pub details: &'static str,
    #[serde(rename = "icon")]
    pub icon_key: &'static str,
}

impl ExperienceItem {
    pub fn icon(&self) -> Icon {
        Icon::from_key(self.icon_key)
    }
}

#[derive(Debug, Serialize)]
pub struct ContentStore {
    pub profile: Profile,
    pub skills: SkillSet,
    pub projects: &'static [ProjectItem],
    pub education: &'static [EducationItem],
    pub experience: &'static [ExperienceItem],
    pub interests: &'static [&'static str],
}

pub static CONTENT: ContentStore = ContentStore {
    profile: Profile {
        name: "Keval Doshi",
        title: "Aspiring Software Developer & System Designer",
        objective: "To leverage a strong foundation in computer science and problem-solving to \
                    design, build, and optimize innovative software solutions. I aim to \
                    contribute to forward-thinking organizations where I can apply my technical \
                    expertise, creativity, and passion for continuous learning to solve \
                    real-world challenges, while also developing into a well-rounded \
                    professional in the fields of software development, systems design, and \
                    emerging technologies.",
        contact: Contact {
            phone: "(788) 755-4305",
            email: "kevaldoshi34223@gmail.com",
            location: "Pune, India",
            github: "https://github.com/kdoshi13",
        },
    },
    skills: SkillSet {
        languages: &["Java", "MySQL", "Javascript", "HTML/CSS", "Python"],
        frameworks: &["Spring (Basics)", "JSP", "Node.JS", "Flask", "Tkinter"],
        tools: &["Git/ Github", "MS Office", "Bash", "Figma", "Godot Engine"],
        core: &["DBMS", "Cybersecurity Concepts", "Networking"],
    },
    projects: &[
        ProjectItem {
            name: "Adventure of Kaya",
            tech: "Godot Engine, GDscript",
            description: "A Top Down RPG Game developed using the Godot Engine, demonstrating \
                          proficiency in game development concepts, state management, and \
                          scripting languages.",
            icon_key: "Gamepad2",
        },
        ProjectItem {
            name: "HealthCare Management System",
            tech: "Python, Flask, Web App",
            description: "A Flask-based web application providing patients and doctors with \
                          insight regarding appointments, required medicine, tests, and \
                          results, focusing on full-stack development and secure data \
                          management.",
            icon_key: "HeartPulse",
        },
        ProjectItem {
            name: "Sales Management System",
            tech: "Python Tkinter",
            description: "A Python Tkinter based desktop application providing small business \
                          owners with insights into sales, stock, billing, and customer \
                          accounts, showcasing desktop application development and business \
                          logic.",
            icon_key: "ShoppingBag",
        },
    ],
    education: &[
        EducationItem {
            qualification: "Master of Computer Application (MCA)",
            institution: "Modern College of Engineering, Savitribai Phule University",
            year: "2026 (Status: 7.0 SGPA)",
        },
        EducationItem {
            qualification: "BBA (Computer Application)",
            institution: "MMCC, Savitribai Phule University",
            year: "2023 (8.89 CGPA)",
        },
    ],
    experience: &[
        ExperienceItem {
            title: "Technical Support (Part-Time)",
            company: "Media Urbana",
            duration: "Ongoing",
            details: "Providing technical support for commercial projects, gaining hands-on \
                      experience in production environments, troubleshooting hardware, and \
                      ensuring system stability.",
            icon_key: "Wrench",
        },
        ExperienceItem {
            title: "Legal Assistant (Full-Time)",
            company: "Attaching Firm",
            duration: "6 months",
            details: "Gained hands-on experience in a professional work environment, developing \
                      strong organizational, communication, and procedural skills essential for \
                      cross-functional collaboration.",
            icon_key: "Briefcase",
        },
    ],
    interests: &[
        "Passionate Gamer (Metroidvania/Soulslike analysis and design)",
        "Active learning and project building in Computer Science",
        "Collaborative spirit in team coding projects and peer learning sessions",
        "Traveling, Coding, Music, and Reading Books",
    ],
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn profile_fields_are_present() {
        let profile = &CONTENT.profile;
        for field in [
            profile.name,
            profile.title,
            profile.objective,
            profile.contact.phone,
            profile.contact.email,
            profile.contact.location,
            profile.contact.github,
        ] {
            assert!(!field.trim().is_empty());
        }
        assert!(Url::parse(profile.contact.github).is_ok());
    }

    #[test]
    fn github_handle_strips_leading_slash() {
        assert_eq!(CONTENT.profile.contact.github_handle(), "kdoshi13");
    }

    #[test]
    fn github_handle_falls_back_to_raw_link() {
        let contact = Contact {
            phone: "",
            email: "",
            location: "",
            github: "not a url",
        };
        assert_eq!(contact.github_handle(), "not a url");
    }

    #[test]
    fn sample_data_icons_all_resolve() {
        assert_eq!(CONTENT.projects[0].icon(), Icon::Gamepad2);
        assert_eq!(CONTENT.projects[2].icon(), Icon::ShoppingBag);
        assert_eq!(CONTENT.experience[0].icon(), Icon::Wrench);
        assert_eq!(CONTENT.experience[1].icon(), Icon::Briefcase);
    }

    #[test]
    fn skill_groups_keep_declaration_order() {
        let groups = CONTENT.skills.groups();
        let counts: Vec<usize> = groups.iter().map(|(_, items)| items.len()).collect();
        assert_eq!(counts, [5, 5, 5, 3]);
        assert_eq!(groups[0].1[0], "Java");
        assert_eq!(groups[3].0, "Core Knowledge");
    }
}
