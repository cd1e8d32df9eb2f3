//! Static page content: navigation links, hero text, bio, skills, projects.
//!
//! Everything here is compile-time data. The sections render these slices
//! in declared order; the order is the page author's intended priority and
//! must be preserved by every consumer.

#[cfg(test)]
#[path = "content_test.rs"]
mod content_test;

/// Developer name shown in the nav brand, hero, and footer.
pub const DEVELOPER_NAME: &str = "John Doe";

/// One-line tagline under the hero name.
pub const TAGLINE: &str = "Frontend Developer | Creating beautiful web experiences";

/// Bio paragraphs for the about section, in display order.
pub const BIO: &[&str] = &[
    "Hello! I'm John, a passionate frontend developer currently pursuing my \
     degree in Computer Science. I love creating clean, user-friendly websites \
     and applications that solve real-world problems.",
    "I'm currently studying at ABC University, where I've developed a strong \
     foundation in web development technologies. When I'm not coding, you can \
     find me exploring new technologies, reading tech blogs, or working on \
     personal projects.",
];

/// A navigation entry pointing at an in-page anchor.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavLink {
    pub label: &'static str,
    pub anchor: &'static str,
}

/// Navigation links in header order. Anchors are the only addressing
/// scheme on the page.
pub const NAV_LINKS: &[NavLink] = &[
    NavLink { label: "Home", anchor: "#home" },
    NavLink { label: "About", anchor: "#about" },
    NavLink { label: "Skills", anchor: "#skills" },
    NavLink { label: "Projects", anchor: "#projects" },
    NavLink { label: "Contact", anchor: "#contact" },
];

/// A single skill badge: label plus decorative glyph.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Skill {
    pub label: &'static str,
    pub glyph: &'static str,
}

pub const SKILLS: &[Skill] = &[
    Skill { label: "HTML5", glyph: "\u{1f310}" },
    Skill { label: "CSS3", glyph: "\u{1f3a8}" },
    Skill { label: "JavaScript", glyph: "\u{26a1}" },
    Skill { label: "React", glyph: "\u{269b}\u{fe0f}" },
    Skill { label: "Git", glyph: "\u{1f4c2}" },
    Skill { label: "Responsive Design", glyph: "\u{1f4f1}" },
    Skill { label: "Tailwind CSS", glyph: "\u{1f4a8}" },
    Skill { label: "TypeScript", glyph: "\u{1f4d8}" },
];

/// A showcased project card.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Project {
    pub title: &'static str,
    pub description: &'static str,
    /// Technology tags in declared order.
    pub technologies: &'static [&'static str],
}

pub const PROJECTS: &[Project] = &[
    Project {
        title: "Portfolio Website",
        description: "A personal portfolio website to showcase my work and skills.",
        technologies: &["HTML", "CSS", "JavaScript"],
    },
    Project {
        title: "Weather App",
        description: "A simple weather application that displays current weather conditions.",
        technologies: &["JavaScript", "API", "CSS"],
    },
    Project {
        title: "Task Manager",
        description: "A to-do list application with add, edit, and delete functionality.",
        technologies: &["React", "CSS", "LocalStorage"],
    },
];
