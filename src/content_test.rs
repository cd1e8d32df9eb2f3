use super::*;

// =============================================================
// Navigation links
// =============================================================

#[test]
fn nav_links_cover_every_section_in_page_order() {
    let anchors: Vec<&str> = NAV_LINKS.iter().map(|l| l.anchor).collect();
    assert_eq!(
        anchors,
        ["#home", "#about", "#skills", "#projects", "#contact"]
    );
}

#[test]
fn nav_link_anchors_are_fragments() {
    for link in NAV_LINKS {
        assert!(
            link.anchor.starts_with('#'),
            "{} is not an in-page anchor",
            link.anchor
        );
        assert!(!link.label.is_empty());
    }
}

#[test]
fn nav_link_anchors_are_unique() {
    for (i, a) in NAV_LINKS.iter().enumerate() {
        for b in &NAV_LINKS[i + 1..] {
            assert_ne!(a.anchor, b.anchor);
        }
    }
}

// =============================================================
// Skills
// =============================================================

#[test]
fn skills_keep_declared_order() {
    let labels: Vec<&str> = SKILLS.iter().map(|s| s.label).collect();
    assert_eq!(
        labels,
        [
            "HTML5",
            "CSS3",
            "JavaScript",
            "React",
            "Git",
            "Responsive Design",
            "Tailwind CSS",
            "TypeScript",
        ]
    );
}

#[test]
fn skills_have_labels_and_glyphs() {
    for skill in SKILLS {
        assert!(!skill.label.is_empty());
        assert!(!skill.glyph.is_empty());
    }
}

// =============================================================
// Projects
// =============================================================

#[test]
fn projects_keep_declared_order() {
    let titles: Vec<&str> = PROJECTS.iter().map(|p| p.title).collect();
    assert_eq!(titles, ["Portfolio Website", "Weather App", "Task Manager"]);
}

#[test]
fn project_technology_lists_keep_declared_order() {
    assert_eq!(PROJECTS[0].technologies, ["HTML", "CSS", "JavaScript"]);
    assert_eq!(PROJECTS[1].technologies, ["JavaScript", "API", "CSS"]);
    assert_eq!(PROJECTS[2].technologies, ["React", "CSS", "LocalStorage"]);
}

#[test]
fn projects_are_fully_described() {
    for project in PROJECTS {
        assert!(!project.title.is_empty());
        assert!(!project.description.is_empty());
        assert!(!project.technologies.is_empty());
    }
}

// =============================================================
// Profile text
// =============================================================

#[test]
fn profile_text_is_present() {
    assert!(!DEVELOPER_NAME.is_empty());
    assert!(!TAGLINE.is_empty());
    assert_eq!(BIO.len(), 2);
}
