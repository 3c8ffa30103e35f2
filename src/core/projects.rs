// Static project collection shown in the works gallery.

use std::sync::OnceLock;

#[derive(Clone, Debug, PartialEq)]
pub struct Project {
    pub id: String,
    pub index: usize,
    pub name: &'static str,
    pub path: &'static str,
    pub title: &'static str,
    pub cover_img: String,
    pub cover_img_small: String,
    pub visual1: String,
    pub date: &'static str,
    pub role: &'static str,
    pub techs: &'static [&'static str],
    pub description: &'static str,
    pub website_link: Option<&'static str>,
}

struct Entry {
    name: &'static str,
    path: &'static str,
    title: &'static str,
    image_id: u32,
    date: &'static str,
    role: &'static str,
    techs: &'static [&'static str],
    description: &'static str,
    website_link: Option<&'static str>,
}

const SITE: &str = "https://ricardious.dev/";

const ENTRIES: &[Entry] = &[
    Entry {
        name: "Digital Portfolio",
        path: "digital-portfolio",
        title: "Digital Portfolio",
        image_id: 1015,
        date: "Apr. 2025",
        role: "Designer, Dev",
        techs: &["Figma, React"],
        description: "A modern portfolio showcasing creative work and development projects with an emphasis on user experience and visual storytelling.",
        website_link: Some(SITE),
    },
    Entry {
        name: "Creative Studio",
        path: "creative-studio",
        title: "Creative Studio",
        image_id: 1016,
        date: "May 2025",
        role: "Designer, Dev",
        techs: &["Figma, Photoshop, React"],
        description: "A bold and immersive digital experience designed to showcase creative work through innovative interactions and stunning visuals.",
        website_link: Some(SITE),
    },
    Entry {
        name: "Design System",
        path: "design-system",
        title: "Design System Project",
        image_id: 1018,
        date: "Aug. 2022",
        role: "Designer, Dev",
        techs: &["Figma, Photoshop, React"],
        description: "A comprehensive design system created to ensure consistency across digital products with reusable components and clear documentation.",
        website_link: Some(SITE),
    },
    Entry {
        name: "Visual Gallery",
        path: "visual-gallery",
        title: "Visual Gallery",
        image_id: 1019,
        date: "Apr. 2022",
        role: "Designer",
        techs: &["Figma, Photoshop, Protopie"],
        description: "An elegant gallery experience designed to showcase visual work with attention to detail and sophisticated animations.",
        website_link: None,
    },
    Entry {
        name: "Interactive Experience",
        path: "interactive-experience",
        title: "Interactive Experience",
        image_id: 1020,
        date: "Mar. 2024",
        role: "Designer, Developer",
        techs: &["Figma, React"],
        description: "An immersive interactive experience featuring advanced animations and engaging user interactions built with modern web technologies.",
        website_link: Some(SITE),
    },
    Entry {
        name: "E-commerce Platform",
        path: "ecommerce-platform",
        title: "E-commerce Platform",
        image_id: 1021,
        date: "Dec. 2023",
        role: "Designer, AD",
        techs: &["Figma, React"],
        description: "A modern e-commerce platform redesign focusing on user experience, conversion optimization, and brand consistency.",
        website_link: None,
    },
    Entry {
        name: "Brand Identity",
        path: "brand-identity",
        title: "Brand Identity Project",
        image_id: 1022,
        date: "Jan. 2024",
        role: "Designer, Developer",
        techs: &["Figma, React"],
        description: "A complete brand identity project featuring logo design, visual guidelines, and digital presence across multiple touchpoints.",
        website_link: None,
    },
    Entry {
        name: "Web Application",
        path: "web-application",
        title: "Web Application",
        image_id: 1024,
        date: "Mar. 2024",
        role: "Designer, Developer",
        techs: &["Figma, React"],
        description: "A full-featured web application with a focus on usability, performance, and modern design patterns.",
        website_link: Some(SITE),
    },
    Entry {
        name: "Mobile First",
        path: "mobile-first",
        title: "Mobile First Design",
        image_id: 1025,
        date: "Feb. 2024",
        role: "Designer, Developer",
        techs: &["Figma, React"],
        description: "A mobile-first approach to web design ensuring optimal experience across all devices with responsive layouts and touch-friendly interactions.",
        website_link: Some(SITE),
    },
    Entry {
        name: "Typography Showcase",
        path: "typography-showcase",
        title: "Typography Showcase",
        image_id: 1027,
        date: "Dec. 2022",
        role: "Designer",
        techs: &["Figma, Photoshop, Protopie"],
        description: "A minimalist and modern showcase exploring typography, layout, and visual hierarchy through interactive design.",
        website_link: None,
    },
    Entry {
        name: "Minimalist Design",
        path: "minimalist-design",
        title: "Minimalist Design",
        image_id: 1028,
        date: "Sept. 2022",
        role: "Designer",
        techs: &["Figma, Photoshop"],
        description: "A minimalist design approach focusing on clean lines, whitespace, and essential elements to create elegant digital experiences.",
        website_link: None,
    },
];

// Placeholder artwork until real captures exist.
fn image_url(id: u32, width: u32, height: u32) -> String {
    format!("https://picsum.photos/id/{id}/{width}/{height}")
}

fn build() -> Vec<Project> {
    ENTRIES
        .iter()
        .enumerate()
        .map(|(index, e)| Project {
            id: format!("project-{index:02}-{}", e.path),
            index,
            name: e.name,
            path: e.path,
            title: e.title,
            cover_img: image_url(e.image_id, 1200, 800),
            cover_img_small: image_url(e.image_id, 600, 400),
            visual1: image_url(e.image_id, 1200, 800),
            date: e.date,
            role: e.role,
            techs: e.techs,
            description: e.description,
            website_link: e.website_link,
        })
        .collect()
}

/// The session's project collection, built on first use and never mutated.
pub fn projects() -> &'static [Project] {
    static PROJECTS: OnceLock<Vec<Project>> = OnceLock::new();
    PROJECTS.get_or_init(build)
}

