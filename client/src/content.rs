//! Static copy for the portfolio page.

#[cfg(test)]
#[path = "content_test.rs"]
mod content_test;

pub const OWNER_NAME: &str = "Sreenivasulu N";
pub const OWNER_ROLE: &str = "Java Developer";
pub const PROFILE_IMAGE: &str = "/assets/images/profile.jpg";
pub const INTRO_VIDEO: &str = "/assets/video/intro.mp4";
pub const GITHUB_URL: &str = "https://github.com/sreenivasulun9693";

pub const HERO_INTRO: &str =
    "I build reliable Java applications and clean, responsive web pages, from database schema to user interface.";

/// About blocks; odd entries sit in the alternate container.
pub const ABOUT_BLOCKS: &[(&str, &str)] = &[
    (
        "Who I am",
        "A computer science graduate who enjoys turning everyday problems into small, well-structured programs.",
    ),
    (
        "What I do",
        "Object-oriented Java, JDBC and MySQL on the back end; HTML and CSS on the front end.",
    ),
    (
        "How I work",
        "Normalized data first, a layered architecture second, and a user interface that stays out of the way.",
    ),
];

#[derive(Clone, Copy, Debug)]
pub struct Skill {
    pub name: &'static str,
    pub percent: u8,
}

impl Skill {
    /// `data-width` attribute value: the bare percent.
    #[must_use]
    pub fn data_width(self) -> String {
        self.percent.to_string()
    }
}

pub const SKILLS: &[Skill] = &[
    Skill { name: "Java", percent: 90 },
    Skill { name: "MySQL / JDBC", percent: 80 },
    Skill { name: "HTML", percent: 85 },
    Skill { name: "CSS", percent: 80 },
    Skill { name: "JavaScript", percent: 65 },
    Skill { name: "Python", percent: 60 },
];

#[derive(Clone, Copy, Debug)]
pub struct SocialLink {
    pub label: &'static str,
    pub href: &'static str,
    pub icon: &'static str,
}

pub const SOCIAL_LINKS: &[SocialLink] = &[
    SocialLink { label: "GitHub", href: GITHUB_URL, icon: "fab fa-github" },
    SocialLink { label: "Contact", href: "#contact", icon: "fas fa-envelope" },
];
