use std::collections::HashSet;

use thiserror::Error;

pub const HOME: &str = "home";
pub const ABOUT: &str = "about";
pub const SKILLS: &str = "skills";
pub const PROJECTS: &str = "projects";
pub const CONTACT: &str = "contact";

/// Anchor ids of the page sections, in document order.
pub const SECTION_ANCHORS: &[&str] = &[HOME, ABOUT, SKILLS, PROJECTS, CONTACT];

/// Icon glyphs, rendered through the icon font loaded by the shell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Icon {
    Award,
    Briefcase,
    ChevronDown,
    Clock,
    Code,
    Coffee,
    Eye,
    ExternalLink,
    Github,
    GraduationCap,
    Heart,
    Home,
    Linkedin,
    Mail,
    MapPin,
    Menu,
    MessageCircle,
    Phone,
    Send,
    Server,
    Shield,
    Star,
    User,
    Users,
    X,
    Zap,
}

impl Icon {
    pub fn class(self) -> &'static str {
        match self {
            Self::Award => "icon-award",
            Self::Briefcase => "icon-briefcase",
            Self::ChevronDown => "icon-chevron-down",
            Self::Clock => "icon-clock",
            Self::Code => "icon-code",
            Self::Coffee => "icon-coffee",
            Self::Eye => "icon-eye",
            Self::ExternalLink => "icon-external-link",
            Self::Github => "devicon-github-plain",
            Self::GraduationCap => "icon-graduation-cap",
            Self::Heart => "icon-heart",
            Self::Home => "icon-house",
            Self::Linkedin => "devicon-linkedin-plain",
            Self::Mail => "icon-mail",
            Self::MapPin => "icon-map-pin",
            Self::Menu => "icon-menu",
            Self::MessageCircle => "icon-message-circle",
            Self::Phone => "icon-phone",
            Self::Send => "icon-send",
            Self::Server => "icon-server",
            Self::Shield => "icon-shield",
            Self::Star => "icon-star",
            Self::User => "icon-user",
            Self::Users => "icon-users",
            Self::X => "icon-x",
            Self::Zap => "icon-zap",
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct NavItem {
    pub id: &'static str,
    pub label: &'static str,
    pub icon: Icon,
}

pub const NAV_ITEMS: &[NavItem] = &[
    NavItem {
        id: HOME,
        label: "Home",
        icon: Icon::Home,
    },
    NavItem {
        id: ABOUT,
        label: "About",
        icon: Icon::User,
    },
    NavItem {
        id: SKILLS,
        label: "Skills",
        icon: Icon::Code,
    },
    NavItem {
        id: PROJECTS,
        label: "Projects",
        icon: Icon::Briefcase,
    },
    NavItem {
        id: CONTACT,
        label: "Contact",
        icon: Icon::Mail,
    },
];

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AnchorError {
    #[error("nav item `{0}` has no matching section anchor")]
    UnknownTarget(&'static str),
    #[error("section `{0}` is not reachable from the navigation")]
    Unreachable(&'static str),
    #[error("anchor `{0}` is declared more than once")]
    Duplicate(&'static str),
}

/// Checks that navigation and section anchors name each other exactly.
pub fn check_anchors(nav: &[NavItem], sections: &[&'static str]) -> Result<(), AnchorError> {
    let mut seen = HashSet::new();
    for &id in sections {
        if !seen.insert(id) {
            return Err(AnchorError::Duplicate(id));
        }
    }
    let mut targets = HashSet::new();
    for item in nav {
        if !seen.contains(item.id) {
            return Err(AnchorError::UnknownTarget(item.id));
        }
        if !targets.insert(item.id) {
            return Err(AnchorError::Duplicate(item.id));
        }
    }
    match sections.iter().find(|id| !targets.contains(**id)) {
        Some(&id) => Err(AnchorError::Unreachable(id)),
        None => Ok(()),
    }
}

#[derive(Debug, Clone, Copy)]
pub struct Skill {
    pub name: &'static str,
    pub level: u8,
}

#[derive(Debug, Clone, Copy)]
pub struct SkillCategory {
    pub title: &'static str,
    pub icon: Icon,
    pub color: &'static str,
    pub skills: &'static [Skill],
}

const fn skill(name: &'static str, level: u8) -> Skill {
    Skill { name, level }
}

pub const SKILL_CATEGORIES: &[SkillCategory] = &[
    SkillCategory {
        title: "IT Support & Networking",
        icon: Icon::Server,
        color: "from-blue-500 to-blue-600",
        skills: &[
            skill("IT Support", 90),
            skill("TCP/IP", 85),
            skill("DHCP", 80),
            skill("DNS", 85),
            skill("Firewall Configuration", 75),
            skill("Network Switches", 80),
            skill("Troubleshooting", 95),
        ],
    },
    SkillCategory {
        title: "Operating Systems",
        icon: Icon::Shield,
        color: "from-green-500 to-green-600",
        skills: &[
            skill("Linux Administration", 85),
            skill("Windows Server", 80),
            skill("VMware", 75),
            skill("Virtualization", 80),
            skill("System Administration", 85),
            skill("Security Management", 75),
        ],
    },
    SkillCategory {
        title: "Programming",
        icon: Icon::Code,
        color: "from-purple-500 to-purple-600",
        skills: &[
            skill("C++", 70),
            skill("C", 65),
            skill("Python", 75),
            skill("HTML/CSS", 80),
            skill("JavaScript", 70),
            skill("Problem Solving", 90),
        ],
    },
    SkillCategory {
        title: "Soft Skills",
        icon: Icon::Users,
        color: "from-orange-500 to-orange-600",
        skills: &[
            skill("Customer Service", 95),
            skill("Technical Communication", 90),
            skill("Problem Analysis", 85),
            skill("Team Collaboration", 88),
            skill("Documentation", 80),
            skill("Training & Support", 85),
        ],
    },
];

#[derive(Debug, Clone, Copy)]
pub struct Certification {
    pub name: &'static str,
    pub issuer: &'static str,
    pub logo: &'static str,
    pub color: &'static str,
    pub year: &'static str,
}

pub const CERTIFICATIONS: &[Certification] = &[
    Certification {
        name: "Google IT Support Professional",
        issuer: "Google",
        logo: "https://images.pexels.com/photos/270404/pexels-photo-270404.jpeg?auto=compress&cs=tinysrgb&w=100",
        color: "from-blue-500 to-blue-600",
        year: "2024",
    },
    Certification {
        name: "Programming Fundamentals",
        issuer: "Mimo",
        logo: "https://images.pexels.com/photos/1181671/pexels-photo-1181671.jpeg?auto=compress&cs=tinysrgb&w=100",
        color: "from-purple-500 to-purple-600",
        year: "2023",
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProjectCategory {
    Infrastructure,
    WebDevelopment,
    Automation,
}

impl ProjectCategory {
    pub fn label(self) -> &'static str {
        match self {
            Self::Infrastructure => "Infrastructure",
            Self::WebDevelopment => "Web Development",
            Self::Automation => "Automation",
        }
    }

    pub fn icon(self) -> Icon {
        match self {
            Self::Infrastructure => Icon::Code,
            Self::WebDevelopment => Icon::Eye,
            Self::Automation => Icon::Zap,
        }
    }

    pub fn color(self) -> &'static str {
        match self {
            Self::Infrastructure => "from-blue-500 to-blue-600",
            Self::WebDevelopment => "from-purple-500 to-purple-600",
            Self::Automation => "from-green-500 to-green-600",
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct ProjectLinks {
    pub source: &'static str,
    pub demo: &'static str,
}

// no public repositories yet
const PLACEHOLDER_LINKS: ProjectLinks = ProjectLinks {
    source: "#",
    demo: "#",
};

#[derive(Debug, Clone, Copy)]
pub struct Project {
    pub title: &'static str,
    pub description: &'static str,
    pub technologies: &'static [&'static str],
    pub image: &'static str,
    pub links: ProjectLinks,
    pub category: ProjectCategory,
}

pub const PROJECTS_LIST: &[Project] = &[
    Project {
        title: "Network Troubleshooting Practice Lab",
        description: "Comprehensive hands-on laboratory environment for diagnosing and resolving TCP/IP network issues using VMware virtual machines. Includes scenarios for DNS resolution, DHCP conflicts, and firewall configuration.",
        technologies: &["VMware", "TCP/IP", "DNS", "DHCP", "Linux", "Windows"],
        image: "https://images.pexels.com/photos/1181354/pexels-photo-1181354.jpeg?auto=compress&cs=tinysrgb&w=600",
        links: PLACEHOLDER_LINKS,
        category: ProjectCategory::Infrastructure,
    },
    Project {
        title: "Personal Portfolio Website",
        description: "Modern, responsive portfolio website built with Rust and Leptos and hosted on Linux server infrastructure. Features dark theme, smooth animations, and optimized performance for showcasing technical projects.",
        technologies: &["Rust", "Leptos", "Tailwind CSS", "Linux", "Nginx"],
        image: "https://images.pexels.com/photos/196644/pexels-photo-196644.jpeg?auto=compress&cs=tinysrgb&w=600",
        links: PLACEHOLDER_LINKS,
        category: ProjectCategory::WebDevelopment,
    },
    Project {
        title: "Sign Dekorasyon IT Infrastructure",
        description: "Designed and implemented comprehensive IT systems infrastructure to support business operations. Managed network setup, security protocols, and system maintenance for improved operational efficiency.",
        technologies: &["Network Administration", "Windows Server", "Security", "System Maintenance"],
        image: "https://images.pexels.com/photos/1181675/pexels-photo-1181675.jpeg?auto=compress&cs=tinysrgb&w=600",
        links: PLACEHOLDER_LINKS,
        category: ProjectCategory::Infrastructure,
    },
    Project {
        title: "Automated System Monitoring",
        description: "Python-based monitoring solution for tracking system performance, network connectivity, and security events. Includes automated alerting and reporting capabilities for proactive system management.",
        technologies: &["Python", "Linux", "Bash Scripting", "System Monitoring", "Automation"],
        image: "https://images.pexels.com/photos/1181263/pexels-photo-1181263.jpeg?auto=compress&cs=tinysrgb&w=600",
        links: PLACEHOLDER_LINKS,
        category: ProjectCategory::Automation,
    },
    Project {
        title: "Customer Support Ticketing System",
        description: "Web-based ticketing system for managing IT support requests with priority classification, automated routing, and comprehensive tracking. Improved response times and customer satisfaction.",
        technologies: &["HTML", "CSS", "JavaScript", "Database Management", "Customer Service"],
        image: "https://images.pexels.com/photos/1181244/pexels-photo-1181244.jpeg?auto=compress&cs=tinysrgb&w=600",
        links: PLACEHOLDER_LINKS,
        category: ProjectCategory::WebDevelopment,
    },
    Project {
        title: "Virtualization Lab Environment",
        description: "Multi-platform virtualization environment using VMware for testing different operating systems, network configurations, and security scenarios. Used for learning and demonstration purposes.",
        technologies: &["VMware", "Virtualization", "Multiple OS", "Network Testing", "Security Testing"],
        image: "https://images.pexels.com/photos/1181298/pexels-photo-1181298.jpeg?auto=compress&cs=tinysrgb&w=600",
        links: PLACEHOLDER_LINKS,
        category: ProjectCategory::Infrastructure,
    },
];

#[derive(Debug, Clone, Copy)]
pub struct ContactChannel {
    pub label: &'static str,
    pub value: &'static str,
    pub href: &'static str,
    pub icon: Icon,
    pub color: &'static str,
}

pub const CONTACT_CHANNELS: &[ContactChannel] = &[
    ContactChannel {
        label: "Email",
        value: "spacewalkersa@gmail.com",
        href: "mailto:spacewalkersa@gmail.com",
        icon: Icon::Mail,
        color: "from-blue-500 to-blue-600",
    },
    ContactChannel {
        label: "Phone",
        value: "+90 0551 152 7310",
        href: "tel:+905511527310",
        icon: Icon::Phone,
        color: "from-green-500 to-green-600",
    },
    ContactChannel {
        label: "LinkedIn",
        value: "linkedin.com/in/spacewalkersa",
        href: "https://www.linkedin.com/in/spacewalkersa/",
        icon: Icon::Linkedin,
        color: "from-purple-500 to-purple-600",
    },
];

#[derive(Debug, Clone, Copy)]
pub struct InfoCard {
    pub label: &'static str,
    pub value: &'static str,
    pub icon: Icon,
    pub color: &'static str,
}

pub const INFO_CARDS: &[InfoCard] = &[
    InfoCard {
        label: "Location",
        value: "Istanbul, Turkey",
        icon: Icon::MapPin,
        color: "from-blue-500 to-blue-600",
    },
    InfoCard {
        label: "University",
        value: "İstanbul Topkapı Üniversitesi",
        icon: Icon::GraduationCap,
        color: "from-purple-500 to-purple-600",
    },
    InfoCard {
        label: "Certification",
        value: "Google Certified",
        icon: Icon::Award,
        color: "from-green-500 to-green-600",
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shipped_anchors_are_consistent() {
        assert_eq!(check_anchors(NAV_ITEMS, SECTION_ANCHORS), Ok(()));
        assert_eq!(NAV_ITEMS[0].id, SECTION_ANCHORS[0]);
    }

    #[test]
    fn test_anchor_mismatches() {
        let nav = [
            NavItem {
                id: HOME,
                label: "Home",
                icon: Icon::Home,
            },
            NavItem {
                id: "Contact",
                label: "Contact",
                icon: Icon::Mail,
            },
        ];
        // ids are case sensitive
        assert_eq!(
            check_anchors(&nav, &[HOME, CONTACT]),
            Err(AnchorError::UnknownTarget("Contact"))
        );
        assert_eq!(
            check_anchors(&nav[..1], &[HOME, ABOUT]),
            Err(AnchorError::Unreachable(ABOUT))
        );
        assert_eq!(
            check_anchors(&nav[..1], &[HOME, HOME]),
            Err(AnchorError::Duplicate(HOME))
        );
        let doubled = [nav[0], nav[0]];
        assert_eq!(
            check_anchors(&doubled, &[HOME]),
            Err(AnchorError::Duplicate(HOME))
        );
    }

    #[test]
    fn test_skill_levels_are_percentages() {
        for category in SKILL_CATEGORIES {
            assert!(!category.skills.is_empty(), "{} has no skills", category.title);
            for s in category.skills {
                assert!(s.level <= 100, "{} has level {}", s.name, s.level);
            }
        }
    }

    #[test]
    fn test_projects_have_technologies() {
        for p in PROJECTS_LIST {
            assert!(!p.technologies.is_empty(), "{} lists no technologies", p.title);
        }
    }

    #[test]
    fn test_contact_channels_have_uris() {
        for c in CONTACT_CHANNELS {
            assert!(
                c.href.starts_with("mailto:")
                    || c.href.starts_with("tel:")
                    || c.href.starts_with("https://"),
                "unexpected href {}",
                c.href
            );
        }
    }
}
