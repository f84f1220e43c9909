//! Everything the page says. Components only lay this out.

use crate::scroll_spy::SectionId;

/// A run of text, optionally emphasised.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Span {
    Plain(&'static str),
    Bold(&'static str),
}

use Span::{Bold, Plain};

pub struct Profile {
    pub name: &'static str,
    pub initials: &'static str,
    pub headline_badge: &'static str,
    pub tagline: &'static str,
    pub phone: &'static str,
    pub location: &'static str,
    pub linkedin_url: &'static str,
    pub github_url: &'static str,
}

pub const PROFILE: Profile = Profile {
    name: "Ronak Sankaranarayanan",
    initials: "RS",
    headline_badge: "SENIOR SOFTWARE ENGINEER",
    tagline: "Software Engineer building the next generation of cloud-native financial systems.",
    phone: "774-418-9871",
    location: "McLean, VA",
    linkedin_url: "#",
    github_url: "#",
};

pub const HERO_SUMMARY: &[Span] = &[
    Plain("I build scalable cloud-native systems using "),
    Bold("Java, Golang, and React"),
    Plain(". Currently solving high-concurrency challenges at Capital One."),
];

pub struct NavLinkSpec {
    pub target: SectionId,
    pub label: &'static str,
}

pub const NAV_LINKS: &[NavLinkSpec] = &[
    NavLinkSpec { target: SectionId::Home, label: "Home" },
    NavLinkSpec { target: SectionId::Expertise, label: "Expertise" },
    NavLinkSpec { target: SectionId::Experience, label: "Experience" },
    NavLinkSpec { target: SectionId::Projects, label: "Projects" },
    NavLinkSpec { target: SectionId::Education, label: "Education" },
];

pub const FOOTER_LINKS: &[NavLinkSpec] = &[
    NavLinkSpec { target: SectionId::Expertise, label: "Expertise" },
    NavLinkSpec { target: SectionId::Experience, label: "Experience" },
    NavLinkSpec { target: SectionId::Projects, label: "Projects" },
];

/// Colour family a card is drawn in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Accent {
    Orange,
    Cyan,
    Blue,
    Indigo,
    Emerald,
}

impl Accent {
    pub fn class(self) -> &'static str {
        match self {
            Accent::Orange => "accent-orange",
            Accent::Cyan => "accent-cyan",
            Accent::Blue => "accent-blue",
            Accent::Indigo => "accent-indigo",
            Accent::Emerald => "accent-emerald",
        }
    }
}

pub struct Pillar {
    pub icon: &'static str,
    pub title: &'static str,
    pub body: &'static str,
    pub tags: &'static [&'static str],
    pub accent: Accent,
}

pub const EXPERTISE_INTRO: &str = "My engineering strategy is built on three pillars: High-performance backends, concurrent systems, and responsive, secure frontends.";

pub const PILLARS: &[Pillar] = &[
    Pillar {
        icon: "🖥️",
        title: "Java Ecosystem",
        body: "Architecting thread-safe, JVM-optimized microservices using Spring Boot. Implemented atomic access components (AtomicReference) enabling concurrent state management and boosting throughput by 25%.",
        tags: &["Spring Boot", "AWS Lambda", "ECS Fargate"],
        accent: Accent::Orange,
    },
    Pillar {
        icon: "⌨️",
        title: "Golang Concurrency",
        body: "Developing atomic pointer-based data structures to enable concurrent access and manipulation across multiple goroutines using a unified schema for cloud-native performance.",
        tags: &["Goroutines", "Unified Schema", "Atomic Ops"],
        accent: Accent::Cyan,
    },
    Pillar {
        icon: "</>",
        title: "React & Modern UI",
        body: "Built secure React.js UIs for tokenized S3 access to visualize 1,000+ workflow files. Developed React Native apps with real-time streaming, achieving 100K+ downloads.",
        tags: &["React.js", "React Native", "Redux"],
        accent: Accent::Blue,
    },
];

pub struct Job {
    pub role: &'static str,
    pub company: &'static str,
    pub location: &'static str,
    pub period: &'static str,
    pub logo: &'static str,
    pub current: bool,
    pub highlights: &'static [&'static [Span]],
}

pub const JOBS: &[Job] = &[
    Job {
        role: "Software Engineer",
        company: "Capital One",
        location: "McLean, VA",
        period: "July 2022 - Present",
        logo: "/assets/Capital-one-Logo-1.png",
        current: true,
        highlights: &[
            &[
                Plain("Developed "),
                Bold("atomic pointer-based data structures in Golang"),
                Plain(", enabling unified schema manipulation across multiple goroutines."),
            ],
            &[
                Plain("Orchestrated microservices on "),
                Bold("ECS Fargate"),
                Plain(" for customer data pipelines, enhancing debugging efficiency by 30% via custom UI tools."),
            ],
            &[
                Plain("Performed critical "),
                Bold("West Coast migration"),
                Plain(" during AWS us-east-1 outage (Oct 2025), resolving 100% failure rate with zero production impact during pullback."),
            ],
            &[
                Plain("Onboarded ephemeral "),
                Bold("Platform Testing environments"),
                Plain(" to mock critical path components between Dev and QA."),
            ],
            &[Plain("Integrated GitHub APIs into Jenkins for automated workflow validation, blocking merges on failure.")],
            &[
                Plain("Resolved "),
                Bold("50+ production issues"),
                Plain(" via 200+ hours of on-call support and Sev 3/4 RCA reporting."),
            ],
        ],
    },
    Job {
        role: "Software Engineer",
        company: "Market Simplified India Ltd",
        location: "Chennai, India",
        period: "June 2019 - July 2020",
        logo: "/assets/market_simplified_logo.jpg",
        current: false,
        highlights: &[
            &[
                Plain("Developed a stock market trading app using "),
                Bold("React Native"),
                Plain(" with 100K+ downloads and a 4+ app rating."),
            ],
            &[Plain("Built real-time data sync using Pub/Sub pattern, improving insight latency by 45%.")],
            &[
                Plain("Implemented a smart "),
                Bold("subscription/un-subscription model"),
                Plain(" for live stock updates to reduce device heating and visual lag."),
            ],
            &[
                Plain("Optimized app performance by migrating to "),
                Bold("Hermes engine"),
                Plain(", cutting app size by ~60%."),
            ],
        ],
    },
];

pub const ABOUT_PARAGRAPHS: &[&[Span]] = &[
    &[
        Plain("I am a Software Engineer with over 4 years of experience building cloud-native backend systems. I specialize in the intersection of resilience and performance, leveraging tools like "),
        Bold("Java, Spring Boot, and AWS"),
        Plain(" to handle massive scale."),
    ],
    &[
        Plain("Recently, I've been integrating "),
        Bold("AI-driven development"),
        Plain(" workflows using Github Copilot to enhance code quality and reduce production alerts. Whether it's optimizing transaction throughput or building secure React UIs for internal tools, I focus on delivering tangible business value."),
    ],
];

pub struct Stat {
    pub value: &'static str,
    pub label: &'static str,
}

pub const ABOUT_STATS: &[Stat] = &[
    Stat { value: "4+", label: "Years Experience" },
    Stat { value: "95%", label: "Code Coverage" },
];

pub struct Project {
    pub icon: &'static str,
    pub date: &'static str,
    pub title: &'static str,
    pub description: &'static [Span],
    pub tags: &'static [&'static str],
    pub accent: Accent,
}

pub const PROJECTS: &[Project] = &[
    Project {
        icon: "📱",
        date: "Aug 2024",
        title: "Personal Expense Tracker",
        description: &[
            Plain("A modular UI engineered with "),
            Bold("Angular"),
            Plain(" and integrated with a "),
            Bold("Spring Boot"),
            Plain(" backend to visualize financial data. Improved user insights by 80% through interactive dashboards and reduced transaction response times by 40%."),
        ],
        tags: &["Angular", "GraphQL", "Spring Boot", "Spring Data JPA"],
        accent: Accent::Indigo,
    },
    Project {
        icon: "☁️",
        date: "Dec 2024",
        title: "Real-Time Inventory Management",
        description: &[
            Plain("Constructed backend microservices using "),
            Bold("Google Cloud Functions"),
            Plain(" and "),
            Bold("Firestore"),
            Plain(". Ensured 99.9% real-time sync accuracy and leveraged "),
            Bold("Google Pub/Sub"),
            Plain(" to reduce inventory update latency to under 250ms."),
        ],
        tags: &["Google Cloud", "Firestore", "Pub/Sub"],
        accent: Accent::Emerald,
    },
];

pub struct Degree {
    pub title: &'static str,
    pub school: &'static str,
    pub location: &'static str,
    pub period: &'static str,
    pub logo: &'static str,
}

pub const DEGREES: &[Degree] = &[
    Degree {
        title: "Master's in Data Science",
        school: "Worcester Polytechnic Institute",
        location: "Worcester, MA",
        period: "Aug 2020 - May 2022",
        logo: "/assets/WPI_logo.svg.png",
    },
    Degree {
        title: "Bachelor's in Info Tech",
        school: "Anna University",
        location: "Chennai, India",
        period: "Aug 2015 - May 2019",
        logo: "/assets/Anna_university_logo.jpeg",
    },
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scroll_spy::SECTIONS;

    #[test]
    fn nav_targets_are_registered_sections() {
        for link in NAV_LINKS.iter().chain(FOOTER_LINKS) {
            assert!(
                SECTIONS.contains(&link.target),
                "{} points at an unregistered section",
                link.label
            );
        }
    }

    #[test]
    fn nav_links_follow_page_order() {
        let positions: Vec<usize> = NAV_LINKS
            .iter()
            .filter_map(|link| SECTIONS.iter().position(|id| *id == link.target))
            .collect();
        assert!(positions.windows(2).all(|pair| pair[0] < pair[1]));
    }

    #[test]
    fn only_the_first_job_is_current() {
        assert!(JOBS[0].current);
        assert!(JOBS.iter().skip(1).all(|job| !job.current));
    }

    #[test]
    fn every_card_has_tags() {
        assert!(PILLARS.iter().all(|pillar| !pillar.tags.is_empty()));
        assert!(PROJECTS.iter().all(|project| !project.tags.is_empty()));
    }

    #[test]
    fn highlights_are_not_empty() {
        for job in JOBS {
            assert!(!job.highlights.is_empty(), "{} has no highlights", job.company);
            assert!(job.highlights.iter().all(|spans| !spans.is_empty()));
        }
    }
}
