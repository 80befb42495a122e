pub struct Feature {
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

pub struct Stat {
    pub number: &'static str,
    pub label: &'static str,
}

pub struct Testimonial {
    pub name: &'static str,
    pub role: &'static str,
    pub content: &'static str,
    pub rating: u8,
}

pub const NAV_LINKS: [&str; 4] = ["Home", "Hackathons", "Teams", "About"];

pub const HERO_TITLE: &str = "Welcome to DevCircle";
pub const HERO_SUBTITLE: &str = "The ultimate hackathon platform where developers collaborate, compete, and create amazing projects together";

pub const FEATURES_TITLE: &str = "Everything You Need for Successful Hackathons";
pub const FEATURES_SUBTITLE: &str = "From team formation to project submission, DevCircle provides all the tools you need";

pub const FEATURES: [Feature; 6] = [
    Feature {
        icon: "</>",
        title: "Real-time Collaboration",
        description: "Work together seamlessly with integrated chat and project sharing",
    },
    Feature {
        icon: "👥",
        title: "Team Management",
        description: "Create teams, assign roles, and manage participants effortlessly",
    },
    Feature {
        icon: "🏆",
        title: "Hackathon Organization",
        description: "Host and participate in hackathons with comprehensive event management",
    },
    Feature {
        icon: "💬",
        title: "Instant Messaging",
        description: "Stay connected with your team through real-time chat powered by Socket.IO",
    },
    Feature {
        icon: "📅",
        title: "Event Scheduling",
        description: "Track deadlines, milestones, and important dates with built-in timers",
    },
    Feature {
        icon: "⚡",
        title: "Quick Submissions",
        description: "Submit projects with GitHub integration and automatic deadline validation",
    },
];

pub const STATS: [Stat; 4] = [
    Stat { number: "1000+", label: "Active Developers" },
    Stat { number: "50+", label: "Hackathons Hosted" },
    Stat { number: "200+", label: "Projects Submitted" },
    Stat { number: "95%", label: "Success Rate" },
];

pub const TESTIMONIALS_TITLE: &str = "What Developers Say About DevCircle";

pub const TESTIMONIALS: [Testimonial; 3] = [
    Testimonial {
        name: "Sarah Chen",
        role: "Full Stack Developer",
        content: "DevCircle made organizing our company hackathon incredibly smooth. The real-time features are game-changing!",
        rating: 5,
    },
    Testimonial {
        name: "Alex Rodriguez",
        role: "Tech Lead",
        content: "Love how easy it is to manage teams and track submissions. The platform is intuitive and powerful.",
        rating: 5,
    },
    Testimonial {
        name: "Maya Patel",
        role: "Product Manager",
        content: "Finally, a hackathon platform that gets it right. Everything we needed in one place.",
        rating: 5,
    },
];

pub const CTA_TITLE: &str = "Ready to Start Your Next Hackathon?";
pub const CTA_SUBTITLE: &str = "Join thousands of developers already using DevCircle to create amazing projects";

pub const FOOTER_BLURB: &str = "Empowering developers to collaborate, compete, and create through seamless hackathon experiences.";
pub const FOOTER_COLUMNS: [(&str, [&str; 4]); 2] = [
    ("Platform", ["Features", "Pricing", "API", "Documentation"]),
    ("Support", ["Help Center", "Contact Us", "Community", "Status"]),
];
pub const COPYRIGHT: &str = "© 2024 DevCircle. All rights reserved.";

/// Landing screen: static content plus the collapsible nav menu
#[derive(Debug, Default)]
pub struct LandingPage {
    pub menu_open: bool,
    pub scroll: u16,
}

impl LandingPage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn toggle_menu(&mut self) {
        self.menu_open = !self.menu_open;
    }

    /// `content_height` is the number of rendered lines; the last one stays on screen
    pub fn scroll_down(&mut self, content_height: u16) {
        let max = content_height.saturating_sub(1);
        self.scroll = self.scroll.saturating_add(1).min(max);
    }

    pub fn scroll_up(&mut self) {
        self.scroll = self.scroll.saturating_sub(1);
    }
}
