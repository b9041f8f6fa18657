use crate::config;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Highlight {
    pub title: &'static str,
    pub image: &'static str,
    pub description: &'static str,
}

/// A headline number; `suffix` is appended verbatim after it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Stat {
    pub value: i64,
    pub suffix: &'static str,
    pub label: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TeamMember {
    pub name: &'static str,
    pub role: &'static str,
    pub image: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Value {
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ContactChannel {
    pub icon: &'static str,
    pub title: &'static str,
    pub content: &'static str,
    pub link: Option<&'static str>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SocialLink {
    pub name: &'static str,
    pub icon: &'static str,
    pub url: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct OfficeHours {
    pub days: &'static str,
    pub hours: &'static str,
}

pub const HIGHLIGHTS: &[Highlight] = &[
    Highlight {
        title: "Innovation",
        image: "https://images.unsplash.com/photo-1451187580459-43490279c0fa?w=600&h=400&fit=crop",
        description: "Pioneering the future of technology",
    },
    Highlight {
        title: "Collaboration",
        image: "https://images.unsplash.com/photo-1522071820081-009f0129c71c?w=600&h=400&fit=crop",
        description: "Working together for success",
    },
    Highlight {
        title: "Excellence",
        image: "https://images.unsplash.com/photo-1504384308090-c894fdcc538d?w=600&h=400&fit=crop",
        description: "Delivering quality in every project",
    },
];

pub const STATS: &[Stat] = &[
    Stat { value: 10, suffix: "+", label: "Years Experience" },
    Stat { value: 200, suffix: "+", label: "Happy Clients" },
    Stat { value: 300, suffix: "+", label: "Projects Completed" },
    Stat { value: 50, suffix: "+", label: "Team Members" },
];

pub const TEAM: &[TeamMember] = &[
    TeamMember {
        name: "Sarah Johnson",
        role: "CEO & Founder",
        image: "https://images.unsplash.com/photo-1573496359142-b8d87734a5a2?w=400&h=400&fit=crop",
    },
    TeamMember {
        name: "Michael Chen",
        role: "CTO",
        image: "https://images.unsplash.com/photo-1472099645785-5658abf4ff4e?w=400&h=400&fit=crop",
    },
    TeamMember {
        name: "Emily Rodriguez",
        role: "Head of Design",
        image: "https://images.unsplash.com/photo-1580489944761-15a19d654956?w=400&h=400&fit=crop",
    },
    TeamMember {
        name: "David Kumar",
        role: "Lead Developer",
        image: "https://images.unsplash.com/photo-1507003211169-0a1dd7228f2d?w=400&h=400&fit=crop",
    },
];

pub const VALUES: &[Value] = &[
    Value {
        icon: "💡",
        title: "Innovation",
        description: "We constantly push boundaries and embrace new technologies to deliver cutting-edge solutions.",
    },
    Value {
        icon: "🤝",
        title: "Collaboration",
        description: "We believe in working together with our clients as partners to achieve exceptional results.",
    },
    Value {
        icon: "❤️",
        title: "Integrity",
        description: "We maintain the highest standards of honesty, transparency, and ethical practices.",
    },
    Value {
        icon: "🚀",
        title: "Excellence",
        description: "We strive for perfection in every project, delivering quality that exceeds expectations.",
    },
];

pub const CONTACT_CHANNELS: &[ContactChannel] = &[
    ContactChannel {
        icon: "✉️",
        title: "Email",
        content: config::CONTACT_EMAIL,
        link: Some(config::CONTACT_EMAIL_LINK),
    },
    ContactChannel {
        icon: "📞",
        title: "Phone",
        content: config::CONTACT_PHONE,
        link: Some(config::CONTACT_PHONE_LINK),
    },
    ContactChannel {
        icon: "📍",
        title: "Address",
        content: config::CONTACT_ADDRESS,
        link: None,
    },
];

pub const SOCIAL_LINKS: &[SocialLink] = &[
    SocialLink { name: "LinkedIn", icon: "in", url: "https://linkedin.com" },
    SocialLink { name: "Twitter", icon: "𝕏", url: "https://twitter.com" },
    SocialLink { name: "Instagram", icon: "◎", url: "https://instagram.com" },
    SocialLink { name: "GitHub", icon: "⌥", url: "https://github.com" },
];

pub const OFFICE_HOURS: &[OfficeHours] = &[
    OfficeHours { days: "Monday - Friday", hours: "9:00 AM - 6:00 PM" },
    OfficeHours { days: "Saturday", hours: "10:00 AM - 4:00 PM" },
    OfficeHours { days: "Sunday", hours: "Closed" },
];

pub const OFFICE_IMAGE: &str =
    "https://images.unsplash.com/photo-1497366216548-37526070297c?w=1200&h=400&fit=crop";
pub const MAP_IMAGE: &str =
    "https://images.unsplash.com/photo-1524661135-423995f22d0b?w=600&h=400&fit=crop";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn email_channel_points_at_the_configured_address() {
        let email = CONTACT_CHANNELS
            .iter()
            .find(|channel| channel.title == "Email")
            .unwrap();
        assert_eq!(email.link, Some(format!("mailto:{}", config::CONTACT_EMAIL).as_str()));
        assert_eq!(config::CONTACT_EMAIL_LINK.strip_prefix("mailto:"), Some(config::CONTACT_EMAIL));
    }

    #[test]
    fn stats_are_valid_counter_targets() {
        for stat in STATS {
            assert!(stat.value >= 0, "{}", stat.label);
        }
    }
}
