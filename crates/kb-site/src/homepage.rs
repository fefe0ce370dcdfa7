//! Homepage content.
//!
//! All section content is static and ordered; [`Homepage`] bundles it with the
//! site identity and the optional feature card grid.

use crate::features::{FeatureSection, homepage_features};

/// Meta description of the homepage.
pub const PAGE_DESCRIPTION: &str = "Comprehensive guides for MikroTik, Proxmox, and advanced \
     networking solutions. Real-world procedures, tested in production.";

/// Site identity used by the homepage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteInfo {
    pub title: String,
    pub tagline: String,
    /// Include the feature card grid.
    pub feature_cards: bool,
}

impl Default for SiteInfo {
    fn default() -> Self {
        Self {
            title: "Network Knowledge Base".to_owned(),
            tagline: "Network Infrastructure Knowledge Base".to_owned(),
            feature_cards: true,
        }
    }
}

/// Visual weight of a call-to-action button.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonStyle {
    Primary,
    Secondary,
}

impl ButtonStyle {
    pub const fn class(self) -> &'static str {
        match self {
            Self::Primary => "primary-button",
            Self::Secondary => "secondary-button",
        }
    }
}

/// Hero banner button.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CallToAction {
    pub label: &'static str,
    pub route: &'static str,
    pub style: ButtonStyle,
}

/// Hero banner text and buttons.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeroContent {
    pub title_icon: &'static str,
    pub subtitle: &'static str,
    pub description: &'static str,
    pub actions: &'static [CallToAction],
}

/// Headline number under the hero text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Stat {
    pub value: &'static str,
    pub label: &'static str,
}

/// Technology badge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TechBadge {
    pub icon: &'static str,
    pub name: &'static str,
}

/// Topic tile in "What You'll Find Here".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TopicItem {
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

/// Linked card in "Quick Start".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuickLink {
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub route: &'static str,
}

/// Contact link in "Get in Touch".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContactLink {
    pub icon: &'static str,
    pub label: &'static str,
    pub href: &'static str,
    /// Open in a new tab.
    pub new_tab: bool,
}

pub static HERO: HeroContent = HeroContent {
    title_icon: "📚",
    subtitle: "Practical guides for Network Infrastructure, Virtualization & ISP Systems",
    description: "Expert-written documentation for deploying and managing MikroTik routers, \
                  Proxmox hypervisors, and advanced networking solutions.",
    actions: &[
        CallToAction {
            label: "📖 Explore Documentation",
            route: "/docs/intro",
            style: ButtonStyle::Primary,
        },
        CallToAction {
            label: "🔧 MikroTik Guides",
            route: "/docs/category/mikrotik",
            style: ButtonStyle::Secondary,
        },
    ],
};

pub static STATS: [Stat; 3] = [
    Stat {
        value: "27+",
        label: "MikroTik Guides",
    },
    Stat {
        value: "4+",
        label: "Proxmox Guides",
    },
    Stat {
        value: "100%",
        label: "Tested & Production Ready",
    },
];

pub static TECHNOLOGIES: [TechBadge; 8] = [
    TechBadge { icon: "🔵", name: "MikroTik" },
    TechBadge { icon: "🟪", name: "Proxmox" },
    TechBadge { icon: "🐘", name: "Docker" },
    TechBadge { icon: "🟢", name: "Linux" },
    TechBadge { icon: "📡", name: "RouterOS" },
    TechBadge { icon: "🔐", name: "RADIUS" },
    TechBadge { icon: "🌐", name: "VPN" },
    TechBadge { icon: "📊", name: "Monitoring" },
];

pub static TOPICS: [TopicItem; 6] = [
    TopicItem {
        icon: "🌐",
        title: "Network Routing & Security",
        description: "Policy-based routing, firewall rules, VPN setup, and advanced traffic management",
    },
    TopicItem {
        icon: "🔒",
        title: "ISP Infrastructure",
        description: "PPPoE, RADIUS authentication, access concentrators, and multi-WAN failover",
    },
    TopicItem {
        icon: "💻",
        title: "Virtualization",
        description: "Proxmox deployment, VM management, LXC containers, and cluster setup",
    },
    TopicItem {
        icon: "📊",
        title: "Monitoring & Alerts",
        description: "NetWatch alerts, Telegram notifications, Docker containers, and performance monitoring",
    },
    TopicItem {
        icon: "⚡",
        title: "Bandwidth Management",
        description: "QoS, bandwidth limiting, traffic shaping, and per-user prioritization",
    },
    TopicItem {
        icon: "🎯",
        title: "Automation",
        description: "Scripting solutions, captive portals, auto-configuration, and system administration",
    },
];

pub static QUICK_LINKS: [QuickLink; 4] = [
    QuickLink {
        icon: "📖",
        title: "Read the Introduction",
        description: "Get familiar with the knowledge base structure and navigation",
        route: "/docs/intro",
    },
    QuickLink {
        icon: "🔒",
        title: "Security & Firewall",
        description: "Secure your network with proven firewall configurations",
        route: "/docs/category/-security--firewall",
    },
    QuickLink {
        icon: "🌐",
        title: "Routing Guides",
        description: "Master traffic routing and policy-based forwarding",
        route: "/docs/category/-routing--pbr",
    },
    QuickLink {
        icon: "📝",
        title: "Latest Articles",
        description: "Stay updated with new guides and network engineering tips",
        route: "/blog",
    },
];

pub static CONTACT_LINKS: [ContactLink; 2] = [
    ContactLink {
        icon: "🐙",
        label: "GitHub",
        href: "https://github.com/Kintoyyy",
        new_tab: true,
    },
    ContactLink {
        icon: "✉️",
        label: "Email",
        href: "mailto:kent.oyyyyyyy@gmail.com",
        new_tab: false,
    },
];

/// Everything needed to render the homepage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Homepage {
    pub site: SiteInfo,
    pub hero: &'static HeroContent,
    pub stats: &'static [Stat],
    pub features: Option<FeatureSection<'static>>,
    pub technologies: &'static [TechBadge],
    pub topics: &'static [TopicItem],
    pub quick_links: &'static [QuickLink],
    pub contact_links: &'static [ContactLink],
}

impl Homepage {
    /// Assemble the homepage for `site`.
    pub fn new(site: SiteInfo) -> Self {
        let features = site.feature_cards.then(homepage_features);
        Self {
            site,
            hero: &HERO,
            stats: &STATS,
            features,
            technologies: &TECHNOLOGIES,
            topics: &TOPICS,
            quick_links: &QUICK_LINKS,
            contact_links: &CONTACT_LINKS,
        }
    }

    /// Document title: `"{title} - {tagline}"`. The default tagline is the
    /// fixed "Network Infrastructure Knowledge Base" suffix.
    pub fn page_title(&self) -> String {
        format!("{} - {}", self.site.title, self.site.tagline)
    }

    /// Hero heading text, prefixed with the hero icon.
    pub fn hero_title(&self) -> String {
        format!("{} {}", self.hero.title_icon, self.site.title)
    }
}
