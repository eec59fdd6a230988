//! Static landing page content.

use crate::types::{AccentColor, FeatureCard, FooterColumn, MenuId, NavLink, NavMenu, Slide, Stat};

pub const SLIDES: &[Slide] = &[
    Slide {
        id: 1,
        title: "Banking that moves with you",
        subtitle: "Meridian Everyday Checking",
        description: "No monthly fees, early direct deposit and instant alerts on every card swipe.",
        image: "💳",
        bg_color: "slide-bg-ocean",
        accent: AccentColor::Blue,
        cta_label: "Open an account",
        cta_href: "/login",
    },
    Slide {
        id: 2,
        title: "Grow your savings faster",
        subtitle: "High-Yield Savings",
        description: "Earn a competitive rate with automatic round-ups and goal tracking built in.",
        image: "🌱",
        bg_color: "slide-bg-forest",
        accent: AccentColor::Emerald,
        cta_label: "Start saving",
        cta_href: "/login",
    },
    Slide {
        id: 3,
        title: "A home loan without the maze",
        subtitle: "Meridian Mortgages",
        description: "Get pre-approved online in minutes and talk to a local advisor when you are ready.",
        image: "🏡",
        bg_color: "slide-bg-dusk",
        accent: AccentColor::Violet,
        cta_label: "Check your rate",
        cta_href: "/login",
    },
    Slide {
        id: 4,
        title: "Run your business, not your bank",
        subtitle: "Business Banking",
        description: "Payroll, invoicing and merchant services that plug straight into your books.",
        image: "📈",
        bg_color: "slide-bg-sunrise",
        accent: AccentColor::Amber,
        cta_label: "Explore business",
        cta_href: "/login",
    },
];

const PERSONAL_LINKS: &[NavLink] = &[
    NavLink {
        label: "Checking",
        description: "Everyday accounts with no monthly fees",
        href: "/login",
    },
    NavLink {
        label: "Savings",
        description: "High-yield savings and CDs",
        href: "/login",
    },
    NavLink {
        label: "Credit Cards",
        description: "Cash back, travel and balance transfer cards",
        href: "/login",
    },
    NavLink {
        label: "Mortgages",
        description: "Buy, refinance or tap your equity",
        href: "/login",
    },
];

const BUSINESS_LINKS: &[NavLink] = &[
    NavLink {
        label: "Business Checking",
        description: "Accounts sized for how you operate",
        href: "/login",
    },
    NavLink {
        label: "Merchant Services",
        description: "Accept cards in store and online",
        href: "/login",
    },
    NavLink {
        label: "Business Loans",
        description: "Lines of credit and equipment financing",
        href: "/login",
    },
];

const WEALTH_LINKS: &[NavLink] = &[
    NavLink {
        label: "Investing",
        description: "Self-directed and managed portfolios",
        href: "/login",
    },
    NavLink {
        label: "Retirement",
        description: "IRAs, rollovers and planning tools",
        href: "/login",
    },
    NavLink {
        label: "Private Banking",
        description: "Dedicated advisors for complex finances",
        href: "/login",
    },
];

pub const NAV_MENUS: &[NavMenu] = &[
    NavMenu {
        id: MenuId::Personal,
        links: PERSONAL_LINKS,
    },
    NavMenu {
        id: MenuId::Business,
        links: BUSINESS_LINKS,
    },
    NavMenu {
        id: MenuId::Wealth,
        links: WEALTH_LINKS,
    },
];

pub const FEATURES: &[FeatureCard] = &[
    FeatureCard {
        icon: "🔒",
        title: "Bank-grade security",
        description: "Two-factor sign in, card locking and real-time fraud monitoring on every account.",
    },
    FeatureCard {
        icon: "📱",
        title: "Mobile first",
        description: "Deposit checks, send money and manage cards from the app in a few taps.",
    },
    FeatureCard {
        icon: "⚡",
        title: "Instant transfers",
        description: "Move money between Meridian accounts and to friends without waiting days.",
    },
    FeatureCard {
        icon: "🤝",
        title: "People who answer",
        description: "Talk to a real banker around the clock, by phone or in any branch.",
    },
];

pub const STATS: &[Stat] = &[
    Stat {
        value: "2.4M",
        label: "customers served",
    },
    Stat {
        value: "$38B",
        label: "in deposits",
    },
    Stat {
        value: "450+",
        label: "branches nationwide",
    },
    Stat {
        value: "4.8★",
        label: "app store rating",
    },
];

pub const FOOTER_COLUMNS: &[FooterColumn] = &[
    FooterColumn {
        heading: "Products",
        links: &[
            NavLink {
                label: "Checking",
                description: "",
                href: "/login",
            },
            NavLink {
                label: "Savings",
                description: "",
                href: "/login",
            },
            NavLink {
                label: "Credit Cards",
                description: "",
                href: "/login",
            },
        ],
    },
    FooterColumn {
        heading: "Company",
        links: &[
            NavLink {
                label: "About us",
                description: "",
                href: "/about",
            },
            NavLink {
                label: "Careers",
                description: "",
                href: "/careers",
            },
            NavLink {
                label: "Newsroom",
                description: "",
                href: "/news",
            },
        ],
    },
    FooterColumn {
        heading: "Support",
        links: &[
            NavLink {
                label: "Help center",
                description: "",
                href: "/help",
            },
            NavLink {
                label: "Find a branch",
                description: "",
                href: "/branches",
            },
            NavLink {
                label: "Security center",
                description: "",
                href: "/security",
            },
        ],
    },
];

/// Menu definition for `id`.
pub fn nav_menu(id: MenuId) -> Option<&'static NavMenu> {
    NAV_MENUS.iter().find(|menu| menu.id == id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn slide_ids_are_unique_and_ordered() {
        let ids: Vec<u32> = SLIDES.iter().map(|slide| slide.id).collect();
        let unique: HashSet<u32> = ids.iter().copied().collect();
        assert_eq!(unique.len(), ids.len());
        assert!(ids.windows(2).all(|pair| pair[0] < pair[1]));
    }

    #[test]
    fn every_menu_id_has_links() {
        for id in MenuId::ALL {
            let menu = nav_menu(id).expect("menu defined");
            assert!(!menu.links.is_empty(), "{id} has no links");
        }
    }

    #[test]
    fn slides_use_distinct_accents() {
        let accents: HashSet<_> = SLIDES.iter().map(|slide| slide.accent).collect();
        assert_eq!(accents.len(), SLIDES.len());
    }
}
