//! Frontend Models
//!
//! UI-only records; domain records come from `scout_data`.

use crate::components::IconKind;

/// Static shortcut row on the search screen
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct QuickAction {
    pub title: &'static str,
    pub description: &'static str,
    pub icon: IconKind,
}

pub const QUICK_ACTIONS: [QuickAction; 3] = [
    QuickAction {
        title: "Nearby Resources",
        description: "Find resources within 5 miles",
        icon: IconKind::MapPin,
    },
    QuickAction {
        title: "Emergency Services",
        description: "24/7 crisis support",
        icon: IconKind::Bell,
    },
    QuickAction {
        title: "Veteran Services",
        description: "Resources for veterans",
        icon: IconKind::Sparkles,
    },
];
