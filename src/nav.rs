//! Navigation Destinations
//!
//! Routes reachable from the bottom navigation bar.

/// Which glyph a destination shows
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavIcon {
    Search,
    Locker,
    Map,
}

/// A bottom-bar destination
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavDestination {
    pub path: &'static str,
    pub label: &'static str,
    pub icon: NavIcon,
}

pub const HOME_PATH: &str = "/";
pub const LOCKER_PATH: &str = "/locker";
pub const MAP_PATH: &str = "/map";

/// Bottom-bar destinations, left to right
pub const DESTINATIONS: [NavDestination; 3] = [
    NavDestination { path: HOME_PATH, label: "Scout", icon: NavIcon::Search },
    NavDestination { path: LOCKER_PATH, label: "Locker", icon: NavIcon::Locker },
    NavDestination { path: MAP_PATH, label: "Map", icon: NavIcon::Map },
];

/// Exact-match only: `/map/details` does not activate `/map`
pub fn is_active(current_path: &str, destination_path: &str) -> bool {
    current_path == destination_path
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_match() {
        assert!(is_active("/", HOME_PATH));
        assert!(is_active("/locker", LOCKER_PATH));
        assert!(!is_active("/locker", HOME_PATH));
    }

    #[test]
    fn test_no_prefix_match() {
        assert!(!is_active("/map/details", MAP_PATH));
        assert!(!is_active("/map/", MAP_PATH));
    }

    #[test]
    fn test_at_most_one_destination_active() {
        for path in ["/", "/locker", "/map", "/elsewhere"] {
            let active = DESTINATIONS.iter().filter(|d| is_active(path, d.path)).count();
            assert!(active <= 1, "{} activated {} destinations", path, active);
        }
    }
}
