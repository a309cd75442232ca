/// Every screen the kiosk can show. Paths mirror the public site so
/// structured metadata and deep links stay consistent with it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Home,
    Services,
    Impact,
    Gallery,
    Contact,
    Donations,
    Camps,
    Social,
}

/// The primary navigation bar, in display order.
pub const NAV_ITEMS: [Route; 5] = [
    Route::Home,
    Route::Services,
    Route::Impact,
    Route::Gallery,
    Route::Contact,
];

impl Route {
    pub fn path(self) -> &'static str {
        match self {
            Route::Home => "/",
            Route::Services => "/services",
            Route::Impact => "/impact",
            Route::Gallery => "/gallery",
            Route::Contact => "/contact",
            Route::Donations => "/donations",
            Route::Camps => "/camp",
            Route::Social => "/social",
        }
    }

    pub fn from_path(path: &str) -> Option<Route> {
        match path {
            "/" => Some(Route::Home),
            "/services" => Some(Route::Services),
            "/impact" => Some(Route::Impact),
            "/gallery" => Some(Route::Gallery),
            "/contact" => Some(Route::Contact),
            "/donations" => Some(Route::Donations),
            "/camp" => Some(Route::Camps),
            "/social" => Some(Route::Social),
            _ => None,
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Route::Home => "Home",
            Route::Services => "Services",
            Route::Impact => "Our Impact",
            Route::Gallery => "Gallery",
            Route::Contact => "Contact",
            Route::Donations => "Donate",
            Route::Camps => "Camps",
            Route::Social => "Social",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [Route; 8] = [
        Route::Home,
        Route::Services,
        Route::Impact,
        Route::Gallery,
        Route::Contact,
        Route::Donations,
        Route::Camps,
        Route::Social,
    ];

    #[test]
    fn every_route_round_trips_through_its_path() {
        for route in ALL {
            assert_eq!(Route::from_path(route.path()), Some(route));
        }
    }

    #[test]
    fn unknown_paths_resolve_to_nothing() {
        assert_eq!(Route::from_path("/blog"), None);
        assert_eq!(Route::from_path(""), None);
        assert_eq!(Route::from_path("/gallery/"), None);
    }

    #[test]
    fn nav_bar_shows_the_five_primary_pages() {
        assert_eq!(NAV_ITEMS.len(), 5);
        assert!(!NAV_ITEMS.contains(&Route::Donations));
    }
}
