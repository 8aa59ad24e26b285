use serde::Serialize;

use crate::units::DistanceUnit;

/// A well known route, used to pre-fill the distance of a flight
#[derive(Serialize, Debug, Clone, Copy, PartialEq)]
pub struct PopularRoute {
    pub name: &'static str,
    pub distance: f64,
    pub unit: DistanceUnit,
}

pub static POPULAR_ROUTES: &[PopularRoute] = &[
    route("New York - Los Angeles", 2445.0),
    route("London - Dubai", 3414.0),
    route("Paris - New York", 3635.0),
    route("Miami - London", 4414.0),
    route("Los Angeles - Tokyo", 5434.0),
    route("Sydney - Los Angeles", 7488.0),
];

const fn route(name: &'static str, distance: f64) -> PopularRoute {
    PopularRoute {
        name,
        distance,
        unit: DistanceUnit::Miles,
    }
}

/// Returns the popular route named `name`, ignoring case and spaces around the dash
pub fn popular_route(name: &str) -> Option<&'static PopularRoute> {
    let normalize = |s: &str| {
        s.split('-')
            .map(|part| part.trim().to_lowercase())
            .collect::<Vec<_>>()
            .join("-")
    };
    let name = normalize(name);
    POPULAR_ROUTES.iter().find(|route| normalize(route.name) == name)
}
