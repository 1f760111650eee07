//! Bounded-depth route enumeration over an in-memory adjacency list.
//!
//! Walks outgoing flights depth-first from every origin airport, never
//! expanding a path past `max_segments` flights and never revisiting an
//! airport already on the current path.

use std::collections::{HashMap, HashSet};

use flight_network_shared::Route;

/// One outgoing flight edge of an airport.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Segment<'a> {
    pub number: &'a str,
    pub to: &'a str,
    pub price: f64,
    pub minutes: i64,
}

/// Outgoing flights keyed by origin airport code, in registration order.
pub(crate) type Adjacency<'a> = HashMap<&'a str, Vec<Segment<'a>>>;

/// Enumerate every simple path of 1..=`max_segments` flights from any origin
/// to any destination.
///
/// A path may pass through a destination airport and continue to another
/// one; each qualifying prefix is reported as its own route.
pub(crate) fn find_paths<'a>(
    adjacency: &Adjacency<'a>,
    origins: &[&'a str],
    destinations: &HashSet<&'a str>,
    max_segments: usize,
) -> Vec<Route> {
    let mut routes = Vec::new();
    if max_segments == 0 {
        return routes;
    }

    for &origin in origins {
        let mut on_path = vec![origin];
        let mut segments = Vec::with_capacity(max_segments);
        walk(
            adjacency,
            origin,
            destinations,
            max_segments,
            &mut on_path,
            &mut segments,
            &mut routes,
        );
    }

    routes
}

fn walk<'a>(
    adjacency: &Adjacency<'a>,
    origin: &'a str,
    destinations: &HashSet<&'a str>,
    max_segments: usize,
    on_path: &mut Vec<&'a str>,
    segments: &mut Vec<Segment<'a>>,
    routes: &mut Vec<Route>,
) {
    let Some(current) = on_path.last().copied() else {
        return;
    };
    let Some(outgoing) = adjacency.get(current) else {
        return;
    };

    for segment in outgoing {
        if on_path.contains(&segment.to) {
            continue;
        }

        segments.push(*segment);
        on_path.push(segment.to);

        if destinations.contains(segment.to) {
            let legs = segments.iter().map(|s| (s.number, s.price, s.minutes));
            if let Some(route) = Route::from_segments(origin, segment.to, legs) {
                routes.push(route);
            }
        }

        if segments.len() < max_segments {
            walk(
                adjacency,
                origin,
                destinations,
                max_segments,
                on_path,
                segments,
                routes,
            );
        }

        on_path.pop();
        segments.pop();
    }
}
