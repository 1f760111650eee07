//! Itineraries produced by route search.

use serde::{Deserialize, Serialize};

/// Maximum number of flight segments a route search will traverse.
///
/// Paths longer than this are never expanded, which keeps the cost of a
/// search bounded on dense graphs.
pub const MAX_FLIGHT_SEGMENTS: usize = 3;

/// Largest accepted flight time, chosen so that the aggregate of a
/// `MAX_FLIGHT_SEGMENTS` route always fits in an `i64`.
pub const MAX_FLIGHT_TIME_IN_MINUTES: i64 = i64::MAX / MAX_FLIGHT_SEGMENTS as i64;

/// A chain of one or more flights connecting two cities.
///
/// Prices and flight times are summed over every segment. `stop_count` is
/// the number of intermediate airports, i.e. segments minus one.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Route {
    /// Number of the first flight of the itinerary.
    pub flight_number: String,
    /// Numbers of all flights, in travel order.
    pub flight_numbers: Vec<String>,
    pub from_airport: String,
    pub to_airport: String,
    pub aggregate_price: f64,
    pub aggregate_flight_time: i64,
    pub stop_count: usize,
}

impl Route {
    /// Build a route from its ordered segments of `(number, price, minutes)`.
    ///
    /// Returns `None` for an empty segment list, or when the summed flight
    /// time overflows.
    pub fn from_segments<'a, I>(from_airport: &str, to_airport: &str, segments: I) -> Option<Self>
    where
        I: IntoIterator<Item = (&'a str, f64, i64)>,
    {
        let mut flight_numbers = Vec::new();
        let mut aggregate_price = 0.0;
        let mut aggregate_flight_time: i64 = 0;

        for (number, price, minutes) in segments {
            flight_numbers.push(number.to_string());
            aggregate_price += price;
            aggregate_flight_time = aggregate_flight_time.checked_add(minutes)?;
        }

        let flight_number = flight_numbers.first()?.clone();
        let stop_count = flight_numbers.len() - 1;

        Some(Self {
            flight_number,
            flight_numbers,
            from_airport: from_airport.to_string(),
            to_airport: to_airport.to_string(),
            aggregate_price,
            aggregate_flight_time,
            stop_count,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_segments_sums_costs() {
        let route =
            Route::from_segments("VNO", "LHR", [("LY100", 100.0, 60), ("BA50", 50.0, 90)]).unwrap();

        assert_eq!(route.flight_number, "LY100");
        assert_eq!(route.flight_numbers, vec!["LY100", "BA50"]);
        assert_eq!(route.aggregate_price, 150.0);
        assert_eq!(route.aggregate_flight_time, 150);
        assert_eq!(route.stop_count, 1);
    }

    #[test]
    fn test_from_segments_empty_is_none() {
        assert!(Route::from_segments("VNO", "LHR", Vec::<(&str, f64, i64)>::new()).is_none());
    }

    #[test]
    fn test_from_segments_overflowing_time_is_none() {
        let minutes = i64::MAX / 2 + 1;
        assert!(Route::from_segments("AAA", "CCC", [("F1", 1.0, minutes), ("F2", 1.0, minutes)]).is_none());
    }

    #[test]
    fn test_max_flight_time_fits_longest_route() {
        let legs = vec![("F", 1.0, MAX_FLIGHT_TIME_IN_MINUTES); MAX_FLIGHT_SEGMENTS];
        let route = Route::from_segments("AAA", "DDD", legs).unwrap();
        assert_eq!(route.stop_count, MAX_FLIGHT_SEGMENTS - 1);
    }

    #[test]
    fn test_route_serializes_camel_case() {
        let route = Route::from_segments("VNO", "RIX", [("BT301", 79.5, 55)]).unwrap();
        let json = serde_json::to_value(&route).unwrap();

        assert_eq!(json["flightNumber"], "BT301");
        assert_eq!(json["aggregatePrice"], 79.5);
        assert_eq!(json["aggregateFlightTime"], 55);
        assert_eq!(json["stopCount"], 0);
    }
}
