//! Provider-agnostic scenarios shared by the in-memory and Neo4j suites.
//!
//! Each scenario starts from a cleaned graph, so the suites can run against a
//! shared Neo4j instance as long as tests are run with `--test-threads=1`.

#![allow(dead_code)]

use flight_network_repository::{FlightGraphError, FlightGraphService};
use flight_network_shared::{NewAirport, NewCity, NewFlight, MAX_FLIGHT_TIME_IN_MINUTES};

pub async fn add_city(service: &FlightGraphService, name: &str, country: &str) {
    service
        .register_city(NewCity {
            name: name.to_string(),
            country: country.to_string(),
        })
        .await
        .unwrap();
}

pub async fn add_airport(service: &FlightGraphService, city: &str, code: &str) {
    service
        .register_airport(
            city,
            NewAirport {
                code: code.to_string(),
                name: format!("{} Airport", code),
                number_of_terminals: 2,
                address: format!("{} Road 1", code),
            },
        )
        .await
        .unwrap();
}

pub async fn add_flight(
    service: &FlightGraphService,
    number: &str,
    from: &str,
    to: &str,
    price: f64,
    minutes: i64,
) {
    service
        .register_flight(NewFlight {
            number: number.to_string(),
            from_airport: from.to_string(),
            to_airport: to.to_string(),
            price,
            flight_time_in_minutes: minutes,
            operator: "airBaltic".to_string(),
        })
        .await
        .unwrap();
}

/// Cities A..E, each with one airport, linked by the chain A→B→C→D→E.
pub async fn seed_chain(service: &FlightGraphService) {
    for (city, code) in [
        ("Alpha", "AAA"),
        ("Bravo", "BBB"),
        ("Charlie", "CCC"),
        ("Delta", "DDD"),
        ("Echo", "EEE"),
    ] {
        add_city(service, city, "XX").await;
        add_airport(service, city, code).await;
    }
    add_flight(service, "F1", "AAA", "BBB", 10.0, 30).await;
    add_flight(service, "F2", "BBB", "CCC", 20.0, 40).await;
    add_flight(service, "F3", "CCC", "DDD", 30.0, 50).await;
    add_flight(service, "F4", "DDD", "EEE", 40.0, 60).await;
}

pub async fn cleanup_is_idempotent(service: &FlightGraphService) {
    service.cleanup().await.unwrap();
    add_city(service, "Vilnius", "LT").await;

    service.cleanup().await.unwrap();
    assert!(service.list_cities(None).await.unwrap().is_empty());

    service.cleanup().await.unwrap();
    assert!(service.list_cities(None).await.unwrap().is_empty());
}

pub async fn city_uniqueness(service: &FlightGraphService) {
    service.cleanup().await.unwrap();
    let city = NewCity {
        name: "Vilnius".to_string(),
        country: "LT".to_string(),
    };

    assert!(service.register_city(city.clone()).await.is_ok());
    assert!(matches!(
        service.register_city(city).await,
        Err(FlightGraphError::DuplicateEntity(_))
    ));

    let fetched = service.get_city("Vilnius").await.unwrap();
    assert_eq!(fetched.name, "Vilnius");
    assert_eq!(fetched.country, "LT");
}

pub async fn list_cities_filters_by_country(service: &FlightGraphService) {
    service.cleanup().await.unwrap();
    add_city(service, "Vilnius", "LT").await;
    add_city(service, "Kaunas", "LT").await;
    add_city(service, "Riga", "LV").await;

    assert_eq!(service.list_cities(None).await.unwrap().len(), 3);

    let lithuanian = service.list_cities(Some("LT")).await.unwrap();
    assert_eq!(lithuanian.len(), 2);
    assert!(lithuanian.iter().all(|c| c.country == "LT"));

    assert!(service.list_cities(Some("EE")).await.unwrap().is_empty());
}

pub async fn airport_requires_existing_city(service: &FlightGraphService) {
    service.cleanup().await.unwrap();

    let result = service
        .register_airport(
            "Atlantis",
            NewAirport {
                code: "ATL".to_string(),
                name: "Atlantis International".to_string(),
                number_of_terminals: 4,
                address: "Under the sea".to_string(),
            },
        )
        .await;

    assert!(matches!(result, Err(FlightGraphError::NotFound(_))));
}

pub async fn airport_codes_are_globally_unique(service: &FlightGraphService) {
    service.cleanup().await.unwrap();
    add_city(service, "Vilnius", "LT").await;
    add_city(service, "Riga", "LV").await;
    add_airport(service, "Vilnius", "VNO").await;

    let result = service
        .register_airport(
            "Riga",
            NewAirport {
                code: "VNO".to_string(),
                name: "Impostor".to_string(),
                number_of_terminals: 1,
                address: "Riga 1".to_string(),
            },
        )
        .await;
    assert!(matches!(result, Err(FlightGraphError::DuplicateEntity(_))));

    let details = service.get_airport("VNO").await.unwrap();
    assert_eq!(details.city, "Vilnius");
    assert_eq!(details.name, "VNO Airport");
    assert_eq!(details.number_of_terminals, 2);

    let airports = service.list_airports_in_city("Vilnius").await.unwrap();
    assert_eq!(airports.len(), 1);
    assert_eq!(airports[0].code, "VNO");
}

pub async fn flight_lookup_joins_endpoints(service: &FlightGraphService) {
    service.cleanup().await.unwrap();
    add_city(service, "Vilnius", "LT").await;
    add_city(service, "Riga", "LV").await;
    add_airport(service, "Vilnius", "VNO").await;
    add_airport(service, "Riga", "RIX").await;
    add_flight(service, "BT342", "VNO", "RIX", 79.99, 55).await;

    let flight = service.get_flight("BT342").await.unwrap();
    assert_eq!(flight.from_airport, "VNO");
    assert_eq!(flight.from_city, "Vilnius");
    assert_eq!(flight.to_airport, "RIX");
    assert_eq!(flight.to_city, "Riga");
    assert_eq!(flight.price, 79.99);
    assert_eq!(flight.flight_time_in_minutes, 55);
    assert_eq!(flight.operator, "airBaltic");

    assert!(matches!(
        service.get_flight("XX000").await,
        Err(FlightGraphError::NotFound(_))
    ));

    let missing_airport = service
        .register_flight(NewFlight {
            number: "BT343".to_string(),
            from_airport: "VNO".to_string(),
            to_airport: "TLL".to_string(),
            price: 50.0,
            flight_time_in_minutes: 45,
            operator: "airBaltic".to_string(),
        })
        .await;
    assert!(matches!(missing_airport, Err(FlightGraphError::NotFound(_))));
}

pub async fn duplicate_flight_numbers_are_allowed(service: &FlightGraphService) {
    service.cleanup().await.unwrap();
    add_city(service, "Vilnius", "LT").await;
    add_city(service, "Riga", "LV").await;
    add_airport(service, "Vilnius", "VNO").await;
    add_airport(service, "Riga", "RIX").await;
    add_flight(service, "BT100", "VNO", "RIX", 50.0, 55).await;
    add_flight(service, "BT100", "RIX", "VNO", 60.0, 50).await;

    assert!(service.get_flight("BT100").await.is_ok());
    assert_eq!(
        service.find_flights("Riga", "Vilnius").await.unwrap().len(),
        1
    );
}

pub async fn flights_are_directional(service: &FlightGraphService) {
    service.cleanup().await.unwrap();
    add_city(service, "Vilnius", "LT").await;
    add_city(service, "Riga", "LV").await;
    add_airport(service, "Vilnius", "VNO").await;
    add_airport(service, "Riga", "RIX").await;
    add_flight(service, "BT342", "VNO", "RIX", 80.0, 55).await;

    assert_eq!(
        service.find_flights("Vilnius", "Riga").await.unwrap().len(),
        1
    );
    assert!(matches!(
        service.find_flights("Riga", "Vilnius").await,
        Err(FlightGraphError::NotFound(_))
    ));

    add_flight(service, "BT343", "RIX", "VNO", 80.0, 55).await;
    let back = service.find_flights("Riga", "Vilnius").await.unwrap();
    assert_eq!(back.len(), 1);
    assert_eq!(back[0].flight_number, "BT343");
}

pub async fn search_is_bounded_to_three_segments(service: &FlightGraphService) {
    service.cleanup().await.unwrap();
    seed_chain(service).await;

    assert!(matches!(
        service.find_flights("Alpha", "Echo").await,
        Err(FlightGraphError::NotFound(_))
    ));

    let routes = service.find_flights("Alpha", "Delta").await.unwrap();
    assert_eq!(routes.len(), 1);
    assert_eq!(routes[0].stop_count, 2);
    assert_eq!(routes[0].flight_numbers, vec!["F1", "F2", "F3"]);
    assert_eq!(routes[0].aggregate_price, 60.0);
    assert_eq!(routes[0].aggregate_flight_time, 120);
}

pub async fn search_aggregates_segment_costs(service: &FlightGraphService) {
    service.cleanup().await.unwrap();
    add_city(service, "Vilnius", "LT").await;
    add_city(service, "Warsaw", "PL").await;
    add_city(service, "London", "GB").await;
    add_airport(service, "Vilnius", "VNO").await;
    add_airport(service, "Warsaw", "WAW").await;
    add_airport(service, "London", "LHR").await;
    add_flight(service, "LO772", "VNO", "WAW", 100.0, 60).await;
    add_flight(service, "LO281", "WAW", "LHR", 50.0, 90).await;

    let routes = service.find_flights("Vilnius", "London").await.unwrap();
    assert_eq!(routes.len(), 1);

    let route = &routes[0];
    assert_eq!(route.flight_number, "LO772");
    assert_eq!(route.from_airport, "VNO");
    assert_eq!(route.to_airport, "LHR");
    assert_eq!(route.aggregate_price, 150.0);
    assert_eq!(route.aggregate_flight_time, 150);
    assert_eq!(route.stop_count, 1);
}

pub async fn search_reports_missing_cities_and_airports(service: &FlightGraphService) {
    service.cleanup().await.unwrap();
    add_city(service, "Vilnius", "LT").await;
    add_airport(service, "Vilnius", "VNO").await;
    add_city(service, "Ghost Town", "XX").await;

    assert!(matches!(
        service.find_flights("Vilnius", "Atlantis").await,
        Err(FlightGraphError::NotFound(_))
    ));
    assert!(matches!(
        service.find_flights("Vilnius", "Ghost Town").await,
        Err(FlightGraphError::NotFound(_))
    ));
}

pub async fn long_flight_times_aggregate_without_overflow(service: &FlightGraphService) {
    service.cleanup().await.unwrap();
    for (city, code) in [("Alpha", "AAA"), ("Bravo", "BBB"), ("Charlie", "CCC"), ("Delta", "DDD")] {
        add_city(service, city, "XX").await;
        add_airport(service, city, code).await;
    }

    let rejected = service
        .register_flight(NewFlight {
            number: "L0".to_string(),
            from_airport: "AAA".to_string(),
            to_airport: "BBB".to_string(),
            price: 1.0,
            flight_time_in_minutes: i64::MAX / 2 + 1,
            operator: "airBaltic".to_string(),
        })
        .await;
    assert!(matches!(rejected, Err(FlightGraphError::InvalidInput(_))));

    add_flight(service, "L1", "AAA", "BBB", 1.0, MAX_FLIGHT_TIME_IN_MINUTES).await;
    add_flight(service, "L2", "BBB", "CCC", 1.0, MAX_FLIGHT_TIME_IN_MINUTES).await;
    add_flight(service, "L3", "CCC", "DDD", 1.0, MAX_FLIGHT_TIME_IN_MINUTES).await;

    let routes = service.find_flights("Alpha", "Delta").await.unwrap();
    assert_eq!(routes.len(), 1);
    assert_eq!(routes[0].aggregate_flight_time, 3 * MAX_FLIGHT_TIME_IN_MINUTES);
    assert_eq!(routes[0].stop_count, 2);
}
