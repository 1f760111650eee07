// Cypher statements used by the Neo4j provider.
//
// Conditional creates use the FOREACH/CASE idiom so that the existence checks
// and the write happen in the same statement and every statement returns
// exactly one row describing what it did.

pub const INSERT_CITY: &str = "\
OPTIONAL MATCH (existing:City {name: $name, country: $country}) \
WITH count(existing) AS matches \
FOREACH (_ IN CASE WHEN matches = 0 THEN [1] ELSE [] END | \
    CREATE (:City {name: $name, country: $country})) \
RETURN matches = 0 AS created";

pub const LIST_CITIES: &str = "\
MATCH (c:City) \
WHERE $country IS NULL OR c.country = $country \
RETURN c.name AS name, c.country AS country";

pub const FIND_CITY: &str = "\
MATCH (c:City {name: $name}) \
RETURN c.name AS name, c.country AS country \
LIMIT 1";

pub const INSERT_AIRPORT: &str = "\
OPTIONAL MATCH (c:City {name: $city_name}) \
WITH c LIMIT 1 \
OPTIONAL MATCH (existing:Airport {code: $code}) \
WITH c, count(existing) AS taken \
FOREACH (_ IN CASE WHEN c IS NOT NULL AND taken = 0 THEN [1] ELSE [] END | \
    CREATE (c)-[:HAS_AIRPORT]->(:Airport {code: $code, name: $name, \
        numberOfTerminals: $number_of_terminals, address: $address})) \
RETURN c IS NOT NULL AS city_found, taken > 0 AS duplicate";

pub const LIST_AIRPORTS: &str = "\
MATCH (:City {name: $city_name})-[:HAS_AIRPORT]->(a:Airport) \
RETURN a.code AS code, a.name AS name, \
       a.numberOfTerminals AS number_of_terminals, a.address AS address";

pub const FIND_AIRPORT: &str = "\
MATCH (c:City)-[:HAS_AIRPORT]->(a:Airport {code: $code}) \
RETURN a.code AS code, c.name AS city, a.name AS name, \
       a.numberOfTerminals AS number_of_terminals, a.address AS address \
LIMIT 1";

pub const INSERT_FLIGHT: &str = "\
OPTIONAL MATCH (origin:Airport {code: $from_airport}) \
OPTIONAL MATCH (destination:Airport {code: $to_airport}) \
WITH origin, destination, origin IS NOT NULL AND destination IS NOT NULL AS linked \
FOREACH (_ IN CASE WHEN linked THEN [1] ELSE [] END | \
    CREATE (origin)-[:HAS_FLIGHT]->(:Flight {number: $number, price: $price, \
        flightTimeInMinutes: $flight_time_in_minutes, operator: $operator})-[:GOES_TO]->(destination)) \
RETURN linked AS created";

pub const FIND_FLIGHT: &str = "\
MATCH (from_city:City)-[:HAS_AIRPORT]->(origin:Airport)-[:HAS_FLIGHT]->(f:Flight {number: $number}), \
      (f)-[:GOES_TO]->(destination:Airport)<-[:HAS_AIRPORT]-(to_city:City) \
RETURN f.number AS number, origin.code AS from_airport, from_city.name AS from_city, \
       destination.code AS to_airport, to_city.name AS to_city, toFloat(f.price) AS price, \
       f.flightTimeInMinutes AS flight_time_in_minutes, f.operator AS operator \
LIMIT 1";

pub const CLEAR_GRAPH: &str = "MATCH (n) DETACH DELETE n";

/// Build the route search statement for at most `max_segments` flights.
///
/// Variable-length bounds cannot be parameterised in Cypher, so the bound is
/// rendered into the pattern. Each flight is two relationships
/// (`HAS_FLIGHT` then `GOES_TO`), and the relationship directions force the
/// path to alternate between airports and flights.
pub fn find_routes(max_segments: usize) -> String {
    format!(
        "MATCH (:City {{name: $from_city}})-[:HAS_AIRPORT]->(origin:Airport) \
         MATCH (:City {{name: $to_city}})-[:HAS_AIRPORT]->(destination:Airport) \
         MATCH path = (origin)-[:HAS_FLIGHT|GOES_TO*2..{max_relationships}]->(destination) \
         WITH origin, destination, \
              [n IN nodes(path) WHERE n:Airport] AS stops, \
              [n IN nodes(path) WHERE n:Flight] AS legs \
         WHERE ALL(i IN range(0, size(stops) - 2) WHERE NOT stops[i] IN stops[i + 1..]) \
         RETURN origin.code AS from_airport, destination.code AS to_airport, \
                [f IN legs | f.number] AS flight_numbers, \
                reduce(total = 0.0, f IN legs | total + toFloat(f.price)) AS aggregate_price, \
                reduce(total = 0, f IN legs | total + f.flightTimeInMinutes) AS aggregate_flight_time",
        max_relationships = max_segments * 2
    )
}
