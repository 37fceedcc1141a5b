use skyroute_lib::{
    Airport, AirportIndex, Error, FlightNetwork, GeoPosition, Graph, RouteQuery, NO_ROUTE,
};

/// Six-airport fixture: scheduled edges A->B=300, B->C=120, C->E=350,
/// D->E=420, F->E=300; perimeter pairs B<->D=70 and B<->F=80.
fn network() -> FlightNetwork {
    let airports = AirportIndex::new(
        ["A", "B", "C", "D", "E", "F"]
            .into_iter()
            .map(|code| Airport {
                iata: code.to_string(),
                icao: Some(format!("K{code}{code}{code}")),
                position: GeoPosition {
                    latitude: 1.0,
                    longitude: 1.0,
                },
            })
            .collect(),
    );

    let mut routes = Graph::new();
    routes.add_edge("A", "B", 300.0);
    routes.add_edge("B", "C", 120.0);
    routes.add_edge("C", "E", 350.0);
    routes.add_edge("D", "E", 420.0);
    routes.add_edge("F", "E", 300.0);

    let mut perimeter = Graph::new();
    for (a, b, d) in [("B", "D", 70.0), ("B", "F", 80.0)] {
        perimeter.add_edge(a, b, d);
        perimeter.add_edge(b, a, d);
    }

    FlightNetwork::new(airports, routes, perimeter)
}

#[test]
fn direct_flight() {
    let network = network();
    let route = network.shortest_route(&RouteQuery::new("A", "B")).unwrap();
    assert_eq!(route, "A->B");
}

#[test]
fn multi_leg_route_without_perimeter() {
    let network = network();
    let route = network.shortest_route(&RouteQuery::new("A", "E")).unwrap();
    assert_eq!(route, "A->B->C->E");
}

#[test]
fn perimeter_transfer_unlocks_a_cheaper_route() {
    let network = network();
    let query = RouteQuery::new("A", "E").with_perimeter(true);
    let plan = network.plan(&query).unwrap().expect("route exists");

    assert_eq!(plan.to_string(), "A->B=>F->E");
    assert_eq!(plan.distance, 680.0);
    assert_eq!(plan.flights(), 2);
    assert_eq!(plan.transfers(), 1);
}

#[test]
fn route_from_intermediate_airport() {
    let network = network();
    let route = network.shortest_route(&RouteQuery::new("B", "E")).unwrap();
    assert_eq!(route, "B->C->E");
}

#[test]
fn unreachable_destination_reports_no_route() {
    let network = network();
    let route = network.shortest_route(&RouteQuery::new("A", "F")).unwrap();
    assert_eq!(route, NO_ROUTE);
}

#[test]
fn cheapest_route_weight_beats_alternatives() {
    let network = network();
    let plan = network
        .plan(&RouteQuery::new("A", "E"))
        .unwrap()
        .expect("route exists");
    // A->B->C->E = 770, cheaper than A->B->D->E = 1140.
    assert_eq!(plan.distance, 770.0);
}

#[test]
fn leg_cap_excludes_longer_routes() {
    let network = network();
    let query = RouteQuery::new("A", "E").with_max_legs(2);
    assert_eq!(network.shortest_route(&query).unwrap(), NO_ROUTE);
}

#[test]
fn ground_transfers_do_not_count_against_the_leg_cap() {
    let network = network();
    let query = RouteQuery::new("A", "E")
        .with_max_legs(2)
        .with_perimeter(true);
    // Two flights plus one free ground transfer fit under the cap.
    assert_eq!(network.shortest_route(&query).unwrap(), "A->B=>F->E");
}

#[test]
fn ground_transfer_never_forms_the_last_segment() {
    let network = network();
    // D is only reachable via the B<->D perimeter pair.
    let query = RouteQuery::new("A", "D").with_perimeter(true);
    assert_eq!(network.shortest_route(&query).unwrap(), NO_ROUTE);
}

#[test]
fn ground_transfer_never_forms_the_first_segment() {
    let network = network();
    // B<->F is a perimeter pair, but a route must begin with a flight.
    let query = RouteQuery::new("B", "F").with_perimeter(true);
    assert_eq!(network.shortest_route(&query).unwrap(), NO_ROUTE);
}

#[test]
fn perimeter_disabled_routes_never_contain_ground_segments() {
    let network = network();
    for dest in ["B", "C", "E"] {
        let route = network.shortest_route(&RouteQuery::new("A", dest)).unwrap();
        assert!(!route.contains("=>"), "unexpected ground segment in {route}");
    }
}

#[test]
fn same_start_and_destination_reports_no_route() {
    let network = network();
    let route = network.shortest_route(&RouteQuery::new("A", "A")).unwrap();
    assert_eq!(route, NO_ROUTE);
}

#[test]
fn long_codes_resolve_before_the_search() {
    let network = network();
    let route = network
        .shortest_route(&RouteQuery::new("KAAA", "KEEE"))
        .unwrap();
    assert_eq!(route, "A->B->C->E");
}

#[test]
fn unknown_code_is_a_distinct_error() {
    let network = network();
    let err = network
        .shortest_route(&RouteQuery::new("ZZZZ", "E"))
        .unwrap_err();
    assert!(matches!(err, Error::UnknownAirport { .. }));
    assert!(err.to_string().contains("unknown airport code: ZZZZ"));
}
