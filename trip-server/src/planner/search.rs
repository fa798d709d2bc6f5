//! Best-first route search.
//!
//! Finds the best route between two cities for a given priority, exploring
//! the network with a min-heap keyed by the accumulated priority score.

use std::cmp::Reverse;
use std::collections::{BinaryHeap, HashMap};

use rand::RngExt;
use tracing::{debug, trace};

use crate::domain::{
    CityName, DomainError, Itinerary, Leg, Priority, RouteQuery, Traffic,
};
use crate::network::TransportNetwork;

use super::conditions::TravelConditions;
use super::config::PlannerConfig;

/// Error from route planning.
#[derive(Debug, Clone, thiserror::Error)]
pub enum PlanError {
    /// A queried city is not in the directory
    #[error("unknown city: {0}")]
    UnknownCity(CityName),

    /// Departure and destination are the same city
    #[error("departure and destination cities cannot be the same")]
    SameCity,

    /// The cities are in the directory but not connected
    #[error("no route available from {from} to {to}")]
    NoRouteFound { from: CityName, to: CityName },

    /// A found route failed domain validation
    #[error("internal planning error: {0}")]
    Internal(#[from] DomainError),
}

/// Samples the traffic condition for a link.
///
/// This abstraction keeps the search deterministic under test.
pub trait TrafficModel {
    /// Sample the traffic condition for one link traversal.
    fn sample(&self, conditions: &TravelConditions) -> Traffic;
}

/// Production traffic model: uniform over the three conditions.
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomTraffic;

impl TrafficModel for RandomTraffic {
    fn sample(&self, _conditions: &TravelConditions) -> Traffic {
        Traffic::ALL[rand::rng().random_range(0..Traffic::ALL.len())]
    }
}

/// A partial route on the search frontier.
#[derive(Debug, Clone)]
struct Candidate {
    /// Accumulated priority score (lower is better).
    score: f64,

    /// City this partial route has reached.
    city: CityName,

    /// Legs travelled so far.
    legs: Vec<Leg>,
}

impl Candidate {
    /// Whether `city` already appears on this partial route.
    fn visits(&self, departure: &CityName, city: &CityName) -> bool {
        city == departure || self.legs.iter().any(|leg| &leg.end == city)
    }
}

impl PartialEq for Candidate {
    fn eq(&self, other: &Self) -> bool {
        self.score == other.score
    }
}

impl Eq for Candidate {}

impl PartialOrd for Candidate {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Candidate {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.score.total_cmp(&other.score)
    }
}

/// Route planner over a transport network.
pub struct Planner<'a, T: TrafficModel> {
    network: &'a TransportNetwork,
    config: &'a PlannerConfig,
    traffic: &'a T,
}

impl<'a, T: TrafficModel> Planner<'a, T> {
    /// Create a new planner.
    pub fn new(network: &'a TransportNetwork, config: &'a PlannerConfig, traffic: &'a T) -> Self {
        Self {
            network,
            config,
            traffic,
        }
    }

    /// Validate a query against the directory.
    fn validate(&self, query: &RouteQuery) -> Result<(), PlanError> {
        if query.departure == query.destination {
            return Err(PlanError::SameCity);
        }
        if !self.network.contains(&query.departure) {
            return Err(PlanError::UnknownCity(query.departure.clone()));
        }
        if !self.network.contains(&query.destination) {
            return Err(PlanError::UnknownCity(query.destination.clone()));
        }
        Ok(())
    }

    /// Find the best route for the query under the given conditions.
    ///
    /// Explores partial routes best-score-first; the first candidate popped
    /// at the destination is the best route. Traffic is sampled per link
    /// traversal, so repeated calls may produce different itineraries.
    pub fn plan(
        &self,
        query: &RouteQuery,
        conditions: &TravelConditions,
    ) -> Result<Itinerary, PlanError> {
        self.validate(query)?;

        let mut frontier: BinaryHeap<Reverse<Candidate>> = BinaryHeap::new();
        frontier.push(Reverse(Candidate {
            score: 0.0,
            city: query.departure.clone(),
            legs: Vec::new(),
        }));

        // Best score at which each city has been settled; candidates that
        // arrive no better are skipped.
        let mut settled: HashMap<CityName, f64> = HashMap::new();
        let mut explored = 0usize;

        while let Some(Reverse(candidate)) = frontier.pop() {
            explored += 1;

            if candidate.city == query.destination {
                debug!(
                    explored,
                    from = %query.departure,
                    to = %query.destination,
                    priority = %query.priority,
                    legs = candidate.legs.len(),
                    "route found"
                );
                return Ok(Itinerary::new(candidate.legs)?);
            }

            if settled
                .get(&candidate.city)
                .is_some_and(|&best| best <= candidate.score)
            {
                continue;
            }
            settled.insert(candidate.city.clone(), candidate.score);

            let Some(links) = self.network.links_from(&candidate.city) else {
                continue;
            };

            for link in links {
                if candidate.visits(&query.departure, &link.to) {
                    continue;
                }

                let traffic = self.traffic.sample(conditions);
                let factor = self.config.traffic_factor(traffic, conditions);
                let discount = self.config.cost_discount(conditions);

                let cost = round2(link.base_cost * discount * link.comfort.price_factor());
                let adjusted_duration = link.base_duration_mins * factor;

                let step = match query.priority {
                    Priority::Cost => cost,
                    Priority::Time => adjusted_duration,
                    Priority::Comfort => {
                        self.config.inverted_comfort(link.comfort) * self.config.comfort_weight
                            + adjusted_duration * self.config.comfort_time_weight
                    }
                };

                trace!(
                    from = %candidate.city,
                    to = %link.to,
                    %traffic,
                    step,
                    "expanding link"
                );

                let mut legs = candidate.legs.clone();
                legs.push(Leg {
                    start: candidate.city.clone(),
                    end: link.to.clone(),
                    comfort: link.comfort,
                    cost,
                    duration_mins: adjusted_duration.round() as u32,
                    traffic,
                });

                frontier.push(Reverse(Candidate {
                    score: candidate.score + step,
                    city: link.to.clone(),
                    legs,
                }));
            }
        }

        debug!(
            explored,
            from = %query.departure,
            to = %query.destination,
            "no route found"
        );
        Err(PlanError::NoRouteFound {
            from: query.departure.clone(),
            to: query.destination.clone(),
        })
    }
}

/// Round to 2 decimal places (currency).
fn round2(x: f64) -> f64 {
    (x * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ComfortClass;

    const WEEKDAY: TravelConditions = TravelConditions {
        weekend: false,
        rush_hour: false,
    };
    const WEEKEND: TravelConditions = TravelConditions {
        weekend: true,
        rush_hour: false,
    };
    const RUSH: TravelConditions = TravelConditions {
        weekend: false,
        rush_hour: true,
    };

    /// Traffic model that always reports the same condition.
    struct FixedTraffic(Traffic);

    impl TrafficModel for FixedTraffic {
        fn sample(&self, _conditions: &TravelConditions) -> Traffic {
            self.0
        }
    }

    fn city(s: &str) -> CityName {
        CityName::parse(s).unwrap()
    }

    fn query(from: &str, to: &str, priority: Priority) -> RouteQuery {
        RouteQuery::new(city(from), city(to), priority)
    }

    /// Network builder shorthand: cities plus (start, end, class, cost, mins).
    fn network(
        cities: &[&str],
        links: &[(&str, &str, ComfortClass, f64, f64)],
    ) -> TransportNetwork {
        let mut network = TransportNetwork::new();
        for name in cities {
            network.add_city(city(name)).unwrap();
        }
        for &(start, end, comfort, cost, mins) in links {
            network
                .add_link(&city(start), &city(end), comfort, cost, mins)
                .unwrap();
        }
        network
    }

    #[test]
    fn direct_route_found() {
        let net = network(
            &["Delhi", "Mumbai"],
            &[("Delhi", "Mumbai", ComfortClass::Economy, 1000.0, 100.0)],
        );
        let config = PlannerConfig::default();
        let traffic = FixedTraffic(Traffic::Moderate);
        let planner = Planner::new(&net, &config, &traffic);

        let itinerary = planner
            .plan(&query("Delhi", "Mumbai", Priority::Time), &WEEKDAY)
            .unwrap();

        assert_eq!(itinerary.departure(), &city("Delhi"));
        assert_eq!(itinerary.destination(), &city("Mumbai"));
        assert_eq!(itinerary.leg_count(), 1);

        // Moderate weekday traffic: factor 1.0, no discount
        let leg = &itinerary.legs()[0];
        assert_eq!(leg.cost, 1000.0);
        assert_eq!(leg.duration_mins, 100);
        assert_eq!(leg.traffic, Traffic::Moderate);
    }

    #[test]
    fn same_city_rejected() {
        let net = network(&["Delhi", "Mumbai"], &[]);
        let config = PlannerConfig::default();
        let traffic = FixedTraffic(Traffic::Low);
        let planner = Planner::new(&net, &config, &traffic);

        let result = planner.plan(&query("Delhi", "delhi", Priority::Time), &WEEKDAY);
        assert!(matches!(result, Err(PlanError::SameCity)));
    }

    #[test]
    fn unknown_city_rejected() {
        let net = network(&["Delhi", "Mumbai"], &[]);
        let config = PlannerConfig::default();
        let traffic = FixedTraffic(Traffic::Low);
        let planner = Planner::new(&net, &config, &traffic);

        let result = planner.plan(&query("Delhi", "Pune", Priority::Time), &WEEKDAY);
        assert!(matches!(result, Err(PlanError::UnknownCity(_))));

        let result = planner.plan(&query("Pune", "Delhi", Priority::Time), &WEEKDAY);
        assert!(matches!(result, Err(PlanError::UnknownCity(_))));
    }

    #[test]
    fn disconnected_cities_have_no_route() {
        let net = network(
            &["Delhi", "Mumbai", "Chennai", "Bangalore"],
            &[("Delhi", "Mumbai", ComfortClass::Economy, 1.0, 1.0)],
        );
        let config = PlannerConfig::default();
        let traffic = FixedTraffic(Traffic::Low);
        let planner = Planner::new(&net, &config, &traffic);

        let result = planner.plan(&query("Delhi", "Chennai", Priority::Time), &WEEKDAY);
        assert!(matches!(result, Err(PlanError::NoRouteFound { .. })));
    }

    #[test]
    fn cost_priority_takes_cheaper_path() {
        // Direct link is expensive; the two-leg path is much cheaper.
        let net = network(
            &["Delhi", "Mumbai", "Bhopal"],
            &[
                ("Delhi", "Mumbai", ComfortClass::Economy, 1000.0, 10.0),
                ("Delhi", "Bhopal", ComfortClass::Economy, 200.0, 400.0),
                ("Bhopal", "Mumbai", ComfortClass::Economy, 200.0, 400.0),
            ],
        );
        let config = PlannerConfig::default();
        let traffic = FixedTraffic(Traffic::Moderate);
        let planner = Planner::new(&net, &config, &traffic);

        let itinerary = planner
            .plan(&query("Delhi", "Mumbai", Priority::Cost), &WEEKDAY)
            .unwrap();

        assert_eq!(
            itinerary.route(),
            vec![city("Delhi"), city("Bhopal"), city("Mumbai")]
        );
        assert_eq!(itinerary.total_cost(), 400.0);
    }

    #[test]
    fn time_priority_takes_faster_path() {
        // Same shape, but now the direct link is fast and cheapness loses.
        let net = network(
            &["Delhi", "Mumbai", "Bhopal"],
            &[
                ("Delhi", "Mumbai", ComfortClass::Economy, 1000.0, 10.0),
                ("Delhi", "Bhopal", ComfortClass::Economy, 200.0, 400.0),
                ("Bhopal", "Mumbai", ComfortClass::Economy, 200.0, 400.0),
            ],
        );
        let config = PlannerConfig::default();
        let traffic = FixedTraffic(Traffic::Moderate);
        let planner = Planner::new(&net, &config, &traffic);

        let itinerary = planner
            .plan(&query("Delhi", "Mumbai", Priority::Time), &WEEKDAY)
            .unwrap();

        assert_eq!(itinerary.route(), vec![city("Delhi"), city("Mumbai")]);
        assert_eq!(itinerary.total_time_mins(), 10);
    }

    #[test]
    fn comfort_priority_takes_comfier_path() {
        // Direct Economy leg vs two short Premium legs.
        // Economy direct: (5-1)*0.8 + 10*0.2 = 5.2
        // Premium legs:   2 * ((5-4)*0.8 + 5*0.2) = 3.6
        let net = network(
            &["Delhi", "Mumbai", "Bhopal"],
            &[
                ("Delhi", "Mumbai", ComfortClass::Economy, 100.0, 10.0),
                ("Delhi", "Bhopal", ComfortClass::Premium, 100.0, 5.0),
                ("Bhopal", "Mumbai", ComfortClass::Premium, 100.0, 5.0),
            ],
        );
        let config = PlannerConfig::default();
        let traffic = FixedTraffic(Traffic::Moderate);
        let planner = Planner::new(&net, &config, &traffic);

        let itinerary = planner
            .plan(&query("Delhi", "Mumbai", Priority::Comfort), &WEEKDAY)
            .unwrap();

        assert_eq!(
            itinerary.route(),
            vec![city("Delhi"), city("Bhopal"), city("Mumbai")]
        );
        assert_eq!(itinerary.comfort_rating(), 4.0);
    }

    #[test]
    fn rush_hour_stretches_high_traffic() {
        let net = network(
            &["Delhi", "Mumbai"],
            &[("Delhi", "Mumbai", ComfortClass::Economy, 1000.0, 100.0)],
        );
        let config = PlannerConfig::default();
        let traffic = FixedTraffic(Traffic::High);
        let planner = Planner::new(&net, &config, &traffic);

        let itinerary = planner
            .plan(&query("Delhi", "Mumbai", Priority::Time), &RUSH)
            .unwrap();
        assert_eq!(itinerary.legs()[0].duration_mins, 160);

        let itinerary = planner
            .plan(&query("Delhi", "Mumbai", Priority::Time), &WEEKDAY)
            .unwrap();
        assert_eq!(itinerary.legs()[0].duration_mins, 130);
    }

    #[test]
    fn weekend_discount_applies_to_cost() {
        let net = network(
            &["Delhi", "Mumbai"],
            &[("Delhi", "Mumbai", ComfortClass::Standard, 1000.0, 100.0)],
        );
        let config = PlannerConfig::default();
        let traffic = FixedTraffic(Traffic::Moderate);
        let planner = Planner::new(&net, &config, &traffic);

        // 1000 * 0.9 (weekend) * 1.3 (Standard) = 1170
        let itinerary = planner
            .plan(&query("Delhi", "Mumbai", Priority::Cost), &WEEKEND)
            .unwrap();
        assert_eq!(itinerary.legs()[0].cost, 1170.0);

        // Weekday: 1000 * 1.3 = 1300
        let itinerary = planner
            .plan(&query("Delhi", "Mumbai", Priority::Cost), &WEEKDAY)
            .unwrap();
        assert_eq!(itinerary.legs()[0].cost, 1300.0);
    }

    #[test]
    fn routes_never_revisit_a_city() {
        // Dense little graph; the route must stay simple.
        let net = network(
            &["A1", "B1", "C1", "D1"],
            &[
                ("A1", "B1", ComfortClass::Economy, 10.0, 10.0),
                ("A1", "C1", ComfortClass::Economy, 10.0, 10.0),
                ("B1", "C1", ComfortClass::Economy, 10.0, 10.0),
                ("B1", "D1", ComfortClass::Economy, 10.0, 10.0),
                ("C1", "D1", ComfortClass::Economy, 10.0, 10.0),
            ],
        );
        let config = PlannerConfig::default();
        let traffic = FixedTraffic(Traffic::Moderate);
        let planner = Planner::new(&net, &config, &traffic);

        let itinerary = planner
            .plan(&query("A1", "D1", Priority::Time), &WEEKDAY)
            .unwrap();

        let route = itinerary.route();
        let mut seen = std::collections::HashSet::new();
        for stop in &route {
            assert!(seen.insert(stop.clone()), "route revisits {stop}");
        }
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use crate::domain::ComfortClass;
    use crate::network::fully_connected_with;
    use proptest::prelude::*;

    const SEED_CITIES: &[&str] = &[
        "Coimbatore",
        "Palakkad",
        "Chennai",
        "Bangalore",
        "Mumbai",
        "Delhi",
    ];

    struct FixedTraffic(Traffic);

    impl TrafficModel for FixedTraffic {
        fn sample(&self, _conditions: &TravelConditions) -> Traffic {
            self.0
        }
    }

    fn priority_strategy() -> impl Strategy<Value = Priority> {
        prop_oneof![
            Just(Priority::Time),
            Just(Priority::Cost),
            Just(Priority::Comfort),
        ]
    }

    proptest! {
        /// Any valid pair yields a route from departure to destination whose
        /// totals equal the leg sums.
        #[test]
        fn plan_satisfies_contract(
            from_idx in 0usize..6,
            to_idx in 0usize..6,
            class_idx in 0u8..4,
            priority in priority_strategy(),
        ) {
            prop_assume!(from_idx != to_idx);

            let class = ComfortClass::ALL[class_idx as usize];
            let net = fully_connected_with(SEED_CITIES, |_, _| class).unwrap();
            let config = PlannerConfig::default();
            let traffic = FixedTraffic(Traffic::Moderate);
            let planner = Planner::new(&net, &config, &traffic);

            let conditions = TravelConditions { weekend: false, rush_hour: false };
            let query = RouteQuery::new(
                CityName::parse(SEED_CITIES[from_idx]).unwrap(),
                CityName::parse(SEED_CITIES[to_idx]).unwrap(),
                priority,
            );

            let itinerary = planner.plan(&query, &conditions).unwrap();

            let route = itinerary.route();
            prop_assert_eq!(route.first().unwrap(), &query.departure);
            prop_assert_eq!(route.last().unwrap(), &query.destination);

            let cost_sum: f64 = itinerary.legs().iter().map(|l| l.cost).sum();
            let time_sum: u32 = itinerary.legs().iter().map(|l| l.duration_mins).sum();
            prop_assert_eq!(itinerary.total_cost(), cost_sum);
            prop_assert_eq!(itinerary.total_time_mins(), time_sum);

            let rating = itinerary.comfort_rating();
            prop_assert!((0.0..=4.0).contains(&rating));
        }
    }
}
