//! Behavioural properties of generation and search across both stores.

mod common;

use std::collections::HashSet;

use common::{ids, path_cost, scenario_store};
use dfbnb::{
    CostDistribution, Error, ErrorKind, GoalRule, TreeConfig, TreeGenerator,
    adapters::{InMemoryEdgeStore, SqliteEdgeStore},
    identifiers::NodeId,
    ports::{EdgeStore, SearchObserver},
    search::{SearchEngine, search},
};

/// Records every incumbent cost in order.
#[derive(Default)]
struct BoundRecorder {
    bounds: Vec<u64>,
    current: Option<u64>,
}

impl SearchObserver for BoundRecorder {
    fn on_visit(
        &mut self,
        frame: &dfbnb::search::SearchFrame,
        _path: &[NodeId],
        bound: Option<u64>,
    ) -> dfbnb::Result<()> {
        assert_eq!(bound, self.current, "bound reported to on_visit drifted");
        if let Some(bound) = bound {
            assert!(frame.depth > 0, "root visited after an incumbent exists ({bound})");
        }
        Ok(())
    }

    fn on_incumbent(
        &mut self,
        _path: &[NodeId],
        cost: u64,
        previous: Option<u64>,
    ) -> dfbnb::Result<()> {
        assert_eq!(previous, self.current);
        self.bounds.push(cost);
        self.current = Some(cost);
        Ok(())
    }
}

fn generated(config: &TreeConfig, seed: u64) -> InMemoryEdgeStore {
    let mut store = InMemoryEdgeStore::new();
    TreeGenerator::seeded(seed)
        .generate(config, &mut store)
        .unwrap();
    store
}

#[test]
fn scenario_finds_free_left_spine() {
    let store = scenario_store();
    let result = search(&store, &TreeConfig::new(2, 2, CostDistribution::ZeroOrOne)).unwrap();

    assert_eq!(result.optimal_path, ids(&[1, 2, 4]));
    assert_eq!(result.optimal_cost, Some(0));
    assert_eq!(result.expansion_log.as_slice(), ids(&[1, 2, 4, 5, 3]).as_slice());
}

#[test]
fn zero_depth_tree_is_its_own_goal() {
    let config = TreeConfig::new(5, 0, CostDistribution::Uniform);
    let store = generated(&config, 1);
    assert_eq!(store.edge_count().unwrap(), 0);

    let result = search(&store, &config).unwrap();
    assert_eq!(result.optimal_path, ids(&[1]));
    assert_eq!(result.optimal_cost, Some(0));
    assert_eq!(result.expansion_log.as_slice(), ids(&[1]).as_slice());
}

#[test]
fn optimal_cost_matches_stored_weights() {
    for rule in [GoalRule::Depth, GoalRule::NodeThreshold] {
        for distribution in CostDistribution::ALL {
            for seed in 0..5 {
                let config = TreeConfig::new(3, 4, distribution).with_goal_rule(rule);
                let store = generated(&config, seed);
                let result = search(&store, &config).unwrap();

                let cost = result.optimal_cost.expect("complete trees always have a goal");
                assert_eq!(path_cost(&store, &result.optimal_path), cost);
                assert_eq!(result.optimal_path[0], NodeId::ROOT);
                if rule == GoalRule::Depth {
                    assert_eq!(result.optimal_path.len(), 5);
                }
            }
        }
    }
}

#[test]
fn dfbnb_matches_exhaustive_minimum() {
    fn cheapest(store: &InMemoryEdgeStore, node: NodeId, depth: u32, goal: u32) -> u64 {
        if depth == goal {
            return 0;
        }
        store
            .children_of(node)
            .unwrap()
            .iter()
            .map(|edge| u64::from(edge.weight) + cheapest(store, edge.to, depth + 1, goal))
            .min()
            .unwrap()
    }

    for seed in 0..10 {
        let config = TreeConfig::new(3, 5, CostDistribution::Uniform);
        let store = generated(&config, seed);
        let result = search(&store, &config).unwrap();
        assert_eq!(result.optimal_cost, Some(cheapest(&store, NodeId::ROOT, 0, 5)));
    }
}

#[test]
fn bound_only_decreases_and_prunes_are_sound() {
    let config = TreeConfig::new(4, 5, CostDistribution::Uniform);
    let store = generated(&config, 99);
    let mut recorder = BoundRecorder::default();
    let result = SearchEngine::new(&store, &config)
        .unwrap()
        .with_observer(&mut recorder)
        .run()
        .unwrap();

    assert!(!recorder.bounds.is_empty());
    assert!(recorder.bounds.windows(2).all(|pair| pair[1] < pair[0]));
    assert_eq!(recorder.bounds.last().copied(), result.optimal_cost);
    assert_eq!(result.stats.incumbent_updates as usize, recorder.bounds.len());
}

#[test]
fn expansion_log_is_duplicate_free_and_rooted() {
    let config = TreeConfig::new(3, 6, CostDistribution::ZeroOrOne);
    let store = generated(&config, 5);
    let result = search(&store, &config).unwrap();

    let log = result.expansion_log.as_slice();
    assert_eq!(log[0], NodeId::ROOT);
    let unique: HashSet<_> = log.iter().collect();
    assert_eq!(unique.len(), log.len());
    // Each logged node's parent was logged before it.
    for (index, node) in log.iter().enumerate().skip(1) {
        let parent = node.parent(3).unwrap();
        assert!(log[..index].contains(&parent), "{node} logged before {parent}");
    }
}

#[test]
fn same_seed_gives_same_result() {
    let config = TreeConfig::new(4, 4, CostDistribution::Custom);
    let first = generated(&config, 2024);
    let second = generated(&config, 2024);
    assert_eq!(first.edges(), second.edges());

    let a = search(&first, &config).unwrap();
    let b = search(&second, &config).unwrap();
    assert_eq!(a, b);
}

#[test]
fn sqlite_and_memory_stores_agree() {
    for rule in [GoalRule::Depth, GoalRule::NodeThreshold] {
        let config = TreeConfig::new(3, 4, CostDistribution::ZeroOrOne).with_goal_rule(rule);
        let memory = generated(&config, 17);
        let mut sqlite = SqliteEdgeStore::open_in_memory().unwrap();
        TreeGenerator::seeded(17)
            .generate(&config, &mut sqlite)
            .unwrap();

        assert_eq!(sqlite.edge_count().unwrap(), memory.edge_count().unwrap());
        assert_eq!(
            search(&sqlite, &config).unwrap(),
            search(&memory, &config).unwrap()
        );
    }
}

#[test]
fn regeneration_is_idempotent() {
    let config = TreeConfig::new(3, 3, CostDistribution::Uniform);
    let mut store = SqliteEdgeStore::open_in_memory().unwrap();
    TreeGenerator::seeded(8).generate(&config, &mut store).unwrap();
    let first = search(&store, &config).unwrap();
    TreeGenerator::seeded(8).generate(&config, &mut store).unwrap();

    assert_eq!(store.edge_count().unwrap(), 39);
    assert_eq!(search(&store, &config).unwrap(), first);
}

#[test]
fn unknown_distribution_leaves_store_unchanged() {
    let config = TreeConfig::new(2, 3, CostDistribution::Uniform);
    let mut store = SqliteEdgeStore::open_in_memory().unwrap();
    TreeGenerator::seeded(1).generate(&config, &mut store).unwrap();
    let before = store.edge_count().unwrap();

    let err = "normal"
        .parse::<CostDistribution>()
        .and_then(|distribution| {
            TreeGenerator::seeded(1)
                .generate(&TreeConfig::new(2, 3, distribution), &mut store)
                .map(|_| ())
        })
        .unwrap_err();

    assert_eq!(err.kind(), ErrorKind::Configuration);
    assert_eq!(store.edge_count().unwrap(), before);
}

#[test]
fn missing_children_are_reported() {
    let mut store = scenario_store();
    store.reset().unwrap();
    store
        .write_batch(&[
            dfbnb::Edge::new(NodeId::new(1), NodeId::new(2), 0),
            dfbnb::Edge::new(NodeId::new(1), NodeId::new(3), 1),
        ])
        .unwrap();

    let err = search(&store, &TreeConfig::new(2, 2, CostDistribution::ZeroOrOne)).unwrap_err();
    assert!(matches!(
        err,
        Error::SearchInconsistency {
            node: 2,
            found: 0,
            expected: 2,
            ..
        }
    ));
}
