//! `RoadMap` / `MapWorld`: routes between named locations on a plane.
//!
//! The search state is a whole route ([`MapPath`]), not a single location:
//! both the goal test and the cost depend on the sequence. Expansion extends
//! a route by one undirected edge to a location it has not visited yet, so
//! every state is a simple walk and the state space is finite.
//!
//! Map nodes are identified by their coordinates, never by label. A road map
//! therefore refuses two locations at the same point.

use std::fmt;
use std::hash::{Hash, Hasher};

use statecraft_search::scorer::first_min_by_key;
use statecraft_search::{FrontierEntry, FrontierScorer, SearchWorld};

use crate::error::SolveError;

/// World identifier for [`MapWorld`].
pub const ROAD_MAP_ID: &str = "road_map";

/// A named point. Equality and hashing use the coordinates only.
#[derive(Debug, Clone)]
pub struct MapNode {
    label: String,
    x: f64,
    y: f64,
}

impl MapNode {
    #[must_use]
    pub fn new(label: impl Into<String>, x: f64, y: f64) -> Self {
        Self {
            label: label.into(),
            x,
            y,
        }
    }

    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    #[must_use]
    pub fn x(&self) -> f64 {
        self.x
    }

    #[must_use]
    pub fn y(&self) -> f64 {
        self.y
    }

    /// Euclidean distance to `other`.
    #[must_use]
    pub fn distance_to(&self, other: &MapNode) -> f64 {
        (other.x - self.x).hypot(other.y - self.y)
    }

    fn coordinate_key(&self) -> (u64, u64) {
        (coordinate_bits(self.x), coordinate_bits(self.y))
    }
}

/// Bit pattern with `-0.0` folded into `0.0`, so `==` and `Hash` agree.
fn coordinate_bits(v: f64) -> u64 {
    if v == 0.0 {
        0.0f64.to_bits()
    } else {
        v.to_bits()
    }
}

impl PartialEq for MapNode {
    fn eq(&self, other: &Self) -> bool {
        self.coordinate_key() == other.coordinate_key()
    }
}

impl Eq for MapNode {}

impl Hash for MapNode {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.coordinate_key().hash(state);
    }
}

impl fmt::Display for MapNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label)
    }
}

/// Sum of Euclidean distances between consecutive nodes; `0.0` for fewer
/// than two nodes.
#[must_use]
pub fn path_cost(nodes: &[MapNode]) -> f64 {
    nodes.windows(2).map(|w| w[0].distance_to(&w[1])).sum()
}

/// An ordered, duplicate-free walk over map nodes.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MapPath(Vec<MapNode>);

impl MapPath {
    /// A route that has not left `start` yet.
    #[must_use]
    pub fn starting_at(start: MapNode) -> Self {
        Self(vec![start])
    }

    /// This route extended by `next`.
    #[must_use]
    pub fn extended(&self, next: MapNode) -> Self {
        let mut nodes = Vec::with_capacity(self.0.len() + 1);
        nodes.extend_from_slice(&self.0);
        nodes.push(next);
        Self(nodes)
    }

    #[must_use]
    pub fn nodes(&self) -> &[MapNode] {
        &self.0
    }

    #[must_use]
    pub fn last(&self) -> Option<&MapNode> {
        self.0.last()
    }

    #[must_use]
    pub fn contains(&self, node: &MapNode) -> bool {
        self.0.contains(node)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Cumulative Euclidean length.
    #[must_use]
    pub fn cost(&self) -> f64 {
        path_cost(&self.0)
    }

    #[must_use]
    pub fn labels(&self) -> Vec<&str> {
        self.0.iter().map(MapNode::label).collect()
    }
}

impl fmt::Display for MapPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.labels().join(" -> "))
    }
}

/// The cheapest of `paths` with its cost. The first of equally cheap paths
/// wins; `None` for an empty list.
#[must_use]
pub fn cheapest_path(paths: &[MapPath]) -> Option<(&MapPath, f64)> {
    let mut best: Option<(&MapPath, f64)> = None;
    for path in paths {
        let cost = path.cost();
        let cheaper = match best {
            None => true,
            Some((_, best_cost)) => cost < best_cost,
        };
        if cheaper {
            best = Some((path, cost));
        }
    }
    best
}

/// Named locations and undirected roads between them.
#[derive(Debug, Clone)]
pub struct RoadMap {
    nodes: Vec<MapNode>,
    edges: Vec<(usize, usize)>,
}

impl RoadMap {
    /// Build a road map. Edges name their endpoints by label.
    ///
    /// # Errors
    ///
    /// Returns [`SolveError::InvalidParameters`] for non-finite coordinates,
    /// duplicate labels (case-insensitive), two locations at the same point,
    /// or a self-loop; [`SolveError::UnknownLocation`] for an edge naming a
    /// location that is not in `nodes`.
    pub fn new(nodes: Vec<MapNode>, edges: &[(&str, &str)]) -> Result<Self, SolveError> {
        for (i, node) in nodes.iter().enumerate() {
            if !node.x.is_finite() || !node.y.is_finite() {
                return Err(SolveError::InvalidParameters {
                    detail: format!("location {} has non-finite coordinates", node.label),
                });
            }
            for earlier in &nodes[..i] {
                if earlier.label.eq_ignore_ascii_case(&node.label) {
                    return Err(SolveError::InvalidParameters {
                        detail: format!("duplicate location label {}", node.label),
                    });
                }
                if earlier == node {
                    return Err(SolveError::InvalidParameters {
                        detail: format!(
                            "locations {} and {} share coordinates",
                            earlier.label, node.label
                        ),
                    });
                }
            }
        }

        let mut map = Self {
            nodes,
            edges: Vec::with_capacity(edges.len()),
        };
        for &(a, b) in edges {
            let from = map.index_of(a)?;
            let to = map.index_of(b)?;
            if from == to {
                return Err(SolveError::InvalidParameters {
                    detail: format!("road from {a} to itself"),
                });
            }
            map.edges.push((from, to));
        }
        Ok(map)
    }

    fn index_of(&self, label: &str) -> Result<usize, SolveError> {
        let wanted = label.trim();
        self.nodes
            .iter()
            .position(|n| n.label.eq_ignore_ascii_case(wanted))
            .ok_or_else(|| SolveError::UnknownLocation {
                label: label.to_string(),
            })
    }

    /// Look up a location by label, ignoring ASCII case and surrounding
    /// whitespace.
    ///
    /// # Errors
    ///
    /// Returns [`SolveError::UnknownLocation`] if no location matches.
    pub fn find(&self, label: &str) -> Result<&MapNode, SolveError> {
        self.index_of(label).map(|i| &self.nodes[i])
    }

    #[must_use]
    pub fn nodes(&self) -> &[MapNode] {
        &self.nodes
    }

    /// Roads as `(from, to)` node pairs, in declaration order.
    pub fn edges(&self) -> impl Iterator<Item = (&MapNode, &MapNode)> {
        self.edges
            .iter()
            .map(|&(a, b)| (&self.nodes[a], &self.nodes[b]))
    }
}

/// The eight-location reference map.
#[must_use]
pub fn reference_map() -> RoadMap {
    let nodes = vec![
        MapNode::new("N", 0.2, 1.0),
        MapNode::new("P", 1.35, 4.25),
        MapNode::new("U", 2.15, 0.875),
        MapNode::new("E", 3.42, 2.125),
        MapNode::new("J", 3.8, 4.575),
        MapNode::new("M", 6.7, 3.875),
        MapNode::new("S", 6.7, 1.875),
        MapNode::new("V", 5.6, 0.1),
    ];
    // N=0 P=1 U=2 E=3 J=4 M=5 S=6 V=7
    let edges = vec![
        (0, 1), // N-P
        (1, 2), // P-U
        (0, 2), // N-U
        (1, 3), // P-E
        (2, 3), // U-E
        (1, 4), // P-J
        (3, 4), // E-J
        (4, 5), // J-M
        (3, 7), // E-V
        (5, 7), // M-V
        (5, 6), // M-S
    ];
    RoadMap { nodes, edges }
}

/// Route search between two locations of a road map.
#[derive(Debug, Clone)]
pub struct MapWorld {
    map: RoadMap,
    start: MapNode,
    target: MapNode,
}

impl MapWorld {
    /// Resolve `start` and `target` against the map.
    ///
    /// # Errors
    ///
    /// Returns [`SolveError::UnknownLocation`] if either label is not on the
    /// map.
    pub fn new(map: RoadMap, start: &str, target: &str) -> Result<Self, SolveError> {
        let start = map.find(start)?.clone();
        let target = map.find(target)?.clone();
        Ok(Self { map, start, target })
    }

    #[must_use]
    pub fn map(&self) -> &RoadMap {
        &self.map
    }

    #[must_use]
    pub fn start(&self) -> &MapNode {
        &self.start
    }

    #[must_use]
    pub fn target(&self) -> &MapNode {
        &self.target
    }
}

impl SearchWorld for MapWorld {
    type State = MapPath;

    fn world_id(&self) -> &str {
        ROAD_MAP_ID
    }

    fn start_state(&self) -> MapPath {
        MapPath::starting_at(self.start.clone())
    }

    fn is_goal(&self, path: &MapPath) -> bool {
        path.last() == Some(&self.target)
    }

    fn expand(&self, path: &MapPath) -> Vec<MapPath> {
        let Some(last) = path.last() else {
            return Vec::new();
        };
        let mut next = Vec::new();
        for (a, b) in self.map.edges() {
            if a == last && !path.contains(b) {
                next.push(path.extended(b.clone()));
            } else if b == last && !path.contains(a) {
                next.push(path.extended(a.clone()));
            }
        }
        next
    }
}

/// Cheapest route so far; the first of equally cheap routes wins.
impl FrontierScorer<MapPath> for MapWorld {
    fn best_candidate(&self, frontier: &[FrontierEntry<MapPath>]) -> Option<usize> {
        first_min_by_key(frontier, MapPath::cost)
    }
}
