use fnv::FnvHashMap;
use glam::Vec2;

/// The distinguished hub node; its avatar has different morphology.
pub const CENTRAL_NODE_ID: &str = "webbnest";

#[derive(Clone, Debug)]
pub struct CompanyNode {
    pub id: String,
    pub position: Vec2,
    pub color: u32, // 0xRRGGBB
    pub size: f32,
    pub label: String,
    pub description: String,
}

#[derive(Clone, Debug)]
pub struct Connection {
    pub source: String,
    pub target: String,
}

#[derive(Clone, Debug)]
pub struct CompanyData {
    pub nodes: Vec<CompanyNode>,
    pub connections: Vec<Connection>,
}

fn node(id: &str, x: f32, y: f32, color: u32, size: f32, label: &str, description: &str) -> CompanyNode {
    CompanyNode {
        id: id.to_string(),
        position: Vec2::new(x, y),
        color,
        size,
        label: label.to_string(),
        description: description.to_string(),
    }
}

fn conn(source: &str, target: &str) -> Connection {
    Connection {
        source: source.to_string(),
        target: target.to_string(),
    }
}

/// The static organization chart rendered by the map.
pub fn company_data() -> CompanyData {
    CompanyData {
        nodes: vec![
            node(
                "webbnest",
                0.0,
                0.0,
                0x4A90E2,
                50.0,
                "Webbnest",
                "The central hub of innovation and web development",
            ),
            node(
                "dataspinners",
                -300.0,
                -200.0,
                0x50E3C2,
                40.0,
                "Data Spinners",
                "Analytics and data processing division",
            ),
            node(
                "cloudweavers",
                300.0,
                -200.0,
                0xF5A623,
                40.0,
                "Cloud Weavers",
                "Cloud infrastructure and services",
            ),
            node(
                "webguards",
                -300.0,
                200.0,
                0xD0021B,
                40.0,
                "Web Guards",
                "Security and protection services",
            ),
            node(
                "neuralthreads",
                300.0,
                200.0,
                0x9013FE,
                40.0,
                "Neural Threads",
                "AI and machine learning research",
            ),
        ],
        connections: vec![
            conn("webbnest", "dataspinners"),
            conn("webbnest", "cloudweavers"),
            conn("webbnest", "webguards"),
            conn("webbnest", "neuralthreads"),
            conn("dataspinners", "cloudweavers"),
            conn("cloudweavers", "neuralthreads"),
            conn("webguards", "dataspinners"),
            conn("neuralthreads", "webguards"),
        ],
    }
}

/// Insertion-ordered node store plus resolved connectivity.
///
/// Connections referencing unknown node ids are dropped during resolution;
/// the map is best-effort visual and a bad edge must not take the scene down.
pub struct NodeRegistry {
    nodes: Vec<CompanyNode>,
    by_id: FnvHashMap<String, usize>,
    connections: Vec<(usize, usize)>,
}

impl NodeRegistry {
    pub fn from_data(data: CompanyData) -> Self {
        let mut nodes = Vec::with_capacity(data.nodes.len());
        let mut by_id = FnvHashMap::default();
        for n in data.nodes {
            by_id.insert(n.id.clone(), nodes.len());
            nodes.push(n);
        }
        let mut connections = Vec::with_capacity(data.connections.len());
        for c in &data.connections {
            match (by_id.get(&c.source), by_id.get(&c.target)) {
                (Some(&s), Some(&t)) => connections.push((s, t)),
                _ => log::warn!(
                    "skipping connection with unknown node id: {} -> {}",
                    c.source,
                    c.target
                ),
            }
        }
        Self {
            nodes,
            by_id,
            connections,
        }
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Iterate nodes in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &CompanyNode> {
        self.nodes.iter()
    }

    pub fn get(&self, index: usize) -> Option<&CompanyNode> {
        self.nodes.get(index)
    }

    pub fn index_of(&self, id: &str) -> Option<usize> {
        self.by_id.get(id).copied()
    }

    /// Resolved connections as registry index pairs, dataset order.
    pub fn connections(&self) -> &[(usize, usize)] {
        &self.connections
    }

    /// Symmetric connectivity check by node id. Unknown ids are connected
    /// to nothing.
    pub fn are_connected(&self, a: &str, b: &str) -> bool {
        let (Some(ia), Some(ib)) = (self.index_of(a), self.index_of(b)) else {
            return false;
        };
        self.connections
            .iter()
            .any(|&(s, t)| (s == ia && t == ib) || (s == ib && t == ia))
    }
}
