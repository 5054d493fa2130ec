//! Behavior topology loader.

use std::path::Path;

use crate::Topology;
use crate::loaders::{LoadResult, read_file};

/// Loader for behavior topologies from RON files.
pub struct TopologyLoader;

impl TopologyLoader {
    /// Load a topology from a RON file.
    ///
    /// Only the syntax is checked here. Node names, ports and subtree
    /// references are resolved when the agent builds its tree.
    pub fn load(path: &Path) -> LoadResult<Topology> {
        let content = read_file(path)?;
        Self::parse(&content).map_err(|e| anyhow::anyhow!("{} ({})", e, path.display()))
    }

    /// Parse a topology from RON text.
    pub fn parse(content: &str) -> LoadResult<Topology> {
        let topology: Topology = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse topology RON: {}", e))?;
        Ok(topology)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use tempfile::TempDir;

    use super::*;
    use crate::{NodeSpec, PortBinding};

    const SAMPLE: &str = r#"
        (
            main_tree: "Main",
            trees: {
                "Main": Fallback([
                    Action(name: "Dodge"),
                    Sequence([
                        Action(name: "GetClosestTarget", ports: {"target": Key("target")}),
                        Retry(attempts: 2, child: Action(name: "Shoot", ports: {"id": Key("target")})),
                    ]),
                    Inverter(Action(name: "Move", ports: {"vel": Vec2(1.0, -2.5)})),
                    SubTree("Roam"),
                ]),
                "Roam": ForceSuccess(Action(name: "GoCenter")),
            },
        )
    "#;

    #[test]
    fn parses_every_node_kind() {
        let topology = TopologyLoader::parse(SAMPLE).unwrap();
        assert_eq!(topology.main_tree, "Main");
        assert_eq!(topology.trees.len(), 2);

        let NodeSpec::Fallback(children) = topology.main().unwrap() else {
            panic!("main tree should be a fallback");
        };
        assert_eq!(children.len(), 4);
        assert_eq!(children[0], NodeSpec::action("Dodge"));
        assert_eq!(children[3], NodeSpec::SubTree("Roam".into()));

        let NodeSpec::Inverter(inner) = &children[2] else {
            panic!("expected inverter");
        };
        let mut ports = BTreeMap::new();
        ports.insert("vel".to_string(), PortBinding::Vec2(1.0, -2.5));
        assert_eq!(
            **inner,
            NodeSpec::Action {
                name: "Move".into(),
                ports
            }
        );
    }

    #[test]
    fn selector_is_accepted_as_fallback() {
        let topology = TopologyLoader::parse(
            r#"(main_tree: "Main", trees: {"Main": Selector([Action(name: "GoCenter")])})"#,
        )
        .unwrap();
        assert!(matches!(topology.main(), Some(NodeSpec::Fallback(_))));
    }

    #[test]
    fn unknown_field_is_rejected() {
        let result = TopologyLoader::parse(r#"(main_tree: "Main", trees: {}, extra: 1)"#);
        assert!(result.is_err());
    }

    #[test]
    fn loads_from_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("main.ron");
        std::fs::write(&path, SAMPLE).unwrap();

        let topology = TopologyLoader::load(&path).unwrap();
        assert!(topology.trees.contains_key("Roam"));
    }

    #[test]
    fn missing_file_names_the_path() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("absent.ron");
        let err = TopologyLoader::load(&path).unwrap_err();
        assert!(err.to_string().contains("absent.ron"));
    }
}
