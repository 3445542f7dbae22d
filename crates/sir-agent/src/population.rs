//! The population: a complete graph of agents.
//!
//! Agents are keyed by `AgentId`, assigned `0..n` in creation order.  Every
//! unordered pair of agents is joined by an edge.  The edges are an
//! enumeration device for the contact phase, not a spatial index: proximity
//! is recomputed from live positions every tick.

use sir_core::{AgentId, Bounds, SirError, SirResult};
use sir_graph::Graph;

use crate::{Agent, SirCounts};

/// Per-pair edge attributes.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct ContactEdge {
    /// `true` if the pair was within infection radius during the most
    /// recent contact phase.  Renderers draw these as contact lines.
    pub in_range: bool,
}

/// All agents of one run plus the world they move in.
#[derive(Clone, Debug)]
pub struct Population {
    graph:  Graph<AgentId, Agent, ContactEdge>,
    bounds: Bounds,
}

impl Population {
    /// An empty population.  Transforms reject it; use
    /// [`from_agents`](Self::from_agents) or the builder for real runs.
    pub fn new(bounds: Bounds) -> Self {
        Self { graph: Graph::new(), bounds }
    }

    /// Number agents `0..n` in order and join every pair.
    pub fn from_agents(agents: Vec<Agent>, bounds: Bounds) -> SirResult<Self> {
        let n = agents.len();
        let mut graph = Graph::with_capacity(n, n * n.saturating_sub(1) / 2);
        for (i, agent) in agents.into_iter().enumerate() {
            let id = AgentId::try_from(i)
                .map_err(|_| SirError::invalid(format!("population of {n} exceeds the AgentId range")))?;
            graph.add_node(id, agent);
        }

        let ids: Vec<AgentId> = graph.iter().collect();
        for (i, &a) in ids.iter().enumerate() {
            for &b in &ids[i + 1..] {
                graph
                    .add_edge(a, b, ContactEdge::default())
                    .map_err(|e| SirError::InvariantViolation(e.to_string()))?;
            }
        }

        Ok(Self { graph, bounds })
    }

    #[inline]
    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    /// Number of agents.
    #[inline]
    pub fn len(&self) -> usize {
        self.graph.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.graph.is_empty()
    }

    /// Fail with `InvalidArgument` if there are no agents.  Every
    /// intervention calls this first.
    pub fn ensure_not_empty(&self, what: &str) -> SirResult<()> {
        if self.is_empty() {
            return Err(SirError::invalid(format!("{what} requires a non-empty population")));
        }
        Ok(())
    }

    // ── Agent access ──────────────────────────────────────────────────────

    #[inline]
    pub fn agent(&self, id: AgentId) -> Option<&Agent> {
        self.graph.node(id)
    }

    #[inline]
    pub fn agent_mut(&mut self, id: AgentId) -> Option<&mut Agent> {
        self.graph.node_mut(id)
    }

    /// `(id, &agent)` in ascending id order.
    pub fn agents(&self) -> impl Iterator<Item = (AgentId, &Agent)> + '_ {
        self.graph.nodes()
    }

    pub fn agents_mut(&mut self) -> impl Iterator<Item = (AgentId, &mut Agent)> + '_ {
        self.graph.nodes_mut()
    }

    /// All agent ids in ascending order.
    pub fn ids(&self) -> Vec<AgentId> {
        self.graph.iter().collect()
    }

    // ── Graph access ──────────────────────────────────────────────────────

    #[inline]
    pub fn graph(&self) -> &Graph<AgentId, Agent, ContactEdge> {
        &self.graph
    }

    /// Direct graph access for explicit topology edits.  The simulation loop
    /// itself never removes nodes.
    #[inline]
    pub fn graph_mut(&mut self) -> &mut Graph<AgentId, Agent, ContactEdge> {
        &mut self.graph
    }

    /// Pairs that were in contact during the most recent contact phase.
    pub fn contact_pairs(&self) -> impl Iterator<Item = (AgentId, AgentId)> + '_ {
        self.graph
            .edges()
            .filter(|(_, _, e)| e.in_range)
            .map(|(a, b, _)| (a, b))
    }

    // ── Statistics ────────────────────────────────────────────────────────

    /// Tally agents by state.
    pub fn counts(&self) -> SirCounts {
        self.agents().map(|(_, a)| a.state()).collect()
    }

    /// Verify the per-agent and aggregate invariants, returning the counts.
    ///
    /// Fails with `InvariantViolation` if the tallies do not sum to the
    /// population size or a non-infected agent carries a running infection
    /// timer.
    pub fn check_invariants(&self) -> SirResult<SirCounts> {
        let counts = self.counts();
        if counts.total() != self.len() {
            return Err(SirError::InvariantViolation(format!(
                "counts {counts} sum to {} but population is {}",
                counts.total(),
                self.len()
            )));
        }
        if let Some((id, agent)) = self
            .agents()
            .find(|(_, a)| !a.is_infected() && a.infection_timer() != 0)
        {
            return Err(SirError::InvariantViolation(format!(
                "{id} is {} with infection timer {}",
                agent.state(),
                agent.infection_timer()
            )));
        }
        Ok(counts)
    }
}
