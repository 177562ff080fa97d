//! # Residual Arcs
//!
//! Every arc of a [`FlowNetwork`](super::FlowNetwork) lives in a single arena and is
//! addressed by its [`ArcId`]. Arcs are always created in pairs: a *primary* arc carrying
//! the actual flow and its *reverse* arc used for cancellation. Both store the id of the
//! other one, so pushing flow never requires aliasing references.

use crate::node::*;

/// Index of an arc in the arc arena of a flow network
pub type ArcId = u32;

/// ArcId-Value that is considered invalid
pub const INVALID_ARC: ArcId = ArcId::MAX;

/// Space-efficient `Option<ArcId>`, used for parent arcs in the augmenting path search
pub type OptionalArc = OptionalIdImpl<INVALID_ARC>;

/// Capacities and flows are non-negative integers
pub type Capacity = u32;

/// The role an arc plays in the bipartite flow network
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ArcKind {
    /// `source -> left vertex`
    Source,
    /// `left vertex -> right vertex`, one per input pairing
    Pairing,
    /// `right vertex -> sink`
    Sink,
    /// Cancellation arc paired with one of the above
    Reverse,
}

impl ArcKind {
    /// Returns *true* for all arcs that carry flow of the network (ie. are not reverse arcs)
    #[inline]
    pub fn is_primary(&self) -> bool {
        !matches!(self, ArcKind::Reverse)
    }
}

/// A directed arc with unit-style capacity bookkeeping.
///
/// Invariant: `0 <= flow <= capacity`. For an arc and its reverse, the flows always sum up
/// to the (shared) capacity: a reverse arc starts saturated and only becomes usable once
/// flow has been pushed over its primary arc.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResidualArc {
    from: Node,
    to: Node,
    capacity: Capacity,
    flow: Capacity,
    kind: ArcKind,
    reverse: ArcId,
}

impl ResidualArc {
    pub(crate) fn new(
        from: Node,
        to: Node,
        capacity: Capacity,
        flow: Capacity,
        kind: ArcKind,
        reverse: ArcId,
    ) -> Self {
        debug_assert!(flow <= capacity);
        Self {
            from,
            to,
            capacity,
            flow,
            kind,
            reverse,
        }
    }

    /// Origin of the arc
    #[inline]
    pub fn from(&self) -> Node {
        self.from
    }

    /// Destination of the arc
    #[inline]
    pub fn to(&self) -> Node {
        self.to
    }

    #[inline]
    pub fn capacity(&self) -> Capacity {
        self.capacity
    }

    #[inline]
    pub fn flow(&self) -> Capacity {
        self.flow
    }

    #[inline]
    pub fn kind(&self) -> ArcKind {
        self.kind
    }

    /// Id of the paired arc in the opposite direction
    #[inline]
    pub fn reverse(&self) -> ArcId {
        self.reverse
    }

    /// Returns `capacity - flow`
    #[inline]
    pub fn residual_capacity(&self) -> Capacity {
        self.capacity - self.flow
    }

    /// Returns *true* if no more flow can be pushed over this arc
    #[inline]
    pub fn is_saturated(&self) -> bool {
        self.flow == self.capacity
    }

    pub(crate) fn add_flow(&mut self, amount: Capacity) {
        debug_assert!(amount <= self.residual_capacity());
        self.flow += amount;
    }

    pub(crate) fn retract_flow(&mut self, amount: Capacity) {
        debug_assert!(amount <= self.flow);
        self.flow -= amount;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn residual_capacity() {
        let mut arc = ResidualArc::new(0, 1, 1, 0, ArcKind::Pairing, 1);
        assert_eq!(arc.residual_capacity(), 1);
        assert!(!arc.is_saturated());

        arc.add_flow(1);
        assert_eq!(arc.residual_capacity(), 0);
        assert!(arc.is_saturated());

        arc.retract_flow(1);
        assert_eq!(arc.flow(), 0);
    }

    #[test]
    fn kinds() {
        assert!(ArcKind::Source.is_primary());
        assert!(ArcKind::Pairing.is_primary());
        assert!(ArcKind::Sink.is_primary());
        assert!(!ArcKind::Reverse.is_primary());
    }
}
