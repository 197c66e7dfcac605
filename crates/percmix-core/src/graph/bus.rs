//! Shared stereo output bus.

use arc_swap::ArcSwap;
use std::sync::Arc;

/// A voice that mixes itself into the bus.
///
/// Implementations are shared between the control side and the audio thread,
/// so rendering takes `&self` and must not block.
pub trait GraphNode: Send + Sync {
    /// Stable identity used to avoid attaching the same voice twice.
    fn node_id(&self) -> u64;

    /// Add `output.len() / 2` frames of interleaved stereo into `output`.
    fn render_add(&self, output: &mut [f32]);
}

/// Output bus every attached voice renders into.
///
/// Cloning yields another handle to the same voice list. The list is swapped
/// atomically on attach so the audio thread never waits on it.
#[derive(Clone, Default)]
pub struct MixBus {
    nodes: Arc<ArcSwap<Vec<Arc<dyn GraphNode>>>>,
}

impl MixBus {
    pub fn new() -> Self {
        Self::default()
    }

    /// Attach a voice. Returns `false` when a voice with the same id is
    /// already attached.
    pub fn attach(&self, node: Arc<dyn GraphNode>) -> bool {
        let id = node.node_id();
        if self.contains(id) {
            return false;
        }
        self.nodes.rcu(|current| {
            let mut next = Vec::clone(current);
            if !next.iter().any(|n| n.node_id() == id) {
                next.push(Arc::clone(&node));
            }
            next
        });
        true
    }

    pub fn contains(&self, id: u64) -> bool {
        self.nodes.load().iter().any(|n| n.node_id() == id)
    }

    pub fn len(&self) -> usize {
        self.nodes.load().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Overwrite `output` (interleaved stereo) with the sum of all voices.
    pub fn render(&self, output: &mut [f32]) {
        output.fill(0.0);
        for node in self.nodes.load().iter() {
            node.render_add(output);
        }
    }
}

impl std::fmt::Debug for MixBus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MixBus").field("nodes", &self.len()).finish()
    }
}
