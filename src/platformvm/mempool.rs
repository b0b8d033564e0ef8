//! Mempool ingress: a single-producer single-consumer queue drained only
//! by `build_block`, under the VM's write lock. ref. §5 "Mempool ingress
//! runs on a separate thread and only enqueues"; §9 "Mempool -> VM is a
//! single-producer single-consumer queue."
use std::sync::mpsc::{Receiver, Sender, TryRecvError};

use crate::platformvm::blocks::DecisionTx;

/// Either kind of tx a client can submit; proposal txs additionally carry
/// the fields `semantic_verify` needs before admission (handled by the
/// caller before `Mempool::push`).
#[derive(Debug, Clone)]
pub enum MempoolTx {
    Proposal(crate::platformvm::blocks::ProposalTx),
    Decision(DecisionTx),
}

/// The producer half, cloned out to whatever ingests client submissions
/// (RPC handler, gossip). Never touches VM state directly.
pub struct Sink {
    tx: Sender<MempoolTx>,
}

impl Sink {
    pub fn push(&self, tx: MempoolTx) -> Result<(), MempoolTx> {
        self.tx.send(tx).map_err(|e| e.0)
    }
}

/// The consumer half, owned by the VM and drained only inside
/// `build_block` while holding the write lock.
pub struct Mempool {
    rx: Receiver<MempoolTx>,
    pending_proposals: Vec<crate::platformvm::blocks::ProposalTx>,
    pending_decisions: Vec<DecisionTx>,
}

impl Mempool {
    pub fn new() -> (Sink, Self) {
        let (tx, rx) = std::sync::mpsc::channel();
        (
            Sink { tx },
            Self {
                rx,
                pending_proposals: Vec::new(),
                pending_decisions: Vec::new(),
            },
        )
    }

    /// Drains everything currently queued without blocking, bucketing by
    /// kind so the builder can apply §4.5's policy order.
    pub fn drain(&mut self) {
        loop {
            match self.rx.try_recv() {
                Ok(MempoolTx::Proposal(tx)) => self.pending_proposals.push(tx),
                Ok(MempoolTx::Decision(tx)) => self.pending_decisions.push(tx),
                Err(TryRecvError::Empty) | Err(TryRecvError::Disconnected) => break,
            }
        }
    }

    pub fn take_next_proposal(&mut self) -> Option<crate::platformvm::blocks::ProposalTx> {
        if self.pending_proposals.is_empty() {
            None
        } else {
            Some(self.pending_proposals.remove(0))
        }
    }

    pub fn take_decisions(&mut self, limit: usize) -> Vec<DecisionTx> {
        let n = limit.min(self.pending_decisions.len());
        self.pending_decisions.drain(0..n).collect()
    }

    pub fn has_decisions(&self) -> bool {
        !self.pending_decisions.is_empty()
    }

    pub fn has_proposals(&self) -> bool {
        !self.pending_proposals.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::platformvm::txs::advance_time;

    #[test]
    fn test_sink_push_then_drain_buckets_by_kind() {
        let (sink, mut mempool) = Mempool::new();
        sink.push(MempoolTx::Proposal(crate::platformvm::blocks::ProposalTx::AdvanceTime(
            advance_time::Tx { new_time: 10 },
        )))
        .unwrap();

        mempool.drain();
        assert!(mempool.has_proposals());
        assert!(!mempool.has_decisions());
        assert!(mempool.take_next_proposal().is_some());
        assert!(mempool.take_next_proposal().is_none());
    }

    #[test]
    fn test_disconnected_sink_does_not_panic_on_drain() {
        let (sink, mut mempool) = Mempool::new();
        drop(sink);
        mempool.drain();
        assert!(!mempool.has_proposals());
    }
}
