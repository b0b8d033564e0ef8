//! Block variants and the Proposed → Verified → {Accepted | Rejected}
//! state machine. ref. §4.5 "Block Types and State Machine"
use crate::{
    codec,
    config::Config,
    errors::{Error, Result},
    ids,
    key::secp256k1::txs::Credential,
    packer::Packer,
    platformvm::{
        state::Diff,
        txs::{add_delegator, add_subnet_validator, add_validator, advance_time, create_chain, create_subnet, export, import, reward_validator},
    },
};
use serde::{Deserialize, Serialize};

/// The tx carried by a proposal block. ref. §4.5 "Proposal block: carries
/// exactly one proposal tx."
#[derive(Debug, Serialize, Deserialize, Eq, PartialEq, Clone)]
pub enum ProposalTx {
    AddValidator(add_validator::Tx, Vec<Credential>),
    AddDelegator(add_delegator::Tx, Vec<Credential>),
    AddSubnetValidator(add_subnet_validator::Tx, Vec<Credential>),
    AdvanceTime(advance_time::Tx),
    RewardValidator(reward_validator::Tx),
}

impl ProposalTx {
    fn type_id(&self) -> u32 {
        match self {
            Self::AddValidator(..) => add_validator::Tx::type_id(),
            Self::AddDelegator(..) => add_delegator::Tx::type_id(),
            Self::AddSubnetValidator(..) => add_subnet_validator::Tx::type_id(),
            Self::AdvanceTime(_) => advance_time::Tx::type_id(),
            Self::RewardValidator(_) => reward_validator::Tx::type_id(),
        }
    }

    /// Pure verify against the diff the proposal block was verified on top
    /// of; does not mutate it. RewardValidatorTx's semantic verify doubles
    /// as the builder's own eligibility check.
    pub fn semantic_verify(&self, diff: &Diff, wall_clock: u64, config: &Config) -> Result<()> {
        match self {
            Self::AddValidator(tx, _) => tx.semantic_verify(diff, config),
            Self::AddDelegator(tx, _) => tx.semantic_verify(diff, config),
            Self::AddSubnetValidator(tx, _) => tx.semantic_verify(diff, config),
            Self::AdvanceTime(tx) => tx.semantic_verify(diff, wall_clock, config),
            Self::RewardValidator(tx) => tx.semantic_verify(diff),
        }
    }

    /// ref. §9 "a reimplementation should keep this hook off by default"
    /// (the Add*Tx family executes identically on Commit and Abort: the
    /// proposal mechanism here only gates *when* a staker is admitted, not
    /// *whether*; AdvanceTime and RewardValidator are the two tx types
    /// whose Commit/Abort branches genuinely diverge, per §8 scenario 5).
    pub fn execute_commit(
        &self,
        diff: &mut Diff,
        config: &Config,
        uptime_ratio: f64,
        unsafe_disable_signature_checks: bool,
    ) -> Result<()> {
        match self {
            Self::AddValidator(tx, creds) => tx.execute(diff, creds, unsafe_disable_signature_checks),
            Self::AddDelegator(tx, creds) => tx.execute(diff, creds, unsafe_disable_signature_checks),
            Self::AddSubnetValidator(tx, creds) => tx.execute(diff, creds, unsafe_disable_signature_checks),
            Self::AdvanceTime(tx) => tx.execute(diff, config, uptime_ratio),
            Self::RewardValidator(tx) => tx.execute(diff, true),
        }
    }

    pub fn execute_abort(
        &self,
        diff: &mut Diff,
        config: &Config,
        uptime_ratio: f64,
        unsafe_disable_signature_checks: bool,
    ) -> Result<()> {
        match self {
            Self::AddValidator(tx, creds) => tx.execute(diff, creds, unsafe_disable_signature_checks),
            Self::AddDelegator(tx, creds) => tx.execute(diff, creds, unsafe_disable_signature_checks),
            Self::AddSubnetValidator(tx, creds) => tx.execute(diff, creds, unsafe_disable_signature_checks),
            Self::AdvanceTime(_) => Ok(()),
            Self::RewardValidator(tx) => tx.execute(diff, false),
        }
    }
}

/// The txs carried by a Standard or Atomic block. ref. §4.5 "Standard
/// block: carries one or more decision txs"; "Atomic block: carries one
/// shared-memory tx" (modeled here as a single-element `Import`/`Export`).
#[derive(Debug, Serialize, Deserialize, Eq, PartialEq, Clone)]
pub enum DecisionTx {
    CreateSubnet(create_subnet::Tx, Vec<Credential>),
    CreateChain(create_chain::Tx, Vec<Credential>),
    Import(import::Tx, Vec<Credential>),
    Export(export::Tx, Vec<Credential>),
}

impl DecisionTx {
    fn type_id(&self) -> u32 {
        match self {
            Self::CreateSubnet(..) => create_subnet::Tx::type_id(),
            Self::CreateChain(..) => create_chain::Tx::type_id(),
            Self::Import(..) => import::Tx::type_id(),
            Self::Export(..) => export::Tx::type_id(),
        }
    }

    pub fn verify_syntactic(&self, expected_network_id: u32, fee: u64) -> Result<()> {
        match self {
            Self::CreateSubnet(tx, _) => tx.verify_syntactic(expected_network_id, fee),
            Self::CreateChain(tx, _) => tx.verify_syntactic(expected_network_id, fee),
            Self::Import(tx, _) => tx.verify_syntactic(expected_network_id, fee),
            Self::Export(tx, _) => tx.verify_syntactic(expected_network_id, fee),
        }
    }

    pub fn semantic_verify(&self, diff: &Diff) -> Result<()> {
        match self {
            Self::CreateSubnet(tx, _) => tx.semantic_verify(diff),
            Self::CreateChain(tx, _) => tx.semantic_verify(diff),
            Self::Import(tx, _) => tx.semantic_verify(diff),
            Self::Export(tx, _) => tx.semantic_verify(diff),
        }
    }

    pub fn execute(&self, diff: &mut Diff, unsafe_disable_signature_checks: bool) -> Result<()> {
        match self {
            Self::CreateSubnet(tx, creds) => tx.execute(diff, creds, unsafe_disable_signature_checks).map(|_| ()),
            Self::CreateChain(tx, creds) => tx.execute(diff, creds, unsafe_disable_signature_checks).map(|_| ()),
            Self::Import(tx, creds) => tx.execute(diff, creds, unsafe_disable_signature_checks),
            Self::Export(tx, creds) => tx.execute(diff, creds, unsafe_disable_signature_checks),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Eq, PartialEq, Clone)]
pub enum BlockBody {
    Proposal { tx: ProposalTx },
    Commit { proposal_block_id: ids::Id },
    Abort { proposal_block_id: ids::Id },
    Standard { txs: Vec<DecisionTx> },
    Atomic { tx: DecisionTx },
}

/// ref. §6 "Block API: ID, Parent, Height, Timestamp, Bytes, Verify,
/// Accept, Reject, and for proposal blocks Options() -> (Commit, Abort)."
#[derive(Debug, Eq, PartialEq, Clone)]
pub struct Block {
    pub id: ids::Id,
    pub parent_id: ids::Id,
    pub height: u64,
    pub timestamp: u64,
    pub body: BlockBody,
}

impl Block {
    fn new(parent_id: ids::Id, height: u64, timestamp: u64, body: BlockBody) -> Result<Self> {
        let mut b = Self {
            id: ids::Id::empty(),
            parent_id,
            height,
            timestamp,
            body,
        };
        let packer = Packer::new(1 << 24, 256);
        b.pack_into(&packer)?;
        b.id = ids::Id::sha256(packer.take_bytes());
        Ok(b)
    }

    pub fn new_proposal(parent_id: ids::Id, height: u64, timestamp: u64, tx: ProposalTx) -> Result<Self> {
        Self::new(parent_id, height, timestamp, BlockBody::Proposal { tx })
    }

    pub fn new_commit(parent_id: ids::Id, height: u64, timestamp: u64, proposal_block_id: ids::Id) -> Result<Self> {
        Self::new(parent_id, height, timestamp, BlockBody::Commit { proposal_block_id })
    }

    pub fn new_abort(parent_id: ids::Id, height: u64, timestamp: u64, proposal_block_id: ids::Id) -> Result<Self> {
        Self::new(parent_id, height, timestamp, BlockBody::Abort { proposal_block_id })
    }

    pub fn new_standard(parent_id: ids::Id, height: u64, timestamp: u64, txs: Vec<DecisionTx>) -> Result<Self> {
        Self::new(parent_id, height, timestamp, BlockBody::Standard { txs })
    }

    pub fn new_atomic(parent_id: ids::Id, height: u64, timestamp: u64, tx: DecisionTx) -> Result<Self> {
        Self::new(parent_id, height, timestamp, BlockBody::Atomic { tx })
    }

    /// ref. §6 Block API "for proposal blocks Options() -> (Commit, Abort)";
    /// consensus MUST create both option blocks as this block's children.
    pub fn options(&self, next_timestamp: u64) -> Result<Option<(Block, Block)>> {
        match &self.body {
            BlockBody::Proposal { .. } => Ok(Some((
                Block::new_commit(self.id, self.height + 1, next_timestamp, self.id)?,
                Block::new_abort(self.id, self.height + 1, next_timestamp, self.id)?,
            ))),
            _ => Ok(None),
        }
    }

    pub fn pack_into(&self, packer: &Packer) -> Result<()> {
        match &self.body {
            BlockBody::Proposal { tx } => {
                packer.pack_u32(*codec::P_TYPES.get("platformvm.ProposalBlock").unwrap() as u32)?;
                packer.pack_bytes(self.parent_id.as_ref())?;
                packer.pack_u64(self.height)?;
                packer.pack_u64(self.timestamp)?;
                packer.pack_u32(tx.type_id())?;
                pack_proposal_tx_body(tx, packer)?;
            }
            BlockBody::Commit { proposal_block_id } => {
                packer.pack_u32(*codec::P_TYPES.get("platformvm.CommitBlock").unwrap() as u32)?;
                packer.pack_bytes(self.parent_id.as_ref())?;
                packer.pack_u64(self.height)?;
                packer.pack_u64(self.timestamp)?;
                packer.pack_bytes(proposal_block_id.as_ref())?;
            }
            BlockBody::Abort { proposal_block_id } => {
                packer.pack_u32(*codec::P_TYPES.get("platformvm.AbortBlock").unwrap() as u32)?;
                packer.pack_bytes(self.parent_id.as_ref())?;
                packer.pack_u64(self.height)?;
                packer.pack_u64(self.timestamp)?;
                packer.pack_bytes(proposal_block_id.as_ref())?;
            }
            BlockBody::Standard { txs } => {
                packer.pack_u32(*codec::P_TYPES.get("platformvm.StandardBlock").unwrap() as u32)?;
                packer.pack_bytes(self.parent_id.as_ref())?;
                packer.pack_u64(self.height)?;
                packer.pack_u64(self.timestamp)?;
                packer.pack_u32(txs.len() as u32)?;
                for tx in txs {
                    packer.pack_u32(tx.type_id())?;
                    pack_decision_tx_body(tx, packer)?;
                }
            }
            BlockBody::Atomic { tx } => {
                packer.pack_u32(*codec::P_TYPES.get("platformvm.AtomicBlock").unwrap() as u32)?;
                packer.pack_bytes(self.parent_id.as_ref())?;
                packer.pack_u64(self.height)?;
                packer.pack_u64(self.timestamp)?;
                packer.pack_u32(tx.type_id())?;
                pack_decision_tx_body(tx, packer)?;
            }
        }
        Ok(())
    }
}

fn pack_proposal_tx_body(tx: &ProposalTx, packer: &Packer) -> Result<()> {
    match tx {
        ProposalTx::AddValidator(t, creds) => {
            t.pack_unsigned(packer)?;
            pack_credentials(creds, packer)
        }
        ProposalTx::AddDelegator(t, creds) => {
            t.pack_unsigned(packer)?;
            pack_credentials(creds, packer)
        }
        ProposalTx::AddSubnetValidator(t, creds) => {
            t.pack_unsigned(packer)?;
            pack_credentials(creds, packer)
        }
        ProposalTx::AdvanceTime(t) => t.pack_unsigned(packer),
        ProposalTx::RewardValidator(t) => t.pack_unsigned(packer),
    }
}

fn pack_decision_tx_body(tx: &DecisionTx, packer: &Packer) -> Result<()> {
    match tx {
        DecisionTx::CreateSubnet(t, creds) => {
            t.pack_unsigned(packer)?;
            pack_credentials(creds, packer)
        }
        DecisionTx::CreateChain(t, creds) => {
            t.pack_unsigned(packer)?;
            pack_credentials(creds, packer)
        }
        DecisionTx::Import(t, creds) => {
            t.pack_unsigned(packer)?;
            pack_credentials(creds, packer)
        }
        DecisionTx::Export(t, creds) => {
            t.pack_unsigned(packer)?;
            pack_credentials(creds, packer)
        }
    }
}

/// Credentials ride along in the block's own wire bytes (and therefore its
/// content-addressed id) even though they are excluded from each tx's own
/// `unsigned_tx_id` — two blocks proposing the same unsigned tx under
/// different signatures must not collide.
fn pack_credentials(creds: &[Credential], packer: &Packer) -> Result<()> {
    packer.pack_u32(creds.len() as u32)?;
    for cred in creds {
        cred.pack_into(packer)?;
    }
    Ok(())
}

/// Block lifecycle state, tracked by the VM alongside each in-flight
/// block (not part of the block's own wire bytes). ref. §4.5 "States of a
/// block: Proposed -> Verified -> {Accepted | Rejected}."
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Proposed,
    Verified,
    Accepted,
    Rejected,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::platformvm::txs::BaseTx;

    fn sample_advance_time_block(parent: ids::Id) -> Block {
        Block::new_proposal(parent, 1, 500, ProposalTx::AdvanceTime(advance_time::Tx { new_time: 500 })).unwrap()
    }

    #[test]
    fn test_block_id_is_content_addressed() {
        let parent = ids::Id::sha256("genesis");
        let a = sample_advance_time_block(parent);
        let b = sample_advance_time_block(parent);
        assert_eq!(a.id, b.id);

        let c = Block::new_proposal(parent, 1, 501, ProposalTx::AdvanceTime(advance_time::Tx { new_time: 501 })).unwrap();
        assert_ne!(a.id, c.id);
    }

    #[test]
    fn test_proposal_block_produces_commit_and_abort_options() {
        let parent = ids::Id::sha256("genesis");
        let proposal = sample_advance_time_block(parent);
        let (commit, abort) = proposal.options(600).unwrap().unwrap();
        assert_eq!(commit.parent_id, proposal.id);
        assert_eq!(abort.parent_id, proposal.id);
        assert_ne!(commit.id, abort.id);
    }

    /// ref. §8 scenario 5 "accepting Abort leaves T unchanged; accepting
    /// Commit sets T=newT."
    #[test]
    fn test_advance_time_commit_vs_abort_diverge() {
        use crate::platformvm::state::State;
        let config = Config::default_mainnet();
        let state = State::new_in_memory();

        let tx = ProposalTx::AdvanceTime(advance_time::Tx { new_time: 500 });

        let mut commit_diff = state.new_diff(None);
        commit_diff.timestamp = 0;
        tx.execute_commit(&mut commit_diff, &config, 1.0, true).unwrap();
        assert_eq!(commit_diff.timestamp, 500);

        let mut abort_diff = state.new_diff(None);
        abort_diff.timestamp = 0;
        tx.execute_abort(&mut abort_diff, &config, 1.0, true).unwrap();
        assert_eq!(abort_diff.timestamp, 0);
    }

    #[test]
    fn test_standard_block_batches_decision_txs() {
        let parent = ids::Id::sha256("genesis");
        let subnet_tx = create_subnet::Tx {
            base_tx: BaseTx {
                network_id: 1,
                blockchain_id: ids::Id::empty(),
                inputs: vec![],
                outputs: vec![],
                memo: None,
            },
            owner: crate::key::secp256k1::txs::OutputOwners::new(0, 1, &[crate::ids::short::Id::from_slice(&[1])]),
        };
        let block = Block::new_standard(parent, 1, 0, vec![DecisionTx::CreateSubnet(subnet_tx, vec![])]).unwrap();
        assert!(matches!(block.body, BlockBody::Standard { .. }));
    }
}
