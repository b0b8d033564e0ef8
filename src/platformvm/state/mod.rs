//! Persistent base plus an in-flight diff chain on top of it.
//!
//! ref. §4.7 "layered structure: persistent base + ordered stack of
//! per-block diffs; Accept folds the oldest accepted diff into base
//! atomically; Reject discards a diff and its descendants."
//!
//! Scalar fields (timestamp, supply, staker registries) are small and
//! bounded, so each diff carries a full materialized copy rather than a
//! delta; only the UTXO set and tx-status index are sparse overlays that
//! fall through a parent chain to the persisted base.
use std::{
    cell::RefCell,
    collections::HashMap,
    rc::Rc,
};

use crate::{
    database::{Batch, Database, MemDb},
    errors::{Error, Result},
    ids::{self, short},
    platformvm::{
        stakers::StakerRegistry,
        txs::{utxo, Status},
    },
};

/// Control-key registry for a `CreateSubnetTx`-declared subnet.
/// ref. §4.4 "CreateSubnetTx registers a new subnet with control keys and
/// threshold"
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct SubnetInfo {
    pub control_keys: Vec<short::Id>,
    pub threshold: u32,
}

/// ref. §4.4 "CreateChainTx registers a chain under a subnet and records
/// its genesis bytes."
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ChainInfo {
    pub subnet_id: ids::Id,
    pub chain_name: String,
    pub vm_id: ids::Id,
    pub genesis_data: Vec<u8>,
}

fn utxo_key(symbol: &ids::Id) -> Vec<u8> {
    [b"utxo/".as_ref(), symbol.as_ref()].concat()
}

fn subnet_key(subnet_id: &ids::Id) -> Vec<u8> {
    [b"subnet/".as_ref(), subnet_id.as_ref()].concat()
}

fn chain_key(chain_id: &ids::Id) -> Vec<u8> {
    [b"chain/".as_ref(), chain_id.as_ref()].concat()
}

fn addr_index_key(addr: &short::Id, symbol: &[u8]) -> Vec<u8> {
    [b"addr/".as_ref(), addr.as_ref(), b"/", symbol].concat()
}

fn tx_key(tx_id: &ids::Id) -> Vec<u8> {
    [b"tx/".as_ref(), tx_id.as_ref()].concat()
}

fn encode_tx_status(status: Status, bytes: &[u8]) -> Vec<u8> {
    let tag: u8 = match status {
        Status::Processing => 0,
        Status::Committed => 1,
        Status::Aborted => 2,
    };
    let mut out = Vec::with_capacity(1 + bytes.len());
    out.push(tag);
    out.extend_from_slice(bytes);
    out
}

fn decode_tx_status(raw: &[u8]) -> Result<(Status, Vec<u8>)> {
    let (tag, rest) = raw
        .split_first()
        .ok_or_else(|| Error::state("empty tx status record"))?;
    let status = match tag {
        0 => Status::Processing,
        1 => Status::Committed,
        2 => Status::Aborted,
        _ => return Err(Error::state("unknown tx status tag")),
    };
    Ok((status, rest.to_vec()))
}

/// The last-committed platform chain state: everything a freshly-started
/// node would read back from disk. ref. §6 "persistent layout"
pub struct State {
    db: Rc<RefCell<Box<dyn Database>>>,
    pub timestamp: u64,
    pub supply: u64,
    pub current_stakers: StakerRegistry,
    pub pending_stakers: StakerRegistry,
    pub last_accepted: ids::Id,
}

impl State {
    pub fn new(db: Box<dyn Database>) -> Self {
        Self {
            db: Rc::new(RefCell::new(db)),
            timestamp: 0,
            supply: 0,
            current_stakers: StakerRegistry::new(),
            pending_stakers: StakerRegistry::new(),
            last_accepted: ids::Id::empty(),
        }
    }

    pub fn new_in_memory() -> Self {
        Self::new(Box::new(MemDb::new()))
    }

    /// Builds a diff on top of this base (`parent == None`) or on top of an
    /// already-verified diff (e.g. a Commit/Abort block verified against
    /// its ProposalBlock's diff). ref. §4.5 "verified against the same
    /// parent diff"
    pub fn new_diff(&self, parent: Option<Rc<Diff>>) -> Diff {
        match parent {
            Some(p) => Diff {
                db: Rc::clone(&self.db),
                parent: Some(p.clone()),
                timestamp: p.timestamp,
                supply: p.supply,
                current_stakers: p.current_stakers.clone(),
                pending_stakers: p.pending_stakers.clone(),
                utxo_overlay: HashMap::new(),
                tx_status_overlay: HashMap::new(),
                subnet_overlay: HashMap::new(),
                chain_overlay: HashMap::new(),
            },
            None => Diff {
                db: Rc::clone(&self.db),
                parent: None,
                timestamp: self.timestamp,
                supply: self.supply,
                current_stakers: self.current_stakers.clone(),
                pending_stakers: self.pending_stakers.clone(),
                utxo_overlay: HashMap::new(),
                tx_status_overlay: HashMap::new(),
                subnet_overlay: HashMap::new(),
                chain_overlay: HashMap::new(),
            },
        }
    }

    pub fn get_utxo(&self, utxo_id: &utxo::Id) -> Result<Option<utxo::Utxo>> {
        let symbol = utxo_id.symbol()?;
        match self.db.borrow().get(&utxo_key(&symbol)) {
            Ok(bytes) => Ok(Some(utxo::Utxo::from_bytes(&bytes)?)),
            Err(_) => Ok(None),
        }
    }

    pub fn get_subnet(&self, subnet_id: &ids::Id) -> Result<Option<SubnetInfo>> {
        match self.db.borrow().get(&subnet_key(subnet_id)) {
            Ok(bytes) => Ok(Some(
                serde_json::from_slice(&bytes).map_err(|e| Error::state(format!("decode subnet: {e}")))?,
            )),
            Err(_) => Ok(None),
        }
    }

    pub fn get_chain(&self, chain_id: &ids::Id) -> Result<Option<ChainInfo>> {
        match self.db.borrow().get(&chain_key(chain_id)) {
            Ok(bytes) => Ok(Some(
                serde_json::from_slice(&bytes).map_err(|e| Error::state(format!("decode chain: {e}")))?,
            )),
            Err(_) => Ok(None),
        }
    }

    /// Addresses' owned UTXO IDs, sorted ascending, `limit == 0` unbounded.
    /// ref. §4.2 "IDsByAddress" (reads only the last-committed state; a
    /// read against an in-flight diff would require holding the VM's lock
    /// across the call, which the RPC surface does not do).
    pub fn ids_by_address(&self, addr: &short::Id, limit: usize) -> Result<Vec<ids::Id>> {
        let prefix = [b"addr/".as_ref(), addr.as_ref(), b"/"].concat();
        let rows = self.db.borrow().iter_prefix(&prefix, &prefix, limit)?;
        rows.into_iter()
            .map(|(k, _)| {
                let symbol = &k[prefix.len()..];
                Ok(ids::Id::from_slice(symbol))
            })
            .collect()
    }

    pub fn get_tx_status(&self, tx_id: &ids::Id) -> Result<Option<(Status, Vec<u8>)>> {
        match self.db.borrow().get(&tx_key(tx_id)) {
            Ok(raw) => Ok(Some(decode_tx_status(&raw)?)),
            Err(_) => Ok(None),
        }
    }

    /// Folds `diff`'s cumulative effect (walking its full parent chain)
    /// into base, atomically. ref. §4.7 "Accept ... folds the oldest
    /// accepted diff into base atomically ... a failed Commit must leave
    /// base untouched and is fatal."
    pub fn commit_diff(&mut self, diff: &Diff, accepted_block_id: ids::Id) -> Result<()> {
        let mut utxo_changes = HashMap::new();
        diff.collect_utxo_overlay(&mut utxo_changes);
        let mut tx_changes = HashMap::new();
        diff.collect_tx_status_overlay(&mut tx_changes);
        let mut subnet_changes = HashMap::new();
        diff.collect_subnet_overlay(&mut subnet_changes);
        let mut chain_changes = HashMap::new();
        diff.collect_chain_overlay(&mut chain_changes);

        let mut batch = Batch::new();
        {
            let db = self.db.borrow();
            for (symbol_key, maybe_utxo) in &utxo_changes {
                let full_key = [b"utxo/".as_ref(), symbol_key.as_slice()].concat();
                match maybe_utxo {
                    Some(u) => {
                        let bytes = u.to_bytes()?;
                        for addr in u.addresses() {
                            batch.put(&addr_index_key(addr, symbol_key), &[]);
                        }
                        batch.put(&full_key, &bytes);
                    }
                    None => {
                        if let Ok(old_bytes) = db.get(&full_key) {
                            if let Ok(old) = utxo::Utxo::from_bytes(&old_bytes) {
                                for addr in old.addresses() {
                                    batch.delete(&addr_index_key(addr, symbol_key));
                                }
                            }
                        }
                        batch.delete(&full_key);
                    }
                }
            }
        }
        for (tx_id, (status, bytes)) in tx_changes {
            batch.put(&tx_key(&tx_id), &encode_tx_status(status, &bytes));
        }
        for (subnet_id, info) in subnet_changes {
            let bytes = serde_json::to_vec(&info).map_err(|e| Error::state(format!("encode subnet: {e}")))?;
            batch.put(&subnet_key(&subnet_id), &bytes);
        }
        for (chain_id, info) in chain_changes {
            let bytes = serde_json::to_vec(&info).map_err(|e| Error::state(format!("encode chain: {e}")))?;
            batch.put(&chain_key(&chain_id), &bytes);
        }
        batch.put(b"meta/timestamp", &diff.timestamp.to_be_bytes());
        batch.put(b"meta/supply", &diff.supply.to_be_bytes());
        batch.put(b"meta/last_accepted", accepted_block_id.as_ref());

        self.db
            .borrow_mut()
            .write_batch(batch)
            .map_err(|e| Error::state(format!("commit diff: {e}")))?;

        self.timestamp = diff.timestamp;
        self.supply = diff.supply;
        self.current_stakers = diff.current_stakers.clone();
        self.pending_stakers = diff.pending_stakers.clone();
        self.last_accepted = accepted_block_id;
        Ok(())
    }
}

/// A pending mutation layer: either built directly atop `State` or atop
/// another diff (the Commit/Abort-vs-ProposalBlock case).
#[derive(Clone)]
pub struct Diff {
    db: Rc<RefCell<Box<dyn Database>>>,
    parent: Option<Rc<Diff>>,
    pub timestamp: u64,
    pub supply: u64,
    pub current_stakers: StakerRegistry,
    pub pending_stakers: StakerRegistry,
    utxo_overlay: HashMap<Vec<u8>, Option<utxo::Utxo>>,
    tx_status_overlay: HashMap<ids::Id, (Status, Vec<u8>)>,
    subnet_overlay: HashMap<ids::Id, SubnetInfo>,
    chain_overlay: HashMap<ids::Id, ChainInfo>,
}

impl Diff {
    pub fn get_utxo(&self, utxo_id: &utxo::Id) -> Result<Option<utxo::Utxo>> {
        let symbol = utxo_id.symbol()?;
        let key = symbol.to_vec();
        if let Some(v) = self.utxo_overlay.get(&key) {
            return Ok(v.clone());
        }
        if let Some(parent) = &self.parent {
            return parent.get_utxo(utxo_id);
        }
        match self.db.borrow().get(&utxo_key(&symbol)) {
            Ok(bytes) => Ok(Some(utxo::Utxo::from_bytes(&bytes)?)),
            Err(_) => Ok(None),
        }
    }

    pub fn put_utxo(&mut self, u: utxo::Utxo) -> Result<()> {
        let key = u.utxo_id.symbol()?.to_vec();
        self.utxo_overlay.insert(key, Some(u));
        Ok(())
    }

    pub fn delete_utxo(&mut self, utxo_id: &utxo::Id) -> Result<()> {
        let key = utxo_id.symbol()?.to_vec();
        self.utxo_overlay.insert(key, None);
        Ok(())
    }

    pub fn get_tx_status(&self, tx_id: &ids::Id) -> Result<Option<(Status, Vec<u8>)>> {
        if let Some(v) = self.tx_status_overlay.get(tx_id) {
            return Ok(Some(v.clone()));
        }
        if let Some(parent) = &self.parent {
            return parent.get_tx_status(tx_id);
        }
        match self.db.borrow().get(&tx_key(tx_id)) {
            Ok(raw) => Ok(Some(decode_tx_status(&raw)?)),
            Err(_) => Ok(None),
        }
    }

    pub fn set_tx_status(&mut self, tx_id: ids::Id, status: Status, tx_bytes: Vec<u8>) {
        self.tx_status_overlay.insert(tx_id, (status, tx_bytes));
    }

    pub fn get_subnet(&self, subnet_id: &ids::Id) -> Result<Option<SubnetInfo>> {
        if let Some(v) = self.subnet_overlay.get(subnet_id) {
            return Ok(Some(v.clone()));
        }
        if let Some(parent) = &self.parent {
            return parent.get_subnet(subnet_id);
        }
        match self.db.borrow().get(&subnet_key(subnet_id)) {
            Ok(bytes) => Ok(Some(
                serde_json::from_slice(&bytes).map_err(|e| Error::state(format!("decode subnet: {e}")))?,
            )),
            Err(_) => Ok(None),
        }
    }

    pub fn put_subnet(&mut self, subnet_id: ids::Id, info: SubnetInfo) {
        self.subnet_overlay.insert(subnet_id, info);
    }

    pub fn get_chain(&self, chain_id: &ids::Id) -> Result<Option<ChainInfo>> {
        if let Some(v) = self.chain_overlay.get(chain_id) {
            return Ok(Some(v.clone()));
        }
        if let Some(parent) = &self.parent {
            return parent.get_chain(chain_id);
        }
        match self.db.borrow().get(&chain_key(chain_id)) {
            Ok(bytes) => Ok(Some(
                serde_json::from_slice(&bytes).map_err(|e| Error::state(format!("decode chain: {e}")))?,
            )),
            Err(_) => Ok(None),
        }
    }

    pub fn put_chain(&mut self, chain_id: ids::Id, info: ChainInfo) {
        self.chain_overlay.insert(chain_id, info);
    }

    fn collect_subnet_overlay(&self, out: &mut HashMap<ids::Id, SubnetInfo>) {
        if let Some(parent) = &self.parent {
            parent.collect_subnet_overlay(out);
        }
        for (k, v) in &self.subnet_overlay {
            out.insert(*k, v.clone());
        }
    }

    fn collect_chain_overlay(&self, out: &mut HashMap<ids::Id, ChainInfo>) {
        if let Some(parent) = &self.parent {
            parent.collect_chain_overlay(out);
        }
        for (k, v) in &self.chain_overlay {
            out.insert(*k, v.clone());
        }
    }

    fn collect_utxo_overlay(&self, out: &mut HashMap<Vec<u8>, Option<utxo::Utxo>>) {
        if let Some(parent) = &self.parent {
            parent.collect_utxo_overlay(out);
        }
        for (k, v) in &self.utxo_overlay {
            out.insert(k.clone(), v.clone());
        }
    }

    fn collect_tx_status_overlay(&self, out: &mut HashMap<ids::Id, (Status, Vec<u8>)>) {
        if let Some(parent) = &self.parent {
            parent.collect_tx_status_overlay(out);
        }
        for (k, v) in &self.tx_status_overlay {
            out.insert(*k, v.clone());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::key::secp256k1::txs::OutputOwners;

    fn sample_utxo(tag: u8, amount: u64) -> utxo::Utxo {
        utxo::Utxo::new(
            utxo::Id::new(ids::Id::from_slice(&[tag]), 0),
            ids::Id::empty(),
            OutputOwners::new(0, 1, &[short::Id::from_slice(&[tag])]),
            amount,
        )
    }

    #[test]
    fn test_diff_shadows_base_until_committed() {
        let state = State::new_in_memory();
        let mut diff = state.new_diff(None);
        let u = sample_utxo(1, 100);
        diff.put_utxo(u.clone()).unwrap();

        assert!(state.get_utxo(&u.utxo_id).unwrap().is_none());
        assert_eq!(diff.get_utxo(&u.utxo_id).unwrap().unwrap().amount, 100);
    }

    #[test]
    fn test_commit_diff_persists_and_updates_scalars() {
        let mut state = State::new_in_memory();
        let mut diff = state.new_diff(None);
        let u = sample_utxo(2, 500);
        diff.put_utxo(u.clone()).unwrap();
        diff.timestamp = 42;
        diff.supply = 9_000;

        let block_id = ids::Id::sha256("block-1");
        state.commit_diff(&diff, block_id).unwrap();

        assert_eq!(state.get_utxo(&u.utxo_id).unwrap().unwrap().amount, 500);
        assert_eq!(state.timestamp, 42);
        assert_eq!(state.supply, 9_000);
        assert_eq!(state.last_accepted, block_id);

        let addr = short::Id::from_slice(&[2]);
        let owned = state.ids_by_address(&addr, 0).unwrap();
        assert_eq!(owned.len(), 1);
    }

    #[test]
    fn test_commit_diff_delete_removes_address_index() {
        let mut state = State::new_in_memory();
        let mut diff = state.new_diff(None);
        let u = sample_utxo(3, 100);
        diff.put_utxo(u.clone()).unwrap();
        state.commit_diff(&diff, ids::Id::sha256("b1")).unwrap();

        let mut diff2 = state.new_diff(None);
        diff2.delete_utxo(&u.utxo_id).unwrap();
        state.commit_diff(&diff2, ids::Id::sha256("b2")).unwrap();

        assert!(state.get_utxo(&u.utxo_id).unwrap().is_none());
        let addr = short::Id::from_slice(&[3]);
        assert!(state.ids_by_address(&addr, 0).unwrap().is_empty());
    }

    #[test]
    fn test_child_diff_sees_parent_overlay_not_yet_committed() {
        let state = State::new_in_memory();
        let u = sample_utxo(4, 10);
        let mut parent = state.new_diff(None);
        parent.put_utxo(u.clone()).unwrap();
        let parent = Rc::new(parent);

        let child = state.new_diff(Some(parent.clone()));
        assert_eq!(child.get_utxo(&u.utxo_id).unwrap().unwrap().amount, 10);
    }

    #[test]
    fn test_commit_diff_persists_subnet_and_chain() {
        let mut state = State::new_in_memory();
        let mut diff = state.new_diff(None);
        let subnet_id = ids::Id::sha256("subnet-1");
        diff.put_subnet(
            subnet_id,
            SubnetInfo {
                control_keys: vec![short::Id::from_slice(&[1])],
                threshold: 1,
            },
        );
        let chain_id = ids::Id::sha256("chain-1");
        diff.put_chain(
            chain_id,
            ChainInfo {
                subnet_id,
                chain_name: "test-chain".to_string(),
                vm_id: ids::Id::sha256("vm"),
                genesis_data: vec![1, 2, 3],
            },
        );
        state.commit_diff(&diff, ids::Id::sha256("b1")).unwrap();

        let subnet = state.get_subnet(&subnet_id).unwrap().unwrap();
        assert_eq!(subnet.threshold, 1);
        let chain = state.get_chain(&chain_id).unwrap().unwrap();
        assert_eq!(chain.chain_name, "test-chain");
    }

    #[test]
    fn test_diff_sees_own_subnet_before_commit() {
        let state = State::new_in_memory();
        let mut diff = state.new_diff(None);
        let subnet_id = ids::Id::sha256("subnet-2");
        diff.put_subnet(
            subnet_id,
            SubnetInfo {
                control_keys: vec![],
                threshold: 0,
            },
        );
        assert!(state.get_subnet(&subnet_id).unwrap().is_none());
        assert!(diff.get_subnet(&subnet_id).unwrap().is_some());
    }
}
