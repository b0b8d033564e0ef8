//! A minimal synchronous key/value store, the seam between the staking
//! state machine and a real disk-backed database.
//!
//! Modeled on the base crate's `subnet::rpc::database::Database` trait
//! contract, stripped of its `async_trait`/tonic plumbing: §5 of the
//! staking VM is single-threaded and synchronous, so nothing here is
//! `async`.
use std::collections::BTreeMap;

use crate::errors::{Error, Result};

/// ref. <https://pkg.go.dev/github.com/ava-labs/avalanchego/database#KeyValueReaderWriterDeleter>
pub trait Database {
    fn has(&self, key: &[u8]) -> Result<bool>;
    fn get(&self, key: &[u8]) -> Result<Vec<u8>>;
    fn put(&mut self, key: &[u8], value: &[u8]) -> Result<()>;
    fn delete(&mut self, key: &[u8]) -> Result<()>;

    /// Keys (sorted ascending) whose bytes start with `prefix`, beginning
    /// at the first key `>= start` and yielding at most `limit` results.
    /// `limit == 0` means unbounded.
    fn iter_prefix(&self, prefix: &[u8], start: &[u8], limit: usize) -> Result<Vec<(Vec<u8>, Vec<u8>)>>;

    /// Atomically applies every operation in `batch`, or none of them.
    fn write_batch(&mut self, batch: Batch) -> Result<()>;
}

/// A set of puts/deletes to be applied atomically by `Database::write_batch`.
/// ref. <https://pkg.go.dev/github.com/ava-labs/avalanchego/database#Batch>
#[derive(Debug, Clone, Default)]
pub struct Batch {
    ops: Vec<Op>,
}

#[derive(Debug, Clone)]
enum Op {
    Put(Vec<u8>, Vec<u8>),
    Delete(Vec<u8>),
}

impl Batch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn put(&mut self, key: &[u8], value: &[u8]) {
        self.ops.push(Op::Put(key.to_vec(), value.to_vec()));
    }

    pub fn delete(&mut self, key: &[u8]) {
        self.ops.push(Op::Delete(key.to_vec()));
    }

    pub fn is_empty(&self) -> bool {
        self.ops.is_empty()
    }

    pub fn len(&self) -> usize {
        self.ops.len()
    }
}

/// An in-memory, `BTreeMap`-backed `Database`. Used by tests and by
/// embedding binaries that do not need durability.
#[derive(Debug, Clone, Default)]
pub struct MemDb {
    state: BTreeMap<Vec<u8>, Vec<u8>>,
    closed: bool,
}

impl MemDb {
    pub fn new() -> Self {
        Self::default()
    }

    fn check_open(&self) -> Result<()> {
        if self.closed {
            return Err(Error::state("database is closed"));
        }
        Ok(())
    }

    pub fn close(&mut self) {
        self.closed = true;
    }
}

impl Database for MemDb {
    fn has(&self, key: &[u8]) -> Result<bool> {
        self.check_open()?;
        Ok(self.state.contains_key(key))
    }

    fn get(&self, key: &[u8]) -> Result<Vec<u8>> {
        self.check_open()?;
        self.state
            .get(key)
            .cloned()
            .ok_or_else(|| Error::state(format!("not found: {}", hex::encode(key))))
    }

    fn put(&mut self, key: &[u8], value: &[u8]) -> Result<()> {
        self.check_open()?;
        self.state.insert(key.to_vec(), value.to_vec());
        Ok(())
    }

    fn delete(&mut self, key: &[u8]) -> Result<()> {
        self.check_open()?;
        self.state.remove(key);
        Ok(())
    }

    fn iter_prefix(&self, prefix: &[u8], start: &[u8], limit: usize) -> Result<Vec<(Vec<u8>, Vec<u8>)>> {
        self.check_open()?;
        let mut out = Vec::new();
        for (k, v) in self.state.range(start.to_vec()..) {
            if !k.starts_with(prefix) {
                if k.as_slice() > prefix && !k.starts_with(prefix) {
                    // BTreeMap is sorted; once we've moved past the prefix
                    // range entirely we can stop early.
                    if k.as_slice() > vec_upper_bound(prefix).as_slice() {
                        break;
                    }
                }
                continue;
            }
            out.push((k.clone(), v.clone()));
            if limit > 0 && out.len() >= limit {
                break;
            }
        }
        Ok(out)
    }

    fn write_batch(&mut self, batch: Batch) -> Result<()> {
        self.check_open()?;
        for op in batch.ops {
            match op {
                Op::Put(k, v) => {
                    self.state.insert(k, v);
                }
                Op::Delete(k) => {
                    self.state.remove(&k);
                }
            }
        }
        Ok(())
    }
}

/// Smallest byte string that sorts strictly after every string with this
/// prefix, or `prefix` itself if no such bound exists (all-0xff prefix).
fn vec_upper_bound(prefix: &[u8]) -> Vec<u8> {
    let mut v = prefix.to_vec();
    for i in (0..v.len()).rev() {
        if v[i] != 0xff {
            v[i] += 1;
            v.truncate(i + 1);
            return v;
        }
    }
    v
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_put_get_delete() {
        let mut db = MemDb::new();
        assert!(!db.has(b"foo").unwrap());
        db.put(b"foo", b"bar").unwrap();
        assert!(db.has(b"foo").unwrap());
        assert_eq!(db.get(b"foo").unwrap(), b"bar");
        db.delete(b"foo").unwrap();
        assert!(!db.has(b"foo").unwrap());
    }

    #[test]
    fn test_iter_prefix_sorted_and_limited() {
        let mut db = MemDb::new();
        db.put(b"utxo/a", b"1").unwrap();
        db.put(b"utxo/b", b"2").unwrap();
        db.put(b"utxo/c", b"3").unwrap();
        db.put(b"tx/x", b"9").unwrap();

        let all = db.iter_prefix(b"utxo/", b"utxo/", 0).unwrap();
        assert_eq!(all.len(), 3);
        assert_eq!(all[0].0, b"utxo/a");

        let limited = db.iter_prefix(b"utxo/", b"utxo/", 2).unwrap();
        assert_eq!(limited.len(), 2);
    }

    #[test]
    fn test_batch_is_atomic_in_effect() {
        let mut db = MemDb::new();
        let mut batch = Batch::new();
        batch.put(b"a", b"1");
        batch.put(b"b", b"2");
        batch.delete(b"a");
        db.write_batch(batch).unwrap();
        assert!(!db.has(b"a").unwrap());
        assert_eq!(db.get(b"b").unwrap(), b"2");
    }

    #[test]
    fn test_closed_database_errors() {
        let mut db = MemDb::new();
        db.close();
        assert!(db.get(b"a").is_err());
        assert!(db.put(b"a", b"1").is_err());
    }
}
