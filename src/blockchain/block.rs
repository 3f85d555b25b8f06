use chrono::{Local, NaiveDateTime, SubsecRound};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use super::{GENESIS_PREVIOUS_HASH, GENESIS_PROOF};

/// A single entry of the ledger. Immutable once appended.
// Field order is the key order of `/get_chain` output; `hash()` sorts on its own.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Block {
    pub index: u64,
    pub previous_hash: String,
    pub proof: u64,
    #[serde(with = "timestamp_text")]
    pub timestamp: NaiveDateTime, // local wall-clock time
}

impl Block {
    /// The fixed first block: index 1, proof 1, previous hash "0".
    pub fn genesis() -> Self {
        Self::new(1, GENESIS_PROOF, GENESIS_PREVIOUS_HASH.to_string())
    }

    /// Build a block stamped with the current local time, truncated to the
    /// microsecond precision of its text form.
    pub fn new(index: u64, proof: u64, previous_hash: String) -> Self {
        let timestamp = Local::now().naive_local().trunc_subsecs(6);
        Self::with_timestamp(index, proof, previous_hash, timestamp)
    }

    pub fn with_timestamp(
        index: u64,
        proof: u64,
        previous_hash: String,
        timestamp: NaiveDateTime,
    ) -> Self {
        Self {
            index,
            previous_hash,
            proof,
            timestamp,
        }
    }

    /// Compact JSON with sorted keys, e.g.
    /// `{"index":1,"previous_hash":"0","proof":1,"timestamp":"2024-01-01 00:00:00.000000"}`.
    pub fn canonical_json(&self) -> String {
        // serde_json's Map is a BTreeMap, so going through Value sorts the keys.
        let value = serde_json::to_value(self).expect("block serializes to json");
        value.to_string()
    }

    /// SHA-256 (lowercase hex) of the canonical JSON form.
    pub fn hash(&self) -> String {
        let mut hasher = Sha256::new();
        hasher.update(self.canonical_json().as_bytes());
        hex::encode(hasher.finalize())
    }
}

/// Text form of block timestamps: `YYYY-MM-DD HH:MM:SS.ffffff`.
/// The fractional part is optional when reading.
pub mod timestamp_text {
    use chrono::NaiveDateTime;
    use serde::{Deserialize, Deserializer, Serializer, de::Error};

    pub const FORMAT: &str = "%Y-%m-%d %H:%M:%S%.6f";
    const PARSE_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.f";

    pub fn serialize<S>(ts: &NaiveDateTime, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(&ts.format(FORMAT))
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<NaiveDateTime, D::Error>
    where
        D: Deserializer<'de>,
    {
        let text = String::deserialize(deserializer)?;
        NaiveDateTime::parse_from_str(&text, PARSE_FORMAT).map_err(D::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::Block;
    use chrono::NaiveDate;

    fn fixed_block() -> Block {
        let ts = NaiveDate::from_ymd_opt(2024, 1, 1)
            .unwrap()
            .and_hms_micro_opt(0, 0, 0, 0)
            .unwrap();
        Block::with_timestamp(1, 1, "0".into(), ts)
    }

    #[test]
    fn genesis_has_fixed_fields() {
        let g = Block::genesis();
        assert_eq!(g.index, 1);
        assert_eq!(g.proof, 1);
        assert_eq!(g.previous_hash, "0");
    }

    #[test]
    fn canonical_json_is_sorted_and_compact() {
        assert_eq!(
            fixed_block().canonical_json(),
            r#"{"index":1,"previous_hash":"0","proof":1,"timestamp":"2024-01-01 00:00:00.000000"}"#
        );
    }

    #[test]
    fn hash_matches_known_digest() {
        assert_eq!(
            fixed_block().hash(),
            "c4e5dabcaa6bfdf087e70ba68cfed451967333d00fc3d653dcd7feb519d9ca95"
        );
    }

    #[test]
    fn hash_is_deterministic() {
        let b = Block::genesis();
        assert_eq!(b.hash(), b.hash());
        assert_eq!(b.hash().len(), 64);
    }

    #[test]
    fn any_field_change_alters_hash() {
        let base = fixed_block();
        let original = base.hash();

        let mut b = base.clone();
        b.index = 2;
        assert_ne!(b.hash(), original);

        let mut b = base.clone();
        b.proof = 2;
        assert_ne!(b.hash(), original);

        let mut b = base.clone();
        b.previous_hash = "1".into();
        assert_ne!(b.hash(), original);

        let mut b = base.clone();
        b.timestamp += chrono::Duration::microseconds(1);
        assert_ne!(b.hash(), original);
    }

    #[test]
    fn timestamp_text_round_trips_through_json() {
        let b = fixed_block();
        let json = serde_json::to_string(&b).unwrap();
        let back: Block = serde_json::from_str(&json).unwrap();
        assert_eq!(back, b);
    }

    #[test]
    fn fresh_block_survives_json() {
        let b = Block::new(2, 533, "abc".into());
        let back: Block = serde_json::from_str(&serde_json::to_string(&b).unwrap()).unwrap();
        assert_eq!(back, b);
        assert_eq!(back.hash(), b.hash());
    }

    #[test]
    fn timestamp_without_fraction_is_accepted() {
        let json = r#"{"index":1,"previous_hash":"0","proof":1,"timestamp":"2024-01-01 00:00:00"}"#;
        let b: Block = serde_json::from_str(json).unwrap();
        assert_eq!(b, fixed_block());
    }
}
