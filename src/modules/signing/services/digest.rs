use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256, Sha384, Sha512};
use std::fmt;
use std::sync::Arc;

/// Hash applied to the canonical signature string.
///
/// Implementations must be deterministic and return lowercase hex.
pub trait ChecksumDigest: Send + Sync + fmt::Debug {
    /// Algorithm name, for logging
    fn name(&self) -> &'static str;

    fn hex_digest(&self, input: &[u8]) -> String;
}

/// MD5, the gateway's default signature algorithm
#[derive(Debug, Clone, Copy, Default)]
pub struct Md5Digest;

impl ChecksumDigest for Md5Digest {
    fn name(&self) -> &'static str {
        "md5"
    }

    fn hex_digest(&self, input: &[u8]) -> String {
        format!("{:x}", md5::compute(input))
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct Sha256Digest;

impl ChecksumDigest for Sha256Digest {
    fn name(&self) -> &'static str {
        "sha256"
    }

    fn hex_digest(&self, input: &[u8]) -> String {
        hex::encode(Sha256::digest(input))
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct Sha384Digest;

impl ChecksumDigest for Sha384Digest {
    fn name(&self) -> &'static str {
        "sha384"
    }

    fn hex_digest(&self, input: &[u8]) -> String {
        hex::encode(Sha384::digest(input))
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct Sha512Digest;

impl ChecksumDigest for Sha512Digest {
    fn name(&self) -> &'static str {
        "sha512"
    }

    fn hex_digest(&self, input: &[u8]) -> String {
        hex::encode(Sha512::digest(input))
    }
}

/// Built-in algorithms selectable from configuration
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DigestAlgorithm {
    #[default]
    Md5,
    Sha256,
    Sha384,
    Sha512,
}

impl DigestAlgorithm {
    pub fn digest(&self) -> Arc<dyn ChecksumDigest> {
        match self {
            DigestAlgorithm::Md5 => Arc::new(Md5Digest),
            DigestAlgorithm::Sha256 => Arc::new(Sha256Digest),
            DigestAlgorithm::Sha384 => Arc::new(Sha384Digest),
            DigestAlgorithm::Sha512 => Arc::new(Sha512Digest),
        }
    }
}

impl fmt::Display for DigestAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.digest().name())
    }
}

impl std::str::FromStr for DigestAlgorithm {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().replace('-', "").as_str() {
            "md5" => Ok(DigestAlgorithm::Md5),
            "sha256" => Ok(DigestAlgorithm::Sha256),
            "sha384" => Ok(DigestAlgorithm::Sha384),
            "sha512" => Ok(DigestAlgorithm::Sha512),
            _ => Err(format!("Unsupported checksum algorithm: {}", s)),
        }
    }
}
