pub mod checksum;
pub mod digest;
pub mod field_mapper;
pub mod notification_validator;
pub mod signer;

pub use checksum::{custom_param_block, ChecksumEngine};
pub use digest::{
    ChecksumDigest, DigestAlgorithm, Md5Digest, Sha256Digest, Sha384Digest, Sha512Digest,
};
pub use notification_validator::{checksums_match, ACK_MARKER};
pub use signer::{PaymentSigner, SignedForm};
