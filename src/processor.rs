use std::fs::{self, File, Metadata};
use std::io::{self, BufReader, Read};
use std::path::{Path, PathBuf};

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use sha2::{Digest, Sha256, Sha384, Sha512};

use crate::config::{self, Algorithm, Config};

// ============================================================================
// Result Structures
// ============================================================================

/// Result of hashing a single resolved path.
#[derive(Debug, Clone)]
pub struct HashResult {
    /// Path exactly as it was resolved (echoed back in the output line)
    pub path: PathBuf,
    /// What happened to this path
    pub outcome: Outcome,
}

/// Per-file outcome. Failures become inline result lines and never abort
/// the rest of the batch.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    /// Full integrity string, `<algorithm>-<base64 digest>`
    Hashed(String),
    /// The path does not exist
    NotFound,
    /// The path exists but could not be hashed
    Unreadable(String),
}

// ============================================================================
// Digest Computation
// ============================================================================

/// Hash everything `reader` yields with digest `D`, returning the raw
/// digest bytes.
fn digest_reader<D: Digest, R: Read>(reader: &mut R) -> io::Result<Vec<u8>> {
    let mut hasher = D::new();
    let mut buffer = [0u8; config::BUFFER_SIZE];

    loop {
        let bytes_read = reader.read(&mut buffer)?;
        if bytes_read == 0 {
            break;
        }
        hasher.update(&buffer[..bytes_read]);
    }

    Ok(hasher.finalize().to_vec())
}

/// Compute the raw digest of `reader` with the selected algorithm.
pub fn digest_with<R: Read>(algorithm: Algorithm, reader: &mut R) -> io::Result<Vec<u8>> {
    match algorithm {
        Algorithm::Sha256 => digest_reader::<Sha256, _>(reader),
        Algorithm::Sha384 => digest_reader::<Sha384, _>(reader),
        Algorithm::Sha512 => digest_reader::<Sha512, _>(reader),
    }
}

/// Assemble the integrity string from raw digest bytes: the algorithm label,
/// a dash, and the standard (padded) base64 encoding of the digest.
pub fn integrity_string(algorithm: Algorithm, digest: &[u8]) -> String {
    format!("{}-{}", algorithm.label(), STANDARD.encode(digest))
}

// ============================================================================
// File Processing
// ============================================================================

/// Hash one file. Every failure maps into an inline outcome; the file
/// handle is scoped to this call and released on every path out. The file
/// is read as raw bytes - integrity digests are over the exact byte
/// content, so no text decoding or newline translation may happen here.
pub fn process_file(path: &Path, config: &Config) -> HashResult {
    let outcome = match fs::metadata(path) {
        Err(e) if e.kind() == io::ErrorKind::NotFound => Outcome::NotFound,
        Err(e) => Outcome::Unreadable(e.to_string()),
        Ok(metadata) => hash_regular_file(path, config, &metadata),
    };

    HashResult {
        path: path.to_path_buf(),
        outcome,
    }
}

fn hash_regular_file(path: &Path, config: &Config, metadata: &Metadata) -> Outcome {
    if metadata.is_dir() {
        return Outcome::Unreadable("is a directory".to_string());
    }

    if metadata.len() > config.max_file_size {
        return Outcome::Unreadable(format!(
            "exceeds the maximum file size of {} bytes (use --max-file-size to raise it)",
            config.max_file_size
        ));
    }

    let file = match File::open(path) {
        Ok(f) => f,
        // The file can disappear between the metadata call and the open
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Outcome::NotFound,
        Err(e) => return Outcome::Unreadable(e.to_string()),
    };

    let mut reader = BufReader::with_capacity(config::BUFFER_SIZE, file);
    match digest_with(config.algorithm, &mut reader) {
        Ok(digest) => Outcome::Hashed(integrity_string(config.algorithm, &digest)),
        Err(e) => Outcome::Unreadable(e.to_string()),
    }
}
