//! Sub-Resource Integrity digests for local files: base64-encoded
//! SHA-256/384/512 hashes in the `<algorithm>-<digest>` form used by
//! `integrity` attributes on `<script>` and `<link>` tags.

pub mod cli;
pub mod config;
pub mod error;
pub mod output;
pub mod processor;
pub mod resolver;
pub mod signal;
pub mod util;
