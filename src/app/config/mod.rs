mod load_manifest;

pub use load_manifest::{DEFAULT_MANIFEST, load_manifest, resolve_manifest_path};
