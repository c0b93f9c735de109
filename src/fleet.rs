//! The built-in buildbot worker fleet.
//!
//! Each entry becomes one `<name>.yaml` manifest. Adding or retiring a
//! worker means editing this list (or passing a fleet config) and
//! re-running `gen-slaves`.

/// Worker names, in generation order.
pub const DEFAULT_WORKERS: &[&str] = &[
    "slave-android",
    "slave-debian-jessie-32",
    "slave-debian-jessie-64",
    "slave-fedora-25-32",
    "slave-fedora-25-64",
    "slave-fedora-26-32",
    "slave-fedora-26-64",
    "slave-mac-cross",
    "slave-mingw",
    "slave-spotify-blob-32",
    "slave-spotify-blob-64",
    "slave-transifex",
    "slave-ubuntu-trusty-32",
    "slave-ubuntu-trusty-64",
    "slave-ubuntu-xenial-32",
    "slave-ubuntu-xenial-64",
    "slave-ubuntu-zesty-32",
    "slave-ubuntu-zesty-64",
    "slave-ubuntu-bionic-32",
    "slave-ubuntu-bionic-64",
    "slave-ubuntu-cosmic-32",
    "slave-ubuntu-cosmic-64",
];

/// The built-in worker list as owned strings.
pub fn default_workers() -> Vec<String> {
    DEFAULT_WORKERS.iter().map(|s| s.to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fleet_has_twenty_two_workers() {
        assert_eq!(DEFAULT_WORKERS.len(), 22);
    }

    #[test]
    fn fleet_order_is_stable() {
        let workers = default_workers();
        assert_eq!(workers.first().map(String::as_str), Some("slave-android"));
        assert_eq!(workers.last().map(String::as_str), Some("slave-ubuntu-cosmic-64"));
    }

    #[test]
    fn worker_names_are_path_safe() {
        for name in DEFAULT_WORKERS {
            assert!(!name.is_empty());
            assert!(!name.contains('/'), "{} contains a path separator", name);
            assert!(name.starts_with("slave-"));
        }
    }
}
