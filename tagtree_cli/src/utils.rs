// SPDX-License-Identifier: AGPL-3.0-or-later

use std::env;
use std::path::{Path, PathBuf};

use path_clean::PathClean;

/// Returns the absolute path of a file or directory.
pub fn absolute_path(path: impl AsRef<Path>) -> PathBuf {
    let path = path.as_ref();

    if path.is_absolute() {
        path.to_path_buf()
    } else {
        env::current_dir()
            .map(|current_dir| current_dir.join(path))
            .unwrap_or_else(|_| path.to_path_buf())
    }
    .clean()
}

/// Returns the filter string for `env_logger`.
///
/// Plain levels like "info" are scoped to our own crates, everything containing a "=" is handed
/// over as it is.
pub fn log_filter(log_level: &str) -> String {
    if log_level.contains('=') {
        log_level.to_string()
    } else {
        format!("tagtree={0},tagtree_cli={0}", log_level)
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::{absolute_path, log_filter};

    #[test]
    fn scope_plain_log_level() {
        assert_eq!(log_filter("debug"), "tagtree=debug,tagtree_cli=debug");
        assert_eq!(log_filter("=TRACE"), "=TRACE");
        assert_eq!(log_filter("tagtree=info,hyper=debug"), "tagtree=info,hyper=debug");
    }

    #[test]
    fn clean_absolute_path() {
        assert_eq!(
            absolute_path("/etc/tagtree/../config.toml"),
            PathBuf::from("/etc/config.toml")
        );
    }
}
