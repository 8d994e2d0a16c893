//! Admin gate for the destructive reset operation.

use crate::config::Config;

/// Compare the supplied credentials against the configured pair.
///
/// Plain exact equality, no lockout and no attempt counter: a denied caller
/// may simply retry. The pair lives in the config file rather than in the
/// binary, so deployments can rotate it.
pub fn authorize(cfg: &Config, username: &str, password: &str) -> bool {
    username == cfg.admin_user && password == cfg.admin_password
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cfg() -> Config {
        Config::default()
    }

    #[test]
    fn default_credentials_are_accepted() {
        assert!(authorize(&cfg(), "admin", "conver"));
    }

    #[test]
    fn wrong_password_is_denied() {
        assert!(!authorize(&cfg(), "admin", "wrong"));
    }

    #[test]
    fn wrong_username_is_denied() {
        assert!(!authorize(&cfg(), "root", "conver"));
    }

    #[test]
    fn configured_credentials_override_defaults() {
        let mut c = cfg();
        c.admin_user = "ops".to_string();
        c.admin_password = "s3cret".to_string();
        assert!(authorize(&c, "ops", "s3cret"));
        assert!(!authorize(&c, "admin", "conver"));
    }
}
