//! Authenticated identity attached to a request.
//!
//! Built by the bearer-auth middleware from verified token claims and
//! inserted into request extensions; dropped when the request ends.

use crate::services::auth::policy::Role;

#[derive(Debug, Clone)]
pub struct Principal {
    /// `sub` claim of the verified token.
    pub subject: String,
    /// Raw `roles` claim values. Unknown strings are kept as-is; they
    /// satisfy "has a role claim" but never match a concrete [`Role`].
    pub roles: Vec<String>,
}

impl Principal {
    pub fn new(subject: impl Into<String>, roles: Vec<String>) -> Self {
        Self {
            subject: subject.into(),
            roles,
        }
    }

    pub fn has_role_claim(&self) -> bool {
        !self.roles.is_empty()
    }

    pub fn is_in_any(&self, allowed: &[Role]) -> bool {
        self.roles
            .iter()
            .filter_map(|s| s.parse::<Role>().ok())
            .any(|role| allowed.contains(&role))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_role_strings_never_match() {
        let principal = Principal::new("user", vec!["Superuser".to_string()]);
        assert!(principal.has_role_claim());
        assert!(!principal.is_in_any(&[Role::Admin, Role::Editor, Role::Reader]));
    }

    #[test]
    fn role_match_is_case_insensitive() {
        let principal = Principal::new("user", vec!["reader".to_string()]);
        assert!(principal.is_in_any(&[Role::Reader]));
    }
}
