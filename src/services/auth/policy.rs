//! Named authorization policies evaluated against the request [`Principal`].
//!
//! Responsibility:
//! - Define the closed set of roles and requirement predicates.
//! - Evaluate a policy conjunctively: every requirement must pass.
//! - Deny is a value (`Decision::Deny`), never an error reaching handlers.
//!
//! The `PolicySet` is built once at startup and kept read-only in
//! `AppState`; evaluation only reads the principal's claims.

use std::str::FromStr;

use crate::services::auth::principal::Principal;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Admin,
    Editor,
    Reader,
}

impl Role {
    pub fn as_claim(&self) -> &'static str {
        match self {
            Role::Admin => "Admin",
            Role::Editor => "Editor",
            Role::Reader => "Reader",
        }
    }
}

impl FromStr for Role {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("admin") {
            Ok(Role::Admin)
        } else if s.eq_ignore_ascii_case("editor") {
            Ok(Role::Editor)
        } else if s.eq_ignore_ascii_case("reader") {
            Ok(Role::Reader)
        } else {
            Err(())
        }
    }
}

/// Policy names as routes refer to them.
pub mod names {
    pub const SHOULD_BE_AN_ADMIN: &str = "ShouldBeAnAdmin";
    pub const SHOULD_BE_AN_EDITOR: &str = "ShouldBeAnEditor";
    pub const SHOULD_BE_A_READER: &str = "ShouldBeAReader";
}

/// One atomic predicate over the principal's claims.
///
/// A closed set on purpose: adding a requirement kind is an explicit
/// change here, not a new subclass somewhere else.
#[derive(Debug, Clone, Copy)]
pub enum Requirement {
    Authenticated,
    HasRoleClaim,
    RoleOneOf(&'static [Role]),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    Allow,
    Deny(&'static str),
}

#[derive(Debug, Clone)]
pub struct Policy {
    name: &'static str,
    requirements: &'static [Requirement],
}

impl Policy {
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// All requirements must pass; the first failure wins.
    pub fn evaluate(&self, principal: Option<&Principal>) -> Decision {
        for requirement in self.requirements {
            let passed = match requirement {
                Requirement::Authenticated => principal.is_some(),
                Requirement::HasRoleClaim => {
                    principal.is_some_and(Principal::has_role_claim)
                }
                Requirement::RoleOneOf(allowed) => {
                    principal.is_some_and(|p| p.is_in_any(allowed))
                }
            };

            if !passed {
                return Decision::Deny(match requirement {
                    Requirement::Authenticated => "authentication required",
                    Requirement::HasRoleClaim => "no role claim present",
                    Requirement::RoleOneOf(_) => "role not permitted",
                });
            }
        }
        Decision::Allow
    }
}

/// Immutable policy table, built once at startup.
#[derive(Debug, Clone)]
pub struct PolicySet {
    policies: Vec<Policy>,
}

impl PolicySet {
    /// Role acceptance is hierarchical: Admin may do anything an Editor
    /// may, Editor anything a Reader may.
    pub fn builtin() -> Self {
        const ADMIN_REQS: &[Requirement] = &[
            Requirement::Authenticated,
            Requirement::HasRoleClaim,
            Requirement::RoleOneOf(&[Role::Admin]),
        ];
        const EDITOR_REQS: &[Requirement] = &[
            Requirement::Authenticated,
            Requirement::HasRoleClaim,
            Requirement::RoleOneOf(&[Role::Admin, Role::Editor]),
        ];
        const READER_REQS: &[Requirement] = &[
            Requirement::Authenticated,
            Requirement::HasRoleClaim,
            Requirement::RoleOneOf(&[Role::Admin, Role::Editor, Role::Reader]),
        ];

        Self {
            policies: vec![
                Policy {
                    name: names::SHOULD_BE_AN_ADMIN,
                    requirements: ADMIN_REQS,
                },
                Policy {
                    name: names::SHOULD_BE_AN_EDITOR,
                    requirements: EDITOR_REQS,
                },
                Policy {
                    name: names::SHOULD_BE_A_READER,
                    requirements: READER_REQS,
                },
            ],
        }
    }

    pub fn get(&self, name: &str) -> Option<&Policy> {
        self.policies.iter().find(|p| p.name() == name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn principal(roles: &[&str]) -> Principal {
        Principal::new("test-user", roles.iter().map(|s| s.to_string()).collect())
    }

    #[test]
    fn builtin_set_exposes_all_three_policies() {
        let set = PolicySet::builtin();
        for name in [
            names::SHOULD_BE_AN_ADMIN,
            names::SHOULD_BE_AN_EDITOR,
            names::SHOULD_BE_A_READER,
        ] {
            assert!(set.get(name).is_some(), "missing policy {name}");
        }
        assert!(set.get("NoSuchPolicy").is_none());
    }

    #[test]
    fn unauthenticated_is_denied() {
        let set = PolicySet::builtin();
        let policy = set.get(names::SHOULD_BE_A_READER).unwrap();
        assert_eq!(
            policy.evaluate(None),
            Decision::Deny("authentication required")
        );
    }

    #[test]
    fn missing_role_claim_is_denied() {
        let set = PolicySet::builtin();
        let policy = set.get(names::SHOULD_BE_A_READER).unwrap();
        assert_eq!(
            policy.evaluate(Some(&principal(&[]))),
            Decision::Deny("no role claim present")
        );
    }

    #[test]
    fn reader_cannot_pass_editor_policy() {
        let set = PolicySet::builtin();
        let policy = set.get(names::SHOULD_BE_AN_EDITOR).unwrap();
        assert_eq!(
            policy.evaluate(Some(&principal(&["Reader"]))),
            Decision::Deny("role not permitted")
        );
    }

    #[test]
    fn roles_are_hierarchical() {
        let set = PolicySet::builtin();
        let reader_policy = set.get(names::SHOULD_BE_A_READER).unwrap();
        let admin_policy = set.get(names::SHOULD_BE_AN_ADMIN).unwrap();

        for role in ["Admin", "Editor", "Reader"] {
            assert_eq!(
                reader_policy.evaluate(Some(&principal(&[role]))),
                Decision::Allow,
                "{role} should satisfy the reader policy"
            );
        }
        assert_eq!(
            admin_policy.evaluate(Some(&principal(&["Editor"]))),
            Decision::Deny("role not permitted")
        );
        assert_eq!(admin_policy.evaluate(Some(&principal(&["Admin"]))), Decision::Allow);
    }
}
