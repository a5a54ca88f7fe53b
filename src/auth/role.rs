//!
//! All roles used within application
//!

use serde::{Deserialize, Serialize};
use strum::{AsRefStr, EnumString};

#[derive(Debug, Clone, Copy, PartialEq, Eq, AsRefStr, EnumString, Serialize, Deserialize)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    Faculty,
    Student,
}

#[cfg(test)]
mod test {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn role_as_ref() {
        assert_eq!(Role::Admin.as_ref(), "admin");
        assert_eq!(Role::Faculty.as_ref(), "faculty");
        assert_eq!(Role::Student.as_ref(), "student");
    }

    #[test]
    fn role_from_str() {
        let role = Role::from_str("faculty").unwrap();
        assert_eq!(role, Role::Faculty);
    }

    #[test]
    fn role_from_str_unknown() {
        let role = Role::from_str("janitor");
        assert!(role.is_err());
    }
}
