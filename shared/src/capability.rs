//! Role-gated navigation
//!
//! A single place answers "which screens does this role get". Screens never
//! check roles themselves; they are simply unreachable when not listed here.

use serde::{Deserialize, Serialize};

use crate::models::StaffRole;

/// A navigable screen.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Destination {
    Orders,
    Billing,
    Menu,
    Tables,
    Staff,
    Report,
    Branches,
    System,
}

impl Destination {
    pub fn title(self) -> &'static str {
        match self {
            Destination::Orders => "Orders",
            Destination::Billing => "Billing",
            Destination::Menu => "Menu",
            Destination::Tables => "Tables",
            Destination::Staff => "Staff",
            Destination::Report => "Report",
            Destination::Branches => "Branches",
            Destination::System => "System",
        }
    }
}

/// Screens a role may open, in navigation order.
pub fn permitted_destinations(role: StaffRole) -> &'static [Destination] {
    use Destination::*;
    match role {
        StaffRole::Kitchen => &[Orders],
        StaffRole::Cashier => &[Orders, Billing],
        StaffRole::BranchAdmin => &[Orders, Billing, Menu, Tables, Staff, Report],
        StaffRole::SuperAdmin => &[Orders, Billing, Menu, Tables, Staff, Report, Branches],
        StaffRole::SystemAdmin => &[System],
    }
}

/// Screen shown right after login.
pub fn default_destination(role: StaffRole) -> Destination {
    match role {
        StaffRole::SystemAdmin => Destination::System,
        _ => Destination::Orders,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kitchen_sees_only_the_board() {
        assert_eq!(
            permitted_destinations(StaffRole::Kitchen),
            &[Destination::Orders]
        );
    }

    #[test]
    fn test_cashier_adds_billing() {
        assert_eq!(
            permitted_destinations(StaffRole::Cashier),
            &[Destination::Orders, Destination::Billing]
        );
    }

    #[test]
    fn test_super_admin_is_branch_admin_plus_branches() {
        let branch_admin = permitted_destinations(StaffRole::BranchAdmin);
        let super_admin = permitted_destinations(StaffRole::SuperAdmin);
        assert_eq!(&super_admin[..branch_admin.len()], branch_admin);
        assert_eq!(super_admin.last(), Some(&Destination::Branches));
    }

    #[test]
    fn test_operator_is_confined_to_the_provider_dashboard() {
        assert_eq!(
            permitted_destinations(StaffRole::SystemAdmin),
            &[Destination::System]
        );
        assert_eq!(
            default_destination(StaffRole::SystemAdmin),
            Destination::System
        );
    }

    #[test]
    fn test_everyone_else_lands_on_orders() {
        for role in StaffRole::ASSIGNABLE {
            assert_eq!(default_destination(role), Destination::Orders);
        }
    }

    #[test]
    fn test_no_tenant_role_reaches_the_provider_dashboard() {
        for role in StaffRole::ASSIGNABLE {
            assert!(!permitted_destinations(role).contains(&Destination::System));
        }
    }
}
