//! The built-in location catalog.

use crate::Location;

/// Returns the master list of built-in locations, in catalog order.
///
/// This does NOT include the spy sentinel: "everyone is spy" mode is a
/// pool-level toggle, not a regular catalog entry.
pub fn master_catalog() -> Vec<Location> {
    fn loc(name: &str, roles: &[&str]) -> Location {
        Location::new(name, roles.iter().copied())
    }

    vec![
        loc("Casino", &["Gambler", "Dealer", "Bartender", "Security", "Entertainer"]),
        loc("Bank", &["Banker", "Robber", "Security Guard", "Customer", "Manager"]),
        loc("Prison", &["Warden", "Guard", "Prisoner", "Escapee", "Cook"]),
        loc("Castle", &["King", "Queen", "Knight", "Maid", "Cook"]),
        loc("The Pyramids", &["Pharaoh", "Priest", "Explorer", "Archaeologist", "Tourist"]),
        loc("China", &["Emperor", "Philosopher", "Monk", "Merchant", "Invader"]),
        loc("The White House", &["President", "First Lady", "Secret Service Agent", "Reporter", "Intern"]),
        loc("Agora Hills", &["Resident", "Mayor", "Teacher", "Firefighter", "Celebrity"]),
        loc("Zami's house", &["Zami", "Sibling", "Parent", "Poolman", "Mailman"]),
        loc("Disneyland", &["Tourist", "Janitor", "Princess", "Ride Operator", "Mickey"]),
        loc("High-School", &["Principal", "Teacher", "Student", "Custodian", "Athlete", "Nerd"]),
        loc("Ship", &["Captain", "Navigator", "Prisoner", "Cleaner", "Chef"]),
        loc("Costco", &["Customer", "Cashier", "Stocker", "Manager", "Sample Giver"]),
        loc("Funeral", &["Priest", "Family Member", "Friend", "Long Time Enemy", "Gravedigger"]),
        loc("Wedding", &["Bride", "Groom", "Bridesmaid", "Groomsman", "Officiant"]),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_catalog_has_fifteen_locations() {
        assert_eq!(master_catalog().len(), 15);
    }

    #[test]
    fn test_catalog_names_are_unique() {
        let catalog = master_catalog();
        let names: HashSet<&str> = catalog.iter().map(|l| l.name.as_str()).collect();
        assert_eq!(names.len(), catalog.len());
    }

    #[test]
    fn test_catalog_excludes_spy_sentinel() {
        assert!(master_catalog().iter().all(|l| !l.is_spy_sentinel()));
    }

    #[test]
    fn test_every_location_has_roles() {
        for loc in master_catalog() {
            assert!(!loc.roles.is_empty(), "{} has no roles", loc.name);
            assert!(
                loc.roles.iter().all(|r| !r.trim().is_empty()),
                "{} has a blank role",
                loc.name
            );
        }
    }
}
