//! Read-aloud display strings.
//!
//! These helpers produce the exact text shown on the board (or handed to a
//! text-to-speech collaborator). They are pure string builders: callers can
//! invoke them at any time, whether or not speech is in progress.

use crate::Location;

/// Returns the display names for a set of locations, sorted alphabetically
/// (case-sensitive), with the spy sentinel rewritten to its label.
pub fn display_names(locations: &[Location]) -> Vec<String> {
    let mut names: Vec<String> = locations
        .iter()
        .map(|l| l.display_name().to_string())
        .collect();
    names.sort();
    names
}

/// One location name per line: the "possible locations" board.
pub fn locations_text(locations: &[Location]) -> String {
    display_names(locations).join("\n")
}

/// One role title per line for the given location.
pub fn roles_text(location: &Location) -> String {
    location.roles.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_names_are_sorted_and_rewritten() {
        let locations = vec![
            Location::new("Ship", ["Captain"]),
            Location::spy_sentinel(),
            Location::new("Bank", ["Banker"]),
        ];
        assert_eq!(
            display_names(&locations),
            vec!["Bank", "Everyone is spy!", "Ship"]
        );
    }

    #[test]
    fn test_locations_text_joins_with_newlines() {
        let locations = vec![
            Location::new("Casino", ["Gambler"]),
            Location::new("Bank", ["Banker"]),
        ];
        assert_eq!(locations_text(&locations), "Bank\nCasino");
    }

    #[test]
    fn test_roles_text_lists_roles_in_catalog_order() {
        let loc = Location::new("Casino", ["Gambler", "Dealer"]);
        assert_eq!(roles_text(&loc), "Gambler\nDealer");
    }

    #[test]
    fn test_locations_text_empty_set_is_empty_string() {
        assert_eq!(locations_text(&[]), "");
    }
}
