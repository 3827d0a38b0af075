use phf::{Set, phf_set};

static WATER_RESIDUE_NAMES: Set<&'static str> = phf_set! {
    "HOH", "WAT",
};

pub fn is_water_residue_name(residue_name: &str) -> bool {
    WATER_RESIDUE_NAMES.contains(residue_name.trim())
}

/// Derives an element symbol from an atom name when the source file omits
/// the element field.
///
/// The first alphabetic character of the trimmed name is taken as a
/// one-letter element. Names starting with a digit (e.g., "1HB") skip the
/// leading digits first.
pub fn element_from_atom_name(atom_name: &str) -> String {
    atom_name
        .trim()
        .chars()
        .find(|c| c.is_ascii_alphabetic())
        .map(|c| c.to_ascii_uppercase().to_string())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn is_water_residue_name_recognizes_water_names() {
        assert!(is_water_residue_name("HOH"));
        assert!(is_water_residue_name("WAT"));
    }

    #[test]
    fn is_water_residue_name_trims_whitespace() {
        assert!(is_water_residue_name(" HOH "));
        assert!(is_water_residue_name("WAT "));
    }

    #[test]
    fn is_water_residue_name_is_case_sensitive() {
        assert!(!is_water_residue_name("hoh"));
        assert!(!is_water_residue_name("Wat"));
    }

    #[test]
    fn is_water_residue_name_rejects_other_names() {
        assert!(!is_water_residue_name("ALA"));
        assert!(!is_water_residue_name("ZN"));
        assert!(!is_water_residue_name(""));
    }

    #[test]
    fn element_from_atom_name_takes_first_letter() {
        assert_eq!(element_from_atom_name("CA"), "C");
        assert_eq!(element_from_atom_name("N"), "N");
        assert_eq!(element_from_atom_name(" OXT "), "O");
    }

    #[test]
    fn element_from_atom_name_skips_leading_digits() {
        assert_eq!(element_from_atom_name("1HB"), "H");
        assert_eq!(element_from_atom_name("2HA"), "H");
    }

    #[test]
    fn element_from_atom_name_is_empty_for_nameless_atoms() {
        assert_eq!(element_from_atom_name(""), "");
        assert_eq!(element_from_atom_name("123"), "");
    }
}
