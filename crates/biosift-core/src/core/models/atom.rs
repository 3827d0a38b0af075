use super::ids::ResidueId;
use nalgebra::Point3;

/// Represents an atom in a macromolecular structure.
///
/// This struct holds the information an atom record carries in structure
/// files: its name, serial number, Cartesian coordinates, and chemical
/// element. Every atom belongs to exactly one residue.
#[derive(Debug, Clone, PartialEq)]
pub struct Atom {
    /// The serial number of the atom from the source file.
    pub serial: usize,
    /// The name of the atom (e.g., "CA", "N", "O").
    pub name: String,
    /// The ID of the parent residue this atom belongs to.
    pub residue_id: ResidueId,
    /// The 3D coordinates of the atom in Angstroms.
    pub position: Point3<f64>,
    /// The chemical element symbol (e.g., "C", "N", "FE").
    pub element: String,
}

impl Atom {
    /// Creates a new `Atom`.
    ///
    /// # Arguments
    ///
    /// * `serial` - The serial number of the atom from the source file.
    /// * `name` - The name of the atom.
    /// * `residue_id` - The ID of the residue this atom belongs to.
    /// * `position` - The 3D coordinates of the atom.
    /// * `element` - The chemical element symbol.
    pub fn new(
        serial: usize,
        name: &str,
        residue_id: ResidueId,
        position: Point3<f64>,
        element: &str,
    ) -> Self {
        Self {
            serial,
            name: name.to_string(),
            residue_id,
            position,
            element: element.to_string(),
        }
    }
}
