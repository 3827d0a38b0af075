use super::ids::{AtomId, ChainId};
use crate::core::utils::identifiers::is_water_residue_name;

/// Classifies a residue as a polymer residue or a heteroatom group.
///
/// Structure files mark every residue as either part of the polymer
/// (standard) or as a heteroatom group such as a ligand, ion, or water.
/// Consumers that only need the two-valued distinction branch on
/// [`is_hetero`](ResidueClass::is_hetero); water is kept as its own
/// variant because source files tag it with a distinct marker.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ResidueClass {
    /// A standard polymer residue (amino acid or nucleotide).
    Standard,
    /// A water molecule.
    Water,
    /// Any other heteroatom group, carrying its residue name (e.g., "ZN", "ATP").
    Hetero(String),
}

impl ResidueClass {
    /// Derives the class from an atom record type and residue name.
    ///
    /// `ATOM` rows are standard polymer residues. `HETATM` rows are water
    /// when the residue name is a recognized water name, otherwise a
    /// generic heteroatom group.
    pub fn from_record(is_hetatm: bool, residue_name: &str) -> Self {
        if !is_hetatm {
            ResidueClass::Standard
        } else if is_water_residue_name(residue_name) {
            ResidueClass::Water
        } else {
            ResidueClass::Hetero(residue_name.trim().to_string())
        }
    }

    /// Returns `true` for every class except [`ResidueClass::Standard`].
    pub fn is_hetero(&self) -> bool {
        !matches!(self, ResidueClass::Standard)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Residue {
    pub position: isize,                 // Residue sequence number from source file
    pub insertion_code: Option<char>,    // Insertion code, if the source file carries one
    pub name: String,                    // Name of the residue (e.g., "ALA", "HOH")
    pub class: ResidueClass,             // Standard/heteroatom classification
    pub chain_id: ChainId,               // ID of the parent chain
    pub(crate) atoms: Vec<AtomId>,       // Ordered IDs of atoms belonging to this residue
}

impl Residue {
    pub(crate) fn new(
        position: isize,
        insertion_code: Option<char>,
        name: &str,
        class: ResidueClass,
        chain_id: ChainId,
    ) -> Self {
        Self {
            position,
            insertion_code,
            name: name.to_string(),
            class,
            chain_id,
            atoms: Vec::new(),
        }
    }

    pub(crate) fn add_atom(&mut self, atom_id: AtomId) {
        self.atoms.push(atom_id);
    }

    pub fn atoms(&self) -> &[AtomId] {
        &self.atoms
    }

    /// The identity of a residue within its chain.
    ///
    /// The class participates in the identity so that a heteroatom group
    /// and a polymer residue at the same position never collide.
    pub fn identity(&self) -> (ResidueClass, isize, Option<char>) {
        (self.class.clone(), self.position, self.insertion_code)
    }
}
