use super::ids::{ChainId, ModelId, ResidueId};
use super::residue::ResidueClass;
use super::structure::Structure;
use nalgebra::Point3;

/// An incremental builder for [`Structure`] instances.
///
/// Parsers walk their input row by row and feed the builder a stream of
/// `start_model` / `start_chain` / `start_residue` / `add_atom` calls.
/// The builder tracks the current model, chain, and residue so that atom
/// rows only carry their own fields, and it reuses existing entities when
/// a model serial or chain identifier repeats.
///
/// A repeated residue identity within a chain is treated as a duplicate:
/// [`start_residue`](StructureBuilder::start_residue) returns `false`, the
/// builder clears its current residue, and subsequent
/// [`add_atom`](StructureBuilder::add_atom) calls are ignored until the
/// next residue starts. Duplicates are never merged into the first
/// occurrence.
pub struct StructureBuilder {
    structure: Structure,
    current_model: Option<ModelId>,
    current_chain: Option<ChainId>,
    current_residue: Option<ResidueId>,
}

impl StructureBuilder {
    /// Creates a builder for a structure with the given identifier.
    pub fn new(id: &str) -> Self {
        Self {
            structure: Structure::new(id),
            current_model: None,
            current_chain: None,
            current_residue: None,
        }
    }

    /// Starts (or re-enters) the model with the given serial number.
    ///
    /// Re-entering an existing model keeps its chains and residues intact.
    pub fn start_model(&mut self, serial: i32) -> &mut Self {
        let model_id = self.structure.add_model(serial);
        self.current_model = Some(model_id);
        self.current_chain = None;
        self.current_residue = None;
        self
    }

    /// Starts (or re-enters) the chain with the given identifier in the
    /// current model.
    pub fn start_chain(&mut self, id: &str) -> &mut Self {
        let model_id = self
            .current_model
            .expect("Must start a model before starting a chain");
        self.current_chain = self.structure.add_chain(model_id, id);
        self.current_residue = None;
        self
    }

    /// Starts a residue in the current chain.
    ///
    /// # Return
    ///
    /// Returns `true` when the residue was created. Returns `false` when a
    /// residue with the same identity (class, position, insertion code)
    /// already exists in the chain; the builder then ignores atoms until
    /// the next `start_residue` call.
    pub fn start_residue(
        &mut self,
        position: isize,
        insertion_code: Option<char>,
        name: &str,
        class: ResidueClass,
    ) -> bool {
        let chain_id = self
            .current_chain
            .expect("Must start a chain before starting a residue");
        let identity = (class.clone(), position, insertion_code);
        if self
            .structure
            .find_residue_by_identity(chain_id, &identity)
            .is_some()
        {
            self.current_residue = None;
            return false;
        }
        self.current_residue =
            self.structure
                .add_residue(chain_id, position, insertion_code, name, class);
        true
    }

    /// Adds an atom to the current residue.
    ///
    /// The call is a no-op while the builder is skipping a duplicate
    /// residue.
    pub fn add_atom(
        &mut self,
        serial: usize,
        name: &str,
        position: Point3<f64>,
        element: &str,
    ) -> &mut Self {
        if let Some(residue_id) = self.current_residue {
            let atom = super::atom::Atom::new(serial, name, residue_id, position, element);
            self.structure.add_atom_to_residue(residue_id, atom);
        }
        self
    }

    /// Consumes the builder and returns the finished structure.
    pub fn build(self) -> Structure {
        self.structure
    }
}
