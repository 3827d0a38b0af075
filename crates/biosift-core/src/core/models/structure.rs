use super::atom::Atom;
use super::chain::{Chain, Model};
use super::ids::{AtomId, ChainId, ModelId, ResidueId};
use super::residue::{Residue, ResidueClass};
use slotmap::SlotMap;
use std::collections::HashMap;

/// The identity of a residue within its chain: classification, sequence
/// position, and insertion code.
pub type ResidueIdentity = (ResidueClass, isize, Option<char>);

/// Represents a complete macromolecular structure parsed from an mmCIF file.
///
/// This struct is the root of the structure hierarchy: a structure owns
/// models, models own chains, chains own residues, and residues own atoms.
/// All components are stored in slot maps for stable IDs, with ordered
/// child lists preserving file order. The structure is immutable once
/// parsing completes; the analysis layer only reads it.
#[derive(Debug, Clone, Default)]
pub struct Structure {
    /// The structure identifier from the `data_` block.
    id: String,
    /// Primary storage for atoms using a slot map for efficient ID management.
    atoms: SlotMap<AtomId, Atom>,
    /// Primary storage for residues using a slot map for efficient ID management.
    residues: SlotMap<ResidueId, Residue>,
    /// Primary storage for chains using a slot map for efficient ID management.
    chains: SlotMap<ChainId, Chain>,
    /// Primary storage for models using a slot map for efficient ID management.
    models: SlotMap<ModelId, Model>,
    /// Models in parse order.
    model_order: Vec<ModelId>,
    /// Lookup map for finding models by their serial number.
    model_serial_map: HashMap<i32, ModelId>,
    /// Lookup map for finding chains by model and chain identifier.
    chain_id_map: HashMap<(ModelId, String), ChainId>,
    /// Lookup map for finding residues by chain and residue identity.
    residue_id_map: HashMap<(ChainId, ResidueIdentity), ResidueId>,
}

impl Structure {
    /// Creates a new, empty structure with the given identifier.
    pub fn new(id: &str) -> Self {
        Self {
            id: id.to_string(),
            ..Self::default()
        }
    }

    /// Returns the structure identifier.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Retrieves an immutable reference to an atom by its ID.
    ///
    /// # Arguments
    ///
    /// * `id` - The atom ID to look up.
    ///
    /// # Return
    ///
    /// Returns `Some(&Atom)` if the atom exists, otherwise `None`.
    pub fn atom(&self, id: AtomId) -> Option<&Atom> {
        self.atoms.get(id)
    }

    /// Retrieves an immutable reference to a residue by its ID.
    ///
    /// # Arguments
    ///
    /// * `id` - The residue ID to look up.
    ///
    /// # Return
    ///
    /// Returns `Some(&Residue)` if the residue exists, otherwise `None`.
    pub fn residue(&self, id: ResidueId) -> Option<&Residue> {
        self.residues.get(id)
    }

    /// Retrieves an immutable reference to a chain by its ID.
    ///
    /// # Arguments
    ///
    /// * `id` - The chain ID to look up.
    ///
    /// # Return
    ///
    /// Returns `Some(&Chain)` if the chain exists, otherwise `None`.
    pub fn chain(&self, id: ChainId) -> Option<&Chain> {
        self.chains.get(id)
    }

    /// Retrieves an immutable reference to a model by its ID.
    ///
    /// # Arguments
    ///
    /// * `id` - The model ID to look up.
    ///
    /// # Return
    ///
    /// Returns `Some(&Model)` if the model exists, otherwise `None`.
    pub fn model(&self, id: ModelId) -> Option<&Model> {
        self.models.get(id)
    }

    /// Returns an iterator over all models in parse order.
    pub fn models(&self) -> impl Iterator<Item = (ModelId, &Model)> {
        self.model_order.iter().map(|&id| (id, &self.models[id]))
    }

    /// Returns the total number of atoms in the structure.
    pub fn num_atoms(&self) -> usize {
        self.atoms.len()
    }

    /// Returns the total number of residues in the structure.
    pub fn num_residues(&self) -> usize {
        self.residues.len()
    }

    /// Returns the total number of chains in the structure.
    pub fn num_chains(&self) -> usize {
        self.chains.len()
    }

    /// Finds a model ID by its serial number.
    pub fn find_model_by_serial(&self, serial: i32) -> Option<ModelId> {
        self.model_serial_map.get(&serial).copied()
    }

    /// Finds a chain ID by its model and chain identifier.
    pub fn find_chain_by_id(&self, model_id: ModelId, id: &str) -> Option<ChainId> {
        self.chain_id_map.get(&(model_id, id.to_string())).copied()
    }

    /// Finds a residue ID by its chain and residue identity.
    pub fn find_residue_by_identity(
        &self,
        chain_id: ChainId,
        identity: &ResidueIdentity,
    ) -> Option<ResidueId> {
        self.residue_id_map
            .get(&(chain_id, identity.clone()))
            .copied()
    }

    /// Adds a new model to the structure or returns the existing one.
    ///
    /// This method is idempotent; if a model with the given serial number
    /// already exists, it returns the existing model ID without creating
    /// a duplicate.
    ///
    /// # Arguments
    ///
    /// * `serial` - The model number from the source file.
    ///
    /// # Return
    ///
    /// The ID of the model (new or existing).
    pub fn add_model(&mut self, serial: i32) -> ModelId {
        *self.model_serial_map.entry(serial).or_insert_with(|| {
            let model_id = self.models.insert(Model::new(serial));
            self.model_order.push(model_id);
            model_id
        })
    }

    /// Adds a new chain to a model or returns the existing one.
    ///
    /// This method is idempotent; if a chain with the given identifier
    /// already exists in the model, it returns the existing chain ID.
    ///
    /// # Arguments
    ///
    /// * `model_id` - The ID of the model to add the chain to.
    /// * `id` - The chain identifier.
    ///
    /// # Return
    ///
    /// Returns `Some(ChainId)` if successful, otherwise `None` (e.g., if the
    /// model doesn't exist).
    pub fn add_chain(&mut self, model_id: ModelId, id: &str) -> Option<ChainId> {
        let model = self.models.get_mut(model_id)?;
        let key = (model_id, id.to_string());

        let chain_id = *self
            .chain_id_map
            .entry(key)
            .or_insert_with(|| self.chains.insert(Chain::new(id, model_id)));

        if !model.chains.contains(&chain_id) {
            model.chains.push(chain_id);
        }

        Some(chain_id)
    }

    /// Adds a new residue to a chain or returns the existing one.
    ///
    /// This method is idempotent; if a residue with the given identity
    /// already exists in the chain, it returns the existing residue ID.
    /// Callers that must not merge duplicates check
    /// [`find_residue_by_identity`](Self::find_residue_by_identity) first.
    ///
    /// # Arguments
    ///
    /// * `chain_id` - The ID of the chain to add the residue to.
    /// * `position` - The residue sequence number.
    /// * `insertion_code` - The insertion code, if present.
    /// * `name` - The name of the residue.
    /// * `class` - The standard/heteroatom classification.
    ///
    /// # Return
    ///
    /// Returns `Some(ResidueId)` if successful, otherwise `None` (e.g., if the
    /// chain doesn't exist).
    pub fn add_residue(
        &mut self,
        chain_id: ChainId,
        position: isize,
        insertion_code: Option<char>,
        name: &str,
        class: ResidueClass,
    ) -> Option<ResidueId> {
        let chain = self.chains.get_mut(chain_id)?;
        let key = (chain_id, (class.clone(), position, insertion_code));

        let residue_id = *self.residue_id_map.entry(key).or_insert_with(|| {
            let residue = Residue::new(position, insertion_code, name, class, chain_id);
            self.residues.insert(residue)
        });

        if !chain.residues.contains(&residue_id) {
            chain.residues.push(residue_id);
        }

        Some(residue_id)
    }

    /// Adds an atom to a specific residue.
    ///
    /// The atom's `residue_id` field must name the target residue.
    ///
    /// # Arguments
    ///
    /// * `residue_id` - The ID of the residue to add the atom to.
    /// * `atom` - The atom to insert.
    ///
    /// # Return
    ///
    /// Returns `Some(AtomId)` if successful, otherwise `None` (e.g., if the
    /// residue doesn't exist).
    pub fn add_atom_to_residue(&mut self, residue_id: ResidueId, atom: Atom) -> Option<AtomId> {
        let residue = self.residues.get_mut(residue_id)?;
        let atom_id = self.atoms.insert(atom);
        residue.add_atom(atom_id);
        Some(atom_id)
    }
}
