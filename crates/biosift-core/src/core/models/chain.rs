use super::ids::{ChainId, ModelId, ResidueId};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Chain {
    pub id: String,                      // Chain identifier (e.g., "A", "B")
    pub model_id: ModelId,               // ID of the parent model
    pub(crate) residues: Vec<ResidueId>, // Ordered list of residue IDs belonging to this chain
}

impl Chain {
    pub(crate) fn new(id: &str, model_id: ModelId) -> Self {
        Self {
            id: id.to_string(),
            model_id,
            residues: Vec::new(),
        }
    }

    pub fn residues(&self) -> &[ResidueId] {
        &self.residues
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Model {
    pub serial: i32,                  // Model number from the source file
    pub(crate) chains: Vec<ChainId>,  // Ordered list of chain IDs belonging to this model
}

impl Model {
    pub(crate) fn new(serial: i32) -> Self {
        Self {
            serial,
            chains: Vec::new(),
        }
    }

    pub fn chains(&self) -> &[ChainId] {
        &self.chains
    }
}
