use crate::core::models::builder::StructureBuilder;
use crate::core::models::residue::ResidueClass;
use crate::core::models::structure::{ResidueIdentity, Structure};
use crate::core::utils::identifiers::element_from_atom_name;
use nalgebra::Point3;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;
use thiserror::Error;
use tracing::warn;

const ATOM_SITE_CATEGORY: &str = "_atom_site";
const DEFAULT_STRUCTURE_ID: &str = "structure";

#[derive(Debug, Error)]
pub enum CifError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
    #[error("Parse error on line {line}: {kind}")]
    Parse { line: usize, kind: CifParseErrorKind },
    #[error("Missing required category: {category}")]
    MissingCategory { category: String },
}

#[derive(Debug, Error)]
pub enum CifParseErrorKind {
    #[error("Loop declares fields but contains no data rows")]
    UnterminatedLoop,
    #[error("Row has {found} values but the loop declares {expected} fields")]
    FieldCount { expected: usize, found: usize },
    #[error("Loop is missing required field '{field}'")]
    MissingField { field: String },
    #[error("Field '{field}' does not hold a valid number")]
    InvalidNumber { field: String },
}

/// Splits a data row into values, honoring single and double quotes.
///
/// A quoted value may contain whitespace; the quote characters themselves
/// are not part of the value. An unterminated quote runs to the end of
/// the line.
fn tokenize(line: &str) -> Vec<String> {
    let mut tokens = Vec::new();
    let mut chars = line.chars().peekable();
    while let Some(&c) = chars.peek() {
        if c.is_whitespace() {
            chars.next();
            continue;
        }
        let mut token = String::new();
        if c == '\'' || c == '"' {
            let quote = c;
            chars.next();
            for ch in chars.by_ref() {
                if ch == quote {
                    break;
                }
                token.push(ch);
            }
        } else {
            while let Some(&ch) = chars.peek() {
                if ch.is_whitespace() {
                    break;
                }
                token.push(ch);
                chars.next();
            }
        }
        tokens.push(token);
    }
    tokens
}

fn is_absent(value: &str) -> bool {
    value == "." || value == "?"
}

/// Resolved column positions for the `_atom_site` loop.
///
/// `auth_*` columns are preferred over their `label_*` equivalents when
/// both appear, matching how deposited coordinates name their public
/// identifiers.
struct AtomSiteColumns {
    group: Option<usize>,
    serial: usize,
    atom_name: usize,
    residue_name: usize,
    chain_id: usize,
    seq_id: usize,
    insertion_code: Option<usize>,
    x: usize,
    y: usize,
    z: usize,
    element: Option<usize>,
    model_num: Option<usize>,
}

impl AtomSiteColumns {
    fn resolve(fields: &[String], header_line: usize) -> Result<Self, CifError> {
        let find = |name: &str| {
            fields
                .iter()
                .position(|f| f == &format!("{ATOM_SITE_CATEGORY}.{name}"))
        };
        let find_auth = |auth: &str, label: &str| find(auth).or_else(|| find(label));
        let require = |column: Option<usize>, field: &str| {
            column.ok_or(CifError::Parse {
                line: header_line,
                kind: CifParseErrorKind::MissingField {
                    field: format!("{ATOM_SITE_CATEGORY}.{field}"),
                },
            })
        };

        Ok(Self {
            group: find("group_PDB"),
            serial: require(find("id"), "id")?,
            atom_name: require(find_auth("auth_atom_id", "label_atom_id"), "auth_atom_id")?,
            residue_name: require(find_auth("auth_comp_id", "label_comp_id"), "auth_comp_id")?,
            chain_id: require(find_auth("auth_asym_id", "label_asym_id"), "auth_asym_id")?,
            seq_id: require(find_auth("auth_seq_id", "label_seq_id"), "auth_seq_id")?,
            insertion_code: find("pdbx_PDB_ins_code"),
            x: require(find("Cartn_x"), "Cartn_x")?,
            y: require(find("Cartn_y"), "Cartn_y")?,
            z: require(find("Cartn_z"), "Cartn_z")?,
            element: find("type_symbol"),
            model_num: find("pdbx_PDB_model_num"),
        })
    }
}

fn parse_number<T: std::str::FromStr>(
    value: &str,
    field: &str,
    line: usize,
) -> Result<T, CifError> {
    value.parse().map_err(|_| CifError::Parse {
        line,
        kind: CifParseErrorKind::InvalidNumber {
            field: format!("{ATOM_SITE_CATEGORY}.{field}"),
        },
    })
}

/// Reader for mmCIF structure files.
///
/// Only the `data_` block identifier and the `_atom_site` loop are
/// consumed; every other category is skipped. The parsed atoms are
/// assembled into a [`Structure`] through the incremental
/// [`StructureBuilder`], preserving model, chain, and residue order of
/// first appearance.
pub struct CifFile;

impl CifFile {
    /// Reads a structure from a buffered reader.
    ///
    /// # Arguments
    ///
    /// * `reader` - The buffered reader to read from.
    ///
    /// # Return
    ///
    /// Returns the parsed structure.
    ///
    /// # Errors
    ///
    /// Returns an error if the input carries no `_atom_site` loop, a row
    /// is malformed, or I/O operations encounter issues.
    pub fn read_from(reader: &mut impl BufRead) -> Result<Structure, CifError> {
        let mut lines = Vec::new();
        for line in reader.lines() {
            lines.push(line?);
        }

        let structure_id = lines
            .iter()
            .map(|line| line.trim())
            .find_map(|line| line.strip_prefix("data_"))
            .filter(|id| !id.is_empty())
            .map(str::to_string)
            .unwrap_or_else(|| {
                warn!(
                    "Input carries no data block identifier; using '{}'",
                    DEFAULT_STRUCTURE_ID
                );
                DEFAULT_STRUCTURE_ID.to_string()
            });

        let mut builder = StructureBuilder::new(&structure_id);
        let mut found_atom_site = false;
        // (model serial, chain id, residue identity) of the row before this one
        let mut last_key: Option<(i32, String, ResidueIdentity)> = None;

        let mut index = 0;
        while index < lines.len() {
            if lines[index].trim() != "loop_" {
                index += 1;
                continue;
            }
            let loop_line = index + 1;
            index += 1;

            let mut fields = Vec::new();
            while index < lines.len() {
                let trimmed = lines[index].trim();
                if let Some(field) = trimmed.strip_prefix('_') {
                    fields.push(format!("_{field}"));
                    index += 1;
                } else {
                    break;
                }
            }

            let is_atom_site = fields
                .iter()
                .all(|f| f.starts_with(&format!("{ATOM_SITE_CATEGORY}.")))
                && !fields.is_empty();
            if !is_atom_site {
                // Skip the data rows of a loop we do not consume.
                while index < lines.len() && !is_loop_terminator(&lines[index]) {
                    index += 1;
                }
                continue;
            }

            found_atom_site = true;
            let columns = AtomSiteColumns::resolve(&fields, loop_line)?;
            let mut row_count = 0;

            while index < lines.len() && !is_loop_terminator(&lines[index]) {
                let line_num = index + 1;
                let values = tokenize(&lines[index]);
                index += 1;
                if values.len() != fields.len() {
                    return Err(CifError::Parse {
                        line: line_num,
                        kind: CifParseErrorKind::FieldCount {
                            expected: fields.len(),
                            found: values.len(),
                        },
                    });
                }
                row_count += 1;

                let is_hetatm = columns
                    .group
                    .map(|i| values[i].as_str() == "HETATM")
                    .unwrap_or(false);
                let residue_name = values[columns.residue_name].as_str();
                let class = ResidueClass::from_record(is_hetatm, residue_name);

                let serial: usize = parse_number(&values[columns.serial], "id", line_num)?;
                let seq_id: isize = parse_number(&values[columns.seq_id], "auth_seq_id", line_num)?;
                let x: f64 = parse_number(&values[columns.x], "Cartn_x", line_num)?;
                let y: f64 = parse_number(&values[columns.y], "Cartn_y", line_num)?;
                let z: f64 = parse_number(&values[columns.z], "Cartn_z", line_num)?;
                let model_serial: i32 = match columns.model_num {
                    Some(i) if !is_absent(&values[i]) => {
                        parse_number(&values[i], "pdbx_PDB_model_num", line_num)?
                    }
                    _ => 1,
                };

                let insertion_code = columns
                    .insertion_code
                    .map(|i| values[i].as_str())
                    .filter(|v| !is_absent(v))
                    .and_then(|v| v.chars().next());

                let atom_name = values[columns.atom_name].as_str();
                let element = match columns.element {
                    Some(i) if !is_absent(&values[i]) => values[i].clone(),
                    _ => element_from_atom_name(atom_name),
                };

                let chain_id = values[columns.chain_id].as_str();
                let identity: ResidueIdentity = (class.clone(), seq_id, insertion_code);
                let key = (model_serial, chain_id.to_string(), identity);

                if last_key.as_ref() != Some(&key) {
                    let model_changed =
                        last_key.as_ref().map(|(m, _, _)| *m) != Some(model_serial);
                    let chain_changed =
                        last_key.as_ref().map(|(_, c, _)| c.as_str()) != Some(chain_id);
                    if model_changed {
                        builder.start_model(model_serial);
                    }
                    if model_changed || chain_changed {
                        builder.start_chain(chain_id);
                    }
                    if !builder.start_residue(seq_id, insertion_code, residue_name, class) {
                        warn!(
                            chain = chain_id,
                            position = seq_id,
                            name = residue_name,
                            "Duplicate residue identity; skipping its atoms"
                        );
                    }
                    last_key = Some(key);
                }

                builder.add_atom(serial, atom_name, Point3::new(x, y, z), &element);
            }

            if row_count == 0 {
                return Err(CifError::Parse {
                    line: loop_line,
                    kind: CifParseErrorKind::UnterminatedLoop,
                });
            }
        }

        if !found_atom_site {
            return Err(CifError::MissingCategory {
                category: ATOM_SITE_CATEGORY.to_string(),
            });
        }

        Ok(builder.build())
    }

    /// Reads a structure from a file path.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be opened or parsing fails.
    pub fn read_from_path<P: AsRef<Path>>(path: P) -> Result<Structure, CifError> {
        let file = File::open(path)?;
        let mut reader = BufReader::new(file);
        Self::read_from(&mut reader)
    }
}

fn is_loop_terminator(line: &str) -> bool {
    let trimmed = line.trim();
    trimmed.is_empty()
        || trimmed == "loop_"
        || trimmed.starts_with('_')
        || trimmed.starts_with('#')
        || trimmed.starts_with("data_")
}
