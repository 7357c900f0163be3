use std::collections::BTreeMap;

use crate::content::ASSISTANTS;
use crate::model::Assistant;

/// The full assistant catalog, keyed by id. Only at-start assistants are unlocked.
pub fn generate_assistants() -> BTreeMap<String, Assistant> {
    ASSISTANTS
        .iter()
        .map(|def| (def.id.to_string(), def.instantiate()))
        .collect()
}
