/*!
 * Copyright 2025 Schemaform Contributors
 * Licensed under the Elastic License 2.0; you may not use this file except in compliance with the Elastic License 2.0.
 * See the LICENSE file in the project root for details.
 */

use crate::form::control::{Control, ControlTree};
use crate::form::validators::derive_validators;
use crate::schema::{FormField, FormSchema};

/// Build a fresh control tree with one control per schema field.
///
/// Conditional fields start present like every other field; the visibility
/// engine governs their presence afterwards. A repeated name replaces the
/// earlier control in place.
pub fn build_form(schema: &FormSchema) -> ControlTree {
    let mut tree = ControlTree::new();
    for field in &schema.fields {
        tree.set_control(field.name.clone(), new_control(field));
    }
    tracing::debug!(
        title = %schema.title,
        controls = tree.len(),
        "built control tree"
    );
    tree
}

/// A pristine control for `field` with freshly derived validators.
pub fn new_control(field: &FormField) -> Control {
    Control::new(field.field_type.empty_value(), derive_validators(field))
}
