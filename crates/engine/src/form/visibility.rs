/*!
 * Copyright 2025 Schemaform Contributors
 * Licensed under the Elastic License 2.0; you may not use this file except in compliance with the Elastic License 2.0.
 * See the LICENSE file in the project root for details.
 *
 * Conditional visibility: dependent controls follow their parent's value.
 */

use std::collections::HashMap;

use crate::form::control::{Control, ControlTree};
use crate::form::validators::derive_validators;
use crate::schema::{FormField, FormSchema};
use crate::value::FieldValue;

/// Value-change listeners keyed by parent field name.
///
/// Listeners for one parent fire synchronously in registration order, which
/// is schema field order when installed with [`Subscriptions::install`].
#[derive(Debug, Clone, Default)]
pub struct Subscriptions {
    by_parent: HashMap<String, Vec<FormField>>,
}

impl Subscriptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Subscribe every dependent field whose parent control exists in `tree`.
    ///
    /// A dependent whose parent is missing gets no subscription and keeps
    /// whatever presence the builder gave it.
    pub fn install(schema: &FormSchema, tree: &ControlTree) -> Self {
        let mut subscriptions = Self::new();
        for field in &schema.fields {
            let Some(condition) = &field.condition else {
                continue;
            };
            if tree.contains(&condition.field_name) {
                tracing::debug!(
                    field = %field.name,
                    parent = %condition.field_name,
                    "subscribed dependent field"
                );
                subscriptions.subscribe(condition.field_name.clone(), field.clone());
            } else {
                tracing::warn!(
                    field = %field.name,
                    parent = %condition.field_name,
                    "parent control not found, field stays visible"
                );
            }
        }
        subscriptions
    }

    pub fn subscribe(&mut self, parent: impl Into<String>, dependent: FormField) {
        self.by_parent.entry(parent.into()).or_default().push(dependent);
    }

    pub fn dependents(&self, parent: &str) -> &[FormField] {
        self.by_parent.get(parent).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Total number of registered listeners.
    pub fn len(&self) -> usize {
        self.by_parent.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Deliver a value change of `parent`: one visibility recomputation per
    /// subscribed dependent. Returns the number of recomputations.
    pub fn notify(&self, tree: &mut ControlTree, parent: &str, value: &FieldValue) -> usize {
        let dependents = self.dependents(parent);
        for dependent in dependents {
            if let Some(condition) = &dependent.condition {
                toggle_field_visibility(tree, dependent, condition.is_met_by(value));
            }
        }
        dependents.len()
    }
}

/// Add or remove the control for `field` so its presence matches `visible`.
///
/// Both directions are idempotent: adding a present control or removing an
/// absent one does nothing. A re-added control starts fresh with an empty
/// string value whatever the field type, and freshly derived validators.
pub fn toggle_field_visibility(tree: &mut ControlTree, field: &FormField, visible: bool) {
    let exists = tree.contains(&field.name);

    if visible && !exists {
        let control = Control::new(FieldValue::empty_text(), derive_validators(field));
        tree.add_control(field.name.clone(), control);
        tracing::debug!(field = %field.name, "added conditional control");
    } else if !visible && exists {
        tree.remove_control(&field.name);
        tracing::debug!(field = %field.name, "removed conditional control");
    }
}

/// Whether `field` should be displayed.
///
/// Visible unless proven otherwise: only an existing parent control whose
/// value differs from the expected one hides a field. `None` stands for a
/// form that is not initialized yet.
pub fn is_field_visible(
    field: &FormField,
    schema: Option<&FormSchema>,
    tree: Option<&ControlTree>,
) -> bool {
    if field.condition.is_none() {
        return true;
    }
    let (Some(schema), Some(tree)) = (schema, tree) else {
        return true;
    };
    let Some(condition) = schema
        .field(&field.name)
        .and_then(|declared| declared.condition.as_ref())
    else {
        return true;
    };
    match tree.get(&condition.field_name) {
        Some(parent) => condition.is_met_by(parent.value()),
        None => true,
    }
}
