//! Form runtime: control tree, validators, visibility and submission
//!
//! This module handles:
//! - Validator derivation (field constraints to predicates)
//! - Control tree building
//! - Conditional visibility (dependent controls follow parent values)
//! - Submission (touch, gate, labeled output)

pub mod builder;
pub mod control;
pub mod submission;
pub mod validators;
pub mod visibility;

#[cfg(test)]
mod tests;

use indexmap::IndexMap;

use crate::error::{EngineError, SubmissionError};
use crate::form::builder::build_form;
use crate::form::control::ControlTree;
use crate::form::submission::{resolve_error, submit, OutputRecord};
use crate::form::visibility::{is_field_visible, toggle_field_visibility, Subscriptions};
use crate::schema::{FormField, FormSchema};
use crate::value::FieldValue;

/// One live form instance: a schema, its control tree and the visibility
/// subscriptions installed right after the tree was built.
///
/// All mutation goes through `&mut self`, so value changes and the
/// visibility updates they trigger are delivered one at a time.
#[derive(Debug, Clone)]
pub struct DynamicForm {
    schema: FormSchema,
    tree: ControlTree,
    subscriptions: Subscriptions,
}

impl DynamicForm {
    pub fn new(schema: FormSchema) -> Self {
        let tree = build_form(&schema);
        let subscriptions = Subscriptions::install(&schema, &tree);
        Self {
            schema,
            tree,
            subscriptions,
        }
    }

    pub fn schema(&self) -> &FormSchema {
        &self.schema
    }

    pub fn tree(&self) -> &ControlTree {
        &self.tree
    }

    pub fn subscriptions(&self) -> &Subscriptions {
        &self.subscriptions
    }

    /// Set a control's value and notify its dependents before returning.
    ///
    /// # Errors
    ///
    /// Returns `EngineError::ControlNotFound` if no control with this name is present.
    pub fn set_value(
        &mut self,
        name: &str,
        value: impl Into<FieldValue>,
    ) -> Result<(), EngineError> {
        let value = value.into();
        let control = self
            .tree
            .get_mut(name)
            .ok_or_else(|| EngineError::ControlNotFound(name.to_string()))?;
        tracing::trace!(field = %name, ?value, "value changed");
        control.set_value(value.clone());
        self.subscriptions.notify(&mut self.tree, name, &value);
        Ok(())
    }

    /// # Errors
    ///
    /// Returns `EngineError::ControlNotFound` if no control with this name is present.
    pub fn mark_as_touched(&mut self, name: &str) -> Result<(), EngineError> {
        self.tree
            .get_mut(name)
            .ok_or_else(|| EngineError::ControlNotFound(name.to_string()))?
            .mark_as_touched();
        Ok(())
    }

    pub fn toggle_field_visibility(&mut self, field: &FormField, visible: bool) {
        toggle_field_visibility(&mut self.tree, field, visible);
    }

    pub fn is_field_visible(&self, field: &FormField) -> bool {
        is_field_visible(field, Some(&self.schema), Some(&self.tree))
    }

    /// Schema fields to display, in schema order.
    pub fn visible_fields(&self) -> impl Iterator<Item = &FormField> {
        self.schema
            .fields
            .iter()
            .filter(|field| self.is_field_visible(field))
    }

    pub fn get_error(&self, field_name: &str) -> Option<String> {
        resolve_error(&self.schema, &self.tree, field_name)
    }

    /// # Errors
    ///
    /// Returns `SubmissionError::Invalid` if any present control is invalid.
    pub fn submit(&mut self) -> Result<OutputRecord, SubmissionError> {
        submit(&mut self.tree, &self.schema)
    }

    pub fn is_valid(&self) -> bool {
        self.tree.is_valid()
    }

    pub fn value(&self) -> IndexMap<String, FieldValue> {
        self.tree.value()
    }
}
