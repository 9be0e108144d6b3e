/*!
 * Copyright 2025 Schemaform Contributors
 * Licensed under the Elastic License 2.0; you may not use this file except in compliance with the Elastic License 2.0.
 * See the LICENSE file in the project root for details.
 *
 * Controls and the control tree: the live, mutable state behind a form.
 */

use std::collections::BTreeMap;

use indexmap::IndexMap;

use crate::form::validators::{ControlError, ErrorKind, Validator};
use crate::value::FieldValue;

/// Runtime state backing one field.
#[derive(Debug, Clone)]
pub struct Control {
    value: FieldValue,
    validators: Vec<Validator>,
    errors: BTreeMap<ErrorKind, ControlError>,
    touched: bool,
    dirty: bool,
}

impl Control {
    /// Create a pristine, untouched control and run its validators once.
    pub fn new(value: FieldValue, validators: Vec<Validator>) -> Self {
        let mut control = Self {
            value,
            validators,
            errors: BTreeMap::new(),
            touched: false,
            dirty: false,
        };
        control.update_validity();
        control
    }

    pub fn value(&self) -> &FieldValue {
        &self.value
    }

    /// Replace the value as a user edit would, revalidating immediately.
    pub fn set_value(&mut self, value: FieldValue) {
        self.value = value;
        self.dirty = true;
        self.update_validity();
    }

    pub fn validators(&self) -> &[Validator] {
        &self.validators
    }

    /// Failed predicates keyed by kind, iterated in precedence order.
    pub fn errors(&self) -> &BTreeMap<ErrorKind, ControlError> {
        &self.errors
    }

    pub fn error(&self, kind: ErrorKind) -> Option<&ControlError> {
        self.errors.get(&kind)
    }

    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn touched(&self) -> bool {
        self.touched
    }

    pub fn mark_as_touched(&mut self) {
        self.touched = true;
    }

    pub fn dirty(&self) -> bool {
        self.dirty
    }

    fn update_validity(&mut self) {
        self.errors = self
            .validators
            .iter()
            .filter_map(|validator| validator.check(&self.value))
            .map(|error| (error.kind(), error))
            .collect();
    }
}

/// Field name to control, in insertion order.
///
/// Insertion order is the order of the submitted output record: a control
/// removed and added again moves to the end.
#[derive(Debug, Clone, Default)]
pub struct ControlTree {
    controls: IndexMap<String, Control>,
}

impl ControlTree {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.controls.contains_key(name)
    }

    pub fn get(&self, name: &str) -> Option<&Control> {
        self.controls.get(name)
    }

    pub fn get_mut(&mut self, name: &str) -> Option<&mut Control> {
        self.controls.get_mut(name)
    }

    /// Add a control unless one with this name already exists.
    ///
    /// Returns `true` if the control was added.
    pub fn add_control(&mut self, name: impl Into<String>, control: Control) -> bool {
        match self.controls.entry(name.into()) {
            indexmap::map::Entry::Occupied(_) => false,
            indexmap::map::Entry::Vacant(entry) => {
                entry.insert(control);
                true
            }
        }
    }

    /// Insert or replace a control, keeping the position of a replaced one.
    pub fn set_control(&mut self, name: impl Into<String>, control: Control) {
        self.controls.insert(name.into(), control);
    }

    /// Remove a control entirely, discarding its value and state.
    pub fn remove_control(&mut self, name: &str) -> Option<Control> {
        self.controls.shift_remove(name)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.controls.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Control)> {
        self.controls.iter().map(|(name, control)| (name.as_str(), control))
    }

    pub fn len(&self) -> usize {
        self.controls.len()
    }

    pub fn is_empty(&self) -> bool {
        self.controls.is_empty()
    }

    pub fn mark_all_as_touched(&mut self) {
        for control in self.controls.values_mut() {
            control.mark_as_touched();
        }
    }

    /// Valid iff every present control passes all of its predicates.
    pub fn is_valid(&self) -> bool {
        self.controls.values().all(Control::is_valid)
    }

    /// Current values of all present controls.
    pub fn value(&self) -> IndexMap<String, FieldValue> {
        self.controls
            .iter()
            .map(|(name, control)| (name.clone(), control.value.clone()))
            .collect()
    }
}
