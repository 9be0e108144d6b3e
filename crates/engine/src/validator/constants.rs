/*!
 * Copyright 2025 Schemaform Contributors
 * Licensed under the Elastic License 2.0; you may not use this file except in compliance with the Elastic License 2.0.
 * See the LICENSE file in the project root for details.
 */

/// Path reported for violations of the document root.
pub const ROOT_PATH: &str = "root";

/// Minimum Jaro-Winkler similarity for a "did you mean" suggestion.
pub const SUGGESTION_THRESHOLD: f64 = 0.75;
