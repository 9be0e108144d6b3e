/*!
 * Copyright 2025 Schemaform Contributors
 * Licensed under the Elastic License 2.0; you may not use this file except in compliance with the Elastic License 2.0.
 * See the LICENSE file in the project root for details.
 *
 * Text to `serde_json::Value` decoding. No file I/O happens here; callers
 * hand in the content and, optionally, the name it came from.
 */

pub mod document;
pub mod error;
pub mod utils;

pub use document::parse_schema_document;
pub use error::ParseError;
pub use utils::{decode, parse_yaml_or_json, DocumentFormat};
