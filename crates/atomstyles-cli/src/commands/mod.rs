pub mod columns;
pub mod inspect;
pub mod list;
pub mod sections;

use crate::error::Result;
use atomstyles::StyleRegistry;
use std::path::Path;
use tracing::debug;

pub fn load_registry(path: Option<&Path>) -> Result<StyleRegistry> {
    match path {
        Some(path) => Ok(StyleRegistry::load(path)?),
        None => {
            debug!("No custom style file given; using built-in styles only.");
            Ok(StyleRegistry::builtin())
        }
    }
}
