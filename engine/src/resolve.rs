//! Schema resolution with per-type memoization.
//!
//! A command type's schema is a pure function of the type, so it is derived
//! once and cached for the process lifetime, keyed by [`TypeId`]. The first
//! resolution also runs [`validate_schema`] eagerly: a structurally broken
//! schema is a programming error in the command type and surfaces as
//! [`BindError::InvalidSchema`] on the very first parse instead of an
//! unlucky argv later. Validation failures are never cached.

use std::any::TypeId;
use std::collections::HashMap;
use std::sync::{Arc, LazyLock, PoisonError, RwLock};

use tracing::debug;

use command_bind_core::{Command, CommandSchema, validate_schema};

use crate::error::{BindError, Result};

static RESOLVED: LazyLock<RwLock<HashMap<TypeId, Arc<CommandSchema>>>> =
    LazyLock::new(|| RwLock::new(HashMap::new()));

/// Returns the validated schema for `C`, deriving and caching it on first
/// use.
///
/// Resolution is deterministic and idempotent; a racing fill computes the
/// same schema and the first write wins.
pub fn resolved<C: Command + 'static>() -> Result<Arc<CommandSchema>> {
    let key = TypeId::of::<C>();
    if let Some(schema) = RESOLVED
        .read()
        .unwrap_or_else(PoisonError::into_inner)
        .get(&key)
    {
        return Ok(Arc::clone(schema));
    }

    let schema = C::schema();
    if let Some(error) = validate_schema(&schema).into_iter().next() {
        return Err(BindError::InvalidSchema(error));
    }

    debug!(command = %schema.command, "Caching resolved schema");
    let schema = Arc::new(schema);
    let mut cache = RESOLVED.write().unwrap_or_else(PoisonError::into_inner);
    Ok(Arc::clone(cache.entry(key).or_insert(schema)))
}
