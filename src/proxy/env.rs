//! Environment for the forwarded nomad process

use std::collections::{BTreeMap, HashSet};
use std::ffi::{OsStr, OsString};

use crate::config::nomad as nomad_config;
use crate::context::Context;

/// One `KEY=VALUE` environment entry
pub type EnvPair = (OsString, OsString);

/// Build the child environment from the ambient one.
///
/// Any ambient `NOMAD_TOKEN` is dropped first so a stale value never leaks
/// through. `NOMAD_ADDR` is always set to the context address and
/// `NOMAD_TOKEN` only when a non-empty token was resolved. Overridden keys
/// keep their original position; missing ones are appended in key order.
/// The result holds at most one entry per key.
pub fn build_environment<I>(ambient: I, context: &Context, token: Option<&str>) -> Vec<EnvPair>
where
    I: IntoIterator<Item = EnvPair>,
{
    let base = remove_env_var(ambient, OsStr::new(nomad_config::TOKEN_ENV_VAR));

    let mut overrides: BTreeMap<&str, &str> = BTreeMap::new();
    overrides.insert(nomad_config::ADDR_ENV_VAR, &context.address);
    if let Some(token) = token.filter(|t| !t.is_empty()) {
        overrides.insert(nomad_config::TOKEN_ENV_VAR, token);
    }

    override_env(base, &overrides)
}

/// Replace overridden keys in place, append the rest, drop duplicate keys
fn override_env(base: Vec<EnvPair>, overrides: &BTreeMap<&str, &str>) -> Vec<EnvPair> {
    let mut result = Vec::with_capacity(base.len() + overrides.len());
    let mut seen: HashSet<OsString> = HashSet::new();

    for (key, value) in base {
        if seen.contains(&key) {
            continue;
        }
        let value = match key.to_str().and_then(|k| overrides.get(k)) {
            Some(over) => OsString::from(over),
            None => value,
        };
        seen.insert(key.clone());
        result.push((key, value));
    }

    for (key, value) in overrides {
        if !seen.contains(OsStr::new(key)) {
            result.push((OsString::from(key), OsString::from(value)));
        }
    }

    result
}

fn remove_env_var<I>(env: I, key: &OsStr) -> Vec<EnvPair>
where
    I: IntoIterator<Item = EnvPair>,
{
    env.into_iter()
        .filter(|(name, _)| name.as_os_str() != key)
        .collect()
}
