//! Forward commands to the nomad binary

use std::ffi::OsString;
use std::process::{Command, Stdio};

use log::{debug, info};

use crate::config::nomad as nomad_config;
use crate::context::ContextManager;
use crate::error::{ContextError, Result};
use crate::secrets::SecretStore;

use super::env::{build_environment, EnvPair};

/// Run nomad with `args` against the current context
pub fn run_nomad<S: SecretStore>(manager: &ContextManager<S>, args: &[String]) -> Result<()> {
    let binary = nomad_binary(std::env::var_os(nomad_config::BINARY_ENV_VAR));
    run_nomad_with(manager, &binary, std::env::vars_os(), args)
}

/// Run `binary` with `args` against the current context, deriving the child
/// environment from `ambient`
pub fn run_nomad_with<S, I>(
    manager: &ContextManager<S>,
    binary: &OsString,
    ambient: I,
    args: &[String],
) -> Result<()>
where
    S: SecretStore,
    I: IntoIterator<Item = EnvPair>,
{
    let ctx = manager.current()?;

    let token = match manager.token(&ctx.name) {
        Ok(token) => Some(token),
        Err(ContextError::TokenNotFound(_)) => {
            debug!("No token stored for context '{}'", ctx.name);
            None
        }
        Err(e) => return Err(e),
    };

    let env = build_environment(ambient, &ctx, token.as_deref());

    info!(
        "Forwarding to {} with context '{}' ({})",
        binary.to_string_lossy(),
        ctx.name,
        ctx.address
    );
    forward(binary, args, env)
}

/// Pick the nomad binary: a non-empty override wins
fn nomad_binary(override_path: Option<OsString>) -> OsString {
    override_path
        .filter(|p| !p.is_empty())
        .unwrap_or_else(|| OsString::from(nomad_config::DEFAULT_BINARY))
}

/// Run `binary` with `args` verbatim, inherited stdio and exactly `env`
fn forward(binary: &OsString, args: &[String], env: Vec<EnvPair>) -> Result<()> {
    let status = Command::new(binary)
        .args(args)
        .env_clear()
        .envs(env)
        .stdin(Stdio::inherit())
        .stdout(Stdio::inherit())
        .stderr(Stdio::inherit())
        .status()
        .map_err(|e| {
            ContextError::Command(format!(
                "failed to run {}: {}",
                binary.to_string_lossy(),
                e
            ))
        })?;

    if status.success() {
        Ok(())
    } else {
        Err(ContextError::Command(format!(
            "{} {}",
            binary.to_string_lossy(),
            status
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::ContextStore;
    use crate::secrets::MemoryStore;
    use tempfile::TempDir;

    #[test]
    fn test_nomad_binary_default() {
        assert_eq!(nomad_binary(None), OsString::from("nomad"));
        assert_eq!(nomad_binary(Some(OsString::new())), OsString::from("nomad"));
    }

    #[test]
    fn test_nomad_binary_override() {
        assert_eq!(
            nomad_binary(Some(OsString::from("/opt/nomad/bin/nomad"))),
            OsString::from("/opt/nomad/bin/nomad")
        );
    }

    #[test]
    fn test_run_without_current_context() {
        let dir = TempDir::new().unwrap();
        let mgr = ContextManager::with_store(
            ContextStore::with_path(dir.path().join("config.json")),
            MemoryStore::new(),
        );
        assert!(matches!(
            run_nomad(&mgr, &["status".to_string()]),
            Err(ContextError::NoCurrentContext)
        ));
    }

    #[test]
    fn test_missing_binary_is_command_error() {
        let err = forward(
            &OsString::from("/nonexistent/nomad-context-test-binary"),
            &[],
            Vec::new(),
        )
        .unwrap_err();
        assert!(matches!(err, ContextError::Command(msg) if msg.contains("failed to run")));
    }

    #[cfg(unix)]
    #[test]
    fn test_child_sees_exactly_built_env() {
        let ctx = crate::Context::new("dev", "https://x");
        let ambient = vec![
            (OsString::from("NOMAD_TOKEN"), OsString::from("stale")),
            (OsString::from("KEEP"), OsString::from("me")),
        ];
        let env = build_environment(ambient, &ctx, None);
        let script = r#"[ "$NOMAD_ADDR" = "https://x" ] && [ -z "${NOMAD_TOKEN+set}" ] && [ "$KEEP" = "me" ] && [ "$1" = "job status" ]"#;

        forward(
            &OsString::from("/bin/sh"),
            &[
                "-c".to_string(),
                script.to_string(),
                "sh".to_string(),
                "job status".to_string(),
            ],
            env,
        )
        .unwrap();
    }

    #[cfg(unix)]
    fn sh_check(script: &str) -> Vec<String> {
        vec!["-c".to_string(), script.to_string()]
    }

    #[cfg(unix)]
    fn ambient_with_stale_token() -> Vec<EnvPair> {
        vec![
            (OsString::from("NOMAD_TOKEN"), OsString::from("stale")),
            (OsString::from("NOMAD_ADDR"), OsString::from("http://old:4646")),
            (OsString::from("KEEP"), OsString::from("me")),
        ]
    }

    #[cfg(unix)]
    #[test]
    fn test_stored_token_reaches_child() {
        let dir = TempDir::new().unwrap();
        let mgr = ContextManager::with_store(
            ContextStore::with_path(dir.path().join("config.json")),
            MemoryStore::new(),
        );
        mgr.upsert("dev", "https://dev:4646", "dev-token").unwrap();

        run_nomad_with(
            &mgr,
            &OsString::from("/bin/sh"),
            ambient_with_stale_token(),
            &sh_check(
                r#"[ "$NOMAD_ADDR" = "https://dev:4646" ] && [ "$NOMAD_TOKEN" = "dev-token" ] && [ "$KEEP" = "me" ]"#,
            ),
        )
        .unwrap();
    }

    #[cfg(unix)]
    #[test]
    fn test_stale_token_stripped_without_stored_token() {
        let dir = TempDir::new().unwrap();
        let mgr = ContextManager::with_store(
            ContextStore::with_path(dir.path().join("config.json")),
            MemoryStore::new(),
        );
        mgr.upsert("dev", "https://dev:4646", "").unwrap();

        run_nomad_with(
            &mgr,
            &OsString::from("/bin/sh"),
            ambient_with_stale_token(),
            &sh_check(r#"[ "$NOMAD_ADDR" = "https://dev:4646" ] && [ -z "${NOMAD_TOKEN+set}" ]"#),
        )
        .unwrap();
    }

    #[cfg(unix)]
    #[test]
    fn test_forwarding_follows_current_context() {
        let dir = TempDir::new().unwrap();
        let mgr = ContextManager::with_store(
            ContextStore::with_path(dir.path().join("config.json")),
            MemoryStore::new(),
        );
        mgr.upsert("dev", "https://dev:4646", "dev-token").unwrap();
        mgr.upsert("prod", "https://prod:4646", "prod-token").unwrap();
        mgr.use_context("prod").unwrap();

        run_nomad_with(
            &mgr,
            &OsString::from("/bin/sh"),
            Vec::new(),
            &sh_check(r#"[ "$NOMAD_ADDR" = "https://prod:4646" ] && [ "$NOMAD_TOKEN" = "prod-token" ]"#),
        )
        .unwrap();
    }

    #[cfg(unix)]
    #[test]
    fn test_non_zero_exit_is_error() {
        let err = forward(
            &OsString::from("/bin/sh"),
            &["-c".to_string(), "exit 3".to_string()],
            Vec::new(),
        )
        .unwrap_err();
        assert!(matches!(err, ContextError::Command(_)));
    }
}
