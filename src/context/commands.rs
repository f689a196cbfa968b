//! Context command handlers

use log::debug;

use crate::cli::{CtxAction, SetContextArgs};
use crate::error::{ContextError, Result};
use crate::output::{output_context_details, output_contexts};
use crate::secrets::SecretStore;
use crate::ui::prompt_for_secret;

use super::manager::ContextManager;

/// Dispatch context subcommands
pub fn run_context_command<S: SecretStore>(
    manager: &ContextManager<S>,
    action: &CtxAction,
) -> Result<()> {
    match action {
        CtxAction::List(args) => {
            let (contexts, current) = manager.list()?;
            output_contexts(&contexts, &current, args.output)
        }
        CtxAction::Set(args) => run_context_set(manager, args, prompt_for_secret),
        CtxAction::Use(args) => {
            manager.use_context(&args.name)?;
            println!("Now using context \"{}\".", args.name);
            Ok(())
        }
        CtxAction::Delete(args) => {
            manager.delete(&args.name)?;
            println!("Deleted context \"{}\".", args.name);
            Ok(())
        }
        CtxAction::Show(args) => {
            let ctx = manager.resolve(args.name.as_deref().unwrap_or(""))?;
            let has_token = manager.has_token(&ctx.name)?;
            output_context_details(&ctx, has_token);
            Ok(())
        }
    }
}

/// Create or update a named context
fn run_context_set<S, P>(
    manager: &ContextManager<S>,
    args: &SetContextArgs,
    prompt: P,
) -> Result<()>
where
    S: SecretStore,
    P: FnOnce(&str) -> Result<String>,
{
    let existing = match manager.resolve(&args.name) {
        Ok(ctx) => Some(ctx),
        Err(ContextError::ContextNotFound(_)) => None,
        Err(e) => return Err(e),
    };

    let address = match args.addr.as_deref().filter(|a| !a.is_empty()) {
        Some(addr) => addr.to_string(),
        None => existing
            .map(|ctx| ctx.address)
            .ok_or_else(|| ContextError::InvalidArgument("address is required".to_string()))?,
    };

    let token = match args.token.as_deref().map(str::trim) {
        Some(token) if !token.is_empty() => token.to_string(),
        _ if args.prompt_token => {
            let input = prompt(&format!("Enter token for {}", args.name))?;
            let input = input.trim();
            if input.is_empty() {
                return Err(ContextError::InvalidArgument(
                    "token cannot be empty".to_string(),
                ));
            }
            input.to_string()
        }
        _ => String::new(),
    };

    debug!(
        "Saving context '{}' (token supplied: {})",
        args.name,
        !token.is_empty()
    );
    manager.upsert(&args.name, &address, &token)?;
    println!("Saved context \"{}\" ({}).", args.name, address);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::store::ContextStore;
    use crate::secrets::MemoryStore;
    use tempfile::TempDir;

    fn test_manager(dir: &TempDir) -> ContextManager<MemoryStore> {
        ContextManager::with_store(
            ContextStore::with_path(dir.path().join("config.json")),
            MemoryStore::new(),
        )
    }

    fn set_args(name: &str, addr: Option<&str>, token: Option<&str>) -> SetContextArgs {
        SetContextArgs {
            name: name.to_string(),
            addr: addr.map(str::to_string),
            token: token.map(str::to_string),
            prompt_token: false,
        }
    }

    fn no_prompt(_: &str) -> Result<String> {
        panic!("prompt should not be called");
    }

    #[test]
    fn test_set_new_requires_addr() {
        let dir = TempDir::new().unwrap();
        let mgr = test_manager(&dir);
        let err = run_context_set(&mgr, &set_args("dev", None, None), no_prompt).unwrap_err();
        assert_eq!(err.to_string(), "address is required");
    }

    #[test]
    fn test_set_creates_with_trimmed_token() {
        let dir = TempDir::new().unwrap();
        let mgr = test_manager(&dir);
        run_context_set(
            &mgr,
            &set_args("dev", Some("https://dev"), Some("  tok  ")),
            no_prompt,
        )
        .unwrap();

        assert_eq!(mgr.current().unwrap().address, "https://dev");
        assert_eq!(mgr.token("dev").unwrap(), "tok");
    }

    #[test]
    fn test_set_update_keeps_address() {
        let dir = TempDir::new().unwrap();
        let mgr = test_manager(&dir);
        run_context_set(&mgr, &set_args("dev", Some("https://dev"), None), no_prompt).unwrap();
        run_context_set(&mgr, &set_args("dev", None, Some("new")), no_prompt).unwrap();

        assert_eq!(mgr.resolve("dev").unwrap().address, "https://dev");
        assert_eq!(mgr.token("dev").unwrap(), "new");
    }

    #[test]
    fn test_set_prompt_token() {
        let dir = TempDir::new().unwrap();
        let mgr = test_manager(&dir);
        let mut args = set_args("dev", Some("https://dev"), None);
        args.prompt_token = true;

        run_context_set(&mgr, &args, |prompt| {
            assert!(prompt.contains("dev"));
            Ok(" prompted \n".to_string())
        })
        .unwrap();

        assert_eq!(mgr.token("dev").unwrap(), "prompted");
    }

    #[test]
    fn test_set_prompt_rejects_empty() {
        let dir = TempDir::new().unwrap();
        let mgr = test_manager(&dir);
        let mut args = set_args("dev", Some("https://dev"), None);
        args.prompt_token = true;

        let err = run_context_set(&mgr, &args, |_| Ok("   ".to_string())).unwrap_err();
        assert_eq!(err.to_string(), "token cannot be empty");
        assert!(matches!(
            mgr.resolve("dev"),
            Err(ContextError::ContextNotFound(_))
        ));
    }

    #[test]
    fn test_dispatch_use_and_delete() {
        let dir = TempDir::new().unwrap();
        let mgr = test_manager(&dir);
        mgr.upsert("alpha", "https://a", "").unwrap();
        mgr.upsert("beta", "https://b", "tok").unwrap();

        run_context_command(
            &mgr,
            &CtxAction::Use(crate::cli::UseContextArgs {
                name: "beta".to_string(),
            }),
        )
        .unwrap();
        assert_eq!(mgr.current().unwrap().name, "beta");

        run_context_command(
            &mgr,
            &CtxAction::Delete(crate::cli::DeleteContextArgs {
                name: "beta".to_string(),
            }),
        )
        .unwrap();
        assert_eq!(mgr.current().unwrap().name, "alpha");
        assert!(mgr.secrets().is_empty());
    }

    #[test]
    fn test_dispatch_show_missing_errors() {
        let dir = TempDir::new().unwrap();
        let mgr = test_manager(&dir);
        let result = run_context_command(
            &mgr,
            &CtxAction::Show(crate::cli::ShowContextArgs {
                name: Some("missing".to_string()),
            }),
        );
        assert!(matches!(result, Err(ContextError::ContextNotFound(_))));
    }
}
