//! Hook CLI commands.

use clap::Args;

use tabletmgr_core::error::AppError;
use tabletmgr_core::traits::directory::NodeDirectory;
use tabletmgr_core::types::hook::Hook;
use tabletmgr_topo::keys;

use super::CommandContext;
use crate::output::{self, OutputFormat};

/// Arguments shared by the hook commands
#[derive(Debug, Args)]
pub struct HookArgs {
    /// Tablet record path or `cell-uid` alias
    pub tablet: String,
    /// Name of the hook to run
    pub name: String,
    /// Hook parameter as `key=value` (repeatable)
    #[arg(short, long = "param", value_parser = parse_param)]
    pub params: Vec<(String, String)>,
}

impl HookArgs {
    fn hook(&self) -> Hook {
        self.params
            .iter()
            .fold(Hook::new(self.name.clone()), |hook, (key, value)| {
                hook.with_parameter(key.clone(), value.clone())
            })
    }
}

/// Run a hook and print its result
pub async fn execute(
    args: &HookArgs,
    context: &CommandContext,
    format: OutputFormat,
) -> Result<(), AppError> {
    let tablet_path = keys::resolve_tablet_ref(&args.tablet)?;
    let result = context
        .wrangler
        .execute_hook(&tablet_path, &args.hook())
        .await?;
    output::print_hook_result(&result, format);
    Ok(())
}

/// Run a hook that may legitimately be missing on the tablet
pub async fn execute_optional(args: &HookArgs, context: &CommandContext) -> Result<(), AppError> {
    let hook = args.hook();
    hook.validate()?;

    let tablet_path = keys::resolve_tablet_ref(&args.tablet)?;
    let tablet = context.directory.resolve(&tablet_path).await?;
    context
        .wrangler
        .execute_optional_tablet_info_hook(&tablet, &hook)
        .await?;

    output::print_success(&format!("Hook {} finished on {}", hook.name, tablet));
    Ok(())
}

fn parse_param(raw: &str) -> Result<(String, String), String> {
    match raw.split_once('=') {
        Some((key, value)) if !key.is_empty() => Ok((key.to_string(), value.to_string())),
        _ => Err(format!("expected key=value, got '{raw}'")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_param() {
        assert_eq!(
            parse_param("dir=/backups").unwrap(),
            ("dir".to_string(), "/backups".to_string())
        );
        assert_eq!(parse_param("empty=").unwrap(), ("empty".to_string(), String::new()));
        assert!(parse_param("novalue").is_err());
        assert!(parse_param("=x").is_err());
    }

    #[test]
    fn test_hook_from_args() {
        let args = HookArgs {
            tablet: "nyc-1".to_string(),
            name: "backup".to_string(),
            params: vec![("dir".to_string(), "/b".to_string())],
        };
        let hook = args.hook();
        assert_eq!(hook.name, "backup");
        assert_eq!(hook.parameters.get("dir").map(String::as_str), Some("/b"));
    }
}
