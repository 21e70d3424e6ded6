//! `aclsnap interactive`: prompt for device, credentials, and ACL name.
//!
//! The prompts only gather answers; `connection_from_answers` turns them into
//! the same `ConnectionConfig` the non-interactive path builds.

use std::time::Duration;

use dialoguer::Input;
use secrecy::SecretString;

use aclsnap_core::{ConnectionConfig, Scheme, TlsVerification};

use crate::cli::{GlobalOpts, InteractiveArgs};
use crate::commands::export::{run_export, validate_acl_name};
use crate::commands::prompt_err;
use crate::config::{self, Defaults};
use crate::error::CliError;

/// What the operator typed.
#[derive(Debug)]
pub(crate) struct Answers {
    pub host: String,
    pub username: String,
    pub password: SecretString,
    pub acl_name: String,
}

pub async fn handle(args: InteractiveArgs, global: &GlobalOpts) -> Result<(), CliError> {
    let answers = prompt(global)?;
    validate_acl_name(&answers.acl_name)?;

    let cfg = config::load_config_or_default();
    let acl_name = answers.acl_name.clone();
    let connection = connection_from_answers(answers, &cfg.defaults, global)?;

    run_export(&connection, &acl_name, args.output, global).await
}

fn prompt(global: &GlobalOpts) -> Result<Answers, CliError> {
    let mut host = Input::<String>::new().with_prompt("Device host");
    if let Some(ref h) = global.host {
        host = host.default(h.clone());
    }
    let host = host.interact_text().map_err(prompt_err)?;

    let username: String = Input::new()
        .with_prompt("Username")
        .default(global.username.clone().unwrap_or_else(|| "admin".into()))
        .interact_text()
        .map_err(prompt_err)?;

    let password = rpassword::prompt_password("Password: ").map_err(prompt_err)?;

    let acl_name: String = Input::new()
        .with_prompt("ACL name")
        .interact_text()
        .map_err(prompt_err)?;

    Ok(Answers {
        host: host.trim().to_owned(),
        username: username.trim().to_owned(),
        password: SecretString::from(password),
        acl_name: acl_name.trim().to_owned(),
    })
}

/// Combine prompt answers with transport flags and `[defaults]`.
pub(crate) fn connection_from_answers(
    answers: Answers,
    defaults: &Defaults,
    global: &GlobalOpts,
) -> Result<ConnectionConfig, CliError> {
    if answers.host.is_empty() {
        return Err(CliError::NoHost {
            path: config::config_path().display().to_string(),
        });
    }

    let scheme = match global.transport {
        Some(arg) => Scheme::from(arg),
        None => aclsnap_config::parse_transport(&defaults.transport)?,
    };

    let tls = if global.insecure || defaults.insecure {
        TlsVerification::DangerAcceptInvalid
    } else {
        TlsVerification::SystemDefaults
    };

    Ok(ConnectionConfig {
        scheme,
        host: answers.host,
        port: global.port,
        username: answers.username,
        password: answers.password,
        enable_secret: global.enable_secret.clone().map(SecretString::from),
        tls,
        timeout: Duration::from_secs(global.timeout.unwrap_or(defaults.timeout)),
    })
}
